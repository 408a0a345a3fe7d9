//! Search session state, mutated only through its methods

use std::collections::HashSet;
use crate::data::{DisplayMode, Profile};

/// One fetch the view layer has to run
///
/// `seq` increases with every issued fetch; a settling fetch whose `seq` has
/// been superseded is discarded, so the latest request always wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub page: u32,
    pub terms: Vec<String>,
}

/// State of the search page
///
/// Holds the live input text, the committed terms, the merged result set and
/// the paging/loading bookkeeping. A fresh session already carries a fetch
/// for the first, unfiltered page so the view populates on load.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSession {
    input: String,
    terms: Vec<String>,
    page: u32,
    profiles: Vec<Profile>,
    mode: DisplayMode,
    /// Sequence number of the fetch currently in flight, if any
    in_flight: Option<u64>,
    next_seq: u64,
    /// Most recently issued fetch, kept after it settles
    pending: Option<FetchRequest>,
}

impl Default for SearchSession {
    fn default() -> Self {
        let mut session = Self {
            input: String::new(),
            terms: Vec::new(),
            page: 1,
            profiles: Vec::new(),
            mode: DisplayMode::default(),
            in_flight: None,
            next_seq: 0,
            pending: None,
        };
        session.issue_fetch();
        session
    }
}

impl SearchSession {
    /// Update the live input text; never triggers a fetch
    pub fn set_input(&mut self, text: String) {
        self.input = text;
    }

    /// Commit the live input as a new search term
    ///
    /// Resets the page to 1, clears the result set and fetches the first
    /// page with the updated term list, just-added term included.
    pub fn commit_term(&mut self) {
        let term = std::mem::take(&mut self.input);
        self.terms.push(term);
        self.page = 1;
        self.profiles.clear();
        self.issue_fetch();
    }

    /// Remove the committed term at `index`
    ///
    /// Panics if `index` is out of range; that is a caller bug, not a user
    /// error. The page is kept and existing results stay displayed; the
    /// re-fetched page merges into them.
    pub fn remove_term(&mut self, index: usize) {
        self.terms.remove(index);
        self.issue_fetch();
    }

    /// Ask for the next page; ignored while a fetch is in flight
    pub fn load_more(&mut self) {
        if self.in_flight.is_some() {
            return;
        }
        self.page += 1;
        self.issue_fetch();
    }

    /// Switch between card grid and table; the result set is untouched
    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    /// Complete the fetch issued with `seq`
    ///
    /// `batch` is `None` when the fetch failed. Returns false when the fetch
    /// has been superseded by a newer one; the outcome is then discarded
    /// entirely, loading state included.
    pub fn settle(&mut self, seq: u64, batch: Option<Vec<Profile>>) -> bool {
        if self.in_flight != Some(seq) {
            return false;
        }
        self.in_flight = None;
        if let Some(batch) = batch {
            merge_profiles(&mut self.profiles, batch);
        }
        true
    }

    fn issue_fetch(&mut self) {
        self.next_seq += 1;
        let request = FetchRequest {
            seq: self.next_seq,
            page: self.page,
            terms: self.terms.clone(),
        };
        self.in_flight = Some(request.seq);
        self.pending = Some(request);
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// True from fetch issue to fetch settle
    pub fn loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Most recently issued fetch request
    pub fn pending(&self) -> Option<&FetchRequest> {
        self.pending.as_ref()
    }
}

/// Append `incoming` to `existing`, skipping identifiers already present
///
/// First-seen order is preserved; duplicates within `incoming` are dropped
/// too.
pub fn merge_profiles(existing: &mut Vec<Profile>, incoming: Vec<Profile>) {
    let mut seen: HashSet<String> = existing.iter().map(|p| p.id.clone()).collect();
    for profile in incoming {
        if seen.insert(profile.id.clone()) {
            existing.push(profile);
        }
    }
}
