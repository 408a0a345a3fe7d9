#[macro_use]
pub mod settings;
mod loadservice;
mod components;

use std::rc::Rc;
use gloo_console::{info, debug, error};
use yew::prelude::*;
use yew::events::MouseEvent;
use roster_model::{DisplayMode, FetchRequest, Profile, SearchSession};

use loadservice::ProfileLoadService;
use components::*;

type Result<T, E = Box<dyn std::error::Error>> = std::result::Result<T, E>;


pub enum AppAction {
    /// Live input text edited
    InputChanged(String),
    /// Commit the live input as a new search term
    CommitTerm,
    /// Remove the committed term at the given position
    RemoveTerm(usize),
    /// Ask for the next result page
    LoadMore,
    /// Switch between card grid and table
    SetDisplayMode(DisplayMode),
    /// A fetch completed; `profiles` is `None` on failure
    FetchSettled { seq: u64, profiles: Option<Vec<Profile>> },
}

#[derive(Clone, Default, PartialEq)]
pub struct AppState {
    session: SearchSession,
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(mut self: Rc<Self>, action: AppAction) -> Rc<Self> {
        let session = &mut Rc::make_mut(&mut self).session;
        match action {
            AppAction::InputChanged(text) => session.set_input(text),
            AppAction::CommitTerm => {
                info!(format!("commit search term: {:?}", session.input()));
                session.commit_term();
            }
            AppAction::RemoveTerm(index) => {
                info!(format!("remove search term #{}", index));
                session.remove_term(index);
            }
            AppAction::LoadMore => session.load_more(),
            AppAction::SetDisplayMode(mode) => session.set_mode(mode),
            AppAction::FetchSettled { seq, profiles } => {
                if !session.settle(seq, profiles) {
                    debug!(format!("dropped stale fetch result (seq {})", seq));
                }
            }
        }
        self
    }
}


pub type AppContext = UseReducerHandle<AppState>;


#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(AppState::default);

    // Run each newly issued fetch; its sequence number keys the effect
    use_effect_with(state.session.pending().cloned(), {
        let state = state.clone();
        move |pending: &Option<FetchRequest>| {
            if let Some(request) = pending.clone() {
                let state = state.clone();
                yew::platform::spawn_local(async move {
                    let loader = ProfileLoadService::default();
                    let profiles = match loader.fetch_profiles(request.page, &request.terms).await {
                        Ok(profiles) => Some(profiles),
                        Err(e) => {
                            error!(format!("failed to fetch profiles: {}", e));
                            None
                        }
                    };
                    state.dispatch(AppAction::FetchSettled { seq: request.seq, profiles });
                });
            }
        }
    });

    let on_load_more = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(AppAction::LoadMore))
    };

    let session = &state.session;

    html! {
        <ContextProvider<AppContext> context={state.clone()}>
            <div id="roster">
                <div id="toolbar">
                    <SearchBar value={session.input().to_string()} terms={session.terms().to_vec()} />
                    { html_mode_toggle(&state) }
                </div>
                { html_results(session) }
                <button id="load-more" disabled={session.loading()} onclick={on_load_more}>
                    {"Load more"}
                </button>
            </div>
        </ContextProvider<AppContext>>
    }
}


/// Return the two view-mode toggle buttons, current mode highlighted
fn html_mode_toggle(state: &AppContext) -> Html {
    let mode = state.session.mode();
    let button = |label: &'static str, target: DisplayMode| {
        let state = state.clone();
        let onclick = move |_: MouseEvent| state.dispatch(AppAction::SetDisplayMode(target));
        let class = classes!("mode-toggle", (mode == target).then_some("active"));
        html! {
            <button type="button" {class} {onclick}>{ label }</button>
        }
    };
    html! {
        <div id="mode-toggles">
            { button("Table", DisplayMode::Table) }
            { button("Cards", DisplayMode::Card) }
        </div>
    }
}

/// Return the result set, rendered for the current display mode
fn html_results(session: &SearchSession) -> Html {
    let profiles = session.profiles();
    match session.mode() {
        DisplayMode::Card => html! {
            <div id="profile-grid">
                { for profiles.iter().map(|profile| html! {
                    <ProfileCard key={profile.id.clone()} profile={profile.clone()} />
                }) }
            </div>
        },
        DisplayMode::Table => html! {
            <ProfileTable profiles={profiles.to_vec()} />
        },
    }
}
