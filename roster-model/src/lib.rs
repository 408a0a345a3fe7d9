//! Profile records and the search session state of the roster viewer
//!
//! The crate is free of browser types so the session logic can be exercised
//! on any target. The web crate owns rendering and network I/O; everything it
//! decides *with* lives here.

pub mod data;
mod listing;
mod session;

pub use data::{DisplayMode, Profile};
pub use listing::{parse_listing, ListingError, ListingRequest};
pub use session::{merge_profiles, FetchRequest, SearchSession};
