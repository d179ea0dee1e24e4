//! The person shown on the card and where their record is loaded from.

mod state;
mod store;
mod types;

pub use state::{ProfileIntent, ProfileReducer, ProfileState};
pub use store::{ProfileError, ProfileSource, ProfileStore};
pub use types::Profile;
