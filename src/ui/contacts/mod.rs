//! "Just copied" feedback for the back face's copy actions.

mod intent;
mod reducer;
mod state;

pub use intent::CopyFeedbackIntent;
pub use reducer::CopyFeedbackReducer;
pub use state::CopyFeedbackState;
