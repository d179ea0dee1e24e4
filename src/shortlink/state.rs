use crate::ui::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLinkResult {
    pub long_url: String,
    pub short_url: String,
}

/// At most one short link exists at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ShortLinkState {
    #[default]
    Idle,
    Pending {
        long_url: String,
    },
    Ready(ShortLinkResult),
    Failed {
        long_url: String,
        message: String,
    },
}

impl UiState for ShortLinkState {}

impl ShortLinkState {
    pub fn short_url(&self) -> Option<&str> {
        match self {
            ShortLinkState::Ready(result) => Some(&result.short_url),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ShortLinkState::Pending { .. })
    }
}

#[derive(Debug, Clone)]
pub enum ShortLinkIntent {
    Requested { long_url: String },
    Succeeded { long_url: String, short_url: String },
    Failed { long_url: String, message: String },
}

impl Intent for ShortLinkIntent {}

pub struct ShortLinkReducer;

impl Reducer for ShortLinkReducer {
    type State = ShortLinkState;
    type Intent = ShortLinkIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        // Each new attempt or completion replaces whatever was there.
        match intent {
            ShortLinkIntent::Requested { long_url } => ShortLinkState::Pending { long_url },
            ShortLinkIntent::Succeeded {
                long_url,
                short_url,
            } => ShortLinkState::Ready(ShortLinkResult {
                long_url,
                short_url,
            }),
            ShortLinkIntent::Failed { long_url, message } => {
                ShortLinkState::Failed { long_url, message }
            }
        }
    }
}
