use std::sync::Arc;

use crate::profile::Profile;
use crate::ui::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProfileState {
    #[default]
    Loading,
    Loaded(Arc<Profile>),
    Failed {
        message: String,
    },
}

impl UiState for ProfileState {}

impl ProfileState {
    pub fn profile(&self) -> Option<&Arc<Profile>> {
        match self {
            ProfileState::Loaded(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ProfileState::Loading)
    }
}

#[derive(Debug, Clone)]
pub enum ProfileIntent {
    /// A (re)load was started.
    Reload,
    Loaded(Arc<Profile>),
    Failed { message: String },
}

impl Intent for ProfileIntent {}

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // A loaded profile is immutable for the session.
            ProfileIntent::Reload => match state {
                ProfileState::Loaded(profile) => ProfileState::Loaded(profile),
                _ => ProfileState::Loading,
            },
            ProfileIntent::Loaded(profile) => match state {
                ProfileState::Loaded(existing) => ProfileState::Loaded(existing),
                _ => ProfileState::Loaded(profile),
            },
            ProfileIntent::Failed { message } => match state {
                ProfileState::Loaded(existing) => ProfileState::Loaded(existing),
                _ => ProfileState::Failed { message },
            },
        }
    }
}
