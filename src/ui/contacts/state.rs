use crate::card::CopyTarget;
use crate::ui::mvi::UiState;

/// Only one target shows feedback at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CopyFeedbackState {
    #[default]
    Idle,
    Copied {
        target: CopyTarget,
        ticks_left: u16,
    },
}

impl UiState for CopyFeedbackState {}

impl CopyFeedbackState {
    pub fn just_copied(&self) -> Option<CopyTarget> {
        match self {
            CopyFeedbackState::Copied { target, .. } => Some(*target),
            CopyFeedbackState::Idle => None,
        }
    }

    pub fn is_copied(&self, target: CopyTarget) -> bool {
        self.just_copied() == Some(target)
    }
}
