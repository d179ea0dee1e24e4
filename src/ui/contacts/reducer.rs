use crate::ui::contacts::intent::CopyFeedbackIntent;
use crate::ui::contacts::state::CopyFeedbackState;
use crate::ui::mvi::Reducer;

pub struct CopyFeedbackReducer;

impl Reducer for CopyFeedbackReducer {
    type State = CopyFeedbackState;
    type Intent = CopyFeedbackIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CopyFeedbackIntent::Copied { target, ticks } => CopyFeedbackState::Copied {
                target,
                ticks_left: ticks.max(1),
            },
            CopyFeedbackIntent::Failed { .. } => CopyFeedbackState::Idle,
            CopyFeedbackIntent::Tick => match state {
                CopyFeedbackState::Copied { target, ticks_left } if ticks_left > 1 => {
                    CopyFeedbackState::Copied {
                        target,
                        ticks_left: ticks_left - 1,
                    }
                }
                _ => CopyFeedbackState::Idle,
            },
        }
    }
}
