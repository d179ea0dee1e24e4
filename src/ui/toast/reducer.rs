use crate::ui::mvi::Reducer;
use crate::ui::toast::intent::ToastIntent;
use crate::ui::toast::state::ToastState;

pub struct ToastReducer;

impl Reducer for ToastReducer {
    type State = ToastState;
    type Intent = ToastIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ToastIntent::Show {
                message,
                level,
                ticks,
            } => ToastState::Visible {
                message,
                level,
                ticks_left: ticks.max(1),
            },
            ToastIntent::Tick => match state {
                ToastState::Visible {
                    message,
                    level,
                    ticks_left,
                } if ticks_left > 1 => ToastState::Visible {
                    message,
                    level,
                    ticks_left: ticks_left - 1,
                },
                _ => ToastState::Hidden,
            },
            ToastIntent::Dismiss => ToastState::Hidden,
        }
    }
}
