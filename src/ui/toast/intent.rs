use crate::ui::mvi::Intent;
use crate::ui::toast::ToastLevel;

#[derive(Debug, Clone)]
pub enum ToastIntent {
    /// Replace any visible notification.
    Show {
        message: String,
        level: ToastLevel,
        ticks: u16,
    },
    Tick,
    Dismiss,
}

impl Intent for ToastIntent {}
