use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ToastState {
    #[default]
    Hidden,
    Visible {
        message: String,
        level: ToastLevel,
        ticks_left: u16,
    },
}

impl UiState for ToastState {}

impl ToastState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Visible { message, .. } => Some(message),
            Self::Hidden => None,
        }
    }

    pub fn level(&self) -> Option<ToastLevel> {
        match self {
            Self::Visible { level, .. } => Some(*level),
            Self::Hidden => None,
        }
    }
}
