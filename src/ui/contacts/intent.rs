use crate::card::CopyTarget;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CopyFeedbackIntent {
    /// Clipboard write succeeded; show feedback for `ticks`.
    Copied { target: CopyTarget, ticks: u16 },
    /// Clipboard write failed.
    Failed { target: CopyTarget },
    Tick,
}

impl Intent for CopyFeedbackIntent {}
