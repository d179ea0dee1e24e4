use thiserror::Error;

use crate::card::Face;

/// Pipeline step an export failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStage {
    Capture,
    Rasterize,
    Compose,
    Encode,
    Save,
}

impl std::fmt::Display for ExportStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExportStage::Capture => "capture",
            ExportStage::Rasterize => "rasterize",
            ExportStage::Compose => "compose",
            ExportStage::Encode => "encode",
            ExportStage::Save => "save",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// A face is not mounted, so there is nothing to capture.
    #[error("The {face} face is not mounted")]
    MissingSurface { face: Face },

    #[error("Export failed during {stage}: {reason}")]
    ExportFailed { stage: ExportStage, reason: String },
}

impl ExportError {
    pub fn failed(stage: ExportStage, reason: impl std::fmt::Display) -> Self {
        ExportError::ExportFailed {
            stage,
            reason: reason.to_string(),
        }
    }

    /// Short text for the notification.
    pub fn user_message(&self) -> String {
        match self {
            ExportError::MissingSurface { face } => {
                format!("Export failed: the {face} face is not ready")
            }
            ExportError::ExportFailed { stage, .. } => {
                format!("Export failed ({stage} step)")
            }
        }
    }
}
