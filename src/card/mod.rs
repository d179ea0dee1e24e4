//! The card: its faces, flip state and interactive children.

mod action;
mod face;
mod flip;
pub mod view;

use std::sync::Arc;

pub use action::{CardAction, CopyTarget};
pub use face::{Face, FaceSurface, FaceSurfaces, FaceTransform};
pub use flip::{FlipIntent, FlipReducer, FlipState, FlipTransition};

use crate::profile::Profile;
use crate::qr::{QrError, QrMatrix};

/// Everything the faces render, derived once per loaded profile.
#[derive(Debug, Clone, PartialEq)]
pub struct CardContent {
    pub profile: Arc<Profile>,
    pub qr: Result<QrMatrix, QrError>,
}

impl CardContent {
    pub fn new(profile: Arc<Profile>) -> Self {
        let qr = QrMatrix::encode(profile.website.as_str());
        if let Err(err) = &qr {
            tracing::warn!(error = %err, "Website cannot be shown as a QR code");
        }
        Self { profile, qr }
    }
}
