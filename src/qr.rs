//! QR encoding of the website URL and its half-block text rendering.

use qrcode::types::QrError as EncodeError;
use qrcode::{Color, EcLevel, QrCode};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QrError {
    #[error("{len} bytes is too long to encode as a QR code")]
    DataTooLong { len: usize },

    #[error("QR encoding failed: {0}")]
    Encode(String),
}

/// Encoded QR modules, without quiet zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl QrMatrix {
    /// Light modules drawn around the symbol in text form.
    pub const QUIET_ZONE: usize = 2;
    /// Narrowest border still used when the card is short on rows.
    pub const MIN_QUIET_ZONE: usize = 1;

    /// Encodes `data` verbatim, dropping to a lower error correction
    /// level before giving up on long inputs.
    pub fn encode(data: &str) -> Result<Self, QrError> {
        for level in [EcLevel::M, EcLevel::L] {
            match QrCode::with_error_correction_level(data.as_bytes(), level) {
                Ok(code) => return Ok(Self::from_code(&code)),
                Err(EncodeError::DataTooLong) => continue,
                Err(err) => return Err(QrError::Encode(err.to_string())),
            }
        }
        Err(QrError::DataTooLong { len: data.len() })
    }

    fn from_code(code: &QrCode) -> Self {
        let modules = code
            .to_colors()
            .into_iter()
            .map(|color| color == Color::Dark)
            .collect();
        Self {
            width: code.width(),
            modules,
        }
    }

    /// Modules per side.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Coordinates outside the symbol are light.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.modules[y * self.width + x]
    }

    /// Terminal cells needed by [`Self::half_block_lines`] as (columns, rows).
    pub fn text_size(&self, quiet_zone: usize) -> (u16, u16) {
        let side = self.width + 2 * quiet_zone;
        let cols = u16::try_from(side).unwrap_or(u16::MAX);
        let rows = u16::try_from(side.div_ceil(2)).unwrap_or(u16::MAX);
        (cols, rows)
    }

    /// One line per two module rows, using `▀ ▄ █` with dark as foreground.
    pub fn half_block_lines(&self, quiet_zone: usize) -> Vec<String> {
        let side = self.width + 2 * quiet_zone;
        let dark = |x: usize, y: usize| {
            x >= quiet_zone && y >= quiet_zone && self.is_dark(x - quiet_zone, y - quiet_zone)
        };

        (0..side)
            .step_by(2)
            .map(|y| {
                (0..side)
                    .map(|x| match (dark(x, y), dark(x, y + 1)) {
                        (true, true) => '█',
                        (true, false) => '▀',
                        (false, true) => '▄',
                        (false, false) => ' ',
                    })
                    .collect()
            })
            .collect()
    }
}
