//! Configuration loading and types.

mod loader;
mod types;

pub use loader::{parse_hex_color, ConfigError, MIN_FACE_HEIGHT, MIN_FACE_WIDTH};
pub use types::{
    CardConfig, ClipboardConfig, Config, EffectsConfig, ExportConfig, ProfileConfig,
    ShortenerConfig, UiConfig,
};
