use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::ui::theme::Theme;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub card: CardConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub shortener: ShortenerConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub effects: EffectsConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// How the card itself looks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardConfig {
    /// Theme shown at startup.
    #[serde(default)]
    pub theme: Theme,
    /// Public address of this card, used for short links.
    /// Falls back to the profile's website when unset.
    #[serde(default)]
    pub page_url: Option<String>,
    /// Face width in terminal cells (default: 78).
    #[serde(default = "default_face_width")]
    pub face_width: u16,
    /// Face height in terminal cells (default: 24).
    #[serde(default = "default_face_height")]
    pub face_height: u16,
}

/// Where the profile document comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Local path or `http(s)://` URL of the profile JSON.
    #[serde(default = "default_profile_source")]
    pub source: String,
    /// Timeout for remote fetches in seconds (default: 10).
    #[serde(default = "default_request_timeout")]
    pub timeout_seconds: u64,
}

/// External URL shortening endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenerConfig {
    #[serde(default = "default_shortener_endpoint")]
    pub endpoint: String,
    /// Query parameter carrying the long URL.
    #[serde(default = "default_shortener_param")]
    pub query_param: String,
    #[serde(default = "default_request_timeout")]
    pub timeout_seconds: u64,
}

/// Composite image export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Output directory. Defaults to the user's download directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
    #[serde(default = "default_export_file_name")]
    pub file_name: String,
    /// Pixel multiplier applied to every cell (2-8).
    #[serde(default = "default_export_scale")]
    pub scale: u32,
    /// Canvas fill as `#rrggbb`.
    #[serde(default = "default_export_background")]
    pub background: String,
    /// TrueType font used for glyphs. System fonts are tried when unset.
    #[serde(default)]
    pub font_path: Option<PathBuf>,
}

/// Flip side effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectsConfig {
    /// Ring the terminal bell on flip when no sound command is set.
    #[serde(default = "default_true")]
    pub bell: bool,
    /// Command spawned to play the flip cue, e.g. `["paplay", "flip.wav"]`.
    #[serde(default)]
    pub sound_command: Vec<String>,
    /// Haptic pulse length in milliseconds.
    #[serde(default = "default_haptic_ms")]
    pub haptic_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipboardConfig {
    /// Fall back to the OSC 52 escape when no system clipboard is reachable.
    #[serde(default = "default_true")]
    pub osc52_fallback: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// How long "Copied" feedback stays visible.
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,
    /// How long a notification stays visible.
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
}

fn default_face_width() -> u16 {
    78
}

fn default_face_height() -> u16 {
    24
}

fn default_profile_source() -> String {
    let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config_dir
        .join("bizcard")
        .join("data.json")
        .to_string_lossy()
        .into_owned()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_shortener_endpoint() -> String {
    "https://tinyurl.com/api-create.php".to_string()
}

fn default_shortener_param() -> String {
    "url".to_string()
}

fn default_export_file_name() -> String {
    "business-card.png".to_string()
}

fn default_export_scale() -> u32 {
    2
}

fn default_export_background() -> String {
    "#f0f0f0".to_string()
}

fn default_true() -> bool {
    true
}

fn default_haptic_ms() -> u64 {
    50
}

fn default_tick_ms() -> u64 {
    100
}

fn default_copy_feedback_ms() -> u64 {
    1500
}

fn default_toast_ms() -> u64 {
    3000
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            page_url: None,
            face_width: default_face_width(),
            face_height: default_face_height(),
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            source: default_profile_source(),
            timeout_seconds: default_request_timeout(),
        }
    }
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_shortener_endpoint(),
            query_param: default_shortener_param(),
            timeout_seconds: default_request_timeout(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: default_export_file_name(),
            scale: default_export_scale(),
            background: default_export_background(),
            font_path: None,
        }
    }
}

impl ExportConfig {
    /// Resolved output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.directory
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            bell: true,
            sound_command: Vec::new(),
            haptic_ms: default_haptic_ms(),
        }
    }
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            osc52_fallback: true,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            copy_feedback_ms: default_copy_feedback_ms(),
            toast_ms: default_toast_ms(),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    /// Number of ticks covering `ms`, at least one.
    pub fn ticks_for(&self, ms: u64) -> u16 {
        let ticks = ms.div_ceil(self.tick_ms.max(1));
        ticks.clamp(1, u16::MAX as u64) as u16
    }
}
