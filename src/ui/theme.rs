use ratatui::style::Color;
use serde::{Deserialize, Serialize};

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);

/// Card color scheme.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// Every color the card renderer needs, for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub face_bg: Color,
    pub back_bg: Color,
    pub face_fg: Color,
    pub accent: Color,
    pub muted: Color,
    pub link: Color,
    pub border: Color,
    pub button_bg: Color,
    pub success: Color,
    pub qr_fg: Color,
    pub qr_bg: Color,
}

const DARK: ThemeTokens = ThemeTokens {
    face_bg: Color::Rgb(0x4c, 0x57, 0xa9),
    back_bg: Color::Rgb(0x3f, 0x4a, 0x96),
    face_fg: Color::Rgb(0xff, 0xff, 0xff),
    accent: Color::Rgb(0xd5, 0xd9, 0xff),
    muted: Color::Rgb(0xb3, 0xba, 0xff),
    link: Color::Rgb(0x9f, 0xae, 0xff),
    border: Color::Rgb(0x6a, 0x73, 0xd6),
    button_bg: Color::Rgb(0x56, 0x67, 0xc9),
    success: Color::Rgb(0x22, 0xc5, 0x5e),
    qr_fg: Color::Rgb(0x1a, 0x1f, 0x4d),
    qr_bg: Color::Rgb(0xff, 0xff, 0xff),
};

const LIGHT: ThemeTokens = ThemeTokens {
    face_bg: Color::Rgb(0xfa, 0xfa, 0xff),
    back_bg: Color::Rgb(0xee, 0xf0, 0xfb),
    face_fg: Color::Rgb(0x1f, 0x23, 0x3d),
    accent: Color::Rgb(0x4c, 0x57, 0xa9),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    link: Color::Rgb(0x35, 0x45, 0xb5),
    border: Color::Rgb(0xc7, 0xcc, 0xf0),
    button_bg: Color::Rgb(0xd5, 0xd9, 0xff),
    success: Color::Rgb(0x16, 0xa3, 0x4a),
    qr_fg: Color::Rgb(0x00, 0x00, 0x00),
    qr_bg: Color::Rgb(0xff, 0xff, 0xff),
};

impl Theme {
    pub const fn tokens(self) -> ThemeTokens {
        match self {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn qr_colors_keep_contrast_in_every_theme() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.tokens().qr_fg, theme.tokens().qr_bg);
        }
    }
}
