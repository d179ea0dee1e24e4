use bizcard::config::{parse_hex_color, Config, ConfigError};
use bizcard::ui::theme::Theme;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

/// Config::default() matches the documented defaults.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.card.theme, Theme::Dark);
    assert_eq!(config.card.page_url, None);
    assert_eq!((config.card.face_width, config.card.face_height), (78, 24));

    assert!(config.profile.source.ends_with("data.json"));
    assert_eq!(config.profile.timeout_seconds, 10);

    assert_eq!(config.shortener.endpoint, "https://tinyurl.com/api-create.php");
    assert_eq!(config.shortener.query_param, "url");
    assert_eq!(config.shortener.timeout_seconds, 10);

    assert_eq!(config.export.file_name, "business-card.png");
    assert_eq!(config.export.scale, 2);
    assert_eq!(config.export.background, "#f0f0f0");

    assert!(config.effects.bell);
    assert!(config.effects.sound_command.is_empty());
    assert!(config.clipboard.osc52_fallback);

    assert_eq!(config.ui.tick_rate(), Duration::from_millis(100));
    assert_eq!(config.ui.ticks_for(config.ui.copy_feedback_ms), 15);
    assert_eq!(config.ui.ticks_for(config.ui.toast_ms), 30);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("bizcard/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(config.export.scale, 2);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = write_config(
        r#"
[card]
theme = "light"
page_url = "https://cards.example/alex"

[export]
scale = 3
directory = "/tmp/cards"

[effects]
sound_command = ["paplay", "flip.wav"]
"#,
    );
    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.card.theme, Theme::Light);
    assert_eq!(config.card.page_url.as_deref(), Some("https://cards.example/alex"));
    assert_eq!(config.card.face_width, 78);
    assert_eq!(config.export.scale, 3);
    assert_eq!(config.export.output_dir(), PathBuf::from("/tmp/cards"));
    assert_eq!(config.export.file_name, "business-card.png");
    assert_eq!(config.effects.sound_command, vec!["paplay", "flip.wav"]);
    assert_eq!(config.shortener.query_param, "url");
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let (_dir, path) = write_config("[card\ntheme = ");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_unknown_theme_is_a_parse_error() {
    let (_dir, path) = write_config("[card]\ntheme = \"sepia\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_export_scale_below_two_is_rejected() {
    let (_dir, path) = write_config("[export]\nscale = 1\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_invalid_shortener_endpoint_is_rejected() {
    let (_dir, path) = write_config("[shortener]\nendpoint = \"not a url\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("not a valid URL"));
}

#[test]
fn test_tiny_face_is_rejected() {
    let (_dir, path) = write_config("[card]\nface_width = 20\nface_height = 8\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_file_name_with_separator_is_rejected() {
    let (_dir, path) = write_config("[export]\nfile_name = \"../card.png\"\n");
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_background_color_parsing() {
    assert_eq!(parse_hex_color("#f0f0f0").unwrap(), [0xf0, 0xf0, 0xf0]);
    assert_eq!(parse_hex_color("#1A2b3C").unwrap(), [0x1a, 0x2b, 0x3c]);
    assert!(parse_hex_color("f0f0f0").is_err());
    assert!(parse_hex_color("#fff").is_err());
    assert!(parse_hex_color("#gg0000").is_err());

    let (_dir, path) = write_config("[export]\nbackground = \"white\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}
