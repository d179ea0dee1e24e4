use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, ConfigError};
use crate::ui::theme::Theme;

#[derive(Parser, Debug)]
#[command(name = "bizcard", version, about = "Interactive two-sided business card")]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (default: <config dir>/bizcard/config.toml)")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Profile source: a JSON file path or an http(s) URL")]
    pub profile: Option<String>,
    #[arg(long, global = true, value_enum, help = "Start in this theme")]
    pub theme: Option<Theme>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Export both faces to a PNG and print its path
    Export {
        #[arg(long, help = "Output directory")]
        out: Option<PathBuf>,
    },
    /// Shorten a URL (default: the card's page URL) and print the short link
    Shorten { url: Option<String> },
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(source) = &self.profile {
            config.profile.source = source.clone();
        }
        if let Some(theme) = self.theme {
            config.card.theme = theme;
        }
        if let Some(Commands::Export { out: Some(dir) }) = &self.command {
            config.export.directory = Some(dir.clone());
        }
    }
}
