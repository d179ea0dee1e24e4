//! Background services built once from config and shared by the TUI worker
//! and the headless subcommands.

use std::sync::Arc;

use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::export::{CardExporter, ExportSettings, GlyphRasterizer};
use crate::profile::{ProfileError, ProfileStore};
use crate::shortlink::{ShortLinkService, ShortenError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Shortener(#[from] ShortenError),
}

pub struct Services {
    pub profile: ProfileStore,
    pub shortener: ShortLinkService,
    pub exporter: CardExporter,
}

impl Services {
    pub fn from_config(config: &Config) -> Result<Arc<Self>, ServiceError> {
        let settings = ExportSettings::from_config(&config.export)?;
        let glyphs = GlyphRasterizer::load(config.export.font_path.as_deref());
        Ok(Arc::new(Self {
            profile: ProfileStore::new(&config.profile)?,
            shortener: ShortLinkService::new(&config.shortener)?,
            exporter: CardExporter::new(settings, glyphs),
        }))
    }
}
