//! Composite PNG export of both card faces.
//!
//! The pipeline runs Capture → Rasterize → Compose → Encode → Save. Capture is
//! synchronous and borrows the mounted surfaces; everything after it works on
//! owned snapshots, so overlapping exports never share buffers.

mod capture;
mod compose;
mod error;
pub mod raster;

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::{ImageFormat, Rgba, RgbaImage};
use uuid::Uuid;

pub use capture::{capture_faces, ExportJob, FaceSnapshot};
pub use compose::compose;
pub use error::{ExportError, ExportStage};
pub use raster::GlyphRasterizer;

use crate::card::view::FaceContext;
use crate::card::{CardContent, FaceSurfaces};
use crate::config::{parse_hex_color, ConfigError, ExportConfig};
use crate::ui::theme::Theme;

/// Resolved export settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    pub directory: PathBuf,
    pub file_name: String,
    pub scale: u32,
    pub background: Rgba<u8>,
}

impl ExportSettings {
    pub fn from_config(config: &ExportConfig) -> Result<Self, ConfigError> {
        let [r, g, b] = parse_hex_color(&config.background)?;
        Ok(Self {
            directory: config.output_dir(),
            file_name: config.file_name.clone(),
            scale: config.scale,
            background: Rgba([r, g, b, 255]),
        })
    }

    pub fn target_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

pub struct CardExporter {
    settings: ExportSettings,
    glyphs: Arc<GlyphRasterizer>,
}

impl CardExporter {
    pub fn new(settings: ExportSettings, glyphs: GlyphRasterizer) -> Self {
        Self {
            settings,
            glyphs: Arc::new(glyphs),
        }
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Rasterize, compose, encode and save a captured job.
    pub async fn export(&self, job: ExportJob) -> Result<PathBuf, ExportError> {
        let scale = self.settings.scale;
        tracing::debug!(
            front = ?raster::pixel_size(&job.front.buffer, scale),
            back = ?raster::pixel_size(&job.back.buffer, scale),
            "Rasterizing faces"
        );

        let (front, back) = tokio::join!(
            self.rasterize_blocking(job.front),
            self.rasterize_blocking(job.back)
        );
        let (front, back) = (front?, back?);

        let background = self.settings.background;
        let directory = self.settings.directory.clone();
        let file_name = self.settings.file_name.clone();
        let path = tokio::task::spawn_blocking(move || {
            let canvas = compose(&front, &back, background)?;
            let bytes = encode_png(&canvas)?;
            write_artifact(&directory, &file_name, &bytes)
        })
        .await
        .map_err(|err| ExportError::failed(ExportStage::Save, err))??;

        tracing::info!(path = %path.display(), "Card exported");
        Ok(path)
    }

    async fn rasterize_blocking(&self, snapshot: FaceSnapshot) -> Result<RgbaImage, ExportError> {
        let glyphs = Arc::clone(&self.glyphs);
        let scale = self.settings.scale;
        tokio::task::spawn_blocking(move || raster::rasterize(&snapshot, &glyphs, scale))
            .await
            .map_err(|err| ExportError::failed(ExportStage::Rasterize, err))?
    }
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|err| ExportError::failed(ExportStage::Encode, err))?;
    Ok(bytes)
}

/// Write `bytes` to `directory/file_name` through a private temporary file.
///
/// The final rename is atomic; a failed write leaves no file behind.
pub fn write_artifact(
    directory: &Path,
    file_name: &str,
    bytes: &[u8],
) -> Result<PathBuf, ExportError> {
    let save_error = |err: std::io::Error| ExportError::failed(ExportStage::Save, err);

    std::fs::create_dir_all(directory).map_err(save_error)?;
    let target = directory.join(file_name);
    let temp = directory.join(format!(".{}.{}.part", file_name, Uuid::new_v4()));

    let temp = scopeguard::guard(temp, |path| {
        let _ = std::fs::remove_file(path);
    });
    std::fs::write(&*temp, bytes).map_err(save_error)?;
    std::fs::rename(&*temp, &target).map_err(save_error)?;
    // Renamed away; nothing left to clean up.
    let _ = scopeguard::ScopeGuard::into_inner(temp);

    Ok(target)
}

/// Export a card outside the TUI: mount fresh surfaces, capture, export.
pub async fn export_content(
    exporter: &CardExporter,
    content: &CardContent,
    theme: Theme,
    face_size: (u16, u16),
) -> Result<PathBuf, ExportError> {
    let mut surfaces = FaceSurfaces::default();
    surfaces.mount(face_size.0, face_size.1);
    let job = capture_faces(&mut surfaces, Some(content), theme, &FaceContext::default())?;
    exporter.export(job).await
}
