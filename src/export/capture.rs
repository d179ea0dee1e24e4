use ratatui::buffer::Buffer;

use crate::card::view::FaceContext;
use crate::card::{CardContent, Face, FaceSurfaces, FaceTransform};
use crate::export::{ExportError, ExportStage};
use crate::ui::theme::Theme;

/// Off-screen render of one face, ready for rasterizing.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceSnapshot {
    pub face: Face,
    pub buffer: Buffer,
}

/// Both faces captured by one export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportJob {
    pub front: FaceSnapshot,
    pub back: FaceSnapshot,
}

/// Capture both mounted faces right-reading.
///
/// The back face rests rotated; the rotation is neutralized for the capture
/// and restored on every exit path.
pub fn capture_faces(
    surfaces: &mut FaceSurfaces,
    content: Option<&CardContent>,
    theme: Theme,
    ctx: &FaceContext<'_>,
) -> Result<ExportJob, ExportError> {
    let front_surface = surfaces
        .get(Face::Front)
        .ok_or(ExportError::MissingSurface { face: Face::Front })?;
    if !surfaces.is_mounted(Face::Back) {
        return Err(ExportError::MissingSurface { face: Face::Back });
    }
    let content = content
        .ok_or_else(|| ExportError::failed(ExportStage::Capture, "card content is not loaded"))?;

    let front = front_surface
        .render(content, theme, ctx, FaceTransform::Identity)
        .ok_or_else(|| ExportError::failed(ExportStage::Capture, "front face has zero size"))?;

    let back_surface = surfaces
        .get_mut(Face::Back)
        .ok_or(ExportError::MissingSurface { face: Face::Back })?;
    let resting = back_surface.transform();
    let mut back_surface = scopeguard::guard(back_surface, move |surface| {
        surface.set_transform(resting);
    });
    back_surface.set_transform(FaceTransform::Identity);

    let back = back_surface
        .render(content, theme, ctx, FaceTransform::Identity)
        .ok_or_else(|| ExportError::failed(ExportStage::Capture, "back face has zero size"))?;

    Ok(ExportJob {
        front: FaceSnapshot {
            face: Face::Front,
            buffer: front,
        },
        back: FaceSnapshot {
            face: Face::Back,
            buffer: back,
        },
    })
}
