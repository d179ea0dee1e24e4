//! Cell buffer to RGBA pixels.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings, Metrics};
use image::{Rgba, RgbaImage};
use ratatui::buffer::Buffer;
use ratatui::style::Color;
use tracing::{debug, info, warn};

use crate::export::{ExportError, ExportStage, FaceSnapshot};

/// Cell size in pixels before scaling.
pub const CELL_WIDTH: u32 = 8;
pub const CELL_HEIGHT: u32 = 16;

const FALLBACK_FONTS: [&str; 6] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationMono-Regular.ttf",
    "/System/Library/Fonts/Menlo.ttc",
    "C:\\Windows\\Fonts\\consola.ttf",
];

/// Glyph source for text cells. Without a font, glyphs become coverage bars.
#[derive(Default)]
pub struct GlyphRasterizer {
    font: Option<Font>,
}

impl GlyphRasterizer {
    /// Load `font_path`, or the first system monospace font found.
    pub fn load(font_path: Option<&Path>) -> Self {
        let candidates: Vec<PathBuf> = match font_path {
            Some(path) => vec![path.to_path_buf()],
            None => FALLBACK_FONTS.iter().map(PathBuf::from).collect(),
        };

        for path in candidates {
            match load_font(&path) {
                Ok(font) => {
                    info!(path = %path.display(), "Loaded export font");
                    return Self { font: Some(font) };
                }
                Err(reason) => debug!(path = %path.display(), %reason, "Font unavailable"),
            }
        }

        warn!("No export font found, glyphs will be drawn as placeholders");
        Self::default()
    }

    fn glyph(&self, ch: char, px: f32) -> Option<(Metrics, Vec<u8>)> {
        let font = self.font.as_ref()?;
        if font.lookup_glyph_index(ch) == 0 {
            return None;
        }
        Some(font.rasterize(ch, px))
    }
}

fn load_font(path: &Path) -> Result<Font, String> {
    let data = fs::read(path).map_err(|e| e.to_string())?;
    Font::from_bytes(data, FontSettings::default()).map_err(|e| e.to_string())
}

/// Rasterize a face snapshot at `scale` pixels per base pixel.
///
/// Cells with a reset background stay fully transparent.
pub fn rasterize(
    snapshot: &FaceSnapshot,
    glyphs: &GlyphRasterizer,
    scale: u32,
) -> Result<RgbaImage, ExportError> {
    let buffer = &snapshot.buffer;
    let area = buffer.area;
    let cell_w = CELL_WIDTH * scale;
    let cell_h = CELL_HEIGHT * scale;
    let pixel_size = (area.width as u32)
        .checked_mul(cell_w)
        .zip((area.height as u32).checked_mul(cell_h));
    let Some((width, height)) = pixel_size.filter(|(w, h)| *w > 0 && *h > 0) else {
        return Err(ExportError::failed(
            ExportStage::Rasterize,
            format!("{} face has no drawable area", snapshot.face),
        ));
    };

    let mut image = RgbaImage::new(width, height);
    let px = cell_h as f32 * 0.75;
    let mut cache: HashMap<char, Option<(Metrics, Vec<u8>)>> = HashMap::new();

    for row in 0..area.height {
        for col in 0..area.width {
            let cell = &buffer[(area.x + col, area.y + row)];
            let origin = (col as u32 * cell_w, row as u32 * cell_h);
            let bg = color_rgba(cell.bg);
            let fg = color_rgba(cell.fg).unwrap_or(Rgba([0, 0, 0, 255]));

            if let Some(bg) = bg {
                fill(&mut image, origin.0, origin.1, cell_w, cell_h, bg);
            }

            let Some(ch) = cell.symbol().chars().next() else {
                continue;
            };
            match ch {
                ' ' => {}
                '█' => fill(&mut image, origin.0, origin.1, cell_w, cell_h, fg),
                '▀' => fill(&mut image, origin.0, origin.1, cell_w, cell_h / 2, fg),
                '▄' => fill(
                    &mut image,
                    origin.0,
                    origin.1 + cell_h / 2,
                    cell_w,
                    cell_h - cell_h / 2,
                    fg,
                ),
                _ => {
                    let glyph = cache.entry(ch).or_insert_with(|| glyphs.glyph(ch, px));
                    match glyph {
                        Some((metrics, coverage)) => {
                            draw_glyph(&mut image, origin, cell_h, metrics, coverage, fg)
                        }
                        None => fill(
                            &mut image,
                            origin.0 + cell_w / 4,
                            origin.1 + cell_h * 3 / 8,
                            cell_w / 2,
                            cell_h / 4,
                            fg,
                        ),
                    }
                }
            }
        }
    }

    Ok(image)
}

fn fill(image: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, color: Rgba<u8>) {
    let x_end = (x + w).min(image.width());
    let y_end = (y + h).min(image.height());
    for py in y..y_end {
        for px in x..x_end {
            image.put_pixel(px, py, color);
        }
    }
}

fn draw_glyph(
    image: &mut RgbaImage,
    origin: (u32, u32),
    cell_h: u32,
    metrics: &Metrics,
    coverage: &[u8],
    fg: Rgba<u8>,
) {
    let baseline = origin.1 as i64 + (cell_h as f32 * 0.78) as i64;
    let left = origin.0 as i64 + metrics.xmin as i64;
    let top = baseline - (metrics.height as i64 + metrics.ymin as i64);

    for gy in 0..metrics.height {
        for gx in 0..metrics.width {
            let alpha = coverage[gy * metrics.width + gx];
            if alpha == 0 {
                continue;
            }
            let x = left + gx as i64;
            let y = top + gy as i64;
            if x < 0 || y < 0 || x >= image.width() as i64 || y >= image.height() as i64 {
                continue;
            }
            let pixel = image.get_pixel_mut(x as u32, y as u32);
            *pixel = blend(*pixel, fg, alpha);
        }
    }
}

/// Source-over blend of `fg` at `coverage` onto `dst`.
fn blend(dst: Rgba<u8>, fg: Rgba<u8>, coverage: u8) -> Rgba<u8> {
    let a = (fg[3] as u32 * coverage as u32) / 255;
    let inv = 255 - a;
    let channel = |i: usize| ((fg[i] as u32 * a + dst[i] as u32 * inv) / 255) as u8;
    let alpha = (a + dst[3] as u32 * inv / 255).min(255) as u8;
    Rgba([channel(0), channel(1), channel(2), alpha])
}

/// Terminal color as opaque RGBA; `None` for the terminal default.
pub fn color_rgba(color: Color) -> Option<Rgba<u8>> {
    let rgb = match color {
        Color::Reset => return None,
        Color::Rgb(r, g, b) => [r, g, b],
        Color::Black => [0x00, 0x00, 0x00],
        Color::Red => [0x80, 0x00, 0x00],
        Color::Green => [0x00, 0x80, 0x00],
        Color::Yellow => [0x80, 0x80, 0x00],
        Color::Blue => [0x00, 0x00, 0x80],
        Color::Magenta => [0x80, 0x00, 0x80],
        Color::Cyan => [0x00, 0x80, 0x80],
        Color::Gray => [0xc0, 0xc0, 0xc0],
        Color::DarkGray => [0x80, 0x80, 0x80],
        Color::LightRed => [0xff, 0x00, 0x00],
        Color::LightGreen => [0x00, 0xff, 0x00],
        Color::LightYellow => [0xff, 0xff, 0x00],
        Color::LightBlue => [0x00, 0x00, 0xff],
        Color::LightMagenta => [0xff, 0x00, 0xff],
        Color::LightCyan => [0x00, 0xff, 0xff],
        Color::White => [0xff, 0xff, 0xff],
        Color::Indexed(index) => {
            let level = index.wrapping_mul(37);
            [level, level, level]
        }
    };
    Some(Rgba([rgb[0], rgb[1], rgb[2], 255]))
}

/// Pixel dimensions [`rasterize`] produces for `buffer`.
pub fn pixel_size(buffer: &Buffer, scale: u32) -> (u32, u32) {
    (
        buffer.area.width as u32 * CELL_WIDTH * scale,
        buffer.area.height as u32 * CELL_HEIGHT * scale,
    )
}
