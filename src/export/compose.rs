use image::imageops;
use image::{Rgba, RgbaImage};

use crate::export::{ExportError, ExportStage};

/// Stack `front` above `back` on a fresh canvas filled with `background`.
pub fn compose(
    front: &RgbaImage,
    back: &RgbaImage,
    background: Rgba<u8>,
) -> Result<RgbaImage, ExportError> {
    let width = front.width().max(back.width());
    let height = front
        .height()
        .checked_add(back.height())
        .ok_or_else(|| ExportError::failed(ExportStage::Compose, "composite is too tall"))?;
    if width == 0 || height == 0 {
        return Err(ExportError::failed(
            ExportStage::Compose,
            "both faces are empty",
        ));
    }

    let mut canvas = RgbaImage::from_pixel(width, height, background);
    imageops::overlay(&mut canvas, front, 0, 0);
    imageops::overlay(&mut canvas, back, 0, i64::from(front.height()));
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_is_max_width_and_summed_height() {
        let front = RgbaImage::from_pixel(40, 10, Rgba([255, 0, 0, 255]));
        let back = RgbaImage::from_pixel(30, 20, Rgba([0, 0, 255, 255]));
        let canvas = compose(&front, &back, Rgba([240, 240, 240, 255])).unwrap();

        assert_eq!(canvas.dimensions(), (40, 30));
        assert_eq!(*canvas.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
        assert_eq!(*canvas.get_pixel(0, 10), Rgba([0, 0, 255, 255]));
        // Narrower back face leaves the background visible.
        assert_eq!(*canvas.get_pixel(35, 15), Rgba([240, 240, 240, 255]));
    }

    #[test]
    fn transparent_pixels_show_background() {
        let front = RgbaImage::new(4, 4);
        let back = RgbaImage::new(4, 4);
        let canvas = compose(&front, &back, Rgba([240, 240, 240, 255])).unwrap();
        assert_eq!(*canvas.get_pixel(2, 6), Rgba([240, 240, 240, 255]));
    }
}
