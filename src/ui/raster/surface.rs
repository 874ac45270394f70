// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/raster/surface.rs
//
// Capture surface backed by a decoded image.

use image::{DynamicImage, GenericImageView};

use crate::app::host::{BitmapCapture, Snapshot};
use crate::domain::geometry::{Bounds, Rect, SelectionRect};
use crate::error::{OverlayError, OverlayResult};

/// The content beneath the mask, as pixels.
pub struct ImageSurface {
    image: DynamicImage,
    /// Pixels per container unit.
    scale: f32,
}

impl ImageSurface {
    pub fn new(image: DynamicImage, scale: f32) -> Self {
        Self {
            image,
            scale: if scale > 0.0 { scale } else { 1.0 },
        }
    }

    /// Container bounds matching this surface.
    pub fn bounds(&self) -> Bounds {
        let (w, h) = self.image.dimensions();
        Bounds::new(w as f32 / self.scale, h as f32 / self.scale)
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}

impl BitmapCapture for ImageSurface {
    fn capture(&mut self, rect: SelectionRect) -> OverlayResult<Snapshot> {
        let scaled = Rect::new(
            rect.x * self.scale,
            rect.y * self.scale,
            rect.width * self.scale,
            rect.height * self.scale,
        );
        let (x, y, width, height) = scaled.as_pixel_rect().ok_or_else(|| {
            OverlayError::CaptureUnavailable(format!("nothing to capture in {rect:?}"))
        })?;

        let (img_w, img_h) = self.image.dimensions();
        if x + width > img_w || y + height > img_h {
            return Err(OverlayError::CaptureUnavailable(format!(
                "{rect:?} lies outside the {img_w}x{img_h} surface"
            )));
        }

        let crop = self.image.crop_imm(x, y, width, height).to_rgba8();
        log::debug!("Captured {width}x{height} at ({x}, {y})");
        Ok(Snapshot {
            width,
            height,
            pixels: crop.into_raw(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        #[allow(clippy::cast_possible_truncation)]
        let image = RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        DynamicImage::ImageRgba8(image)
    }

    #[test]
    fn crops_selected_pixels() {
        let mut surface = ImageSurface::new(gradient(200, 200), 1.0);
        let snapshot = surface
            .capture(Rect::new(10.0, 20.0, 30.0, 40.0))
            .expect("capture");

        assert_eq!((snapshot.width, snapshot.height), (30, 40));
        assert_eq!(snapshot.pixels.len(), 30 * 40 * 4);
        // First pixel is the source pixel at (10, 20).
        assert_eq!(&snapshot.pixels[..4], &[10, 20, 0, 255]);
    }

    #[test]
    fn capture_respects_scale() {
        let mut surface = ImageSurface::new(gradient(200, 200), 2.0);
        assert_eq!(surface.bounds(), Bounds::new(100.0, 100.0));

        let snapshot = surface
            .capture(Rect::new(5.0, 5.0, 30.0, 30.0))
            .expect("capture");
        assert_eq!((snapshot.width, snapshot.height), (60, 60));
        assert_eq!(&snapshot.pixels[..4], &[10, 10, 0, 255]);
    }

    #[test]
    fn out_of_range_capture_fails() {
        let mut surface = ImageSurface::new(gradient(100, 100), 1.0);
        assert!(matches!(
            surface.capture(Rect::new(80.0, 80.0, 40.0, 40.0)),
            Err(OverlayError::CaptureUnavailable(_))
        ));
        assert!(surface.capture(Rect::new(10.0, 10.0, 0.0, 10.0)).is_err());
    }
}
