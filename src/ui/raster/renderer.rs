// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/raster/renderer.rs
//
// Software renderer that paints the mask over a copy of the content.

use std::ops::Range;
use std::path::Path;

use image::{DynamicImage, Rgba, RgbaImage};

use crate::app::host::{Color, Renderer};
use crate::domain::geometry::{Bounds, Rect};

/// Renders into an RGBA buffer the size of the content image.
///
/// Drawing happens in container coordinates; `scale` is the number of
/// pixels per container unit.
pub struct RasterRenderer {
    canvas: RgbaImage,
    scale: f32,
}

impl RasterRenderer {
    pub fn new(content: &DynamicImage, scale: f32) -> Self {
        Self {
            canvas: content.to_rgba8(),
            scale: if scale > 0.0 { scale } else { 1.0 },
        }
    }

    /// Container bounds this canvas represents.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.canvas.width() as f32 / self.scale,
            self.canvas.height() as f32 / self.scale,
        )
    }

    pub fn image(&self) -> &RgbaImage {
        &self.canvas
    }

    pub fn into_image(self) -> RgbaImage {
        self.canvas
    }

    /// Save the rendered canvas to disk.
    pub fn save(&self, path: &Path) -> image::ImageResult<()> {
        self.canvas.save(path)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn pixel_span(&self, start: f32, end: f32, limit: u32) -> Range<u32> {
        let from = (start * self.scale).floor().max(0.0) as u32;
        let to = ((end * self.scale).ceil().max(0.0) as u32).min(limit);
        from.min(to)..to
    }
}

impl Renderer for RasterRenderer {
    fn fill_quad(&mut self, bounds: Rect, color: Color) {
        let xs = self.pixel_span(bounds.left(), bounds.right(), self.canvas.width());
        let ys = self.pixel_span(bounds.top(), bounds.bottom(), self.canvas.height());
        for y in ys {
            for x in xs.clone() {
                blend(self.canvas.get_pixel_mut(x, y), color);
            }
        }
    }

    fn fill_oval(&mut self, bounds: Rect, color: Color) {
        if bounds.is_empty() {
            return;
        }
        let center = bounds.center();
        let (rx, ry) = (bounds.width / 2.0, bounds.height / 2.0);
        let xs = self.pixel_span(bounds.left(), bounds.right(), self.canvas.width());
        let ys = self.pixel_span(bounds.top(), bounds.bottom(), self.canvas.height());

        for y in ys {
            let dy = ((y as f32 + 0.5) / self.scale - center.y) / ry;
            for x in xs.clone() {
                let dx = ((x as f32 + 0.5) / self.scale - center.x) / rx;
                if dx * dx + dy * dy <= 1.0 {
                    blend(self.canvas.get_pixel_mut(x, y), color);
                }
            }
        }
    }
}

/// Source-over blend of a straight-alpha color onto `dst`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend(dst: &mut Rgba<u8>, color: Color) {
    let a = color.a.clamp(0.0, 1.0);
    let src = [color.r, color.g, color.b];
    for (channel, s) in dst.0.iter_mut().take(3).zip(src) {
        let mixed = s.clamp(0.0, 1.0) * 255.0 * a + f32::from(*channel) * (1.0 - a);
        *channel = mixed.round() as u8;
    }
    let dst_a = f32::from(dst.0[3]) / 255.0;
    dst.0[3] = ((a + dst_a * (1.0 - a)) * 255.0).round() as u8;
}
