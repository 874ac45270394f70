// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/host.rs
//
// Capabilities the embedding application provides to an overlay.

use serde::{Deserialize, Serialize};

use crate::domain::geometry::{Rect, SelectionRect};
use crate::error::OverlayResult;

/// Straight (non-premultiplied) RGBA color, channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::from_rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::from_rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_rgba8(self) -> [u8; 4] {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }
}

/// RGBA8 pixels of a captured region, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Snapshot({}x{}, ..)", self.width, self.height)
    }
}

/// Drawing surface the mask paints onto, in container coordinates.
pub trait Renderer {
    /// Fill an axis-aligned rectangle.
    fn fill_quad(&mut self, bounds: Rect, color: Color);

    /// Fill the ellipse inscribed in `bounds`.
    fn fill_oval(&mut self, bounds: Rect, color: Color);

    /// Draw a button caption. Surfaces without text support skip it.
    fn label(&mut self, _bounds: Rect, _text: &str, _color: Color) {}
}

/// Takes a bitmap of the content beneath the selection.
pub trait BitmapCapture {
    fn capture(&mut self, rect: SelectionRect) -> OverlayResult<Snapshot>;
}

/// Hands a captured bitmap to whatever sharing mechanism the platform has.
pub trait ShareSink {
    fn share(&mut self, snapshot: Snapshot) -> anyhow::Result<()>;
}

/// The capabilities an overlay needs while handling a message.
pub struct Host<'a> {
    pub capture: &'a mut dyn BitmapCapture,
    pub sink: &'a mut dyn ShareSink,
}

impl<'a> Host<'a> {
    pub fn new(capture: &'a mut dyn BitmapCapture, sink: &'a mut dyn ShareSink) -> Self {
        Self { capture, sink }
    }
}
