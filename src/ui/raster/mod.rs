// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/raster/mod.rs
//
// Headless host built on the image crate: renderer, capture surface, share sink.

mod renderer;
mod share;
mod surface;

pub use renderer::RasterRenderer;
pub use share::FileShare;
pub use surface::ImageSurface;
