// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/mod.rs
//
// Presentation: mask drawing and the raster host.

pub mod mask;
#[cfg(feature = "raster")]
pub mod raster;
