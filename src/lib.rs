// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Snapmask: a draggable, resizable selection mask for cropping snapshots.

pub mod app;
pub mod config;
pub mod constant;
pub mod domain;
pub mod error;
pub mod ui;

pub use app::{Host, Overlay, OverlayMessage, OverlayRegistry, UpdateOutcome};
pub use config::MaskConfig;
pub use domain::geometry::{Bounds, Point, RegionEngine, SelectionRect, Zone};
pub use error::{OverlayError, OverlayResult};
