// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/geometry/mod.rs
//
// Region geometry engine: zones, drag math and the selection state machine.

pub mod drag;
pub mod engine;
pub mod rect;
pub mod zone;

pub use drag::{
    DragSession, begin_drag, clamp_to_bounds, end_drag, expand_to_full_screen, fit_to_bounds,
    update_drag,
};
pub use engine::RegionEngine;
pub use rect::{Bounds, Point, Rect, SelectionRect};
pub use zone::{CursorHint, Zone, classify};
