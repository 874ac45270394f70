// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/geometry/zone.rs
//
// Interaction zones of the selection and pointer classification.

use super::rect::{Point, SelectionRect};
use crate::constant::EDGE_MARGIN;

/// Where a pointer sits relative to the selection.
///
/// The zone picked on pointer-down decides what a drag does: move the whole
/// selection, drag one edge, or drag two edges through a corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Zone {
    #[default]
    Outside,
    Inside,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Cursor shape a host should show for a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    Grab,
    ResizeVertical,
    ResizeHorizontal,
    ResizeDiagonalDown,
    ResizeDiagonalUp,
}

impl Zone {
    /// Whether dragging in this zone moves the top edge.
    pub fn moves_top(self) -> bool {
        matches!(self, Zone::Top | Zone::TopLeft | Zone::TopRight)
    }

    pub fn moves_bottom(self) -> bool {
        matches!(self, Zone::Bottom | Zone::BottomLeft | Zone::BottomRight)
    }

    pub fn moves_left(self) -> bool {
        matches!(self, Zone::Left | Zone::TopLeft | Zone::BottomLeft)
    }

    pub fn moves_right(self) -> bool {
        matches!(self, Zone::Right | Zone::TopRight | Zone::BottomRight)
    }

    pub fn cursor(self) -> CursorHint {
        match self {
            Zone::Outside => CursorHint::Default,
            Zone::Inside => CursorHint::Grab,
            Zone::Top | Zone::Bottom => CursorHint::ResizeVertical,
            Zone::Left | Zone::Right => CursorHint::ResizeHorizontal,
            Zone::TopLeft | Zone::BottomRight => CursorHint::ResizeDiagonalDown,
            Zone::TopRight | Zone::BottomLeft => CursorHint::ResizeDiagonalUp,
        }
    }
}

fn near(value: f32, edge: f32) -> bool {
    value > edge - EDGE_MARGIN && value < edge + EDGE_MARGIN
}

/// Classify `point` against `rect`.
///
/// The body (the selection inset by the edge margin) wins over everything,
/// corners win over plain edges.
pub fn classify(point: Point, rect: &SelectionRect) -> Zone {
    if rect
        .inset(EDGE_MARGIN)
        .is_some_and(|body| body.contains(point))
    {
        return Zone::Inside;
    }

    let top = near(point.y, rect.top());
    let bottom = near(point.y, rect.bottom());
    let left = near(point.x, rect.left());
    let right = near(point.x, rect.right());

    match (top, bottom, left, right) {
        (true, _, true, _) => Zone::TopLeft,
        (true, _, _, true) => Zone::TopRight,
        (_, true, true, _) => Zone::BottomLeft,
        (_, true, _, true) => Zone::BottomRight,
        (true, _, _, _) => Zone::Top,
        (_, _, true, _) => Zone::Left,
        (_, true, _, _) => Zone::Bottom,
        (_, _, _, true) => Zone::Right,
        _ => Zone::Outside,
    }
}
