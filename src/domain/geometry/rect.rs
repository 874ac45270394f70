// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/geometry/rect.rs
//
// Points, container bounds and the selection rectangle.

/// Tolerance for float comparisons in containment checks.
const GEOMETRY_EPSILON: f32 = 0.001;

/// The user-adjustable crop region.
pub type SelectionRect = Rect;

/// A point in container-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The drawable area of a container. The origin is always 0,0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A container without area cannot host an overlay.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// The whole container as a rectangle.
    pub fn as_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Check if `rect` lies fully inside the container.
    pub fn contains_rect(&self, rect: &Rect) -> bool {
        rect.left() >= -GEOMETRY_EPSILON
            && rect.top() >= -GEOMETRY_EPSILON
            && rect.right() <= self.width + GEOMETRY_EPSILON
            && rect.bottom() <= self.height + GEOMETRY_EPSILON
    }
}

/// Axis-aligned rectangle in container-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from its four edges.
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// A square of side `2 * half_extent` centered in `bounds`.
    pub fn centered_in(bounds: Bounds, half_extent: f32) -> Self {
        Self::new(
            bounds.width / 2.0 - half_extent,
            bounds.height / 2.0 - half_extent,
            half_extent * 2.0,
            half_extent * 2.0,
        )
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Shrink the rectangle by `d` on every side.
    ///
    /// Returns `None` when nothing would be left.
    pub fn inset(&self, d: f32) -> Option<Self> {
        let inset = Self::new(
            self.x + d,
            self.y + d,
            self.width - 2.0 * d,
            self.height - 2.0 * d,
        );
        (!inset.is_empty()).then_some(inset)
    }

    /// Half-open containment: the left/top edges are inside, the right/bottom
    /// edges are not.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Geometric equality within float tolerance.
    pub fn approx_eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < GEOMETRY_EPSILON
            && (self.y - other.y).abs() < GEOMETRY_EPSILON
            && (self.width - other.width).abs() < GEOMETRY_EPSILON
            && (self.height - other.height).abs() < GEOMETRY_EPSILON
    }

    /// Pixel rectangle `(x, y, width, height)` rounded to whole pixels.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn as_pixel_rect(&self) -> Option<(u32, u32, u32, u32)> {
        if self.is_empty() || self.x < -GEOMETRY_EPSILON || self.y < -GEOMETRY_EPSILON {
            return None;
        }
        let left = self.left().round().max(0.0);
        let top = self.top().round().max(0.0);
        let right = self.right().round();
        let bottom = self.bottom().round();
        if right <= left || bottom <= top {
            return None;
        }
        Some((
            left as u32,
            top as u32,
            (right - left) as u32,
            (bottom - top) as u32,
        ))
    }
}
