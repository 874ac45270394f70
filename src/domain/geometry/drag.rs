// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/geometry/drag.rs
//
// Drag sessions: moving and resizing the selection, clamped to its container.

use super::rect::{Bounds, Point, Rect, SelectionRect};
use super::zone::{Zone, classify};
use crate::constant::{MIN_SELECTION_SIZE, SNAP_DISTANCE};

/// State of one pointer interaction, from pointer-down to pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Last observed pointer position. Only body moves advance it.
    pub anchor: Point,
    pub zone: Zone,
}

/// Start a session at `point`.
pub fn begin_drag(point: Point, rect: &SelectionRect) -> DragSession {
    DragSession {
        anchor: point,
        zone: classify(point, rect),
    }
}

/// Compute the selection after the pointer moved to `point`.
///
/// Body moves are incremental: the anchor advances to `point` after every
/// step. Edge and corner drags place the grabbed edges at the pointer
/// directly and leave the anchor alone.
pub fn update_drag(
    session: &mut DragSession,
    point: Point,
    rect: &SelectionRect,
    bounds: Bounds,
) -> SelectionRect {
    let candidate = match session.zone {
        Zone::Outside => *rect,
        Zone::Inside => {
            let dx = point.x - session.anchor.x;
            let dy = point.y - session.anchor.y;
            let moved = move_within(rect, dx, dy, bounds);
            session.anchor = point;
            moved
        }
        zone => resize_edges(rect, zone, point, bounds),
    };

    clamp_to_bounds(&candidate, bounds)
}

/// End a session. Nothing outlives it.
pub fn end_drag(session: DragSession) {
    log::debug!("drag in {:?} ended at {:?}", session.zone, session.anchor);
}

/// The selection covering the whole container.
pub fn expand_to_full_screen(bounds: Bounds) -> SelectionRect {
    bounds.as_rect()
}

/// Smallest allowed (width, height) inside `bounds`.
///
/// A container narrower than the minimum caps it at its own extent.
pub fn min_size(bounds: Bounds) -> (f32, f32) {
    (
        MIN_SELECTION_SIZE.min(bounds.width.max(0.0)),
        MIN_SELECTION_SIZE.min(bounds.height.max(0.0)),
    )
}

fn move_within(rect: &Rect, dx: f32, dy: f32, bounds: Bounds) -> Rect {
    let new_x = (rect.x + dx).min(bounds.width - rect.width).max(0.0);
    let new_y = (rect.y + dy).min(bounds.height - rect.height).max(0.0);
    Rect::new(new_x, new_y, rect.width, rect.height)
}

fn resize_edges(rect: &Rect, zone: Zone, point: Point, bounds: Bounds) -> Rect {
    let (min_w, min_h) = min_size(bounds);
    let mut left = rect.left();
    let mut top = rect.top();
    let mut right = rect.right();
    let mut bottom = rect.bottom();

    if zone.moves_left() {
        left = point.x.min(right - min_w);
    } else if zone.moves_right() {
        right = point.x.max(left + min_w);
    }

    if zone.moves_top() {
        top = point.y.min(bottom - min_h);
    } else if zone.moves_bottom() {
        bottom = point.y.max(top + min_h);
    }

    Rect::from_edges(left, top, right, bottom)
}

/// Clamp `candidate` into `bounds`, snapping edges that come within
/// [`SNAP_DISTANCE`] of a container edge flush to it.
pub fn clamp_to_bounds(candidate: &Rect, bounds: Bounds) -> Rect {
    let min_x = if candidate.left() > SNAP_DISTANCE {
        candidate.left().max(0.0).min(bounds.width)
    } else {
        0.0
    };
    let min_y = if candidate.top() > SNAP_DISTANCE {
        candidate.top().max(0.0).min(bounds.height)
    } else {
        0.0
    };
    let max_x = if candidate.right() < bounds.width - SNAP_DISTANCE {
        candidate.right().min(bounds.width)
    } else {
        bounds.width
    };
    let max_y = if candidate.bottom() < bounds.height - SNAP_DISTANCE {
        candidate.bottom().min(bounds.height)
    } else {
        bounds.height
    };

    Rect::from_edges(min_x, min_y, max_x.max(min_x), max_y.max(min_y))
}

/// Bring an arbitrary rectangle into a valid state for `bounds`: at least the
/// minimum size, no larger than the container, fully contained and snapped.
pub fn fit_to_bounds(rect: &Rect, bounds: Bounds) -> Rect {
    let (min_w, min_h) = min_size(bounds);
    let width = rect.width.max(min_w).min(bounds.width);
    let height = rect.height.max(min_h).min(bounds.height);
    let x = rect.x.min(bounds.width - width).max(0.0);
    let y = rect.y.min(bounds.height - height).max(0.0);

    clamp_to_bounds(&Rect::new(x, y, width, height), bounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds::new(320.0, 480.0);

    fn rect() -> Rect {
        Rect::new(100.0, 100.0, 160.0, 160.0)
    }

    #[test]
    fn top_right_corner_drag_moves_two_edges() {
        let r = rect();
        let mut session = begin_drag(Point::new(260.0, 100.0), &r);
        assert_eq!(session.zone, Zone::TopRight);

        let next = update_drag(&mut session, Point::new(280.0, 80.0), &r, BOUNDS);
        assert!(next.approx_eq(&Rect::new(100.0, 80.0, 180.0, 180.0)), "{next:?}");
        // Resize sessions keep their anchor.
        assert_eq!(session.anchor, Point::new(260.0, 100.0));
    }

    #[test]
    fn body_drag_translates_and_advances_anchor() {
        let r = rect();
        let mut session = begin_drag(Point::new(140.0, 140.0), &r);
        assert_eq!(session.zone, Zone::Inside);

        let next = update_drag(&mut session, Point::new(160.0, 130.0), &r, BOUNDS);
        assert_eq!(next, Rect::new(120.0, 90.0, 160.0, 160.0));
        assert_eq!(session.anchor, Point::new(160.0, 130.0));

        // The second step is relative to the new anchor, not the first one.
        let next = update_drag(&mut session, Point::new(170.0, 130.0), &next, BOUNDS);
        assert_eq!(next, Rect::new(130.0, 90.0, 160.0, 160.0));
    }

    #[test]
    fn body_drag_stops_at_container_edges() {
        let r = rect();
        let mut session = begin_drag(Point::new(180.0, 180.0), &r);
        let next = update_drag(&mut session, Point::new(500.0, -400.0), &r, BOUNDS);
        assert_eq!(next, Rect::new(160.0, 0.0, 160.0, 160.0));
    }

    #[test]
    fn edge_drag_keeps_opposite_edge_fixed_at_minimum() {
        let r = rect();
        let mut session = begin_drag(Point::new(100.0, 180.0), &r);
        assert_eq!(session.zone, Zone::Left);

        let next = update_drag(&mut session, Point::new(290.0, 180.0), &r, BOUNDS);
        assert_eq!(next, Rect::new(230.0, 100.0, 30.0, 160.0));
        assert_eq!(next.right(), r.right());
    }

    #[test]
    fn bottom_edge_cannot_cross_top() {
        let r = rect();
        let mut session = begin_drag(Point::new(180.0, 262.0), &r);
        assert_eq!(session.zone, Zone::Bottom);

        let next = update_drag(&mut session, Point::new(180.0, 20.0), &r, BOUNDS);
        assert_eq!(next, Rect::new(100.0, 100.0, 160.0, 30.0));
    }

    #[test]
    fn edge_near_container_snaps_flush() {
        let bounds = Bounds::new(300.0, 400.0);
        let r = Rect::new(50.0, 100.0, 100.0, 100.0);
        let mut session = begin_drag(Point::new(52.0, 150.0), &r);
        assert_eq!(session.zone, Zone::Left);

        let next = update_drag(&mut session, Point::new(3.0, 150.0), &r, bounds);
        assert_eq!(next.left(), 0.0);
        assert_eq!(next, Rect::new(0.0, 100.0, 150.0, 100.0));
    }

    #[test]
    fn clamp_snaps_far_edges_too() {
        let bounds = Bounds::new(300.0, 400.0);
        let clamped = clamp_to_bounds(&Rect::new(10.0, 10.0, 287.0, 388.0), bounds);
        assert_eq!(clamped, Rect::new(10.0, 10.0, 290.0, 390.0));
    }

    #[test]
    fn zero_displacement_is_identity() {
        let r = rect();
        let probes = [
            Point::new(180.0, 180.0),
            Point::new(100.0, 100.0),
            Point::new(260.0, 260.0),
            Point::new(180.0, 100.0),
            Point::new(260.0, 180.0),
        ];
        for p in probes {
            let mut session = begin_drag(p, &r);
            let next = update_drag(&mut session, p, &r, BOUNDS);
            assert!(next.approx_eq(&r), "{:?} gave {next:?}", session.zone);
        }
    }

    #[test]
    fn outside_drag_leaves_rect_alone() {
        let r = rect();
        let mut session = begin_drag(Point::new(10.0, 400.0), &r);
        assert_eq!(session.zone, Zone::Outside);
        let next = update_drag(&mut session, Point::new(50.0, 300.0), &r, BOUNDS);
        assert_eq!(next, r);
    }

    #[test]
    fn full_screen_ignores_prior_state() {
        let bounds = Bounds::new(320.0, 480.0);
        assert_eq!(expand_to_full_screen(bounds), Rect::new(0.0, 0.0, 320.0, 480.0));
    }

    #[test]
    fn fit_pulls_oversized_rect_into_container() {
        let bounds = Bounds::new(100.0, 100.0);
        let centered = Rect::centered_in(bounds, 80.0);
        assert_eq!(fit_to_bounds(&centered, bounds), bounds.as_rect());

        let tiny = Rect::new(40.0, 40.0, 2.0, 2.0);
        let fitted = fit_to_bounds(&tiny, bounds);
        assert_eq!(fitted, Rect::new(40.0, 40.0, 30.0, 30.0));
    }

    /// Small deterministic generator so drag sequences are reproducible.
    struct Lcg(u64);

    impl Lcg {
        fn next_f32(&mut self, max: f32) -> f32 {
            self.0 = self
                .0
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((self.0 >> 33) as f32 / (1u64 << 31) as f32) * max
        }
    }

    #[test]
    fn random_drag_sequences_keep_size_and_containment() {
        let bounds = Bounds::new(300.0, 400.0);
        let mut rng = Lcg(42);
        let mut r = fit_to_bounds(&Rect::centered_in(bounds, 80.0), bounds);

        for _ in 0..200 {
            let start = Point::new(rng.next_f32(bounds.width), rng.next_f32(bounds.height));
            let mut session = begin_drag(start, &r);
            for _ in 0..10 {
                // Pointers may leave the container while dragging.
                let p = Point::new(
                    rng.next_f32(bounds.width + 200.0) - 100.0,
                    rng.next_f32(bounds.height + 200.0) - 100.0,
                );
                r = update_drag(&mut session, p, &r, bounds);
                assert!(r.width >= MIN_SELECTION_SIZE - 0.001, "{r:?}");
                assert!(r.height >= MIN_SELECTION_SIZE - 0.001, "{r:?}");
                assert!(bounds.contains_rect(&r), "{r:?}");
            }
            end_drag(session);
        }
    }
}
