// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/geometry/engine.rs
//
// Selection state machine: owns the rectangle and the active drag session.

use super::drag::{self, DragSession};
use super::rect::{Bounds, Point, Rect, SelectionRect};
use super::zone::Zone;
use crate::constant::DEFAULT_HALF_EXTENT;
use crate::error::{OverlayError, OverlayResult};

/// Owns the selection of one overlay.
///
/// Idle until a pointer goes down, then dragging until it goes up or is
/// cancelled. Only one pointer is tracked: a second pointer-down restarts the
/// session. While a capture holds the lock the rectangle is frozen.
#[derive(Debug, Clone)]
pub struct RegionEngine {
    bounds: Bounds,
    rect: SelectionRect,
    session: Option<DragSession>,
    capture_locked: bool,
}

impl RegionEngine {
    /// Create an engine for `bounds`, starting from `initial` or from the
    /// default centered square.
    pub fn new(bounds: Bounds, initial: Option<SelectionRect>) -> Self {
        let start = initial.unwrap_or_else(|| Rect::centered_in(bounds, DEFAULT_HALF_EXTENT));
        Self {
            bounds,
            rect: drag::fit_to_bounds(&start, bounds),
            session: None,
            capture_locked: false,
        }
    }

    pub fn rect(&self) -> SelectionRect {
        self.rect
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Zone of the running session, `Outside` when idle.
    pub fn active_zone(&self) -> Zone {
        self.session.map_or(Zone::Outside, |s| s.zone)
    }

    /// Start a drag at `point`, replacing any session still running.
    pub fn pointer_down(&mut self, point: Point) -> OverlayResult<Zone> {
        if self.capture_locked {
            return Err(OverlayError::CaptureInProgress);
        }
        if let Some(previous) = self.session.take() {
            drag::end_drag(previous);
        }

        let session = drag::begin_drag(point, &self.rect);
        log::debug!("pointer down at {point:?} in {:?}", session.zone);
        self.session = Some(session);
        Ok(session.zone)
    }

    /// Feed a pointer move into the running session.
    ///
    /// Returns the new rectangle, or `None` when no session is running.
    pub fn pointer_move(&mut self, point: Point) -> Option<SelectionRect> {
        if self.capture_locked {
            return None;
        }
        let session = self.session.as_mut()?;
        self.rect = drag::update_drag(session, point, &self.rect, self.bounds);
        Some(self.rect)
    }

    /// Apply the release position and end the session.
    pub fn pointer_up(&mut self, point: Point) -> Option<SelectionRect> {
        let rect = self.pointer_move(point);
        self.cancel_drag();
        rect
    }

    /// End the session without a final update.
    pub fn cancel_drag(&mut self) {
        if let Some(session) = self.session.take() {
            drag::end_drag(session);
        }
    }

    /// Make the selection cover the whole container.
    pub fn expand_to_full_screen(&mut self) -> OverlayResult<SelectionRect> {
        if self.capture_locked {
            return Err(OverlayError::CaptureInProgress);
        }
        self.rect = drag::expand_to_full_screen(self.bounds);
        Ok(self.rect)
    }

    /// Follow a container resize.
    ///
    /// Returns the refitted rectangle, or `None` when `bounds` is empty and
    /// the resize was ignored.
    pub fn set_bounds(&mut self, bounds: Bounds) -> Option<SelectionRect> {
        if bounds.is_empty() {
            log::debug!("ignoring resize to empty bounds {bounds:?}");
            return None;
        }
        self.bounds = bounds;
        self.rect = drag::fit_to_bounds(&self.rect, bounds);
        Some(self.rect)
    }

    /// Freeze the selection for a capture and return it.
    ///
    /// A running drag is dropped; no drag is accepted until
    /// [`end_capture`](Self::end_capture).
    pub fn begin_capture(&mut self) -> OverlayResult<SelectionRect> {
        if self.capture_locked {
            return Err(OverlayError::CaptureInProgress);
        }
        self.cancel_drag();
        self.capture_locked = true;
        Ok(self.rect)
    }

    pub fn end_capture(&mut self) {
        self.capture_locked = false;
    }
}
