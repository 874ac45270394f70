// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/overlay.rs
//
// One selection overlay: engine state, chrome, callbacks and message handling.

use std::fmt;

use crate::app::host::{Host, Renderer};
use crate::app::message::{OverlayButton, OverlayMessage, UpdateOutcome};
use crate::config::MaskConfig;
use crate::domain::geometry::{
    Bounds, CursorHint, Point, RegionEngine, SelectionRect, Zone, classify,
};
use crate::error::{OverlayError, OverlayResult};
use crate::ui::mask;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OverlayState {
    Open,
    Dismissed,
}

pub struct Overlay {
    engine: RegionEngine,
    config: MaskConfig,
    state: OverlayState,

    // Chrome.
    chrome_visible: bool,
    pressed_button: Option<OverlayButton>,

    // Callbacks.
    on_close: Option<Box<dyn FnOnce()>>,
    on_change: Option<Box<dyn FnMut(SelectionRect)>>,
}

impl fmt::Debug for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overlay")
            .field("engine", &self.engine)
            .field("state", &self.state)
            .field("chrome_visible", &self.chrome_visible)
            .finish_non_exhaustive()
    }
}

impl Overlay {
    pub fn new(bounds: Bounds, initial: Option<SelectionRect>, config: MaskConfig) -> Self {
        Self {
            engine: RegionEngine::new(bounds, initial),
            chrome_visible: config.chrome_visible_on_open,
            config,
            state: OverlayState::Open,
            pressed_button: None,
            on_close: None,
            on_change: None,
        }
    }

    /// Called once when the user cancels or a share completes.
    pub fn set_on_close(&mut self, callback: impl FnOnce() + 'static) {
        self.on_close = Some(Box::new(callback));
    }

    /// Called with the new selection after every change.
    pub fn set_on_change(&mut self, callback: impl FnMut(SelectionRect) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    pub fn selection(&self) -> SelectionRect {
        self.engine.rect()
    }

    pub fn bounds(&self) -> Bounds {
        self.engine.bounds()
    }

    pub fn is_open(&self) -> bool {
        self.state == OverlayState::Open
    }

    pub fn active_zone(&self) -> Zone {
        self.engine.active_zone()
    }

    pub fn chrome_visible(&self) -> bool {
        self.chrome_visible
    }

    pub fn set_chrome_visible(&mut self, visible: bool) {
        self.chrome_visible = visible;
    }

    /// Cursor a host should show with the pointer at `point`.
    pub fn cursor_at(&self, point: Point) -> CursorHint {
        if self.engine.is_dragging() {
            return self.engine.active_zone().cursor();
        }
        if self.button_at(point).is_some() {
            return CursorHint::Default;
        }
        classify(point, &self.engine.rect()).cursor()
    }

    /// Chrome button under `point`, while the chrome is shown.
    pub fn button_at(&self, point: Point) -> Option<OverlayButton> {
        if !self.chrome_visible {
            return None;
        }
        mask::button_at(self.engine.bounds(), self.config.corner_diameter, point)
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        mask::draw_mask(
            renderer,
            self.engine.bounds(),
            &self.engine.rect(),
            &self.config,
            self.chrome_visible,
        );
    }

    /// Handle one message.
    ///
    /// Messages sent after the overlay was dismissed are rejected.
    pub fn update(
        &mut self,
        message: OverlayMessage,
        host: &mut Host<'_>,
    ) -> OverlayResult<UpdateOutcome> {
        if !self.is_open() {
            return Err(OverlayError::Dismissed);
        }

        match message {
            OverlayMessage::PointerDown { x, y } => self.pointer_down(Point::new(x, y)),
            OverlayMessage::PointerMove { x, y } => {
                let rect = self.engine.pointer_move(Point::new(x, y));
                Ok(self.selection_changed(rect))
            }
            OverlayMessage::PointerUp { x, y } => {
                let point = Point::new(x, y);
                if let Some(pressed) = self.pressed_button.take() {
                    if self.button_at(point) == Some(pressed) {
                        return self.update(pressed.message(), host);
                    }
                    return Ok(UpdateOutcome::Ignored);
                }
                let rect = self.engine.pointer_up(point);
                Ok(self.selection_changed(rect))
            }
            OverlayMessage::PointerCancel => {
                self.pressed_button = None;
                self.engine.cancel_drag();
                Ok(UpdateOutcome::Ignored)
            }
            OverlayMessage::Cancel => {
                self.dismiss(true);
                Ok(UpdateOutcome::Dismissed)
            }
            OverlayMessage::FullScreen => {
                let rect = self.engine.expand_to_full_screen()?;
                Ok(self.selection_changed(Some(rect)))
            }
            OverlayMessage::Share => self.share(host),
            OverlayMessage::Resize { width, height } => {
                let rect = self.engine.set_bounds(Bounds::new(width, height));
                Ok(self.selection_changed(rect))
            }
        }
    }

    /// Close the overlay, optionally notifying the close callback.
    pub fn dismiss(&mut self, notify: bool) {
        if !self.is_open() {
            return;
        }
        self.engine.cancel_drag();
        self.state = OverlayState::Dismissed;
        log::info!("Overlay dismissed with selection {:?}", self.engine.rect());

        if notify {
            if let Some(callback) = self.on_close.take() {
                callback();
            }
        }
    }

    fn pointer_down(&mut self, point: Point) -> OverlayResult<UpdateOutcome> {
        // Hidden chrome comes back on touch, but the touch itself still drags.
        let revealed = !self.chrome_visible;
        self.chrome_visible = true;

        if !revealed {
            if let Some(button) = self.button_at(point) {
                // A press on the chrome ends any drag still running.
                self.engine.cancel_drag();
                self.pressed_button = Some(button);
                return Ok(UpdateOutcome::Ignored);
            }
        }

        self.pressed_button = None;
        self.engine.pointer_down(point)?;
        Ok(if revealed {
            UpdateOutcome::Redraw
        } else {
            UpdateOutcome::Ignored
        })
    }

    fn selection_changed(&mut self, rect: Option<SelectionRect>) -> UpdateOutcome {
        let Some(rect) = rect else {
            return UpdateOutcome::Ignored;
        };
        log::debug!("Selection is now {rect:?}");
        if let Some(callback) = self.on_change.as_mut() {
            callback(rect);
        }
        UpdateOutcome::Redraw
    }

    fn share(&mut self, host: &mut Host<'_>) -> OverlayResult<UpdateOutcome> {
        let rect = self.engine.begin_capture()?;
        // Border and handles must not end up in the bitmap.
        let chrome = std::mem::replace(&mut self.chrome_visible, false);
        let captured = host.capture.capture(rect);
        self.engine.end_capture();

        let snapshot = match captured {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log::warn!("Share aborted, capture of {rect:?} failed: {e}");
                self.chrome_visible = chrome;
                return Ok(UpdateOutcome::ShareAborted(e));
            }
        };

        if let Err(e) = host.sink.share(snapshot) {
            log::error!("Failed to share snapshot: {e:#}");
            self.chrome_visible = chrome;
            return Ok(UpdateOutcome::ShareAborted(OverlayError::Share(format!(
                "{e:#}"
            ))));
        }

        self.dismiss(true);
        Ok(UpdateOutcome::Dismissed)
    }
}
