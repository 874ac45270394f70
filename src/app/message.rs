// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Overlay messages: pointer events, button actions and container changes.

use crate::error::OverlayError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayMessage {
    // Pointer.
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    PointerCancel,

    // Buttons.
    Cancel,
    FullScreen,
    Share,

    // Container.
    Resize { width: f32, height: f32 },
}

/// The three chrome buttons along the top of the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayButton {
    Cancel,
    FullScreen,
    Share,
}

impl OverlayButton {
    pub fn label(self) -> &'static str {
        match self {
            OverlayButton::Cancel => "Cancel",
            OverlayButton::FullScreen => "FullScreen",
            OverlayButton::Share => "Share",
        }
    }

    /// Message a press on this button produces.
    pub fn message(self) -> OverlayMessage {
        match self {
            OverlayButton::Cancel => OverlayMessage::Cancel,
            OverlayButton::FullScreen => OverlayMessage::FullScreen,
            OverlayButton::Share => OverlayMessage::Share,
        }
    }
}

/// What an update did, so the host knows whether to repaint or tear down.
#[derive(Debug)]
pub enum UpdateOutcome {
    /// Nothing visible changed.
    Ignored,
    /// The selection or the chrome changed; draw again.
    Redraw,
    /// Sharing did not happen; the overlay stays open.
    ShareAborted(OverlayError),
    /// The overlay closed and should be removed.
    Dismissed,
}

impl UpdateOutcome {
    pub fn needs_redraw(&self) -> bool {
        matches!(self, UpdateOutcome::Redraw | UpdateOutcome::ShareAborted(_))
    }
}
