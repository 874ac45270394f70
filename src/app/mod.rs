// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Overlay shell: messages, host capabilities, overlays and their registry.

pub mod gesture;
pub mod host;
pub mod message;
pub mod overlay;
pub mod registry;

pub use gesture::Gesture;
pub use host::{BitmapCapture, Color, Host, Renderer, ShareSink, Snapshot};
pub use message::{OverlayButton, OverlayMessage, UpdateOutcome};
pub use overlay::Overlay;
pub use registry::OverlayRegistry;
