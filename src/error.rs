// SPDX-License-Identifier: GPL-3.0-or-later
// src/error.rs
//
// Error type for overlay operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("Container has no drawable area ({width}x{height})")]
    InvalidContainer { width: f32, height: f32 },

    #[error("Capture unavailable: {0}")]
    CaptureUnavailable(String),

    #[error("A capture is in progress")]
    CaptureInProgress,

    #[error("Share failed: {0}")]
    Share(String),

    #[error("Overlay already dismissed")]
    Dismissed,
}

pub type OverlayResult<T> = Result<T, OverlayError>;
