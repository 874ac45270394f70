// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Geometry constants that should not be changed by the user.

/// Distance from an edge within which a pointer grabs that edge.
pub const EDGE_MARGIN: f32 = 20.0;

/// Smallest width or height a selection can be resized to.
pub const MIN_SELECTION_SIZE: f32 = 30.0;

/// Distance from a container edge at which the selection snaps flush to it.
pub const SNAP_DISTANCE: f32 = 5.0;

/// Half of the side length of the initial, centered selection.
pub const DEFAULT_HALF_EXTENT: f32 = 80.0;

/// Offset of the button chrome from the top of the container.
pub const CHROME_TOP_OFFSET: f32 = 5.0;

/// Button plate size (width, height) used for layout and hit-testing.
pub const BUTTON_SIZE: (f32, f32) = (84.0, 36.0);

/// File name prefix for shared snapshots.
pub const SNAPSHOT_PREFIX: &str = "snapshot";

/// File extension for shared snapshots.
pub const SNAPSHOT_EXT: &str = "png";

/// Application directory name used for the config file.
pub const CONFIG_DIR: &str = "snapmask";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.json";
