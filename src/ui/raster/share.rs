// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/raster/share.rs
//
// Share sink that writes snapshots as PNG files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use image::RgbaImage;
use uuid::Uuid;

use crate::app::host::{ShareSink, Snapshot};
use crate::constant::{SNAPSHOT_EXT, SNAPSHOT_PREFIX};

/// Writes every shared snapshot into one directory.
pub struct FileShare {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl FileShare {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files written so far, oldest first.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ShareSink for FileShare {
    fn share(&mut self, snapshot: Snapshot) -> anyhow::Result<()> {
        let (width, height) = (snapshot.width, snapshot.height);
        let image = RgbaImage::from_raw(width, height, snapshot.pixels)
            .with_context(|| format!("Snapshot buffer does not match {width}x{height}"))?;

        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;

        let path = self
            .dir
            .join(format!("{SNAPSHOT_PREFIX}-{}.{SNAPSHOT_EXT}", Uuid::new_v4()));
        image
            .save(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        log::info!("Shared snapshot to {}", path.display());
        self.written.push(path);
        Ok(())
    }
}
