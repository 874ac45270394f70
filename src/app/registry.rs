// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/registry.rs
//
// At most one overlay per container, in front-to-back order.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::app::host::Host;
use crate::app::message::{OverlayMessage, UpdateOutcome};
use crate::app::overlay::Overlay;
use crate::config::MaskConfig;
use crate::domain::geometry::{Bounds, SelectionRect};
use crate::error::{OverlayError, OverlayResult};

/// Maps container identity to its overlay.
///
/// Attach and detach are the only ways in and out; dismissed overlays are
/// dropped as soon as the message that dismissed them returns.
#[derive(Debug)]
pub struct OverlayRegistry<K> {
    overlays: HashMap<K, Overlay>,
    /// Back to front; the last entry is the top-most overlay.
    z_order: Vec<K>,
}

impl<K> Default for OverlayRegistry<K> {
    fn default() -> Self {
        Self {
            overlays: HashMap::new(),
            z_order: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone + Debug> OverlayRegistry<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an overlay on `container`.
    ///
    /// If the container already has one it is raised and returned unchanged;
    /// `initial` and `config` only apply to a new overlay.
    pub fn attach(
        &mut self,
        container: K,
        bounds: Bounds,
        initial: Option<SelectionRect>,
        config: &MaskConfig,
    ) -> OverlayResult<&mut Overlay> {
        if bounds.is_empty() {
            log::warn!("Not attaching overlay to {container:?}: empty bounds {bounds:?}");
            return Err(OverlayError::InvalidContainer {
                width: bounds.width,
                height: bounds.height,
            });
        }

        if self
            .overlays
            .get(&container)
            .is_some_and(|overlay| !overlay.is_open())
        {
            // Closed through `Overlay::dismiss`; a new overlay takes its place.
            self.remove(&container);
        }

        if self.overlays.contains_key(&container) {
            log::debug!("Raising existing overlay on {container:?}");
            self.raise(&container);
        } else {
            log::info!("Attaching overlay to {container:?} ({bounds:?})");
            self.z_order.push(container.clone());
        }

        Ok(self
            .overlays
            .entry(container)
            .or_insert_with(|| Overlay::new(bounds, initial, config.clone())))
    }

    /// Remove the overlay from `container` without calling its close callback.
    pub fn detach(&mut self, container: &K) -> bool {
        self.remove(container).is_some()
    }

    /// Remove the overlay from `container` and call its close callback.
    pub fn detach_and_notify(&mut self, container: &K) -> bool {
        match self.remove(container) {
            Some(mut overlay) => {
                overlay.dismiss(true);
                true
            }
            None => false,
        }
    }

    /// Route `message` to the overlay on `container`.
    ///
    /// Containers without an overlay ignore messages. An overlay found closed
    /// afterwards is dropped, even when the message was rejected.
    pub fn dispatch(
        &mut self,
        container: &K,
        message: OverlayMessage,
        host: &mut Host<'_>,
    ) -> OverlayResult<UpdateOutcome> {
        let Some(overlay) = self.overlays.get_mut(container) else {
            return Ok(UpdateOutcome::Ignored);
        };

        let outcome = overlay.update(message, host);
        if !overlay.is_open() {
            self.remove(container);
        }
        outcome
    }

    pub fn get(&self, container: &K) -> Option<&Overlay> {
        self.overlays.get(container)
    }

    pub fn get_mut(&mut self, container: &K) -> Option<&mut Overlay> {
        self.overlays.get_mut(container)
    }

    /// Container whose overlay is on top.
    pub fn front(&self) -> Option<&K> {
        self.z_order.last()
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    fn raise(&mut self, container: &K) {
        if let Some(pos) = self.z_order.iter().position(|k| k == container) {
            let key = self.z_order.remove(pos);
            self.z_order.push(key);
        }
    }

    fn remove(&mut self, container: &K) -> Option<Overlay> {
        let overlay = self.overlays.remove(container)?;
        self.z_order.retain(|k| k != container);
        log::info!("Detached overlay from {container:?}");
        Some(overlay)
    }
}
