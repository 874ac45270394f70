// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Domain layer: pure selection geometry without platform dependencies.

pub mod geometry;
