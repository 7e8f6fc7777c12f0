// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Frequency-domain plumbing: the 2D transform pair and the quadrant swap
//! used to center the zero-frequency bin for display.

pub mod fft2d;
pub mod shift;

pub use fft2d::{forward, inverse, ComplexPlane};
pub use shift::shift_quadrants;
