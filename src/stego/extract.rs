// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Revealing stamped text by drawing the channel's log-magnitude spectrum.

use super::Channel;
use crate::error::{Result, SpectralError};
use crate::matrix::{split_channel, Depth, Matrix};
use crate::raster::format::to_image;
use crate::raster::Image;
use crate::spectrum::{forward, shift_quadrants};

/// Log-magnitude spectrum of `channel`, centered and stretched to 0..=255.
///
/// Returns a single-channel U8 matrix. Odd dimensions are cropped to even
/// by the quadrant shift.
pub fn visualize_spectrum(image: &Image, channel: Channel) -> Matrix {
    let index = channel.index(image.channels());
    log::debug!(
        "visualizing spectrum of channel {index} of {}x{} image",
        image.width(),
        image.height()
    );

    let spatial = split_channel(image, index).convert_depth(Depth::F32, 1.0, 0.0);
    let mut mag = forward(&spatial).magnitude().log1p();
    shift_quadrants(&mut mag);

    mag.convert_depth(Depth::U8, 1.0, 0.0).normalize_min_max(0.0, 255.0, Depth::U8)
}

/// [`visualize_spectrum`] promoted to a displayable 4-channel image.
///
/// # Errors
/// - [`SpectralError::EmptySpectrum`] if the image is one pixel wide or tall,
///   so the even crop leaves no spectrum to draw.
pub fn extract(image: &Image, channel: Channel) -> Result<Image> {
    let vis = visualize_spectrum(image, channel);
    if vis.rows() == 0 || vis.cols() == 0 {
        return Err(SpectralError::EmptySpectrum { width: image.width(), height: image.height() });
    }
    to_image(&vis)
}
