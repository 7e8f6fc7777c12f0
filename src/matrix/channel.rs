// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Moving single channels between an [`Image`] and a [`Matrix`].

use super::Matrix;
use crate::raster::Image;

/// Copy channel `index` of `image` into a standalone single-channel U8 matrix.
pub fn split_channel(image: &Image, index: usize) -> Matrix {
    let channels = image.channels();
    assert!(index < channels, "channel {index} out of range for {channels}-channel image");
    let plane: Vec<u8> = image.data().iter().skip(index).step_by(channels).copied().collect();
    Matrix::from_vec(image.height() as usize, image.width() as usize, 1, plane)
}

/// Return a copy of `image` with channel `index` replaced by `plane`.
///
/// `plane` must be a single-channel U8 matrix of the image's size; all other
/// channels are carried over unchanged.
pub fn merge_channel(image: &Image, index: usize, plane: &Matrix) -> Image {
    let channels = image.channels();
    assert!(index < channels, "channel {index} out of range for {channels}-channel image");
    assert_eq!(plane.channels(), 1, "merge_channel takes a single-channel matrix");
    assert_eq!(
        (plane.rows(), plane.cols()),
        (image.height() as usize, image.width() as usize),
        "merged channel size differs from image"
    );
    let values = plane
        .as_u8()
        .unwrap_or_else(|| panic!("merge_channel takes a U8 matrix, got {:?}", plane.depth()));

    let mut data = image.data().to_vec();
    for (px, &v) in data.chunks_exact_mut(channels).zip(values) {
        px[index] = v;
    }
    image.with_data(data)
}
