// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Matrix → displayable RGBA pixel buffer.
//!
//! Any depth is first mapped into 8-bit unsigned range:
//!
//! | depth            | scale   | shift |
//! |------------------|---------|-------|
//! | U8               | 1       | 0     |
//! | I8               | 1       | 128   |
//! | U16, I32         | 1/256   | 0     |
//! | I16              | 1/256   | 128   |
//! | F32, F64 (0..1)  | 255     | 0     |
//!
//! then the channel count is promoted to 4: gray is replicated into RGB with
//! opaque alpha, RGB gets opaque alpha, RGBA passes through.

use super::Image;
use crate::error::{Result, SpectralError};
use crate::matrix::{Depth, Matrix};

/// `(scale, shift)` that brings `depth` into the U8 display range.
pub fn display_scaling(depth: Depth) -> (f64, f64) {
    let scale = match depth {
        Depth::U8 | Depth::I8 => 1.0,
        Depth::U16 | Depth::I16 | Depth::I32 => 1.0 / 256.0,
        Depth::F32 | Depth::F64 => 255.0,
    };
    let shift = match depth {
        Depth::I8 | Depth::I16 => 128.0,
        _ => 0.0,
    };
    (scale, shift)
}

/// Convert `mat` to an interleaved RGBA byte buffer.
///
/// # Errors
/// - [`SpectralError::ChannelCount`] if `mat` has a channel count other than 1, 3 or 4.
pub fn to_pixel_buffer(mat: &Matrix) -> Result<Vec<u8>> {
    let (scale, shift) = display_scaling(mat.depth());
    let bytes = mat.convert_depth(Depth::U8, scale, shift);
    let Some(src) = bytes.as_u8() else {
        unreachable!("convert_depth(U8) produced {:?}", bytes.depth());
    };

    let rgba = match mat.channels() {
        1 => src.iter().flat_map(|&l| [l, l, l, u8::MAX]).collect(),
        3 => src
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], u8::MAX])
            .collect(),
        4 => src.to_vec(),
        n => return Err(SpectralError::ChannelCount(n)),
    };
    Ok(rgba)
}

/// [`to_pixel_buffer`] wrapped as a 4-channel [`Image`].
pub fn to_image(mat: &Matrix) -> Result<Image> {
    let rgba = to_pixel_buffer(mat)?;
    Image::new(mat.cols() as u32, mat.rows() as u32, 4, rgba)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_u8_becomes_opaque_rgba() {
        let m = Matrix::from_vec(1, 2, 1, vec![0u8, 200]);
        assert_eq!(to_pixel_buffer(&m).unwrap(), vec![0, 0, 0, 255, 200, 200, 200, 255]);
    }

    #[test]
    fn rgb_gets_alpha_and_rgba_passes_through() {
        let rgb = Matrix::from_vec(1, 1, 3, vec![1u8, 2, 3]);
        assert_eq!(to_pixel_buffer(&rgb).unwrap(), vec![1, 2, 3, 255]);

        let rgba = Matrix::from_vec(1, 1, 4, vec![1u8, 2, 3, 4]);
        assert_eq!(to_pixel_buffer(&rgba).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn signed_and_wide_depths_are_rescaled() {
        let i8m = Matrix::from_vec(1, 2, 1, vec![-128i8, 127]);
        assert_eq!(to_pixel_buffer(&i8m).unwrap(), vec![0, 0, 0, 255, 255, 255, 255, 255]);

        let u16m = Matrix::from_vec(1, 1, 1, vec![512u16]);
        assert_eq!(to_pixel_buffer(&u16m).unwrap()[0], 2);

        let i16m = Matrix::from_vec(1, 1, 1, vec![-32768i16]);
        assert_eq!(to_pixel_buffer(&i16m).unwrap()[0], 0);

        let f = Matrix::from_vec(1, 2, 1, vec![0.5f32, 2.0]);
        let px = to_pixel_buffer(&f).unwrap();
        assert_eq!((px[0], px[4]), (128, 255));
    }

    #[test]
    fn two_channel_matrix_is_a_channel_count_error() {
        let m = Matrix::zeros(2, 2, 2, Depth::U8);
        match to_pixel_buffer(&m) {
            Err(SpectralError::ChannelCount(2)) => {}
            other => panic!("expected ChannelCount(2), got {other:?}"),
        }
    }

    #[test]
    fn to_image_is_always_four_channels() {
        let img = to_image(&Matrix::zeros(3, 5, 1, Depth::U8)).unwrap();
        assert_eq!((img.width(), img.height(), img.channels()), (5, 3, 4));
    }
}
