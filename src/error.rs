// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for the spectral watermark pipeline.
//!
//! [`SpectralError`] covers everything a caller can recover from: bytes that
//! are not an image, and buffers whose channel layout cannot be displayed.
//! Shape disagreements between intermediate matrices are programming errors
//! and panic instead.

use core::fmt;

/// Errors that can occur while embedding into or revealing from an image.
#[derive(Debug)]
pub enum SpectralError {
    /// The input bytes could not be decoded as a raster image.
    Decode(image::ImageError),
    /// The image decoded but has zero width or height.
    EmptyImage,
    /// A matrix or buffer has a channel count other than 1, 3 or 4.
    ChannelCount(usize),
    /// PNG encoding of the result failed.
    Encode(image::ImageError),
    /// The image is too thin to have a visible spectrum: cropping the
    /// spectrum to even dimensions left nothing.
    EmptySpectrum { width: u32, height: u32 },
}

impl fmt::Display for SpectralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "could not decode image: {e}"),
            Self::EmptyImage => write!(f, "image has no pixels"),
            Self::ChannelCount(n) => {
                write!(f, "unexpected number of channels (expected 1, 3 or 4, got {n})")
            }
            Self::Encode(e) => write!(f, "could not encode PNG: {e}"),
            Self::EmptySpectrum { width, height } => {
                write!(f, "{width}x{height} image has an empty spectrum after even cropping")
            }
        }
    }
}

impl std::error::Error for SpectralError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) | Self::Encode(e) => Some(e),
            _ => None,
        }
    }
}

/// Image errors surface while reading input; encoding maps them explicitly.
impl From<image::ImageError> for SpectralError {
    fn from(e: image::ImageError) -> Self {
        Self::Decode(e)
    }
}

pub type Result<T> = std::result::Result<T, SpectralError>;
