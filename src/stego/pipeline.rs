// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Byte-level encode/reveal entry points.
//!
//! Both functions decode the input with the `image` crate, run the pure
//! spectral pipeline and return PNG bytes. Output is always RGBA.

use super::embed::embed;
use super::extract::extract;
use super::{Channel, EmbedOptions};
use crate::error::Result;
use crate::raster::format::to_image;
use crate::raster::Image;

/// Hide `text` in the blue-channel spectrum of an image.
///
/// # Arguments
/// - `image_bytes`: Raw bytes of any image format the build supports (PNG, JPEG).
/// - `text`: Text to stamp into the spectrum.
/// - `font_size`: Pixels per glyph bit; [`DEFAULT_FONT_SIZE`](super::DEFAULT_FONT_SIZE)
///   is a good start.
///
/// # Returns
/// PNG bytes (RGBA) of the stego image, same width and height as the input.
///
/// # Errors
/// - [`SpectralError::Decode`](crate::SpectralError::Decode) if `image_bytes` is not an image.
/// - [`SpectralError::EmptyImage`](crate::SpectralError::EmptyImage) if it has no pixels.
/// - [`SpectralError::ChannelCount`](crate::SpectralError::ChannelCount) if the result
///   cannot be formatted for display.
pub fn write_text_into_image(image_bytes: &[u8], text: &str, font_size: f64) -> Result<Vec<u8>> {
    let options = EmbedOptions { font_size, ..EmbedOptions::default() };
    write_text_with_options(image_bytes, text, &options)
}

/// [`write_text_into_image`] with full control over stamping.
pub fn write_text_with_options(image_bytes: &[u8], text: &str, options: &EmbedOptions) -> Result<Vec<u8>> {
    let cover = Image::decode(image_bytes)?;
    let stego = embed(&cover, text, options);
    to_image(&stego.to_matrix())?.encode_png()
}

/// Render the blue-channel log-magnitude spectrum of an image as a PNG.
///
/// Stamped text shows up as dark glyph shapes in the returned picture.
///
/// # Errors
/// - [`SpectralError::Decode`](crate::SpectralError::Decode) if `image_bytes` is not an image.
/// - [`SpectralError::EmptyImage`](crate::SpectralError::EmptyImage) if it has no pixels.
/// - [`SpectralError::EmptySpectrum`](crate::SpectralError::EmptySpectrum) if it is one
///   pixel wide or tall: the spectrum is cropped to even dimensions, which leaves nothing.
pub fn get_text_from_image(image_bytes: &[u8]) -> Result<Vec<u8>> {
    get_text_from_channel(image_bytes, Channel::default())
}

/// [`get_text_from_image`] for an explicit channel.
///
/// # Errors
/// Same as [`get_text_from_image`].
pub fn get_text_from_channel(image_bytes: &[u8], channel: Channel) -> Result<Vec<u8>> {
    let image = Image::decode(image_bytes)?;
    extract(&image, channel)?.encode_png()
}
