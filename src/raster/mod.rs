// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! 8-bit raster images and the byte-level codec boundary.
//!
//! Decoding and PNG encoding are delegated to the `image` crate; everything
//! downstream works on [`Image`], a plain interleaved 8-bit buffer with 1, 3
//! or 4 channels.

pub mod format;

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder};

use crate::error::{Result, SpectralError};
use crate::matrix::Matrix;

/// Decoded raster: `height` rows of `width` pixels, `channels` bytes each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    channels: usize,
    data: Vec<u8>,
}

impl Image {
    /// Wrap a pixel buffer.
    ///
    /// # Errors
    /// - [`SpectralError::ChannelCount`] unless `channels` is 1, 3 or 4.
    ///
    /// Panics if `data` does not hold exactly `width * height * channels` bytes.
    pub fn new(width: u32, height: u32, channels: usize, data: Vec<u8>) -> Result<Self> {
        if !matches!(channels, 1 | 3 | 4) {
            return Err(SpectralError::ChannelCount(channels));
        }
        assert_eq!(
            data.len(),
            width as usize * height as usize * channels,
            "pixel buffer does not match {width}x{height}x{channels}"
        );
        Ok(Image { width, height, channels, data })
    }

    /// Decode any raster format the `image` crate is built with.
    ///
    /// Gray+alpha sources are promoted to RGBA; 16-bit and float sources are
    /// reduced to 8 bits per channel.
    ///
    /// # Errors
    /// - [`SpectralError::Decode`] if the bytes are not a decodable image.
    /// - [`SpectralError::EmptyImage`] if the image has no pixels.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let dynamic = image::load_from_memory(bytes)?;
        let (width, height) = (dynamic.width(), dynamic.height());
        if width == 0 || height == 0 {
            return Err(SpectralError::EmptyImage);
        }
        let (channels, data) = match dynamic {
            DynamicImage::ImageLuma8(buf) => (1, buf.into_raw()),
            DynamicImage::ImageRgb8(buf) => (3, buf.into_raw()),
            DynamicImage::ImageRgba8(buf) => (4, buf.into_raw()),
            other => {
                let color = other.color();
                if color.has_alpha() {
                    (4, other.to_rgba8().into_raw())
                } else if color.has_color() {
                    (3, other.to_rgb8().into_raw())
                } else {
                    (1, other.to_luma8().into_raw())
                }
            }
        };
        log::debug!("decoded {width}x{height} image with {channels} channel(s)");
        Image::new(width, height, channels, data)
    }

    /// Encode as PNG, keeping the channel layout (gray, RGB or RGBA).
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let color = match self.channels {
            1 => ExtendedColorType::L8,
            3 => ExtendedColorType::Rgb8,
            4 => ExtendedColorType::Rgba8,
            n => return Err(SpectralError::ChannelCount(n)),
        };
        let mut out = Cursor::new(Vec::new());
        PngEncoder::new(&mut out)
            .write_image(&self.data, self.width, self.height, color)
            .map_err(SpectralError::Encode)?;
        Ok(out.into_inner())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Same geometry and layout, new pixels.
    pub(crate) fn with_data(&self, data: Vec<u8>) -> Image {
        assert_eq!(data.len(), self.data.len(), "replacement buffer has the wrong size");
        Image { data, ..*self }
    }

    /// The whole image as a U8 matrix with the same channel count.
    pub fn to_matrix(&self) -> Matrix {
        Matrix::from_vec(self.height as usize, self.width as usize, self.channels, self.data.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(width: u32, height: u32, channels: usize) -> Image {
        let data = (0..width as usize * height as usize * channels)
            .map(|i| (i * 37 % 256) as u8)
            .collect();
        Image::new(width, height, channels, data).unwrap()
    }

    #[test]
    fn png_roundtrip_keeps_layout() {
        for channels in [1, 3, 4] {
            let img = checker(7, 5, channels);
            let png = img.encode_png().unwrap();
            let back = Image::decode(&png).unwrap();
            assert_eq!(back, img, "{channels}-channel PNG roundtrip");
        }
    }

    #[test]
    fn gray_alpha_is_promoted_to_rgba() {
        let la = image::GrayAlphaImage::from_raw(2, 1, vec![10, 200, 90, 255]).unwrap();
        let mut png = Cursor::new(Vec::new());
        DynamicImage::ImageLumaA8(la).write_to(&mut png, image::ImageFormat::Png).unwrap();

        let img = Image::decode(png.get_ref()).unwrap();
        assert_eq!(img.channels(), 4);
        assert_eq!(img.data(), &[10, 10, 10, 200, 90, 90, 90, 255]);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        match Image::decode(&[0u8, 1, 2, 3, 4, 5]) {
            Err(SpectralError::Decode(_)) => {}
            other => panic!("expected Decode, got {other:?}"),
        }
    }

    #[test]
    fn two_channels_rejected() {
        match Image::new(1, 1, 2, vec![0, 0]) {
            Err(SpectralError::ChannelCount(2)) => {}
            other => panic!("expected ChannelCount(2), got {other:?}"),
        }
    }
}
