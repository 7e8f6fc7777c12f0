// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! # phasm-spectral
//!
//! Hides a short text in the frequency domain of an image and reveals it as
//! a picture of the spectrum.
//!
//! Embedding takes the 2D DFT of one color channel (blue by default),
//! stamps the text as a bitmap mark into the spectrum together with its
//! point mirror, and transforms back. Revealing draws the log-magnitude
//! spectrum with the zero frequency centered; the stamped text appears as
//! dark glyphs.
//!
//! The transform (`spectrum` module) is std + `num-complex` only. Image
//! decoding and PNG encoding use the `image` crate.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use phasm_spectral::{get_text_from_image, write_text_into_image, DEFAULT_FONT_SIZE};
//!
//! let cover = std::fs::read("photo.png").unwrap();
//! let stego = write_text_into_image(&cover, "lenna", DEFAULT_FONT_SIZE).unwrap();
//! let spectrum_png = get_text_from_image(&stego).unwrap();
//! std::fs::write("spectrum.png", spectrum_png).unwrap();
//! ```

pub mod error;
pub mod matrix;
pub mod raster;
pub mod spectrum;
pub mod stego;

pub use error::{Result, SpectralError};
pub use matrix::{Depth, Matrix};
pub use raster::Image;
pub use spectrum::ComplexPlane;
pub use stego::embed::embed;
pub use stego::extract::{extract, visualize_spectrum};
pub use stego::{get_text_from_channel, get_text_from_image, write_text_into_image, write_text_with_options};
pub use stego::{Channel, EmbedOptions, CORNER_ANCHOR, DEFAULT_FONT_SIZE};
