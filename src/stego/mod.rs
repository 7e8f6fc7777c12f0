// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Spectral text watermarking.
//!
//! - **Embed** (`write_text_into_image`): stamps text into the 2D DFT of the
//!   blue channel, twice per anchor (normal + point-mirrored) at the center
//!   and near the top-left corner, then transforms back.
//! - **Reveal** (`get_text_from_image`): renders the channel's log-magnitude
//!   spectrum, quadrant-shifted and stretched to 0..=255, where the stamped
//!   glyphs are visible.
//!
//! Nothing here is keyed or encrypted, and the mark does not survive lossy
//! recompression.

pub mod embed;
pub mod extract;
mod pipeline;
pub mod stamp;

use stamp::{Anchor, StampStyle};

pub use pipeline::{get_text_from_channel, get_text_from_image, write_text_into_image, write_text_with_options};

/// Default pixels per glyph bit (an 8×8 glyph becomes 128×128).
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// Default stroke weight of stamped glyphs.
pub const STROKE_THICKNESS: u32 = 2;

/// Value written into spectrum bins under a glyph.
pub const INK: f64 = 0.0;

/// Second stamp position, offset from the top-left (DC) corner.
pub const CORNER_ANCHOR: Anchor = Anchor::new(45, 45);

/// Color channel that carries the mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    Red,
    Green,
    #[default]
    Blue,
}

impl Channel {
    /// Buffer index of this channel in an image with `channels` channels.
    ///
    /// Grayscale images only have index 0, whichever color is asked for.
    pub fn index(self, channels: usize) -> usize {
        if channels < 3 {
            return 0;
        }
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// Parameters for [`embed::embed`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmbedOptions {
    pub font_size: f64,
    pub thickness: u32,
    pub channel: Channel,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        EmbedOptions {
            font_size: DEFAULT_FONT_SIZE,
            thickness: STROKE_THICKNESS,
            channel: Channel::default(),
        }
    }
}

impl EmbedOptions {
    pub fn style(&self) -> StampStyle {
        StampStyle { font_size: self.font_size, thickness: self.thickness, ink: INK }
    }
}
