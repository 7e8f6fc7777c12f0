// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Writing text into the spectrum of one color channel.
//!
//! 1. Take the selected channel as an F32 matrix
//! 2. Forward 2D DFT
//! 3. Stamp the text (with its point mirror) at the center, then at the
//!    corner anchor
//! 4. Inverse DFT, saturate back to U8
//! 5. Put the channel back into a copy of the source image

use super::stamp::{stamp_plane, Anchor};
use super::{EmbedOptions, CORNER_ANCHOR};
use crate::matrix::{merge_channel, split_channel, Depth};
use crate::raster::Image;
use crate::spectrum::{forward, inverse};

/// Embed `text` into `image`.
///
/// The result has the same width, height and channel count as `image`;
/// only the selected channel differs.
pub fn embed(image: &Image, text: &str, options: &EmbedOptions) -> Image {
    let index = options.channel.index(image.channels());
    log::debug!(
        "embedding {} char(s) into channel {index} of {}x{} image",
        text.chars().count(),
        image.width(),
        image.height()
    );

    let spatial = split_channel(image, index).convert_depth(Depth::F32, 1.0, 0.0);
    let mut spectrum = forward(&spatial);

    let style = options.style();
    let center = Anchor::center(spectrum.rows(), spectrum.cols());
    stamp_plane(&mut spectrum, text, center, &style);
    stamp_plane(&mut spectrum, text, CORNER_ANCHOR, &style);

    let restored = inverse(&spectrum).convert_depth(Depth::U8, 1.0, 0.0);
    merge_channel(image, index, &restored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stego::Channel;

    fn gradient(width: u32, height: u32, channels: usize) -> Image {
        let mut data = Vec::with_capacity((width * height) as usize * channels);
        for y in 0..height {
            for x in 0..width {
                for c in 0..channels {
                    data.push(((x * 3 + y * 5 + c as u32 * 40) % 256) as u8);
                }
            }
        }
        Image::new(width, height, channels, data).unwrap()
    }

    #[test]
    fn keeps_geometry_and_channel_count() {
        for channels in [1, 3, 4] {
            let img = gradient(40, 30, channels);
            let out = embed(&img, "x", &EmbedOptions::default());
            assert_eq!(
                (out.width(), out.height(), out.channels()),
                (40, 30, channels),
                "{channels}-channel source"
            );
        }
    }

    #[test]
    fn only_the_selected_channel_changes() {
        let img = gradient(64, 64, 3);
        let options = EmbedOptions { font_size: 2.0, ..EmbedOptions::default() };
        let out = embed(&img, "secret", &options);

        let mut blue_changed = false;
        for (a, b) in img.data().chunks_exact(3).zip(out.data().chunks_exact(3)) {
            assert_eq!((a[0], a[1]), (b[0], b[1]), "red/green must not change");
            blue_changed |= a[2] != b[2];
        }
        assert!(blue_changed, "stamping high frequencies should perturb blue");
    }

    #[test]
    fn channel_option_is_honored() {
        let img = gradient(32, 32, 4);
        let options = EmbedOptions { font_size: 1.0, channel: Channel::Red, ..EmbedOptions::default() };
        let out = embed(&img, "ab", &options);
        for (a, b) in img.data().chunks_exact(4).zip(out.data().chunks_exact(4)) {
            assert_eq!(&a[1..], &b[1..]);
        }
    }

    #[test]
    fn empty_text_leaves_image_unchanged() {
        let img = gradient(24, 18, 3);
        assert_eq!(embed(&img, "", &EmbedOptions::default()), img);
    }

    #[test]
    fn deterministic() {
        let img = gradient(50, 33, 3);
        let options = EmbedOptions { font_size: 1.5, ..EmbedOptions::default() };
        assert_eq!(embed(&img, "x", &options), embed(&img, "x", &options));
    }
}
