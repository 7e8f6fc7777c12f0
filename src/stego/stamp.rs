// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Text stamping onto spectra.
//!
//! Glyphs are the 8×8 bitmaps from `font8x8`, blown up so each bit covers a
//! `font_size × font_size` cell. Every stamp is drawn twice: once at the
//! anchor and once at the same anchor in the 180°-rotated matrix. The
//! resulting point-symmetric mark roughly preserves the conjugate symmetry
//! of a real signal's spectrum, so the inverse transform stays close to real.

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};

use crate::matrix::Matrix;
use crate::spectrum::ComplexPlane;

/// Glyph cell is 8×8 bits.
const GLYPH_BITS: i128 = 8;

/// Baseline-left position of a stamped string, in matrix pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub x: i64,
    pub y: i64,
}

impl Anchor {
    pub const fn new(x: i64, y: i64) -> Self {
        Anchor { x, y }
    }

    /// Center of a `cols × rows` matrix (integer division).
    pub fn center(rows: usize, cols: usize) -> Self {
        Anchor::new((cols / 2) as i64, (rows / 2) as i64)
    }
}

/// How a string is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StampStyle {
    /// Pixels per glyph bit.
    pub font_size: f64,
    /// Stroke weight; each cell grows by `thickness / 2` pixels per side.
    pub thickness: u32,
    /// Value written under the glyph.
    pub ink: f64,
}

impl Default for StampStyle {
    fn default() -> Self {
        StampStyle {
            font_size: super::DEFAULT_FONT_SIZE,
            thickness: super::STROKE_THICKNESS,
            ink: super::INK,
        }
    }
}

impl StampStyle {
    /// Cell edge in pixels, at least 1. Huge or infinite sizes saturate.
    fn cell_px(&self) -> i128 {
        i128::from((self.font_size.round() as i64).max(1))
    }
}

/// Bitmap for `ch`; characters without a glyph fall back to `?`.
fn glyph(ch: char) -> [u8; 8] {
    BASIC_FONTS
        .get(ch)
        .or_else(|| LATIN_FONTS.get(ch))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

/// Clip an `i128` coordinate into the range `fill_rect` takes.
fn coord(v: i128) -> i64 {
    v.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// Draw `text` once, clipped to the matrix.
///
/// Glyph geometry is computed in `i128`, so no font size can overflow it.
pub fn render_text(mat: &mut Matrix, text: &str, anchor: Anchor, style: &StampStyle) {
    let cell = style.cell_px();
    let pad = i128::from(style.thickness / 2);
    let glyph_px = GLYPH_BITS * cell;
    let top = i128::from(anchor.y) - glyph_px;
    let mut pen_x = i128::from(anchor.x);

    for ch in text.chars() {
        if pen_x >= mat.cols() as i128 {
            break;
        }
        for (row, bits) in glyph(ch).iter().enumerate() {
            for col in 0..GLYPH_BITS {
                if (bits >> col) & 1 == 0 {
                    continue;
                }
                let x0 = pen_x + col * cell - pad;
                let y0 = top + row as i128 * cell - pad;
                let (x1, y1) = (x0 + cell + 2 * pad, y0 + cell + 2 * pad);
                mat.fill_rect(coord(x0), coord(y0), coord(x1), coord(y1), style.ink);
            }
        }
        pen_x += glyph_px;
    }
}

/// Draw `text` at `anchor` and at its point-mirrored position.
pub fn stamp(mat: &mut Matrix, text: &str, anchor: Anchor, style: &StampStyle) {
    render_text(mat, text, anchor, style);
    mat.flip_both();
    render_text(mat, text, anchor, style);
    mat.flip_both();
}

/// [`stamp`] both halves of a spectrum identically.
pub fn stamp_plane(plane: &mut ComplexPlane, text: &str, anchor: Anchor, style: &StampStyle) {
    log::debug!("stamping {:?} at ({}, {})", text, anchor.x, anchor.y);
    plane.for_each_plane_mut(|m| stamp(m, text, anchor, style));
}
