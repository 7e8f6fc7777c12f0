// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Quadrant swap ("fftshift") for spectrum display.

use crate::matrix::{Matrix, Rect};

/// Move the zero-frequency bin from the corner to the center, in place.
///
/// The matrix is first cropped to even dimensions (`cols & !1`, `rows & !1`),
/// so an odd-sized input loses its last row and/or column. The quadrants of
/// the cropped matrix are then swapped diagonally:
///
/// ```text
///  q0 | q1        q3 | q2
///  ---+---   =>   ---+---
///  q2 | q3        q1 | q0
/// ```
///
/// The swap is its own inverse.
pub fn shift_quadrants(mag: &mut Matrix) {
    let (cols, rows) = (mag.cols() & !1, mag.rows() & !1);
    if cols != mag.cols() || rows != mag.rows() {
        log::debug!("cropping {}x{} spectrum to {cols}x{rows}", mag.cols(), mag.rows());
        *mag = mag.crop(cols, rows);
    }

    let (cx, cy) = (cols / 2, rows / 2);
    if cx == 0 || cy == 0 {
        return;
    }
    let q0 = Rect::new(0, 0, cx, cy);
    let q1 = Rect::new(cx, 0, cx, cy);
    let q2 = Rect::new(0, cy, cx, cy);
    let q3 = Rect::new(cx, cy, cx, cy);

    swap_regions(mag, q0, q3);
    swap_regions(mag, q1, q2);
}

fn swap_regions(mat: &mut Matrix, a: Rect, b: Rect) {
    let tmp = mat.roi(a);
    let other = mat.roi(b);
    mat.paste(a.x, a.y, &other);
    mat.paste(b.x, b.y, &tmp);
}
