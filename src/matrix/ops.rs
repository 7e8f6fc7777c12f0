// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Elementwise arithmetic and range remapping.

use super::{Depth, Matrix, MatrixData};

impl Matrix {
    /// Linear remap `out = in * scale + shift` into `target` depth.
    ///
    /// Integer targets round to nearest (ties to even) and saturate; they never wrap.
    pub fn convert_depth(&self, target: Depth, scale: f64, shift: f64) -> Matrix {
        let values = self.data().to_f64().into_iter().map(|v| v * scale + shift);
        Matrix::new(self.rows(), self.cols(), self.channels(), MatrixData::from_f64(target, values))
    }

    /// Elementwise sum, saturated to this matrix's depth.
    pub fn add(&self, other: &Matrix) -> Matrix {
        assert!(
            self.same_shape(other),
            "add: {}x{}x{} vs {}x{}x{}",
            self.rows(),
            self.cols(),
            self.channels(),
            other.rows(),
            other.cols(),
            other.channels()
        );
        let rhs = other.data().to_f64();
        let values = self.data().to_f64().into_iter().zip(rhs).map(|(a, b)| a + b);
        self.with_values(values)
    }

    /// Add `value` to every element, saturated to this matrix's depth.
    pub fn add_scalar(&self, value: f64) -> Matrix {
        self.with_values(self.data().to_f64().into_iter().map(|v| v + value))
    }

    /// Natural logarithm of every element. Float depths only.
    pub fn ln(&self) -> Matrix {
        self.assert_float("ln");
        self.with_values(self.data().to_f64().into_iter().map(f64::ln))
    }

    /// `ln(1 + x)` of every element. Float depths only.
    ///
    /// Keeps zero magnitudes finite when log-compressing a spectrum.
    pub fn log1p(&self) -> Matrix {
        self.assert_float("log1p");
        self.with_values(self.data().to_f64().into_iter().map(f64::ln_1p))
    }

    /// Affine rescale so the global minimum maps to `new_min` and the maximum
    /// to `new_max`, written in `target` depth.
    ///
    /// A constant matrix has no range to stretch and maps entirely to `new_min`.
    pub fn normalize_min_max(&self, new_min: f64, new_max: f64, target: Depth) -> Matrix {
        let (lo, hi) = self.min_max();
        let span = hi - lo;
        let scale = if span > f64::EPSILON { (new_max - new_min) / span } else { 0.0 };
        let shift = new_min - lo * scale;
        self.convert_depth(target, scale, shift)
    }

    fn with_values<I: IntoIterator<Item = f64>>(&self, values: I) -> Matrix {
        Matrix::new(
            self.rows(),
            self.cols(),
            self.channels(),
            MatrixData::from_f64(self.depth(), values),
        )
    }

    fn assert_float(&self, op: &str) {
        assert!(self.depth().is_float(), "{op} needs a float matrix, got {:?}", self.depth());
    }
}

/// Per-element `sqrt(re² + im²)` of two same-shaped float matrices.
pub fn magnitude(re: &Matrix, im: &Matrix) -> Matrix {
    assert!(re.same_shape(im), "magnitude: plane shapes differ");
    assert_eq!(re.depth(), im.depth(), "magnitude: plane depths differ");
    re.assert_float("magnitude");
    let values = re
        .data()
        .to_f64()
        .into_iter()
        .zip(im.data().to_f64())
        .map(|(a, b)| a.hypot(b));
    re.with_values(values)
}
