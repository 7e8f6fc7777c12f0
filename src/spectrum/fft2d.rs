// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! 2D DFT/IDFT of an image channel at its native size.
//!
//! - Radix-2 Cooley-Tukey for power-of-2 lengths
//! - Bluestein's chirp-z transform for arbitrary lengths
//!
//! No padding to a "fast" size is done: the spectrum has exactly the
//! channel's rows and columns, so stamp coordinates map 1:1 onto it.
//! Arithmetic runs in `Complex<f64>`; the planes are stored as F32.
//! Bluestein chirps and FFT(b) are computed once per axis length and
//! reused for every row or column.

use num_complex::Complex;
use std::f64::consts::PI;

use crate::matrix::{magnitude, Depth, Matrix, MatrixData};

type C64 = Complex<f64>;

/// Forward transform direction (`exp(-2πi…)`).
const FORWARD: f64 = -1.0;
/// Inverse transform direction (`exp(+2πi…)`), unnormalized.
const INVERSE: f64 = 1.0;

/// Frequency-domain representation of a real channel: a real and an
/// imaginary F32 plane of identical size.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexPlane {
    pub re: Matrix,
    pub im: Matrix,
}

impl ComplexPlane {
    /// Pair two planes. Panics if their shapes or depths differ.
    pub fn new(re: Matrix, im: Matrix) -> Self {
        assert!(
            re.same_shape(&im) && re.channels() == 1,
            "complex plane halves must be equal single-channel matrices ({}x{} vs {}x{})",
            re.rows(),
            re.cols(),
            im.rows(),
            im.cols()
        );
        assert_eq!(re.depth(), im.depth(), "complex plane halves differ in depth");
        ComplexPlane { re, im }
    }

    pub fn rows(&self) -> usize {
        self.re.rows()
    }

    pub fn cols(&self) -> usize {
        self.re.cols()
    }

    /// Per-bin magnitude `|re + i·im|`.
    pub fn magnitude(&self) -> Matrix {
        magnitude(&self.re, &self.im)
    }

    /// Apply `f` to both planes in turn, as if they were one packed
    /// two-channel matrix.
    pub fn for_each_plane_mut(&mut self, mut f: impl FnMut(&mut Matrix)) {
        f(&mut self.re);
        f(&mut self.im);
    }

    fn from_complex(data: &[C64], rows: usize, cols: usize) -> Self {
        let re = data.iter().map(|c| c.re as f32).collect();
        let im = data.iter().map(|c| c.im as f32).collect();
        ComplexPlane::new(
            Matrix::from_vec::<f32>(rows, cols, 1, re),
            Matrix::from_vec::<f32>(rows, cols, 1, im),
        )
    }

    fn to_complex(&self) -> Vec<C64> {
        self.re
            .data()
            .to_f64()
            .into_iter()
            .zip(self.im.data().to_f64())
            .map(|(re, im)| C64::new(re, im))
            .collect()
    }
}

// ──────────────────────────────────────────────────────────────────────────
// Bluestein plan
// ──────────────────────────────────────────────────────────────────────────

/// Precomputed Bluestein chirp factors and FFT(b) for one `(n, sign)`.
struct BluesteinPlan {
    n: usize,
    m: usize, // next power of two >= 2n - 1
    chirp: Vec<C64>,
    b_hat: Vec<C64>,
}

impl BluesteinPlan {
    fn new(n: usize, sign: f64) -> Self {
        let m = (2 * n - 1).next_power_of_two();

        // w_k = exp(sign * i * pi * k^2 / n); k^2 reduced mod 2n keeps the
        // angle small for long rows.
        let chirp: Vec<C64> = (0..n)
            .map(|k| {
                let k2 = (k as u128 * k as u128 % (2 * n) as u128) as f64;
                let (s, c) = (sign * PI * k2 / n as f64).sin_cos();
                C64::new(c, s)
            })
            .collect();

        // b[k] = conj(w_k), wrapped for negative k, zero-padded to m.
        let mut b = vec![C64::new(0.0, 0.0); m];
        b[0] = chirp[0].conj();
        for k in 1..n {
            b[k] = chirp[k].conj();
            b[m - k] = chirp[k].conj();
        }
        fft_radix2(&mut b, FORWARD);

        BluesteinPlan { n, m, chirp, b_hat: b }
    }

    fn execute(&self, data: &mut [C64]) {
        debug_assert_eq!(data.len(), self.n);

        let mut a = vec![C64::new(0.0, 0.0); self.m];
        for (k, slot) in a.iter_mut().take(self.n).enumerate() {
            *slot = data[k] * self.chirp[k];
        }

        fft_radix2(&mut a, FORWARD);
        for (x, b) in a.iter_mut().zip(&self.b_hat) {
            *x = *x * *b;
        }
        fft_radix2(&mut a, INVERSE);

        let inv_m = 1.0 / self.m as f64;
        for k in 0..self.n {
            data[k] = a[k] * inv_m * self.chirp[k];
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────
// 1D primitives
// ──────────────────────────────────────────────────────────────────────────

/// In-place radix-2 FFT. `data.len()` must be a power of 2.
fn fft_radix2(data: &mut [C64], sign: f64) {
    let n = data.len();
    debug_assert!(n.is_power_of_two());
    if n <= 1 {
        return;
    }

    // Bit-reversal permutation
    let mut j = 0usize;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;
        if i < j {
            data.swap(i, j);
        }
    }

    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let step = sign * PI / half as f64;
        let twiddles: Vec<C64> = (0..half)
            .map(|k| {
                let (s, c) = (step * k as f64).sin_cos();
                C64::new(c, s)
            })
            .collect();
        for start in (0..n).step_by(len) {
            for (k, w) in twiddles.iter().enumerate() {
                let u = data[start + k];
                let v = data[start + k + half] * w;
                data[start + k] = u + v;
                data[start + k + half] = u - v;
            }
        }
        len <<= 1;
    }
}

/// 1D transform plan for a fixed length and direction.
enum AxisPlan {
    /// Lengths 0, 1 and powers of two.
    Radix2(f64),
    Bluestein(BluesteinPlan),
}

impl AxisPlan {
    fn new(n: usize, sign: f64) -> Self {
        if n <= 1 || n.is_power_of_two() {
            AxisPlan::Radix2(sign)
        } else {
            log::trace!("bluestein plan for length {n}");
            AxisPlan::Bluestein(BluesteinPlan::new(n, sign))
        }
    }

    fn run(&self, data: &mut [C64]) {
        match self {
            AxisPlan::Radix2(sign) => fft_radix2(data, *sign),
            AxisPlan::Bluestein(plan) => plan.execute(data),
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────
// 2D transform
// ──────────────────────────────────────────────────────────────────────────

#[cfg(feature = "parallel")]
fn transform_rows(data: &mut [C64], width: usize, plan: &AxisPlan) {
    use rayon::prelude::*;
    data.par_chunks_mut(width).for_each(|row| plan.run(row));
}

#[cfg(not(feature = "parallel"))]
fn transform_rows(data: &mut [C64], width: usize, plan: &AxisPlan) {
    for row in data.chunks_mut(width) {
        plan.run(row);
    }
}

fn transpose(data: &[C64], rows: usize, cols: usize) -> Vec<C64> {
    let mut out = vec![C64::new(0.0, 0.0); data.len()];
    for r in 0..rows {
        for c in 0..cols {
            out[c * rows + r] = data[r * cols + c];
        }
    }
    out
}

/// Rows, then columns (via a transposed copy so columns become contiguous).
fn transform_2d(data: Vec<C64>, rows: usize, cols: usize, sign: f64) -> Vec<C64> {
    if rows == 0 || cols == 0 {
        return data;
    }
    let mut data = data;
    transform_rows(&mut data, cols, &AxisPlan::new(cols, sign));
    let mut cols_major = transpose(&data, rows, cols);
    transform_rows(&mut cols_major, rows, &AxisPlan::new(rows, sign));
    transpose(&cols_major, cols, rows)
}

/// Real single-channel float matrix → complex spectrum of the same size.
///
/// Panics if `spatial` is not a float depth or has more than one channel.
pub fn forward(spatial: &Matrix) -> ComplexPlane {
    assert!(
        spatial.depth().is_float(),
        "forward transform needs a float matrix, got {:?}",
        spatial.depth()
    );
    assert_eq!(spatial.channels(), 1, "forward transform takes one channel");
    let (rows, cols) = (spatial.rows(), spatial.cols());

    let data: Vec<C64> = spatial.data().to_f64().into_iter().map(|v| C64::new(v, 0.0)).collect();
    let spectrum = transform_2d(data, rows, cols, FORWARD);
    ComplexPlane::from_complex(&spectrum, rows, cols)
}

/// Complex spectrum → real F32 matrix, scaled by `1 / (rows * cols)`.
///
/// Only the real component of the inverse transform is kept.
pub fn inverse(plane: &ComplexPlane) -> Matrix {
    let (rows, cols) = (plane.rows(), plane.cols());
    let spatial = transform_2d(plane.to_complex(), rows, cols, INVERSE);

    let norm = 1.0 / (rows * cols).max(1) as f64;
    let values = spatial.into_iter().map(|c| c.re * norm);
    Matrix::new(rows, cols, 1, MatrixData::from_f64(Depth::F32, values))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(rows: usize, cols: usize, step: f32, base: f32) -> Matrix {
        Matrix::from_vec(rows, cols, 1, (0..rows * cols).map(|i| i as f32 * step + base).collect())
    }

    fn assert_close(a: &Matrix, b: &Matrix, tol: f64) {
        assert!(a.same_shape(b));
        let (av, bv) = (a.data().to_f64(), b.data().to_f64());
        for (i, (x, y)) in av.iter().zip(&bv).enumerate() {
            assert!((x - y).abs() < tol, "Mismatch at {i}: expected {y}, got {x}");
        }
    }

    #[test]
    fn roundtrip_pow2() {
        let m = ramp(16, 16, 0.1, 50.0);
        assert_close(&inverse(&forward(&m)), &m, 1e-3);
    }

    #[test]
    fn roundtrip_non_pow2() {
        let m = ramp(10, 12, 0.3, 20.0);
        assert_close(&inverse(&forward(&m)), &m, 1e-3);
    }

    #[test]
    fn roundtrip_odd_and_degenerate_shapes() {
        for (rows, cols) in [(1, 1), (1, 7), (9, 1), (13, 5)] {
            let m = ramp(rows, cols, 1.7, -3.0);
            assert_close(&inverse(&forward(&m)), &m, 1e-3);
        }
    }

    #[test]
    fn dc_component_is_sum() {
        let m = ramp(4, 4, 1.0, 1.0);
        let spec = forward(&m);
        assert!((spec.re.get(0, 0, 0) - 136.0).abs() < 1e-3);
        assert!(spec.im.get(0, 0, 0).abs() < 1e-3);
    }

    #[test]
    fn impulse_has_flat_spectrum() {
        let mut m = Matrix::zeros(6, 8, 1, Depth::F32);
        m.fill_rect(0, 0, 1, 1, 1.0);
        let mag = forward(&m).magnitude();
        for v in mag.data().to_f64() {
            assert!((v - 1.0).abs() < 1e-5, "bin magnitude {v}");
        }
    }

    #[test]
    fn bluestein_matches_naive_dft() {
        let n = 7;
        let input: Vec<C64> = (0..n).map(|i| C64::new((i * 3 + 1) as f64, (i * 2) as f64)).collect();
        let mut fast = input.clone();
        BluesteinPlan::new(n, FORWARD).execute(&mut fast);

        for k in 0..n {
            let naive: C64 = input
                .iter()
                .enumerate()
                .map(|(t, x)| {
                    let (s, c) = (-2.0 * PI * (k * t) as f64 / n as f64).sin_cos();
                    x * C64::new(c, s)
                })
                .sum();
            assert!((fast[k] - naive).norm() < 1e-9, "bin {k}: {} vs {naive}", fast[k]);
        }
    }

    #[test]
    fn parseval_holds() {
        let m = Matrix::from_vec(8, 6, 1, (0..48).map(|i| ((i * 7 + 3) % 256) as f32).collect());
        let spatial: f64 = m.data().to_f64().iter().map(|v| v * v).sum();
        let freq: f64 = forward(&m).magnitude().data().to_f64().iter().map(|v| v * v).sum();
        assert!((spatial - freq / 48.0).abs() / spatial < 1e-5, "spatial={spatial} freq/N={}", freq / 48.0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_rows_match_serial_rows() {
        for width in [16, 12] {
            let data: Vec<C64> = (0..width * 9)
                .map(|i| C64::new(((i * 31) % 17) as f64, ((i * 7) % 5) as f64 - 2.0))
                .collect();
            let plan = AxisPlan::new(width, FORWARD);

            let mut parallel = data.clone();
            transform_rows(&mut parallel, width, &plan);
            let mut serial = data;
            for row in serial.chunks_mut(width) {
                plan.run(row);
            }
            assert_eq!(parallel, serial, "width {width}");
        }
    }

    #[test]
    #[should_panic(expected = "needs a float matrix")]
    fn forward_rejects_u8() {
        forward(&Matrix::zeros(2, 2, 1, Depth::U8));
    }

    #[test]
    #[should_panic(expected = "must be equal single-channel matrices")]
    fn plane_halves_must_match() {
        ComplexPlane::new(Matrix::zeros(2, 2, 1, Depth::F32), Matrix::zeros(2, 3, 1, Depth::F32));
    }
}
