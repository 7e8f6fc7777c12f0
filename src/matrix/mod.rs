// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Dense 2D numeric matrices with a runtime element depth.
//!
//! A [`Matrix`] holds `rows × cols` pixels of `channels` interleaved elements,
//! stored row-major. The element type is a closed set ([`Depth`]) and the
//! buffer is the matching [`MatrixData`] variant, so every operation matches
//! exhaustively instead of inspecting types at runtime.
//!
//! Conversions into integer depths always round to nearest (ties to even)
//! and saturate to the target range; they never wrap.

mod channel;
mod ops;

pub use channel::{merge_channel, split_channel};
pub use ops::magnitude;

/// Element depth of a [`Matrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Depth {
    U8,
    I8,
    U16,
    I16,
    I32,
    F32,
    F64,
}

impl Depth {
    /// `true` for floating-point depths.
    pub fn is_float(self) -> bool {
        matches!(self, Depth::F32 | Depth::F64)
    }
}

/// Typed element buffer, one variant per [`Depth`].
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixData {
    U8(Vec<u8>),
    I8(Vec<i8>),
    U16(Vec<u16>),
    I16(Vec<i16>),
    I32(Vec<i32>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

/// Apply `$body` to the buffer of every variant, rebuilding the same variant.
macro_rules! map_data {
    ($data:expr, $v:ident => $body:expr) => {
        match $data {
            MatrixData::U8($v) => MatrixData::U8($body),
            MatrixData::I8($v) => MatrixData::I8($body),
            MatrixData::U16($v) => MatrixData::U16($body),
            MatrixData::I16($v) => MatrixData::I16($body),
            MatrixData::I32($v) => MatrixData::I32($body),
            MatrixData::F32($v) => MatrixData::F32($body),
            MatrixData::F64($v) => MatrixData::F64($body),
        }
    };
}

/// Evaluate `$body` against the buffer of whichever variant is present.
macro_rules! each_data {
    ($data:expr, $v:ident => $body:expr) => {
        match $data {
            MatrixData::U8($v) => $body,
            MatrixData::I8($v) => $body,
            MatrixData::U16($v) => $body,
            MatrixData::I16($v) => $body,
            MatrixData::I32($v) => $body,
            MatrixData::F32($v) => $body,
            MatrixData::F64($v) => $body,
        }
    };
}

pub(crate) use {each_data, map_data};

impl MatrixData {
    pub fn depth(&self) -> Depth {
        match self {
            MatrixData::U8(_) => Depth::U8,
            MatrixData::I8(_) => Depth::I8,
            MatrixData::U16(_) => Depth::U16,
            MatrixData::I16(_) => Depth::I16,
            MatrixData::I32(_) => Depth::I32,
            MatrixData::F32(_) => Depth::F32,
            MatrixData::F64(_) => Depth::F64,
        }
    }

    pub fn len(&self) -> usize {
        each_data!(self, v => v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build a buffer of `depth` from `f64` values, saturating each one.
    pub fn from_f64<I: IntoIterator<Item = f64>>(depth: Depth, values: I) -> Self {
        let values = values.into_iter();
        match depth {
            Depth::U8 => MatrixData::U8(values.map(<u8 as Element>::saturate).collect()),
            Depth::I8 => MatrixData::I8(values.map(<i8 as Element>::saturate).collect()),
            Depth::U16 => MatrixData::U16(values.map(<u16 as Element>::saturate).collect()),
            Depth::I16 => MatrixData::I16(values.map(<i16 as Element>::saturate).collect()),
            Depth::I32 => MatrixData::I32(values.map(<i32 as Element>::saturate).collect()),
            Depth::F32 => MatrixData::F32(values.map(<f32 as Element>::saturate).collect()),
            Depth::F64 => MatrixData::F64(values.collect()),
        }
    }

    /// Widen every element to `f64`.
    pub fn to_f64(&self) -> Vec<f64> {
        each_data!(self, v => v.iter().map(|&x| x.widen()).collect())
    }

    fn zeros(depth: Depth, len: usize) -> Self {
        match depth {
            Depth::U8 => MatrixData::U8(vec![0; len]),
            Depth::I8 => MatrixData::I8(vec![0; len]),
            Depth::U16 => MatrixData::U16(vec![0; len]),
            Depth::I16 => MatrixData::I16(vec![0; len]),
            Depth::I32 => MatrixData::I32(vec![0; len]),
            Depth::F32 => MatrixData::F32(vec![0.0; len]),
            Depth::F64 => MatrixData::F64(vec![0.0; len]),
        }
    }
}

/// Scalar element of a [`MatrixData`] buffer.
pub trait Element: Copy {
    const DEPTH: Depth;

    /// Round (for integers) and clamp an `f64` into this type's range.
    fn saturate(v: f64) -> Self;

    fn widen(self) -> f64;

    fn wrap(data: Vec<Self>) -> MatrixData;
}

macro_rules! int_element {
    ($t:ty, $variant:ident) => {
        impl Element for $t {
            const DEPTH: Depth = Depth::$variant;

            fn saturate(v: f64) -> Self {
                if v.is_nan() {
                    return 0;
                }
                // `as` from float saturates at the bounds; round first.
                v.round_ties_even() as $t
            }

            fn widen(self) -> f64 {
                self as f64
            }

            fn wrap(data: Vec<Self>) -> MatrixData {
                MatrixData::$variant(data)
            }
        }
    };
}

int_element!(u8, U8);
int_element!(i8, I8);
int_element!(u16, U16);
int_element!(i16, I16);
int_element!(i32, I32);

impl Element for f32 {
    const DEPTH: Depth = Depth::F32;

    fn saturate(v: f64) -> Self {
        v as f32
    }

    fn widen(self) -> f64 {
        self as f64
    }

    fn wrap(data: Vec<Self>) -> MatrixData {
        MatrixData::F32(data)
    }
}

impl Element for f64 {
    const DEPTH: Depth = Depth::F64;

    fn saturate(v: f64) -> Self {
        v
    }

    fn widen(self) -> f64 {
        self
    }

    fn wrap(data: Vec<Self>) -> MatrixData {
        MatrixData::F64(data)
    }
}

/// Axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Rect { x, y, width, height }
    }
}

/// Row-major multi-channel matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    channels: usize,
    data: MatrixData,
}

impl Matrix {
    /// Wrap an existing buffer. Panics if the length does not match.
    pub fn new(rows: usize, cols: usize, channels: usize, data: MatrixData) -> Self {
        assert!(channels > 0, "matrix needs at least one channel");
        assert_eq!(
            data.len(),
            rows * cols * channels,
            "buffer length does not match {rows}x{cols}x{channels}"
        );
        Matrix { rows, cols, channels, data }
    }

    /// Typed constructor, e.g. `Matrix::from_vec(2, 2, 1, vec![0u8; 4])`.
    pub fn from_vec<T: Element>(rows: usize, cols: usize, channels: usize, data: Vec<T>) -> Self {
        Matrix::new(rows, cols, channels, T::wrap(data))
    }

    pub fn zeros(rows: usize, cols: usize, channels: usize, depth: Depth) -> Self {
        Matrix::new(rows, cols, channels, MatrixData::zeros(depth, rows * cols * channels))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn depth(&self) -> Depth {
        self.data.depth()
    }

    pub fn data(&self) -> &MatrixData {
        &self.data
    }

    pub fn same_shape(&self, other: &Matrix) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.channels == other.channels
    }

    /// Borrow the buffer as `f32` if that is the depth.
    pub fn as_f32(&self) -> Option<&[f32]> {
        match &self.data {
            MatrixData::F32(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow the buffer as `u8` if that is the depth.
    pub fn as_u8(&self) -> Option<&[u8]> {
        match &self.data {
            MatrixData::U8(v) => Some(v),
            _ => None,
        }
    }

    /// Element at (`row`, `col`, `channel`) widened to `f64`.
    pub fn get(&self, row: usize, col: usize, channel: usize) -> f64 {
        assert!(row < self.rows && col < self.cols && channel < self.channels);
        let idx = (row * self.cols + col) * self.channels + channel;
        each_data!(&self.data, v => v[idx].widen())
    }

    /// Smallest and largest element over all channels. `(0, 0)` when empty.
    pub fn min_max(&self) -> (f64, f64) {
        each_data!(&self.data, v => {
            let mut it = v.iter().map(|&x| x.widen());
            match it.next() {
                None => (0.0, 0.0),
                Some(first) => it.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x))),
            }
        })
    }

    /// Copy out the pixels inside `rect`.
    pub fn roi(&self, rect: Rect) -> Matrix {
        assert!(
            rect.x + rect.width <= self.cols && rect.y + rect.height <= self.rows,
            "roi {rect:?} outside {}x{} matrix",
            self.cols,
            self.rows
        );
        let ch = self.channels;
        let stride = self.cols * ch;
        let data = map_data!(&self.data, v => {
            let mut out = Vec::with_capacity(rect.width * rect.height * ch);
            for r in rect.y..rect.y + rect.height {
                let start = r * stride + rect.x * ch;
                out.extend_from_slice(&v[start..start + rect.width * ch]);
            }
            out
        });
        Matrix::new(rect.height, rect.width, ch, data)
    }

    /// Top-left `cols × rows` sub-matrix.
    pub fn crop(&self, cols: usize, rows: usize) -> Matrix {
        self.roi(Rect::new(0, 0, cols, rows))
    }

    /// Overwrite the region starting at (`x`, `y`) with `src`.
    pub fn paste(&mut self, x: usize, y: usize, src: &Matrix) {
        assert_eq!(self.channels, src.channels, "paste channel mismatch");
        assert!(
            x + src.cols <= self.cols && y + src.rows <= self.rows,
            "paste of {}x{} at ({x}, {y}) outside {}x{} matrix",
            src.cols,
            src.rows,
            self.cols,
            self.rows
        );
        let ch = self.channels;
        let dst_stride = self.cols * ch;
        let src_stride = src.cols * ch;
        let rows = src.rows;
        match (&mut self.data, &src.data) {
            (MatrixData::U8(d), MatrixData::U8(s)) => paste_rows(d, s, dst_stride, src_stride, x * ch, y, rows),
            (MatrixData::I8(d), MatrixData::I8(s)) => paste_rows(d, s, dst_stride, src_stride, x * ch, y, rows),
            (MatrixData::U16(d), MatrixData::U16(s)) => paste_rows(d, s, dst_stride, src_stride, x * ch, y, rows),
            (MatrixData::I16(d), MatrixData::I16(s)) => paste_rows(d, s, dst_stride, src_stride, x * ch, y, rows),
            (MatrixData::I32(d), MatrixData::I32(s)) => paste_rows(d, s, dst_stride, src_stride, x * ch, y, rows),
            (MatrixData::F32(d), MatrixData::F32(s)) => paste_rows(d, s, dst_stride, src_stride, x * ch, y, rows),
            (MatrixData::F64(d), MatrixData::F64(s)) => paste_rows(d, s, dst_stride, src_stride, x * ch, y, rows),
            (d, s) => panic!("paste depth mismatch: {:?} into {:?}", s.depth(), d.depth()),
        }
    }

    /// Set every channel of every pixel inside `rect` to `value`.
    ///
    /// The rectangle is clipped to the matrix; `value` saturates to the depth.
    pub fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, value: f64) {
        let cx0 = x0.clamp(0, self.cols as i64) as usize;
        let cx1 = x1.clamp(0, self.cols as i64) as usize;
        let cy0 = y0.clamp(0, self.rows as i64) as usize;
        let cy1 = y1.clamp(0, self.rows as i64) as usize;
        if cx0 >= cx1 || cy0 >= cy1 {
            return;
        }
        let ch = self.channels;
        let stride = self.cols * ch;
        each_data!(&mut self.data, v => {
            let fill = Element::saturate(value);
            for r in cy0..cy1 {
                v[r * stride + cx0 * ch..r * stride + cx1 * ch].fill(fill);
            }
        })
    }

    /// Flip around both axes in place (a 180° rotation).
    pub fn flip_both(&mut self) {
        let ch = self.channels;
        each_data!(&mut self.data, v => {
            v.reverse();
            if ch > 1 {
                // Reversing the whole buffer also reversed the channel order.
                for px in v.chunks_exact_mut(ch) {
                    px.reverse();
                }
            }
        })
    }
}

fn paste_rows<T: Copy>(
    dst: &mut [T],
    src: &[T],
    dst_stride: usize,
    src_stride: usize,
    x_off: usize,
    y: usize,
    rows: usize,
) {
    for r in 0..rows {
        let d = (y + r) * dst_stride + x_off;
        dst[d..d + src_stride].copy_from_slice(&src[r * src_stride..(r + 1) * src_stride]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(rows: usize, cols: usize) -> Matrix {
        Matrix::from_vec(rows, cols, 1, (0..rows * cols).map(|i| i as f32).collect())
    }

    #[test]
    fn saturate_rounds_and_clamps() {
        assert_eq!(<u8 as Element>::saturate(-12.0), 0);
        assert_eq!(<u8 as Element>::saturate(300.0), 255);
        assert_eq!(<u8 as Element>::saturate(127.6), 128);
        assert_eq!(<i8 as Element>::saturate(-200.0), -128);
        assert_eq!(<u16 as Element>::saturate(f64::NAN), 0);
        assert_eq!(<i32 as Element>::saturate(1e12), i32::MAX);
    }

    #[test]
    fn saturate_rounds_halves_to_even() {
        assert_eq!(<u8 as Element>::saturate(2.5), 2);
        assert_eq!(<u8 as Element>::saturate(3.5), 4);
        assert_eq!(<u8 as Element>::saturate(254.5), 254);
        assert_eq!(<i16 as Element>::saturate(-1.5), -2);
        assert_eq!(<i16 as Element>::saturate(-2.5), -2);
        assert_eq!(<i32 as Element>::saturate(0.5), 0);
    }

    #[test]
    fn roi_and_paste_are_inverse() {
        let m = ramp(4, 5);
        let part = m.roi(Rect::new(1, 2, 3, 2));
        assert_eq!(part.rows(), 2);
        assert_eq!(part.cols(), 3);
        assert_eq!(part.as_f32().unwrap(), &[11.0, 12.0, 13.0, 16.0, 17.0, 18.0]);

        let mut blank = Matrix::zeros(4, 5, 1, Depth::F32);
        blank.paste(1, 2, &part);
        assert_eq!(blank.get(2, 1, 0), 11.0);
        assert_eq!(blank.get(3, 3, 0), 18.0);
        assert_eq!(blank.get(0, 0, 0), 0.0);
    }

    #[test]
    #[should_panic(expected = "paste depth mismatch")]
    fn paste_rejects_depth_mismatch() {
        let mut dst = Matrix::zeros(2, 2, 1, Depth::U8);
        dst.paste(0, 0, &Matrix::zeros(1, 1, 1, Depth::F32));
    }

    #[test]
    fn flip_both_rotates_pixels_not_channels() {
        let mut m = Matrix::from_vec(1, 2, 3, vec![1u8, 2, 3, 4, 5, 6]);
        m.flip_both();
        assert_eq!(m.as_u8().unwrap(), &[4, 5, 6, 1, 2, 3]);

        let mut g = ramp(2, 3);
        g.flip_both();
        assert_eq!(g.as_f32().unwrap(), &[5.0, 4.0, 3.0, 2.0, 1.0, 0.0]);
        g.flip_both();
        assert_eq!(g, ramp(2, 3));
    }

    #[test]
    fn fill_rect_clips_to_bounds() {
        let mut m = Matrix::zeros(3, 3, 1, Depth::U8);
        m.fill_rect(-5, 1, 2, 10, 400.0);
        assert_eq!(m.as_u8().unwrap(), &[0, 0, 0, 255, 255, 0, 255, 255, 0]);

        // Entirely outside: no-op.
        m.fill_rect(5, 5, 9, 9, 1.0);
        assert_eq!(m.min_max(), (0.0, 255.0));
    }

    #[test]
    fn min_max_over_all_elements() {
        let m = Matrix::from_vec(1, 4, 1, vec![3i16, -7, 12, 0]);
        assert_eq!(m.min_max(), (-7.0, 12.0));
        assert_eq!(Matrix::zeros(0, 0, 1, Depth::F32).min_max(), (0.0, 0.0));
    }
}
