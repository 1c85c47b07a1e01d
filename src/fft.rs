//! FFT Engine — in-place radix-2 complex FFT over double-precision buffers
//!
//! The golden reference for the device's fixed-point FFT. The device
//! mirrors this pipeline stage for stage, so the engine exposes the raw
//! building blocks instead of a one-shot transform:
//!
//! 1. [`bit_reverse`] permutes the buffer into bit-reversed order.
//! 2. [`forward_fft`] runs decimation-in-time butterflies over an
//!    *already bit-reversed* buffer, producing the unnormalized DFT in
//!    natural order.
//! 3. [`inverse_fft`] is the same network with conjugated twiddles and is
//!    also unnormalized — the caller applies `1/N` and any bit-reversal,
//!    exactly as the device-side driver does.
//! 4. [`split_spectrum`] / [`merge_spectra`] pack two independent real
//!    signals through one complex transform and back (the classic
//!    two-real-FFTs-for-the-price-of-one trick).
//!
//! Twiddles come from a [`SineTable`] holding one quarter period of sine
//! at the resolution of the transform length. The table is built
//! explicitly for a requested `N` and passed by reference into every
//! call; a table never silently serves a different length (asserted).
//!
//! All arithmetic is double precision; no fixed-point rounding happens
//! here. Buffers are mutated in place by design — callers that need the
//! pre-transform data copy it first. `N = 1` is an identity for every
//! operation.
//!
//! ## Example
//!
//! ```rust
//! use bfp_golden::fft::{bit_reverse, forward_fft, SineTable};
//! use num_complex::Complex64;
//!
//! // FFT of a constant puts all energy in the DC bin
//! let table = SineTable::new(4);
//! let mut buf = vec![Complex64::new(1.0, 0.0); 4];
//! bit_reverse(&mut buf);
//! forward_fft(&mut buf, &table);
//!
//! assert!((buf[0].re - 4.0).abs() < 1e-12);
//! assert!(buf[1].norm() < 1e-12);
//! ```

use crate::types::Complex;
use std::f64::consts::PI;

/// Quarter-wave sine table driving the butterfly stages for one
/// transform length.
///
/// Holds `sin(2*pi*i/N)` for `i` in `0..=N/4`; the full set of twiddles
/// `W_N^j = exp(-2*pi*i*j/N)` for `j` in `0..N/2` is recovered through
/// quadrant symmetry, so the table costs `N/4 + 1` doubles.
#[derive(Debug, Clone, PartialEq)]
pub struct SineTable {
    sine: Vec<f64>,
    n: usize,
}

impl SineTable {
    /// Build the table for transform length `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not a power of two — a broken harness, not a
    /// runtime condition.
    pub fn new(n: usize) -> Self {
        assert!(n.is_power_of_two(), "transform length {n} is not a power of two");
        let quarter = n / 4;
        let sine = (0..=quarter)
            .map(|i| (2.0 * PI * i as f64 / n as f64).sin())
            .collect();
        Self { sine, n }
    }

    /// Transform length this table was built for.
    pub fn fft_length(&self) -> usize {
        self.n
    }

    /// Raw quarter-wave samples (`N/4 + 1` values).
    pub fn as_slice(&self) -> &[f64] {
        &self.sine
    }

    /// Forward twiddle `W_N^j = exp(-2*pi*i*j/N)`, valid for `j < N/2`.
    #[inline]
    fn twiddle(&self, j: usize) -> Complex {
        if j == 0 {
            return Complex::new(1.0, 0.0);
        }
        let quarter = self.n / 4;
        let (cos, sin) = if j <= quarter {
            (self.sine[quarter - j], self.sine[j])
        } else {
            (-self.sine[j - quarter], self.sine[self.n / 2 - j])
        };
        Complex::new(cos, -sin)
    }
}

/// Permute `buffer` into bit-reversed index order, in place.
///
/// A self-inverse pairwise swap: applying it twice restores the buffer
/// exactly.
///
/// # Panics
///
/// Panics if the length is not a power of two.
pub fn bit_reverse(buffer: &mut [Complex]) {
    let n = buffer.len();
    assert!(n.is_power_of_two(), "transform length {n} is not a power of two");
    if n == 1 {
        return;
    }
    let shift = usize::BITS - n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> shift;
        if i < j {
            buffer.swap(i, j);
        }
    }
}

/// Unnormalized forward DFT of an already bit-reversed buffer.
///
/// # Panics
///
/// Panics if the buffer length does not match the table's length.
pub fn forward_fft(buffer: &mut [Complex], table: &SineTable) {
    butterflies(buffer, table, false);
}

/// Unnormalized inverse DFT of an already bit-reversed buffer.
///
/// The caller owns the `1/N` scaling.
///
/// # Panics
///
/// Panics if the buffer length does not match the table's length.
pub fn inverse_fft(buffer: &mut [Complex], table: &SineTable) {
    butterflies(buffer, table, true);
}

fn butterflies(buffer: &mut [Complex], table: &SineTable, inverse: bool) {
    let n = buffer.len();
    assert_eq!(
        n,
        table.fft_length(),
        "buffer length {} does not match sine table length {}",
        n,
        table.fft_length()
    );

    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let stride = n / len;
        for k in 0..half {
            let mut w = table.twiddle(k * stride);
            if inverse {
                w = w.conj();
            }
            let mut base = 0;
            while base < n {
                let top = buffer[base + k];
                let bot = w * buffer[base + half + k];
                buffer[base + k] = top + bot;
                buffer[base + half + k] = top - bot;
                base += len;
            }
        }
        len <<= 1;
    }
}

/// Separate the FFT of a packed real pair into two half-range spectra,
/// in place.
///
/// Input: the forward FFT of `a[n] + i*b[n]`, where `a` and `b` are two
/// independent real signals. Output layout:
///
/// - slots `0..N/2`: spectrum of `a`, natural bin order;
/// - slots `N/2..N`: spectrum of `b`, natural bin order;
/// - slot 0 of each half packs that signal's DC bin in `.re` and its
///   Nyquist bin in `.im` (both are purely real for a real signal).
///
/// # Panics
///
/// Panics if the length is not a power of two.
pub fn split_spectrum(buffer: &mut [Complex]) {
    let n = buffer.len();
    assert!(n.is_power_of_two(), "transform length {n} is not a power of two");
    if n < 2 {
        return;
    }

    // Conjugate-symmetry separation: each (k, N-k) pair yields bin k of
    // both spectra. B lands in the upper half mirrored; unmirror after.
    for k in 1..n / 2 {
        let x = buffer[k];
        let y = buffer[n - k].conj();
        let a = 0.5 * (x + y);
        let d = x - y;
        let b = Complex::new(0.5 * d.im, -0.5 * d.re);
        buffer[k] = a;
        buffer[n - k] = b;
    }

    let x0 = buffer[0];
    let xm = buffer[n / 2];
    buffer[0] = Complex::new(x0.re, xm.re);
    buffer[n / 2] = Complex::new(x0.im, xm.im);

    for k in 1..n / 4 {
        buffer.swap(n / 2 + k, n - k);
    }
}

/// Exact inverse of [`split_spectrum`]: recombine two packed half-range
/// spectra into the single spectrum of `a[n] + i*b[n]`, in place.
///
/// # Panics
///
/// Panics if the length is not a power of two.
pub fn merge_spectra(buffer: &mut [Complex]) {
    let n = buffer.len();
    assert!(n.is_power_of_two(), "transform length {n} is not a power of two");
    if n < 2 {
        return;
    }

    for k in 1..n / 4 {
        buffer.swap(n / 2 + k, n - k);
    }

    let a0 = buffer[0];
    let b0 = buffer[n / 2];
    buffer[0] = Complex::new(a0.re, b0.re);
    buffer[n / 2] = Complex::new(a0.im, b0.im);

    for k in 1..n / 2 {
        let a = buffer[k];
        let b = buffer[n - k];
        buffer[k] = Complex::new(a.re - b.im, a.im + b.re);
        buffer[n - k] = Complex::new(a.re + b.im, b.re - a.im);
    }
}
