//! Frame Power — block-floating-point energy of a fixed-point frame
//!
//! Sums squared magnitudes over a frame of fixed-point complex samples
//! (one shared exponent), accumulating in double precision, and returns
//! the result as a normalized BFP pair: an integer mantissa with the top
//! bit of the requested width set, plus a power-of-two exponent. The
//! device computes the same quantity in fixed point; the harness compares
//! the two pairs to score its accumulation and normalization stages.
//!
//! Works on both sides of the transform:
//!
//! - [`fd_frame_power`] over frequency-domain bins (re² + im² per bin);
//! - [`td_frame_power`] over a time-domain frame, with a flag selecting
//!   whether the imaginary channel carries data or is ignored.
//!
//! ## Example
//!
//! ```rust
//! use bfp_golden::frame_power::{fd_frame_power, MantissaWidth};
//! use bfp_golden::types::ComplexI32;
//!
//! let silent = vec![ComplexI32::ZERO; 64];
//! let power = fd_frame_power(&silent, -31, MantissaWidth::W32);
//! assert_eq!(power.mantissa, 0);
//! ```

use crate::convert;
use crate::types::ComplexI32;
use serde::{Deserialize, Serialize};

/// Output width a [`BfpPower`] mantissa is normalized to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MantissaWidth {
    W16,
    W32,
    W64,
}

impl MantissaWidth {
    pub fn bits(self) -> u32 {
        match self {
            MantissaWidth::W16 => 16,
            MantissaWidth::W32 => 32,
            MantissaWidth::W64 => 64,
        }
    }
}

/// A scalar power value in block floating point: `mantissa * 2^exponent`.
///
/// Nonzero values keep the top bit of their width set so the mantissa
/// carries the maximum available precision; exact zero is
/// `{ mantissa: 0, exponent: 0 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BfpPower {
    pub mantissa: u64,
    pub exponent: i32,
}

impl BfpPower {
    /// Normalize a non-negative double into a width-`width` BFP pair.
    ///
    /// Values below the normal f64 range collapse to zero.
    ///
    /// # Panics
    ///
    /// Panics if `power` is negative or not finite.
    pub fn normalize(power: f64, width: MantissaWidth) -> BfpPower {
        assert!(
            power >= 0.0 && power.is_finite(),
            "power {power} is not a finite non-negative value"
        );
        if power < f64::MIN_POSITIVE {
            return BfpPower { mantissa: 0, exponent: 0 };
        }

        let bits = width.bits();
        // pick the f64 apart: power = m * 2^(msb - 52), m a 53-bit integer
        let msb = ((power.to_bits() >> 52) & 0x7ff) as i32 - 1023;
        let m = (power.to_bits() & ((1u64 << 52) - 1)) | (1u64 << 52);

        let mut exponent = msb + 1 - bits as i32;
        let mut mantissa = if bits >= 53 {
            m << (bits - 53)
        } else {
            // round to nearest, ties away from zero
            let shift = 53 - bits;
            (m + (1u64 << (shift - 1))) >> shift
        };
        // rounding may carry into bit `bits`
        if mantissa >> (bits - 1) > 1 {
            mantissa >>= 1;
            exponent += 1;
        }
        BfpPower { mantissa, exponent }
    }

    /// The represented value, for tolerance-style checks.
    pub fn to_f64(self) -> f64 {
        convert::u64_to_f64(self.mantissa, self.exponent)
    }
}

/// Energy of a range of frequency-domain bins: Σ (re² + im²), each bin a
/// fixed-point complex at shared exponent `exp`.
pub fn fd_frame_power(bins: &[ComplexI32], exp: i32, width: MantissaWidth) -> BfpPower {
    let mut acc = 0.0;
    for bin in bins {
        let re = convert::i32_to_f64(bin.re, exp);
        let im = convert::i32_to_f64(bin.im, exp);
        acc += re * re + im * im;
    }
    BfpPower::normalize(acc, width)
}

/// Energy of a time-domain frame at shared exponent `exp`.
///
/// With `imag_channel == false` the imaginary components are ignored and
/// the buffer is treated as a real signal in the `.re` lanes.
pub fn td_frame_power(
    frame: &[ComplexI32],
    exp: i32,
    imag_channel: bool,
    width: MantissaWidth,
) -> BfpPower {
    let mut acc = 0.0;
    for sample in frame {
        let re = convert::i32_to_f64(sample.re, exp);
        acc += re * re;
        if imag_channel {
            let im = convert::i32_to_f64(sample.im, exp);
            acc += im * im;
        }
    }
    BfpPower::normalize(acc, width)
}
