//! BFP Vector Comparator — worst-case precision loss against a golden
//! reference
//!
//! Scores a device-produced fixed-point array (raw integers plus one
//! shared exponent) against the double-precision golden array over a
//! sub-range. Each element is widened through the Conversion Layer, the
//! absolute difference is expressed in LSB units at the array's exponent,
//! and the returned metric is the **bit length of the worst LSB
//! difference**:
//!
//! - `0` — every element matches to within half an LSB;
//! - `1` — worst element is off by one LSB;
//! - `k` — worst element is off by up to `2^k - 1` LSBs, i.e. the bottom
//!   `k` bits of that element carry no information.
//!
//! The metric never decreases when any element's error grows, so a
//! harness can threshold it directly ("fail above 3 bits"). This module
//! only computes the number; the pass/fail decision belongs to the
//! harness.
//!
//! Range violations are harness bugs and panic; an empty range is a
//! perfect match.
//!
//! ## Example
//!
//! ```rust
//! use bfp_golden::{compare, convert};
//!
//! let raw = vec![1 << 20, -(1 << 21), 3 << 19];
//! let golden: Vec<f64> = raw.iter().map(|&v| convert::i32_to_f64(v, -31)).collect();
//! assert_eq!(compare::bfp_vector_i32(&raw, -31, &golden, 0, 3), 0);
//! ```

use crate::convert;
use crate::types::{Complex, ComplexI32};

/// Absolute difference in LSB units at exponent `exp`, rounded to
/// nearest and saturating at the 64-bit cap.
#[inline]
fn lsb_error(fixed: f64, reference: f64, exp: i32) -> u64 {
    convert::f64_to_u64((fixed - reference).abs(), exp)
}

#[inline]
fn bit_length(x: u64) -> u32 {
    u64::BITS - x.leading_zeros()
}

fn check_range(len_fixed: usize, len_ref: usize, start: usize, count: usize) {
    assert!(
        start <= len_fixed && count <= len_fixed - start,
        "compare range {start}+{count} exceeds fixed array length {len_fixed}"
    );
    assert!(
        start <= len_ref && count <= len_ref - start,
        "compare range {start}+{count} exceeds reference length {len_ref}"
    );
}

/// Worst-case precision loss of a signed 32-bit array.
pub fn bfp_vector_i32(b: &[i32], b_exp: i32, reference: &[f64], start: usize, count: usize) -> u32 {
    check_range(b.len(), reference.len(), start, count);
    let mut worst = 0u64;
    for i in start..start + count {
        worst = worst.max(lsb_error(convert::i32_to_f64(b[i], b_exp), reference[i], b_exp));
    }
    bit_length(worst)
}

/// Worst-case precision loss of an unsigned 32-bit array.
pub fn bfp_vector_u32(b: &[u32], b_exp: i32, reference: &[f64], start: usize, count: usize) -> u32 {
    check_range(b.len(), reference.len(), start, count);
    let mut worst = 0u64;
    for i in start..start + count {
        worst = worst.max(lsb_error(convert::u32_to_f64(b[i], b_exp), reference[i], b_exp));
    }
    bit_length(worst)
}

/// Worst-case precision loss of a signed 16-bit array.
pub fn bfp_vector_i16(b: &[i16], b_exp: i32, reference: &[f64], start: usize, count: usize) -> u32 {
    check_range(b.len(), reference.len(), start, count);
    let mut worst = 0u64;
    for i in start..start + count {
        worst = worst.max(lsb_error(convert::i16_to_f64(b[i], b_exp), reference[i], b_exp));
    }
    bit_length(worst)
}

/// Worst-case precision loss of a fixed-point complex array; real and
/// imaginary components score independently and the worse one wins.
pub fn bfp_vector_complex(
    b: &[ComplexI32],
    b_exp: i32,
    reference: &[Complex],
    start: usize,
    count: usize,
) -> u32 {
    check_range(b.len(), reference.len(), start, count);
    let mut worst = 0u64;
    for i in start..start + count {
        let wide = convert::complex_i32_to_f64(b[i], b_exp);
        worst = worst.max(lsb_error(wide.re, reference[i].re, b_exp));
        worst = worst.max(lsb_error(wide.im, reference[i].im, b_exp));
    }
    bit_length(worst)
}
