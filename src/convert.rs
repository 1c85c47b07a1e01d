//! Conversion Layer — fixed-point integers with explicit exponents ↔ f64
//!
//! Every fixed-point buffer in the system carries its scale as an explicit
//! power-of-two exponent: the value of raw integer `x` at exponent `e` is
//! `x * 2^e`. Widening to double is exact up to the 53-bit mantissa.
//! Narrowing is `round(v / 2^e)` with two properties the comparator's
//! pass/fail thresholds depend on, so they are part of the contract:
//!
//! - **Rounding**: round to nearest, ties away from zero (`0.5` LSB goes
//!   to `1`, `-0.5` LSB to `-1`). A half-to-even implementation differs by
//!   one LSB on exact ties and shows up as spurious comparator bits.
//! - **Saturation**: values past the representable range clamp to the
//!   type's min/max instead of wrapping. Overflow test cases rely on
//!   reading back exactly the rail value. NaN narrows to 0.
//!
//! ## Example
//!
//! ```rust
//! use bfp_golden::convert;
//!
//! // Q1.31: exponent -31 puts i32 in [-1, 1)
//! assert_eq!(convert::i32_to_f64(1 << 30, -31), 0.5);
//! assert_eq!(convert::f64_to_i32(0.5, -31), 1 << 30);
//!
//! // 1.0 is one past the largest Q1.31 value: saturates, never wraps
//! assert_eq!(convert::f64_to_i32(1.0, -31), i32::MAX);
//! ```

use crate::types::{Complex, ComplexI32};

/// 2^exp as an f64 (exact for every exponent a BFP buffer can carry).
#[inline]
fn exp2i(exp: i32) -> f64 {
    (exp as f64).exp2()
}

/// Round to nearest with ties away from zero, then saturate into the
/// target integer range. Rust's float-to-int `as` cast clamps out-of-range
/// values and maps NaN to 0, which is exactly the narrowing contract.
macro_rules! narrow {
    ($v:expr, $exp:expr, $t:ty) => {
        ($v / exp2i($exp)).round() as $t
    };
}

pub fn i16_to_f64(x: i16, exp: i32) -> f64 {
    x as f64 * exp2i(exp)
}

pub fn u16_to_f64(x: u16, exp: i32) -> f64 {
    x as f64 * exp2i(exp)
}

pub fn i32_to_f64(x: i32, exp: i32) -> f64 {
    x as f64 * exp2i(exp)
}

pub fn u32_to_f64(x: u32, exp: i32) -> f64 {
    x as f64 * exp2i(exp)
}

pub fn i64_to_f64(x: i64, exp: i32) -> f64 {
    x as f64 * exp2i(exp)
}

pub fn u64_to_f64(x: u64, exp: i32) -> f64 {
    x as f64 * exp2i(exp)
}

pub fn f64_to_i16(v: f64, exp: i32) -> i16 {
    narrow!(v, exp, i16)
}

pub fn f64_to_u16(v: f64, exp: i32) -> u16 {
    narrow!(v, exp, u16)
}

pub fn f64_to_i32(v: f64, exp: i32) -> i32 {
    narrow!(v, exp, i32)
}

pub fn f64_to_u32(v: f64, exp: i32) -> u32 {
    narrow!(v, exp, u32)
}

pub fn f64_to_i64(v: f64, exp: i32) -> i64 {
    narrow!(v, exp, i64)
}

pub fn f64_to_u64(v: f64, exp: i32) -> u64 {
    narrow!(v, exp, u64)
}

/// Widen a fixed-point complex pair under one shared exponent.
pub fn complex_i32_to_f64(x: ComplexI32, exp: i32) -> Complex {
    Complex::new(i32_to_f64(x.re, exp), i32_to_f64(x.im, exp))
}

/// Narrow a complex double into a fixed-point pair under one shared
/// exponent; each component rounds and saturates independently.
pub fn f64_to_complex_i32(v: Complex, exp: i32) -> ComplexI32 {
    ComplexI32::new(f64_to_i32(v.re, exp), f64_to_i32(v.im, exp))
}

/// Re-scale an unsigned 32-bit value at exponent `exp` into Q8.24
/// (8 integer bits, 24 fractional bits, signed). A fixed-exponent case of
/// the general narrowing rule: saturates at the Q8.24 rails.
pub fn u32_to_q8_24(x: u32, exp: i32) -> i32 {
    f64_to_i32(u32_to_f64(x, exp), -24)
}
