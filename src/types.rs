//! Core types shared across the verification substrate.
//!
//! Fixed-point data moving between a test harness and a device under test
//! is block floating point (BFP): an array of plain integers plus one
//! shared power-of-two exponent, so the represented value of element `m`
//! is `m * 2^exp`. The types here carry no exponent themselves — exponents
//! always travel alongside buffers as explicit parameters, which keeps the
//! layout identical to what the device consumes.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Type alias for complex numbers using f64 precision.
pub type Complex = Complex64;

/// A floating point sample (for real-valued signals).
pub type Sample = f64;

/// Fixed-point complex pair sharing one block exponent.
///
/// Mirrors the device's native complex layout: two 32-bit integers, with
/// the exponent supplied separately by the owning buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComplexI32 {
    /// Real component (raw mantissa).
    pub re: i32,
    /// Imaginary component (raw mantissa).
    pub im: i32,
}

impl ComplexI32 {
    /// Zero in any exponent.
    pub const ZERO: ComplexI32 = ComplexI32 { re: 0, im: 0 };

    pub fn new(re: i32, im: i32) -> Self {
        Self { re, im }
    }
}

/// Result type for fallible harness-facing operations.
pub type GoldenResult<T> = Result<T, GoldenError>;

/// Errors from recoverable validation paths.
///
/// Contract violations in the numeric kernels (bad transform lengths,
/// out-of-bounds compare ranges) are harness bugs and panic instead.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GoldenError {
    #[error("test vector length must be nonzero")]
    EmptyVector,

    #[error("failed to parse vector spec: {0}")]
    SpecParse(String),
}
