//! # BFP Golden — verification substrate for fixed-point DSP pipelines
//!
//! A device under test runs its signal chain in fixed point; this crate
//! gives the host-side harness everything it needs to decide whether that
//! chain is numerically right:
//!
//! - **Deterministic stimuli**: a CRC-based PRNG over an explicit 32-bit
//!   state word ([`random`]) and spec-driven vector generation
//!   ([`vector`]) reproduce any test case bit-for-bit, on any platform.
//! - **Conversion layer** ([`convert`]): fixed-point integers of several
//!   widths with explicit power-of-two exponents, widened to IEEE double
//!   exactly and narrowed back with saturating, ties-away-from-zero
//!   rounding.
//! - **Golden transforms**: an explicit radix-2 FFT engine ([`fft`]) —
//!   bit-reversal, forward/inverse butterflies over a caller-owned sine
//!   table, and real-pair spectrum split/merge — mirroring the device's
//!   pipeline stage for stage in double precision.
//! - **Derived golden scalars**: frame power as a normalized
//!   block-floating-point pair ([`frame_power`]) and parabolic sub-bin
//!   peak estimation ([`peak`]).
//! - **Scoring** ([`compare`]): a worst-case "bits of lost precision"
//!   metric between a fixed-point array and its golden double reference,
//!   thresholded by the harness.
//!
//! Everything is a pure, synchronous function over caller-owned buffers:
//! no global state, no threads, no I/O. FFT buffers are mutated in place
//! by design; copy first if the pre-transform data matters. Concurrent
//! use is safe with disjoint buffers and disjoint PRNG words.
//!
//! ## Example
//!
//! ```rust
//! use bfp_golden::prelude::*;
//! use bfp_golden::{compare, fft, vector};
//!
//! // deterministic stimulus at exponent -31 (values in [-1, 1))
//! let spec = VectorSpec { length: 8, exponent: -31, seed: 1 };
//! let stimulus = vector::int32_vector(&spec).unwrap();
//!
//! // golden forward transform of the double image
//! let table = SineTable::new(8);
//! let mut buf: Vec<Complex> = stimulus
//!     .golden
//!     .iter()
//!     .map(|&re| Complex::new(re, 0.0))
//!     .collect();
//! fft::bit_reverse(&mut buf);
//! fft::forward_fft(&mut buf, &table);
//!
//! // a perfect device output scores zero lost bits
//! let metric = compare::bfp_vector_i32(
//!     &stimulus.raw,
//!     stimulus.exponent,
//!     &stimulus.golden,
//!     0,
//!     spec.length,
//! );
//! assert_eq!(metric, 0);
//! ```

pub mod compare;
pub mod convert;
pub mod fft;
pub mod frame_power;
pub mod observe;
pub mod peak;
pub mod pyprint;
pub mod random;
pub mod types;
pub mod vector;

/// The names a harness touches every day.
pub mod prelude {
    pub use crate::fft::SineTable;
    pub use crate::frame_power::{BfpPower, MantissaWidth};
    pub use crate::random::TestRng;
    pub use crate::types::{Complex, ComplexI32, GoldenError, GoldenResult};
    pub use crate::vector::{ComplexTestVector, TestVector, VectorSpec};
}
