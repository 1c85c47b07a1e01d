//! Test Vector Generation — reproducible fixed-point stimuli with golden
//! doubles
//!
//! A [`VectorSpec`] pins down everything a stimulus depends on: length,
//! block exponent, and PRNG seed. Generation produces the raw fixed-point
//! buffer the device consumes *and* its exact double-precision image in
//! one call, so the golden side never drifts from the stimulus. The spec
//! round-trips through YAML, letting a harness keep failing cases as
//! plain-text artifacts and replay them bit-for-bit later.
//!
//! ## Example
//!
//! ```rust
//! use bfp_golden::vector::{int32_vector, VectorSpec};
//!
//! let spec = VectorSpec { length: 16, exponent: -31, seed: 42 };
//! let again = VectorSpec::from_yaml(&spec.to_yaml()).unwrap();
//! assert_eq!(spec, again);
//!
//! // same spec, same vector — always
//! let a = int32_vector(&spec).unwrap();
//! let b = int32_vector(&spec).unwrap();
//! assert_eq!(a.raw, b.raw);
//! ```

use crate::convert;
use crate::random::TestRng;
use crate::types::{Complex, ComplexI32, GoldenError, GoldenResult};
use serde::{Deserialize, Serialize};

/// Everything a reproducible stimulus depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorSpec {
    /// Number of elements to generate.
    pub length: usize,
    /// Block exponent of the fixed-point buffer.
    pub exponent: i32,
    /// PRNG seed word.
    pub seed: u32,
}

impl VectorSpec {
    pub fn new(length: usize, exponent: i32, seed: u32) -> Self {
        Self { length, exponent, seed }
    }

    /// Reject specs no generator can honor.
    pub fn validate(&self) -> GoldenResult<()> {
        if self.length == 0 {
            return Err(GoldenError::EmptyVector);
        }
        Ok(())
    }

    /// Parse and validate a spec from YAML.
    pub fn from_yaml(yaml: &str) -> GoldenResult<Self> {
        let spec: Self =
            serde_yaml::from_str(yaml).map_err(|e| GoldenError::SpecParse(e.to_string()))?;
        spec.validate()?;
        Ok(spec)
    }

    /// Render the spec as YAML.
    pub fn to_yaml(&self) -> String {
        serde_yaml::to_string(self).unwrap_or_default()
    }
}

/// A generated real stimulus: raw fixed-point buffer plus its golden
/// double image at the shared exponent.
#[derive(Debug, Clone, PartialEq)]
pub struct TestVector {
    pub raw: Vec<i32>,
    pub exponent: i32,
    pub golden: Vec<f64>,
}

/// A generated complex stimulus.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexTestVector {
    pub raw: Vec<ComplexI32>,
    pub exponent: i32,
    pub golden: Vec<Complex>,
}

/// Generate a signed 32-bit stimulus from a spec.
pub fn int32_vector(spec: &VectorSpec) -> GoldenResult<TestVector> {
    spec.validate()?;
    let mut rng = TestRng::new(spec.seed);
    let mut raw = Vec::with_capacity(spec.length);
    let mut golden = Vec::with_capacity(spec.length);
    for _ in 0..spec.length {
        let v = rng.next_i32();
        raw.push(v);
        golden.push(convert::i32_to_f64(v, spec.exponent));
    }
    tracing::debug!(
        length = spec.length,
        exponent = spec.exponent,
        seed = spec.seed,
        "generated int32 test vector"
    );
    Ok(TestVector { raw, exponent: spec.exponent, golden })
}

/// Generate a complex stimulus from a spec; each element draws the real
/// component first, then the imaginary one.
pub fn complex_vector(spec: &VectorSpec) -> GoldenResult<ComplexTestVector> {
    spec.validate()?;
    let mut rng = TestRng::new(spec.seed);
    let mut raw = Vec::with_capacity(spec.length);
    let mut golden = Vec::with_capacity(spec.length);
    for _ in 0..spec.length {
        let sample = ComplexI32::new(rng.next_i32(), rng.next_i32());
        raw.push(sample);
        golden.push(convert::complex_i32_to_f64(sample, spec.exponent));
    }
    tracing::debug!(
        length = spec.length,
        exponent = spec.exponent,
        seed = spec.seed,
        "generated complex test vector"
    );
    Ok(ComplexTestVector { raw, exponent: spec.exponent, golden })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare;
    use crate::fft::{bit_reverse, forward_fft, inverse_fft, SineTable};

    #[test]
    fn zero_length_spec_is_rejected() {
        let spec = VectorSpec::new(0, -31, 1);
        assert!(matches!(int32_vector(&spec), Err(GoldenError::EmptyVector)));
        assert!(matches!(complex_vector(&spec), Err(GoldenError::EmptyVector)));
    }

    #[test]
    fn yaml_roundtrip_preserves_spec() {
        let spec = VectorSpec::new(256, -24, 0xDEAD_BEEF);
        let parsed = VectorSpec::from_yaml(&spec.to_yaml()).unwrap();
        assert_eq!(parsed, spec);
    }

    #[test]
    fn malformed_yaml_is_a_spec_parse_error() {
        assert!(matches!(
            VectorSpec::from_yaml("length: [not an int]"),
            Err(GoldenError::SpecParse(_))
        ));
    }

    #[test]
    fn same_spec_generates_identical_vectors() {
        let spec = VectorSpec::new(64, -31, 7);
        let a = int32_vector(&spec).unwrap();
        let b = int32_vector(&spec).unwrap();
        assert_eq!(a, b);

        let a = complex_vector(&spec).unwrap();
        let b = complex_vector(&spec).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn golden_image_matches_raw_exactly() {
        let spec = VectorSpec::new(32, -31, 3);
        let v = int32_vector(&spec).unwrap();
        assert_eq!(
            compare::bfp_vector_i32(&v.raw, v.exponent, &v.golden, 0, v.raw.len()),
            0
        );
    }

    #[test]
    fn complex_draws_real_component_first() {
        let spec = VectorSpec::new(4, -31, 11);
        let complex = complex_vector(&spec).unwrap();
        let flat = int32_vector(&VectorSpec::new(8, -31, 11)).unwrap();
        for (i, sample) in complex.raw.iter().enumerate() {
            assert_eq!(sample.re, flat.raw[2 * i]);
            assert_eq!(sample.im, flat.raw[2 * i + 1]);
        }
    }

    #[test]
    fn fft_roundtrip_recovers_generated_stimulus() {
        // seed 1, 8 signed samples at exponent -31 (values in [-1, 1)),
        // forward then inverse transform, scale by 1/8
        let spec = VectorSpec::new(8, -31, 1);
        let vector = int32_vector(&spec).unwrap();
        assert!(vector.golden.iter().all(|v| (-1.0..1.0).contains(v)));

        let table = SineTable::new(8);
        let mut buf: Vec<Complex> = vector
            .golden
            .iter()
            .map(|&re| Complex::new(re, 0.0))
            .collect();
        bit_reverse(&mut buf);
        forward_fft(&mut buf, &table);
        bit_reverse(&mut buf);
        inverse_fft(&mut buf, &table);

        let peak = vector.golden.iter().fold(0.0, |m: f64, &v| m.max(v.abs()));
        for (recovered, &original) in buf.iter().zip(&vector.golden) {
            let scaled = recovered.re / 8.0;
            assert!(
                (scaled - original).abs() / peak < 1e-9,
                "{scaled} vs {original}"
            );
            assert!(recovered.im.abs() / 8.0 < 1e-12);
        }
    }
}
