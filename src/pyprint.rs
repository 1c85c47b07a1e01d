//! Python Pretty-Printers — render arrays as Python literals
//!
//! Failing comparisons are easiest to debug in numpy, so these formatters
//! render named fixed-point arrays as one-line Python assignments,
//! widening every element through the Conversion Layer with the supplied
//! exponent. Output goes to any `io::Write` sink; nothing here opens
//! files or keeps state.
//!
//! ## Example
//!
//! ```rust
//! use bfp_golden::pyprint::python_i32;
//!
//! let mut out = Vec::new();
//! python_i32(&mut out, "x", &[1, -2], 0).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "x = [1e0, -2e0]\n");
//! ```

use crate::convert;
use crate::types::ComplexI32;
use std::io::{self, Write};

fn write_complex(out: &mut impl Write, re: f64, im: f64) -> io::Result<()> {
    let sign = if im.is_sign_negative() { '-' } else { '+' };
    write!(out, "({:e}{}{:e}j)", re, sign, im.abs())
}

fn write_real_list(out: &mut impl Write, name: &str, values: &[f64]) -> io::Result<()> {
    write!(out, "{name} = [")?;
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            write!(out, ", ")?;
        }
        write!(out, "{v:e}")?;
    }
    writeln!(out, "]")
}

/// Frequency-domain complex array as a list of Python complex literals.
pub fn python_fd(
    out: &mut impl Write,
    name: &str,
    data: &[ComplexI32],
    exp: i32,
) -> io::Result<()> {
    write!(out, "{name} = [")?;
    for (i, bin) in data.iter().enumerate() {
        if i > 0 {
            write!(out, ", ")?;
        }
        let wide = convert::complex_i32_to_f64(*bin, exp);
        write_complex(out, wide.re, wide.im)?;
    }
    writeln!(out, "]")
}

/// Time-domain array; `print_imag` selects complex literals or the real
/// lane only.
pub fn python_td(
    out: &mut impl Write,
    name: &str,
    data: &[ComplexI32],
    exp: i32,
    print_imag: bool,
) -> io::Result<()> {
    if print_imag {
        return python_fd(out, name, data, exp);
    }
    let reals: Vec<f64> = data
        .iter()
        .map(|s| convert::i32_to_f64(s.re, exp))
        .collect();
    write_real_list(out, name, &reals)
}

pub fn python_i32(out: &mut impl Write, name: &str, data: &[i32], exp: i32) -> io::Result<()> {
    let values: Vec<f64> = data.iter().map(|&v| convert::i32_to_f64(v, exp)).collect();
    write_real_list(out, name, &values)
}

pub fn python_u32(out: &mut impl Write, name: &str, data: &[u32], exp: i32) -> io::Result<()> {
    let values: Vec<f64> = data.iter().map(|&v| convert::u32_to_f64(v, exp)).collect();
    write_real_list(out, name, &values)
}

pub fn python_i64(out: &mut impl Write, name: &str, data: &[i64], exp: i32) -> io::Result<()> {
    let values: Vec<f64> = data.iter().map(|&v| convert::i64_to_f64(v, exp)).collect();
    write_real_list(out, name, &values)
}

pub fn python_u64(out: &mut impl Write, name: &str, data: &[u64], exp: i32) -> io::Result<()> {
    let values: Vec<f64> = data.iter().map(|&v| convert::u64_to_f64(v, exp)).collect();
    write_real_list(out, name, &values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn scalar_lists_are_python_syntax() {
        assert_eq!(
            render(|out| python_i32(out, "x", &[1, -2, 0], 0)),
            "x = [1e0, -2e0, 0e0]\n"
        );
        assert_eq!(
            render(|out| python_u32(out, "mags", &[5], -2)),
            "mags = [1.25e0]\n"
        );
        assert_eq!(
            render(|out| python_i64(out, "acc", &[-(1i64 << 33)], -33)),
            "acc = [-1e0]\n"
        );
        assert_eq!(
            render(|out| python_u64(out, "acc", &[3], -1)),
            "acc = [1.5e0]\n"
        );
    }

    #[test]
    fn empty_array_renders_empty_list() {
        assert_eq!(render(|out| python_i32(out, "x", &[], -31)), "x = []\n");
    }

    #[test]
    fn complex_literals_carry_an_explicit_sign() {
        let data = [ComplexI32::new(1, -1), ComplexI32::new(0, 2)];
        assert_eq!(
            render(|out| python_fd(out, "X", &data, 0)),
            "X = [(1e0-1e0j), (0e0+2e0j)]\n"
        );
    }

    #[test]
    fn negative_zero_imag_never_prints_double_sign() {
        // -0.0 must render as "-0e0j", not "+-0e0j"
        let data = [ComplexI32::new(1, 0)];
        let rendered = render(|out| python_fd(out, "X", &data, 0));
        assert!(!rendered.contains("+-"));
    }

    #[test]
    fn td_real_only_drops_imag_lane() {
        let data = [ComplexI32::new(2, 999), ComplexI32::new(-4, 999)];
        assert_eq!(
            render(|out| python_td(out, "frame", &data, -1, false)),
            "frame = [1e0, -2e0]\n"
        );
        assert_eq!(
            render(|out| python_td(out, "frame", &data, -1, true)),
            "frame = [(1e0+4.995e2j), (-2e0+4.995e2j)]\n"
        );
    }
}
