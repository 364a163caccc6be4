//! Complex text: `(<re><±im>i)`, each component in the float grammar.

use super::float::{format_f32, format_f64, parse_f32, parse_f64};
use crate::complex::{Complex, Complex128, Complex64};

/// Formats a [`Complex64`], e.g. `(1E+00-3E+00i)`.
pub fn format_complex64(value: Complex64) -> String {
    join(&format_f32(value.re), &format_f32(value.im))
}

/// Formats a [`Complex128`], e.g. `(1E+00-3E+00i)`.
pub fn format_complex128(value: Complex128) -> String {
    join(&format_f64(value.re), &format_f64(value.im))
}

/// Parses complex text with 32-bit components.
///
/// Besides the canonical `(re±imi)` form, the parentheses may be omitted and
/// either part may stand alone (`2E+00`, `-3E+00i`).
pub fn parse_complex64(text: &str) -> Option<Complex64> {
    parse_with(text, parse_f32)
}

/// Parses complex text with 64-bit components; see [`parse_complex64`].
pub fn parse_complex128(text: &str) -> Option<Complex128> {
    parse_with(text, parse_f64)
}

fn join(re: &str, im: &str) -> String {
    let mut out = String::with_capacity(re.len() + im.len() + 4);
    out.push('(');
    out.push_str(re);
    if !im.starts_with(['+', '-']) {
        out.push('+');
    }
    out.push_str(im);
    out.push_str("i)");
    out
}

fn parse_with<T: Default>(text: &str, parse: fn(&str) -> Option<T>) -> Option<Complex<T>> {
    let inner = match text.strip_prefix('(') {
        Some(rest) => rest.strip_suffix(')')?,
        None => text,
    };
    let Some(body) = inner.strip_suffix('i') else {
        return Some(Complex::new(parse(inner)?, T::default()));
    };
    match imaginary_start(body) {
        Some(at) => Some(Complex::new(parse(&body[..at])?, parse(&body[at..])?)),
        None => Some(Complex::new(T::default(), parse(body)?)),
    }
}

/// Index of the sign that starts the imaginary part: the last `+`/`-` that is
/// neither the leading sign nor an exponent sign.
fn imaginary_start(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(format_complex64(Complex::new(1.0, -3.0)), "(1E+00-3E+00i)");
        assert_eq!(format_complex128(Complex::new(2.0, 5.0)), "(2E+00+5E+00i)");
        assert_eq!(
            format_complex128(Complex::new(f64::INFINITY, f64::NAN)),
            "(+Inf+NaNi)"
        );
    }

    #[test]
    fn test_parse_canonical() {
        assert_eq!(parse_complex64("(1E+00-3E+00i)"), Some(Complex::new(1.0, -3.0)));
        assert_eq!(
            parse_complex128("(-2.5E-03+1E+10i)"),
            Some(Complex::new(-2.5e-3, 1e10))
        );
        assert_eq!(
            parse_complex128("(-Inf+Infi)"),
            Some(Complex::new(f64::NEG_INFINITY, f64::INFINITY))
        );
    }

    #[test]
    fn test_parse_partial_forms() {
        assert_eq!(parse_complex128("2E+00"), Some(Complex::new(2.0, 0.0)));
        assert_eq!(parse_complex128("-3E+00i"), Some(Complex::new(0.0, -3.0)));
        assert_eq!(parse_complex128("1+2i"), Some(Complex::new(1.0, 2.0)));
        assert_eq!(parse_complex128("(4)"), Some(Complex::new(4.0, 0.0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_complex128("nope"), None);
        assert_eq!(parse_complex128("(1E+00-3E+00i"), None);
        assert_eq!(parse_complex128("i"), None);
        assert_eq!(parse_complex128(""), None);
        assert_eq!(parse_complex64("(1E+00+1E+39i)"), None);
    }
}
