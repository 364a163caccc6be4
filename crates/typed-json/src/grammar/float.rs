//! Canonical float text: shortest round-trip mantissa, uppercase `E`, and a
//! signed exponent of at least two digits (`4` → `4E+00`, `0.015625` →
//! `1.5625E-02`).

/// Formats an `f64` in canonical scientific notation.
///
/// # Example
///
/// ```
/// use typed_json::grammar::format_f64;
///
/// assert_eq!(format_f64(4.0), "4E+00");
/// assert_eq!(format_f64(-1234.5), "-1.2345E+03");
/// assert_eq!(format_f64(f64::INFINITY), "+Inf");
/// ```
pub fn format_f64(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return infinity(value.is_sign_negative());
    }
    normalize_exponent(&format!("{value:E}"))
}

/// Formats an `f32` in canonical scientific notation, using the shortest
/// digits that round-trip at 32-bit precision.
pub fn format_f32(value: f32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return infinity(value.is_sign_negative());
    }
    normalize_exponent(&format!("{value:E}"))
}

/// Parses float text into an `f64`.
///
/// Accepts any decimal or scientific literal plus `Inf`/`Infinity` (with an
/// optional sign) and `NaN`, case-insensitively. Finite literals that
/// overflow to infinity are rejected.
pub fn parse_f64(text: &str) -> Option<f64> {
    if let Some(special) = parse_special(text) {
        return Some(special);
    }
    let value: f64 = text.parse().ok()?;
    value.is_finite().then_some(value)
}

/// Parses float text into an `f32`; see [`parse_f64`] for the accepted forms.
pub fn parse_f32(text: &str) -> Option<f32> {
    if let Some(special) = parse_special(text) {
        return Some(special as f32);
    }
    let value: f32 = text.parse().ok()?;
    value.is_finite().then_some(value)
}

fn infinity(negative: bool) -> String {
    if negative {
        "-Inf".to_string()
    } else {
        "+Inf".to_string()
    }
}

fn parse_special(text: &str) -> Option<f64> {
    let (negative, rest) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    // A signed NaN appears as the imaginary part of complex text.
    if rest.eq_ignore_ascii_case("nan") {
        return Some(f64::NAN);
    }
    if rest.eq_ignore_ascii_case("inf") || rest.eq_ignore_ascii_case("infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    None
}

/// Rewrites the `UpperExp` output (`1.5E-7`) into the canonical exponent
/// form (`1.5E-07`).
fn normalize_exponent(raw: &str) -> String {
    let Some((mantissa, exponent)) = raw.split_once('E') else {
        return raw.to_string();
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    let mut out = String::with_capacity(mantissa.len() + digits.len() + 3);
    out.push_str(mantissa);
    out.push('E');
    out.push(sign);
    if digits.len() < 2 {
        out.push('0');
    }
    out.push_str(digits);
    out
}
