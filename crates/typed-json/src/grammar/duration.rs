//! Compact duration text: `4ms`, `1.5µs`, `2s`, `1h2m3.5s`, `-90ns`, `0s`.
//!
//! Durations under one second use a single unit (`ns`, `µs` or `ms`) with a
//! decimal fraction. Longer durations are written as hours, minutes and
//! fractional seconds, omitting leading zero units. Trailing zeros in a
//! fraction are never written.

use chrono::TimeDelta;

const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Magnitude of `TimeDelta::MAX` and `TimeDelta::MIN` in nanoseconds.
const MAX_NANOS: u128 = i64::MAX as u128 * 1_000_000;

const UNITS: &[(&str, u128)] = &[
    ("ns", 1),
    ("us", 1_000),
    ("µs", 1_000),
    ("μs", 1_000),
    ("ms", 1_000_000),
    ("s", NANOS_PER_SECOND),
    ("m", 60 * NANOS_PER_SECOND),
    ("h", 3_600 * NANOS_PER_SECOND),
];

/// Formats a signed duration.
///
/// # Example
///
/// ```
/// use chrono::TimeDelta;
/// use typed_json::grammar::format_duration;
///
/// assert_eq!(format_duration(TimeDelta::milliseconds(4)), "4ms");
/// assert_eq!(format_duration(TimeDelta::milliseconds(3_723_500)), "1h2m3.5s");
/// assert_eq!(format_duration(TimeDelta::zero()), "0s");
/// ```
pub fn format_duration(value: TimeDelta) -> String {
    let nanos = total_nanos(value);
    let mut out = String::new();
    if nanos < 0 {
        out.push('-');
    }
    let magnitude = nanos.unsigned_abs();

    if magnitude == 0 {
        return "0s".to_string();
    }

    if magnitude < NANOS_PER_SECOND {
        let (unit, scale, digits) = if magnitude < 1_000 {
            ("ns", 1, 0)
        } else if magnitude < 1_000_000 {
            ("µs", 1_000, 3)
        } else {
            ("ms", 1_000_000, 6)
        };
        push_decimal(&mut out, magnitude / scale, magnitude % scale, digits);
        out.push_str(unit);
        return out;
    }

    let seconds = magnitude / NANOS_PER_SECOND;
    let hours = seconds / 3_600;
    let minutes = (seconds / 60) % 60;
    if hours > 0 {
        out.push_str(&format!("{hours}h{minutes}m"));
    } else if minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    push_decimal(&mut out, seconds % 60, magnitude % NANOS_PER_SECOND, 9);
    out.push('s');
    out
}

/// Parses duration text.
///
/// The accepted form is an optional sign followed by one or more
/// `<number><unit>` components, where the number may carry a decimal
/// fraction and the unit is one of `ns`, `us`, `µs`, `μs`, `ms`, `s`, `m`,
/// `h`. A bare `0` is also accepted. Values beyond the range of
/// [`TimeDelta`] (±`i64::MAX` milliseconds) are rejected.
pub fn parse_duration(text: &str) -> Option<TimeDelta> {
    let (negative, mut rest) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    if rest == "0" {
        return Some(TimeDelta::zero());
    }
    if rest.is_empty() {
        return None;
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let int_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        let whole = &rest[..int_end];
        rest = &rest[int_end..];

        let mut fraction = "";
        if let Some(after_dot) = rest.strip_prefix('.') {
            let frac_end = after_dot
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(after_dot.len());
            fraction = &after_dot[..frac_end];
            rest = &after_dot[frac_end..];
        }
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }

        let unit_end = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        let unit = &rest[..unit_end];
        rest = &rest[unit_end..];
        let scale = UNITS
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, scale)| *scale)?;

        total = total.checked_add(component_nanos(whole, fraction, scale)?)?;
        if total > MAX_NANOS {
            return None;
        }
    }

    let signed = if negative {
        -(total as i128)
    } else {
        total as i128
    };
    from_total_nanos(signed)
}

fn component_nanos(whole: &str, fraction: &str, scale: u128) -> Option<u128> {
    let mut nanos: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse::<u128>().ok()?.checked_mul(scale)?
    };
    // Digits past nanosecond resolution cannot change the result.
    let mut divisor: u128 = 1;
    let mut frac: u128 = 0;
    for digit in fraction.bytes().take(18) {
        frac = frac * 10 + u128::from(digit - b'0');
        divisor *= 10;
    }
    if frac > 0 {
        nanos = nanos.checked_add(frac * scale / divisor)?;
    }
    Some(nanos)
}

fn push_decimal(out: &mut String, whole: u128, fraction: u128, digits: usize) {
    out.push_str(&whole.to_string());
    if fraction == 0 {
        return;
    }
    let padded = format!("{fraction:0digits$}");
    out.push('.');
    out.push_str(padded.trim_end_matches('0'));
}

fn total_nanos(value: TimeDelta) -> i128 {
    i128::from(value.num_seconds()) * NANOS_PER_SECOND as i128 + i128::from(value.subsec_nanos())
}

fn from_total_nanos(nanos: i128) -> Option<TimeDelta> {
    let per_second = NANOS_PER_SECOND as i128;
    let seconds = i64::try_from(nanos.div_euclid(per_second)).ok()?;
    let subsec = u32::try_from(nanos.rem_euclid(per_second)).ok()?;
    TimeDelta::new(seconds, subsec)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nanos(n: i64) -> TimeDelta {
        TimeDelta::nanoseconds(n)
    }

    #[test]
    fn test_format_sub_second() {
        assert_eq!(format_duration(nanos(1)), "1ns");
        assert_eq!(format_duration(nanos(999)), "999ns");
        assert_eq!(format_duration(nanos(1_500)), "1.5µs");
        assert_eq!(format_duration(nanos(4_000_000)), "4ms");
        assert_eq!(format_duration(nanos(4_000_001)), "4.000001ms");
    }

    #[test]
    fn test_format_seconds_and_up() {
        assert_eq!(format_duration(TimeDelta::seconds(2)), "2s");
        assert_eq!(format_duration(TimeDelta::seconds(60)), "1m0s");
        assert_eq!(format_duration(TimeDelta::seconds(3_600)), "1h0m0s");
        assert_eq!(format_duration(TimeDelta::milliseconds(90_250)), "1m30.25s");
        assert_eq!(format_duration(nanos(1_000_000_001)), "1.000000001s");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_duration(nanos(-4_000_000)), "-4ms");
        assert_eq!(format_duration(TimeDelta::seconds(-61)), "-1m1s");
        assert_eq!(format_duration(nanos(-1)), "-1ns");
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse_duration("4ms"), Some(nanos(4_000_000)));
        assert_eq!(parse_duration("1h2m3.5s"), Some(TimeDelta::milliseconds(3_723_500)));
        assert_eq!(parse_duration("1.5µs"), Some(nanos(1_500)));
        assert_eq!(parse_duration("1.5μs"), Some(nanos(1_500)));
        assert_eq!(parse_duration("3us"), Some(nanos(3_000)));
        assert_eq!(parse_duration("-2s"), Some(TimeDelta::seconds(-2)));
        assert_eq!(parse_duration("+.5h"), Some(TimeDelta::minutes(30)));
        assert_eq!(parse_duration("0"), Some(TimeDelta::zero()));
        assert_eq!(parse_duration("0s"), Some(TimeDelta::zero()));
        assert_eq!(parse_duration("1m1m"), Some(TimeDelta::minutes(2)));
    }

    #[test]
    fn test_parse_rejects() {
        for text in ["", "nope", "4", "-", "s", "4x", ".s", "1.2.3s", "4ms "] {
            assert_eq!(parse_duration(text), None, "{text:?} should not parse");
        }
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_duration("9223372036854775807ns"), Some(nanos(i64::MAX)));
        assert_eq!(parse_duration("-9223372036854775808ns"), Some(nanos(i64::MIN)));
        assert_eq!(
            parse_duration("9223372036854775808ns"),
            TimeDelta::new(9_223_372_036, 854_775_808)
        );
        assert_eq!(parse_duration("3000000000000h"), None);
    }

    #[test]
    fn test_extremes_round_trip() {
        let three_centuries = TimeDelta::days(365 * 300);
        assert_eq!(format_duration(three_centuries), "2628000h0m0s");
        assert_eq!(parse_duration("2628000h0m0s"), Some(three_centuries));

        for value in [TimeDelta::MAX, TimeDelta::MIN] {
            assert_eq!(parse_duration(&format_duration(value)), Some(value));
        }
        assert_eq!(format_duration(TimeDelta::MAX), "2562047788015h12m55.807s");
        assert_eq!(parse_duration("2562047788015h12m55.807000001s"), None);
        assert_eq!(parse_duration("-2562047788015h12m55.807000001s"), None);
    }

    #[test]
    fn test_round_trip() {
        for n in [1, 999, 1_001, 123_456_789, 1_000_000_000, 86_400_000_000_123, -7_654_321] {
            let value = nanos(n);
            assert_eq!(parse_duration(&format_duration(value)), Some(value));
        }
    }
}
