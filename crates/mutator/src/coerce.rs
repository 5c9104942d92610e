use serde_json::{Number, Value};

/// Infers a typed JSON value from a command line literal.
///
/// Rules are tried in order: unsigned digits become an integer, an optionally
/// negative decimal becomes a float, `true`/`false`/`null` in any case become
/// the matching literal, and everything else stays a string. A negative whole
/// number like `-5` is therefore a float, not an integer. Integers keep every
/// digit regardless of size.
pub fn coerce_value(raw: &str) -> Value {
    if is_digits(raw) {
        // JSON forbids leading zeros
        let digits = match raw.trim_start_matches('0') {
            "" => "0",
            digits => digits,
        };
        if let Ok(n) = digits.parse::<Number>() {
            return Value::Number(n);
        }
    }

    if is_decimal(raw) {
        if let Some(n) = raw.parse::<f64>().ok().and_then(Number::from_f64) {
            return Value::Number(n);
        }
    }

    if raw.eq_ignore_ascii_case("true") {
        Value::Bool(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Value::Bool(false)
    } else if raw.eq_ignore_ascii_case("null") {
        Value::Null
    } else {
        Value::String(raw.to_string())
    }
}

/// ASCII only; other Unicode decimal digits are left as strings.
#[inline]
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|ch| ch.is_ascii_digit())
}

fn is_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    match unsigned.split_once('.') {
        Some((int, frac)) => is_digits(int) && is_digits(frac),
        None => is_digits(unsigned),
    }
}
