//! Text conventions of the zone definition file format.
//!
//! The downstream tide prediction system reads numbers in two shapes: zone
//! vertices in their shortest round-trip decimal form, and station positions
//! with a fixed number of significant digits.

/// Significant digits used for station latitude and longitude.
pub const STATION_COORD_DIGITS: usize = 9;

/// Enough fractional digits in `{:e}` output to print any finite `f64` exactly.
const EXACT_DIGITS: usize = 767;

/// Trailing parameters of a `[TIDE_STATION]` row.
///
/// Format-required, meaning unknown. The downstream reader expects these
/// exact tokens; do not change them without checking against it.
pub mod station_params {
    pub const P1: &str = "0.0";
    pub const P2: &str = "0.01";
}

/// Trailing parameters of a `[TIDE_ZONE]` row.
///
/// Format-required, meaning unknown. The downstream reader expects these
/// exact tokens; do not change them without checking against it.
pub mod tide_zone_params {
    pub const P1: &str = "PRIM";
    pub const P2: &str = "600";
    pub const P3: &str = "1.0";
    pub const P4: &str = "1.08";
    pub const P5: &str = "0.01";

    pub const ALL: [&str; 5] = [P1, P2, P3, P4, P5];
}

/// Shortest decimal string that round-trips to `value`.
///
/// Integral values have no fractional part (`1`, not `1.0`), negative zero
/// prints as `0`, and magnitudes below 1e-6 or from 1e21 upwards switch to
/// exponent notation (`1.5e-7`, `1e+21`).
pub fn format_coordinate(value: f64) -> String {
    if let Some(special) = non_finite(value) {
        return special;
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let (digits, exponent) = decompose(&format!("{:e}", value.abs()));
    let k = digits.len() as i32;
    // Position of the decimal point relative to the start of `digits`
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        exponent_form(&digits, n - 1)
    };

    format!("{sign}{body}")
}

/// `value` rounded to `precision` significant digits.
///
/// Uses fixed notation when the decimal exponent `e` of the rounded value
/// satisfies `-6 <= e < precision`, otherwise exponent notation with
/// `precision - 1` fractional digits (`1.23456789e-7`). Trailing zeros are
/// kept, so zero with 9 digits is `0.00000000`. A value exactly halfway
/// between two candidates rounds away from zero (`123.0078125` gives
/// `123.007813`).
///
/// `precision` must be at least 1.
pub fn format_significant(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if let Some(special) = non_finite(value) {
        return special;
    }
    if value == 0.0 {
        return if precision == 1 {
            "0".to_string()
        } else {
            format!("0.{}", "0".repeat(precision - 1))
        };
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let (digits, exponent) = round_half_up(value.abs(), precision);
    let p = precision as i32;

    let body = if exponent < -6 || exponent >= p {
        exponent_form(&digits, exponent)
    } else if exponent == p - 1 {
        digits
    } else if exponent >= 0 {
        let (int_part, frac_part) = digits.split_at(exponent as usize + 1);
        format!("{int_part}.{frac_part}")
    } else {
        format!("0.{}{digits}", "0".repeat((-exponent - 1) as usize))
    };

    format!("{sign}{body}")
}

fn non_finite(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("NaN".to_string())
    } else if value.is_infinite() {
        Some(if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string())
    } else {
        None
    }
}

/// The first `precision` significant digits of `value` and their decimal
/// exponent, rounding exact ties up in magnitude.
fn round_half_up(value: f64, precision: usize) -> (String, i32) {
    let (exact, mut exponent) = decompose(&format!("{:.*e}", EXACT_DIGITS, value));
    let (kept, rest) = exact.split_at(precision.min(exact.len()));
    let mut digits = kept.as_bytes().to_vec();

    if rest.as_bytes().first().is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            // 99..9 rounded up to 100..0: one more digit before the point
            digits.insert(0, b'1');
            digits.truncate(precision);
            exponent += 1;
        }
    }

    (String::from_utf8_lossy(&digits).into_owned(), exponent)
}

/// Split Rust's `LowerExp` output (`4.51234568e1`) into its significant
/// digits (`451234568`) and decimal exponent (`1`).
fn decompose(exp_repr: &str) -> (String, i32) {
    let (mantissa, exponent) = exp_repr.split_once('e').unwrap_or((exp_repr, "0"));
    let digits = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    (digits, exponent.parse().unwrap_or(0))
}

fn exponent_form(digits: &str, exponent: i32) -> String {
    let (lead, rest) = digits.split_at(1);
    let exp_sign = if exponent < 0 { '-' } else { '+' };
    if rest.is_empty() {
        format!("{lead}e{exp_sign}{}", exponent.abs())
    } else {
        format!("{lead}.{rest}e{exp_sign}{}", exponent.abs())
    }
}
