//! Display formatting for conversion results
//!
//! The engine never rounds. Rounding to a display precision happens here,
//! following the `%g` convention: fixed notation for moderate exponents,
//! scientific otherwise, trailing zeros removed.

/// Default number of significant digits used for display
pub const DEFAULT_SIGFIGS: u32 = 10;

/// Largest precision that still carries information for an f64
pub const MAX_SIGFIGS: u32 = 17;

/// Render with N significant figures (`%.Ng` style)
pub fn as_sigfigs(value: f64, sigfigs: u32) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }

    let sigfigs = sigfigs.clamp(1, MAX_SIGFIGS) as usize;

    // Let the formatter do the rounding so the exponent reflects it (9.9999 -> 1e1)
    let scientific = format!("{:.prec$e}", value, prec = sigfigs - 1);
    let (mantissa, exp) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exp >= -4 && exp < sigfigs as i32 {
        let decimal_places = (sigfigs as i32 - 1 - exp).max(0) as usize;
        trim_zeros(&format!("{:.prec$}", value, prec = decimal_places))
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
    }
}

fn trim_zeros(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_stay_plain() {
        assert_eq!(as_sigfigs(32.0, 10), "32");
        assert_eq!(as_sigfigs(8589934592.0, 10), "8589934592");
        assert_eq!(as_sigfigs(1000.0, 10), "1000");
    }

    #[test]
    fn test_zero() {
        assert_eq!(as_sigfigs(0.0, 10), "0");
        assert_eq!(as_sigfigs(-0.0, 10), "-0");
    }

    #[test]
    fn test_rounds_to_sigfigs() {
        assert_eq!(as_sigfigs(2.2046226218487757, 10), "2.204622622");
        assert_eq!(as_sigfigs(0.621371192237334, 10), "0.6213711922");
        assert_eq!(as_sigfigs(373.15, 10), "373.15");
        assert_eq!(as_sigfigs(1.0 / 3.0, 4), "0.3333");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(as_sigfigs(0.00001, 10), "1e-05");
        assert_eq!(as_sigfigs(1e10, 10), "1e+10");
        assert_eq!(as_sigfigs(1234567890123.0, 10), "1.23456789e+12");
        assert_eq!(as_sigfigs(-2.5e-7, 3), "-2.5e-07");
    }

    #[test]
    fn test_rounding_carries_into_exponent() {
        assert_eq!(as_sigfigs(9.99999, 3), "10");
        assert_eq!(as_sigfigs(0.0001, 10), "0.0001");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(as_sigfigs(f64::NAN, 10), "nan");
        assert_eq!(as_sigfigs(f64::INFINITY, 10), "inf");
        assert_eq!(as_sigfigs(f64::NEG_INFINITY, 10), "-inf");
    }

    #[test]
    fn test_precision_is_clamped() {
        assert_eq!(as_sigfigs(1.4, 0), "1");
        assert_eq!(as_sigfigs(0.1, 40), "0.10000000000000001");
    }
}
