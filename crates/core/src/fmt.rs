//! Fixed-point formatting that stays off the float `format!` paths.
//!
//! Core float-to-decimal formatting has panicked on some wasm
//! toolchain/browser combinations, so these helpers scale and round into an
//! `i64` and format integers instead. `NaN` and the infinities pass through
//! by name.

/// Formats `v` with a fixed number of decimals, e.g. `(2.4, 1)` -> `"2.4"`.
pub fn fmt_f64_fixed(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return if v.is_nan() {
            "NaN".to_string()
        } else if v.is_sign_positive() {
            "Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }

    // Clamp decimals to something reasonable to avoid huge powers.
    let decimals = decimals.min(9);
    let scale_i64 = 10_i64.checked_pow(decimals as u32).unwrap_or(1);
    let scale_f = scale_i64 as f64;

    let scaled = (v * scale_f).round();
    // Values too large for the scale degrade to their sign's infinity name.
    if !scaled.is_finite() || scaled.abs() > i64::MAX as f64 {
        return if v.is_sign_negative() {
            "-Inf".to_string()
        } else {
            "Inf".to_string()
        };
    }

    let scaled_i = scaled as i64;
    let int_part = scaled_i.abs() / scale_i64;
    let frac_part = scaled_i.abs() % scale_i64;

    let mut out = String::new();
    if scaled_i < 0 || (scaled_i == 0 && v.is_sign_negative()) {
        out.push('-');
    }
    out.push_str(&int_part.to_string());

    if decimals > 0 {
        out.push('.');
        let frac_str = frac_part.to_string();
        for _ in 0..decimals.saturating_sub(frac_str.len()) {
            out.push('0');
        }
        out.push_str(&frac_str);
    }

    out
}

/// One-decimal percentage of a fraction, e.g. `0.035` -> `"3.5%"`.
pub fn fmt_percent(fraction: f64) -> String {
    let mut out = fmt_f64_fixed(fraction * 100.0, 1);
    out.push('%');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_rounds_to_requested_decimals() {
        assert_eq!(fmt_f64_fixed(3.14159, 1), "3.1");
        assert_eq!(fmt_f64_fixed(3.14159, 3), "3.142");
        assert_eq!(fmt_f64_fixed(12.7, 0), "13");
        assert_eq!(fmt_f64_fixed(66.0, 1), "66.0");
    }

    #[test]
    fn fixed_pads_fractional_zeros() {
        assert_eq!(fmt_f64_fixed(0.05, 2), "0.05");
        assert_eq!(fmt_f64_fixed(2.0, 3), "2.000");
    }

    #[test]
    fn fixed_keeps_the_sign() {
        assert_eq!(fmt_f64_fixed(-1.25, 1), "-1.3");
        assert_eq!(fmt_f64_fixed(-0.04, 1), "-0.0");
    }

    #[test]
    fn fixed_names_non_finite_values() {
        assert_eq!(fmt_f64_fixed(f64::NAN, 1), "NaN");
        assert_eq!(fmt_f64_fixed(f64::INFINITY, 1), "Inf");
        assert_eq!(fmt_f64_fixed(f64::NEG_INFINITY, 1), "-Inf");
    }

    #[test]
    fn percent_scales_fractions() {
        assert_eq!(fmt_percent(0.5), "50.0%");
        assert_eq!(fmt_percent(0.015), "1.5%");
        assert_eq!(fmt_percent(0.0), "0.0%");
        assert_eq!(fmt_percent(3.0 / 200.0), "1.5%");
    }
}
