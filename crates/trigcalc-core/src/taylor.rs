//! Truncated Taylor series for sine and cosine.
//!
//! Each term is derived from the previous one:
//! `t(k+1) = -t(k) * x² / ((m+1)(m+2))` where `m` is the power of `x` in
//! `t(k)`. This avoids explicit factorials, which overflow any integer type
//! long before the default term count is reached.

/// Approximate `sin(x)` with the first `terms` non-zero terms of its series.
///
/// `terms == 0` yields `0.0`.
#[must_use]
pub fn sine_taylor(x: f64, terms: u32) -> f64 {
    series(x, terms, x, 1.0)
}

/// Approximate `cos(x)` with the first `terms` non-zero terms of its series.
///
/// `terms == 0` yields `0.0`.
#[must_use]
pub fn cosine_taylor(x: f64, terms: u32) -> f64 {
    series(x, terms, 1.0, 0.0)
}

/// Sum `terms` alternating terms starting at `first`, whose power of `x`
/// is `first_power`.
fn series(x: f64, terms: u32, first: f64, first_power: f64) -> f64 {
    let x2 = x * x;
    let mut term = first;
    let mut power = first_power;
    let mut sum = 0.0;
    for _ in 0..terms {
        sum += term;
        // Once the term underflows every later one is zero as well, and a
        // NaN sum (infinite terms of both signs) never recovers.
        if term == 0.0 || sum.is_nan() {
            break;
        }
        term = -term * x2 / ((power + 1.0) * (power + 2.0));
        power += 2.0;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn zero_terms_is_zero() {
        assert_eq!(sine_taylor(1.0, 0), 0.0);
        assert_eq!(cosine_taylor(1.0, 0), 0.0);
    }

    #[test]
    fn single_term() {
        assert_eq!(sine_taylor(0.3, 1), 0.3);
        assert_eq!(cosine_taylor(0.3, 1), 1.0);
    }

    #[test]
    fn two_terms() {
        let x = 0.5;
        assert!((sine_taylor(x, 2) - (x - x * x * x / 6.0)).abs() < 1e-15);
        assert!((cosine_taylor(x, 2) - (1.0 - x * x / 2.0)).abs() < 1e-15);
    }

    #[test]
    fn converges_at_right_angle() {
        assert!((sine_taylor(FRAC_PI_2, 20) - 1.0).abs() < 1e-14);
        assert!(cosine_taylor(FRAC_PI_2, 20).abs() < 1e-14);
    }

    #[test]
    fn default_term_count_is_accurate_near_zero() {
        let x = 45f64.to_radians();
        assert!((sine_taylor(x, 10) - x.sin()).abs() < 1e-15);
        assert!((cosine_taylor(x, 10) - x.cos()).abs() < 1e-15);
    }

    #[test]
    fn large_term_counts_stay_finite() {
        let x = 10.0;
        let s = sine_taylor(x, 1_000);
        let c = cosine_taylor(x, 1_000);
        assert!(s.is_finite());
        assert!(c.is_finite());
        assert!((s - x.sin()).abs() < 1e-9);
    }

    #[test]
    fn overflowing_series_stops_at_nan() {
        let x = 1e200_f64.to_radians();
        assert!(sine_taylor(x, u32::MAX).is_nan());
        assert!(cosine_taylor(x, u32::MAX).is_nan());
    }

    #[test]
    fn series_is_odd_and_even() {
        assert_eq!(sine_taylor(-0.7, 8), -sine_taylor(0.7, 8));
        assert_eq!(cosine_taylor(-0.7, 8), cosine_taylor(0.7, 8));
    }
}
