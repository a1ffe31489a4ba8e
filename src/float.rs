//! Floating-point helpers: ULP-scaled approximate equality and the
//! numeric rendering shared by the [`Display`](std::fmt::Display)
//! implementations of the core types.

/// Compares `a` and `b` for approximate equality within `ulps` units in
/// the last place.
///
/// The machine epsilon is scaled to the magnitude of the operands and
/// multiplied by the desired precision in ULPs. Differences below the
/// smallest normal magnitude always compare equal, so results that
/// cancel down to subnormals near zero do not spuriously fail.
#[must_use]
pub fn almost_equal(a: f64, b: f64, ulps: u32) -> bool {
    let diff = (a - b).abs();
    diff <= f64::EPSILON * (a + b).abs() * f64::from(ulps) || diff < f64::MIN_POSITIVE
}

/// Renders a scalar with up to nine fractional digits, trimming
/// trailing zeros, so `cos(PI / 8.0)` prints as `0.923879533` and
/// `0.0` prints as `0`.
pub(crate) fn format_scalar(value: f64) -> String {
    let s = format!("{value:.9}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn identical_values_compare_equal() {
        for &a in &[0.0, 1.0, -1.0, 1e-300, 1e300, std::f64::consts::PI] {
            assert!(almost_equal(a, a, 0));
            assert!(almost_equal(a, a, 4));
        }
    }

    #[test]
    fn adjacent_representables_compare_equal_within_one_ulp() {
        let a: f64 = 1.0;
        let b = f64::from_bits(a.to_bits() + 1);
        assert!(almost_equal(a, b, 1));
    }

    #[test]
    fn distant_values_compare_unequal() {
        assert!(!almost_equal(1.0, 1.0 + 1e-9, 4));
        assert!(!almost_equal(1.0, 2.0, 1000));
    }

    #[test]
    fn subnormal_differences_always_compare_equal() {
        assert!(almost_equal(1e-320, -1e-320, 0));
        assert!(almost_equal(0.0, f64::MIN_POSITIVE / 2.0, 0));
    }

    #[test]
    fn scalar_rendering_trims_trailing_zeros() {
        assert_eq!(format_scalar(0.0), "0");
        assert_eq!(format_scalar(1.0), "1");
        assert_eq!(format_scalar(1.5), "1.5");
        assert_eq!(format_scalar(-2.25), "-2.25");
        assert_eq!(format_scalar((std::f64::consts::PI / 8.0).cos()), "0.923879533");
        assert_eq!(format_scalar(-(std::f64::consts::PI / 8.0).sin()), "-0.382683432");
    }
}
