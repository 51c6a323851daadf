/// Linearly interpolated quantile of an ascending slice, `p` in `[0, 1]`.
///
/// The position is `p * (n - 1)`; the result blends the two order
/// statistics on either side of it. Empty input gives `NaN`.
pub fn quantile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quartiles_of_four() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&v, 0.25), 1.75);
        assert_eq!(quantile(&v, 0.5), 2.5);
        assert_eq!(quantile(&v, 0.75), 3.25);
    }

    #[test]
    fn test_bounds_are_min_and_max() {
        let v = [-2.0, 0.0, 7.0];
        assert_eq!(quantile(&v, 0.0), -2.0);
        assert_eq!(quantile(&v, 1.0), 7.0);
    }

    #[test]
    fn test_single_value() {
        assert_eq!(quantile(&[5.0], 0.75), 5.0);
    }

    #[test]
    fn test_empty_is_nan() {
        assert!(quantile(&[], 0.5).is_nan());
    }
}
