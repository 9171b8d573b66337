/// Round to `digits` decimal places, ties to even.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round_ties_even() / factor
}

/// `numerator / denominator` rounded to `digits`, or 0 when the denominator is 0.
///
/// Every derived rate in the engine goes through this so a degenerate group
/// yields 0 instead of NaN or infinity.
pub fn safe_ratio(numerator: f64, denominator: f64, digits: u32) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let value = round_to(numerator / denominator, digits);
    if value.is_finite() { value } else { 0.0 }
}

/// Percentage form of [`safe_ratio`].
pub fn safe_percentage(part: f64, whole: f64, digits: u32) -> f64 {
    safe_ratio(part * 100.0, whole, digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_denominator_is_zero() {
        assert_eq!(safe_ratio(12.0, 0.0, 2), 0.0);
        assert_eq!(safe_percentage(3.0, 0.0, 2), 0.0);
    }

    #[test]
    fn rounds_to_requested_digits() {
        assert_eq!(safe_ratio(10.0, 3.0, 2), 3.33);
        assert_eq!(safe_ratio(2.0, 3.0, 1), 0.7);
        assert_eq!(safe_percentage(1.0, 3.0, 2), 33.33);
        assert_eq!(round_to(1.25, 1), 1.2);
        assert_eq!(round_to(-1.25, 1), -1.2);
        assert_eq!(round_to(12.625, 2), 12.62);
        assert_eq!(round_to(0.375, 2), 0.38);
    }
}
