//! Shared rounding semantics for payout figures
//!
//! The incentive policy truncates at two decimal places everywhere; standard
//! round-half-up would shift payouts at the paisa level, so both calculators
//! must go through this one function.

/// Floor a value to two decimal places: `floor(v * 100) / 100`.
///
/// Truncation, not rounding: 0.925 becomes 0.92, never 0.93.
pub fn floor_to_two_decimals(value: f64) -> f64 {
    (value * 100.0).floor() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_truncates_not_rounds() {
        assert_eq!(floor_to_two_decimals(0.925), 0.92);
        assert_eq!(floor_to_two_decimals(1.0277777), 1.02);
        assert_eq!(floor_to_two_decimals(78.9473684), 78.94);
        assert_eq!(floor_to_two_decimals(88.0952380), 88.09);
    }

    #[test]
    fn test_floor_exact_values_unchanged() {
        assert_eq!(floor_to_two_decimals(0.0), 0.0);
        assert_eq!(floor_to_two_decimals(80.0), 80.0);
        assert_eq!(floor_to_two_decimals(0.8), 0.8);
        assert_eq!(floor_to_two_decimals(368500.0), 368500.0);
    }
}
