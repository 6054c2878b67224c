/// Rounds half-up (towards positive infinity on ties) to `decimals` places.
///
/// `round_half_up(2.25, 1) == 2.3` and `round_half_up(-2.25, 1) == -2.2`.
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor + 0.5).floor() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_round_ties_up() {
        assert_eq!(round_half_up(2594.3125, 1), 2594.3);
        assert_eq!(round_half_up(0.25, 1), 0.3);
        assert_eq!(round_half_up(-0.25, 1), -0.2);
        assert_eq!(round_half_up(1.005, 2), 1.0);
    }

    #[test]
    fn should_round_to_three_decimals() {
        assert_eq!(round_half_up(0.3333333, 3), 0.333);
        assert_eq!(round_half_up(0.6666666, 3), 0.667);
    }

    proptest! {
        #[test]
        fn rounded_value_stays_within_half_a_step(value in -1.0e6f64..1.0e6f64) {
            let rounded = round_half_up(value, 1);
            prop_assert!(rounded.is_finite());
            prop_assert!((rounded - value).abs() <= 0.05 + 1e-9);
        }

        #[test]
        fn rounding_is_idempotent(value in -1.0e6f64..1.0e6f64) {
            let once = round_half_up(value, 1);
            prop_assert_eq!(round_half_up(once, 1), once);
        }
    }
}
