use accrual_core::numeric::{convert, convert_saturating, Numeric};
use proptest::prelude::*;

// ── Float to integer conversion truncates toward zero ───────────────────

proptest! {
    #[test]
    fn float_to_int_truncates_toward_zero(value in -1.0e15f64..1.0e15) {
        let converted = convert::<f64, i64>(value, "prop").unwrap();
        prop_assert_eq!(converted, value.trunc() as i64);
        prop_assert!((converted as f64).abs() <= value.abs());
    }

    #[test]
    fn int_widening_is_lossless(value in any::<i32>()) {
        prop_assert_eq!(convert::<i32, i64>(value, "prop").unwrap(), i64::from(value));
        prop_assert_eq!(convert::<i64, i32>(i64::from(value), "prop").unwrap(), value);
    }

    #[test]
    fn narrow_products_saturate_toward_their_sign(rounds in 1i64..i64::MAX, rate in any::<i32>()) {
        let product = i32::rounds_saturating(rounds).mul_saturating(rate).unwrap();
        let exact = i128::from(rounds.min(i64::from(i32::MAX))) * i128::from(rate);
        let expected = exact.clamp(i128::from(i32::MIN), i128::from(i32::MAX)) as i32;
        prop_assert_eq!(product, expected);
    }

    #[test]
    fn saturating_conversion_agrees_with_checked_when_in_range(value in any::<f64>()) {
        let checked = convert::<f64, i32>(value, "prop");
        let saturated = convert_saturating::<f64, i32>(value, "prop");
        match checked {
            Ok(v) => prop_assert_eq!(saturated.unwrap(), v),
            Err(_) if value.is_nan() => prop_assert!(saturated.is_err()),
            Err(_) => {
                let pinned = saturated.unwrap();
                prop_assert!(pinned == i32::MAX || pinned == i32::MIN);
            }
        }
    }

    #[test]
    fn narrowing_never_produces_out_of_range_values(value in any::<i64>()) {
        match convert::<i64, i32>(value, "prop") {
            Ok(v) => prop_assert_eq!(i64::from(v), value),
            Err(_) => prop_assert!(value < i64::from(i32::MIN) || value > i64::from(i32::MAX)),
        }
    }
}
