use bigdec::Decimal;
use proptest::prelude::*;

fn small_decimal() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), -25i64..=25).prop_map(|(mantissa, exponent)| {
        format!("{mantissa}e{exponent}").parse().unwrap()
    })
}

fn small_integer() -> impl Strategy<Value = Decimal> {
    (-100_000i64..=100_000).prop_map(Decimal::from)
}

proptest! {
    #[test]
    fn format_parse_round_trip(d in small_decimal()) {
        let text = d.to_string();
        let back: Decimal = text.parse().unwrap();
        prop_assert_eq!(back, d);
    }

    #[test]
    fn literal_parse_round_trip(s in r"-?[0-9]{1,12}\.[0-9]{0,8}(e-?[0-9]{1,2})?") {
        let d: Decimal = s.parse().unwrap();
        let back: Decimal = d.to_string().parse().unwrap();
        prop_assert_eq!(back, d);
    }

    #[test]
    fn addition_commutes(a in small_decimal(), b in small_decimal()) {
        prop_assert_eq!(a.clone() + b.clone(), b + a);
    }

    #[test]
    fn zero_is_additive_identity(a in small_decimal()) {
        prop_assert_eq!(a.clone() + Decimal::ZERO, a);
    }

    #[test]
    fn value_cancels_its_negation(a in small_decimal()) {
        let sum = a.clone() + (-a);
        prop_assert!(sum.is_zero());
        prop_assert!(!sum.is_negative());
    }

    #[test]
    fn ordering_matches_difference_sign(a in small_decimal(), b in small_decimal()) {
        let diff = a.clone() - b.clone();
        prop_assert_eq!(a < b, diff.is_negative());
        prop_assert_eq!(a == b, diff.is_zero());
    }

    #[test]
    fn remainder_is_smaller_and_keeps_sign(
        a in small_integer(),
        b in (1i64..=10_000).prop_map(Decimal::from),
    ) {
        let r = a.checked_rem(&b).unwrap();
        prop_assert!(r.abs() < b);
        if !r.is_zero() {
            prop_assert_eq!(r.is_negative(), a.is_negative());
        }
    }

    #[test]
    fn terminating_division_inverts_multiplication(
        a in small_integer(),
        b in prop::sample::select(vec![2i64, 4, 5, 8, 10, 16, 25, 40, 50, 125, 200]),
    ) {
        let b = Decimal::from(b);
        let q = a.checked_div(&b).unwrap();
        prop_assert_eq!(q * b, a);
    }

    #[test]
    fn integer_conversion_round_trip(n in any::<i64>()) {
        prop_assert_eq!(Decimal::from(n).to_i64(), Ok(n));
    }

    #[test]
    fn multiplication_commutes(a in small_integer(), b in small_integer()) {
        prop_assert_eq!(a.clone() * b.clone(), b * a);
    }
}
