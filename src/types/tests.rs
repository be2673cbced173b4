// src/types/tests.rs

use super::{DivBy, Rational};
use crate::error::RationalError;
use num_bigint::BigInt;
use num_traits::{One, ToPrimitive, Zero};
use std::collections::HashSet;

fn r(n: i64, d: i64) -> Rational {
    Rational::new(BigInt::from(n), BigInt::from(d)).unwrap()
}

#[test]
fn test_new_keeps_parts_as_given() {
    let x = r(6, -8);
    assert_eq!(x.numerator(), &BigInt::from(6));
    assert_eq!(x.denominator(), &BigInt::from(-8));
}

#[test]
fn test_new_rejects_zero_denominator() {
    let result = Rational::new(BigInt::from(0), BigInt::from(0));
    assert_eq!(result, Err(RationalError::DivisionByZero));
}

#[test]
fn test_normalize_uses_product_of_denominators() {
    let (a, b) = Rational::normalize(&r(1, 4), &r(1, 6));
    assert_eq!(a.numerator(), &BigInt::from(6));
    assert_eq!(b.numerator(), &BigInt::from(4));
    assert_eq!(a.denominator(), &BigInt::from(24));
    assert_eq!(b.denominator(), &BigInt::from(24));
}

#[test]
fn test_simplify_moves_sign_to_numerator() {
    let s = r(6, -8).simplify();
    assert_eq!(s.numerator(), &BigInt::from(-3));
    assert_eq!(s.denominator(), &BigInt::from(4));

    let s = r(-6, -8).simplify();
    assert_eq!(s.numerator(), &BigInt::from(3));
    assert_eq!(s.denominator(), &BigInt::from(4));
}

#[test]
fn test_simplify_zero_numerator() {
    let s = r(0, -7).simplify();
    assert_eq!(s.numerator(), &BigInt::from(0));
    assert_eq!(s.denominator(), &BigInt::from(1));
    assert!(s.is_canonical());
}

#[test]
fn test_is_canonical() {
    assert!(r(3, 4).is_canonical());
    assert!(!r(6, 8).is_canonical());
    assert!(!r(3, -4).is_canonical());
}

#[test]
fn test_arithmetic_results_are_not_reduced() {
    let sum = r(1, 2).add(&r(1, 2));
    assert_eq!(sum.numerator(), &BigInt::from(4));
    assert_eq!(sum.denominator(), &BigInt::from(4));
    assert_eq!(sum.to_string(), "1");
}

#[test]
fn test_basic_arithmetic() {
    let half = r(1, 2);
    let third = r(1, 3);
    assert_eq!(half.add(&third), r(5, 6));
    assert_eq!(half.sub(&third), r(1, 6));
    assert_eq!(half.mul(&third), r(1, 6));
    assert_eq!(half.div(&third).unwrap(), r(3, 2));
    assert_eq!(half.neg(), r(-1, 2));
}

#[test]
fn test_operator_traits_delegate_to_methods() {
    let half = r(1, 2);
    let third = r(1, 3);
    assert_eq!(&half + &third, r(5, 6));
    assert_eq!(half.clone() - third.clone(), r(1, 6));
    assert_eq!(&half * third.clone(), r(1, 6));
    assert_eq!(-half, r(1, -2));
}

#[test]
fn test_div_by_zero_valued_rational() {
    let result = r(1, 1).div(&r(0, 5));
    assert_eq!(result, Err(RationalError::DivisionByZero));
    assert!(r(1, 1).checked_div(&r(0, 5)).is_none());
}

#[test]
fn test_recip_and_abs() {
    assert_eq!(r(-2, 3).recip().unwrap(), r(-3, 2));
    assert_eq!(Rational::zero().recip(), Err(RationalError::DivisionByZero));
    assert_eq!(r(3, -4).abs(), r(3, 4));
    assert_eq!(r(-3, -4).abs(), r(3, 4));
}

#[test]
fn test_equality_across_representations() {
    assert_eq!(r(1, 2), r(2, 4));
    assert_eq!(r(1, 2), r(-1, -2));
    assert_eq!(r(-1, 2), r(1, -2));
    assert_ne!(r(1, 2), r(1, 3));
    assert_ne!(r(1, 2), r(-1, 2));
}

#[test]
fn test_equality_with_integers() {
    assert_eq!(r(6, 3), 2i64);
    assert_eq!(r(-6, -3), BigInt::from(2));
    assert_ne!(r(1, 2), 0i64);
}

#[test]
fn test_ordering_with_mixed_denominator_signs() {
    // 1/-2 = -0.5 < 1/3
    assert!(r(1, -2) < r(1, 3));
    assert!(r(1, 3) > r(1, -2));
    assert!(r(-1, -2) > r(1, 3));
    assert_eq!(r(1, -2).compare_to(&r(-1, 2)), 0);
    assert_eq!(r(1, 3).compare_to(&r(1, 2)), -1);
    assert_eq!(r(2, 1).compare_to(&r(1, 1)), 1);
}

#[test]
fn test_range_membership() {
    let range = r(0, 1)..r(1, 1);
    assert!(range.contains(&r(1, 2)));
    assert!(range.contains(&r(-1, -3)));
    assert!(!range.contains(&r(1, -3)));
    assert!(!range.contains(&r(2, 2)));
}

#[test]
fn test_hash_agrees_with_equality() {
    let mut set = HashSet::new();
    set.insert(r(1, 2));
    set.insert(r(2, 4));
    set.insert(r(-3, -6));
    set.insert(r(1, 3));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_rounding() {
    assert_eq!(r(7, 2).floor(), r(3, 1));
    assert_eq!(r(-7, 2).floor(), r(-4, 1));
    assert_eq!(r(7, -2).floor(), r(-4, 1));
    assert_eq!(r(7, 2).ceil(), r(4, 1));
    assert_eq!(r(-7, 2).ceil(), r(-3, 1));
    assert_eq!(r(-7, 2).trunc(), r(-3, 1));
    assert_eq!(r(5, 2).round(), r(3, 1));
    assert_eq!(r(-5, 2).round(), r(-3, 1));
    assert_eq!(r(7, 3).round(), r(2, 1));
    assert_eq!(r(8, 4).floor().denominator(), &BigInt::from(1));
}

#[test]
fn test_is_integer() {
    assert!(r(4, 2).is_integer());
    assert!(r(-4, -2).is_integer());
    assert!(r(0, 9).is_integer());
    assert!(!r(3, 2).is_integer());
}

#[test]
fn test_to_primitive() {
    assert_eq!(r(7, 2).to_i64(), Some(3));
    assert_eq!(r(-7, 2).to_i64(), Some(-3));
    assert_eq!(r(-7, 2).to_u64(), None);
    assert_eq!(r(-7, -2).to_u64(), Some(3));
    assert_eq!(r(1, -4).to_f64(), Some(-0.25));
}

#[test]
fn test_zero_one_and_sum() {
    assert!(Rational::zero().is_zero());
    assert!(r(0, -3).is_zero());
    assert_eq!(Rational::one(), r(5, 5));
    assert_eq!(Rational::default(), Rational::zero());

    let values = vec![r(1, 2), r(1, 3), r(1, 6)];
    let total: Rational = values.iter().sum();
    assert_eq!(total, Rational::one());
    let total: Rational = values.into_iter().sum();
    assert_eq!(total.to_string(), "1");
}

#[test]
fn test_div_by_helper() {
    assert_eq!(3i64.div_by(4).unwrap(), r(3, 4));
    assert_eq!(BigInt::from(7).div_by(-2i64).unwrap().to_string(), "-7/2");
    assert_eq!(5u32.div_by(0).unwrap_err(), RationalError::DivisionByZero);
}

#[test]
fn test_from_integer_types() {
    assert_eq!(Rational::from(5i32), r(5, 1));
    assert_eq!(Rational::from(5u64), r(10, 2));
    assert_eq!(Rational::from(BigInt::from(-1)).to_string(), "-1");
}

#[test]
fn test_display() {
    assert_eq!(r(2, 1).to_string(), "2");
    assert_eq!(r(-2, 4).to_string(), "-1/2");
    assert_eq!(r(2, -4).to_string(), "-1/2");
    assert_eq!(r(-2, -4).to_string(), "1/2");
    assert_eq!(r(0, -4).to_string(), "0");
}

#[test]
fn test_parse_valid_forms() {
    assert_eq!(Rational::parse("117/1098").unwrap().to_string(), "13/122");
    assert_eq!(Rational::parse("-3").unwrap(), r(-3, 1));
    assert_eq!(Rational::parse("3/-6").unwrap().to_string(), "-1/2");
    assert_eq!("10/4".parse::<Rational>().unwrap(), r(5, 2));
}

#[test]
fn test_parse_keeps_raw_parts() {
    let x = Rational::parse("4/-8").unwrap();
    assert_eq!(x.numerator(), &BigInt::from(4));
    assert_eq!(x.denominator(), &BigInt::from(-8));
}

#[test]
fn test_parse_rejects_malformed_text() {
    for text in ["1/2/3", "abc", "", "/", "1/", "/2", "+1", " 1", "1.5", "--1", "1/ 2", "-"] {
        match Rational::parse(text) {
            Err(RationalError::InvalidFormat { input, .. }) => assert_eq!(input, text),
            other => panic!("Expected InvalidFormat for {:?}, got {:?}", text, other),
        }
    }
}

#[test]
fn test_parse_zero_denominator() {
    assert_eq!(Rational::parse("5/0"), Err(RationalError::DivisionByZero));
    assert_eq!(Rational::parse("0/-0"), Err(RationalError::DivisionByZero));
}

#[test]
fn test_error_display() {
    assert_eq!(RationalError::DivisionByZero.to_string(), "Division by zero");
    let err = Rational::parse("1/2/3").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid rational format '1/2/3': more than one '/' separator"
    );
}

#[test]
fn test_large_integers() {
    let n = BigInt::parse_bytes(b"123456789012345678901234567890123456789", 10).unwrap();
    let d = &n * BigInt::from(2);
    let x = Rational::new(n.clone(), d).unwrap();
    assert_eq!(x, r(1, 2));
    assert_eq!(x.to_string(), "1/2");
    assert_eq!(x.add(&x).to_string(), "1");
    assert_eq!(Rational::from_integer(n.clone()).to_string(), n.to_string());
}

#[test]
fn test_sign_predicates() {
    assert!(r(3, 4).is_positive());
    assert!(r(-3, -4).is_positive());
    assert!(!r(3, -4).is_positive());
    assert!(r(3, -4).is_negative());
    assert!(r(-3, 4).is_negative());
    assert!(!r(-3, -4).is_negative());

    // ゼロは正でも負でもない
    assert!(!r(0, -4).is_positive());
    assert!(!r(0, -4).is_negative());
}

#[test]
fn test_to_f64_unreduced_large_parts() {
    let big = BigInt::from(10).pow(400);
    let x = Rational::new(big.clone(), &big * BigInt::from(2)).unwrap();
    assert_eq!(x.to_f64(), Some(0.5));

    let x = Rational::new(big.clone(), &big * BigInt::from(-4)).unwrap();
    assert_eq!(x.to_f64(), Some(-0.25));
}

#[test]
fn test_to_f64_canonical_parts_beyond_f64_range() {
    // (10^400 + 1) / (2 * 10^400) は既約形でも両方が f64 の範囲を超える
    let big = BigInt::from(10).pow(400);
    let x = Rational::new(&big + BigInt::from(1), &big * BigInt::from(2)).unwrap();
    assert!(x.is_canonical());
    let value = x.to_f64().unwrap();
    assert!((value - 0.5).abs() < 1e-12, "expected about 0.5, got {}", value);
}

#[test]
fn test_to_f64_long_harmonic_sum() {
    let total: Rational = (1..=400i64).map(|k| r(1, k)).sum();
    let value = total.to_f64().unwrap();
    assert!(value.is_finite(), "harmonic sum should convert, got {}", value);
    // H_400 = ln(400) + γ + 1/800 - ...
    assert!((value - 6.569929).abs() < 1e-5, "unexpected H_400: {}", value);
    assert_eq!(total.to_f64(), total.simplify().to_f64());
}
