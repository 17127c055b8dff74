//! Property-based tests for [`BigInt`].
//!
//! Operands up to 64 bits are checked against native [`i128`] arithmetic.
//! Larger operands are built from arbitrary limbs and checked against
//! `num-bigint`, which shares no code with the implementation under test.



//		Packages																										

use super::*;
use num_bigint::{BigInt as Oracle, Sign};
use proptest::{collection::vec, prelude::*};



//		Functions																										

//		any_bigint																
/// Arbitrary values of up to six limbs, compact and extended, of either sign.
fn any_bigint() -> impl Strategy<Value = BigInt> {
	prop_oneof![
		any::<i32>().prop_map(BigInt::from),
		any::<i64>().prop_map(BigInt::from),
		(vec(any::<u32>(), 0..6), any::<bool>()).prop_map(|(limbs, negative)| {
			BigInt::new(limbs, if negative { u32::MAX } else { 0 }).unwrap()
		}),
	]
}

//		non_zero_bigint															
fn non_zero_bigint() -> impl Strategy<Value = BigInt> {
	any_bigint().prop_filter("divisor must be non-zero", |value| !value.is_zero())
}

//		oracle																	
/// The same value as a `num-bigint` integer, built from the raw limbs.
fn oracle(value: &BigInt) -> Oracle {
	let limbs     = value.to_limbs();
	let magnitude = Oracle::from_slice(Sign::Plus, &limbs);
	if value.is_negative() {
		magnitude - (Oracle::from(1) << (32 * limbs.len()))
	} else {
		magnitude
	}
}



//		Tests																											

proptest! {
	//		Text																
	/// Parsing the decimal text of a value gives back the same value.
	#[test]
	fn text__round_trip(x in any_bigint()) {
		prop_assert_eq!(BigInt::parse(&x.to_string()), Ok(x.clone()));
		prop_assert_eq!(x.to_string(), oracle(&x).to_string());
	}
	
	//		Additive															
	#[test]
	fn add__identity_and_inverse(x in any_bigint()) {
		prop_assert_eq!(&x + &BigInt::ZERO, x.clone());
		prop_assert_eq!(&x + &-&x,          BigInt::ZERO);
		prop_assert_eq!(x.increment().decrement(), x);
	}
	#[test]
	fn add__matches_oracle(x in any_bigint(), y in any_bigint()) {
		prop_assert_eq!(oracle(&(&x + &y)), oracle(&x) + oracle(&y));
		prop_assert_eq!(oracle(&(&x - &y)), oracle(&x) - oracle(&y));
		prop_assert_eq!(&x - &y,            &x + &-&y);
	}
	#[test]
	fn add__matches_native(a in any::<i64>(), b in any::<i64>()) {
		let sum = BigInt::from(a) + BigInt::from(b);
		prop_assert_eq!(i128::try_from(&sum), Ok(i128::from(a) + i128::from(b)));
		let difference = BigInt::from(a) - BigInt::from(b);
		prop_assert_eq!(i128::try_from(&difference), Ok(i128::from(a) - i128::from(b)));
	}
	
	//		Multiplicative														
	#[test]
	fn mul__identities(x in any_bigint()) {
		prop_assert_eq!(&x * &BigInt::ONE,       x.clone());
		prop_assert_eq!(&x * &BigInt::ZERO,      BigInt::ZERO);
		prop_assert_eq!(&x * &BigInt::MINUS_ONE, -&x);
	}
	#[test]
	fn mul__matches_oracle(x in any_bigint(), y in any_bigint()) {
		prop_assert_eq!(oracle(&(&x * &y)), oracle(&x) * oracle(&y));
	}
	#[test]
	fn mul__matches_native(a in any::<i64>(), b in any::<i64>()) {
		let product = BigInt::from(a) * BigInt::from(b);
		prop_assert_eq!(i128::try_from(&product), Ok(i128::from(a) * i128::from(b)));
	}
	
	//		Division															
	#[test]
	fn div_rem__contract(x in any_bigint(), y in non_zero_bigint()) {
		let QuotientRemainder { quotient, remainder } = x.div_rem(&y).unwrap();
		prop_assert_eq!(&(&quotient * &y) + &remainder, x.clone());
		prop_assert!(remainder.is_zero() || remainder.sign() == x.sign());
		prop_assert!(remainder.abs() < y.abs());
	}
	#[test]
	fn div_rem__matches_oracle(x in any_bigint(), y in non_zero_bigint()) {
		let result = x.div_rem(&y).unwrap();
		prop_assert_eq!(oracle(&result.quotient),  oracle(&x) / oracle(&y));
		prop_assert_eq!(oracle(&result.remainder), oracle(&x) % oracle(&y));
	}
	#[test]
	fn div_rem__matches_native(a in any::<i64>(), b in any::<i64>().prop_filter("non-zero", |b| *b != 0)) {
		let result = BigInt::from(a).div_rem(&BigInt::from(b)).unwrap();
		prop_assert_eq!(i128::try_from(&result.quotient),  Ok(i128::from(a) / i128::from(b)));
		prop_assert_eq!(i128::try_from(&result.remainder), Ok(i128::from(a) % i128::from(b)));
	}
	#[test]
	fn div_rem__by_zero(x in any_bigint()) {
		prop_assert_eq!(x.div_rem(&BigInt::ZERO), Err(ArithmeticError::DivisionByZero));
	}
	
	//		Shifts																
	#[test]
	fn shl__multiplies(x in any_bigint(), n in 0_u32..200) {
		prop_assert_eq!(&x << n, &x * &BigInt::from(2).pow_u32(n));
	}
	#[test]
	fn shr__floors(x in any_bigint(), n in 0_u32..200) {
		let shifted = &x >> n;
		prop_assert!(&shifted << n <= x);
		prop_assert!(x < &shifted.increment() << n);
	}
	#[test]
	fn shr__matches_native(a in any::<i64>(), n in 0_u32..80) {
		prop_assert_eq!(i128::try_from(BigInt::from(a) >> n), Ok(i128::from(a) >> n));
	}
	#[test]
	fn shift__negative_amount_reverses(x in any_bigint(), n in 0_i64..100) {
		prop_assert_eq!(x.shift_left(-n),  x.shift_right(n));
		prop_assert_eq!(x.shift_right(-n), x.shift_left(n));
	}
	
	//		Bitwise																
	#[test]
	fn not__involution(x in any_bigint()) {
		prop_assert_eq!(!!&x,    x.clone());
		prop_assert_eq!(!&x,     &-&x - &BigInt::ONE);
	}
	#[test]
	fn bitwise__de_morgan(x in any_bigint(), y in any_bigint()) {
		prop_assert_eq!(!(&x & &y), &!&x | &!&y);
		prop_assert_eq!(!(&x | &y), &!&x & &!&y);
	}
	#[test]
	fn bitwise__matches_oracle(x in any_bigint(), y in any_bigint()) {
		prop_assert_eq!(oracle(&(&x & &y)), oracle(&x) & oracle(&y));
		prop_assert_eq!(oracle(&(&x | &y)), oracle(&x) | oracle(&y));
		prop_assert_eq!(oracle(&(&x ^ &y)), oracle(&x) ^ oracle(&y));
	}
	#[test]
	fn bit__matches_native(a in any::<i64>(), index in 0_u64..128) {
		prop_assert_eq!(BigInt::from(a).bit(index), (i128::from(a) >> index) & 1 == 1);
	}
	#[test]
	fn most_significant_bit__bounds(x in any_bigint()) {
		let msb = x.most_significant_bit();
		if msb >= 0 {
			let msb  = u64::try_from(msb).unwrap();
			let rest = &x >> (msb + 1) as u32;
			prop_assert_ne!(x.bit(msb), x.is_negative());
			prop_assert!(rest.is_zero() || rest == BigInt::MINUS_ONE);
		} else {
			prop_assert!(x.is_zero() || x == BigInt::MINUS_ONE);
		}
	}
	
	//		Ordering															
	#[test]
	fn ord__matches_oracle(mut values in vec(any_bigint(), 0..20)) {
		let mut expected: Vec<Oracle> = values.iter().map(oracle).collect();
		expected.sort();
		values.sort();
		prop_assert_eq!(values.iter().map(oracle).collect::<Vec<_>>(), expected);
	}
	#[test]
	fn ord__consistent_with_eq(x in any_bigint(), y in any_bigint()) {
		prop_assert_eq!(x.cmp(&y) == Ordering::Equal, x == y);
		prop_assert_eq!(x.cmp(&y), y.cmp(&x).reverse());
	}
	
	//		Derived algorithms													
	#[test]
	fn mod_pow__matches_pow(x in any::<i64>(), e in 0_u32..20, m in 1_i64..1_000) {
		let (x, modulus) = (BigInt::from(x), BigInt::from(m));
		let expected     = &x.pow_u32(e) % &modulus;
		prop_assert_eq!(x.mod_pow(&BigInt::from(e), &modulus), Ok(expected));
	}
	#[test]
	fn pow__matches_oracle(x in any_bigint(), e in 0_u32..8) {
		prop_assert_eq!(oracle(&x.pow_u32(e)), oracle(&x).pow(e));
	}
	#[test]
	fn sqrt__bounds(x in any_bigint()) {
		let n    = x.abs();
		let root = n.sqrt().unwrap();
		let next = root.increment();
		prop_assert!(&root * &root <= n);
		prop_assert!(n < &next * &next);
	}
	
	//		Representation														
	#[test]
	fn compactness(x in any_bigint(), y in any_bigint()) {
		for value in [&x + &y, &x - &y, &x * &y, &x & &y, &x | &y, &x ^ &y, !&x, &x >> 17_u32] {
			prop_assert_eq!(value.is_compact(), i32::try_from(&value).is_ok());
		}
	}
	#[test]
	fn hash__stable_across_forms(x in any_bigint(), y in any_bigint()) {
		let mut set = HashSet::new();
		_ = set.insert(x.clone());
		prop_assert!(set.contains(&(&(&x + &y) - &y)));
	}
	#[test]
	fn limbs__round_trip(x in any_bigint()) {
		prop_assert_eq!(BigInt::new(x.to_limbs(), x.extension()), Ok(x));
	}
}
