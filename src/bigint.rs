//! Arbitrary-precision signed integer type.

//	These lint checks are unnecessary in this module because:
//	  1. All limb indexing happens within lengths computed immediately before,
//	     or goes through Repr::limb(), which accepts any index.
//	  2. The carry, borrow, and shift arithmetic is the substance of the module
//	     and is bounded by construction, e.g. a 32x32-bit product plus two
//	     32-bit addends always fits in 64 bits.
#![allow(
	clippy::arithmetic_side_effects,
	clippy::indexing_slicing,
	clippy::integer_division,
	clippy::missing_asserts_for_indexing,
	reason = "Limb arithmetic within computed bounds"
)]



//		Modules																											

#[cfg(test)]
#[path = "tests/bigint.rs"]
mod tests;



//		Packages																										

use crate::{
	errors::{ArithmeticError, ConversionError},
	limbs::{
		Extension,
		LIMB_BITS,
		LimbBuffer,
		Repr,
		bit_length,
		compare_shifted,
		low_limb,
		spare_bits,
		subtract_shifted,
		to_limb,
		to_word,
		whole_limbs,
	},
};
use bytes::BytesMut;
use core::{
	cmp::Ordering,
	error::Error,
	fmt::{Debug, Display, Formatter, Write as _, self},
	iter::{Product, Sum, once},
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr, ShrAssign},
	str::FromStr,
};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Visitor},
};
use serde_json::Error as JsonError;
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};



//		Constants																										

/// Base used when converting to and from decimal text, i.e. 10^9.
const DECIMAL_BASE: i32 = 1_000_000_000;

/// Number of decimal digits held by one [`DECIMAL_BASE`] group.
const DECIMAL_GROUP: usize = 9;



//		Structs																											

//		BigInt																			
/// An arbitrary-precision signed integer.
/// 
/// Values behave like an [`i32`] or [`i64`] that never overflows: every
/// operation produces the exact mathematical result, however many bits that
/// takes. Values are immutable, and every operation returns a new value
/// without changing its operands, so instances can be shared freely across
/// threads.
/// 
/// # Arithmetic
/// 
/// The standard operators are implemented for every combination of owned and
/// borrowed operands, following Rust integer semantics:
/// 
///   - Division truncates towards zero, and the remainder takes the sign of
///     the dividend, so `-7 / 2 == -3` and `-7 % 2 == -1`.
///   - Division by zero panics. Use [`div_rem()`](BigInt::div_rem()),
///     [`checked_div()`](BigInt::checked_div()), or
///     [`checked_rem()`](BigInt::checked_rem()) to receive an error instead.
///   - Shifts are arithmetic, i.e. `>>` rounds towards negative infinity, and
///     a negative shift amount shifts the other way.
///   - Bitwise operators act on the infinite two's-complement representation,
///     so `!0 == -1` and `-1 & x == x`.
/// 
/// # Conversion
/// 
/// [`From`] is implemented for every primitive integer type. Converting back
/// is potentially lossy, so [`TryFrom`] is implemented for the primitive
/// types instead.
/// 
/// Decimal text is supported via [`Display`] and [`FromStr`]. The accepted
/// syntax is deliberately strict: an optional `-` followed by at least one
/// ASCII digit, and nothing else.
/// 
/// # Internal representation
/// 
/// A value that fits in an [`i32`] is stored as exactly that, with no
/// allocation. Anything larger is stored as a sequence of 32-bit limbs, least
/// significant first, plus an extension word (`0x0000_0000` or
/// `0xFFFF_FFFF`) that conceptually repeats forever above the stored limbs.
/// This means that the limbs are a two's-complement encoding of unbounded
/// width, rather than a magnitude plus a sign.
/// 
/// For example:
/// 
/// ```text
/// Value             Limbs                      Extension
/// 42                (compact)
/// 2^31              [0x8000_0000]              0x0000_0000
/// -2^32             [0x0000_0000]              0xFFFF_FFFF
/// 2^64 + 5          [0x0000_0005, 0, 0x0001]   0x0000_0000
/// ```
/// 
/// Every value has exactly one representation: compact whenever it fits, and
/// otherwise with no redundant top limbs equal to the extension word. Equality
/// and hashing rely on this.
/// 
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct BigInt(Repr);

//󰭅		BigInt																			
impl BigInt {
	//		Public constants													
	/// The value `0`.
	pub const ZERO:      Self = Self(Repr::Compact(0));
	
	/// The value `1`.
	pub const ONE:       Self = Self(Repr::Compact(1));
	
	/// The value `-1`.
	pub const MINUS_ONE: Self = Self(Repr::Compact(-1));
	
	//		Constructors														
	
	//		new																	
	/// Creates a new [`BigInt`] from raw limbs.
	/// 
	/// The limbs do not need to be minimal; any redundant top limbs are
	/// discarded, and the result is collapsed to the compact form if it fits.
	/// 
	/// # Parameters
	/// 
	/// * `limbs`     - The limbs, least-significant first.
	/// * `extension` - The word that repeats above the limbs, which must be
	///                 `0x0000_0000` for a non-negative value or `0xFFFF_FFFF`
	///                 for a negative one.
	/// 
	/// An empty list of limbs stands for the extension repeated forever, so
	/// it gives `0` with a zero extension and `-1` with an all-ones one.
	/// 
	/// # Errors
	/// 
	/// Returns [`ArithmeticError::InvalidExtension`] if the extension word is
	/// anything else.
	/// 
	pub fn new(limbs: Vec<u32>, extension: u32) -> Result<Self, ArithmeticError> {
		let extension = Extension::from_word(extension)?;
		Ok(Self::from_buffer(LimbBuffer::new(limbs, extension)))
	}
	
	//		parse																
	/// Parses a string into a [`BigInt`].
	/// 
	/// This is a convenience method that calls [`FromStr::from_str()`].
	/// 
	/// # Parameters
	/// 
	/// * `s` - The string to parse.
	/// 
	/// # Errors
	/// 
	/// If the string is not an optional `-` followed by one or more decimal
	/// digits, an error will be returned.
	/// 
	pub fn parse(s: &str) -> Result<Self, ConversionError> {
		s.parse()
	}
	
	//		try_parse															
	/// Parses a string into a [`BigInt`], returning [`None`] on failure.
	/// 
	/// # Parameters
	/// 
	/// * `s` - The string to parse.
	/// 
	#[must_use]
	pub fn try_parse(s: &str) -> Option<Self> {
		s.parse().ok()
	}
	
	//		Public methods														
	
	//		abs																	
	/// Computes the absolute value.
	#[must_use]
	pub fn abs(&self) -> Self {
		if self.is_negative() {
			self.negate()
		} else {
			self.clone()
		}
	}
	
	//		bit																	
	/// Gets the value of a specific bit.
	/// 
	/// There is no upper limit: bits beyond the stored limbs are `false` for
	/// non-negative values and `true` for negative ones.
	/// 
	/// # Parameters
	/// 
	/// * `index` - The position of the bit to get, where `0` is the
	///             least-significant bit.
	/// 
	#[must_use]
	pub fn bit(&self, index: u64) -> bool {
		self.0.bit(index)
	}
	
	//		checked_div															
	/// Checked division.
	/// 
	/// Computes `self / rhs`, truncating towards zero.
	/// 
	/// # Errors
	/// 
	/// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
	/// 
	pub fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
		Ok(self.div_rem(rhs)?.quotient)
	}
	
	//		checked_rem															
	/// Checked remainder.
	/// 
	/// Computes `self % rhs`. The result has the sign of `self`.
	/// 
	/// # Errors
	/// 
	/// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
	/// 
	pub fn checked_rem(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
		Ok(self.div_rem(rhs)?.remainder)
	}
	
	//		decrement															
	/// Computes `self - 1`.
	#[must_use]
	pub fn decrement(&self) -> Self {
		self.add_or_subtract(&Self::ONE, true)
	}
	
	//		div_rem																
	/// Divides, producing both the quotient and the remainder.
	/// 
	/// The quotient is truncated towards zero, and the remainder has the sign
	/// of `self`, so that `quotient * rhs + remainder == self` always holds.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The divisor.
	/// 
	/// # Errors
	/// 
	/// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
	/// 
	pub fn div_rem(&self, rhs: &Self) -> Result<QuotientRemainder, ArithmeticError> {
		if rhs.is_zero() {
			return Err(ArithmeticError::DivisionByZero);
		}
		Ok(self.divide(rhs))
	}
	
	//		extension															
	/// The word repeated above the stored limbs: `0x0000_0000` for
	/// non-negative values, and `0xFFFF_FFFF` for negative ones.
	#[must_use]
	pub const fn extension(&self) -> u32 {
		self.0.extension().word()
	}
	
	//		from_json															
	/// Deserialises a value from JSON.
	/// 
	/// # Errors
	/// 
	/// Returns an error if the JSON is neither an integer nor a string of
	/// decimal digits.
	/// 
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}
	
	//		get_bit																
	/// Gets the value of a specific bit, given a signed index.
	/// 
	/// This is the same as [`bit()`](BigInt::bit()), for callers whose index
	/// arrives as a signed number.
	/// 
	/// # Errors
	/// 
	/// Returns [`ArithmeticError::NegativeBitIndex`] if `index` is negative.
	/// 
	pub fn get_bit(&self, index: i64) -> Result<bool, ArithmeticError> {
		u64::try_from(index)
			.map(|position| self.bit(position))
			.map_err(|_| ArithmeticError::NegativeBitIndex(index))
	}
	
	//		increment															
	/// Computes `self + 1`.
	#[must_use]
	pub fn increment(&self) -> Self {
		self.add_or_subtract(&Self::ONE, false)
	}
	
	//		is_compact															
	/// Whether the value is held in the single-word form, without any
	/// allocation. This is the case exactly when it fits in an [`i32`].
	#[must_use]
	pub const fn is_compact(&self) -> bool {
		matches!(self.0, Repr::Compact(_))
	}
	
	//		is_negative															
	/// Whether the value is less than zero.
	#[must_use]
	pub const fn is_negative(&self) -> bool {
		self.0.extension().is_negative()
	}
	
	//		is_positive															
	/// Whether the value is greater than zero.
	#[must_use]
	pub const fn is_positive(&self) -> bool {
		!self.is_negative() && !self.is_zero()
	}
	
	//		is_zero																
	/// Whether the value is zero.
	#[must_use]
	pub const fn is_zero(&self) -> bool {
		matches!(self.0, Repr::Compact(0))
	}
	
	//		mod_pow																
	/// Modular exponentiation.
	/// 
	/// Computes `self.pow(exponent) % modulus` without ever holding the full
	/// power: every intermediate product is reduced by the modulus as soon as
	/// it is formed. As with `%`, the result has the sign of `self.pow(exponent)`.
	/// 
	/// # Parameters
	/// 
	/// * `exponent` - The power to raise `self` to.
	/// * `modulus`  - The value to reduce by.
	/// 
	/// # Errors
	/// 
	///   - [`ArithmeticError::NegativeExponent`] if `exponent` is negative.
	///   - [`ArithmeticError::NegativeModulus`] if `modulus` is negative.
	///   - [`ArithmeticError::DivisionByZero`] if `modulus` is zero.
	/// 
	pub fn mod_pow(&self, exponent: &Self, modulus: &Self) -> Result<Self, ArithmeticError> {
		if exponent.is_negative() {
			return Err(ArithmeticError::NegativeExponent);
		}
		if modulus.is_negative() {
			return Err(ArithmeticError::NegativeModulus);
		}
		if modulus.is_zero() {
			return Err(ArithmeticError::DivisionByZero);
		}
		if *modulus == Self::ONE {
			return Ok(Self::ZERO);
		}
		if exponent.is_zero() {
			return Ok(Self::ONE);
		}
		Ok(self.square_and_multiply(exponent, Some(modulus)))
	}
	
	//		most_significant_bit												
	/// The index of the highest bit that differs from the sign.
	/// 
	/// For a positive value this is the highest set bit, and for a negative
	/// value the highest clear bit. Returns `-1` for `0` and `-1`, which have
	/// no such bit.
	/// 
	#[must_use]
	pub fn most_significant_bit(&self) -> i64 {
		let sign = self.0.extension().word();
		
		(0..self.0.len()).rev()
			.find_map(|index| {
				let differing = self.0.limb(index) ^ sign;
				(differing != 0).then(|| index as u64 * LIMB_BITS + 31 - u64::from(differing.leading_zeros()))
			})
			.map_or(-1, |bit| i64::try_from(bit).unwrap_or(i64::MAX))
	}
	
	//		pow																	
	/// Exponentiation.
	/// 
	/// # Parameters
	/// 
	/// * `exponent` - The power to raise `self` to.
	/// 
	/// # Errors
	/// 
	/// Returns [`ArithmeticError::NegativeExponent`] if `exponent` is
	/// negative.
	/// 
	pub fn pow(&self, exponent: &Self) -> Result<Self, ArithmeticError> {
		if exponent.is_negative() {
			return Err(ArithmeticError::NegativeExponent);
		}
		Ok(self.square_and_multiply(exponent, None))
	}
	
	//		pow_u32																
	/// Exponentiation by a primitive exponent, which cannot be negative.
	#[must_use]
	pub fn pow_u32(&self, exponent: u32) -> Self {
		self.square_and_multiply(&Self::from(exponent), None)
	}
	
	//		shift_left															
	/// Shifts left by `amount` bits, i.e. multiplies by `2^amount`.
	/// 
	/// A negative amount shifts right instead.
	/// 
	/// # Panics
	/// 
	/// Shifting a non-zero value needs one limb per 32 bits of `amount`, so
	/// an amount whose result cannot be allocated panics, or aborts on
	/// allocation failure, in the same way as an oversized [`Vec`].
	/// 
	#[must_use]
	pub fn shift_left(&self, amount: i64) -> Self {
		u64::try_from(amount).map_or_else(
			|_| self.shr_bits(amount.unsigned_abs()),
			|bits| self.shl_bits(bits),
		)
	}
	
	//		shift_right															
	/// Shifts right by `amount` bits, i.e. divides by `2^amount`, rounding
	/// towards negative infinity.
	/// 
	/// A negative amount shifts left instead. Shifting out every significant
	/// bit leaves `0` for a non-negative value and `-1` for a negative one.
	/// 
	/// # Panics
	/// 
	/// A negative amount is subject to the same allocation limit as
	/// [`shift_left()`](BigInt::shift_left()).
	/// 
	#[must_use]
	pub fn shift_right(&self, amount: i64) -> Self {
		u64::try_from(amount).map_or_else(
			|_| self.shl_bits(amount.unsigned_abs()),
			|bits| self.shr_bits(bits),
		)
	}
	
	//		sign																
	/// Returns `-1`, `0`, or `1` according to the sign of the value.
	#[must_use]
	pub const fn sign(&self) -> i32 {
		match self.0 {
			Repr::Compact(value)                                         => value.signum(),
			Repr::Extended { extension: Extension::Negative, .. } => -1,
			Repr::Extended { extension: Extension::Positive, .. } => 1,
		}
	}
	
	//		sqrt																
	/// Integer square root, rounded down.
	/// 
	/// The result is built one bit at a time from the top: each bit is kept
	/// only if the square of the candidate does not exceed `self`.
	/// 
	/// # Errors
	/// 
	/// Returns [`ArithmeticError::NegativeRadicand`] if `self` is negative.
	/// 
	pub fn sqrt(&self) -> Result<Self, ArithmeticError> {
		if self.is_negative() {
			return Err(ArithmeticError::NegativeRadicand);
		}
		let Ok(top) = u64::try_from(self.most_significant_bit()) else {
			return Ok(Self::ZERO);
		};
		
		let mut root = Self::ZERO;
		for index in (0..=top / 2).rev() {
			let candidate = &root | &Self::ONE.shl_bits(index);
			if &candidate * &candidate <= *self {
				root = candidate;
			}
		}
		Ok(root)
	}
	
	//		to_json																
	/// Serialises the value to JSON.
	/// 
	/// Values that fit in an [`i64`] become JSON numbers, and larger values
	/// become strings of decimal digits, as JSON parsers commonly lose
	/// precision beyond 64 bits.
	/// 
	/// # Errors
	/// 
	/// Returns an error if serialisation fails.
	/// 
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}
	
	//		to_limbs															
	/// Returns the stored limbs, least-significant first.
	/// 
	/// A compact value yields a single limb. Together with
	/// [`extension()`](BigInt::extension()) this is the inverse of
	/// [`new()`](BigInt::new()).
	/// 
	#[must_use]
	pub fn to_limbs(&self) -> Vec<u32> {
		match &self.0 {
			Repr::Compact(value)         => vec![to_limb(*value)],
			Repr::Extended { limbs, .. } => limbs.clone(),
		}
	}
	
	//		Private methods														
	
	//		add_or_subtract														
	/// Adds or subtracts `rhs`.
	/// 
	/// Subtraction adds the one's complement of `rhs` with an initial carry of
	/// one, so both share the same loop.
	/// 
	fn add_or_subtract(&self, rhs: &Self, subtract: bool) -> Self {
		//	Single words cannot overflow 64 bits
		if let (Repr::Compact(a), Repr::Compact(b)) = (&self.0, &rhs.0) {
			let (a, b) = (i64::from(*a), i64::from(*b));
			return Self::from_i128(i128::from(if subtract { a - b } else { a + b }));
		}
		
		let mask    = if subtract { u32::MAX } else { 0 };
		let mut len = self.0.len().max(rhs.0.len());
		
		//	Widen by a limb if the sign-extended top limbs, plus a possible carry
		//	from below, could leave the signed 32-bit range
		let addend = if subtract { !rhs.0.extension() } else { rhs.0.extension() };
		let top    = self.0.extension().extend(self.0.limb(len - 1)) + addend.extend(rhs.0.limb(len - 1) ^ mask);
		if top + 1 > i64::from(i32::MAX) || top < i64::from(i32::MIN) {
			len += 1;
		}
		
		let mut limbs = Vec::with_capacity(len);
		let mut carry = u64::from(subtract);
		for index in 0..len {
			let sum = u64::from(self.0.limb(index)) + u64::from(rhs.0.limb(index) ^ mask) + carry;
			limbs.push(low_limb(sum));
			carry   = sum >> LIMB_BITS;
		}
		
		//	The result fits, so its top limb carries the sign
		let extension = Extension::of_limb(limbs[len - 1]);
		Self::from_buffer(LimbBuffer::new(limbs, extension))
	}
	
	//		bitwise																
	/// Applies a bitwise operation to every limb, extensions included.
	fn bitwise<F>(&self, rhs: &Self, op: F) -> Self
	where
		F: Fn(u32, u32) -> u32,
	{
		let len       = self.0.len().max(rhs.0.len());
		let limbs     = (0..len).map(|index| op(self.0.limb(index), rhs.0.limb(index))).collect();
		let extension = Extension::of_limb(op(self.0.extension().word(), rhs.0.extension().word()));
		Self::from_buffer(LimbBuffer::new(limbs, extension))
	}
	
	//		divide																
	/// Divides by a divisor already known to be non-zero.
	fn divide(&self, divisor: &Self) -> QuotientRemainder {
		if let (Repr::Compact(a), Repr::Compact(b)) = (&self.0, &divisor.0) {
			//	64 bits, so that i32::MIN / -1 does not overflow
			let (a, b) = (i64::from(*a), i64::from(*b));
			return QuotientRemainder {
				quotient:  Self::from_i128(i128::from(a / b)),
				remainder: Self::from_i128(i128::from(a % b)),
			};
		}
		
		let (quotient, remainder) = divide_magnitudes(self.magnitude(), &divisor.magnitude());
		QuotientRemainder {
			quotient:  Self::from_magnitude(quotient, self.is_negative() != divisor.is_negative()),
			remainder: Self::from_magnitude(remainder, self.is_negative()),
		}
	}
	
	//		from_buffer															
	/// Publishes a finished buffer as a value.
	fn from_buffer(buffer: LimbBuffer) -> Self {
		Self(buffer.normalize())
	}
	
	//		from_i128															
	fn from_i128(value: i128) -> Self {
		if let Ok(word) = i32::try_from(value) {
			return Self(Repr::Compact(word));
		}
		let limbs     = limbs_from_bytes(value.to_le_bytes());
		let extension = if value < 0 { Extension::Negative } else { Extension::Positive };
		Self::from_buffer(LimbBuffer::new(limbs, extension))
	}
	
	//		from_magnitude														
	/// Builds a value from an unsigned magnitude and a sign.
	fn from_magnitude(magnitude: Vec<u32>, negative: bool) -> Self {
		let value = Self::from_buffer(LimbBuffer::new(magnitude, Extension::Positive));
		if negative {
			value.negate()
		} else {
			value
		}
	}
	
	//		from_u128															
	fn from_u128(value: u128) -> Self {
		if let Ok(word) = i32::try_from(value) {
			return Self(Repr::Compact(word));
		}
		Self::from_buffer(LimbBuffer::new(limbs_from_bytes(value.to_le_bytes()), Extension::Positive))
	}
	
	//		magnitude															
	/// The absolute value as unsigned limbs, without any top zero limbs.
	fn magnitude(&self) -> Vec<u32> {
		//	One spare limb, as e.g. -2^32 needs two limbs of magnitude
		let mut limbs: Vec<u32> = (0..=self.0.len()).map(|index| self.0.limb(index)).collect();
		
		if self.is_negative() {
			//	Two's complement: invert, then add one
			let mut carry = true;
			for limb in &mut limbs {
				let (sum, overflowed) = (!*limb).overflowing_add(u32::from(carry));
				*limb                 = sum;
				carry                 = overflowed;
			}
		}
		while limbs.last() == Some(&0) {
			_ = limbs.pop();
		}
		limbs
	}
	
	//		multiply															
	/// Schoolbook multiplication over the sign-extended limbs.
	/// 
	/// The product is computed modulo `2^(32 * len)` on the two's-complement
	/// encodings directly, with `len` chosen large enough to hold the exact
	/// signed result, which makes the truncated product exact.
	/// 
	fn multiply(&self, rhs: &Self) -> Self {
		if self.is_zero() || rhs.is_zero() {
			return Self::ZERO;
		}
		match (&self.0, &rhs.0) {
			(Repr::Compact(1), _)                    => return rhs.clone(),
			(_, Repr::Compact(1))                    => return self.clone(),
			(Repr::Compact(-1), _)                   => return rhs.negate(),
			(_, Repr::Compact(-1))                   => return self.negate(),
			(Repr::Compact(a), Repr::Compact(b)) => {
				return Self::from_i128(i128::from(i64::from(*a) * i64::from(*b)));
			},
			_                                        => {},
		}
		
		//	Both magnitudes, plus room for the sign, rounded up to whole limbs
		#[expect(clippy::cast_sign_loss, reason = "Neither bit index is below -1, so the sum is positive")]
		let bits      = (self.most_significant_bit() + rhs.most_significant_bit() + 33) as u64;
		let len       = whole_limbs(bits + LIMB_BITS - 1);
		let mut limbs = vec![0_u32; len];
		
		for i in 0..len {
			let multiplier = u64::from(self.0.limb(i));
			if multiplier == 0 {
				continue;
			}
			let mut carry = 0_u64;
			for j in 0..len - i {
				let product  = multiplier * u64::from(rhs.0.limb(j)) + u64::from(limbs[i + j]) + carry;
				limbs[i + j] = low_limb(product);
				carry        = product >> LIMB_BITS;
			}
		}
		
		let extension = if self.is_negative() == rhs.is_negative() {
			Extension::Positive
		} else {
			Extension::Negative
		};
		Self::from_buffer(LimbBuffer::new(limbs, extension))
	}
	
	//		negate																
	fn negate(&self) -> Self {
		match self.0 {
			Repr::Compact(value)  => Self::from_i128(-i128::from(value)),
			Repr::Extended { .. } => Self::ZERO.add_or_subtract(self, true),
		}
	}
	
	//		shl_bits															
	/// Shifts left by a whole number of limbs plus a remainder of bits.
	fn shl_bits(&self, amount: u64) -> Self {
		match self.0 {
			_ if amount == 0 || self.is_zero()       => return self.clone(),
			Repr::Compact(value) if amount < LIMB_BITS => {
				return Self::from_i128(i128::from(value) << amount);
			},
			_                                        => {},
		}
		
		#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
		let (words, len) = usize::try_from(amount / LIMB_BITS).ok()
			.and_then(|words| words.checked_add(self.0.len() + 1).map(|len| (words, len)))
			.expect("Attempt to shift left overflowed")
		;
		let bits         = spare_bits(amount);
		let mut limbs    = vec![0_u32; len];
		
		for (index, limb) in limbs.iter_mut().enumerate().skip(words) {
			let source = index - words;
			*limb      = if bits == 0 {
				self.0.limb(source)
			} else {
				let carried = source.checked_sub(1).map_or(0, |below| self.0.limb(below) >> (32 - bits));
				(self.0.limb(source) << bits) | carried
			};
		}
		Self::from_buffer(LimbBuffer::new(limbs, self.0.extension()))
	}
	
	//		shr_bits															
	/// Arithmetic right shift, rounding towards negative infinity.
	fn shr_bits(&self, amount: u64) -> Self {
		if amount == 0 {
			return self.clone();
		}
		if let Repr::Compact(value) = self.0 {
			return Self(Repr::Compact(value >> amount.min(31)));
		}
		
		let extension = self.0.extension();
		let words     = usize::try_from(amount / LIMB_BITS).unwrap_or(usize::MAX);
		if words >= self.0.len() {
			//	Only the sign is left
			return Self(Repr::Compact(to_word(extension.word())));
		}
		
		let bits  = spare_bits(amount);
		let limbs = (words..self.0.len())
			.map(|source| {
				if bits == 0 {
					self.0.limb(source)
				} else {
					(self.0.limb(source) >> bits) | (self.0.limb(source + 1) << (32 - bits))
				}
			})
			.collect()
		;
		Self::from_buffer(LimbBuffer::new(limbs, extension))
	}
	
	//		square_and_multiply													
	/// Raises to a non-negative power, optionally reducing by a non-zero
	/// modulus after every multiplication.
	/// 
	/// The exponent is walked from its least-significant bit up. The running
	/// square is multiplied into the result for every set bit.
	/// 
	fn square_and_multiply(&self, exponent: &Self, modulus: Option<&Self>) -> Self {
		let reduce = |value: Self| match modulus {
			Some(modulus) => value.divide(modulus).remainder,
			None          => value,
		};
		let bits       = u64::try_from(exponent.most_significant_bit() + 1).unwrap_or(0);
		let mut result = Self::ONE;
		let mut base   = reduce(self.clone());
		
		for index in 0..bits {
			if exponent.bit(index) {
				result = reduce(&result * &base);
			}
			if index + 1 < bits {
				base = reduce(&base * &base);
			}
		}
		result
	}
	
	//		to_i128																
	fn to_i128(&self) -> Option<i128> {
		(self.most_significant_bit() < 127).then(|| {
			let bits = (0..4).fold(0_u128, |acc, index| acc | (u128::from(self.0.limb(index)) << (LIMB_BITS * index as u64)));
			i128::from_le_bytes(bits.to_le_bytes())
		})
	}
	
	//		to_u128																
	fn to_u128(&self) -> Option<u128> {
		(!self.is_negative() && self.most_significant_bit() < 128).then(|| {
			(0..4).fold(0_u128, |acc, index| acc | (u128::from(self.0.limb(index)) << (LIMB_BITS * index as u64)))
		})
	}
}

//		QuotientRemainder																
/// The result of dividing with [`BigInt::div_rem()`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub struct QuotientRemainder {
	/// The quotient, truncated towards zero.
	pub quotient:  BigInt,
	
	/// The remainder, which has the sign of the dividend.
	pub remainder: BigInt,
}

//󰭅		From: QuotientRemainder -> (BigInt, BigInt)										
impl From<QuotientRemainder> for (BigInt, BigInt) {
	//		from																
	fn from(result: QuotientRemainder) -> Self {
		(result.quotient, result.remainder)
	}
}



//		Functions																										

//		divide_magnitudes														
/// Restoring long division of unsigned magnitudes, one quotient bit at a time.
/// 
/// The divisor is aligned against the remainder at every bit offset from the
/// largest possible down to zero. Wherever the remainder is at least the
/// aligned divisor (equality included), the quotient bit is set and the
/// aligned divisor is subtracted from the remainder in place.
/// 
fn divide_magnitudes(dividend: Vec<u32>, divisor: &[u32]) -> (Vec<u32>, Vec<u32>) {
	let mut remainder = dividend;
	let dividend_bits = bit_length(&remainder);
	let divisor_bits  = bit_length(divisor);
	
	if dividend_bits < divisor_bits {
		return (Vec::new(), remainder);
	}
	
	let top_shift    = dividend_bits - divisor_bits;
	let mut quotient = vec![0_u32; whole_limbs(top_shift) + 1];
	
	for shift in (0..=top_shift).rev() {
		if compare_shifted(&remainder, divisor, shift).is_ge() {
			subtract_shifted(&mut remainder, divisor, shift);
			quotient[whole_limbs(shift)] |= 1_u32 << spare_bits(shift);
		}
	}
	(quotient, remainder)
}

//		limbs_from_bytes														
/// Splits the little-endian bytes of a primitive into limbs.
fn limbs_from_bytes<const N: usize>(bytes: [u8; N]) -> Vec<u32> {
	bytes.chunks_exact(4)
		.map(|chunk| chunk.iter().rev().fold(0_u32, |acc, &byte| (acc << 8_u32) | u32::from(byte)))
		.collect()
}



//		Macros																											

/// Implements a binary operator for owned and mixed operands, and its
/// assigning form, by delegating to the implementation for two references.
macro_rules! forward_binop {
	($Trait:ident, $method:ident, $TraitAssign:ident, $assign:ident) => {
		impl $Trait<BigInt> for BigInt {
			type Output = BigInt;
			
			fn $method(self, rhs: BigInt) -> BigInt {
				<&BigInt as $Trait<&BigInt>>::$method(&self, &rhs)
			}
		}
		
		impl $Trait<&BigInt> for BigInt {
			type Output = BigInt;
			
			fn $method(self, rhs: &BigInt) -> BigInt {
				<&BigInt as $Trait<&BigInt>>::$method(&self, rhs)
			}
		}
		
		impl $Trait<BigInt> for &BigInt {
			type Output = BigInt;
			
			fn $method(self, rhs: BigInt) -> BigInt {
				<&BigInt as $Trait<&BigInt>>::$method(self, &rhs)
			}
		}
		
		impl $TraitAssign<BigInt> for BigInt {
			fn $assign(&mut self, rhs: BigInt) {
				*self = <&BigInt as $Trait<&BigInt>>::$method(self, &rhs);
			}
		}
		
		impl $TraitAssign<&BigInt> for BigInt {
			fn $assign(&mut self, rhs: &BigInt) {
				*self = <&BigInt as $Trait<&BigInt>>::$method(self, rhs);
			}
		}
	};
}

/// Implements the shift operators for a primitive shift amount. Negative
/// amounts shift the other way.
macro_rules! impl_shifts {
	($($Amount:ty),*) => {$(
		impl Shl<$Amount> for &BigInt {
			type Output = BigInt;
			
			fn shl(self, rhs: $Amount) -> BigInt {
				self.shift_left(i64::from(rhs))
			}
		}
		
		impl Shl<$Amount> for BigInt {
			type Output = BigInt;
			
			fn shl(self, rhs: $Amount) -> BigInt {
				self.shift_left(i64::from(rhs))
			}
		}
		
		impl ShlAssign<$Amount> for BigInt {
			fn shl_assign(&mut self, rhs: $Amount) {
				*self = self.shift_left(i64::from(rhs));
			}
		}
		
		impl Shr<$Amount> for &BigInt {
			type Output = BigInt;
			
			fn shr(self, rhs: $Amount) -> BigInt {
				self.shift_right(i64::from(rhs))
			}
		}
		
		impl Shr<$Amount> for BigInt {
			type Output = BigInt;
			
			fn shr(self, rhs: $Amount) -> BigInt {
				self.shift_right(i64::from(rhs))
			}
		}
		
		impl ShrAssign<$Amount> for BigInt {
			fn shr_assign(&mut self, rhs: $Amount) {
				*self = self.shift_right(i64::from(rhs));
			}
		}
	)*};
}

/// Implements lossless conversion from primitive integers.
macro_rules! impl_from_primitive {
	($via:ident: $Wide:ty => $($Primitive:ty),*) => {$(
		impl From<$Primitive> for BigInt {
			fn from(v: $Primitive) -> Self {
				Self::$via(<$Wide>::from(v))
			}
		}
	)*};
}

/// Implements checked conversion into primitive integers.
macro_rules! impl_try_into_primitive {
	($via:ident => $($Primitive:ty),*) => {$(
		impl TryFrom<&BigInt> for $Primitive {
			type Error = ConversionError;
			
			fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
				if v.is_negative() && <$Primitive>::MIN == 0 {
					return Err(ConversionError::ValueIsNegative);
				}
				v.$via()
					.and_then(|wide| Self::try_from(wide).ok())
					.ok_or(ConversionError::ValueTooLarge)
			}
		}
		
		impl TryFrom<BigInt> for $Primitive {
			type Error = ConversionError;
			
			fn try_from(v: BigInt) -> Result<Self, Self::Error> {
				Self::try_from(&v)
			}
		}
	)*};
}



//		Trait implementations																							

forward_binop!(Add,    add,    AddAssign,    add_assign);
forward_binop!(BitAnd, bitand, BitAndAssign, bitand_assign);
forward_binop!(BitOr,  bitor,  BitOrAssign,  bitor_assign);
forward_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign);
forward_binop!(Div,    div,    DivAssign,    div_assign);
forward_binop!(Mul,    mul,    MulAssign,    mul_assign);
forward_binop!(Rem,    rem,    RemAssign,    rem_assign);
forward_binop!(Sub,    sub,    SubAssign,    sub_assign);

impl_shifts!(i32, u32);

impl_from_primitive!(from_i128: i128 => i8, i16, i32, i64, i128);
impl_from_primitive!(from_u128: u128 => u8, u16, u32, u64, u128);

impl_try_into_primitive!(to_i128 => i8, i16, i32, i64, i128);
impl_try_into_primitive!(to_u128 => u8, u16, u32, u64, u128);

//󰭅		Add																				
impl Add<&BigInt> for &BigInt {
	type Output = BigInt;
	
	//		add																	
	fn add(self, rhs: &BigInt) -> Self::Output {
		self.add_or_subtract(rhs, false)
	}
}

//󰭅		BitAnd																			
impl BitAnd<&BigInt> for &BigInt {
	type Output = BigInt;
	
	//		bitand																
	fn bitand(self, rhs: &BigInt) -> Self::Output {
		match (&self.0, &rhs.0) {
			(Repr::Compact(a), Repr::Compact(b)) => BigInt(Repr::Compact(a & b)),
			//	A non-negative word clears everything above the first limb
			(Repr::Compact(word), other) | (other, Repr::Compact(word)) if *word >= 0 => {
				BigInt(Repr::Compact(to_word(other.limb(0) & to_limb(*word))))
			},
			_ => self.bitwise(rhs, |a, b| a & b),
		}
	}
}

//󰭅		BitOr																			
impl BitOr<&BigInt> for &BigInt {
	type Output = BigInt;
	
	//		bitor																
	fn bitor(self, rhs: &BigInt) -> Self::Output {
		match (&self.0, &rhs.0) {
			(Repr::Compact(a), Repr::Compact(b)) => BigInt(Repr::Compact(a | b)),
			//	A negative word sets everything above the first limb
			(Repr::Compact(word), other) | (other, Repr::Compact(word)) if *word < 0 => {
				BigInt(Repr::Compact(to_word(other.limb(0)) | *word))
			},
			_ => self.bitwise(rhs, |a, b| a | b),
		}
	}
}

//󰭅		BitXor																			
impl BitXor<&BigInt> for &BigInt {
	type Output = BigInt;
	
	//		bitxor																
	fn bitxor(self, rhs: &BigInt) -> Self::Output {
		match (&self.0, &rhs.0) {
			(Repr::Compact(a), Repr::Compact(b)) => BigInt(Repr::Compact(a ^ b)),
			_                                    => self.bitwise(rhs, |a, b| a ^ b),
		}
	}
}

//󰭅		Debug																			
impl Debug for BigInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	Standard format - BigInt(value)
		write!(f, "BigInt({self})")?;
		
		//	For alternate formatting (#), show the limbs and extension
		if f.alternate() {
			write!(f, " [")?;
			for (i, limb) in self.to_limbs().iter().enumerate() {
				if i > 0 {
					write!(f, ", ")?;
				}
				write!(f, "0x{limb:08x}")?;
			}
			write!(f, "; 0x{:08x}]", self.extension())?;
		}
		
		Ok(())
	}
}

//󰭅		Default																			
impl Default for BigInt {
	//		default																
	fn default() -> Self {
		Self::ZERO
	}
}

//󰭅		Deserialize																		
impl<'de> Deserialize<'de> for BigInt {
	//		deserialize															
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	If the format is human-readable, accept both numbers and strings
			deserializer.deserialize_any(BigIntVisitor)
		} else {
			//	For binary formats, expect decimal text
			deserializer.deserialize_str(BigIntVisitor)
		}
	}
}

//󰭅		Display																			
impl Display for BigInt {
	//		fmt																	
	/// Formats the value in decimal.
	/// 
	/// Extended values are divided by 10^9 repeatedly, giving groups of nine
	/// digits from the least significant up. All groups but the most
	/// significant are zero-padded.
	/// 
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if let Repr::Compact(value) = self.0 {
			return Display::fmt(&value, f);
		}
		
		let base          = Self::from(DECIMAL_BASE);
		let mut groups    = Vec::new();
		let mut remaining = self.abs();
		while !remaining.is_zero() {
			let QuotientRemainder { quotient, remainder } = remaining.divide(&base);
			groups.push(u32::try_from(&remainder).map_err(|_| fmt::Error)?);
			remaining = quotient;
		}
		
		let mut digits = String::with_capacity(groups.len() * DECIMAL_GROUP);
		let mut groups = groups.iter().rev();
		if let Some(first) = groups.next() {
			write!(digits, "{first}")?;
		}
		for group in groups {
			write!(digits, "{group:09}")?;
		}
		f.pad_integral(!self.is_negative(), "", &digits)
	}
}

//󰭅		Div																				
impl Div<&BigInt> for &BigInt {
	type Output = BigInt;
	
	//		div																	
	/// # Panics
	/// 
	/// Panics if `rhs` is zero.
	/// 
	fn div(self, rhs: &BigInt) -> Self::Output {
		assert!(!rhs.is_zero(), "Attempt to divide by zero");
		self.divide(rhs).quotient
	}
}

//󰭅		From: isize -> BigInt															
impl From<isize> for BigInt {
	//		from																
	fn from(v: isize) -> Self {
		Self::from_i128(v as i128)
	}
}

//󰭅		From: usize -> BigInt															
impl From<usize> for BigInt {
	//		from																
	fn from(v: usize) -> Self {
		Self::from_u128(v as u128)
	}
}

//󰭅		FromSql																			
impl<'a> FromSql<'a> for BigInt {
	//		from_sql															
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2                 => Ok(Self::from(i16::from_sql(ty, raw)?)),
			&Type::INT4                 => Ok(Self::from(i32::from_sql(ty, raw)?)),
			&Type::INT8                 => Ok(Self::from(i64::from_sql(ty, raw)?)),
			&Type::TEXT | &Type::VARCHAR => Ok(<&str>::from_sql(ty, raw)?.parse::<Self>()?),
			unknown                     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for BigInt: {unknown}"),
			))),
		}
	}
	
	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT | Type::VARCHAR)
	}
}

//󰭅		FromStr																			
impl FromStr for BigInt {
	type Err = ConversionError;
	
	//		from_str															
	/// Parses decimal text.
	/// 
	/// The digits are consumed in groups of nine, each folded into a native
	/// word first, so the number of big multiplications is a ninth of the
	/// number of digits.
	/// 
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (negative, digits) = s.strip_prefix('-').map_or((false, s), |rest| (true, rest));
		
		if digits.is_empty() {
			return Err(ConversionError::EmptyValue);
		}
		if let Some(invalid) = digits.chars().find(|c| !c.is_ascii_digit()) {
			return Err(ConversionError::InvalidDigit(invalid));
		}
		
		//	The first group takes the odd digits, so the rest are all full
		let (head, tail) = digits.as_bytes().split_at(digits.len() % DECIMAL_GROUP);
		let mut result   = Self::ZERO;
		for group in once(head).filter(|group| !group.is_empty()).chain(tail.chunks(DECIMAL_GROUP)) {
			let (value, scale) = group.iter().fold((0_i32, 1_i32), |(value, scale), &digit| {
				(value * 10 + i32::from(digit - b'0'), scale * 10)
			});
			result = &(&result * &Self::from(scale)) + &Self::from(value);
		}
		
		Ok(if negative { -result } else { result })
	}
}

//󰭅		Mul																				
impl Mul<&BigInt> for &BigInt {
	type Output = BigInt;
	
	//		mul																	
	fn mul(self, rhs: &BigInt) -> Self::Output {
		self.multiply(rhs)
	}
}

//󰭅		Neg																				
impl Neg for &BigInt {
	type Output = BigInt;
	
	//		neg																	
	fn neg(self) -> Self::Output {
		self.negate()
	}
}

//󰭅		Neg																				
impl Neg for BigInt {
	type Output = Self;
	
	//		neg																	
	fn neg(self) -> Self::Output {
		self.negate()
	}
}

//󰭅		Not																				
impl Not for &BigInt {
	type Output = BigInt;
	
	//		not																	
	/// Flips every bit, including the infinite extension, so `!x == -x - 1`.
	fn not(self) -> Self::Output {
		match &self.0 {
			Repr::Compact(value)                => BigInt(Repr::Compact(!value)),
			Repr::Extended { limbs, extension } => BigInt::from_buffer(LimbBuffer::new(
				limbs.iter().map(|limb| !limb).collect(),
				!*extension,
			)),
		}
	}
}

//󰭅		Not																				
impl Not for BigInt {
	type Output = Self;
	
	//		not																	
	fn not(self) -> Self::Output {
		!&self
	}
}

//󰭅		Ord																				
impl Ord for BigInt {
	//		cmp																	
	/// Orders by sign first, then limb by limb from the most significant.
	/// 
	/// Two values of the same sign share the same extension, so comparing
	/// their two's-complement limbs as unsigned words gives the right order
	/// for negative values as well as positive ones.
	/// 
	fn cmp(&self, other: &Self) -> Ordering {
		if let (Repr::Compact(a), Repr::Compact(b)) = (&self.0, &other.0) {
			return a.cmp(b);
		}
		match self.sign().cmp(&other.sign()) {
			Ordering::Equal => {},
			unequal         => return unequal,
		}
		
		let len = self.0.len().max(other.0.len());
		(0..len).rev()
			.map(|index| self.0.limb(index).cmp(&other.0.limb(index)))
			.find(|ordering| ordering.is_ne())
			.unwrap_or(Ordering::Equal)
	}
}

//󰭅		PartialOrd																		
impl PartialOrd for BigInt {
	//		partial_cmp															
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

//󰭅		Product																			
impl Product for BigInt {
	//		product																
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::ONE, |acc, x| &acc * &x)
	}
}

//󰭅		Product<&>																		
impl<'a> Product<&'a BigInt> for BigInt {
	//		product																
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a BigInt>,
	{
		iter.fold(Self::ONE, |acc, x| &acc * x)
	}
}

//󰭅		Rem																				
impl Rem<&BigInt> for &BigInt {
	type Output = BigInt;
	
	//		rem																	
	/// # Panics
	/// 
	/// Panics if `rhs` is zero.
	/// 
	fn rem(self, rhs: &BigInt) -> Self::Output {
		assert!(!rhs.is_zero(), "Attempt to divide by zero");
		self.divide(rhs).remainder
	}
}

//󰭅		Serialize																		
impl Serialize for BigInt {
	//		serialize															
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			//	For JSON and similar formats, serialise as number if it fits in i64
			if let Ok(v) = i64::try_from(self) {
				return serializer.serialize_i64(v);
			}
		}
		//	Fall back to decimal text
		serializer.collect_str(self)
	}
}

//󰭅		Sub																				
impl Sub<&BigInt> for &BigInt {
	type Output = BigInt;
	
	//		sub																	
	fn sub(self, rhs: &BigInt) -> Self::Output {
		self.add_or_subtract(rhs, true)
	}
}

//󰭅		Sum																				
impl Sum for BigInt {
	//		sum																	
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::ZERO, |acc, x| &acc + &x)
	}
}

//󰭅		Sum<&>																			
impl<'a> Sum<&'a BigInt> for BigInt {
	//		sum																	
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a BigInt>,
	{
		iter.fold(Self::ZERO, |acc, x| &acc + x)
	}
}

//󰭅		ToSql																			
impl ToSql for BigInt {
	//		to_sql																
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2 => i16::try_from(self)?.to_sql(ty, out),
			&Type::INT4 => i32::try_from(self)?.to_sql(ty, out),
			&Type::INT8 => i64::try_from(self)?.to_sql(ty, out),
			_           => self.to_string().to_sql(ty, out),
		}
	}
	
	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT | Type::VARCHAR)
	}
	
	to_sql_checked!();
}



//		Visitors																										

//		BigIntVisitor																	
/// A visitor for parsing integers from numbers and strings.
struct BigIntVisitor;

//󰭅		Visitor																			
impl Visitor<'_> for BigIntVisitor {
	type Value = BigInt;
	
	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "an integer or a string of decimal digits")
	}
	
	//		visit_i64															
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(BigInt::from(v))
	}
	
	//		visit_i128															
	fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(BigInt::from(v))
	}
	
	//		visit_u64															
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(BigInt::from(v))
	}
	
	//		visit_u128															
	fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(BigInt::from(v))
	}
	
	//		visit_str															
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}
}
