//! Contains error types used throughout the library.



//		Packages																										

use thiserror::Error as ThisError;



//		Enums																											

//		ArithmeticError																	
/// Represents all possible errors that can occur during arithmetic.
/// 
/// Every operation that can fail checks its arguments before doing any work,
/// so an error is never accompanied by a partial result.
/// 
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ArithmeticError {
	/// The divisor, or the modulus of a modular exponentiation, is zero.
	#[error("Attempt to divide by zero")]
	DivisionByZero,
	
	/// A bit index was negative. Positive indices of any size are valid, as
	/// the bits beyond the stored limbs are given by sign extension.
	#[error("Bit index is negative: {0}")]
	NegativeBitIndex(i64),
	
	/// The exponent of a power is negative.
	#[error("Exponent is negative")]
	NegativeExponent,
	
	/// The modulus of a modular exponentiation is negative.
	#[error("Modulus is negative")]
	NegativeModulus,
	
	/// The value to take the square root of is negative.
	#[error("Square root of a negative value")]
	NegativeRadicand,
	
	/// The sign-extension word given to a raw constructor was neither all
	/// zeroes nor all ones.
	#[error("Invalid extension word: {0:#010x}")]
	InvalidExtension(u32),
}

//		ConversionError																	
/// Represents all possible conversion errors that can occur.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The incoming value is empty, e.g. an empty string, or a sign with no
	/// digits after it.
	#[error("Empty value")]
	EmptyValue,
	
	/// The incoming value contains a character that is not a decimal digit.
	#[error("Invalid digit: {0}")]
	InvalidDigit(char),
	
	/// The value is negative, which is not allowed by the destination type.
	#[error("Value is negative")]
	ValueIsNegative,
	
	/// The value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,
}
