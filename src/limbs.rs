//! Limb-level storage and helpers behind [`BigInt`](crate::BigInt).
//!
//! A value is held either as a single signed word, or as a sequence of 32-bit
//! limbs (least-significant first) that is conceptually followed by an
//! infinite run of its extension word. [`LimbBuffer::normalize()`] is the only
//! way to produce the extended form, so every value has exactly one encoding.

//	The limb loops below index within lengths they have just computed, and the
//	arithmetic is the whole purpose of the module.
#![allow(
	clippy::arithmetic_side_effects,
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Limb arithmetic within computed bounds"
)]



//		Modules																											

#[cfg(test)]
#[path = "tests/limbs.rs"]
mod tests;



//		Packages																										

use crate::errors::ArithmeticError;
use core::{cmp::Ordering, ops::Not};



//		Constants																										

/// Number of bits in a limb.
pub(crate) const LIMB_BITS: u64 = 32;



//		Enums																											

//		Extension																		
/// The value of every bit beyond the stored limbs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Extension {
	/// An infinite run of zero bits, i.e. the value is non-negative.
	Positive,
	
	/// An infinite run of one bits, i.e. the value is negative.
	Negative,
}

//󰭅		Extension																		
impl Extension {
	//		extend																
	/// The signed value of a top limb once this extension is placed above it.
	pub(crate) fn extend(self, limb: u32) -> i64 {
		match self {
			Self::Positive => i64::from(limb),
			Self::Negative => i64::from(limb) - (1_i64 << LIMB_BITS),
		}
	}
	
	//		from_word															
	/// Interprets a raw extension word.
	/// 
	/// # Errors
	/// 
	/// Returns [`ArithmeticError::InvalidExtension`] unless the word is all
	/// zeroes or all ones.
	/// 
	pub(crate) const fn from_word(word: u32) -> Result<Self, ArithmeticError> {
		match word {
			0        => Ok(Self::Positive),
			u32::MAX => Ok(Self::Negative),
			other    => Err(ArithmeticError::InvalidExtension(other)),
		}
	}
	
	//		of_limb																
	/// The extension given by the sign bit of a limb.
	pub(crate) const fn of_limb(limb: u32) -> Self {
		if limb >> 31_u32 == 0 {
			Self::Positive
		} else {
			Self::Negative
		}
	}
	
	//		is_negative															
	/// Whether the extension is the run of one bits.
	pub(crate) const fn is_negative(self) -> bool {
		matches!(self, Self::Negative)
	}
	
	//		word																
	/// The word repeated beyond the stored limbs.
	pub(crate) const fn word(self) -> u32 {
		match self {
			Self::Positive => 0,
			Self::Negative => u32::MAX,
		}
	}
}

//󰭅		Not																				
impl Not for Extension {
	type Output = Self;
	
	//		not																	
	fn not(self) -> Self::Output {
		match self {
			Self::Positive => Self::Negative,
			Self::Negative => Self::Positive,
		}
	}
}

//		Repr																			
/// The storage behind a value.
/// 
/// Both variants are canonical: a value that fits an [`i32`] is always
/// [`Compact`](Repr::Compact), and the top limb of an
/// [`Extended`](Repr::Extended) value never equals its extension word. This
/// is what allows the derived [`Eq`] and [`Hash`] to be used directly.
/// 
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Repr {
	/// A value in the range of [`i32`], stored without any allocation.
	Compact(i32),
	
	/// A value outside the range of [`i32`].
	Extended {
		/// The stored limbs, least-significant first.
		limbs:     Vec<u32>,
		
		/// The value of every bit above the stored limbs.
		extension: Extension,
	},
}

//󰭅		Repr																			
impl Repr {
	//		bit																	
	/// Returns the bit at `index`, using the extension beyond the stored
	/// limbs.
	pub(crate) fn bit(&self, index: u64) -> bool {
		let limb = usize::try_from(index / LIMB_BITS)
			.map_or_else(|_| self.extension().word(), |position| self.limb(position))
		;
		(limb >> (index % LIMB_BITS)) & 1 == 1
	}
	
	//		extension															
	/// The value of every bit above the stored limbs.
	pub(crate) const fn extension(&self) -> Extension {
		match self {
			Self::Compact(value)           => Extension::of_limb(to_limb(*value)),
			Self::Extended { extension, .. } => *extension,
		}
	}
	
	//		len																	
	/// Number of stored limbs. A compact value counts as a single limb.
	pub(crate) fn len(&self) -> usize {
		match self {
			Self::Compact(_)             => 1,
			Self::Extended { limbs, .. } => limbs.len(),
		}
	}
	
	//		limb																
	/// Returns the limb at `index`.
	/// 
	/// Every index is valid. Past the stored limbs, the extension word is
	/// returned, which is what gives a finite sequence its infinite two's
	/// complement meaning. All bit-level work goes through here rather than
	/// reading the limbs directly.
	/// 
	pub(crate) fn limb(&self, index: usize) -> u32 {
		match self {
			Self::Compact(value) if index == 0  => to_limb(*value),
			Self::Compact(value)                => Extension::of_limb(to_limb(*value)).word(),
			Self::Extended { limbs, extension } => limbs.get(index).copied().unwrap_or(extension.word()),
		}
	}
}



//		Structs																											

//		LimbBuffer																		
/// A limb sequence under construction.
/// 
/// Arithmetic builds its result into a buffer it owns outright, free to
/// mutate it and to leave it over-sized, and only then turns it into a
/// published value by calling [`normalize()`](LimbBuffer::normalize()).
/// 
#[derive(Debug)]
pub(crate) struct LimbBuffer {
	/// The candidate limbs, least-significant first.
	limbs:     Vec<u32>,
	
	/// The value of every bit above the candidate limbs.
	extension: Extension,
}

//󰭅		LimbBuffer																		
impl LimbBuffer {
	//		Constructors														
	
	//		new																	
	pub(crate) const fn new(limbs: Vec<u32>, extension: Extension) -> Self {
		Self { limbs, extension }
	}
	
	//		Public methods														
	
	//		normalize															
	/// Reduces the buffer to the unique canonical representation.
	/// 
	/// Every top limb equal to the extension word is trimmed, as the
	/// extension already supplies those bits. What remains is collapsed into
	/// the compact form if it is at most one limb whose sign bit agrees with
	/// the extension.
	/// 
	pub(crate) fn normalize(self) -> Repr {
		let Self { mut limbs, extension } = self;
		let word = extension.word();
		
		while limbs.last().is_some_and(|&top| top == word) {
			_ = limbs.pop();
		}
		
		let compact = match *limbs.as_slice() {
			[]                                              => Some(to_word(word)),
			[only] if Extension::of_limb(only) == extension => Some(to_word(only)),
			_                                               => None,
		};
		
		compact.map_or_else(
			|| {
				limbs.shrink_to_fit();
				Repr::Extended { limbs, extension }
			},
			Repr::Compact,
		)
	}
}



//		Functions																										

//		bit_length																
/// Number of significant bits in an unsigned magnitude.
pub(crate) fn bit_length(magnitude: &[u32]) -> u64 {
	magnitude.iter().rposition(|&limb| limb != 0).map_or(0, |top| {
		(top as u64 + 1) * LIMB_BITS - u64::from(magnitude[top].leading_zeros())
	})
}

//		compare_shifted															
/// Compares `remainder` against `divisor << shift`, from the most-significant
/// limb down.
/// 
/// Both operands are unsigned magnitudes. The shifted divisor is never
/// materialised; each of its limbs is assembled when it is needed.
/// 
pub(crate) fn compare_shifted(remainder: &[u32], divisor: &[u32], shift: u64) -> Ordering {
	let top = remainder.len().max(divisor.len() + whole_limbs(shift) + 1);
	
	(0..top).rev()
		.map(|index| {
			let limb = remainder.get(index).copied().unwrap_or(0);
			limb.cmp(&shifted_limb(divisor, shift, index))
		})
		.find(|ordering| ordering.is_ne())
		.unwrap_or(Ordering::Equal)
}

//		shifted_limb															
/// Returns limb `index` of `divisor << shift`.
pub(crate) fn shifted_limb(divisor: &[u32], shift: u64, index: usize) -> u32 {
	let words  = whole_limbs(shift);
	let bits   = spare_bits(shift);
	let source = |position: usize| {
		position.checked_sub(words).and_then(|source| divisor.get(source)).copied().unwrap_or(0)
	};
	
	if bits == 0 {
		return source(index);
	}
	let carried = index.checked_sub(1).map_or(0, |below| source(below) >> (32 - bits));
	(source(index) << bits) | carried
}

//		subtract_shifted														
/// Subtracts `divisor << shift` from `remainder` in place.
/// 
/// The caller must already know that the remainder is at least as large as
/// the shifted divisor, so no borrow leaves the top limb.
/// 
pub(crate) fn subtract_shifted(remainder: &mut [u32], divisor: &[u32], shift: u64) {
	let words      = whole_limbs(shift);
	let last       = divisor.len() + words;
	let mut borrow = false;
	
	for (index, limb) in remainder.iter_mut().enumerate().skip(words) {
		if index > last && !borrow {
			break;
		}
		let (diff1, b1) = limb.overflowing_sub(shifted_limb(divisor, shift, index));
		let (diff2, b2) = diff1.overflowing_sub(u32::from(borrow));
		*limb           = diff2;
		borrow          = b1 || b2;
	}
}

//		low_limb																
/// The low limb of a double-width word, as left by a carry or product.
#[expect(clippy::cast_possible_truncation, reason = "Keeps the low 32 bits, the caller carries the rest")]
pub(crate) const fn low_limb(value: u64) -> u32 {
	value as u32
}

//		spare_bits																
/// The bits of a shift amount left over after whole limbs.
#[expect(clippy::cast_possible_truncation, reason = "A remainder of division by 32 is below 32")]
pub(crate) const fn spare_bits(shift: u64) -> u32 {
	(shift % LIMB_BITS) as u32
}

//		to_limb																	
/// Reinterprets a signed word as a limb with the same bits.
#[expect(clippy::cast_sign_loss, reason = "Two's-complement reinterpretation of the same 32 bits")]
pub(crate) const fn to_limb(word: i32) -> u32 {
	word as u32
}

//		to_word																	
/// Reinterprets a limb as a signed word with the same bits.
#[expect(clippy::cast_possible_wrap, reason = "Two's-complement reinterpretation of the same 32 bits")]
pub(crate) const fn to_word(limb: u32) -> i32 {
	limb as i32
}

//		whole_limbs																
/// The number of whole limbs in a shift amount.
/// 
/// Only used for shifts bounded by the bit length of a magnitude held in
/// memory, whose limb count always fits a [`usize`].
/// 
#[expect(clippy::cast_possible_truncation, reason = "Bounded by the length of a stored limb vector")]
pub(crate) const fn whole_limbs(shift: u64) -> usize {
	(shift / LIMB_BITS) as usize
}
