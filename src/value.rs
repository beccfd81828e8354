//! The signed arbitrary-precision integer value type.

use std::{
    mem,
    ops::{Neg, Shl, ShlAssign, Shr, ShrAssign},
};

use crate::limbs::Limbs;

/// A signed integer of unbounded magnitude.
///
/// The value is a sign and a non-empty sequence of 32-bit limbs stored least
/// significant first. At every public boundary the high limb is non-zero
/// unless one limb remains, and zero is non-negative.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    /// The unsigned magnitude.
    pub(crate) magnitude: Limbs,
    /// The sign; always `Pos` when the magnitude is zero.
    pub(crate) sign: Sign,
}

/// The sign of an integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Zero or positive.
    #[default]
    Pos,
    /// Negative.
    Neg,
}

/// The base (radix) of a numeral.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Base {
    /// Base 2, printed with a `0b` prefix.
    Binary = 2,
    /// Base 10.
    #[default]
    Decimal = 10,
    /// Base 16, printed with a `0x` prefix.
    Hexadecimal = 16,
}

impl Sign {
    /// Returns the opposite sign.
    pub fn flip(self) -> Sign {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }
}

impl BigInt {
    /// Constructs zero.
    pub fn zero() -> BigInt {
        BigInt {
            magnitude: Limbs::with_zeros(1),
            sign: Sign::Pos,
        }
    }

    /// Constructs one.
    pub fn one() -> BigInt {
        BigInt {
            magnitude: Limbs::from_raw(vec![1]),
            sign: Sign::Pos,
        }
    }

    /// Constructs a canonical value from a magnitude and a sign.
    pub(crate) fn from_parts(magnitude: Limbs, sign: Sign) -> BigInt {
        let mut value = BigInt { magnitude, sign };
        value.canonicalize();
        value
    }

    /// Restores the boundary invariants: no high zero limbs and no negative
    /// zero.
    pub(crate) fn canonicalize(&mut self) {
        self.magnitude.trim();
        if self.magnitude.is_zero() {
            self.sign = Sign::Pos;
        }
    }

    /// Returns whether the value is zero.
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Returns the sign. Zero is `Pos`.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns whether the value is negative.
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Neg
    }

    /// Returns the storage footprint in bytes: the header plus the limbs.
    pub fn size(&self) -> usize {
        mem::size_of::<BigInt>() + self.magnitude.len() * mem::size_of::<u32>()
    }

    /// Flips the sign. Zero is left untouched.
    pub fn negate(&mut self) {
        if !self.is_zero() {
            self.sign = self.sign.flip();
        }
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> BigInt {
        BigInt {
            magnitude: self.magnitude.clone(),
            sign: Sign::Pos,
        }
    }

    /// Replaces every limb of the magnitude with its ones' complement.
    ///
    /// This is a limb-wise operation on the stored representation: the limb
    /// count does not change, so the result can carry a high zero limb until
    /// a canonicalizing operation touches it again. The sign is kept unless
    /// the magnitude becomes zero.
    pub fn bitwise_not(&mut self) {
        self.magnitude.not_assign();
        if self.magnitude.is_zero() {
            self.sign = Sign::Pos;
        }
    }

    /// Shifts the magnitude left by `bits` bits.
    pub fn shift_left(&mut self, bits: usize) {
        if bits == 0 {
            return;
        }
        self.magnitude.prepend_low_zeros(bits / 32);
        for _ in 0..bits % 32 {
            self.magnitude.shift_left_one();
        }
        // Shifting zero must not leave redundant limbs behind.
        self.magnitude.trim();
    }

    /// Shifts the magnitude right by `bits` bits, discarding the shifted-out
    /// bits.
    pub fn shift_right(&mut self, bits: usize) {
        for _ in 0..bits {
            self.magnitude.shift_right_one();
        }
        if self.magnitude.is_zero() {
            self.sign = Sign::Pos;
        }
    }
}

impl Default for BigInt {
    fn default() -> BigInt {
        BigInt::zero()
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        self.negate();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        let mut value = self.clone();
        value.negate();
        value
    }
}

impl Shl<usize> for &BigInt {
    type Output = BigInt;

    fn shl(self, bits: usize) -> BigInt {
        let mut value = self.clone();
        value.shift_left(bits);
        value
    }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;

    fn shl(mut self, bits: usize) -> BigInt {
        self.shift_left(bits);
        self
    }
}

impl ShlAssign<usize> for BigInt {
    fn shl_assign(&mut self, bits: usize) {
        self.shift_left(bits);
    }
}

impl Shr<usize> for &BigInt {
    type Output = BigInt;

    fn shr(self, bits: usize) -> BigInt {
        let mut value = self.clone();
        value.shift_right(bits);
        value
    }
}

impl Shr<usize> for BigInt {
    type Output = BigInt;

    fn shr(mut self, bits: usize) -> BigInt {
        self.shift_right(bits);
        self
    }
}

impl ShrAssign<usize> for BigInt {
    fn shr_assign(&mut self, bits: usize) {
        self.shift_right(bits);
    }
}
