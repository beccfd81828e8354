//! Fixed-width binary conversion between values and host integers.

use crate::{
    error::Error,
    limbs::Limbs,
    value::{BigInt, Sign},
};

impl BigInt {
    /// Constructs a value from a buffer of native-endian 32-bit words, the
    /// word at the lowest address being the least-significant limb, so the
    /// buffer spells the magnitude low limb first in increasing address
    /// order. High zero limbs are dropped. The result is non-negative.
    ///
    /// The buffer must be non-empty with a length divisible by four.
    pub fn from_ne_bytes(bytes: &[u8]) -> Result<BigInt, Error> {
        if bytes.is_empty() {
            return Err(Error::IncorrectFunctionArgument.record());
        }
        if bytes.len() % 4 != 0 {
            return Err(Error::LengthIndivisibleByFour.record());
        }
        let mut limbs = Vec::with_capacity(bytes.len() / 4);
        for chunk in bytes.chunks_exact(4) {
            limbs.push(u32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        }
        Ok(BigInt::from_parts(Limbs::from_raw(limbs), Sign::Pos))
    }

    /// Writes the magnitude into a byte buffer in the same low-word-first
    /// native-endian order, zeroing the rest. The sign is not written.
    ///
    /// The buffer must be non-empty with a length divisible by four, and
    /// large enough for every limb of the magnitude.
    pub fn write_ne_bytes(&self, dst: &mut [u8]) -> Result<(), Error> {
        if dst.is_empty() {
            return Err(Error::IncorrectFunctionArgument.record());
        }
        if dst.len() % 4 != 0 {
            return Err(Error::LengthIndivisibleByFour.record());
        }
        if self.magnitude.len() > dst.len() / 4 {
            return Err(Error::TooLargeToConvert.record());
        }
        dst.fill(0);
        for (chunk, &limb) in dst.chunks_exact_mut(4).zip(self.magnitude.as_slice()) {
            chunk.copy_from_slice(&limb.to_ne_bytes());
        }
        Ok(())
    }
}

impl From<u32> for BigInt {
    fn from(value: u32) -> BigInt {
        BigInt::from_parts(Limbs::from_raw(vec![value]), Sign::Pos)
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> BigInt {
        let limbs = vec![value as u32, (value >> 32) as u32];
        BigInt::from_parts(Limbs::from_raw(limbs), Sign::Pos)
    }
}

impl From<u128> for BigInt {
    fn from(value: u128) -> BigInt {
        let limbs = (0..4).map(|i| (value >> (32 * i)) as u32).collect();
        BigInt::from_parts(Limbs::from_raw(limbs), Sign::Pos)
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> BigInt {
        let sign = if value < 0 { Sign::Neg } else { Sign::Pos };
        BigInt::from_parts(Limbs::from_raw(vec![value.unsigned_abs()]), sign)
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> BigInt {
        let magnitude = value.unsigned_abs();
        let sign = if value < 0 { Sign::Neg } else { Sign::Pos };
        let limbs = vec![magnitude as u32, (magnitude >> 32) as u32];
        BigInt::from_parts(Limbs::from_raw(limbs), sign)
    }
}

impl TryFrom<&BigInt> for u64 {
    type Error = Error;

    /// Converts the magnitude; the sign is discarded.
    fn try_from(value: &BigInt) -> Result<u64, Error> {
        let limbs = value.magnitude.as_slice();
        if limbs.len() > 2 {
            return Err(Error::TooLargeToConvert.record());
        }
        Ok(limbs
            .iter()
            .rev()
            .fold(0, |acc, &limb| (acc << 32) | u64::from(limb)))
    }
}

impl TryFrom<&BigInt> for u128 {
    type Error = Error;

    /// Converts the magnitude; the sign is discarded.
    fn try_from(value: &BigInt) -> Result<u128, Error> {
        let limbs = value.magnitude.as_slice();
        if limbs.len() > 4 {
            return Err(Error::TooLargeToConvert.record());
        }
        Ok(limbs
            .iter()
            .rev()
            .fold(0, |acc, &limb| (acc << 32) | u128::from(limb)))
    }
}
