//! Binary long division producing quotient and remainder.

use std::cmp::Ordering;

use crate::{
    bits,
    error::Error,
    limbs::Limbs,
    value::{BigInt, Sign},
};

impl BigInt {
    /// Divides, returning the quotient and remainder of truncated division:
    /// the quotient rounds toward zero and the remainder carries the
    /// dividend's sign with a magnitude below the divisor's.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), Error> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero.record());
        }
        match self.cmp_abs(divisor) {
            Ordering::Less => return Ok((BigInt::zero(), self.clone())),
            Ordering::Equal => {
                let sign = if self.sign == divisor.sign {
                    Sign::Pos
                } else {
                    Sign::Neg
                };
                let one = BigInt::from_parts(Limbs::from_raw(vec![1]), sign);
                return Ok((one, BigInt::zero()));
            }
            Ordering::Greater => {}
        }

        // Big-endian scratch arrays sized to the dividend: the divisor is
        // left-padded with zero limbs, the remainder and quotient start at
        // zero.
        let count = self.magnitude.len();
        let dividend = unpack(&self.magnitude, count);
        let divisor_arr = unpack(&divisor.magnitude, count);
        let mut remainder = vec![0; count];
        let mut quotient = vec![0; count];

        let top = (count - 1) * 32 + bits::bit_len(dividend[0]);
        for i in (0..top).rev() {
            bits::shift_left_one(&mut remainder);
            if bits::get_bit(&dividend, i) {
                remainder[count - 1] |= 1;
            }
            if bits::ge(&remainder, &divisor_arr) {
                bits::sub_assign(&mut remainder, &divisor_arr);
                bits::set_bit(&mut quotient, i);
            }
        }

        let quotient_sign = if self.sign == divisor.sign {
            Sign::Pos
        } else {
            Sign::Neg
        };
        let quotient = BigInt::from_parts(pack(&quotient), quotient_sign);
        let remainder = BigInt::from_parts(pack(&remainder), self.sign);
        Ok((quotient, remainder))
    }
}

/// Spreads a magnitude into a big-endian scratch array of `count` limbs,
/// left-padded with zeros.
fn unpack(limbs: &Limbs, count: usize) -> Vec<u32> {
    let mut arr = vec![0; count];
    let pad = count - limbs.len();
    for (dst, &src) in arr[pad..].iter_mut().zip(limbs.as_slice().iter().rev()) {
        *dst = src;
    }
    arr
}

/// Packs a big-endian scratch array back into a magnitude.
fn pack(arr: &[u32]) -> Limbs {
    Limbs::from_raw(arr.iter().rev().copied().collect())
}
