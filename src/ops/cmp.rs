//! Magnitude and signed comparison.

use std::cmp::Ordering;

use crate::{
    limbs::Limbs,
    value::{BigInt, Sign},
};

/// Compares magnitudes: a longer limb sequence is larger, and equal lengths
/// compare limb by limb from the high end.
pub(crate) fn cmp_abs(lhs: &Limbs, rhs: &Limbs) -> Ordering {
    if lhs.len() != rhs.len() {
        return lhs.len().cmp(&rhs.len());
    }
    for (&l, &r) in lhs.as_slice().iter().zip(rhs.as_slice()).rev() {
        if l != r {
            return l.cmp(&r);
        }
    }
    Ordering::Equal
}

impl BigInt {
    /// Compares magnitudes, ignoring signs.
    pub fn cmp_abs(&self, other: &BigInt) -> Ordering {
        cmp_abs(&self.magnitude, &other.magnitude)
    }

    /// Compares as integers, returning −1, 0, or +1.
    pub fn compare(&self, other: &BigInt) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &BigInt) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Pos, Sign::Pos) => self.cmp_abs(other),
            (Sign::Pos, Sign::Neg) => Ordering::Greater,
            (Sign::Neg, Sign::Pos) => Ordering::Less,
            (Sign::Neg, Sign::Neg) => other.cmp_abs(self),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
