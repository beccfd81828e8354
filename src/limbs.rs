//! The limb store backing a magnitude.

use std::iter;

/// The magnitude of an integer: a non-empty sequence of 32-bit limbs stored
/// least significant first.
///
/// The high limb may only be zero when one limb remains, except transiently
/// inside operations that restore the invariant before returning.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Limbs {
    limbs: Vec<u32>,
}

impl Limbs {
    /// Constructs a magnitude of `count` zeroed limbs.
    pub(crate) fn with_zeros(count: usize) -> Self {
        debug_assert!(count >= 1);
        Limbs {
            limbs: vec![0; count],
        }
    }

    /// Constructs a magnitude from limbs in least-significant-first order.
    pub(crate) fn from_raw(limbs: Vec<u32>) -> Self {
        debug_assert!(!limbs.is_empty());
        Limbs { limbs }
    }

    /// Returns the number of limbs.
    pub(crate) fn len(&self) -> usize {
        self.limbs.len()
    }

    /// Returns limb `index`, or 0 past the high end.
    pub(crate) fn get(&self, index: usize) -> u32 {
        self.limbs.get(index).copied().unwrap_or(0)
    }

    /// Returns the limbs, least significant first.
    pub(crate) fn as_slice(&self) -> &[u32] {
        &self.limbs
    }

    /// Returns the limbs mutably, least significant first.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [u32] {
        &mut self.limbs
    }

    /// Returns whether every limb is zero.
    pub(crate) fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&limb| limb == 0)
    }

    /// Extends the high end with `count` zero limbs.
    pub(crate) fn append_high_zeros(&mut self, count: usize) {
        self.limbs.extend(iter::repeat(0).take(count));
    }

    /// Shifts the value left by `32 * count` bits by inserting zero limbs at
    /// the low end.
    pub(crate) fn prepend_low_zeros(&mut self, count: usize) {
        self.limbs.splice(0..0, iter::repeat(0).take(count));
    }

    /// Drops high zero limbs until the high limb is non-zero or one limb
    /// remains.
    pub(crate) fn trim(&mut self) {
        while self.limbs.len() > 1 && matches!(self.limbs.last(), Some(0)) {
            self.limbs.pop();
        }
    }

    /// Removes the high limb. A single remaining limb is kept.
    pub(crate) fn pop_high(&mut self) {
        if self.limbs.len() > 1 {
            self.limbs.pop();
        }
    }

    /// Shifts the value left by one bit, growing by a limb when the top bit
    /// is set.
    pub(crate) fn shift_left_one(&mut self) {
        if self.limbs.last().is_some_and(|&limb| limb >> 31 != 0) {
            self.limbs.push(0);
        }
        let mut carry = 0;
        for limb in &mut self.limbs {
            let next = *limb >> 31;
            *limb = (*limb << 1) | carry;
            carry = next;
        }
    }

    /// Shifts the value right by one bit, dropping the high limb when it
    /// becomes zero and more than one limb remains.
    pub(crate) fn shift_right_one(&mut self) {
        let mut carry = 0;
        for limb in self.limbs.iter_mut().rev() {
            let next = *limb << 31;
            *limb = (*limb >> 1) | carry;
            carry = next;
        }
        if self.limbs.len() > 1 && matches!(self.limbs.last(), Some(0)) {
            self.limbs.pop();
        }
    }

    /// Replaces every limb with its ones' complement. The length does not
    /// change.
    pub(crate) fn not_assign(&mut self) {
        for limb in &mut self.limbs {
            *limb = !*limb;
        }
    }
}
