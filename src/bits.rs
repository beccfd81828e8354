//! Bit-level helpers over big-endian limb scratch arrays.
//!
//! The decimal formatter and the divider run their inner loops over
//! fixed-length scratch arrays with the high limb first. Bit positions count
//! from the least-significant bit of the last limb.

/// Returns the number of significant bits in `limb`, 0 for 0.
pub(crate) fn bit_len(limb: u32) -> usize {
    (u32::BITS - limb.leading_zeros()) as usize
}

/// Returns bit `pos` of the big-endian array.
pub(crate) fn get_bit(arr: &[u32], pos: usize) -> bool {
    arr[arr.len() - 1 - pos / 32] & (1 << (pos % 32)) != 0
}

/// Sets bit `pos` of the big-endian array.
pub(crate) fn set_bit(arr: &mut [u32], pos: usize) {
    let index = arr.len() - 1 - pos / 32;
    arr[index] |= 1 << (pos % 32);
}

/// Shifts the array left by one bit, discarding the carry out of the high
/// limb.
pub(crate) fn shift_left_one(arr: &mut [u32]) {
    let mut carry = 0;
    for limb in arr.iter_mut().rev() {
        let next = *limb >> 31;
        *limb = (*limb << 1) | carry;
        carry = next;
    }
}

/// Lexicographic `lhs >= rhs` on equal-length big-endian arrays.
pub(crate) fn ge(lhs: &[u32], rhs: &[u32]) -> bool {
    debug_assert_eq!(lhs.len(), rhs.len());
    for (&l, &r) in lhs.iter().zip(rhs) {
        if l != r {
            return l > r;
        }
    }
    true
}

/// Subtracts `rhs` from `lhs` in place as `lhs + !rhs + 1`, dropping the
/// carry out of the high limb. Requires `lhs >= rhs`.
pub(crate) fn sub_assign(lhs: &mut [u32], rhs: &[u32]) {
    debug_assert_eq!(lhs.len(), rhs.len());
    let mut carry = 1;
    for (l, &r) in lhs.iter_mut().zip(rhs).rev() {
        let t = u64::from(*l) + u64::from(!r) + carry;
        *l = t as u32;
        carry = t >> 32;
    }
}

/// Returns the number of limbs from the first non-zero limb to the end, or 0
/// when the array is all zeros.
pub(crate) fn significant_len(arr: &[u32]) -> usize {
    match arr.iter().position(|&limb| limb != 0) {
        Some(first) => arr.len() - first,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use crate::bits;

    #[test]
    fn bit_len_counts_significant_bits() {
        assert_eq!(bits::bit_len(0), 0);
        assert_eq!(bits::bit_len(1), 1);
        assert_eq!(bits::bit_len(0b101), 3);
        assert_eq!(bits::bit_len(u32::MAX), 32);
    }

    #[test]
    fn bit_positions_count_from_the_low_end() {
        let mut arr = [0, 0];
        bits::set_bit(&mut arr, 0);
        bits::set_bit(&mut arr, 33);
        assert_eq!(arr, [2, 1]);
        assert!(bits::get_bit(&arr, 0));
        assert!(!bits::get_bit(&arr, 32));
        assert!(bits::get_bit(&arr, 33));
    }

    #[test]
    fn shift_carries_across_limbs() {
        let mut arr = [0, 0x8000_0001];
        bits::shift_left_one(&mut arr);
        assert_eq!(arr, [1, 2]);
    }

    #[test]
    fn sub_assign_borrows() {
        let mut arr = [1, 0];
        bits::sub_assign(&mut arr, &[0, 1]);
        assert_eq!(arr, [0, u32::MAX]);
    }

    #[test]
    fn ge_is_lexicographic() {
        assert!(bits::ge(&[1, 0], &[0, u32::MAX]));
        assert!(bits::ge(&[1, 2], &[1, 2]));
        assert!(!bits::ge(&[0, u32::MAX], &[1, 0]));
    }

    #[test]
    fn significant_len_skips_leading_zeros() {
        assert_eq!(bits::significant_len(&[0, 0, 1, 0]), 2);
        assert_eq!(bits::significant_len(&[0, 0]), 0);
        assert_eq!(bits::significant_len(&[9]), 1);
    }
}
