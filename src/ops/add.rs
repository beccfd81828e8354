//! Signed addition and subtraction.

use std::{
    cmp::Ordering,
    iter::Sum,
    ops::{Add, AddAssign, Sub, SubAssign},
};

use crate::{
    limbs::Limbs,
    ops::cmp::cmp_abs,
    value::{BigInt, Sign},
};

/// Adds two magnitudes limb by limb with a 64-bit carry accumulator.
pub(crate) fn add_abs(x: &Limbs, y: &Limbs) -> Limbs {
    let (longer, shorter) = if x.len() > y.len() { (x, y) } else { (y, x) };
    let mut sum = Limbs::with_zeros(longer.len() + 1);
    let mut carry = 0;
    for i in 0..=longer.len() {
        let t = u64::from(longer.get(i)) + u64::from(shorter.get(i)) + carry;
        sum.as_mut_slice()[i] = t as u32;
        carry = t >> 32;
    }
    sum.trim();
    sum
}

/// Subtracts `s` from `m` as `m + !s + 1` with `s` zero-extended to `m`'s
/// width; the `+ 1` and the dropped carry limb come from the increment
/// below. Requires `|m| >= |s|`.
pub(crate) fn sub_abs(m: &Limbs, s: &Limbs) -> Limbs {
    let mut adjusted = s.clone();
    adjusted.append_high_zeros(m.len() - s.len());
    adjusted.not_assign();
    let mut diff = add_abs(m, &adjusted);
    inc_abs(&mut diff);
    diff.pop_high();
    diff.trim();
    diff
}

/// Increments a magnitude in place, growing by a limb on carry out.
pub(crate) fn inc_abs(limbs: &mut Limbs) {
    limbs.append_high_zeros(1);
    for limb in limbs.as_mut_slice() {
        let (incremented, overflow) = limb.overflowing_add(1);
        *limb = incremented;
        if !overflow {
            break;
        }
    }
    limbs.trim();
}

/// Decrements a non-zero magnitude in place by adding an equal-length
/// all-ones operand and dropping the carry limb.
pub(crate) fn dec_abs(limbs: &mut Limbs) {
    debug_assert!(!limbs.is_zero());
    let mut ones = Limbs::with_zeros(limbs.len());
    ones.not_assign();
    let mut diff = add_abs(limbs, &ones);
    diff.pop_high();
    diff.trim();
    *limbs = diff;
}

/// Adds with sign resolution: equal signs add magnitudes; mixed signs
/// subtract the smaller magnitude from the larger, which donates its sign.
fn add_signed(x: &BigInt, y: &BigInt) -> BigInt {
    match (x.sign, y.sign) {
        (Sign::Pos, Sign::Pos) | (Sign::Neg, Sign::Neg) => {
            BigInt::from_parts(add_abs(&x.magnitude, &y.magnitude), x.sign)
        }
        _ => match cmp_abs(&x.magnitude, &y.magnitude) {
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => BigInt::from_parts(sub_abs(&x.magnitude, &y.magnitude), x.sign),
            Ordering::Less => BigInt::from_parts(sub_abs(&y.magnitude, &x.magnitude), y.sign),
        },
    }
}

/// Subtracts with sign resolution.
fn sub_signed(m: &BigInt, s: &BigInt) -> BigInt {
    match (m.sign, s.sign) {
        (Sign::Pos, Sign::Neg) => BigInt::from_parts(add_abs(&m.magnitude, &s.magnitude), Sign::Pos),
        (Sign::Neg, Sign::Pos) => BigInt::from_parts(add_abs(&m.magnitude, &s.magnitude), Sign::Neg),
        (Sign::Pos, Sign::Pos) => match cmp_abs(&m.magnitude, &s.magnitude) {
            Ordering::Less => BigInt::from_parts(sub_abs(&s.magnitude, &m.magnitude), Sign::Neg),
            _ => BigInt::from_parts(sub_abs(&m.magnitude, &s.magnitude), Sign::Pos),
        },
        (Sign::Neg, Sign::Neg) => match cmp_abs(&m.magnitude, &s.magnitude) {
            Ordering::Greater => {
                BigInt::from_parts(sub_abs(&m.magnitude, &s.magnitude), Sign::Neg)
            }
            _ => BigInt::from_parts(sub_abs(&s.magnitude, &m.magnitude), Sign::Pos),
        },
    }
}

impl BigInt {
    /// Adds one.
    pub fn increment(&mut self) {
        match self.sign {
            Sign::Pos => inc_abs(&mut self.magnitude),
            Sign::Neg => {
                dec_abs(&mut self.magnitude);
                self.canonicalize();
            }
        }
    }

    /// Subtracts one.
    pub fn decrement(&mut self) {
        if self.is_zero() {
            inc_abs(&mut self.magnitude);
            self.sign = Sign::Neg;
            return;
        }
        match self.sign {
            Sign::Pos => dec_abs(&mut self.magnitude),
            Sign::Neg => inc_abs(&mut self.magnitude),
        }
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        add_signed(self, rhs)
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: BigInt) -> BigInt {
        add_signed(&self, &rhs)
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = add_signed(self, rhs);
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        sub_signed(self, rhs)
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: BigInt) -> BigInt {
        sub_signed(&self, &rhs)
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        *self = sub_signed(self, rhs);
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |acc, value| add_signed(&acc, &value))
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |acc, value| add_signed(&acc, value))
    }
}

#[cfg(test)]
mod tests {
    use crate::{BigInt, Sign};

    fn int(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    struct Test {
        lhs: &'static str,
        rhs: &'static str,
        sum: &'static str,
        difference: &'static str,
    }

    macro_rules! test(
        ($lhs:expr, $rhs:expr => $sum:expr, $difference:expr $(,)?) => {
            Test {
                lhs: $lhs,
                rhs: $rhs,
                sum: $sum,
                difference: $difference,
            }
        };
    );

    #[test]
    fn signed_addition_and_subtraction_tables() {
        let tests = [
            test!("0", "0" => "0", "0"),
            test!("5", "3" => "8", "2"),
            test!("3", "5" => "8", "-2"),
            test!("5", "-3" => "2", "8"),
            test!("-5", "3" => "-2", "-8"),
            test!("-5", "-3" => "-8", "-2"),
            test!("-3", "-5" => "-8", "2"),
            test!("5", "-5" => "0", "10"),
            test!("-5", "5" => "0", "-10"),
            test!("5", "5" => "10", "0"),
            test!("-5", "-5" => "-10", "0"),
            test!("0", "7" => "7", "-7"),
            test!("7", "0" => "7", "7"),
            test!("0", "-7" => "-7", "7"),
            // Carries across limb boundaries.
            test!("4294967295", "1" => "4294967296", "4294967294"),
            test!("18446744073709551615", "1" => "18446744073709551616", "18446744073709551614"),
            test!("1000000000000000000000", "1" => "1000000000000000000001", "999999999999999999999"),
            test!(
                "123456789012345678901234567890", "-123456789012345678901234567890"
                => "0", "246913578024691357802469135780",
            ),
        ];
        for test in tests {
            let (lhs, rhs) = (int(test.lhs), int(test.rhs));
            assert_eq!(&lhs + &rhs, int(test.sum), "{} + {}", test.lhs, test.rhs);
            assert_eq!(
                &lhs - &rhs,
                int(test.difference),
                "{} - {}",
                test.lhs,
                test.rhs,
            );
        }
    }

    #[test]
    fn assign_forms_match_the_binary_forms() {
        let mut value = int("100");
        value += &int("-300");
        assert_eq!(value, int("-200"));
        value -= &int("-200");
        assert!(value.is_zero());
        assert_eq!(value.sign(), Sign::Pos);
    }

    #[test]
    fn summation_folds_from_zero() {
        let values = [int("1"), int("-10"), int("100"), int("-1000")];
        assert_eq!(values.iter().sum::<BigInt>(), int("-909"));
        assert_eq!(values.into_iter().sum::<BigInt>(), int("-909"));
        assert_eq!(Vec::<BigInt>::new().into_iter().sum::<BigInt>(), int("0"));
    }

    #[test]
    fn increment_and_decrement_cross_zero() {
        let mut value = int("-2");
        value.increment();
        assert_eq!(value, int("-1"));
        value.increment();
        assert!(value.is_zero());
        assert_eq!(value.sign(), Sign::Pos);
        value.increment();
        assert_eq!(value, int("1"));

        value.decrement();
        value.decrement();
        assert_eq!(value, int("-1"));
        value.decrement();
        assert_eq!(value, int("-2"));
    }

    #[test]
    fn increment_and_decrement_cross_limb_boundaries() {
        let mut value = int("4294967295");
        value.increment();
        assert_eq!(value, int("4294967296"));
        value.decrement();
        assert_eq!(value, int("4294967295"));

        let mut value = int("-4294967296");
        value.increment();
        assert_eq!(value, int("-4294967295"));
    }
}
