//! Shift-and-add multiplication.

use std::{
    cmp::Ordering,
    iter::Product,
    ops::{Mul, MulAssign},
};

use crate::{
    limbs::Limbs,
    ops::{add::add_abs, cmp::cmp_abs},
    value::{BigInt, Sign},
};

/// Multiplies magnitudes by adding the larger operand, shifted, once per set
/// bit of the smaller: bit `k` contributes `big << k`, the shift composed of
/// `k / 32` whole prepended limbs and `k % 32` single-bit shifts.
pub(crate) fn mul_abs(x: &Limbs, y: &Limbs) -> Limbs {
    let (big, small) = match cmp_abs(x, y) {
        Ordering::Greater => (x, y),
        _ => (y, x),
    };
    let mut product = Limbs::with_zeros(1);
    for (i, &limb) in small.as_slice().iter().enumerate() {
        for bit in 0..32 {
            if limb & (1 << bit) == 0 {
                continue;
            }
            let mut shifted = big.clone();
            shifted.prepend_low_zeros(i);
            for _ in 0..bit {
                shifted.shift_left_one();
            }
            product = add_abs(&product, &shifted);
        }
    }
    product.trim();
    product
}

/// Multiplies with sign resolution; a zero product is always non-negative.
fn mul_signed(x: &BigInt, y: &BigInt) -> BigInt {
    let sign = if x.sign == y.sign { Sign::Pos } else { Sign::Neg };
    BigInt::from_parts(mul_abs(&x.magnitude, &y.magnitude), sign)
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        mul_signed(self, rhs)
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: BigInt) -> BigInt {
        mul_signed(&self, &rhs)
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = mul_signed(self, rhs);
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::one(), |acc, value| mul_signed(&acc, &value))
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::one(), |acc, value| mul_signed(&acc, value))
    }
}

#[cfg(test)]
mod tests {
    use crate::{BigInt, Sign};

    fn int(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn products_carry_across_limbs() {
        let tests = [
            ("0", "0", "0"),
            ("1", "7", "7"),
            ("7", "1", "7"),
            ("6", "7", "42"),
            ("65536", "65536", "4294967296"),
            ("4294967295", "4294967295", "18446744065119617025"),
            ("18446744073709551615", "2", "36893488147419103230"),
            (
                "123456789012345678901234567890",
                "987654321098765432109876543210",
                "121932631137021795226185032733622923332237463801111263526900",
            ),
        ];
        for (lhs, rhs, product) in tests {
            assert_eq!(&int(lhs) * &int(rhs), int(product), "{lhs} * {rhs}");
            assert_eq!(&int(rhs) * &int(lhs), int(product), "{rhs} * {lhs}");
        }
    }

    #[test]
    fn signs_follow_parity() {
        assert_eq!(&int("-6") * &int("7"), int("-42"));
        assert_eq!(&int("6") * &int("-7"), int("-42"));
        assert_eq!(&int("-6") * &int("-7"), int("42"));
    }

    #[test]
    fn zero_products_are_never_negative() {
        let product = &int("-6") * &int("0");
        assert!(product.is_zero());
        assert_eq!(product.sign(), Sign::Pos);

        let product: BigInt = [int("-1"), int("-2"), int("0"), int("-3")].iter().product();
        assert!(product.is_zero());
        assert_eq!(product.sign(), Sign::Pos);
    }

    #[test]
    fn variadic_product_folds_from_one() {
        let values = [int("2"), int("-3"), int("5")];
        assert_eq!(values.iter().product::<BigInt>(), int("-30"));
        assert_eq!(Vec::<BigInt>::new().into_iter().product::<BigInt>(), int("1"));

        let mut value = int("12");
        value *= &int("-12");
        assert_eq!(value, int("-144"));
    }
}
