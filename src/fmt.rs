//! Numeral formatting.

use std::{
    fmt::{self, Debug, Display, Formatter, Write as _},
    io, mem,
};

use crate::{
    bits,
    value::{Base, BigInt},
};

impl BigInt {
    /// Writes the numeral to a byte sink in the given base.
    ///
    /// The output is `-` for a negative value, the `0b`/`0x` prefix for
    /// binary and hexadecimal, and the digits: no leading zero on the
    /// most-significant group, full-width zero padding on every later group
    /// (32 binary digits, 8 hex digits, or 9 decimal digits).
    pub fn write_base<W: io::Write>(&self, mut sink: W, base: Base) -> io::Result<()> {
        sink.write_all(self.to_string_base(base).as_bytes())
    }

    /// Formats the numeral in the given base.
    pub fn to_string_base(&self, base: Base) -> String {
        match base {
            Base::Binary => format!("{self:#b}"),
            Base::Decimal => format!("{self}"),
            Base::Hexadecimal => format!("{self:#x}"),
        }
    }

    /// Writes the magnitude digits. Zero prints as a single `0` in every
    /// base.
    fn emit_magnitude<W: fmt::Write>(&self, buf: &mut W, base: Base) -> fmt::Result {
        if self.is_zero() {
            return buf.write_char('0');
        }
        match base {
            Base::Binary => self.emit_binary(buf),
            Base::Decimal => self.emit_decimal(buf),
            Base::Hexadecimal => self.emit_hex(buf),
        }
    }

    /// Prints the high limb with exactly its significant bits and every
    /// lower limb as 32 digits.
    fn emit_binary<W: fmt::Write>(&self, buf: &mut W) -> fmt::Result {
        if let Some((&high, rest)) = self.magnitude.as_slice().split_last() {
            for i in (0..bits::bit_len(high)).rev() {
                buf.write_char(if high & (1 << i) != 0 { '1' } else { '0' })?;
            }
            for &limb in rest.iter().rev() {
                write!(buf, "{limb:032b}")?;
            }
        }
        Ok(())
    }

    /// Prints the high limb with 1 to 8 digits and every lower limb as 8.
    fn emit_hex<W: fmt::Write>(&self, buf: &mut W) -> fmt::Result {
        if let Some((&high, rest)) = self.magnitude.as_slice().split_last() {
            write!(buf, "{high:x}")?;
            for &limb in rest.iter().rev() {
                write!(buf, "{limb:08x}")?;
            }
        }
        Ok(())
    }

    /// Prints by extracting base-10⁹ super-digits: a big-endian scratch copy
    /// of the magnitude is repeatedly divided by 10⁹ and each remainder
    /// becomes one nine-digit group, least significant first.
    fn emit_decimal<W: fmt::Write>(&self, buf: &mut W) -> fmt::Result {
        let limbs = self.magnitude.as_slice();
        if let [limb] = *limbs {
            return write!(buf, "{limb}");
        }
        let count = limbs.len();
        // ⌈(10n + 1) / 9⌉ super-digits bound the decimal length of an n-limb
        // magnitude; over-allocated leading zeros are suppressed below.
        let super_digits = (count * 10 + 1).div_ceil(9);
        let mut result = vec![0; super_digits];

        // Two buffers swap the roles of dividend and quotient each round.
        let mut dividend: Vec<u32> = limbs.iter().rev().copied().collect();
        let mut quotient = vec![0; count];
        for i in (0..super_digits).rev() {
            quotient.fill(0);
            let start = count - bits::significant_len(&dividend);
            result[i] = div_super_digit(&dividend[start..], &mut quotient[start..]);
            mem::swap(&mut dividend, &mut quotient);
        }

        let first = result
            .iter()
            .position(|&digit| digit != 0)
            .unwrap_or(result.len() - 1);
        write!(buf, "{}", result[first])?;
        for &digit in &result[first + 1..] {
            write!(buf, "{digit:09}")?;
        }
        Ok(())
    }
}

/// Divides the big-endian array by 10⁹, setting quotient bits and returning
/// the remainder: walk the bits from the top down, shift the remainder left
/// by one, bring in the bit, and subtract 10⁹ whenever the remainder reaches
/// it.
fn div_super_digit(dividend: &[u32], quotient: &mut [u32]) -> u32 {
    const SUPER: u64 = 1_000_000_000;
    if dividend.is_empty() {
        return 0;
    }
    let mut rem = 0u64;
    let top = (dividend.len() - 1) * 32 + bits::bit_len(dividend[0]);
    for i in (0..top).rev() {
        rem = (rem << 1) | u64::from(bits::get_bit(dividend, i));
        if rem >= SUPER {
            rem -= SUPER;
            bits::set_bit(quotient, i);
        }
    }
    rem as u32
}

impl Display for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_char('-')?;
        }
        self.emit_magnitude(f, Base::Decimal)
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_char('-')?;
        }
        if f.alternate() {
            f.write_str("0b")?;
        }
        self.emit_magnitude(f, Base::Binary)
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_char('-')?;
        }
        if f.alternate() {
            f.write_str("0x")?;
        }
        self.emit_magnitude(f, Base::Hexadecimal)
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({self})")
    }
}

#[cfg(test)]
mod tests {
    use crate::{Base, BigInt};

    #[test]
    fn zero_prints_one_digit_in_every_base() {
        let zero = BigInt::zero();
        assert_eq!(zero.to_string_base(Base::Binary), "0b0");
        assert_eq!(zero.to_string_base(Base::Decimal), "0");
        assert_eq!(zero.to_string_base(Base::Hexadecimal), "0x0");
    }

    #[test]
    fn lower_groups_are_zero_padded() {
        // 2^32: the high limb is 1 and the low limb is all zeros.
        let value: BigInt = "4294967296".parse().unwrap();
        assert_eq!(
            value.to_string_base(Base::Binary),
            format!("0b1{}", "0".repeat(32)),
        );
        assert_eq!(value.to_string_base(Base::Hexadecimal), "0x100000000");
        assert_eq!(value.to_string_base(Base::Decimal), "4294967296");

        // 10^9 exercises the super-digit boundary.
        let value: BigInt = "0x3b9aca00".parse().unwrap();
        assert_eq!(value.to_string_base(Base::Decimal), "1000000000");
        let value: BigInt = "0xde0b6b3a7640000".parse().unwrap();
        assert_eq!(value.to_string_base(Base::Decimal), "1000000000000000000");
    }

    #[test]
    fn negative_sign_precedes_the_prefix() {
        let value: BigInt = "-0xff".parse().unwrap();
        assert_eq!(value.to_string_base(Base::Hexadecimal), "-0xff");
        assert_eq!(value.to_string_base(Base::Binary), "-0b11111111");
        assert_eq!(value.to_string_base(Base::Decimal), "-255");
    }

    #[test]
    fn large_decimal_output_matches_the_hex_form() {
        let value: BigInt = "0x18ee90ff6c373e0ee4e3f0ad2".parse().unwrap();
        assert_eq!(value.to_string(), "123456789012345678901234567890");
    }

    #[test]
    fn formatter_flags_control_the_prefix() {
        let value: BigInt = "-42".parse().unwrap();
        assert_eq!(format!("{value}"), "-42");
        assert_eq!(format!("{value:x}"), "-2a");
        assert_eq!(format!("{value:#x}"), "-0x2a");
        assert_eq!(format!("{value:b}"), "-101010");
        assert_eq!(format!("{value:#b}"), "-0b101010");
        assert_eq!(format!("{value:?}"), "BigInt(-42)");
    }

    #[test]
    fn write_base_streams_the_canonical_form() {
        let value: BigInt = "123456789".parse().unwrap();
        let mut sink = Vec::new();
        value.write_base(&mut sink, Base::Hexadecimal).unwrap();
        assert_eq!(sink, b"0x75bcd15");
    }
}
