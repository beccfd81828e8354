#![doc = include_str!("../README.md")]

use std::{
    io::{self, Write as _},
    process::exit,
};

use bigint::{Base, BigInt, Error};
use bstr::ByteSlice;
use clap::{Parser, ValueEnum};
use derive_more::{Display, From};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Operand numerals: an optional sign, an optional 0b/0x base prefix,
    /// and digits.
    #[arg(required = true, allow_hyphen_values = true)]
    operands: Vec<String>,
    /// Operation applied across the operands.
    #[arg(short, long, value_enum, default_value_t = Op::Print)]
    op: Op,
    /// Output base.
    #[arg(short, long, value_enum, default_value_t = OutputBase::Dec)]
    base: OutputBase,
}

/// The operation applied across the operands.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Op {
    /// Reprint each operand.
    Print,
    /// Sum all operands.
    Add,
    /// Subtract the second operand from the first.
    Sub,
    /// Multiply all operands.
    Mul,
    /// Integer quotient of the first operand by the second.
    Div,
    /// Division remainder of the first operand by the second.
    Rem,
    /// Compare the first two operands, printing -1, 0, or 1.
    Cmp,
}

/// The base numerals are printed in.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputBase {
    /// Binary with a 0b prefix.
    Bin,
    /// Decimal.
    Dec,
    /// Hexadecimal with a 0x prefix.
    Hex,
}

impl From<OutputBase> for Base {
    fn from(base: OutputBase) -> Base {
        match base {
            OutputBase::Bin => Base::Binary,
            OutputBase::Dec => Base::Decimal,
            OutputBase::Hex => Base::Hexadecimal,
        }
    }
}

/// An error from evaluating the command line.
#[derive(Debug, Display, From)]
enum CliError {
    /// An arithmetic operation failed.
    #[display("{_0}")]
    Math(Error),
    /// Writing output failed.
    #[display("writing: {_0}")]
    Io(io::Error),
}

fn main() {
    let cli = Cli::parse();
    let mut values = Vec::with_capacity(cli.operands.len());
    for operand in &cli.operands {
        match operand.parse::<BigInt>() {
            Ok(value) => values.push(value),
            Err(err) => {
                eprintln!(
                    "Error: parsing operand {:?}: {err}",
                    operand.as_bytes().as_bstr(),
                );
                exit(2);
            }
        }
    }
    match run(cli.op, &values, cli.base.into()) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("Error: {err}");
            exit(1);
        }
    }
}

fn run(op: Op, values: &[BigInt], base: Base) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    match op {
        Op::Print => {
            for value in values {
                print_value(&mut stdout, value, base)?;
            }
        }
        Op::Add => print_value(&mut stdout, &values.iter().sum::<BigInt>(), base)?,
        Op::Mul => print_value(&mut stdout, &values.iter().product::<BigInt>(), base)?,
        Op::Sub => {
            let [minuend, subtrahend] = binary_operands(values)?;
            print_value(&mut stdout, &(minuend - subtrahend), base)?;
        }
        Op::Div => {
            let [dividend, divisor] = binary_operands(values)?;
            let (quotient, _) = dividend.div_rem(divisor)?;
            print_value(&mut stdout, &quotient, base)?;
        }
        Op::Rem => {
            let [dividend, divisor] = binary_operands(values)?;
            let (_, remainder) = dividend.div_rem(divisor)?;
            print_value(&mut stdout, &remainder, base)?;
        }
        Op::Cmp => {
            let [lhs, rhs] = binary_operands(values)?;
            writeln!(stdout, "{}", lhs.compare(rhs))?;
        }
    }
    Ok(())
}

fn binary_operands(values: &[BigInt]) -> Result<[&BigInt; 2], CliError> {
    match values {
        [lhs, rhs] => Ok([lhs, rhs]),
        _ => Err(Error::IncorrectFunctionArgument.into()),
    }
}

fn print_value<W: io::Write>(mut sink: W, value: &BigInt, base: Base) -> Result<(), CliError> {
    value.write_base(&mut sink, base)?;
    writeln!(sink)?;
    Ok(())
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
