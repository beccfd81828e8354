#![doc = include_str!("../README.md")]

mod bits;
mod convert;
mod error;
mod fmt;
mod limbs;
mod ops;
mod parse;
mod value;

pub use crate::{
    error::{last_error, strerror, Error},
    value::{Base, BigInt, Sign},
};
