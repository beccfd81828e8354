//! Error codes and the thread-local last-error slot.

use std::{cell::Cell, error, fmt};

/// An error code from a failed operation.
///
/// The set is closed and the numeric codes are stable. Code 0 is success and
/// has no variant; `Ok` results encode it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Error {
    /// A numeral was malformed.
    IncorrectString = 1,
    /// Storage for a value could not be allocated.
    ///
    /// Reserved: allocation failure aborts the process in Rust, so library
    /// code never returns this code itself.
    MemoryAllocation = 2,
    /// An argument violated an operation's contract.
    IncorrectFunctionArgument = 3,
    /// The value does not fit in the destination integer.
    TooLargeToConvert = 4,
    /// The divisor was zero.
    DivisionByZero = 5,
    /// A byte buffer's length was not a multiple of four.
    LengthIndivisibleByFour = 6,
    /// A value's internal storage was inconsistent.
    ///
    /// Reserved: owned limb storage cannot become inconsistent, so library
    /// code never returns this code itself.
    DataStructure = 7,
}

const MESSAGES: [&str; 8] = [
    "everything is all right",
    "malformed numeral string",
    "failed to allocate memory on the heap",
    "an incorrect argument was given to a function",
    "value is too large to be converted to an integer",
    "division by zero",
    "cannot convert a byte buffer with length indivisible by four",
    "unexpected value in the internal data structure",
];

thread_local! {
    static LAST_ERROR: Cell<Option<Error>> = const { Cell::new(None) };
}

impl Error {
    /// Returns the stable numeric code for this error.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Records this error in the thread-local last-error slot and returns
    /// it, so failure paths read `Err(code.record())`.
    pub(crate) fn record(self) -> Self {
        LAST_ERROR.with(|slot| slot.set(Some(self)));
        self
    }
}

/// Returns the most recent error recorded on this thread, if any.
///
/// Failing operations record their code here before returning; successful
/// operations do not clear it.
pub fn last_error() -> Option<Error> {
    LAST_ERROR.with(|slot| slot.get())
}

/// Maps a numeric code to its human-readable message.
///
/// Code 0 is success; codes outside the closed set map to `"unknown error"`.
pub fn strerror(code: u32) -> &'static str {
    MESSAGES
        .get(code as usize)
        .copied()
        .unwrap_or("unknown error")
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(strerror(self.code()))
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use crate::error::{last_error, strerror, Error};

    #[test]
    fn codes_are_stable() {
        let codes = [
            (Error::IncorrectString, 1),
            (Error::MemoryAllocation, 2),
            (Error::IncorrectFunctionArgument, 3),
            (Error::TooLargeToConvert, 4),
            (Error::DivisionByZero, 5),
            (Error::LengthIndivisibleByFour, 6),
            (Error::DataStructure, 7),
        ];
        for (err, code) in codes {
            assert_eq!(err.code(), code, "{err:?}");
            assert_eq!(strerror(code), err.to_string(), "{err:?}");
        }
    }

    #[test]
    fn strerror_bounds() {
        assert_eq!(strerror(0), "everything is all right");
        assert_eq!(strerror(5), "division by zero");
        assert_eq!(strerror(8), "unknown error");
        assert_eq!(strerror(u32::MAX), "unknown error");
    }

    #[test]
    fn record_keeps_latest() {
        let _ = Error::DivisionByZero.record();
        assert_eq!(last_error(), Some(Error::DivisionByZero));
        let _ = Error::IncorrectString.record();
        assert_eq!(last_error(), Some(Error::IncorrectString));
    }
}
