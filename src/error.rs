//! Error types for the Rabbit crypt engine.

use core::fmt;

/// Errors produced when scheduling or driving a [`RabbitContext`](crate::RabbitContext).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Key is empty or longer than 16 bytes.
    InvalidKeyLength,
    /// IV is empty or longer than 8 bytes.
    InvalidIvLength,
    /// Input and output buffers differ in length.
    BufferLengthMismatch,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeyLength => write!(f, "key length must be between 1 and 16 bytes"),
            Error::InvalidIvLength => write!(f, "IV length must be between 1 and 8 bytes"),
            Error::BufferLengthMismatch => {
                write!(f, "input and output buffers must have the same length")
            }
        }
    }
}

impl core::error::Error for Error {}
