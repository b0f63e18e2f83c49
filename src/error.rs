//! Calculator errors.

use thiserror::Error;

/// Broad class of a [`CalcError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input is not shaped like `address/prefix`.
    Format,
    /// Shaped correctly but the prefix or address is out of range.
    Validation,
    /// A valid IPv6 CIDR.
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("invalid CIDR format")]
    MissingSeparator,
    #[error("invalid CIDR: {0}")]
    InvalidCidr(String),
    #[error("invalid bitmask")]
    InvalidBitmask,
    #[error("invalid IP address")]
    InvalidAddress,
    #[error("IPv6 is not supported")]
    Ipv6Unsupported,
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::MissingSeparator | CalcError::InvalidCidr(_) => ErrorKind::Format,
            CalcError::InvalidBitmask | CalcError::InvalidAddress => ErrorKind::Validation,
            CalcError::Ipv6Unsupported => ErrorKind::Unsupported,
        }
    }
}
