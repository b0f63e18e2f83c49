//! Subnet calculator for IPv4 addresses in CIDR notation.
//!
//! Given `address/prefix` it derives the netmask, wildcard, network,
//! broadcast, usable host range and host count.
//!
//! # Modules
//! - [`models`] - address arithmetic and result types
//! - [`processing`] - input validation and the calculator itself
//! - [`output`] - terminal formatting
//! - [`cli`] - argument handling for the binary
//! - [`config`] - logging setup
//! - [`error`] - error types

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{CalcError, ErrorKind};
pub use models::{ResultItem, SubnetInfo};
pub use processing::{calculate, compute, parse_subnet, split_cidr};
