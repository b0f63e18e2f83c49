//! Subnet calculation logic.
//!
//! - [`calculator`] - validation of `address/prefix` input and field derivation

mod calculator;

// Re-export public functions
pub use calculator::{calculate, compute, parse_subnet, split_cidr};
