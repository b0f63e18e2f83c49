//! Output formatting for calculator results.
//!
//! - [`terminal`] - help text, result rows and error lines for the terminal

mod terminal;

pub use terminal::{
    format_elapsed, format_row, print_error, print_report, print_usage, usage_text,
};
