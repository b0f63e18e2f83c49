//! Terminal output utilities.
//!
//! Result rows go to stdout, errors to stderr.

use crate::models::ResultItem;
use colored::Colorize;
use std::fmt::Display;
use std::time::Duration;

const HELP_TITLE: &str = "Network Calculator v2.2";

/// Help text body, `{program}` is replaced with the binary name.
const HELP_TEMPLATE: &str = "Usage: {program} <IP/CIDR>

Output:
  Address     - Input IP address with network mask
  Bitmask     - Number of bits in the network mask
  Netmask     - Subnet mask in dotted decimal format
  Wildcard    - Inverse mask for host calculations
  Network     - Base address of the network
  Broadcast   - Last address in the network
  Hostmin     - First usable host IP address
  Hostmax     - Last usable host IP address
  Hosts       - Total number of available hosts

Example:
  {program} 192.168.1.0/24
";

/// Width of the `Name:` column.
const NAME_WIDTH: usize = 12;

/// Full help text.
pub fn usage_text(program: &str) -> String {
    format!(
        "{HELP_TITLE}\n{}",
        HELP_TEMPLATE.replace("{program}", program)
    )
}

/// Print the help text to stdout.
pub fn print_usage(program: &str) {
    print!("{}", usage_text(program));
}

/// Format one result line as a left-aligned `Name:` column and its value.
///
/// # Examples
/// ```
/// use netcalc::models::ResultItem;
/// use netcalc::output::format_row;
/// assert_eq!(format_row(&ResultItem::new("Hosts", 254)), "Hosts:       254");
/// ```
pub fn format_row(item: &ResultItem) -> String {
    let label = format!("{}:", item.name);
    format!("{label:<width$} {value}", width = NAME_WIDTH, value = item.value)
}

pub fn format_elapsed(elapsed: Duration) -> String {
    format!("Execution time: {elapsed:?}")
}

/// Print all result rows, a blank line and the elapsed time.
pub fn print_report(items: &[ResultItem], elapsed: Duration) {
    for item in items {
        println!("{}", format_row(item));
    }
    println!();
    println!("{}", format_elapsed(elapsed).dimmed());
}

/// Print an `Error:` line to stderr.
pub fn print_error<E: Display>(err: E) {
    eprintln!("{} {err}", "Error:".red().bold());
}
