use netcalc::calculate;
use netcalc::cli::{parse_args, Invocation};
use netcalc::config::init_logging;
use netcalc::output::{print_error, print_report, print_usage};
use std::error::Error;
use std::process;
use std::time::Instant;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    init_logging()?;

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "netcalc".to_string());
    let args: Vec<String> = args.collect();

    let invocation = parse_args(&args);
    let exit_code = invocation.exit_code();
    let cidr = match invocation {
        Invocation::Run(cidr) => cidr,
        Invocation::Help => {
            print_usage(&program);
            process::exit(exit_code);
        }
        Invocation::UnknownFlag(flag) => {
            eprintln!("flag provided but not defined: {flag}");
            print_usage(&program);
            process::exit(exit_code);
        }
        Invocation::Usage => {
            log::debug!("expected one argument, got {}", args.len());
            print_usage(&program);
            process::exit(exit_code);
        }
    };

    let start = Instant::now();
    match calculate(&cidr) {
        Ok(items) => {
            print_report(&items, start.elapsed());
            Ok(())
        }
        Err(e) => {
            log::debug!("calculation failed for {cidr}: {e}");
            print_error(&e);
            process::exit(1);
        }
    }
}
