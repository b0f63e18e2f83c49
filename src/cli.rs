//! Command line handling.
//!
//! Leading `-x` arguments are flags until the first positional argument or a
//! bare `--`. Only `-h`/`-help` (with one or two dashes) is known.

/// What the binary should do for a given argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Calculate the single `address/prefix` argument.
    Run(String),
    /// Help was asked for, print usage and exit 0.
    Help,
    /// Wrong number of positional arguments, print usage and exit 1.
    Usage,
    /// Unrecognised flag, report it, print usage and exit 2.
    UnknownFlag(String),
}

impl Invocation {
    pub fn exit_code(&self) -> i32 {
        match self {
            Invocation::Run(_) | Invocation::Help => 0,
            Invocation::Usage => 1,
            Invocation::UnknownFlag(_) => 2,
        }
    }
}

/// Classify the arguments that follow the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Invocation {
    let mut rest = args;

    while let Some((first, tail)) = rest.split_first() {
        let arg = first.as_ref();
        if arg == "--" {
            rest = tail;
            break;
        }
        if arg.len() < 2 || !arg.starts_with('-') {
            break;
        }

        let name = arg.strip_prefix("--").unwrap_or(&arg[1..]);
        match name {
            "h" | "help" => return Invocation::Help,
            _ => return Invocation::UnknownFlag(arg.to_string()),
        }
    }

    match rest {
        [cidr] => Invocation::Run(cidr.as_ref().to_string()),
        _ => Invocation::Usage,
    }
}
