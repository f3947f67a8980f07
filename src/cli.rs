use std::ffi::OsString;
use std::io::{self, Write};

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::churn::{churn, ChurnReport};
use crate::count::{parse_count, Plan};

pub const USAGE: &str = "Usage: array_append_remove <count>";
pub const INVALID_NUMBER: &str = "Invalid number";

/// Grows a Vec to `count` elements by pushes, then pops it back to empty.
///
/// Every argument is positional: there are no flags, and `-h`, `--help`
/// or `--` in first position is a count that fails to parse.
#[derive(Debug, Parser)]
#[command(name = "array_append_remove", disable_help_flag = true)]
pub struct Args {
    /// Number of elements to push and then pop.
    pub count: Option<OsString>,

    /// Extra positionals are ignored.
    #[arg(hide = true, num_args = 0..)]
    pub rest: Vec<OsString>,
}

impl Args {
    /// Parses a full argv, program name first. An escape is inserted after
    /// the program name so clap never reads an argument as a flag or as its
    /// own `--` escape.
    pub fn from_argv<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv
            .next()
            .unwrap_or_else(|| OsString::from("array_append_remove"));
        let escaped = [program, OsString::from("--")].into_iter().chain(argv);
        Self::parse_from(escaped)
    }
}

/// How a single invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Usage,
    InvalidNumber,
    Ran(ChurnReport),
}

/// Logs go to stderr so stdout carries only the usage and error lines.
pub fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

pub fn run<W: Write>(args: &Args, out: &mut W) -> io::Result<Outcome> {
    if !args.rest.is_empty() {
        debug!(ignored = ?args.rest, "extra arguments");
    }

    let n = match parse_count(args.count.as_deref()) {
        Ok(n) => n,
        Err(e) => {
            debug!("{e}");
            writeln!(out, "{INVALID_NUMBER}")?;
            return Ok(Outcome::InvalidNumber);
        }
    };

    match Plan::from_count(n) {
        Plan::Usage => {
            writeln!(out, "{USAGE}")?;
            Ok(Outcome::Usage)
        }
        Plan::Run(n) => {
            let report = churn(n);
            info!(n, removed = report.removed, "workload finished");
            Ok(Outcome::Ran(report))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoke(argv: &[&str]) -> (Outcome, String) {
        let argv = std::iter::once("array_append_remove").chain(argv.iter().copied());
        let args = Args::from_argv(argv);
        let mut out = Vec::new();
        let outcome = run(&args, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn no_argument_prints_usage() {
        assert_eq!(invoke(&[]), (Outcome::Usage, format!("{USAGE}\n")));
    }

    #[test]
    fn zero_prints_usage() {
        assert_eq!(invoke(&["0"]), (Outcome::Usage, format!("{USAGE}\n")));
    }

    #[test]
    fn non_numeric_prints_invalid() {
        assert_eq!(
            invoke(&["xyz"]),
            (Outcome::InvalidNumber, format!("{INVALID_NUMBER}\n"))
        );
    }

    #[test]
    fn positive_count_is_silent() {
        let (outcome, out) = invoke(&["5"]);
        assert_eq!(
            outcome,
            Outcome::Ran(ChurnReport {
                peak_len: 5,
                removed: 5
            })
        );
        assert!(out.is_empty());
    }

    #[test]
    fn negative_count_runs_zero_iterations() {
        let (outcome, out) = invoke(&["-3"]);
        assert_eq!(
            outcome,
            Outcome::Ran(ChurnReport {
                peak_len: 0,
                removed: 0
            })
        );
        assert!(out.is_empty());
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let (outcome, out) = invoke(&["3", "extra", "-x"]);
        assert_eq!(
            outcome,
            Outcome::Ran(ChurnReport {
                peak_len: 3,
                removed: 3
            })
        );
        assert!(out.is_empty());
    }

    #[test]
    fn flag_lookalikes_are_invalid_numbers() {
        for arg in ["-h", "--help", "--", "-V"] {
            assert_eq!(
                invoke(&[arg]),
                (Outcome::InvalidNumber, format!("{INVALID_NUMBER}\n")),
                "argument {arg:?}"
            );
        }
    }

    #[test]
    fn escape_after_count_is_ignored() {
        let (outcome, out) = invoke(&["2", "--", "--help"]);
        assert_eq!(
            outcome,
            Outcome::Ran(ChurnReport {
                peak_len: 2,
                removed: 2
            })
        );
        assert!(out.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_is_invalid_number() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let args = Args::from_argv([
            OsStr::new("array_append_remove"),
            OsStr::from_bytes(b"\xff"),
        ]);
        let mut out = Vec::new();
        assert_eq!(run(&args, &mut out).unwrap(), Outcome::InvalidNumber);
        assert_eq!(out, format!("{INVALID_NUMBER}\n").into_bytes());
    }
}
