//! Prints one environment variable of a running process.

use backend::Pid;
use clap::Parser;
use pidtools_cli::{pid_parser, CommonOptions};
use std::process::ExitCode;

/// Exit status when the variable is not set in the process.
const NOT_SET: u8 = 254;

#[derive(Parser)]
#[command(name = "getpenv", version)]
#[command(about = "Prints the value of an env var as set for a given pid")]
#[command(after_help = "Exit status is 254 if the process has no such variable.\n\n\
    Example: getpenv 12345 PATH")]
struct Options {
    /// Pid to read the environment of
    #[arg(value_parser = pid_parser())]
    pid: Pid,

    /// Variable name
    name: String,

    #[command(flatten)]
    common: CommonOptions,
}

fn main() -> ExitCode {
    let opts = Options::parse();
    let root = opts.common.init();

    match root.environ_var(opts.pid, &opts.name) {
        Ok(Some(value)) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::from(NOT_SET),
        Err(e) => {
            eprintln!(
                "Error reading env var '{}' from pid={}: {e}",
                opts.name, opts.pid
            );
            ExitCode::FAILURE
        }
    }
}
