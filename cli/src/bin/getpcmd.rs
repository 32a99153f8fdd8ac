//! Prints the command line of one or more processes.

use backend::{format_cmdline, Pid};
use clap::Parser;
use pidtools_cli::{pid_parser, CommonOptions};
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(name = "getpcmd", version)]
#[command(about = "Prints the command line of the given pids")]
struct Options {
    /// Quote each argument, escaping embedded quotes and backslashes
    #[arg(long)]
    quote: bool,

    /// Pids whose command lines to print
    #[arg(required = true, value_parser = pid_parser())]
    pids: Vec<Pid>,

    #[command(flatten)]
    common: CommonOptions,
}

fn main() -> ExitCode {
    let opts = Options::parse();
    let root = opts.common.init();

    let mut failed = false;
    for &pid in &opts.pids {
        match root.cmdline(pid) {
            Ok(args) => println!("{}", format_cmdline(&args, opts.quote)),
            Err(e) => {
                debug!(pid, error = %e, "reading cmdline failed");
                eprintln!("Error, pid {pid} does not exist or is not accessible.");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
