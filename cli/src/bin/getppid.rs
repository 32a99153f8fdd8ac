//! Prints the parent pid of a process.

use backend::Pid;
use clap::Parser;
use pidtools_cli::{pid_parser, CommonOptions};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "getppid", version)]
#[command(about = "Prints the parent process id (PPID) of a given pid")]
#[command(long_about = "Prints the parent process id (PPID) of a given pid.\n\n\
    A process without a parent reports 1 (init), including pid 1 itself.")]
struct Options {
    /// Pid whose parent to print
    #[arg(value_parser = pid_parser())]
    pid: Pid,

    #[command(flatten)]
    common: CommonOptions,
}

fn main() -> ExitCode {
    let opts = Options::parse();
    let root = opts.common.init();

    match root.ppid(opts.pid) {
        Ok(ppid) => {
            println!("{ppid}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Invalid pid: {} ({e})", opts.pid);
            ExitCode::FAILURE
        }
    }
}
