//! Checks whether a process descends from another.

use backend::Pid;
use clap::Parser;
use pidtools_cli::{pid_parser, report_ancestry, CommonOptions};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "isachildof", version)]
#[command(about = "Checks if CHILD is a child of any level of PARENT")]
#[command(after_help = "Exit status is 0 if it is, 1 if it is not (or CHILD does not exist),\n\
    and 2 if a process disappeared while checking.")]
struct Options {
    /// Pid to check
    #[arg(value_parser = pid_parser())]
    child: Pid,

    /// Potential parent pid
    #[arg(value_parser = pid_parser())]
    parent: Pid,

    #[command(flatten)]
    common: CommonOptions,
}

fn main() -> ExitCode {
    let opts = Options::parse();
    let root = opts.common.init();

    report_ancestry(&root, opts.parent, opts.child)
}
