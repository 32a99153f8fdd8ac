//! Checks whether a process is an ancestor of another.

use backend::Pid;
use clap::Parser;
use pidtools_cli::{pid_parser, report_ancestry, CommonOptions};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "isaparentof", version)]
#[command(about = "Checks if PARENT is a parent of any level of CHILD")]
#[command(after_help = "Exit status is 0 if it is, 1 if it is not (or CHILD does not exist),\n\
    and 2 if a process disappeared while checking.")]
struct Options {
    /// Potential parent pid
    #[arg(value_parser = pid_parser())]
    parent: Pid,

    /// Pid to check
    #[arg(value_parser = pid_parser())]
    child: Pid,

    #[command(flatten)]
    common: CommonOptions,
}

fn main() -> ExitCode {
    let opts = Options::parse();
    let root = opts.common.init();

    report_ancestry(&root, opts.parent, opts.child)
}
