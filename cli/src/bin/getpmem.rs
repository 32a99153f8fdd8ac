//! Prints resident memory statistics of one or more processes.

use backend::{MemoryUnit, Pid};
use clap::Parser;
use pidtools_cli::{pid_parser, CommonOptions};
use std::process::ExitCode;
use tracing::debug;

/// Exit status when any pid could not be read (ENOENT).
const UNREADABLE: u8 = 2;

#[derive(Parser)]
#[command(name = "getpmem", version)]
#[command(about = "Prints the memory usage information of one or more pids")]
struct Options {
    /// Print RSS (resident set size) info [default mode]
    #[arg(short = 'r', long = "rss")]
    rss: bool,

    /// Output in kilobytes (kB, 1000 bytes) [default]
    #[arg(short = 'k', long, conflicts_with = "megabytes")]
    kilobytes: bool,

    /// Output in megabytes (mB, 1000 kB)
    #[arg(short = 'm', long)]
    megabytes: bool,

    /// Pids to report on
    #[arg(required = true, value_parser = pid_parser())]
    pids: Vec<Pid>,

    #[command(flatten)]
    common: CommonOptions,
}

impl Options {
    fn unit(&self) -> MemoryUnit {
        match (self.kilobytes, self.megabytes) {
            (false, true) => MemoryUnit::Megabytes,
            _ => MemoryUnit::Kilobytes,
        }
    }
}

fn main() -> ExitCode {
    let opts = Options::parse();
    let root = opts.common.init();

    if !opts.rss {
        debug!("no output mode selected, using RSS");
    }
    let unit = opts.unit();

    let mut failed = false;
    for &pid in &opts.pids {
        match root.memory_info(pid) {
            Ok(info) => println!("{}", info.render(unit)),
            Err(e) => {
                eprintln!("Failed reading memory information for pid={pid}: {e}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::from(UNREADABLE)
    } else {
        ExitCode::SUCCESS
    }
}
