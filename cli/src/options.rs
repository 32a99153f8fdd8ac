//! Command-line options shared by every tool.

use crate::logging;
use backend::{Pid, ProcRoot, DEFAULT_PROC_ROOT};
use clap::builder::RangedI64ValueParser;
use clap::Args;
use std::path::PathBuf;

/// Parser accepting positive pids only.
pub fn pid_parser() -> RangedI64ValueParser<Pid> {
    clap::value_parser!(Pid).range(1..)
}

#[derive(Debug, Clone, Args)]
pub struct CommonOptions {
    /// Proc filesystem to read process state from
    #[arg(
        long,
        env = "PIDTOOLS_PROC_ROOT",
        default_value = DEFAULT_PROC_ROOT,
        value_name = "PATH"
    )]
    pub proc_root: PathBuf,

    /// Log diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonOptions {
    /// Sets up logging and opens the configured proc filesystem.
    pub fn init(&self) -> ProcRoot {
        logging::init(self.verbose);
        ProcRoot::new(&self.proc_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[arg(value_parser = pid_parser())]
        pid: Pid,
        #[command(flatten)]
        common: CommonOptions,
    }

    #[test]
    fn defaults_to_live_proc() {
        let opts = Harness::try_parse_from(["tool", "42"]).unwrap();
        assert_eq!(opts.pid, 42);
        assert!(!opts.common.verbose);
        if std::env::var_os("PIDTOOLS_PROC_ROOT").is_none() {
            assert_eq!(opts.common.proc_root, PathBuf::from(DEFAULT_PROC_ROOT));
        }
    }

    #[test]
    fn proc_root_can_be_overridden() {
        let opts =
            Harness::try_parse_from(["tool", "--proc-root", "/host/proc", "-v", "7"]).unwrap();
        assert_eq!(opts.common.proc_root, PathBuf::from("/host/proc"));
        assert!(opts.common.verbose);
    }

    #[test]
    fn non_positive_pids_are_rejected() {
        assert!(Harness::try_parse_from(["tool", "0"]).is_err());
        assert!(Harness::try_parse_from(["tool", "-5"]).is_err());
        assert!(Harness::try_parse_from(["tool", "abc"]).is_err());
    }
}
