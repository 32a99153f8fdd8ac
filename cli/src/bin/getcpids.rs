//! Prints the child pids of one or more processes.

use anyhow::Context;
use backend::{collect_descendants, IntSet, Pid, ProcRoot, MATCH_BUCKETS, SYSTEM_BUCKETS};
use clap::Parser;
use pidtools_cli::{join_pids, pid_parser, CommonOptions};
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(name = "getcpids", version)]
#[command(about = "Prints the child process ids (pids) belonging to the given pids")]
#[command(after_help = "Examples:\n  \
    getcpids 1234\n  \
    getcpids -r 1234 5678")]
struct Options {
    /// Also list grandchildren and every further descendant
    #[arg(short, long)]
    recursive: bool,

    /// Pids whose children to list
    #[arg(required = true, value_parser = pid_parser())]
    pids: Vec<Pid>,

    #[command(flatten)]
    common: CommonOptions,
}

fn main() -> ExitCode {
    let opts = Options::parse();
    let root = opts.common.init();

    match run(&opts, &root) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(opts: &Options, root: &ProcRoot) -> anyhow::Result<ExitCode> {
    let snapshot = root
        .live_pids()
        .with_context(|| format!("listing processes under {}", root.path().display()))?;

    let mut live = IntSet::with_buckets(SYSTEM_BUCKETS)?;
    for &pid in &snapshot {
        live.add(pid)?;
    }

    let mut requested = IntSet::with_buckets(MATCH_BUCKETS)?;
    let mut roots = Vec::with_capacity(opts.pids.len());
    let mut any_missing = false;
    for &pid in &opts.pids {
        if !requested.add(pid)? {
            continue;
        }
        if live.contains(pid) {
            roots.push(pid);
        } else {
            eprintln!("No such pid: {pid}");
            any_missing = true;
        }
    }
    debug!(?roots, recursive = opts.recursive, "collecting children");

    let found = collect_descendants(&roots, &snapshot, opts.recursive, root)?;
    let mut pids = found.values();
    pids.sort_unstable();

    if !pids.is_empty() {
        println!("{}", join_pids(&pids));
    }

    Ok(if any_missing {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
