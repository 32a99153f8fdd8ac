//! Turning lookup results into output and exit statuses.

use backend::{Pid, ProcError, ProcRoot};
use std::process::ExitCode;

/// Exit status of an ancestry check.
///
/// 0 related, 1 unrelated or no such pid, 2 a process vanished mid-walk.
pub fn ancestry_status(result: &Result<bool, ProcError>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(ProcError::Vanished(_)) => 2,
        Err(_) => 1,
    }
}

/// Runs an ancestry check and reports failures on stderr.
pub fn report_ancestry(root: &ProcRoot, ancestor: Pid, descendant: Pid) -> ExitCode {
    let result = root.is_ancestor(ancestor, descendant);
    match &result {
        Err(ProcError::NotFound(pid)) => eprintln!("No such pid: {pid}"),
        Err(ProcError::Vanished(pid)) => eprintln!("Pid {pid} disappeared while checking."),
        Err(e) => eprintln!("Error: {e}"),
        Ok(_) => {}
    }
    ExitCode::from(ancestry_status(&result))
}

/// Space-separated pids, as printed by `getcpids`.
pub fn join_pids(pids: &[Pid]) -> String {
    pids.iter()
        .map(|pid| pid.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
