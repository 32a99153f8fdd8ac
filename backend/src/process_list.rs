//! Process listing and parent lookup through a proc filesystem.

use crate::descendants::ParentLookup;
use crate::types::{Pid, ProcError, INIT_PID};
use nix::errno::Errno;
use nix::sys::signal;
use nix::unistd;
use procfs::process::Process;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Mount point of the live proc filesystem.
pub const DEFAULT_PROC_ROOT: &str = "/proc";

/// A proc filesystem to read process state from.
///
/// Usually the live `/proc`, but any directory laid out the same way works,
/// such as a container's proc mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcRoot {
    path: PathBuf,
}

impl Default for ProcRoot {
    fn default() -> Self {
        Self::new(DEFAULT_PROC_ROOT)
    }
}

impl ProcRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_live_system(&self) -> bool {
        self.path == Path::new(DEFAULT_PROC_ROOT)
    }

    pub(crate) fn process(&self, pid: Pid) -> Result<Process, ProcError> {
        Process::new_with_root(self.path.join(pid.to_string()))
            .map_err(|e| ProcError::for_pid(pid, e))
    }

    /// Snapshot of every pid present under the root, sorted ascending.
    ///
    /// Entries that disappear while the directory is being read are skipped.
    pub fn live_pids(&self) -> Result<Vec<Pid>, ProcError> {
        let all_procs = procfs::process::all_processes_with_root(&self.path)?;

        let mut pids: Vec<Pid> = all_procs
            .filter_map(|proc_result| match proc_result {
                Ok(process) => Some(process.pid()),
                Err(e) => {
                    debug!(error = %e, "skipping unreadable process entry");
                    None
                }
            })
            .collect();
        pids.sort_unstable();

        debug!(root = %self.path.display(), count = pids.len(), "listed live pids");
        Ok(pids)
    }

    /// Parent pid of `pid`.
    ///
    /// A process without a parent (pid 1 itself, kernel threads) reports
    /// [`INIT_PID`].
    pub fn ppid(&self, pid: Pid) -> Result<Pid, ProcError> {
        let stat = self
            .process(pid)?
            .stat()
            .map_err(|e| ProcError::for_pid(pid, e))?;

        Ok(if stat.ppid == 0 { INIT_PID } else { stat.ppid })
    }

    /// Whether `pid` currently exists.
    ///
    /// On the live `/proc` the directory check is confirmed with a null
    /// signal; `EPERM` means the process exists but belongs to someone else.
    pub fn exists(&self, pid: Pid) -> bool {
        if pid <= 0 || !self.path.join(pid.to_string()).is_dir() {
            return false;
        }
        if !self.is_live_system() {
            return true;
        }

        match signal::kill(unistd::Pid::from_raw(pid), None) {
            Ok(()) | Err(Errno::EPERM) => true,
            Err(_) => false,
        }
    }
}

impl ParentLookup for ProcRoot {
    fn parent_of(&self, pid: Pid) -> Option<Pid> {
        match self.ppid(pid) {
            Ok(ppid) => Some(ppid),
            Err(e) => {
                debug!(pid, error = %e, "parent lookup failed");
                None
            }
        }
    }
}
