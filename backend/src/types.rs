//! Data types and error definitions for process introspection.

use std::collections::TryReserveError;
use thiserror::Error;

/// A process identifier as the kernel reports it.
pub type Pid = i32;

/// Pid of the process every orphan is reparented to.
pub const INIT_PID: Pid = 1;

/// Resident memory figures of one process, as listed in `/proc/<pid>/status`.
///
/// All sizes are in kB. Fields are `None` when the kernel does not report
/// them, which is the case for kernel threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryInfo {
    pub pid: Pid,
    pub name: String,
    pub rss_anon: Option<u64>,
    pub rss_file: Option<u64>,
    pub rss_shmem: Option<u64>,
    pub vm_rss: Option<u64>,
}

/// Errors that can occur while reading process state.
#[derive(Error, Debug)]
pub enum ProcError {
    #[error("Permission denied for PID {0}")]
    PermissionDenied(Pid),
    #[error("Process {0} not found")]
    NotFound(Pid),
    #[error("Process {0} disappeared while checking")]
    Vanished(Pid),
    #[error("Other error: {0}")]
    Other(String),
    #[error("Procfs error: {0}")]
    ProcfsError(String),
    #[error(transparent)]
    IntSet(#[from] IntSetError),
}

impl ProcError {
    /// Converts a procfs error raised while reading `pid`, keeping the pid
    /// for the common not-found and permission cases.
    pub(crate) fn for_pid(pid: Pid, err: procfs::ProcError) -> Self {
        match err {
            procfs::ProcError::NotFound(_) => ProcError::NotFound(pid),
            procfs::ProcError::PermissionDenied(_) => ProcError::PermissionDenied(pid),
            other => ProcError::ProcfsError(other.to_string()),
        }
    }
}

impl From<procfs::ProcError> for ProcError {
    fn from(err: procfs::ProcError) -> Self {
        ProcError::ProcfsError(err.to_string())
    }
}

/// Errors raised by [`IntSet`](crate::IntSet).
#[derive(Error, Debug)]
pub enum IntSetError {
    #[error("Bucket count must be at least 1, got {0}")]
    InvalidBucketCount(usize),
    #[error("Failed to allocate bucket storage: {0}")]
    Allocation(#[from] TryReserveError),
    #[error("Negative value {0} cannot be stored")]
    NegativeValue(i32),
}
