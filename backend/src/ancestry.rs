//! Ancestor checks by walking parent links upward.

use crate::int_set::{IntSet, MATCH_BUCKETS};
use crate::process_list::ProcRoot;
use crate::types::{Pid, ProcError, INIT_PID};
use tracing::warn;

/// Whether `ancestor` is the parent, grandparent, ... of `descendant`.
///
/// `ppid` looks up the parent of a pid. The walk stops at [`INIT_PID`].
///
/// Errors with [`ProcError::NotFound`] if `descendant` does not exist, and
/// with [`ProcError::Vanished`] if a process on the way up exits before its
/// parent could be read. A pid showing up twice on the walk ends it with
/// `false`.
pub fn is_ancestor<F>(ancestor: Pid, descendant: Pid, mut ppid: F) -> Result<bool, ProcError>
where
    F: FnMut(Pid) -> Result<Pid, ProcError>,
{
    let mut cur = ppid(descendant)?;
    if cur == ancestor {
        return Ok(true);
    }

    let mut seen = IntSet::with_buckets(MATCH_BUCKETS)?;
    seen.add(descendant)?;

    while cur != INIT_PID {
        if !seen.add(cur)? {
            warn!(pid = cur, "parent chain loops back on itself");
            return Ok(false);
        }

        let prev = cur;
        cur = match ppid(cur) {
            Ok(parent) => parent,
            Err(ProcError::NotFound(_)) => return Err(ProcError::Vanished(prev)),
            Err(e) => return Err(e),
        };

        if cur == ancestor {
            return Ok(true);
        }
    }

    Ok(false)
}

impl ProcRoot {
    /// [`is_ancestor`] against this proc filesystem.
    pub fn is_ancestor(&self, ancestor: Pid, descendant: Pid) -> Result<bool, ProcError> {
        is_ancestor(ancestor, descendant, |pid| self.ppid(pid))
    }
}
