//! Child and descendant discovery over a snapshot of live pids.

use crate::int_set::{IntSet, MATCH_BUCKETS};
use crate::types::{IntSetError, Pid};
use tracing::debug;

/// Answers "who is the parent of this pid".
///
/// `None` means the process no longer exists. Implemented for any
/// `Fn(Pid) -> Option<Pid>`, so tests and callers can pass a closure.
pub trait ParentLookup {
    fn parent_of(&self, pid: Pid) -> Option<Pid>;
}

impl<F> ParentLookup for F
where
    F: Fn(Pid) -> Option<Pid>,
{
    fn parent_of(&self, pid: Pid) -> Option<Pid> {
        self(pid)
    }
}

/// Collects the children of `roots` among the pids of `snapshot`.
///
/// With `recursive` set the result holds every descendant (children,
/// grandchildren, ...); otherwise only direct children. Each pid appears at
/// most once however many roots lead to it, and a pid is never expanded
/// twice, so cycles in the parent links cannot loop.
///
/// A candidate whose parent cannot be read (it exited mid-scan) is skipped.
/// The result is in set order; callers sort it for display.
pub fn collect_descendants<P>(
    roots: &[Pid],
    snapshot: &[Pid],
    recursive: bool,
    lookup: &P,
) -> Result<IntSet, IntSetError>
where
    P: ParentLookup + ?Sized,
{
    let mut root_set = IntSet::with_buckets(MATCH_BUCKETS)?;
    let mut unique_roots = Vec::with_capacity(roots.len());
    for &root in roots {
        if root_set.add(root)? {
            unique_roots.push(root);
        }
    }

    let mut parents = ParentCache::new(snapshot, lookup);
    let mut matched = IntSet::with_buckets(MATCH_BUCKETS)?;

    if recursive {
        for root in unique_roots {
            descend(root, snapshot, &mut parents, &mut matched)?;
        }
    } else {
        for (idx, &candidate) in snapshot.iter().enumerate() {
            if matched.contains(candidate) {
                continue;
            }
            if let Some(ppid) = parents.parent_at(idx) {
                if root_set.contains(ppid) {
                    matched.add(candidate)?;
                }
            }
        }
    }

    debug!(
        roots = roots.len(),
        candidates = snapshot.len(),
        matched = matched.len(),
        recursive,
        "descendant collection finished"
    );

    Ok(matched)
}

struct Frame {
    parent: Pid,
    next: usize,
}

/// Depth-first expansion of `root`.
///
/// Frames are kept on the heap so a long parent chain cannot overflow the
/// thread stack. Visiting order matches a recursive walk: a child is expanded
/// as soon as it is found, before the scan for its siblings resumes.
fn descend<P>(
    root: Pid,
    snapshot: &[Pid],
    parents: &mut ParentCache<'_, P>,
    matched: &mut IntSet,
) -> Result<(), IntSetError>
where
    P: ParentLookup + ?Sized,
{
    let mut stack = vec![Frame {
        parent: root,
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let parent = frame.parent;
        let found = (frame.next..snapshot.len()).find(|&idx| {
            !matched.contains(snapshot[idx]) && parents.parent_at(idx) == Some(parent)
        });

        match found {
            Some(idx) => {
                frame.next = idx + 1;
                let child = snapshot[idx];
                matched.add(child)?;
                stack.push(Frame {
                    parent: child,
                    next: 0,
                });
            }
            None => {
                stack.pop();
            }
        }
    }

    Ok(())
}

/// Parent of each snapshot entry, looked up at most once per run.
struct ParentCache<'a, P: ?Sized> {
    snapshot: &'a [Pid],
    lookup: &'a P,
    parents: Vec<Option<Option<Pid>>>,
}

impl<'a, P> ParentCache<'a, P>
where
    P: ParentLookup + ?Sized,
{
    fn new(snapshot: &'a [Pid], lookup: &'a P) -> Self {
        Self {
            snapshot,
            lookup,
            parents: vec![None; snapshot.len()],
        }
    }

    fn parent_at(&mut self, idx: usize) -> Option<Pid> {
        let pid = self.snapshot[idx];
        let lookup = self.lookup;
        *self.parents[idx].get_or_insert_with(|| {
            let parent = lookup.parent_of(pid);
            if parent.is_none() {
                debug!(pid, "process vanished during scan, skipping");
            }
            parent
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    const SNAPSHOT: [Pid; 4] = [10, 11, 12, 13];

    fn family() -> HashMap<Pid, Pid> {
        HashMap::from([(10, 1), (11, 10), (12, 10), (13, 11)])
    }

    fn sorted(set: IntSet) -> Vec<Pid> {
        let mut values = set.values();
        values.sort_unstable();
        values
    }

    #[test]
    fn direct_children_only() {
        let tree = family();
        let lookup = |pid: Pid| tree.get(&pid).copied();

        let found = collect_descendants(&[10], &SNAPSHOT, false, &lookup).unwrap();
        assert_eq!(sorted(found), vec![11, 12]);
    }

    #[test]
    fn transitive_closure() {
        let tree = family();
        let lookup = |pid: Pid| tree.get(&pid).copied();

        let found = collect_descendants(&[10], &SNAPSHOT, true, &lookup).unwrap();
        assert_eq!(sorted(found), vec![11, 12, 13]);
    }

    #[test]
    fn overlapping_roots_are_counted_once() {
        let tree = family();
        let lookup = |pid: Pid| tree.get(&pid).copied();

        let found = collect_descendants(&[10, 11], &SNAPSHOT, true, &lookup).unwrap();
        assert_eq!(found.len(), 3);
        assert_eq!(sorted(found), vec![11, 12, 13]);

        let found = collect_descendants(&[10, 11], &SNAPSHOT, false, &lookup).unwrap();
        assert_eq!(sorted(found), vec![11, 12, 13]);
    }

    #[test]
    fn duplicate_roots_are_processed_once() {
        let tree = family();
        let calls = Cell::new(0);
        let lookup = |pid: Pid| {
            calls.set(calls.get() + 1);
            tree.get(&pid).copied()
        };

        let found = collect_descendants(&[10, 10, 10], &SNAPSHOT, true, &lookup).unwrap();
        assert_eq!(sorted(found), vec![11, 12, 13]);
        assert!(calls.get() <= SNAPSHOT.len());
    }

    #[test]
    fn vanished_process_is_skipped() {
        let tree = family();
        let lookup = |pid: Pid| if pid == 13 { None } else { tree.get(&pid).copied() };

        let found = collect_descendants(&[10], &SNAPSHOT, true, &lookup).unwrap();
        assert_eq!(sorted(found), vec![11, 12]);
    }

    #[test]
    fn no_matches_is_an_empty_set() {
        let tree = family();
        let lookup = |pid: Pid| tree.get(&pid).copied();

        let found = collect_descendants(&[99], &SNAPSHOT, true, &lookup).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn parent_cycle_terminates() {
        let tree = HashMap::from([(20, 21), (21, 20), (22, 22)]);
        let lookup = |pid: Pid| tree.get(&pid).copied();

        let found = collect_descendants(&[20], &[20, 21, 22], true, &lookup).unwrap();
        assert_eq!(sorted(found), vec![20, 21]);

        let found = collect_descendants(&[22], &[20, 21, 22], true, &lookup).unwrap();
        assert_eq!(sorted(found), vec![22]);
    }

    #[test]
    fn long_parent_chain_is_fully_collected() {
        let snapshot: Vec<Pid> = (2..3_002).collect();
        let lookup = |pid: Pid| Some(pid - 1);

        let found = collect_descendants(&[1], &snapshot, true, &lookup).unwrap();
        assert_eq!(found.len(), snapshot.len());
    }

    #[test]
    fn negative_root_is_rejected() {
        let lookup = |_pid: Pid| Some(1);
        assert!(matches!(
            collect_descendants(&[-3], &SNAPSHOT, true, &lookup),
            Err(IntSetError::NegativeValue(-3))
        ));
    }

    #[test]
    fn recursive_result_is_in_discovery_set_order() {
        let tree = family();
        let lookup = |pid: Pid| tree.get(&pid).copied();

        let first = collect_descendants(&[10], &SNAPSHOT, true, &lookup).unwrap();
        let second = collect_descendants(&[10], &SNAPSHOT, true, &lookup).unwrap();
        assert_eq!(first.values(), second.values());
    }
}
