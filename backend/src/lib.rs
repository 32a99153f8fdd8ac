//! Process tree introspection library for Linux.
//!
//! Provides a small pid set, child and descendant discovery, ancestor checks,
//! and readers for a process's command line, environment and memory use.
//! Uses `procfs` and `nix` for system interaction.

mod ancestry;
mod descendants;
mod int_set;
mod process_info;
mod process_list;
mod types;

pub use ancestry::is_ancestor;
pub use descendants::{collect_descendants, ParentLookup};
pub use int_set::{Cursor, IntSet, Step, MATCH_BUCKETS, SYSTEM_BUCKETS};
pub use process_info::{format_cmdline, MemoryUnit};
pub use process_list::{ProcRoot, DEFAULT_PROC_ROOT};
pub use types::{IntSetError, MemoryInfo, Pid, ProcError, INIT_PID};
