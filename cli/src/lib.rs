//! Shared pieces of the pid tools: common options, logging setup and the
//! mapping of lookup outcomes onto exit statuses.

pub mod logging;
mod options;
mod status;

pub use options::{pid_parser, CommonOptions};
pub use status::{ancestry_status, join_pids, report_ancestry};
