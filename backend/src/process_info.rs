//! Per-process details: command line, environment and memory residency.

use crate::process_list::ProcRoot;
use crate::types::{MemoryInfo, Pid, ProcError};
use std::ffi::OsStr;
use std::fmt::Write as _;

const HEADER_RULE: &str = "----------------------------------------";
const FOOTER_RULE: &str = "========================================";

impl ProcRoot {
    /// Arguments `pid` was started with. Empty for kernel threads.
    pub fn cmdline(&self, pid: Pid) -> Result<Vec<String>, ProcError> {
        self.process(pid)?
            .cmdline()
            .map_err(|e| ProcError::for_pid(pid, e))
    }

    /// Value of `name` in the environment `pid` was started with.
    pub fn environ_var(&self, pid: Pid, name: &str) -> Result<Option<String>, ProcError> {
        let environ = self
            .process(pid)?
            .environ()
            .map_err(|e| ProcError::for_pid(pid, e))?;

        Ok(environ
            .get(OsStr::new(name))
            .map(|value| value.to_string_lossy().into_owned()))
    }

    /// Resident memory figures of `pid`.
    pub fn memory_info(&self, pid: Pid) -> Result<MemoryInfo, ProcError> {
        let status = self
            .process(pid)?
            .status()
            .map_err(|e| ProcError::for_pid(pid, e))?;

        Ok(MemoryInfo {
            pid,
            name: status.name,
            rss_anon: status.rssanon,
            rss_file: status.rssfile,
            rss_shmem: status.rssshmem,
            vm_rss: status.vmrss,
        })
    }
}

/// Joins command line arguments for display.
///
/// With `quote` set every argument is wrapped in double quotes, with `"` and
/// `\` inside it escaped by a backslash.
pub fn format_cmdline(args: &[String], quote: bool) -> String {
    if !quote {
        return args.join(" ");
    }

    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push('"');
        for c in arg.chars() {
            if c == '"' || c == '\\' {
                out.push('\\');
            }
            out.push(c);
        }
        out.push('"');
    }
    out
}

/// Unit used when printing memory sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemoryUnit {
    #[default]
    Kilobytes,
    /// 1000 kB.
    Megabytes,
}

impl MemoryUnit {
    pub fn label(self) -> &'static str {
        match self {
            MemoryUnit::Kilobytes => "kB",
            MemoryUnit::Megabytes => "mB",
        }
    }

    pub fn convert(self, kb: u64) -> f64 {
        match self {
            MemoryUnit::Kilobytes => kb as f64,
            MemoryUnit::Megabytes => kb as f64 / 1000.0,
        }
    }

    fn format(self, kb: u64) -> String {
        match self {
            MemoryUnit::Kilobytes => kb.to_string(),
            MemoryUnit::Megabytes => format!("{:.3}", self.convert(kb)),
        }
    }
}

impl MemoryInfo {
    /// Renders the RSS report block for this process.
    pub fn render(&self, unit: MemoryUnit) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Memory info for pid: {} ( {} )", self.pid, self.name);
        let _ = writeln!(out, "{HEADER_RULE}");

        let fields = [
            ("RssAnon:", self.rss_anon),
            ("RssFile:", self.rss_file),
            ("RssShmem:", self.rss_shmem),
            ("VmRSS:", self.vm_rss),
        ];
        for (label, value) in fields {
            if let Some(kb) = value {
                let _ = writeln!(out, "{label:<10}{:>12} {}", unit.format(kb), unit.label());
            }
        }

        let _ = writeln!(out, "{FOOTER_RULE}");
        out
    }
}
