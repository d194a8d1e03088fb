//! `commsplit-launch`: fans out distinct executables across the ranks of a
//! single job, one `fork`/`execvp` per rank, so that a job can run several
//! different programs side by side under one `mpirun` invocation.
//!
//! Grammar (everything after the flags handled by [`Cli`]):
//!
//! ```text
//! N count_1 count_2 ... count_N :: app_1 arg arg :: app_2 arg :: ... ::
//! ```
//!
//! `N` is the number of applications sharing this node, `count_i` is how
//! many of this node's ranks run application `i`, and each `::`-delimited
//! segment after the first is one application's argv. A rank figures out
//! which application it owns by finding its own position among its
//! siblings — other copies of this same binary running on the same node —
//! sorted by pid, the same ordering `pidof` would have produced.

use std::collections::BTreeSet;
use std::env;
use std::ffi::CString;
use std::path::Path;
use std::thread;
use std::time::Duration;

use clap::Parser;
use commsplit::fatal;
use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::{execvp, fork, ForkResult, Pid};

#[derive(Parser)]
#[command(
    name = "commsplit-launch",
    version,
    about = "Fan out distinct executables across the ranks of one job"
)]
struct Cli {
    /// Emit debug-level logging regardless of RUST_LOG/COMMSPLIT_LOG.
    #[arg(short, long)]
    verbose: bool,

    /// N count_1 .. count_N :: app_1 args.. :: app_2 args.. :: ...
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<String>,
}

/// One `::`-delimited application segment: its executable and full argv
/// (including argv[0], i.e. the executable path itself).
struct AppSegment<'a> {
    argv: &'a [String],
}

fn main() {
    let cli = Cli::parse();
    if cli.verbose && env::var_os("RUST_LOG").is_none() {
        // SAFETY: single-threaded, before commsplit::logging::init() reads it.
        unsafe {
            env::set_var("COMMSPLIT_LOG", "debug");
        }
    }
    commsplit::logging::init();

    let (counts, segments) = parse_grammar(&cli.rest);
    let total_instances: usize = counts.iter().map(|&c| c as usize).sum();

    let my_pid = Pid::this();
    let siblings = wait_for_siblings(total_instances);
    let my_index = siblings
        .iter()
        .position(|&pid| pid == my_pid)
        .unwrap_or_else(|| fatal!("this process's pid did not appear among its own siblings"));

    let my_app_num = app_index_for(&counts, my_index);
    tracing::debug!(my_index, my_app_num, "resolved application index");

    let app = &segments[my_app_num];

    let child_status = match unsafe { fork() } {
        Ok(ForkResult::Child) => {
            if let Ok(preload) = env::var("WRAPRUN_PRELOAD") {
                // SAFETY: single-threaded, immediately before execvp.
                unsafe {
                    env::set_var("LD_PRELOAD", preload);
                    env::set_var("WRAPRUN_RANK_FROM_ENV", "1");
                    env::set_var("WRAPRUN_ENV_RANK", my_app_num.to_string());
                }
            } else {
                tracing::warn!("WRAPRUN_PRELOAD not set, launching without LD_PRELOAD");
            }

            let path = CString::new(app.argv[0].as_bytes()).expect("argv contains no NUL bytes");
            let argv: Vec<CString> = app
                .argv
                .iter()
                .map(|arg| CString::new(arg.as_bytes()).expect("argv contains no NUL bytes"))
                .collect();

            match execvp(&path, &argv) {
                Ok(_) => unreachable!("execvp only returns on failure"),
                Err(errno) => {
                    eprintln!("Failed execvp with err={errno}!");
                    std::process::exit(1);
                }
            }
        }
        Ok(ForkResult::Parent { child }) => {
            let status = waitpid(child, None).expect("waitpid on launched child failed");
            match status {
                WaitStatus::Exited(_, code) => code,
                WaitStatus::Signaled(_, signal, _) => 128 + signal as i32,
                _ => 1,
            }
        }
        Err(errno) => fatal!("fork failed: {errno}"),
    };

    std::process::exit(child_status);
}

/// Parse `N count_1 .. count_N :: app_1 args.. :: ... ::` into the per-app
/// instance counts and the argv of each `::`-delimited application segment.
fn parse_grammar(rest: &[String]) -> (Vec<i32>, Vec<AppSegment<'_>>) {
    if rest.is_empty() {
        fatal!("usage: commsplit-launch N count1 .. countN :: app1 args.. :: ... ::");
    }

    let entries: usize = rest[0]
        .parse()
        .unwrap_or_else(|_| fatal!("first argument must be the number of applications"));

    if rest.len() < 1 + entries {
        fatal!("expected {entries} per-application counts, got fewer arguments");
    }

    let counts: Vec<i32> = rest[1..1 + entries]
        .iter()
        .map(|raw| {
            raw.parse()
                .unwrap_or_else(|_| fatal!("invalid instance count {raw:?}"))
        })
        .collect();

    // Skip the leading "::" that separates the count header from the app
    // segments; everything after it is `app arg arg :: app arg :: ... ::`.
    let body = &rest[1 + entries..];
    let body = match body.first() {
        Some(marker) if marker == "::" => &body[1..],
        _ => fatal!("expected '::' after the per-application counts"),
    };

    let mut segments = Vec::with_capacity(entries);
    let mut start = 0;
    for (i, token) in body.iter().enumerate() {
        if token == "::" {
            if start < i {
                segments.push(AppSegment {
                    argv: &body[start..i],
                });
            }
            start = i + 1;
        }
    }

    if segments.len() != entries {
        fatal!(
            "expected {entries} '::'-delimited application segments, found {}",
            segments.len()
        );
    }

    (counts, segments)
}

/// Which application index owns sibling position `my_index`, given the
/// per-application instance counts (cumulative, in order).
fn app_index_for(counts: &[i32], my_index: usize) -> usize {
    let mut cumulative = 0usize;
    for (app_num, &count) in counts.iter().enumerate() {
        cumulative += count as usize;
        if my_index < cumulative {
            return app_num;
        }
    }
    fatal!("sibling index {my_index} exceeds the total instance count");
}

/// Poll `/proc` for every process sharing this executable's own `comm`
/// name, until at least `expected` have appeared, then return them sorted
/// by pid — the same ordering `pidof` would produce, and the ordering the
/// per-application counts are defined against.
fn wait_for_siblings(expected: usize) -> Vec<Pid> {
    let my_comm = process_comm(Pid::this()).unwrap_or_else(|| fatal!("can't read own /proc comm"));

    loop {
        let mut siblings = BTreeSet::new();
        let entries = match std::fs::read_dir("/proc") {
            Ok(entries) => entries,
            Err(err) => fatal!("can't read /proc: {err}"),
        };

        for entry in entries.flatten() {
            let name = entry.file_name();
            let pid: i32 = match name.to_str().and_then(|s| s.parse().ok()) {
                Some(pid) => pid,
                None => continue,
            };
            let candidate = Pid::from_raw(pid);
            if process_comm(candidate).as_deref() == Some(my_comm.as_str()) {
                siblings.insert(pid);
            }
        }

        if siblings.len() >= expected {
            return siblings.into_iter().map(Pid::from_raw).collect();
        }

        thread::sleep(Duration::from_secs(1));
    }
}

fn process_comm(pid: Pid) -> Option<String> {
    let path = Path::new("/proc").join(pid.to_string()).join("comm");
    let raw = std::fs::read(path).ok()?;
    let text = std::str::from_utf8(raw.as_slice()).ok()?;
    Some(text.trim_end().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_two_application_grammar() {
        let rest = strs(&[
            "2", "2", "1", "::", "./a.out", "arg1", "::", "./b.out", "arg1", "arg2", "::",
        ]);
        let (counts, segments) = parse_grammar(&rest);
        assert_eq!(counts, vec![2, 1]);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].argv, &["./a.out".to_string(), "arg1".to_string()]);
        assert_eq!(
            segments[1].argv,
            &["./b.out".to_string(), "arg1".to_string(), "arg2".to_string()]
        );
    }

    #[test]
    fn app_index_maps_cumulative_counts() {
        let counts = vec![2, 3];
        assert_eq!(app_index_for(&counts, 0), 0);
        assert_eq!(app_index_for(&counts, 1), 0);
        assert_eq!(app_index_for(&counts, 2), 1);
        assert_eq!(app_index_for(&counts, 4), 1);
    }
}
