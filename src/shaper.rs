//! Process shaping (C2): apply a [`crate::config::RankConfig`] to the
//! current process — change directory, set environment variables, and
//! optionally redirect stdout/stderr to per-color log files.
//!
//! Redirection goes through raw `dup2` on file descriptors 1 and 2 rather
//! than anything buffered on the Rust side, because the process being
//! shaped is almost always a C or Fortran MPI application that writes
//! through libc's buffered stdio — it needs the redirection to be visible
//! at the file-descriptor level, underneath whatever buffering libc itself
//! does.

use std::ffi::CString;
use std::io;
use std::os::unix::io::RawFd;
use std::path::Path;

use crate::config::RankConfig;
use crate::error::SplitError;

/// `chdir` into `config.work_dir`.
pub fn apply_work_dir(config: &RankConfig) -> Result<(), SplitError> {
    nix::unistd::chdir(Path::new(&config.work_dir)).map_err(|errno| SplitError::Os {
        action: "chdir",
        source: io::Error::from(errno),
    })
}

/// Apply every `(name, value)` pair in `config.env_assignments` with
/// `setenv` semantics (later assignments win on duplicate names).
pub fn apply_env_assignments(config: &RankConfig) -> Result<(), SplitError> {
    for (key, value) in &config.env_assignments {
        // SAFETY: called during single-threaded init, before the shadowed
        // `MPI_Init` hands control to application code.
        unsafe {
            std::env::set_var(key, value);
        }
    }
    Ok(())
}

/// Redirect fd 1 and fd 2 to `<job_id>_w_<color>.out` / `.err` in the
/// current working directory, in append mode, matching the original
/// implementation's `freopen` naming convention. Must run after
/// [`apply_work_dir`] so the files land in the per-rank directory.
pub fn redirect_stdout_stderr(job_id: &str, color: i32) -> Result<(), SplitError> {
    redirect_fd(1, &format!("{job_id}_w_{color}.out"))?;
    redirect_fd(2, &format!("{job_id}_w_{color}.err"))?;
    Ok(())
}

fn redirect_fd(fd: RawFd, file_name: &str) -> Result<(), SplitError> {
    let path = CString::new(file_name.as_bytes()).expect("file name contains no NUL bytes");
    let opened = nix::fcntl::open(
        path.as_c_str(),
        nix::fcntl::OFlag::O_WRONLY | nix::fcntl::OFlag::O_CREAT | nix::fcntl::OFlag::O_APPEND,
        nix::sys::stat::Mode::from_bits_truncate(0o644),
    )
    .map_err(|errno| SplitError::Os {
        action: "open redirect target",
        source: io::Error::from(errno),
    })?;

    nix::unistd::dup2(opened, fd).map_err(|errno| SplitError::Os {
        action: "dup2 onto stdout/stderr",
        source: io::Error::from(errno),
    })?;

    // The dup2 target now owns the fd; close the original descriptor
    // unless it happened to already be the target (dup2 is then a no-op
    // and closing would close the very descriptor we just redirected).
    if opened != fd {
        let _ = nix::unistd::close(opened);
    }

    Ok(())
}

/// Close the redirected stdout/stderr descriptors. Called from finalize,
/// mirroring the original implementation's `fclose(stdout)`/`fclose(stderr)`
/// — after this the application has no usable standard streams, but by this
/// point `MPI_Finalize` has already returned control past us, same as the C
/// version.
pub fn close_redirected_streams() {
    for fd in [1, 2] {
        let _ = nix::unistd::close(fd);
    }
}

/// The job identifier used in redirected log file names: `PBS_JOBID` if
/// present (the environment this was designed for), otherwise the current
/// process id, so redirection still works under a non-PBS scheduler.
pub fn job_id() -> String {
    std::env::var("PBS_JOBID").unwrap_or_else(|_| std::process::id().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RankConfig;

    #[test]
    fn apply_work_dir_changes_cwd() {
        let original = std::env::current_dir().unwrap();
        let tmp = std::env::temp_dir();
        let config = RankConfig {
            color: 0,
            work_dir: tmp.to_string_lossy().into_owned(),
            env_assignments: Vec::new(),
        };
        apply_work_dir(&config).unwrap();
        assert_eq!(
            std::fs::canonicalize(std::env::current_dir().unwrap()).unwrap(),
            std::fs::canonicalize(&tmp).unwrap()
        );
        std::env::set_current_dir(original).unwrap();
    }

    #[test]
    fn apply_work_dir_rejects_missing_directory() {
        let config = RankConfig {
            color: 0,
            work_dir: "/nonexistent/path/for/shaper/test".to_owned(),
            env_assignments: Vec::new(),
        };
        assert!(apply_work_dir(&config).is_err());
    }

    #[test]
    fn apply_env_assignments_sets_vars() {
        let config = RankConfig {
            color: 0,
            work_dir: ".".to_owned(),
            env_assignments: vec![("WRAPRUN_SHAPER_TEST".to_owned(), "hello".to_owned())],
        };
        apply_env_assignments(&config).unwrap();
        assert_eq!(std::env::var("WRAPRUN_SHAPER_TEST").unwrap(), "hello");
        std::env::remove_var("WRAPRUN_SHAPER_TEST");
    }

    #[test]
    fn job_id_falls_back_to_pid_without_pbs() {
        std::env::remove_var("PBS_JOBID");
        assert_eq!(job_id(), std::process::id().to_string());
    }
}
