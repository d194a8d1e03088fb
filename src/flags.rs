//! Recognized environment-variable opt-ins.
//!
//! Every flag here is presence-only (its value is ignored, only whether the
//! variable is set) with one deliberate exception: [`rank_from_env`], which
//! pairs a presence flag with a companion value variable. The original
//! implementation conflated these — the launcher wrote the rank straight
//! into the presence flag's variable, while the init path read a second,
//! separate variable that the launcher never set. Kept apart here so both
//! sides agree on what they're reading and writing.

use std::env;

fn is_set(name: &str) -> bool {
    env::var_os(name).is_some()
}

/// Clear `LD_PRELOAD` before returning from `MPI_Init`/`MPI_Init_thread`.
/// Set by the serial wrapper, which forks its target executable right after
/// `MPI_Init` returns — some MPI implementations misbehave across `fork`
/// when `LD_PRELOAD` is still pointing at this library.
pub fn unset_preload() -> bool {
    is_set("WRAPRUN_UNSET_PRELOAD")
}

/// Resolve and call the real `MPI_Init`/`MPI_Init_thread` via
/// [`crate::resolve`] instead of `PMPI_Init`/`PMPI_Init_thread`.
pub fn unwrap_init() -> bool {
    is_set("WRAPRUN_UNWRAP_INIT")
}

/// Resolve and call the real `MPI_Finalize` via [`crate::resolve`] instead
/// of `PMPI_Finalize`.
pub fn unwrap_finalize() -> bool {
    is_set("WRAPRUN_UNWRAP_FINALIZE")
}

/// Install a `SIGSEGV` handler.
pub fn ignore_segv() -> bool {
    is_set("WRAPRUN_IGNORE_SEGV")
}

/// Install a `SIGABRT` handler.
pub fn ignore_abrt() -> bool {
    is_set("WRAPRUN_IGNORE_ABRT")
}

/// The installed signal handler should report the signal, then pause the
/// process (so a debugger can attach) instead of exiting.
pub fn sig_pause() -> bool {
    is_set("WRAPRUN_SIG_PAUSE")
}

/// The installed signal handler should report the signal, then re-raise it
/// with `SIG_DFL` restored, instead of calling `_exit` directly.
pub fn sig_dfl() -> bool {
    is_set("WRAPRUN_SIG_DFL")
}

/// Install an `atexit` hook that forces the process exit code to zero.
pub fn ignore_return_code() -> bool {
    is_set("WRAPRUN_IGNORE_RETURN_CODE")
}

/// Redirect stdout/stderr to per-color log files before handing control to
/// the application.
pub fn redirect_outerr() -> bool {
    is_set("WRAPRUN_REDIRECT_OUTERR")
}

/// This rank's identity comes from an environment variable rather than
/// `MPI_Comm_rank(MPI_COMM_WORLD, ...)` — set by the launcher, which knows
/// the per-application index before the application has called `MPI_Init`.
///
/// Returns the parsed index when the presence flag and its companion value
/// variable are both set and the value parses as a `usize`; `None` when the
/// presence flag is absent, meaning the caller should fall back to querying
/// MPI directly.
pub fn rank_from_env() -> Option<usize> {
    if !is_set("WRAPRUN_RANK_FROM_ENV") {
        return None;
    }
    env::var("WRAPRUN_ENV_RANK")
        .ok()
        .and_then(|value| value.parse().ok())
}

/// Path to the per-rank configuration file, read by [`crate::config`].
pub fn config_file() -> Option<String> {
    env::var("WRAPRUN_FILE").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // `std::env` is process-global; serialize tests that touch it.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn rank_from_env_absent_flag_is_none() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::remove_var("WRAPRUN_RANK_FROM_ENV");
        env::remove_var("WRAPRUN_ENV_RANK");
        assert_eq!(rank_from_env(), None);
    }

    #[test]
    fn rank_from_env_reads_companion_value() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var("WRAPRUN_RANK_FROM_ENV", "1");
        env::set_var("WRAPRUN_ENV_RANK", "3");
        assert_eq!(rank_from_env(), Some(3));
        env::remove_var("WRAPRUN_RANK_FROM_ENV");
        env::remove_var("WRAPRUN_ENV_RANK");
    }

    #[test]
    fn rank_from_env_flag_without_value_is_none() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var("WRAPRUN_RANK_FROM_ENV", "1");
        env::remove_var("WRAPRUN_ENV_RANK");
        assert_eq!(rank_from_env(), None);
        env::remove_var("WRAPRUN_RANK_FROM_ENV");
    }

    #[test]
    fn presence_only_flags_ignore_value() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var("WRAPRUN_IGNORE_SEGV", "0");
        assert!(ignore_segv());
        env::remove_var("WRAPRUN_IGNORE_SEGV");
        assert!(!ignore_segv());
    }
}
