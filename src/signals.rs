//! Signal handling (C3): optional `SIGSEGV`/`SIGABRT` handlers, and an
//! `atexit` hook that can force the process exit code to zero.
//!
//! Everything a signal handler touches here is async-signal-safe: no
//! allocation, no `tracing`, no buffered I/O. Diagnostics go out through
//! `libc::write` on the raw stderr fd, exactly as the original `split.c`
//! handlers did with their own `write`-based `EXIT_PRINT`/`DEBUG_PRINT`
//! macros — the whole point of installing these instead of trusting the
//! default disposition is to say *which* signal fired before the process
//! goes down or pauses, without reintroducing the unsafety a formatting
//! call would bring into a handler.

use std::os::raw::c_int;

use crate::flags;

/// Install the handlers requested via [`flags::ignore_segv`] /
/// [`flags::ignore_abrt`], and the exit-code override requested via
/// [`flags::ignore_return_code`]. Called once from the init orchestrator.
pub fn install() {
    if flags::ignore_segv() {
        install_one(libc::SIGSEGV, segv_handler);
    }
    if flags::ignore_abrt() {
        install_one(libc::SIGABRT, abrt_handler);
    }
    if flags::ignore_return_code() {
        unsafe {
            libc::atexit(force_exit_zero);
        }
    }
}

/// Install `handler` for `signum`, warning (non-fatal) if the underlying
/// `signal(2)` call fails — per the bootstrap protocol's error-handling
/// design, a failed signal install leaves the process running without the
/// protective handler rather than aborting the whole partition.
fn install_one(signum: c_int, handler: extern "C" fn(c_int)) {
    unsafe {
        if libc::signal(signum, handler as libc::sighandler_t) == libc::SIG_ERR {
            tracing::warn!(
                signal = signum,
                "failed to install signal handler, continuing without it"
            );
        }
    }
}

/// Write a fixed, preformatted message to stderr. No formatting, no
/// allocation: safe to call from within a signal handler.
fn write_stderr(message: &[u8]) {
    unsafe {
        libc::write(libc::STDERR_FILENO, message.as_ptr().cast(), message.len());
    }
}

extern "C" fn segv_handler(_signum: c_int) {
    write_stderr(b"commsplit: caught SIGSEGV\n");
    finish_signal(libc::SIGSEGV);
}

extern "C" fn abrt_handler(_signum: c_int) {
    write_stderr(b"commsplit: caught SIGABRT\n");
    finish_signal(libc::SIGABRT);
}

/// Shared tail of both handlers. Three variants, matching the original
/// implementation's `*Handler`/`*HandlerPause` split plus the `SIG_DFL`
/// reset:
/// - plain: best-effort `MPI_Finalize`, then exit with success — a fault in
///   one application must not propagate a nonzero status into the shared
///   world;
/// - `SIG_PAUSE`: skip cleanup entirely and pause forever, so a debugger can
///   attach to the faulting process as it was at the moment of the signal;
/// - `SIG_DFL`: restore the default disposition first, so a second fault
///   (e.g. inside `MPI_Finalize` itself) terminates the process normally
///   instead of recursing into this handler, then proceed with the same
///   finalize-and-exit-success tail as the plain case.
///
/// Flag lookups are async-signal-unsafe in the general case (they read
/// environment storage that could in principle be touched concurrently),
/// but match the original's own approach of consulting process-global flags
/// from within the handler; the flags are fixed by the time these handlers
/// are installed and never mutated afterward. `MPI_Finalize` itself is only
/// best-effort cleanup here, exactly as the original's handler comment
/// notes ("Cleanup operations have been problematic so are skipped" for
/// anything beyond this single call).
fn finish_signal(signum: c_int) {
    if flags::sig_pause() {
        write_stderr(b"commsplit: pausing for debugger attach\n");
        loop {
            unsafe {
                libc::pause();
            }
        }
    }

    if flags::sig_dfl() {
        unsafe {
            libc::signal(signum, libc::SIG_DFL);
        }
    }

    unsafe {
        commsplit_sys::PMPI_Finalize();
        libc::_exit(0);
    }
}

/// `atexit` hook for `IGNORE_RETURN_CODE`: if the application exits (by
/// `exit()` or falling off `main`) without ever finalizing MPI, finalize it
/// here before forcing the exit status to zero — an unfinalized rank looks
/// abnormal to the runtime and aborts the whole world, which is exactly what
/// this flag exists to prevent. Safe to call `MPI_Finalize` from an `atexit`
/// hook (unlike a signal handler): it runs in normal process context, not a
/// signal frame.
extern "C" fn force_exit_zero() {
    unsafe {
        let mut finalized: c_int = 0;
        commsplit_sys::MPI_Finalized(&mut finalized);
        if finalized == 0 {
            commsplit_sys::PMPI_Finalize();
        }
        libc::_exit(0);
    }
}
