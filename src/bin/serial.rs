//! `commsplit-serial`: runs a single non-MPI executable as one rank of an
//! otherwise-MPI job, staying synchronized with the rest of the job via its
//! own `MPI_Init`/`MPI_Finalize` pair.
//!
//! Deployed the same way as any other application in a partitioned job —
//! under the same job-wide `LD_PRELOAD` — so the `MPI_Init`/`MPI_Finalize`
//! calls below are ordinary calls into [`commsplit_sys`], but when this
//! process is itself running under the interposition library, the dynamic
//! loader resolves them to the shadows in [`commsplit::init`] first, same as
//! it would for any other rank. This binary never links against `commsplit`
//! for its MPI calls; it only borrows [`commsplit::flags`]'s environment
//! variable name so the two agree on what flag unsets the preload.

use std::env;
use std::ffi::CString;
use std::os::raw::c_int;

use commsplit::fatal;
use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::{execv, fork, ForkResult};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        fatal!("usage: commsplit-serial <executable> [args...]");
    }

    // Mirrors the original wrapper's rationale: forking while `LD_PRELOAD`
    // still points at this library confuses some MPI implementations, so
    // ask the shadowed `MPI_Init` (if this process is itself preloaded) to
    // drop it before returning.
    //
    // SAFETY: called before any other thread exists in this process.
    unsafe {
        env::set_var("WRAPRUN_UNSET_PRELOAD", "1");
    }

    // `MPI_Init(NULL, NULL)` is explicitly sanctioned by the standard; this
    // process's own argv is irrelevant to MPI, so there's nothing to gain by
    // forwarding it through.
    let mut mpi_status: c_int =
        unsafe { commsplit_sys::MPI_Init(std::ptr::null_mut(), std::ptr::null_mut()) };
    if mpi_status != commsplit_sys::MPI_SUCCESS as c_int {
        fatal!("MPI_Init failed with code {mpi_status}");
    }

    let target = CString::new(args[1].as_bytes()).expect("argv contains no NUL bytes");
    let child_args: Vec<CString> = args[1..]
        .iter()
        .map(|arg| CString::new(arg.as_bytes()).expect("argv contains no NUL bytes"))
        .collect();

    // SAFETY: single-threaded at this point, immediately followed by either
    // an `execv` (child) or a `waitpid` (parent).
    let exit_code = match unsafe { fork() } {
        Ok(ForkResult::Child) => match execv(target.as_c_str(), &child_args) {
            Ok(_) => unreachable!("execv only returns on failure"),
            Err(errno) => {
                eprintln!("Failed to launch executable: {errno}");
                std::process::exit(1);
            }
        },
        Ok(ForkResult::Parent { child }) => {
            let status = waitpid(child, None).expect("waitpid on serial child failed");
            let code = match status {
                WaitStatus::Exited(_, code) => code,
                WaitStatus::Signaled(_, signal, _) => 128 + signal as i32,
                _ => 1,
            };

            mpi_status = unsafe { commsplit_sys::MPI_Finalize() };
            if mpi_status != commsplit_sys::MPI_SUCCESS as c_int {
                fatal!("MPI_Finalize failed with code {mpi_status}");
            }
            code
        }
        Err(errno) => fatal!("fork failed: {errno}"),
    };

    std::process::exit(exit_code);
}
