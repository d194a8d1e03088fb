//! Process-wide state: the split communicator.
//!
//! `SPLIT_COMM` is inherently global — the interposition API is positional,
//! so there is no per-call handle to hang context off. This module is the
//! single place that is allowed to write it: installed once by the init
//! orchestrator, read by every shadowed entry point, torn down once by the
//! finalize orchestrator.

use std::sync::RwLock;

use commsplit_sys::MPI_Comm;
use once_cell::sync::Lazy;

/// The library-owned split communicator, behind a lock so that an
/// `MPI_THREAD_MULTIPLE` application calling shadowed entry points from
/// several threads at once sees a consistent value. Modeled the same way
/// the upstream communicator-attribute cache does it: a `Lazy<RwLock<_>>`
/// static rather than `lazy_static!` or unsafe `static mut`.
static SPLIT_COMM: Lazy<RwLock<MPI_Comm>> =
    Lazy::new(|| RwLock::new(unsafe { commsplit_sys::MPI_COMM_NULL }));

/// True once [`install`] has run and before [`teardown`] has run.
pub fn is_installed() -> bool {
    let guard = SPLIT_COMM.read().expect("SPLIT_COMM lock poisoned");
    *guard != unsafe { commsplit_sys::MPI_COMM_NULL }
}

/// Read the current split communicator (the null sentinel before init
/// finishes and after finalize runs).
pub fn get() -> MPI_Comm {
    *SPLIT_COMM.read().expect("SPLIT_COMM lock poisoned")
}

/// Install the split communicator. Called exactly once, from the init
/// orchestrator, after a successful `PMPI_Comm_split`.
pub fn install(comm: MPI_Comm) {
    let mut guard = SPLIT_COMM.write().expect("SPLIT_COMM lock poisoned");
    *guard = comm;
}

/// Clear the split communicator, returning whatever value it held. Called
/// exactly once, from the finalize orchestrator, before freeing the handle.
pub fn teardown() -> MPI_Comm {
    let mut guard = SPLIT_COMM.write().expect("SPLIT_COMM lock poisoned");
    std::mem::replace(&mut *guard, unsafe { commsplit_sys::MPI_COMM_NULL })
}

/// The substitution rule: translate `WORLD` to the split communicator,
/// forward every other handle untouched. This is the one place "is this
/// the world communicator" gets decided, shared by every shadow in
/// [`crate::shadow`] and by the `comm_free`/`comm_disconnect` exemption.
pub fn translate(comm: MPI_Comm) -> MPI_Comm {
    if comm == unsafe { commsplit_sys::MPI_COMM_WORLD } {
        get()
    } else {
        comm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // These tests share the single process-wide `SPLIT_COMM`, so they must
    // run sequentially; `cargo test` runs them on one thread by default
    // within a binary but to be safe we serialize explicitly.
    static TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    #[test]
    fn install_get_teardown_lifecycle() {
        let _guard = TEST_LOCK.lock().unwrap();
        let null = unsafe { commsplit_sys::MPI_COMM_NULL };
        assert_eq!(get(), null);
        assert!(!is_installed());

        let fake_split = unsafe { commsplit_sys::MPI_COMM_SELF };
        install(fake_split);
        assert_eq!(get(), fake_split);
        assert!(is_installed());

        let torn_down = teardown();
        assert_eq!(torn_down, fake_split);
        assert_eq!(get(), null);
        assert!(!is_installed());
    }

    #[test]
    fn translate_rewrites_only_world() {
        let _guard = TEST_LOCK.lock().unwrap();
        let world = unsafe { commsplit_sys::MPI_COMM_WORLD };
        let self_comm = unsafe { commsplit_sys::MPI_COMM_SELF };
        install(self_comm);

        assert_eq!(translate(world), self_comm);
        assert_eq!(translate(self_comm), self_comm);

        teardown();
    }
}
