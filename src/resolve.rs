//! The `dlsym(RTLD_NEXT, ...)` escape hatch used by the `UNWRAP_INIT` /
//! `UNWRAP_FINALIZE` opt-ins.
//!
//! Normally the init orchestrator calls `PMPI_Init`/`PMPI_Finalize` —
//! distinct linker symbols from the `MPI_Init`/`MPI_Finalize` this crate
//! exports, so there is no risk of calling back into ourselves. Some MPI
//! implementations don't provide usable `PMPI_*` aliases in every build
//! configuration, though, so `UNWRAP_INIT`/`UNWRAP_FINALIZE` ask instead for
//! whatever `MPI_Init`/`MPI_Finalize` the dynamic loader would have
//! resolved if this library hadn't been preloaded — found by walking the
//! search order starting just after this object, via `RTLD_NEXT`.

use std::ffi::{c_void, CString};
use std::os::raw::{c_char, c_int};

type MpiInitFn = unsafe extern "C" fn(*mut c_int, *mut *mut *mut c_char) -> c_int;
type MpiInitThreadFn =
    unsafe extern "C" fn(*mut c_int, *mut *mut *mut c_char, c_int, *mut c_int) -> c_int;
type MpiFinalizeFn = unsafe extern "C" fn() -> c_int;

/// Look up `symbol` in whatever shared object the loader would have
/// resolved it from next, skipping this library itself. Returns `None` if
/// no further definition exists in the search order.
unsafe fn next_symbol(symbol: &str) -> Option<*mut c_void> {
    let name = CString::new(symbol).expect("symbol name contains no NUL bytes");
    let addr = libc::dlsym(libc::RTLD_NEXT, name.as_ptr());
    if addr.is_null() {
        None
    } else {
        Some(addr)
    }
}

/// Call the real `MPI_Init` found past this library in the dynamic loader's
/// search order. Falls back to the `PMPI_Init` binding if no further
/// `MPI_Init` is found (e.g. statically linked MPI) — never to
/// `commsplit_sys::MPI_Init`, which would just resolve back to this crate's
/// own shadowed `#[no_mangle] MPI_Init` and recurse forever.
pub unsafe fn real_mpi_init(argc: *mut c_int, argv: *mut *mut *mut c_char) -> c_int {
    match next_symbol("MPI_Init") {
        Some(addr) => {
            let func: MpiInitFn = std::mem::transmute(addr);
            func(argc, argv)
        }
        None => commsplit_sys::PMPI_Init(argc, argv),
    }
}

/// Call the real `MPI_Init_thread` found past this library in the dynamic
/// loader's search order, with the same fallback as [`real_mpi_init`].
pub unsafe fn real_mpi_init_thread(
    argc: *mut c_int,
    argv: *mut *mut *mut c_char,
    required: c_int,
    provided: *mut c_int,
) -> c_int {
    match next_symbol("MPI_Init_thread") {
        Some(addr) => {
            let func: MpiInitThreadFn = std::mem::transmute(addr);
            func(argc, argv, required, provided)
        }
        None => commsplit_sys::PMPI_Init_thread(argc, argv, required, provided),
    }
}

/// Call the real `MPI_Finalize` found past this library in the dynamic
/// loader's search order, with the same fallback as [`real_mpi_init`].
pub unsafe fn real_mpi_finalize() -> c_int {
    match next_symbol("MPI_Finalize") {
        Some(addr) => {
            let func: MpiFinalizeFn = std::mem::transmute(addr);
            func()
        }
        None => commsplit_sys::PMPI_Finalize(),
    }
}
