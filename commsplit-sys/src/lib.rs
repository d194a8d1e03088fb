#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(missing_copy_implementations)]
#![allow(missing_docs)]

//! Raw FFI bindings to the host MPI installation's `MPI_*`/`PMPI_*` C API.
//!
//! Generated at build time by `bindgen` against whatever `mpi.h` is found by
//! [`build-probe-mpi`](../build_probe_mpi); see `build.rs`. Nothing here does
//! any translation or safety wrapping — that is `commsplit`'s job. In
//! particular, note that the `MPI_*` names bound here are the *real*
//! implementation's entry points as resolved by the linker at build time,
//! not `commsplit`'s own shadowing definitions of the same names; calling
//! `commsplit_sys::MPI_Init` from within `commsplit` itself would just call
//! back into `commsplit`'s own exported symbol. Use the `PMPI_*` bindings
//! (or the `resolve` module's `dlsym(RTLD_NEXT, …)` escape hatch) instead.

include!(concat!(env!("OUT_DIR"), "/bindings.rs"));

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::raw::c_int;

    #[test]
    fn mpi_success_is_zero() {
        let success: c_int = MPI_SUCCESS as c_int;
        assert_eq!(success, 0);
    }
}
