//! Comm substitution table (C5).
//!
//! Every MPI entry point that takes one or more communicator arguments gets
//! a shadowing definition here. Each shadow translates its communicator
//! argument(s) through [`crate::state::translate`] — `MPI_COMM_WORLD` becomes
//! the per-process split communicator, anything else passes through
//! unchanged — then forwards to the `PMPI_*` twin and returns its status
//! unchanged.
//!
//! The table itself ([`table`]) is generated by two small macros rather than
//! hand-written: [`shadow_fn`] for the common case (translate one or more
//! named communicator arguments, forward everything), and [`passthrough_fn`]
//! for the two entry points that must NOT translate their communicator —
//! `MPI_Comm_free` and `MPI_Comm_disconnect` never substitute `SPLIT_COMM`
//! into a free path, since the split communicator is library-owned and
//! freed only by the finalize orchestrator in [`crate::init`].

/// Define a shadowed MPI entry point that translates one or more of its
/// communicator arguments before forwarding to the named `PMPI_*` twin.
///
/// ```ignore
/// shadow_fn! {
///     fn MPI_Send(buf: *const c_void, count: c_int, datatype: MPI_Datatype,
///                 dest: c_int, tag: c_int, comm: MPI_Comm) -> c_int
///         => PMPI_Send [comm];
/// }
/// ```
macro_rules! shadow_fn {
    ($(
        fn $name:ident($($arg:ident : $ty:ty),* $(,)?) -> c_int
            => $pmpi:ident [$($comm:ident),+ $(,)?];
    )*) => {
        $(
            #[no_mangle]
            pub unsafe extern "C" fn $name($($arg: $ty),*) -> c_int {
                $(
                    let $comm = $crate::state::translate($comm);
                )+
                commsplit_sys::$pmpi($($arg),*)
            }
        )*
    };
}

/// Define a shadowed MPI entry point that forwards every argument to its
/// `PMPI_*` twin unchanged — no communicator translation. Used only for the
/// two entry points that release a communicator handle.
macro_rules! passthrough_fn {
    ($(
        fn $name:ident($($arg:ident : $ty:ty),* $(,)?) -> c_int => $pmpi:ident;
    )*) => {
        $(
            #[no_mangle]
            pub unsafe extern "C" fn $name($($arg: $ty),*) -> c_int {
                commsplit_sys::$pmpi($($arg),*)
            }
        )*
    };
}

pub(crate) use passthrough_fn;
pub(crate) use shadow_fn;

mod table;
