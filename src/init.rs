//! Init/finalize orchestrator (C4).
//!
//! Shadows the two MPI init entry points and `MPI_Finalize`, wiring together
//! the config reader (C1), signal/exit policy (C3), and process shaper (C2)
//! before splitting the world communicator and installing it in
//! [`crate::state`]. This is the one place in the crate that turns a
//! [`crate::error::SplitError`] into a diagnostic and a process exit — every
//! component below it stays a plain `Result`-returning function so it can be
//! unit-tested without an MPI runtime.

use std::os::raw::{c_char, c_int};

use commsplit_sys::{MPI_Comm, MPI_COMM_WORLD};

use crate::error::check_mpi;
use crate::{config, fatal, flags, resolve, shaper, signals, state};

/// Shadowed `MPI_Init`. Runs the real init first, then the bootstrap
/// protocol, then returns the real init's status unchanged.
///
/// # Safety
/// `argc`/`argv` must be valid as required by the MPI standard's `MPI_Init`.
#[no_mangle]
pub unsafe extern "C" fn MPI_Init(argc: *mut c_int, argv: *mut *mut *mut c_char) -> c_int {
    crate::logging::init();

    if flags::unset_preload() {
        std::env::remove_var("LD_PRELOAD");
    }

    let return_value = if flags::unwrap_init() {
        tracing::debug!("WRAPRUN_UNWRAP_INIT set, resolving next MPI_Init via dlsym");
        resolve::real_mpi_init(argc, argv)
    } else {
        commsplit_sys::PMPI_Init(argc, argv)
    };

    bootstrap_partition();
    return_value
}

/// Shadowed `MPI_Init_thread`. Same bootstrap protocol as [`MPI_Init`].
///
/// # Safety
/// Arguments must be valid as required by the MPI standard's
/// `MPI_Init_thread`.
#[no_mangle]
pub unsafe extern "C" fn MPI_Init_thread(
    argc: *mut c_int,
    argv: *mut *mut *mut c_char,
    required: c_int,
    provided: *mut c_int,
) -> c_int {
    crate::logging::init();

    if flags::unset_preload() {
        std::env::remove_var("LD_PRELOAD");
    }

    let return_value = if flags::unwrap_init() {
        tracing::debug!("WRAPRUN_UNWRAP_INIT set, resolving next MPI_Init_thread via dlsym");
        resolve::real_mpi_init_thread(argc, argv, required, provided)
    } else {
        commsplit_sys::PMPI_Init_thread(argc, argv, required, provided)
    };

    bootstrap_partition();
    return_value
}

/// Read this process's configuration, shape it, and split the world
/// communicator. Any failure here is fatal: there is no sensible way for a
/// shadowed call made moments later to observe a half-initialized partition.
fn bootstrap_partition() {
    let rank = query_world_rank();
    let identity = flags::rank_from_env().unwrap_or(rank as usize);

    let config_path = match flags::config_file() {
        Some(path) => path,
        None => fatal!("WRAPRUN_FILE environment variable not set, exiting"),
    };

    let rank_config = match config::read_rank_config(&config_path, identity) {
        Ok(cfg) => cfg,
        Err(err) => fatal!("{err}"),
    };

    signals::install();

    if let Err(err) = shaper::apply_work_dir(&rank_config) {
        fatal!("{err}");
    }

    if flags::redirect_outerr() {
        let job_id = shaper::job_id();
        if let Err(err) = shaper::redirect_stdout_stderr(&job_id, rank_config.color) {
            fatal!("{err}");
        }
    }

    if let Err(err) = shaper::apply_env_assignments(&rank_config) {
        fatal!("{err}");
    }

    let split = split_world(rank_config.color);
    state::install(split);
}

fn query_world_rank() -> c_int {
    let mut rank: c_int = 0;
    let status = unsafe { commsplit_sys::PMPI_Comm_rank(MPI_COMM_WORLD, &mut rank) };
    if let Err(err) = check_mpi("PMPI_Comm_rank", status) {
        fatal!("{err}");
    }
    rank
}

/// Split `MPI_COMM_WORLD` by `color`, key `0` — preserving world-rank order
/// within each partition, per the bootstrap protocol's ordering invariant.
fn split_world(color: i32) -> MPI_Comm {
    let mut split: MPI_Comm = unsafe { commsplit_sys::MPI_COMM_NULL };
    let status = unsafe { commsplit_sys::PMPI_Comm_split(MPI_COMM_WORLD, color, 0, &mut split) };
    if let Err(err) = check_mpi("PMPI_Comm_split", status) {
        fatal!("{err}");
    }
    split
}

/// Shadowed `MPI_Finalize`. Frees the split communicator (if installed),
/// finalizes the underlying runtime unless it's already finalized, then
/// closes any redirected standard streams.
///
/// # Safety
/// Must be called at most once by the application, as required by the MPI
/// standard's `MPI_Finalize`.
#[no_mangle]
pub unsafe extern "C" fn MPI_Finalize() -> c_int {
    if state::is_installed() {
        let mut split = state::teardown();
        let status = commsplit_sys::PMPI_Comm_free(&mut split);
        if let Err(err) = check_mpi("PMPI_Comm_free", status) {
            fatal!("{err}");
        }
    }

    let mut finalized: c_int = 0;
    commsplit_sys::MPI_Finalized(&mut finalized);

    let return_value = if finalized != 0 {
        0
    } else if flags::unwrap_finalize() {
        tracing::debug!("WRAPRUN_UNWRAP_FINALIZE set, resolving next MPI_Finalize via dlsym");
        resolve::real_mpi_finalize()
    } else {
        commsplit_sys::PMPI_Finalize()
    };

    if flags::redirect_outerr() {
        shaper::close_redirected_streams();
    }

    return_value
}
