//! `commsplit`: interposition library that partitions a single
//! `MPI_COMM_WORLD` into independent per-application sub-communicators.
//!
//! Preload this ahead of the real MPI implementation (`LD_PRELOAD`). Every
//! exported `MPI_*` symbol below shadows the real implementation's entry
//! point of the same name; each one translates `MPI_COMM_WORLD` to a
//! per-process split communicator and forwards to the profiling (`PMPI_*`)
//! twin. See `src/init.rs` for the bootstrap protocol and `src/shadow/` for
//! the substitution table.
#![allow(non_snake_case)]

pub mod config;
pub mod error;
pub mod flags;
pub mod init;
pub mod logging;
pub mod resolve;
pub mod shadow;
pub mod shaper;
pub mod signals;
pub mod state;
