// Locates the host MPI installation and generates Rust bindings for its
// `MPI_*`/`PMPI_*` C API.

use std::{env, path::Path};

fn main() {
    let lib = match build_probe_mpi::probe() {
        Ok(lib) => lib,
        Err(errs) => {
            eprintln!("could not find an MPI installation:");
            for (i, err) in errs.iter().enumerate() {
                eprintln!("  reason #{i}: {err}");
            }
            panic!("no usable MPI library found (set $MPICC, or install mpich/openmpi dev packages)");
        }
    };

    for dir in &lib.lib_paths {
        println!("cargo:rustc-link-search=native={}", dir.display());
    }
    for l in &lib.libs {
        println!("cargo:rustc-link-lib={l}");
    }

    let mut builder = bindgen::builder().header("wrapper.h");
    for dir in &lib.include_paths {
        builder = builder.clang_arg(format!("-I{}", dir.display()));
    }

    // MPI opaque handles: treat them as distinct new types rather than
    // whatever their underlying repr happens to be (an int for MPICH, a
    // pointer for Open MPI), so `MPI_Comm` equality below is meaningful.
    let mpi_opaque_types =
        "MPI_(Comm|Datatype|Errhandler|Group|Info|Message|Op|Request|Session|Win|File)";

    let bindings = builder
        .new_type_alias(mpi_opaque_types)
        .derive_partialeq(true)
        .derive_copy(true)
        .allowlist_function("P?MPI_.*")
        .allowlist_function("PMPIX_.*")
        .allowlist_function("MPIX_.*")
        .allowlist_var("MPI_.*")
        .generate()
        .expect("failed generating MPI bindings with bindgen");

    let out_dir = env::var("OUT_DIR").expect("cargo did not set OUT_DIR");
    bindings
        .write_to_file(Path::new(&out_dir).join("bindings.rs"))
        .expect("failed writing generated MPI bindings to OUT_DIR");

    println!("cargo:rerun-if-changed=wrapper.h");
}
