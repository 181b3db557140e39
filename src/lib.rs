// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! CPU side of a GPU marching-cubes "color blob" volume, built on wgpu.
//!
//! A set of colored spheres wanders inside a voxel grid. Each frame the CPU
//! fills a params uniform block and a sphere array, and an external compute
//! kernel blends the spheres' fields over the grid and emits a triangle
//! mesh of [`layout::VertexPositionNormalColor`] records.
//!
//! # Key entry points
//!
//! - [`layout`] - the three binary records shared with the kernel, their
//!   WGSL declarations and byte codec
//! - [`scene::BlobScene`] - per-frame driver producing params + spheres
//! - [`gpu::buffers::BlobBuffers`] - buffer allocation, upload and binding
//! - [`options::Options`] - TOML-backed configuration
//!
//! The kernel itself (field evaluation, blending, triangulation) and its
//! dispatch are supplied by the embedding application.

pub mod error;
pub mod gpu;
pub mod grid;
pub mod layout;
pub mod options;
pub mod scene;
pub mod spheres;
