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
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
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

//! Distance-encoded billboard markers built on wgpu.
//!
//! Scanmark draws point-like objects as camera-facing quads whose color and
//! opacity encode their distance from the viewer. The pipeline has two
//! stages, each written once in WGSL and once as a pure-Rust reference on
//! `glam` types:
//!
//! - **Transform**: [`marker::transform_vertex`] billboards a quad corner
//!   toward the camera and picks its tint from the distance bands.
//! - **Shading**: [`marker::shade_fragment`] combines a radial falloff with a
//!   sigmoid depth fade.
//!
//! # Key entry points
//!
//! - [`options::Options`] - marker and scene configuration (TOML presets)
//! - [`renderer::MarkerShader`] - the six composed shader permutations
//! - [`scene::MarkOctree`] - bucketed mark store with back-to-front
//!   frustum queries
//! - [`camera::core::CameraBlock`] - per-frame camera input

pub mod camera;
pub mod error;
pub mod gpu;
pub mod marker;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
