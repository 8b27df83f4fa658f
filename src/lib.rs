//! A parametric generator for **pegboard-mounted enclosures**, built on
//! BSP-tree [Constructive Solid Geometry](https://en.wikipedia.org/wiki/Constructive_solid_geometry).
//!
//! One call turns a handful of [`BoxParameters`](config::BoxParameters) into a
//! printable solid: a hollow rounded box with tilted vent slots on its left,
//! right and front faces, a ribbed opening in its floor, and a grid of
//! pegboard clips on its back.
//!
//! # Pipeline
//! - [`section`]: 2D outlines (rounded rectangle, clip hook, vent slot)
//! - [`layout`]: where slots, floor ribs and clips go, as plain numbers
//! - [`assembly`]: plans → solids through any [`GeometryKernel`](traits::GeometryKernel)
//! - [`mesh`] / [`kernel`]: the in-crate BSP kernel and its shared handle
//! - [`io`]: STL export
//!
//! # Features
//! #### Default
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` export
//!
//! # Example
//! ```no_run
//! use pegbox::assembly::generate;
//! use pegbox::config::{BoxParameters, GeneratorConfig};
//! use pegbox::kernel::BspKernel;
//!
//! let params = BoxParameters::default().with_size(120.0, 60.0, 80.0);
//! let generated = generate(&BspKernel, &params, &GeneratorConfig::default())?;
//! let stl = generated.outcome.solid().to_stl_binary()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod assembly;
pub mod config;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod kernel;
pub mod layout;
pub mod mesh;
pub mod section;
pub mod traits;

pub use assembly::{Generated, Outcome, base, generate};
pub use config::{BoxParameters, GeneratorConfig};
pub use errors::{GenerateError, KernelError};
pub use kernel::{BspKernel, generate_shared, shared_kernel};
pub use mesh::Mesh;
pub use section::CrossSection;
pub use traits::GeometryKernel;
