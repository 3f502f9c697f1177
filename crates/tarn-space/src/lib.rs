//! Extruded cube space for Tarn.
//!
//! A [`CubeSpace`] is the 3D cell model the flood engine works on: a
//! heightmap extruded into unit cubes, each holding a
//! [`CellMaterial`](tarn_core::CellMaterial). Levels are stored
//! contiguously so the engine can process one horizontal slice at a time.
//!
//! # Modules
//!
//! - [`cube`]: [`CubeSpace`] storage, extrusion, and cell access
//! - [`grid2d`]: 4-connected neighbourhood and border helpers for one level
//! - [`verify`]: invariant checks over extruded and resolved spaces

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cube;
pub mod error;
pub mod grid2d;
pub mod verify;

pub use cube::CubeSpace;
pub use error::SpaceError;
pub use verify::{verify_extrusion, verify_resolved, InvariantViolation};
