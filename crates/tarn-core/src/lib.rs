//! Core types for the Tarn heightmap flooding engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the validated [`HeightMap`] input, the per-cell [`CellMaterial`] and
//! transient [`DrainState`] classifications, the [`CellPos`] coordinate
//! triple, and the [`GridError`] raised for malformed input.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod heightmap;

pub use cell::{CellMaterial, CellPos, DrainState};
pub use error::GridError;
pub use heightmap::HeightMap;
