//! Heightmap collaborators for the Tarn flooding engine.
//!
//! Everything that turns outside input into a [`HeightMap`], or a
//! flooded space back into text:
//!
//! - [`prepare_grid`] normalizes ragged rows against the first row.
//! - [`parse_grid`] reads a literal grid from text.
//! - [`random_grid`] generates a seeded random heightmap.
//! - [`render`] formats heightmaps, cube spaces and water depths.
//!
//! [`HeightMap`]: tarn_core::HeightMap

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod parse;
pub mod prepare;
pub mod random;
pub mod render;

pub use config::{GridConfigError, RandomGridConfig};
pub use error::ParseError;
pub use parse::parse_grid;
pub use prepare::prepare_grid;
pub use random::random_grid;
