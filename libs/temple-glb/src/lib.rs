//! # Temple GLB
//!
//! Serializes a merged [`temple_mesh::Mesh`] into a binary glTF 2.0 (GLB)
//! container and reloads exported files for verification.
//!
//! ## Pipeline
//!
//! ```text
//! Mesh → BufferBuilder (binary buffer + accessors)
//!      → document (single-mesh glTF Root)
//!      → writer (GLB framing, file write)
//! ```
//!
//! Encoding happens entirely in memory before the output file is created,
//! so a failed export never leaves a partial file behind.

pub mod buffer;
pub mod document;
pub mod error;
pub mod inspect;
pub mod writer;

pub use buffer::{AccessorIndex, BufferBuilder};
pub use error::GlbError;
pub use inspect::{inspect_glb, GlbSummary};
pub use writer::{encode_glb, export_glb};
