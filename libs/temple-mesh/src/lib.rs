//! # Temple Mesh
//!
//! Triangle mesh construction for the temple generator.
//!
//! ## Architecture
//!
//! ```text
//! primitives (box, cylinder, patch) → Mesh → merge → align → export
//! ```
//!
//! All geometry uses f64 internally; conversion to f32 happens only at the
//! export boundary. Primitive constructors validate their parameters and
//! return [`MeshError`] for degenerate input.

pub mod align;
pub mod error;
pub mod material;
pub mod mesh;
pub mod primitives;

pub use align::{align_to_ground, z_up_to_y_up, Alignment};
pub use error::MeshError;
pub use material::Material;
pub use mesh::Mesh;
