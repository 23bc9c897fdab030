//! # Primitive Factory
//!
//! Canonical shapes for scene assembly. All constructors are pure, produce
//! meshes centered at the origin, and reject degenerate parameters.

mod cuboid;
mod cylinder;
mod patch;

pub use cuboid::create_box;
pub use cylinder::create_cylinder;
pub use patch::create_patch;
