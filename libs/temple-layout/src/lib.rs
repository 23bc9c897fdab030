//! # Temple Layout
//!
//! Placement logic for the temple generator: computes world-space positions
//! for every structural element from [`TempleParams`] and accumulates the
//! placed primitives into a [`Scene`].
//!
//! ## Flow
//!
//! ```text
//! TempleParams → platform → colonnade → entablature → roof → cella → gardens
//!                                  ↓
//!                          Scene (ordered primitives)
//!                                  ↓
//!                          Scene::merge → Mesh
//! ```
//!
//! There is no transform hierarchy and no collision detection; every element
//! is translated directly to a position derived from the parameters, and
//! overlaps between elements are possible and undetected.
//!
//! [`TempleParams`]: config::constants::TempleParams

pub mod builder;
pub mod columns;
pub mod error;
pub mod garden;
pub mod platform;
pub mod roof;
pub mod scene;
pub mod structure;

pub use builder::build_temple;
pub use columns::column_positions;
pub use error::BuildError;
pub use scene::Scene;
