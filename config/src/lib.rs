//! # Config Crate
//!
//! Centralized configuration constants for the temple generator.
//! All magic numbers and tunable layout parameters are defined here to
//! ensure consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{TempleParams, EPSILON_TOLERANCE};
//!
//! // Use EPSILON_TOLERANCE for floating-point comparisons
//! let value: f64 = 1.0e-11;
//! assert!(value.abs() < EPSILON_TOLERANCE);
//!
//! // The default parameters describe the reference temple
//! let params = TempleParams::default();
//! assert!(params.validate().is_ok());
//! assert_eq!(params.front_columns, 6);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Declarative Layout**: Placement code reads named fields, not literals
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
