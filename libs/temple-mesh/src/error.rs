//! # Mesh Errors
//!
//! Error types for mesh construction.

use thiserror::Error;

/// Errors that can occur while constructing meshes.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Degenerate geometry (non-positive extent, too few segments, ...)
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry {
        /// Human-readable description of the defect.
        message: String,
    },

    /// Invalid mesh topology (out-of-range indices, repeated corners, ...)
    #[error("Invalid topology: {message}")]
    InvalidTopology {
        /// Human-readable description of the defect.
        message: String,
    },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}
