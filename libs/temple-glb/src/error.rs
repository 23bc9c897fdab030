//! # GLB Errors

use thiserror::Error;

/// Errors that can occur while encoding, writing, or reloading GLB files.
#[derive(Debug, Error)]
pub enum GlbError {
    /// The mesh has no vertices; glTF requires a POSITION accessor.
    #[error("Cannot export an empty mesh")]
    EmptyMesh,

    /// The glTF document failed to serialize.
    #[error("glTF JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing the output file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Reloading an exported file failed.
    #[error("glTF import failed: {0}")]
    Import(#[from] gltf::Error),

    /// A reloaded file carries no triangle mesh with positions.
    #[error("GLB contains no triangle mesh")]
    MissingMesh,
}
