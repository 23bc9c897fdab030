//! # Layout Errors

use temple_mesh::MeshError;
use thiserror::Error;

/// Errors that can occur while assembling a temple scene.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The supplied parameters violate a layout precondition.
    #[error("Invalid parameters: {0}")]
    Config(#[from] config::constants::ConfigError),

    /// A primitive constructor rejected its input.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}
