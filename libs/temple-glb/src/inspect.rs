//! # GLB Inspection
//!
//! Reloads an exported GLB file and summarizes its contents. Used by the
//! CLI after export and by the round-trip tests.

use crate::error::GlbError;
use std::path::Path;

/// Counts and bounds of the first mesh in a GLB file.
#[derive(Debug, Clone, PartialEq)]
pub struct GlbSummary {
    /// Vertex count of the mesh's first primitive.
    pub vertex_count: usize,
    /// Triangle count of the mesh's first primitive.
    pub triangle_count: usize,
    /// Component-wise minimum position.
    pub min: [f32; 3],
    /// Component-wise maximum position.
    pub max: [f32; 3],
}

/// Loads a GLB file and reads back its first triangle mesh.
pub fn inspect_glb(path: &Path) -> Result<GlbSummary, GlbError> {
    let (document, buffers, _images) = gltf::import(path)?;

    let mesh = document.meshes().next().ok_or(GlbError::MissingMesh)?;
    let primitive = mesh.primitives().next().ok_or(GlbError::MissingMesh)?;
    let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

    let positions: Vec<[f32; 3]> = reader
        .read_positions()
        .ok_or(GlbError::MissingMesh)?
        .collect();
    let index_count = reader
        .read_indices()
        .map(|indices| indices.into_u32().count())
        .unwrap_or(0);

    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];
    for p in &positions {
        for axis in 0..3 {
            min[axis] = min[axis].min(p[axis]);
            max[axis] = max[axis].max(p[axis]);
        }
    }

    Ok(GlbSummary {
        vertex_count: positions.len(),
        triangle_count: index_count / 3,
        min,
        max,
    })
}
