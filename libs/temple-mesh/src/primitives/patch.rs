//! # Custom Patch Primitive
//!
//! Arbitrary triangulated surface from explicit vertex and face arrays.
//! Used where no canonical primitive fits: pediment prisms and sloped
//! roof faces.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates a triangulated surface from explicit coordinates.
///
/// # Arguments
///
/// * `vertices` - Vertex positions, referenced by index
/// * `faces` - Triangle index triples into `vertices`
///
/// # Errors
///
/// Rejects empty input and faces whose indices fall outside `vertices`,
/// which would otherwise produce a silently invalid mesh.
///
/// # Example
///
/// ```rust
/// use temple_mesh::primitives::create_patch;
/// use glam::DVec3;
///
/// let gable = create_patch(
///     &[DVec3::new(-1.0, 0.0, 0.0), DVec3::new(1.0, 0.0, 0.0), DVec3::new(0.0, 0.0, 1.0)],
///     &[[0, 1, 2]],
/// ).unwrap();
/// assert_eq!(gable.triangle_count(), 1);
/// ```
pub fn create_patch(vertices: &[DVec3], faces: &[[u32; 3]]) -> Result<Mesh, MeshError> {
    if vertices.is_empty() || faces.is_empty() {
        return Err(MeshError::degenerate("patch needs vertices and faces"));
    }

    let limit = vertices.len() as u32;
    for (i, face) in faces.iter().enumerate() {
        if face.iter().any(|&index| index >= limit) {
            return Err(MeshError::invalid_topology(format!(
                "face {i} references vertex out of range (indices {:?}, vertex count {limit})",
                face
            )));
        }
    }

    let mut mesh = Mesh::with_capacity(vertices.len(), faces.len());
    for &position in vertices {
        mesh.add_vertex(position);
    }
    for &[a, b, c] in faces {
        mesh.add_triangle(a, b, c);
    }
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_basic_triangle() {
        let mesh = create_patch(
            &[DVec3::ZERO, DVec3::X, DVec3::Y],
            &[[0, 1, 2]],
        )
        .unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert!(mesh.validate());
    }

    #[test]
    fn test_patch_out_of_range_index_rejected() {
        let result = create_patch(&[DVec3::ZERO, DVec3::X], &[[0, 1, 2]]);
        assert!(matches!(
            result,
            Err(MeshError::InvalidTopology { .. })
        ));
    }

    #[test]
    fn test_patch_empty_rejected() {
        assert!(create_patch(&[], &[]).is_err());
        assert!(create_patch(&[DVec3::ZERO], &[]).is_err());
    }
}
