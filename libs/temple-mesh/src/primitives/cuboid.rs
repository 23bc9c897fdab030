//! # Box Primitive
//!
//! Axis-aligned box mesh centered at the origin.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates an axis-aligned box centered at the origin.
///
/// # Arguments
///
/// * `extents` - Full size along each axis [width, depth, height]
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use temple_mesh::primitives::create_box;
/// use glam::DVec3;
///
/// let mesh = create_box(DVec3::new(20.0, 12.0, 0.5)).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_box(extents: DVec3) -> Result<Mesh, MeshError> {
    if extents.x <= 0.0 || extents.y <= 0.0 || extents.z <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "box extents must be positive: {:?}",
            extents
        )));
    }

    let half = extents / 2.0;
    let mut mesh = Mesh::with_capacity(8, 12);

    // Bottom four corners, then top four, counter-clockwise from -x/-y.
    let v0 = mesh.add_vertex(DVec3::new(-half.x, -half.y, -half.z));
    let v1 = mesh.add_vertex(DVec3::new(half.x, -half.y, -half.z));
    let v2 = mesh.add_vertex(DVec3::new(half.x, half.y, -half.z));
    let v3 = mesh.add_vertex(DVec3::new(-half.x, half.y, -half.z));
    let v4 = mesh.add_vertex(DVec3::new(-half.x, -half.y, half.z));
    let v5 = mesh.add_vertex(DVec3::new(half.x, -half.y, half.z));
    let v6 = mesh.add_vertex(DVec3::new(half.x, half.y, half.z));
    let v7 = mesh.add_vertex(DVec3::new(-half.x, half.y, half.z));

    // CCW winding viewed from outside each face.
    mesh.add_triangle(v0, v2, v1); // bottom
    mesh.add_triangle(v0, v3, v2);
    mesh.add_triangle(v4, v5, v6); // top
    mesh.add_triangle(v4, v6, v7);
    mesh.add_triangle(v0, v1, v5); // front (-y)
    mesh.add_triangle(v0, v5, v4);
    mesh.add_triangle(v2, v3, v7); // back (+y)
    mesh.add_triangle(v2, v7, v6);
    mesh.add_triangle(v3, v0, v4); // left (-x)
    mesh.add_triangle(v3, v4, v7);
    mesh.add_triangle(v1, v2, v6); // right (+x)
    mesh.add_triangle(v1, v6, v5);

    Ok(mesh)
}
