//! # Cylinder Primitive
//!
//! Vertical cylinder mesh centered at the origin.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;
use std::f64::consts::TAU;

/// Creates a vertical cylinder centered at the origin.
///
/// The axis is Z; the cylinder spans `-height / 2` to `height / 2`.
///
/// # Arguments
///
/// * `radius` - Cylinder radius
/// * `height` - Height along the Z axis
/// * `segments` - Radial subdivisions (more segments = smoother surface)
///
/// # Example
///
/// ```rust
/// use temple_mesh::primitives::create_cylinder;
///
/// let shaft = create_cylinder(0.4, 6.0, 24).unwrap();
/// assert_eq!(shaft.vertex_count(), 48);
/// ```
pub fn create_cylinder(radius: f64, height: f64, segments: u32) -> Result<Mesh, MeshError> {
    if radius <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "cylinder radius must be positive: {radius}"
        )));
    }
    if height <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "cylinder height must be positive: {height}"
        )));
    }
    if segments < 3 {
        return Err(MeshError::degenerate(format!(
            "cylinder segments must be at least 3: {segments}"
        )));
    }

    let mut mesh = Mesh::with_capacity(segments as usize * 2, segments as usize * 4);
    let half = height / 2.0;

    let ring = |mesh: &mut Mesh, z: f64| -> Vec<u32> {
        (0..segments)
            .map(|j| {
                let theta = TAU * j as f64 / segments as f64;
                mesh.add_vertex(DVec3::new(radius * theta.cos(), radius * theta.sin(), z))
            })
            .collect()
    };

    let bottom = ring(&mut mesh, -half);
    let top = ring(&mut mesh, half);

    // Side quads, split into triangles with outward winding.
    for j in 0..segments as usize {
        let j_next = (j + 1) % segments as usize;
        mesh.add_triangle(bottom[j], bottom[j_next], top[j_next]);
        mesh.add_triangle(bottom[j], top[j_next], top[j]);
    }

    // Cap fans.
    for j in 1..segments as usize - 1 {
        mesh.add_triangle(bottom[0], bottom[j + 1], bottom[j]);
        mesh.add_triangle(top[0], top[j], top[j + 1]);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cylinder_counts() {
        let mesh = create_cylinder(5.0, 10.0, 32).unwrap();
        assert_eq!(mesh.vertex_count(), 64);
        // 2 side triangles per segment + 2 * (segments - 2) cap triangles
        assert_eq!(mesh.triangle_count(), 64 + 60);
        assert!(mesh.validate());
    }

    #[test]
    fn test_cylinder_centered_vertically() {
        let mesh = create_cylinder(2.0, 6.0, 16).unwrap();
        let (min, max) = mesh.bounding_box().unwrap();
        assert_relative_eq!(min.z, -3.0);
        assert_relative_eq!(max.z, 3.0);
    }

    #[test]
    fn test_cylinder_radius_bounds() {
        let mesh = create_cylinder(1.5, 1.0, 64).unwrap();
        let (min, max) = mesh.bounding_box().unwrap();
        assert_relative_eq!(max.x, 1.5, epsilon = 1e-9);
        assert!(min.x >= -1.5 - 1e-9);
    }

    #[test]
    fn test_cylinder_minimum_segments() {
        let mesh = create_cylinder(1.0, 1.0, 3).unwrap();
        assert_eq!(mesh.vertex_count(), 6);
        assert!(mesh.validate());
    }

    #[test]
    fn test_cylinder_invalid_parameters() {
        assert!(create_cylinder(0.0, 1.0, 8).is_err());
        assert!(create_cylinder(1.0, -1.0, 8).is_err());
        assert!(create_cylinder(1.0, 1.0, 2).is_err());
    }
}
