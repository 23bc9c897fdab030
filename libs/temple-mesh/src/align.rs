//! # Orientation & Alignment
//!
//! The temple is authored Z-up; glTF expects Y-up. A fixed quarter-turn
//! reconciles the two, after which the merged mesh is grounded: centered
//! horizontally on a target point with its lowest vertex touching the
//! target height.

use crate::mesh::Mesh;
use glam::DVec3;

/// How the alignment step positioned the mesh.
///
/// Callers (and tests) can assert which path executed instead of guessing
/// from the resulting coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Alignment {
    /// Normal path: centered via the axis-aligned bounding box.
    BoundingBox {
        /// Translation that was applied.
        offset: DVec3,
    },
    /// Fallback for meshes without a bounding box (empty scene): the mesh
    /// was translated by the raw target instead of being centered.
    Direct,
}

/// Rotates the mesh a quarter turn about X, turning the Z-up authoring
/// convention into glTF's Y-up convention.
///
/// Implemented as the exact component swap `(x, y, z) -> (x, z, -y)` so no
/// floating-point rotation error is introduced.
pub fn z_up_to_y_up(mesh: &mut Mesh) {
    let swap = |v: DVec3| DVec3::new(v.x, v.z, -v.y);
    mesh.map_positions(swap);
    mesh.map_normals(swap);
}

/// Grounds the mesh at `target` (Y-up space).
///
/// The horizontal bounding-box center moves to `target.x` / `target.z` and
/// the lowest vertex to `target.y`. An empty mesh has no bounding box; in
/// that case the mesh is translated by `target` directly and
/// [`Alignment::Direct`] is returned.
pub fn align_to_ground(mesh: &mut Mesh, target: DVec3) -> Alignment {
    match mesh.bounding_box() {
        Some((min, max)) => {
            let center = (min + max) / 2.0;
            let offset = DVec3::new(target.x - center.x, target.y - min.y, target.z - center.z);
            mesh.translate(offset);
            Alignment::BoundingBox { offset }
        }
        None => {
            mesh.translate(target);
            Alignment::Direct
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::create_box;
    use approx::assert_relative_eq;

    #[test]
    fn test_z_up_to_y_up_swaps_components() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        z_up_to_y_up(&mut mesh);
        assert_eq!(mesh.positions()[0], DVec3::new(1.0, 3.0, -2.0));
    }

    #[test]
    fn test_z_up_to_y_up_preserves_counts() {
        let mut mesh = create_box(DVec3::new(2.0, 4.0, 6.0)).unwrap();
        mesh.recompute_normals();
        z_up_to_y_up(&mut mesh);
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.normals().unwrap().len(), 8);
        // Height along the old Z becomes height along Y
        let (min, max) = mesh.bounding_box().unwrap();
        assert_relative_eq!(max.y - min.y, 6.0);
    }

    #[test]
    fn test_align_grounds_lowest_vertex() {
        let mut mesh = create_box(DVec3::new(2.0, 2.0, 2.0)).unwrap();
        z_up_to_y_up(&mut mesh);
        let outcome = align_to_ground(&mut mesh, DVec3::new(5.0, 1.0, -3.0));

        assert!(matches!(outcome, Alignment::BoundingBox { .. }));
        let (min, max) = mesh.bounding_box().unwrap();
        assert_relative_eq!(min.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!((min.x + max.x) / 2.0, 5.0, epsilon = 1e-6);
        assert_relative_eq!((min.z + max.z) / 2.0, -3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_align_empty_mesh_falls_back() {
        let mut mesh = Mesh::new();
        let outcome = align_to_ground(&mut mesh, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(outcome, Alignment::Direct);
        assert!(mesh.is_empty());
    }
}
