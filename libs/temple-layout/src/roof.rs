//! # Roof
//!
//! Triangular pediment prisms at the front and back rooflines, connected
//! by two sloped faces. The pediments are authored as explicit triangle
//! lists between manually specified corner vertices; the back pediment is
//! the front one mirrored by negating the depth-axis coordinate.

use crate::scene::Scene;
use config::constants::{TempleParams, PEDIMENT_THICKNESS};
use glam::DVec3;
use temple_mesh::primitives::create_patch;
use temple_mesh::{Material, MeshError};

/// Triangle list shared by both pediment prisms: front/back gable
/// triangles, bottom, and the two raked sides.
const PEDIMENT_FACES: [[u32; 3]; 8] = [
    [0, 1, 2],
    [3, 5, 4],
    [0, 3, 4],
    [0, 4, 1],
    [0, 2, 5],
    [0, 5, 3],
    [1, 4, 5],
    [1, 5, 2],
];

/// Places both pediments and the two roof slopes.
pub fn roof(params: &TempleParams, scene: &mut Scene) -> Result<(), MeshError> {
    let base_z = params.roof_base();
    let apex_z = base_z + params.pediment_height;
    let half_width = params.pediment_base_width() / 2.0;
    let y_outer = params.platform_depth / 2.0 - 1.0;
    let y_inner = y_outer - PEDIMENT_THICKNESS;

    let front_vertices = [
        DVec3::new(-half_width, y_outer, base_z),
        DVec3::new(half_width, y_outer, base_z),
        DVec3::new(0.0, y_outer, apex_z),
        DVec3::new(-half_width, y_inner, base_z),
        DVec3::new(half_width, y_inner, base_z),
        DVec3::new(0.0, y_inner, apex_z),
    ];
    scene.push(
        create_patch(&front_vertices, &PEDIMENT_FACES)?,
        Material::Marble,
    );

    // Mirror across the XZ plane. The winding flips with the mirror; the
    // merge step's normal repair evens that out.
    let back_vertices: Vec<DVec3> = front_vertices
        .iter()
        .map(|v| DVec3::new(v.x, -v.y, v.z))
        .collect();
    scene.push(
        create_patch(&back_vertices, &PEDIMENT_FACES)?,
        Material::Marble,
    );

    // Sloped quads from each roofline edge up to the ridge at x = 0.
    let slope = |x_edge: f64, faces: [[u32; 3]; 2]| {
        create_patch(
            &[
                DVec3::new(x_edge, y_outer, base_z),
                DVec3::new(x_edge, -y_outer, base_z),
                DVec3::new(0.0, -y_outer, apex_z),
                DVec3::new(0.0, y_outer, apex_z),
            ],
            &faces,
        )
    };
    scene.push(
        slope(-half_width, [[0, 1, 2], [0, 2, 3]])?,
        Material::Marble,
    );
    scene.push(slope(half_width, [[0, 2, 1], [0, 3, 2]])?, Material::Marble);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_roof_part_counts() {
        let mut scene = Scene::new();
        roof(&TempleParams::default(), &mut scene).unwrap();
        assert_eq!(scene.len(), 4);
        // Two pediment prisms, two slope quads.
        assert_eq!(scene.vertex_count(), 2 * 6 + 2 * 4);
        assert_eq!(scene.triangle_count(), 2 * 8 + 2 * 2);
    }

    #[test]
    fn test_apex_height() {
        let params = TempleParams::default();
        let mut scene = Scene::new();
        roof(&params, &mut scene).unwrap();

        let top = scene
            .parts()
            .iter()
            .map(|p| p.mesh.bounding_box().unwrap().1.z)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_relative_eq!(top, params.roof_base() + params.pediment_height);
    }

    #[test]
    fn test_pediments_mirror_each_other() {
        let params = TempleParams::default();
        let mut scene = Scene::new();
        roof(&params, &mut scene).unwrap();

        let front = scene.parts()[0].mesh.bounding_box().unwrap();
        let back = scene.parts()[1].mesh.bounding_box().unwrap();
        assert_relative_eq!(front.1.y, -back.0.y);
        assert_relative_eq!(front.0.y, -back.1.y);
    }

    #[test]
    fn test_slopes_span_between_pediments() {
        let params = TempleParams::default();
        let mut scene = Scene::new();
        roof(&params, &mut scene).unwrap();

        let y_outer = params.platform_depth / 2.0 - 1.0;
        for part in &scene.parts()[2..] {
            let (min, max) = part.mesh.bounding_box().unwrap();
            assert_relative_eq!(max.y, y_outer);
            assert_relative_eq!(min.y, -y_outer);
        }
    }
}
