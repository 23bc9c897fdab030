//! # Gardens
//!
//! Decorative elements around the temple: a reflecting pool on the
//! approach axis and potted plants just outside the four corners. Each is
//! placed by a literal offset from the platform edge.

use crate::scene::Scene;
use config::constants::{TempleParams, POOL_SEGMENTS};
use glam::DVec3;
use temple_mesh::primitives::create_cylinder;
use temple_mesh::{Material, MeshError};

/// Pool radius.
const POOL_RADIUS: f64 = 2.5;
/// Pool slab height.
const POOL_HEIGHT: f64 = 0.2;
/// Distance of the pool center from the platform's front edge.
const POOL_OFFSET: f64 = 5.0;
/// Plant distance outside each platform corner (both axes).
const PLANT_CORNER_OFFSET: f64 = 1.5;
/// Radial subdivisions for pots and foliage.
const PLANT_SEGMENTS: u32 = 12;

/// Places the pool and the four corner plants.
pub fn gardens(params: &TempleParams, scene: &mut Scene) -> Result<(), MeshError> {
    let mut pool = create_cylinder(POOL_RADIUS, POOL_HEIGHT, POOL_SEGMENTS)?;
    pool.translate(DVec3::new(
        0.0,
        params.platform_depth / 2.0 + POOL_OFFSET,
        POOL_HEIGHT / 2.0,
    ));
    scene.push(pool, Material::Water);

    let corner_x = params.platform_width / 2.0 + PLANT_CORNER_OFFSET;
    let corner_y = params.platform_depth / 2.0 + PLANT_CORNER_OFFSET;
    for sx in [-1.0, 1.0] {
        for sy in [-1.0, 1.0] {
            let corner = DVec3::new(sx * corner_x, sy * corner_y, 0.0);

            let mut pot = create_cylinder(0.35, 0.5, PLANT_SEGMENTS)?;
            pot.translate(corner + DVec3::new(0.0, 0.0, 0.25));
            scene.push(pot, Material::Terracotta);

            let mut foliage = create_cylinder(0.6, 1.2, PLANT_SEGMENTS)?;
            foliage.translate(corner + DVec3::new(0.0, 0.0, 1.1));
            scene.push(foliage, Material::Foliage);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garden_part_count() {
        let mut scene = Scene::new();
        gardens(&TempleParams::default(), &mut scene).unwrap();
        // One pool plus a pot and foliage per corner.
        assert_eq!(scene.len(), 1 + 4 * 2);
    }

    #[test]
    fn test_pool_sits_on_approach_axis() {
        let params = TempleParams::default();
        let mut scene = Scene::new();
        gardens(&params, &mut scene).unwrap();

        let (min, max) = scene.parts()[0].mesh.bounding_box().unwrap();
        assert!((min.x + max.x).abs() < 1e-9);
        assert!(min.y > params.platform_depth / 2.0);
        assert!(min.z >= 0.0);
    }

    #[test]
    fn test_plants_outside_platform() {
        let params = TempleParams::default();
        let mut scene = Scene::new();
        gardens(&params, &mut scene).unwrap();

        for part in &scene.parts()[1..] {
            let (min, max) = part.mesh.bounding_box().unwrap();
            let center = (min + max) / 2.0;
            assert!(center.x.abs() > params.platform_width / 2.0);
            assert!(center.y.abs() > params.platform_depth / 2.0);
        }
    }
}
