//! # Platform
//!
//! The three-tiered stylobate the temple stands on, plus the entrance
//! steps on the front edge.

use crate::scene::Scene;
use config::constants::TempleParams;
use glam::DVec3;
use temple_mesh::primitives::create_box;
use temple_mesh::{Material, MeshError};

/// Width of the entrance stair flight.
const STEP_WIDTH: f64 = 6.0;
/// Tread depth of each entrance step.
const STEP_DEPTH: f64 = 0.8;
/// Number of entrance steps.
const STEP_COUNT: u32 = 3;

/// Places the three platform tiers, each slightly larger than the one
/// above, and the entrance steps.
pub fn platform(params: &TempleParams, scene: &mut Scene) -> Result<(), MeshError> {
    // Bottom tier is one unit oversized, middle tier half a unit.
    for (tier, oversize) in [1.0, 0.5, 0.0].into_iter().enumerate() {
        let mut slab = create_box(DVec3::new(
            params.platform_width + oversize,
            params.platform_depth + oversize,
            params.tier_height,
        ))?;
        slab.translate(DVec3::new(
            0.0,
            0.0,
            (tier as f64 + 0.5) * params.tier_height,
        ));
        scene.push(slab, Material::Limestone);
    }

    steps(params, scene)
}

/// Solid steps descending from the stylobate top to ground level, placed
/// just beyond the front face of the bottom tier.
fn steps(params: &TempleParams, scene: &mut Scene) -> Result<(), MeshError> {
    let front_edge = (params.platform_depth + 1.0) / 2.0;

    for k in 0..STEP_COUNT {
        let height = params.tier_height * (STEP_COUNT - k) as f64;
        let mut step = create_box(DVec3::new(STEP_WIDTH, STEP_DEPTH, height))?;
        step.translate(DVec3::new(
            0.0,
            front_edge + STEP_DEPTH * (k as f64 + 0.5),
            height / 2.0,
        ));
        scene.push(step, Material::Limestone);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_platform_part_count() {
        let mut scene = Scene::new();
        platform(&TempleParams::default(), &mut scene).unwrap();
        assert_eq!(scene.len(), 3 + STEP_COUNT as usize);
    }

    #[test]
    fn test_tiers_stack_to_platform_top() {
        let params = TempleParams::default();
        let mut scene = Scene::new();
        platform(&params, &mut scene).unwrap();

        let top = scene.parts()[..3]
            .iter()
            .map(|p| p.mesh.bounding_box().unwrap().1.z)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_relative_eq!(top, params.platform_top());
    }

    #[test]
    fn test_bottom_tier_is_widest() {
        let params = TempleParams::default();
        let mut scene = Scene::new();
        platform(&params, &mut scene).unwrap();

        let (min, max) = scene.parts()[0].mesh.bounding_box().unwrap();
        assert_relative_eq!(max.x - min.x, params.platform_width + 1.0);
    }

    #[test]
    fn test_steps_sit_in_front_of_platform() {
        let params = TempleParams::default();
        let mut scene = Scene::new();
        platform(&params, &mut scene).unwrap();

        for part in &scene.parts()[3..] {
            let (min, _) = part.mesh.bounding_box().unwrap();
            assert!(min.y >= (params.platform_depth + 1.0) / 2.0 - 1e-9);
            assert!(min.z >= 0.0);
        }
    }
}
