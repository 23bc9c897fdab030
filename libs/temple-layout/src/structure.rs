//! # Superstructure
//!
//! The entablature resting on the colonnade and the cella (inner chamber)
//! inside it.

use crate::scene::Scene;
use config::constants::TempleParams;
use glam::DVec3;
use temple_mesh::primitives::create_box;
use temple_mesh::{Material, MeshError};

/// Places the entablature block spanning the colonnade.
pub fn entablature(params: &TempleParams, scene: &mut Scene) -> Result<(), MeshError> {
    let mut block = create_box(DVec3::new(
        params.platform_width - 1.0,
        params.platform_depth - 1.0,
        params.entablature_height,
    ))?;
    block.translate(DVec3::new(
        0.0,
        0.0,
        params.platform_top() + params.column_height + params.entablature_height / 2.0,
    ));
    scene.push(block, Material::Marble);
    Ok(())
}

/// Places the cella, one unit shorter than the columns and inset well
/// inside the peristyle.
pub fn cella(params: &TempleParams, scene: &mut Scene) -> Result<(), MeshError> {
    let height = params.column_height - 1.0;
    let mut chamber = create_box(DVec3::new(
        params.platform_width - 6.0,
        params.platform_depth - 4.0,
        height,
    ))?;
    chamber.translate(DVec3::new(0.0, 0.0, params.platform_top() + height / 2.0));
    scene.push(chamber, Material::Marble);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_entablature_rests_on_columns() {
        let params = TempleParams::default();
        let mut scene = Scene::new();
        entablature(&params, &mut scene).unwrap();

        let (min, max) = scene.parts()[0].mesh.bounding_box().unwrap();
        assert_relative_eq!(min.z, params.platform_top() + params.column_height);
        assert_relative_eq!(max.z, params.roof_base());
    }

    #[test]
    fn test_cella_fits_inside_colonnade() {
        let params = TempleParams::default();
        let mut scene = Scene::new();
        cella(&params, &mut scene).unwrap();

        let (min, max) = scene.parts()[0].mesh.bounding_box().unwrap();
        assert!(max.x - min.x < params.platform_width);
        assert!(max.y - min.y < params.platform_depth);
        assert_relative_eq!(min.z, params.platform_top());
    }

    #[test]
    fn test_cella_rejects_too_small_platform() {
        let params = TempleParams {
            platform_width: 5.0,
            ..TempleParams::default()
        };
        let mut scene = Scene::new();
        assert!(cella(&params, &mut scene).is_err());
    }
}
