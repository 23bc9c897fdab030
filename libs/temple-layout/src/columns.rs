//! # Colonnade
//!
//! Column position computation and placement of shafts, capitals, and
//! bases around the peristyle.

use crate::scene::Scene;
use config::constants::{
    TempleParams, BASE_HEIGHT, BASE_RADIUS_SCALE, CAPITAL_HEIGHT, CAPITAL_RADIUS_SCALE,
    COLUMN_ROW_DEPTH_INSET, COLUMN_ROW_SPAN_INSET, SIDE_COLUMN_SPAN_INSET,
};
use glam::DVec3;
use temple_mesh::primitives::create_cylinder;
use temple_mesh::{Material, MeshError};

/// Computes the world-space center of every column shaft.
///
/// Front and back rows run along the width at `edge_start + index * spacing`.
/// Side columns fill the depth span but skip their first and last indices,
/// since those corner positions are already occupied by the front/back
/// rows. The resulting count is exactly
/// `2 * front_columns + 2 * (side_columns - 2)`.
///
/// For asymmetric counts the gap between a corner and the first side column
/// differs from the side spacing; this matches the reference layout.
pub fn column_positions(params: &TempleParams) -> Vec<DVec3> {
    let mut positions = Vec::new();
    let center_z = params.platform_top() + params.column_height / 2.0;

    let span = params.platform_width - COLUMN_ROW_SPAN_INSET;
    let spacing = span / (params.front_columns - 1) as f64;
    let row_y = params.platform_depth / 2.0 - COLUMN_ROW_DEPTH_INSET;
    for i in 0..params.front_columns {
        let x = -span / 2.0 + i as f64 * spacing;
        positions.push(DVec3::new(x, row_y, center_z));
        positions.push(DVec3::new(x, -row_y, center_z));
    }

    let side_span = params.platform_depth - SIDE_COLUMN_SPAN_INSET;
    let side_spacing = side_span / (params.side_columns - 1) as f64;
    let side_x = params.platform_width / 2.0 - COLUMN_ROW_DEPTH_INSET;
    for i in 1..params.side_columns - 1 {
        let y = -side_span / 2.0 + i as f64 * side_spacing;
        positions.push(DVec3::new(-side_x, y, center_z));
        positions.push(DVec3::new(side_x, y, center_z));
    }

    positions
}

/// Places a shaft, a wider capital, and a wider base at every column
/// position.
pub fn colonnade(params: &TempleParams, scene: &mut Scene) -> Result<(), MeshError> {
    for position in column_positions(params) {
        let mut shaft = create_cylinder(
            params.column_radius,
            params.column_height,
            params.column_segments,
        )?;
        shaft.translate(position);
        scene.push(shaft, Material::Marble);

        let mut capital = create_cylinder(
            params.column_radius * CAPITAL_RADIUS_SCALE,
            CAPITAL_HEIGHT,
            params.column_segments,
        )?;
        capital.translate(DVec3::new(
            position.x,
            position.y,
            position.z + params.column_height / 2.0 + CAPITAL_HEIGHT / 2.0,
        ));
        scene.push(capital, Material::Marble);

        let mut base = create_cylinder(
            params.column_radius * BASE_RADIUS_SCALE,
            BASE_HEIGHT,
            params.column_segments,
        )?;
        base.translate(DVec3::new(
            position.x,
            position.y,
            position.z - params.column_height / 2.0 - BASE_HEIGHT / 2.0,
        ));
        scene.push(base, Material::Marble);
    }
    Ok(())
}
