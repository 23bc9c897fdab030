//! Export/reload round-trips against the `gltf` importer.

use glam::DVec3;
use temple_glb::{export_glb, inspect_glb};
use temple_mesh::primitives::{create_box, create_cylinder};
use temple_mesh::Mesh;

fn roundtrip(mesh: &Mesh, name: &str) -> temple_glb::GlbSummary {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join(name);
    export_glb(mesh, &path).expect("export");
    inspect_glb(&path).expect("reload")
}

#[test]
fn box_roundtrip_preserves_counts() {
    let mesh = create_box(DVec3::new(2.0, 4.0, 6.0)).unwrap();
    let summary = roundtrip(&mesh, "box.glb");

    assert_eq!(summary.vertex_count, mesh.vertex_count());
    assert_eq!(summary.triangle_count, mesh.triangle_count());
}

#[test]
fn roundtrip_preserves_bounds() {
    let mesh = create_box(DVec3::new(2.0, 4.0, 6.0)).unwrap();
    let summary = roundtrip(&mesh, "bounds.glb");

    assert_eq!(summary.min, [-1.0, -2.0, -3.0]);
    assert_eq!(summary.max, [1.0, 2.0, 3.0]);
}

#[test]
fn colored_mesh_with_normals_roundtrips() {
    let mut mesh = create_cylinder(1.0, 3.0, 16).unwrap();
    mesh.set_uniform_color([0.9, 0.9, 0.95, 1.0]);
    mesh.recompute_normals();

    let summary = roundtrip(&mesh, "column.glb");
    assert_eq!(summary.vertex_count, mesh.vertex_count());
    assert_eq!(summary.triangle_count, mesh.triangle_count());
}

#[test]
fn merged_meshes_roundtrip() {
    let mut merged = create_box(DVec3::splat(1.0)).unwrap();
    let mut column = create_cylinder(0.4, 6.0, 24).unwrap();
    column.translate(DVec3::new(3.0, 0.0, 0.0));
    merged.merge(&column);
    merged.recompute_normals();

    let summary = roundtrip(&merged, "merged.glb");
    assert_eq!(summary.vertex_count, merged.vertex_count());
    assert_eq!(summary.triangle_count, merged.triangle_count());
}
