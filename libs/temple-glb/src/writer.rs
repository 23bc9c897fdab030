//! # GLB Writer
//!
//! Frames the glTF JSON and the binary buffer into the GLB container and
//! writes it to disk.

use crate::buffer::BufferBuilder;
use crate::document::{build_root, MeshAttributes};
use crate::error::GlbError;
use gltf_json as json;
use std::fs;
use std::path::Path;
use temple_mesh::Mesh;

/// Generator string recorded in the exported asset metadata.
const GENERATOR: &str = "temple-gen";

/// Encodes a mesh into a complete GLB byte vector.
///
/// # Errors
///
/// Returns [`GlbError::EmptyMesh`] for meshes without vertices and
/// [`GlbError::Json`] if the document fails to serialize.
pub fn encode_glb(mesh: &Mesh) -> Result<Vec<u8>, GlbError> {
    if mesh.is_empty() {
        return Err(GlbError::EmptyMesh);
    }

    let mut buffer = BufferBuilder::new();
    let positions = buffer.push_positions(&mesh.positions_f32());
    let normals = mesh.normals_f32().map(|n| buffer.push_vec3(&n));
    let colors = mesh.colors().map(|c| buffer.push_vec4(c));
    let indices = buffer.push_indices(&mesh.indices_flat());

    let attributes = MeshAttributes {
        positions,
        normals,
        colors,
        indices,
    };
    let root = build_root("Temple", GENERATOR, &attributes, &buffer);
    assemble_glb(&root, buffer.data())
}

/// Encodes a mesh and writes the GLB to `path`.
///
/// The entire file is encoded in memory first; the file is only created
/// once encoding has succeeded, so no partial file is left on failure.
pub fn export_glb(mesh: &Mesh, path: &Path) -> Result<(), GlbError> {
    let bytes = encode_glb(mesh)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Assembles the GLB container: 12-byte header, JSON chunk, BIN chunk,
/// all padded to 4-byte boundaries.
fn assemble_glb(root: &json::Root, binary: &[u8]) -> Result<Vec<u8>, GlbError> {
    let json_string = serde_json::to_string(root)?;
    let json_bytes = json_string.as_bytes();

    let json_padding = (4 - json_bytes.len() % 4) % 4;
    let json_chunk_length = json_bytes.len() + json_padding;
    let binary_padding = (4 - binary.len() % 4) % 4;
    let binary_chunk_length = binary.len() + binary_padding;

    let total_length = 12 + 8 + json_chunk_length + 8 + binary_chunk_length;
    let mut glb = Vec::with_capacity(total_length);

    // Header: magic, version, total length.
    glb.extend_from_slice(b"glTF");
    glb.extend_from_slice(&2u32.to_le_bytes());
    glb.extend_from_slice(&(total_length as u32).to_le_bytes());

    // JSON chunk, padded with spaces.
    glb.extend_from_slice(&(json_chunk_length as u32).to_le_bytes());
    glb.extend_from_slice(&0x4E4F_534Au32.to_le_bytes()); // "JSON"
    glb.extend_from_slice(json_bytes);
    glb.resize(glb.len() + json_padding, 0x20);

    // BIN chunk, zero-padded.
    glb.extend_from_slice(&(binary_chunk_length as u32).to_le_bytes());
    glb.extend_from_slice(&0x004E_4942u32.to_le_bytes()); // "BIN\0"
    glb.extend_from_slice(binary);
    glb.resize(glb.len() + binary_padding, 0);

    Ok(glb)
}
