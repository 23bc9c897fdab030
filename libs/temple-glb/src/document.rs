//! # Document Assembly
//!
//! Builds the glTF 2.0 JSON root for a single-mesh, single-node scene.

use crate::buffer::{AccessorIndex, BufferBuilder};
use gltf_json as json;
use gltf_json::validation::Checked::Valid;
use std::collections::BTreeMap;

/// Accessor references for the one mesh the document carries.
#[derive(Debug, Clone)]
pub struct MeshAttributes {
    /// POSITION accessor (required).
    pub positions: AccessorIndex,
    /// NORMAL accessor.
    pub normals: Option<AccessorIndex>,
    /// COLOR_0 accessor.
    pub colors: Option<AccessorIndex>,
    /// Triangle index accessor.
    pub indices: AccessorIndex,
}

/// Assembles the complete glTF root for one triangle mesh.
pub fn build_root(
    name: &str,
    generator: &str,
    attributes: &MeshAttributes,
    buffer: &BufferBuilder,
) -> json::Root {
    let mut primitive_attributes = BTreeMap::new();
    primitive_attributes.insert(
        Valid(json::mesh::Semantic::Positions),
        attributes.positions.as_json_index(),
    );
    if let Some(normals) = attributes.normals {
        primitive_attributes.insert(
            Valid(json::mesh::Semantic::Normals),
            normals.as_json_index(),
        );
    }
    if let Some(colors) = attributes.colors {
        primitive_attributes.insert(
            Valid(json::mesh::Semantic::Colors(0)),
            colors.as_json_index(),
        );
    }

    let primitive = json::mesh::Primitive {
        attributes: primitive_attributes,
        extensions: Default::default(),
        extras: Default::default(),
        indices: Some(attributes.indices.as_json_index()),
        material: None,
        mode: Valid(json::mesh::Mode::Triangles),
        targets: None,
    };

    let mesh = json::Mesh {
        extensions: Default::default(),
        extras: Default::default(),
        name: Some(name.to_string()),
        primitives: vec![primitive],
        weights: None,
    };

    let node = json::Node {
        camera: None,
        children: None,
        extensions: Default::default(),
        extras: Default::default(),
        matrix: None,
        mesh: Some(json::Index::new(0)),
        name: Some(name.to_string()),
        rotation: None,
        scale: None,
        skin: None,
        translation: None,
        weights: None,
    };

    let scene = json::Scene {
        extensions: Default::default(),
        extras: Default::default(),
        name: Some("Scene".to_string()),
        nodes: vec![json::Index::new(0)],
    };

    json::Root {
        accessors: buffer.accessors().to_vec(),
        animations: Vec::new(),
        asset: json::Asset {
            copyright: None,
            extensions: Default::default(),
            extras: Default::default(),
            generator: Some(generator.to_string()),
            min_version: None,
            version: "2.0".to_string(),
        },
        buffers: vec![json::Buffer {
            byte_length: (buffer.data().len() as u64).into(),
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            uri: None,
        }],
        buffer_views: buffer.views().to_vec(),
        cameras: Vec::new(),
        extensions: Default::default(),
        extensions_required: Vec::new(),
        extensions_used: Vec::new(),
        extras: Default::default(),
        images: Vec::new(),
        materials: Vec::new(),
        meshes: vec![mesh],
        nodes: vec![node],
        samplers: Vec::new(),
        scene: Some(json::Index::new(0)),
        scenes: vec![scene],
        skins: Vec::new(),
        textures: Vec::new(),
    }
}
