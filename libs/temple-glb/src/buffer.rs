//! # Buffer Packing
//!
//! Packs vertex attributes and indices into one binary buffer with 4-byte
//! alignment, emitting the matching glTF buffer views and accessors.

use gltf_json as json;
use gltf_json::validation::Checked::Valid;

/// Accessor index returned by buffer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessorIndex(pub u32);

impl AccessorIndex {
    /// The index as a glTF JSON reference.
    pub fn as_json_index(&self) -> json::Index<json::Accessor> {
        json::Index::new(self.0)
    }
}

/// Builder for the single binary buffer of a GLB file.
#[derive(Default)]
pub struct BufferBuilder {
    data: Vec<u8>,
    views: Vec<json::buffer::View>,
    accessors: Vec<json::Accessor>,
}

impl BufferBuilder {
    /// Creates an empty buffer builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The packed binary data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The emitted buffer views.
    pub fn views(&self) -> &[json::buffer::View] {
        &self.views
    }

    /// The emitted accessors.
    pub fn accessors(&self) -> &[json::Accessor] {
        &self.accessors
    }

    /// Packs vertex positions, recording min/max bounds as glTF requires
    /// for POSITION accessors.
    pub fn push_positions(&mut self, positions: &[[f32; 3]]) -> AccessorIndex {
        let bounds = position_bounds(positions);
        self.push(
            bytemuck::cast_slice(positions),
            positions.len(),
            json::accessor::Type::Vec3,
            json::buffer::Target::ArrayBuffer,
            Some(bounds),
        )
    }

    /// Packs a Vec3 attribute (normals).
    pub fn push_vec3(&mut self, data: &[[f32; 3]]) -> AccessorIndex {
        self.push(
            bytemuck::cast_slice(data),
            data.len(),
            json::accessor::Type::Vec3,
            json::buffer::Target::ArrayBuffer,
            None,
        )
    }

    /// Packs a Vec4 attribute (vertex colors).
    pub fn push_vec4(&mut self, data: &[[f32; 4]]) -> AccessorIndex {
        self.push(
            bytemuck::cast_slice(data),
            data.len(),
            json::accessor::Type::Vec4,
            json::buffer::Target::ArrayBuffer,
            None,
        )
    }

    /// Packs u32 triangle indices.
    pub fn push_indices(&mut self, indices: &[u32]) -> AccessorIndex {
        let bytes: Vec<u8> = indices.iter().flat_map(|i| i.to_le_bytes()).collect();
        self.push_component(
            &bytes,
            indices.len(),
            json::accessor::Type::Scalar,
            json::accessor::ComponentType::U32,
            json::buffer::Target::ElementArrayBuffer,
            None,
        )
    }

    fn push(
        &mut self,
        bytes: &[u8],
        count: usize,
        type_: json::accessor::Type,
        target: json::buffer::Target,
        bounds: Option<([f32; 3], [f32; 3])>,
    ) -> AccessorIndex {
        self.push_component(
            bytes,
            count,
            type_,
            json::accessor::ComponentType::F32,
            target,
            bounds,
        )
    }

    fn push_component(
        &mut self,
        bytes: &[u8],
        count: usize,
        type_: json::accessor::Type,
        component: json::accessor::ComponentType,
        target: json::buffer::Target,
        bounds: Option<([f32; 3], [f32; 3])>,
    ) -> AccessorIndex {
        let offset = self.data.len();
        self.data.extend_from_slice(bytes);

        self.views.push(json::buffer::View {
            buffer: json::Index::new(0),
            byte_length: bytes.len().into(),
            byte_offset: Some((offset as u64).into()),
            byte_stride: None,
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            target: Some(Valid(target)),
        });

        let (min, max) = match bounds {
            Some((min, max)) => (
                Some(json::Value::Array(
                    min.into_iter().map(json::Value::from).collect(),
                )),
                Some(json::Value::Array(
                    max.into_iter().map(json::Value::from).collect(),
                )),
            ),
            None => (None, None),
        };

        let index = self.accessors.len() as u32;
        self.accessors.push(json::Accessor {
            buffer_view: Some(json::Index::new(self.views.len() as u32 - 1)),
            byte_offset: Some(0u64.into()),
            count: count.into(),
            component_type: Valid(json::accessor::GenericComponentType(component)),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(type_),
            min,
            max,
            name: None,
            normalized: false,
            sparse: None,
        });

        align_to_4(&mut self.data);
        AccessorIndex(index)
    }
}

/// Component-wise min/max over a position list.
fn position_bounds(positions: &[[f32; 3]]) -> ([f32; 3], [f32; 3]) {
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];
    for p in positions {
        for axis in 0..3 {
            min[axis] = min[axis].min(p[axis]);
            max[axis] = max[axis].max(p[axis]);
        }
    }
    (min, max)
}

/// Pads the buffer to a 4-byte boundary.
pub fn align_to_4(buffer: &mut Vec<u8>) {
    while buffer.len() % 4 != 0 {
        buffer.push(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_positions_records_bounds() {
        let mut builder = BufferBuilder::new();
        let index = builder.push_positions(&[[0.0, 0.0, 0.0], [1.0, 2.0, 3.0]]);

        assert_eq!(index, AccessorIndex(0));
        assert_eq!(builder.views().len(), 1);
        assert_eq!(builder.data().len(), 24);

        let accessor = &builder.accessors()[0];
        assert!(accessor.min.is_some());
        assert!(accessor.max.is_some());
    }

    #[test]
    fn test_push_indices_uses_u32() {
        let mut builder = BufferBuilder::new();
        builder.push_indices(&[0, 1, 2]);
        // 3 indices * 4 bytes, already aligned
        assert_eq!(builder.data().len(), 12);
    }

    #[test]
    fn test_accessor_indices_increment() {
        let mut builder = BufferBuilder::new();
        let a = builder.push_positions(&[[0.0; 3]]);
        let b = builder.push_vec4(&[[1.0; 4]]);
        let c = builder.push_indices(&[0]);
        assert_eq!((a, b, c), (AccessorIndex(0), AccessorIndex(1), AccessorIndex(2)));
    }

    #[test]
    fn test_align_to_4() {
        let mut buffer = vec![1u8, 2, 3];
        align_to_4(&mut buffer);
        assert_eq!(buffer, vec![1, 2, 3, 0]);

        let mut aligned = vec![1u8, 2, 3, 4];
        align_to_4(&mut aligned);
        assert_eq!(aligned.len(), 4);
    }

    #[test]
    fn test_position_bounds() {
        let (min, max) = position_bounds(&[[0.0, 5.0, -1.0], [2.0, -3.0, 4.0]]);
        assert_eq!(min, [0.0, -3.0, -1.0]);
        assert_eq!(max, [2.0, 5.0, 4.0]);
    }
}
