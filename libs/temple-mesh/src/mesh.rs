//! # Mesh Data Structure
//!
//! Triangle mesh with positions, indices, and optional per-vertex colors
//! and normals. Used both for individual primitives and for the merged
//! temple surface.

use crate::material::DEFAULT_COLOR;
use config::constants::EPSILON_TOLERANCE;
use glam::{DMat4, DVec3};

/// A triangle mesh.
///
/// Positions are stored as f64 for precision; colors are f32 because they
/// only exist for the GPU-facing exporter.
///
/// # Example
///
/// ```rust
/// use temple_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_vertex(DVec3::ZERO);
/// let b = mesh.add_vertex(DVec3::X);
/// let c = mesh.add_vertex(DVec3::Y);
/// mesh.add_triangle(a, b, c);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    positions: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
    colors: Option<Vec<[f32; 4]>>,
    normals: Option<Vec<DVec3>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            colors: None,
            normals: None,
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// True when the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Appends a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        index
    }

    /// Appends a triangle by vertex indices.
    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.triangles.push([a, b, c]);
    }

    /// Vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Triangle index triples.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Per-vertex RGBA colors, if assigned.
    pub fn colors(&self) -> Option<&[[f32; 4]]> {
        self.colors.as_deref()
    }

    /// Assigns one color to every vertex.
    pub fn set_uniform_color(&mut self, color: [f32; 4]) {
        self.colors = Some(vec![color; self.positions.len()]);
    }

    /// Per-vertex normals, if computed.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Recomputes per-vertex normals from accumulated face normals.
    ///
    /// Every triangle contributes its area-weighted face normal to its
    /// three corners, so the result renders correctly regardless of each
    /// source primitive's original winding consistency.
    pub fn recompute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.positions.len()];

        for tri in &self.triangles {
            let p0 = self.positions[tri[0] as usize];
            let p1 = self.positions[tri[1] as usize];
            let p2 = self.positions[tri[2] as usize];
            let face_normal = (p1 - p0).cross(p2 - p0);

            for &corner in tri {
                normals[corner as usize] += face_normal;
            }
        }

        for normal in &mut normals {
            let length = normal.length();
            if length > EPSILON_TOLERANCE {
                *normal /= length;
            }
        }

        self.normals = Some(normals);
    }

    /// Axis-aligned bounding box, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let first = *self.positions.first()?;
        let bounds = self
            .positions
            .iter()
            .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(bounds)
    }

    /// Translates every vertex by `offset`.
    pub fn translate(&mut self, offset: DVec3) {
        for p in &mut self.positions {
            *p += offset;
        }
    }

    /// Applies a 4x4 transform to positions (and normals when present).
    pub fn transform(&mut self, matrix: &DMat4) {
        for p in &mut self.positions {
            *p = matrix.transform_point3(*p);
        }

        // Normals transform by the inverse transpose
        if let Some(normals) = &mut self.normals {
            let normal_matrix = matrix.inverse().transpose();
            for n in normals {
                *n = normal_matrix.transform_vector3(*n).normalize();
            }
        }
    }

    /// Applies `f` to every vertex position.
    pub fn map_positions(&mut self, f: impl Fn(DVec3) -> DVec3) {
        for p in &mut self.positions {
            *p = f(*p);
        }
    }

    /// Applies `f` to every normal, when normals are present.
    pub fn map_normals(&mut self, f: impl Fn(DVec3) -> DVec3) {
        if let Some(normals) = &mut self.normals {
            for n in normals {
                *n = f(*n);
            }
        }
    }

    /// Appends another mesh, offsetting its indices by the running vertex
    /// total so they keep referencing the appended vertices.
    ///
    /// Colors are concatenated in the same order; if only one side carries
    /// colors the other side is padded with [`DEFAULT_COLOR`].
    pub fn merge(&mut self, other: &Mesh) {
        let base = self.positions.len() as u32;

        self.positions.extend_from_slice(&other.positions);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|[a, b, c]| [a + base, b + base, c + base]),
        );

        match (&mut self.colors, &other.colors) {
            (Some(own), Some(theirs)) => own.extend_from_slice(theirs),
            (Some(own), None) => {
                own.resize(self.positions.len(), DEFAULT_COLOR);
            }
            (None, Some(theirs)) => {
                let mut colors = vec![DEFAULT_COLOR; base as usize];
                colors.extend_from_slice(theirs);
                self.colors = Some(colors);
            }
            (None, None) => {}
        }

        // Stale normals would no longer cover the appended vertices.
        self.normals = None;
    }

    /// Checks that every triangle references existing, distinct vertices.
    pub fn validate(&self) -> bool {
        let vertex_count = self.positions.len() as u32;
        self.triangles.iter().all(|&[a, b, c]| {
            a < vertex_count && b < vertex_count && c < vertex_count && a != b && b != c && a != c
        })
    }

    /// Positions as `[x, y, z]` f32 triples for the export boundary.
    pub fn positions_f32(&self) -> Vec<[f32; 3]> {
        self.positions
            .iter()
            .map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect()
    }

    /// Normals as `[x, y, z]` f32 triples, when present.
    pub fn normals_f32(&self) -> Option<Vec<[f32; 3]>> {
        self.normals.as_ref().map(|normals| {
            normals
                .iter()
                .map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect()
        })
    }

    /// Triangle indices as a flat u32 list.
    pub fn indices_flat(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}
