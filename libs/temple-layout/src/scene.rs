//! # Scene
//!
//! Append-only ordered collection of placed primitives, each carrying a
//! material. Merging produces the single combined mesh the exporter
//! consumes.

use temple_mesh::{Material, Mesh};

/// One placed primitive and its material.
#[derive(Debug, Clone)]
pub struct ScenePart {
    /// The placed primitive surface.
    pub mesh: Mesh,
    /// Material expanded to per-vertex colors at merge time.
    pub material: Material,
}

/// Ordered accumulation of primitives for one generation run.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    parts: Vec<ScenePart>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a placed primitive.
    pub fn push(&mut self, mesh: Mesh, material: Material) {
        self.parts.push(ScenePart { mesh, material });
    }

    /// Number of primitives accumulated so far.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// True when no primitives were added.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The accumulated parts, in insertion order.
    pub fn parts(&self) -> &[ScenePart] {
        &self.parts
    }

    /// Sum of the constituent primitives' vertex counts.
    pub fn vertex_count(&self) -> usize {
        self.parts.iter().map(|p| p.mesh.vertex_count()).sum()
    }

    /// Sum of the constituent primitives' triangle counts.
    pub fn triangle_count(&self) -> usize {
        self.parts.iter().map(|p| p.mesh.triangle_count()).sum()
    }

    /// Concatenates every primitive into one mesh.
    ///
    /// Face indices are offset by the running vertex total, materials are
    /// expanded to per-vertex colors, and normals are recomputed at the end
    /// so each primitive's original winding no longer matters for lighting.
    /// Insertion order is preserved in the output arrays.
    pub fn merge(&self) -> Mesh {
        let mut merged = Mesh::with_capacity(self.vertex_count(), self.triangle_count());

        for part in &self.parts {
            let mut colored = part.mesh.clone();
            colored.set_uniform_color(part.material.color());
            merged.merge(&colored);
        }

        if !merged.is_empty() {
            merged.recompute_normals();
        }
        merged
    }
}
