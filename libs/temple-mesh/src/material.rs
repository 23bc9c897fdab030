//! # Materials
//!
//! Named material identifiers mapped to RGBA colors. Each primitive in a
//! scene carries one material; the merge step expands it to per-vertex
//! colors for the exporter.

/// Color applied when a merged mesh mixes colored and uncolored parts.
pub const DEFAULT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Named materials for temple elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    /// Polished white marble for columns, roof, and cella.
    Marble,
    /// Weathered limestone for the platform and steps.
    Limestone,
    /// Still water for the reflecting pool.
    Water,
    /// Greenery for the decorative plants.
    Foliage,
    /// Fired clay for the plant pots.
    Terracotta,
}

impl Material {
    /// RGBA color of this material in linear 0..1 components.
    pub fn color(self) -> [f32; 4] {
        match self {
            // Reference marble tone: (240, 240, 245) / 255
            Material::Marble => [0.941, 0.941, 0.961, 1.0],
            Material::Limestone => [0.824, 0.804, 0.765, 1.0],
            Material::Water => [0.275, 0.510, 0.706, 1.0],
            Material::Foliage => [0.235, 0.431, 0.235, 1.0],
            Material::Terracotta => [0.627, 0.353, 0.235, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_in_unit_range() {
        let all = [
            Material::Marble,
            Material::Limestone,
            Material::Water,
            Material::Foliage,
            Material::Terracotta,
        ];
        for material in all {
            for component in material.color() {
                assert!((0.0..=1.0).contains(&component));
            }
        }
    }

    #[test]
    fn test_marble_is_near_white() {
        let [r, g, b, a] = Material::Marble.color();
        assert!(r > 0.9 && g > 0.9 && b > 0.9);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn test_materials_are_distinct() {
        assert_ne!(Material::Marble.color(), Material::Water.color());
        assert_ne!(Material::Limestone.color(), Material::Foliage.color());
    }
}
