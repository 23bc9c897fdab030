//! # Configuration Constants
//!
//! Centralized constants and layout parameters for the temple generator.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default tessellation parameters
//! - **Layout**: The declarative [`TempleParams`] structure and the fixed
//!   decorative offsets placement code reads by name

use std::fmt;

// =============================================================================
// PRECISION
// =============================================================================

/// Numerical tolerance used by geometry code for zero/degeneracy checks.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// RESOLUTION
// =============================================================================

/// Default radial subdivision count for column shafts, capitals, and bases.
/// Higher values produce smoother columns at the cost of vertex count.
pub const DEFAULT_COLUMN_SEGMENTS: u32 = 24;

/// Radial subdivision count for the decorative reflecting pool.
pub const POOL_SEGMENTS: u32 = 32;

// =============================================================================
// OUTPUT
// =============================================================================

/// Default path the generator writes the exported GLB asset to.
pub const DEFAULT_OUTPUT_PATH: &str = "assets/greek_temple.glb";

// =============================================================================
// FIXED LAYOUT OFFSETS
// =============================================================================
//
// Insets and scales that position elements relative to the platform edges.
// These mirror the reference temple's proportions and are not expected to
// vary per run, unlike the top-level `TempleParams` fields.

/// Total width inset of the front/back column rows (half on each side).
pub const COLUMN_ROW_SPAN_INSET: f64 = 2.0;

/// Distance of the front/back column rows from the depth edge.
pub const COLUMN_ROW_DEPTH_INSET: f64 = 1.5;

/// Total depth inset of the side column span.
pub const SIDE_COLUMN_SPAN_INSET: f64 = 3.0;

/// Capital radius as a multiple of the shaft radius.
pub const CAPITAL_RADIUS_SCALE: f64 = 1.3;

/// Capital height.
pub const CAPITAL_HEIGHT: f64 = 0.4;

/// Column base radius as a multiple of the shaft radius.
pub const BASE_RADIUS_SCALE: f64 = 1.2;

/// Column base height.
pub const BASE_HEIGHT: f64 = 0.3;

/// Thickness of the pediment prisms along the depth axis.
pub const PEDIMENT_THICKNESS: f64 = 0.5;

// =============================================================================
// TEMPLE PARAMETERS
// =============================================================================

/// Declarative layout configuration for one temple generation run.
///
/// Every structural dimension the placement code needs is a named field
/// here; the defaults reproduce the reference temple (20 x 12 platform,
/// hexastyle front).
///
/// # Examples
/// ```
/// use config::constants::TempleParams;
///
/// let params = TempleParams {
///     front_columns: 8,
///     ..TempleParams::default()
/// };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempleParams {
    /// Platform (stylobate) width along the X axis.
    pub platform_width: f64,
    /// Platform depth along the Y axis.
    pub platform_depth: f64,
    /// Height of each of the three platform tiers.
    pub tier_height: f64,
    /// Number of columns in the front row (the back row mirrors it).
    pub front_columns: u32,
    /// Side-row column count; the first and last positions are skipped
    /// because the front/back rows already occupy the corners.
    pub side_columns: u32,
    /// Column shaft radius.
    pub column_radius: f64,
    /// Column shaft height.
    pub column_height: f64,
    /// Radial subdivisions per column shaft, capital, and base.
    pub column_segments: u32,
    /// Height of the entablature block above the columns.
    pub entablature_height: f64,
    /// Rise of the pediment apex above the roof base.
    pub pediment_height: f64,
}

impl TempleParams {
    /// Checks the implicit preconditions of the layout formulas.
    ///
    /// Column spacing divides by `count - 1`, so both column counts must be
    /// at least 2; every dimension must be strictly positive; cylinders
    /// need at least 3 radial segments.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = [
            ("platform_width", self.platform_width),
            ("platform_depth", self.platform_depth),
            ("tier_height", self.tier_height),
            ("column_radius", self.column_radius),
            ("column_height", self.column_height),
            ("entablature_height", self.entablature_height),
            ("pediment_height", self.pediment_height),
        ];
        for (name, value) in dims {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveDimension { name, value });
            }
        }
        if self.front_columns < 2 {
            return Err(ConfigError::TooFewColumns {
                name: "front_columns",
                count: self.front_columns,
            });
        }
        if self.side_columns < 2 {
            return Err(ConfigError::TooFewColumns {
                name: "side_columns",
                count: self.side_columns,
            });
        }
        if self.column_segments < 3 {
            return Err(ConfigError::TooFewSegments(self.column_segments));
        }
        Ok(())
    }

    /// Z coordinate of the stylobate top (three stacked tiers).
    pub fn platform_top(&self) -> f64 {
        3.0 * self.tier_height
    }

    /// Z coordinate where the roof structure begins.
    pub fn roof_base(&self) -> f64 {
        self.platform_top() + self.column_height + self.entablature_height
    }

    /// Width of the pediment triangles at the roofline.
    pub fn pediment_base_width(&self) -> f64 {
        self.platform_width - 1.0
    }
}

impl Default for TempleParams {
    fn default() -> Self {
        Self {
            platform_width: 20.0,
            platform_depth: 12.0,
            tier_height: 0.5,
            front_columns: 6,
            side_columns: 4,
            column_radius: 0.4,
            column_height: 6.0,
            column_segments: DEFAULT_COLUMN_SEGMENTS,
            entablature_height: 1.5,
            pediment_height: 2.5,
        }
    }
}

/// Error returned when invalid layout parameters are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when a structural dimension is zero or negative.
    NonPositiveDimension {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// Raised when a column row is too short for the spacing formula.
    TooFewColumns {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected count.
        count: u32,
    },
    /// Raised when the segment count cannot form a polygon.
    TooFewSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveDimension { name, value } => {
                write!(f, "{name} must be positive: {value}")
            }
            ConfigError::TooFewColumns { name, count } => {
                write!(f, "{name} must be >= 2: {count}")
            }
            ConfigError::TooFewSegments(value) => {
                write!(f, "column_segments must be >= 3: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
