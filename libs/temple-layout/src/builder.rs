//! # Temple Builder
//!
//! Runs the placement components in construction order and returns the
//! accumulated scene.

use crate::columns::colonnade;
use crate::error::BuildError;
use crate::garden::gardens;
use crate::platform::platform;
use crate::roof::roof;
use crate::scene::Scene;
use crate::structure::{cella, entablature};
use config::constants::TempleParams;

/// Assembles the complete temple scene from layout parameters.
///
/// Parameters are validated up front; afterwards each component appends
/// its primitives in a fixed order (platform, colonnade, entablature,
/// roof, cella, gardens).
///
/// # Example
///
/// ```rust
/// use config::constants::TempleParams;
/// use temple_layout::build_temple;
///
/// let scene = build_temple(&TempleParams::default()).unwrap();
/// assert!(!scene.is_empty());
/// ```
pub fn build_temple(params: &TempleParams) -> Result<Scene, BuildError> {
    params.validate()?;

    let mut scene = Scene::new();
    platform(params, &mut scene)?;
    colonnade(params, &mut scene)?;
    entablature(params, &mut scene)?;
    roof(params, &mut scene)?;
    cella(params, &mut scene)?;
    gardens(params, &mut scene)?;
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_default_temple() {
        let scene = build_temple(&TempleParams::default()).unwrap();
        assert!(scene.len() > 10);
        assert!(scene.vertex_count() > 0);
    }

    #[test]
    fn test_build_rejects_invalid_params() {
        let params = TempleParams {
            front_columns: 1,
            ..TempleParams::default()
        };
        assert!(matches!(
            build_temple(&params),
            Err(BuildError::Config(_))
        ));
    }
}
