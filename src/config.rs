use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::wave::WavePreset;

/// Grid extent (world units) and subdivision counts for the surface mesh
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: f32,
    pub height: f32,
    pub rows: u32,
    pub cols: u32,
}

impl GridConfig {
    pub const fn new(width: f32, height: f32, rows: u32, cols: u32) -> Self {
        Self {
            width,
            height,
            rows,
            cols,
        }
    }
}

/// Pointer-parallax parameters for the camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParallaxConfig {
    /// Horizontal target offset per unit of normalized pointer x
    pub scale_x: f32,
    /// Vertical target offset per unit of normalized pointer y (applied
    /// with inverted sign: pointer down moves the camera up)
    pub scale_y: f32,
    /// Fraction of the remaining distance covered each tick, in (0, 1)
    pub smoothing: f32,
}

/// A colored point light with linear distance falloff
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub intensity: f32,
    /// Distance at which the light's contribution reaches zero
    pub range: f32,
}

/// Scene lighting: a white ambient term plus two colored point lights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightingConfig {
    pub ambient_intensity: f32,
    pub lights: [PointLight; 2],
}

/// Complete parameter set for one animated surface
///
/// Two presets ship with the crate ([`RenderConfig::hero`] and
/// [`RenderConfig::panel`]); a JSON file with the same shape can replace
/// either via [`RenderConfig::from_path`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub grid: GridConfig,
    pub wave: WavePreset,
    /// Continuous rotation about the surface normal, radians per second
    pub spin: f32,
    /// Fixed tilt about the x axis, radians
    pub tilt: f32,
    /// Vertical offset of the surface in world units
    pub y_offset: f32,
    pub parallax: ParallaxConfig,
    pub lighting: LightingConfig,
    /// Base wireframe color, RGB in 0..1
    pub color: [f32; 3],
    pub opacity: f32,
}

/// Violet wireframe, 0x7c3aed scaled to unit range
const WIRE_COLOR: [f32; 3] = [0.486, 0.227, 0.929];

const LIGHT_CYAN: PointLight = PointLight {
    position: [3.0, 3.0, 3.0],
    color: [0.024, 0.714, 0.831],
    intensity: 2.0,
    range: 20.0,
};

const LIGHT_VIOLET: PointLight = PointLight {
    position: [-3.0, -2.0, 2.0],
    color: WIRE_COLOR,
    intensity: 2.0,
    range: 20.0,
};

impl RenderConfig {
    /// Landing-page preset: dense grid, stronger swell, brighter wireframe
    pub const fn hero() -> Self {
        Self {
            grid: GridConfig::new(10.0, 10.0, 60, 60),
            wave: WavePreset::HERO,
            spin: 0.02,
            tilt: -std::f32::consts::PI / 3.5,
            y_offset: -1.5,
            parallax: ParallaxConfig {
                scale_x: 0.3,
                scale_y: 0.2,
                smoothing: 0.04,
            },
            lighting: LightingConfig {
                ambient_intensity: 0.5,
                lights: [LIGHT_CYAN, LIGHT_VIOLET],
            },
            color: WIRE_COLOR,
            opacity: 0.18,
        }
    }

    /// Sign-in panel preset: coarser grid, calmer motion, fainter wireframe
    pub const fn panel() -> Self {
        Self {
            grid: GridConfig::new(10.0, 10.0, 50, 50),
            wave: WavePreset::PANEL,
            spin: 0.015,
            tilt: -std::f32::consts::PI / 3.5,
            y_offset: -1.5,
            parallax: ParallaxConfig {
                scale_x: 0.2,
                scale_y: 0.15,
                smoothing: 0.04,
            },
            lighting: LightingConfig {
                ambient_intensity: 0.4,
                lights: [LIGHT_CYAN, LIGHT_VIOLET],
            },
            color: WIRE_COLOR,
            opacity: 0.14,
        }
    }

    /// Load a configuration from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject parameter combinations the renderer cannot run with
    pub fn validate(&self) -> Result<()> {
        let grid = &self.grid;
        if grid.width <= 0.0 || grid.height <= 0.0 {
            anyhow::bail!("grid extent must be positive, got {}x{}", grid.width, grid.height);
        }
        if grid.rows == 0 || grid.cols == 0 {
            anyhow::bail!("grid needs at least one subdivision per axis");
        }
        let smoothing = self.parallax.smoothing;
        if !(smoothing > 0.0 && smoothing < 1.0) {
            anyhow::bail!("parallax smoothing must lie in (0, 1), got {}", smoothing);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        assert!(RenderConfig::hero().validate().is_ok());
        assert!(RenderConfig::panel().validate().is_ok());
    }

    #[test]
    fn presets_differ_in_motion_and_density() {
        let hero = RenderConfig::hero();
        let panel = RenderConfig::panel();
        assert_ne!(hero.wave, panel.wave);
        assert!(hero.grid.rows > panel.grid.rows);
        assert!(hero.spin > panel.spin);
        assert!(hero.opacity > panel.opacity);
    }

    #[test]
    fn zero_subdivisions_rejected() {
        let mut config = RenderConfig::hero();
        config.grid.rows = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn out_of_range_smoothing_rejected() {
        let mut config = RenderConfig::hero();
        config.parallax.smoothing = 1.0;
        assert!(config.validate().is_err());
        config.parallax.smoothing = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_survives_json() {
        let hero = RenderConfig::hero();
        let json = serde_json::to_string(&hero).unwrap();
        let parsed: RenderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, hero);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = RenderConfig::from_path(Path::new("/no/such/config.json")).unwrap_err();
        assert!(err.to_string().contains("/no/such/config.json"));
    }
}
