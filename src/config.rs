use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::angle::AngleRange;
use crate::precision::{DEFAULT_A, DEFAULT_B, DEFAULT_COLOR, DEFAULT_SAMPLES, DEFAULT_VIEW_EXTENT};
use crate::surface::ShapeConstants;
use crate::visualization::{Rgb, SurfaceStyle};
use crate::Result;

/// Render-time inputs for one evaluation of the surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Samples per angular range (θ and φ share it)
    pub samples: usize,

    /// Ring radius
    pub a: f64,

    /// Lobe radius
    pub b: f64,

    /// Display colour, `#rrggbb`
    pub color: String,

    /// Half-width of the cubic view volume
    pub view_extent: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            a: DEFAULT_A,
            b: DEFAULT_B,
            color: DEFAULT_COLOR.to_string(),
            view_extent: DEFAULT_VIEW_EXTENT,
        }
    }
}

impl RenderConfig {
    /// Load from a JSON file; absent fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Validated shape constants.
    pub fn shape(&self) -> Result<ShapeConstants> {
        ShapeConstants::new(self.a, self.b)
    }

    /// Display style with the parsed colour.
    pub fn style(&self) -> Result<SurfaceStyle> {
        Ok(SurfaceStyle::new().with_color(Rgb::from_hex(&self.color)?))
    }

    /// θ and φ ranges, each `samples` long over `[0, 2π]`.
    pub fn ranges(&self) -> Result<(AngleRange, AngleRange)> {
        Ok((
            AngleRange::full_turn(self.samples)?,
            AngleRange::full_turn(self.samples)?,
        ))
    }
}
