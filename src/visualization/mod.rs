//! Display style for rendered surfaces
//!
//! Holds the user-chosen surface colour. The evaluator never reads it;
//! only the export boundary does.

use crate::precision::DEFAULT_COLOR;
use crate::{PondeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`, case-insensitive.
    ///
    /// # Example
    /// ```
    /// use ponde::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#AFEEEE")?, Rgb::new(0xaf, 0xee, 0xee));
    /// assert!(Rgb::from_hex("#afe").is_err());
    /// # Ok::<(), ponde::PondeError>(())
    /// ```
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PondeError::InvalidColor(format!(
                "expected #rrggbb, got {:?}",
                s
            )));
        }

        let channel = |idx: usize| {
            u8::from_str_radix(&hex[idx..idx + 2], 16)
                .map_err(|e| PondeError::InvalidColor(format!("{:?}: {}", s, e)))
        };
        Ok(Rgb {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Channels as [R, G, B] normalized to [0.0, 1.0]
    pub fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}

impl FromStr for Rgb {
    type Err = PondeError;

    fn from_str(s: &str) -> Result<Self> {
        Rgb::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Surface display style
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceStyle {
    pub color: Rgb,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        SurfaceStyle {
            color: Rgb::from_hex(DEFAULT_COLOR).unwrap_or(Rgb::new(0xaf, 0xee, 0xee)),
        }
    }
}

impl SurfaceStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }
}
