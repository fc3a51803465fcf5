//! Constants for the lobed-ring surface.
//!
//! The fold constants fix the lobe count (eight lobes per turn) and the
//! lower bound on `b / a`. Tolerances follow the usual geometric split
//! between coincidence and angular checks.

use std::f64::consts::{FRAC_PI_4, FRAC_PI_8, TAU};

/// Period of the folding transform (radians).
pub const FOLD_PERIOD: f64 = FRAC_PI_4;

/// Phase shift applied before folding (radians).
/// Folded angles lie in `[-FOLD_PHASE, FOLD_PHASE)`.
pub const FOLD_PHASE: f64 = FRAC_PI_8;

/// One full turn (radians).
pub const FULL_TURN: f64 = TAU;

/// Confusion tolerance for checking coincidence of two points.
/// Value: 1.0e-7
pub const CONFUSION: f64 = 1.0e-7;

/// Angular tolerance for comparing folded angles.
/// Value: 1.0e-12
pub const ANGULAR: f64 = 1.0e-12;

/// Default sample count per angular range.
pub const DEFAULT_SAMPLES: usize = 100;

/// Default ring radius `a`.
pub const DEFAULT_A: f64 = 9.0;

/// Default lobe radius `b`.
pub const DEFAULT_B: f64 = 4.0;

/// Default display color (pale turquoise).
pub const DEFAULT_COLOR: &str = "#afeeee";

/// Half-width of the cubic view volume the surface is plotted into.
pub const DEFAULT_VIEW_EXTENT: f64 = 10.0;

/// Lower bound on `b / a`, equal to `sin(π/8)`.
///
/// The radicand `b² - a² sin² f(θ)` is smallest where `|f(θ)| = π/8`,
/// so the surface is real for every θ exactly when `b / a` exceeds this.
#[inline]
pub fn min_shape_ratio() -> f64 {
    FOLD_PHASE.sin()
}
