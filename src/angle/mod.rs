//! Angular sampling and the folding transform

use crate::precision::FULL_TURN;
use crate::{PondeError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_4, FRAC_PI_8, PI};

/// Fold an angle into the sawtooth `f(θ) = θ - (π/4)·⌊(4/π)(θ + π/8)⌋`.
///
/// The result has period π/4 and lies in `[-π/8, π/8)`. NaN in gives NaN
/// out.
///
/// # Example
/// ```
/// use ponde::fold;
///
/// assert_eq!(fold(0.0), 0.0);
/// assert!(fold(std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
#[inline]
pub fn fold(theta: f64) -> f64 {
    theta - FRAC_PI_4 * (4.0 / PI * (theta + FRAC_PI_8)).floor()
}

/// Fold every angle of a slice, preserving order and length.
pub fn fold_all(thetas: &[f64]) -> Vec<f64> {
    thetas.iter().copied().map(fold).collect()
}

/// Ordered sequence of evenly spaced angles.
///
/// # Example
/// ```
/// use ponde::AngleRange;
///
/// let theta = AngleRange::full_turn(100)?;
/// assert_eq!(theta.len(), 100);
/// assert_eq!(theta.values()[0], 0.0);
/// assert_eq!(theta.values()[99], std::f64::consts::TAU);
/// # Ok::<(), ponde::PondeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleRange {
    values: Vec<f64>,
}

impl AngleRange {
    /// `n` samples over `[start, stop]`, both endpoints included.
    ///
    /// A single sample yields `[start]`.
    ///
    /// # Errors
    /// Returns `InvalidRange` if `n` is zero or a bound is not finite.
    pub fn linspace(start: f64, stop: f64, n: usize) -> Result<Self> {
        Self::check_bounds(start, stop, n)?;
        if n == 1 {
            return Ok(AngleRange { values: vec![start] });
        }

        let step = (stop - start) / (n - 1) as f64;
        let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
        // Pin the endpoint so the ring seam closes exactly.
        values[n - 1] = stop;

        Ok(AngleRange { values })
    }

    /// `n` samples over `[start, stop)`, endpoint excluded.
    pub fn linspace_half_open(start: f64, stop: f64, n: usize) -> Result<Self> {
        Self::check_bounds(start, stop, n)?;
        let step = (stop - start) / n as f64;
        let values = (0..n).map(|i| start + i as f64 * step).collect();
        Ok(AngleRange { values })
    }

    /// `n` samples over `[0, 2π]`, the sampling the reference plot uses.
    pub fn full_turn(n: usize) -> Result<Self> {
        Self::linspace(0.0, FULL_TURN, n)
    }

    /// `n` samples over `[0, 2π)`, without a duplicated seam.
    pub fn half_open(n: usize) -> Result<Self> {
        Self::linspace_half_open(0.0, FULL_TURN, n)
    }

    /// Wrap explicit angle samples.
    ///
    /// # Errors
    /// Returns `InvalidRange` if `values` is empty or holds a non-finite sample.
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        let range = AngleRange { values };
        range.validate()?;
        Ok(range)
    }

    /// Check that the range is non-empty and every sample is finite.
    ///
    /// Ranges from the constructors always pass; deserialized ones may not.
    pub fn validate(&self) -> Result<()> {
        if self.values.is_empty() {
            return Err(PondeError::InvalidRange(
                "Angle range must contain at least one sample".into(),
            ));
        }
        if let Some((idx, v)) = self.values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(PondeError::InvalidRange(format!(
                "Angle sample {} is not finite: {}",
                idx, v
            )));
        }
        Ok(())
    }

    fn check_bounds(start: f64, stop: f64, n: usize) -> Result<()> {
        if n == 0 {
            return Err(PondeError::InvalidRange(
                "Sample count must be positive (non-zero)".into(),
            ));
        }
        if !start.is_finite() || !stop.is_finite() {
            return Err(PondeError::InvalidRange(format!(
                "Angle bounds must be finite, got [{}, {}]",
                start, stop
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// False for any range that passes [`AngleRange::validate`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Folded angle for every sample.
    pub fn folded(&self) -> Vec<f64> {
        fold_all(&self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precision::{ANGULAR, FOLD_PHASE};
    use std::f64::consts::{FRAC_PI_2, TAU};

    #[test]
    fn test_fold_zero() {
        assert_eq!(fold(0.0), 0.0);
    }

    #[test]
    fn test_fold_quarter_turn() {
        // 4/π · (π/2 + π/8) = 2.5, floor 2, so f = π/2 - π/2
        assert!(fold(FRAC_PI_2).abs() < ANGULAR);
    }

    #[test]
    fn test_fold_jumps_at_phase() {
        let below = fold(FOLD_PHASE - 1e-9);
        let above = fold(FOLD_PHASE + 1e-9);
        assert!((below - FOLD_PHASE).abs() < 1e-8);
        assert!((above + FOLD_PHASE).abs() < 1e-8);
    }

    #[test]
    fn test_fold_negative_angle() {
        // -0.5 sits one period below the principal interval
        let f = fold(-0.5);
        assert!((f - (-0.5 + FRAC_PI_4)).abs() < ANGULAR);
    }

    #[test]
    fn test_fold_nan() {
        assert!(fold(f64::NAN).is_nan());
    }

    #[test]
    fn test_fold_all_preserves_shape() {
        let input = [0.0, 0.1, 1.0, 5.0];
        let out = fold_all(&input);
        assert_eq!(out.len(), input.len());
        for (f, t) in out.iter().zip(input.iter()) {
            assert_eq!(*f, fold(*t));
        }
    }

    #[test]
    fn test_linspace_endpoints() {
        let r = AngleRange::full_turn(100).unwrap();
        assert_eq!(r.len(), 100);
        assert_eq!(r.values()[0], 0.0);
        assert_eq!(r.values()[99], TAU);
        let step = TAU / 99.0;
        assert!((r.values()[1] - step).abs() < 1e-15);
    }

    #[test]
    fn test_half_open_excludes_endpoint() {
        let r = AngleRange::half_open(8).unwrap();
        assert_eq!(r.len(), 8);
        assert!((r.values()[7] - 7.0 * TAU / 8.0).abs() < ANGULAR);
        assert!(r.iter().all(|v| v < TAU));
    }

    #[test]
    fn test_single_sample() {
        let r = AngleRange::linspace(1.5, 3.0, 1).unwrap();
        assert_eq!(r.values(), &[1.5]);
    }

    #[test]
    fn test_zero_samples_rejected() {
        assert!(matches!(
            AngleRange::full_turn(0),
            Err(PondeError::InvalidRange(_))
        ));
        assert!(matches!(
            AngleRange::half_open(0),
            Err(PondeError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_empty_values_rejected() {
        assert!(AngleRange::from_values(vec![]).is_err());
    }

    #[test]
    fn test_non_finite_values_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                AngleRange::from_values(vec![0.0, bad]),
                Err(PondeError::InvalidRange(_))
            ));
        }
        assert!(AngleRange::from_values(vec![0.0, 1.0]).is_ok());
    }

    #[test]
    fn test_validate_catches_unchecked_nan() {
        let r = AngleRange {
            values: vec![0.0, f64::NAN],
        };
        assert!(matches!(r.validate(), Err(PondeError::InvalidRange(_))));
    }

    #[test]
    fn test_non_finite_bounds_rejected() {
        assert!(AngleRange::linspace(0.0, f64::INFINITY, 4).is_err());
    }
}
