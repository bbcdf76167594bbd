use crate::error::{ParameterError, Result};
use crate::math::to_radians;

/// Relative slack, in units of `f64::EPSILON`, added to the step quotient
/// so that sweeps like `[0, 0.3)` step `0.1` are not shortened by
/// representation error. Quotients a real distance below an integer still
/// round down.
const COUNT_SLACK_ULPS: f64 = 4.0;

/// Upper bound on the number of samples in one sweep.
pub const MAX_SAMPLES: usize = 1 << 16;

/// Produces the sample angles of a half-open sweep `[start, end)`.
///
/// The sample count is `floor((end - start) / step)`; a trailing partial
/// step is dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSampler {
    start: f64,
    step: f64,
    count: usize,
}

impl AngleSampler {
    /// Creates a sampler over `[start, end)` degrees in increments of `step`.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not positive, `start >= end`, any
    /// bound is not finite, or the sweep holds more than [`MAX_SAMPLES`]
    /// angles.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self> {
        for (parameter, value) in [("angle_start", start), ("angle_end", end), ("angle_step", step)] {
            if !value.is_finite() {
                return Err(ParameterError::NonFinite { parameter }.into());
            }
        }
        if step <= 0.0 {
            return Err(ParameterError::NonPositiveStep { step }.into());
        }
        if start >= end {
            return Err(ParameterError::EmptySweep { start, end }.into());
        }

        let quotient = (end - start) / step;
        let count = (quotient + quotient * f64::EPSILON * COUNT_SLACK_ULPS).floor();
        if !count.is_finite() || count > MAX_SAMPLES as f64 {
            return Err(ParameterError::TooManySamples {
                count,
                max: MAX_SAMPLES,
            }
            .into());
        }
        let count = count as usize;
        Ok(Self { start, step, count })
    }

    /// Number of angles the sampler yields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the step is wider than the sweep.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the `index`-th angle in degrees.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn degrees_at(&self, index: usize) -> f64 {
        self.start + index as f64 * self.step
    }

    /// Returns a fresh iterator over the sample angles, in radians.
    ///
    /// Each call restarts from the first angle.
    #[must_use]
    pub fn angles(&self) -> Angles {
        Angles {
            sampler: *self,
            next: 0,
        }
    }
}

impl IntoIterator for &AngleSampler {
    type Item = f64;
    type IntoIter = Angles;

    fn into_iter(self) -> Angles {
        self.angles()
    }
}

/// Iterator over the angles of an [`AngleSampler`], in radians.
#[derive(Debug, Clone)]
pub struct Angles {
    sampler: AngleSampler,
    next: usize,
}

impl Iterator for Angles {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.sampler.count {
            return None;
        }
        let angle = to_radians(self.sampler.degrees_at(self.next));
        self.next += 1;
        Some(angle)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sampler.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Angles {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::PolarisError;

    #[test]
    fn quarter_turns_over_full_circle() {
        let sampler = AngleSampler::new(0.0, 360.0, 90.0).unwrap();
        let angles: Vec<f64> = sampler.angles().collect();
        assert_eq!(angles.len(), 4);
        for (got, want) in angles.iter().zip([0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2]) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-9);
        }
    }

    #[test]
    fn default_sweep_has_181_samples() {
        let sampler = AngleSampler::new(0.0, 181.0, 1.0).unwrap();
        assert_eq!(sampler.len(), 181);
        let last = sampler.angles().last().unwrap();
        assert_abs_diff_eq!(last, PI, epsilon = 1e-12);
    }

    #[test]
    fn partial_trailing_step_is_dropped() {
        let sampler = AngleSampler::new(0.0, 10.0, 3.0).unwrap();
        assert_eq!(sampler.len(), 3);
        assert_abs_diff_eq!(sampler.degrees_at(2), 6.0);
    }

    #[test]
    fn fractional_step_keeps_exact_count() {
        let sampler = AngleSampler::new(0.0, 0.3, 0.1).unwrap();
        assert_eq!(sampler.len(), 3);
    }

    #[test]
    fn quotient_just_below_integer_rounds_down() {
        let sampler = AngleSampler::new(0.0, 2.999_999_999_9, 1.0).unwrap();
        assert_eq!(sampler.len(), 2);
    }

    #[test]
    fn sample_limit_is_inclusive() {
        #[allow(clippy::cast_precision_loss)]
        let end = MAX_SAMPLES as f64;
        let sampler = AngleSampler::new(0.0, end, 1.0).unwrap();
        assert_eq!(sampler.len(), MAX_SAMPLES);
        assert!(AngleSampler::new(0.0, end + 1.0, 1.0).is_err());
    }

    #[test]
    fn huge_sweep_is_rejected() {
        let err = AngleSampler::new(0.0, 1e30, 1e-10).unwrap_err();
        assert!(matches!(
            err,
            PolarisError::Parameter(ParameterError::TooManySamples { max: MAX_SAMPLES, .. })
        ));
    }

    #[test]
    fn step_wider_than_sweep_is_empty() {
        let sampler = AngleSampler::new(0.0, 5.0, 10.0).unwrap();
        assert!(sampler.is_empty());
        assert_eq!(sampler.angles().count(), 0);
    }

    #[test]
    fn iteration_is_restartable() {
        let sampler = AngleSampler::new(-45.0, 45.0, 15.0).unwrap();
        let first: Vec<f64> = sampler.angles().collect();
        let second: Vec<f64> = (&sampler).into_iter().collect();
        assert_eq!(first, second);
        assert_abs_diff_eq!(first[0], -PI / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn iterator_reports_exact_length() {
        let sampler = AngleSampler::new(0.0, 181.0, 1.0).unwrap();
        let mut angles = sampler.angles();
        assert_eq!(angles.len(), 181);
        angles.next();
        assert_eq!(angles.len(), 180);
    }

    #[test]
    fn non_positive_step_is_rejected() {
        let err = AngleSampler::new(0.0, 90.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            PolarisError::Parameter(ParameterError::NonPositiveStep { .. })
        ));
    }

    #[test]
    fn empty_sweep_is_rejected() {
        let err = AngleSampler::new(180.0, 0.0, 1.0).unwrap_err();
        assert!(matches!(
            err,
            PolarisError::Parameter(ParameterError::EmptySweep { .. })
        ));
    }

    #[test]
    fn infinite_bound_is_rejected() {
        assert!(AngleSampler::new(0.0, f64::INFINITY, 1.0).is_err());
    }
}
