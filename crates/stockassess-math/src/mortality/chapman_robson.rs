//! Chapman-Robson total mortality estimator.

use log::debug;
use serde::{Deserialize, Serialize};
use stockassess_core::Scalar;

use crate::error::{MathError, MathResult};

/// Value reported for `Z` when the age composition holds nothing to estimate from.
pub const CR_MORT_SENTINEL: f64 = -1.0;

/// Age window and truncation threshold for a catch-curve estimate.
///
/// Ages are 1-indexed: `kage = 1` refers to the first entry of the age
/// composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatchCurveConfig {
    /// Age of full selectivity/recruitment.
    pub kage: usize,
    /// Plus-group age.
    pub aplus: usize,
    /// Minimum observation; the walk stops at the first age below it.
    #[serde(default)]
    pub min_obs: u32,
}

impl CatchCurveConfig {
    /// Creates a window over ages `kage..=aplus` with no truncation threshold.
    #[must_use]
    pub fn new(kage: usize, aplus: usize) -> Self {
        Self {
            kage,
            aplus,
            min_obs: 0,
        }
    }

    /// Sets the minimum observation threshold.
    #[must_use]
    pub fn with_min_obs(mut self, min_obs: u32) -> Self {
        self.min_obs = min_obs;
        self
    }

    /// Runs [`chapman_robson`] over this window.
    pub fn estimate<T: Scalar>(&self, age_comp: &[T]) -> MathResult<ChapmanRobson<T>> {
        chapman_robson(age_comp, self.kage, self.aplus, self.min_obs)
    }
}

/// A Chapman-Robson estimate with the quantities it was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChapmanRobson<T> {
    /// Total instantaneous mortality, or [`CR_MORT_SENTINEL`].
    pub z: T,
    /// Mean age above `kage`, weighted by the retained observations.
    pub mean_age: T,
    /// Sum of the retained observations.
    pub total: T,
    /// Number of consecutive ages retained from `kage` upwards.
    pub ages_used: usize,
}

impl<T: Scalar> ChapmanRobson<T> {
    /// Returns true when no estimate could be formed and `z` is the sentinel.
    pub fn is_degenerate(&self) -> bool {
        self.ages_used == 0 || self.total == T::zero() || self.mean_age == T::zero()
    }

    fn degenerate(total: T, ages_used: usize) -> Self {
        Self {
            z: T::from_f64(CR_MORT_SENTINEL),
            mean_age: T::zero(),
            total,
            ages_used,
        }
    }
}

/// Chapman-Robson estimate of total mortality from an age composition.
///
/// Starting at `kage` and moving up to `aplus`, each observation at or above
/// `min_obs` is retained at offset `a - kage`; the walk stops at the first
/// observation below `min_obs` (later ages are not considered even if they
/// pass). With `N` the sum of retained observations and `ā` their mean
/// offset,
///
/// ```text
/// Z = ln((1 + ā - 1/N) / ā)
/// ```
///
/// When nothing is retained, or `ā = 0` (only the `kage` class survives the
/// truncation), `Z` is [`CR_MORT_SENTINEL`].
///
/// # Arguments
///
/// * `age_comp` - Observations by age class, first entry is age 1
/// * `kage` - Age of full recruitment (1-indexed)
/// * `aplus` - Plus-group age (1-indexed, inclusive)
/// * `min_obs` - Truncation threshold
///
/// # Errors
///
/// Returns [`MathError::InvalidAgeRange`] if `kage` is zero, `aplus < kage`,
/// or `aplus` exceeds the number of age classes.
pub fn chapman_robson<T: Scalar>(
    age_comp: &[T],
    kage: usize,
    aplus: usize,
    min_obs: u32,
) -> MathResult<ChapmanRobson<T>> {
    if kage == 0 || aplus < kage || aplus > age_comp.len() {
        return Err(MathError::InvalidAgeRange {
            kage,
            aplus,
            len: age_comp.len(),
        });
    }

    let threshold = T::from_f64(f64::from(min_obs));
    let mut total = T::zero();
    let mut abar = T::zero();
    let mut ages_used = 0;

    for (offset, &obs) in age_comp[kage - 1..aplus].iter().enumerate() {
        if obs >= threshold {
            total += obs;
            abar += T::from_f64(offset as f64) * obs;
            ages_used += 1;
        } else {
            break;
        }
    }

    if ages_used == 0 || total == T::zero() {
        debug!(
            "Chapman-Robson: no observations >= {} from age {}, reporting sentinel",
            min_obs, kage
        );
        return Ok(ChapmanRobson::degenerate(total, ages_used));
    }

    abar /= total;

    if abar == T::zero() {
        debug!(
            "Chapman-Robson: mean age is zero over {} age(s) from age {}, reporting sentinel",
            ages_used, kage
        );
        return Ok(ChapmanRobson::degenerate(total, ages_used));
    }

    let z = ((T::one() + abar - T::one() / total) / abar).ln();

    Ok(ChapmanRobson {
        z,
        mean_age: abar,
        total,
        ages_used,
    })
}

/// Chapman-Robson total mortality `Z`, or `-1` when it cannot be estimated.
///
/// Shorthand for [`chapman_robson`] returning only `z`.
///
/// # Example
///
/// ```rust
/// use stockassess_math::cr_mort;
///
/// // 10 fish at age 1, 5 at age 2: mean offset 1/3, N = 15
/// let z = cr_mort(&[10.0, 5.0], 1, 2, 1).unwrap();
/// assert!((z - 3.8_f64.ln()).abs() < 1e-12);
///
/// // Nothing reaches the threshold at kage
/// assert_eq!(cr_mort(&[0.0, 5.0], 1, 2, 1).unwrap(), -1.0);
/// ```
pub fn cr_mort<T: Scalar>(
    age_comp: &[T],
    kage: usize,
    aplus: usize,
    min_obs: u32,
) -> MathResult<T> {
    chapman_robson(age_comp, kage, aplus, min_obs).map(|est| est.z)
}
