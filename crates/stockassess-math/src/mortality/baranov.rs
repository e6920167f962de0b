//! Baranov catch equation solver for delay-difference models.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use stockassess_core::Scalar;

use crate::error::{MathError, MathResult};

/// Default number of Newton-Raphson iterations.
pub const DEFAULT_BARANOV_ITERATIONS: usize = 20;

/// Relative residual above which a finished solve is logged.
const RESIDUAL_LOG_THRESHOLD: f64 = 1e-6;

/// Configuration for the Baranov solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaranovConfig {
    /// Number of Newton-Raphson iterations, always performed in full.
    pub iterations: usize,
    /// Fraction of the Newton step taken at each iteration.
    pub step: f64,
}

impl Default for BaranovConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_BARANOV_ITERATIONS,
            step: 1.0,
        }
    }
}

impl BaranovConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(iterations: usize, step: f64) -> Self {
        Self { iterations, step }
    }

    /// Sets the number of iterations.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the step fraction.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }
}

/// Result of a Baranov solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaranovSolution<T> {
    /// Fishing mortality.
    pub f: T,
    /// Total mortality, `M + F`.
    pub z: T,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Observed minus predicted catch at the returned `F`.
    pub residual: T,
}

impl<T: Scalar> BaranovSolution<T> {
    /// Fails with [`MathError::ConvergenceFailed`] unless `|residual| <= tolerance`.
    ///
    /// The solver itself never checks convergence; this is for callers that
    /// want the check made explicit.
    pub fn ensure_converged(self, tolerance: f64) -> MathResult<Self> {
        let residual = self.residual.value().abs();
        if residual <= tolerance {
            Ok(self)
        } else {
            Err(MathError::convergence_failed(self.iterations, residual))
        }
    }
}

/// Catch predicted by the Baranov equation: `B (1 - e^{-Z}) F / Z` with `Z = M + F`.
pub fn baranov_catch<T: Scalar>(f: T, m: T, b: T) -> T {
    let z = m + f;
    b * (T::one() - (-z).exp()) * f / z
}

/// Solves the Baranov catch equation for fishing mortality.
///
/// Finds `F` such that `C = B (1 - e^{-Z}) F / Z` with `Z = M + F`, using
/// damped Newton-Raphson from `F = C / (C + B)`:
///
/// `F_{n+1} = F_n - step * (C - Ĉ(F_n)) / J(F_n)`
///
/// where `J = -B ((1 - e^{-Z}) M / Z² + e^{-Z} F / Z)`.
///
/// Exactly `n_iter` iterations are performed with no tolerance test, so the
/// cost (and the length of any derivative tape built over it) does not
/// depend on the data. Nothing guards against a vanishing Jacobian or a
/// non-physical `F`; inputs must keep the iteration well posed. The returned
/// residual lets the caller check convergence, see
/// [`BaranovSolution::ensure_converged`].
///
/// `Z` is refreshed after every update, including the last, so the returned
/// `z` is always `M + f`.
///
/// # Arguments
///
/// * `n_iter` - Number of Newton-Raphson iterations
/// * `b_step` - Fraction of the Newton step to take
/// * `c` - Observed catch
/// * `m` - Natural mortality
/// * `b` - Biomass
pub fn solve_baranov_dd<T: Scalar>(
    n_iter: usize,
    b_step: T,
    c: T,
    m: T,
    b: T,
) -> BaranovSolution<T> {
    let mut f = c / (c + b);
    let mut z = m + f;

    for iteration in 0..n_iter {
        let survival = (-z).exp();
        let predicted = b * (T::one() - survival) * f / z;
        let residual = c - predicted;
        let jacobian = -b * ((T::one() - survival) * m / z.powi(2) + survival * f / z);

        f -= b_step * residual / jacobian;
        z = m + f;

        trace!(
            "Baranov iteration {}: F={:.6e}, Z={:.6e}, residual={:.3e}",
            iteration,
            f.value(),
            z.value(),
            residual.value()
        );
    }

    let residual = c - baranov_catch(f, m, b);

    let abs_residual = residual.value().abs();
    let tolerance = RESIDUAL_LOG_THRESHOLD * c.value().abs().max(1.0);
    if abs_residual.is_nan() || abs_residual > tolerance {
        debug!(
            "Baranov solve ended after {} iterations with residual {:.3e} (C={:.4e}, B={:.4e}, M={:.4e})",
            n_iter,
            residual.value(),
            c.value(),
            b.value(),
            m.value()
        );
    }

    BaranovSolution {
        f,
        z,
        iterations: n_iter,
        residual,
    }
}

/// [`solve_baranov_dd`] driven by a [`BaranovConfig`].
pub fn solve_baranov_with<T: Scalar>(
    config: &BaranovConfig,
    c: T,
    m: T,
    b: T,
) -> BaranovSolution<T> {
    solve_baranov_dd(config.iterations, T::from_f64(config.step), c, m, b)
}
