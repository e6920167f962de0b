//! Integration test: a small delay-difference objective function.
//!
//! Chains the routines the way an assessment model's objective does:
//! solve the Baranov equation for each year's fishing mortality, project
//! biomass through the positivity barrier, build the equilibrium age
//! composition implied by the final total mortality, and score a noisy
//! observation of it with the logistic-normal likelihood. The gradient with
//! respect to natural mortality is taken with dual numbers and checked
//! against central differences.

use approx::assert_relative_eq;
use stockassess_math::prelude::*;

const CATCHES: [f64; 6] = [120.0, 180.0, 240.0, 260.0, 200.0, 150.0];
const INITIAL_BIOMASS: f64 = 2000.0;
const RECRUITMENT: f64 = 350.0;
const N_AGES: usize = 12;
const EPS: f64 = 1.0;

/// Log-space ageing error applied to the "observed" composition.
const AGEING_NOISE: [f64; N_AGES] = [
    0.12, -0.05, 0.08, -0.2, 0.03, 0.15, -0.1, 0.0, 0.07, -0.04, 0.11, -0.09,
];

struct Projection<T> {
    last_z: T,
    penalty: T,
    biomass: Vec<T>,
}

fn project<T: Scalar>(m: T) -> Projection<T> {
    let config = BaranovConfig::default();
    let mut biomass = vec![T::from_f64(INITIAL_BIOMASS)];
    let mut penalty = T::zero();
    let mut last_z = m;

    for &catch in &CATCHES {
        let b = *biomass.last().unwrap();
        let sol = solve_baranov_with(&config, T::from_f64(catch), m, b);
        let next = b * (-sol.z).exp() + T::from_f64(RECRUITMENT);
        biomass.push(posfun_acc(next, T::from_f64(EPS), &mut penalty));
        last_z = sol.z;
    }

    Projection {
        last_z,
        penalty,
        biomass,
    }
}

fn equilibrium_composition<T: Scalar>(z: T) -> Vec<T> {
    let raw: Vec<T> = (0..N_AGES)
        .map(|a| (-z * T::from_f64(a as f64)).exp())
        .collect();
    let total = raw.iter().fold(T::zero(), |acc, &x| acc + x);
    raw.into_iter().map(|x| x / total).collect()
}

fn objective<T: Scalar>(m: T, observed: &[T]) -> T {
    let proj = project(m);
    let predicted = equilibrium_composition(proj.last_z);
    neg_log_logistic_normal(observed, &predicted, T::from_f64(0.05)).unwrap() + proj.penalty
}

fn simulated_observation(m_true: f64) -> Vec<f64> {
    let proj = project(m_true);
    let truth = equilibrium_composition(proj.last_z);
    add_comp_noise(&truth, &AGEING_NOISE).unwrap()
}

#[test]
fn test_projection_stays_positive_and_matches_catches() {
    let config = BaranovConfig::default();
    let proj = project(0.25_f64);

    assert_eq!(proj.biomass.len(), CATCHES.len() + 1);
    assert!(proj.biomass.iter().all(|&b| b > EPS));
    assert_relative_eq!(proj.penalty, 0.0);

    for (year, &catch) in CATCHES.iter().enumerate() {
        let b = proj.biomass[year];
        let sol = solve_baranov_with(&config, catch, 0.25, b)
            .ensure_converged(1e-6)
            .unwrap();
        assert_relative_eq!(baranov_catch(sol.f, 0.25, b), catch, epsilon = 1e-6);
    }
}

#[test]
fn test_observation_is_a_composition() {
    let obs = simulated_observation(0.25);
    assert_eq!(obs.len(), N_AGES);
    assert!(validate_composition(&obs).is_ok());
    assert_relative_eq!(obs.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_gradient_matches_finite_differences() {
    let obs = simulated_observation(0.25);
    let obs_dual: Vec<Dual> = obs.iter().copied().map(Dual::constant).collect();

    let m = 0.3;
    let analytic = objective(Dual::variable(m), &obs_dual).deriv;

    let h = 1e-6;
    let numeric = (objective(m + h, &obs) - objective(m - h, &obs)) / (2.0 * h);

    assert_relative_eq!(analytic, numeric, max_relative = 1e-5);
}

#[test]
fn test_true_mortality_scores_better_than_wrong_one() {
    let obs = simulated_observation(0.25);
    assert!(objective(0.25, &obs) < objective(0.6, &obs));
}

#[test]
fn test_catch_curve_recovers_equilibrium_mortality() {
    // Expected counts from the equilibrium composition of a large sample
    let proj = project(0.25_f64);
    let counts: Vec<f64> = equilibrium_composition(proj.last_z)
        .iter()
        .map(|p| p * 1.0e6)
        .collect();

    let est = CatchCurveConfig::new(1, N_AGES).estimate(&counts).unwrap();
    assert_eq!(est.ages_used, N_AGES);

    // Truncation at the plus group biases the estimate upwards slightly
    assert!(est.z > proj.last_z);
    assert_relative_eq!(est.z, proj.last_z, max_relative = 0.05);
}

#[test]
fn test_barrier_engages_under_overfishing() {
    // Catch takes 98% of the stock; only recruitment keeps biomass off zero
    let sol = solve_baranov_with(&BaranovConfig::default(), 490.0, 0.2, 500.0_f64);
    assert_relative_eq!(baranov_catch(sol.f, 0.2, 500.0), 490.0, epsilon = 1e-8);

    let next = 500.0 * (-sol.z).exp() + 8.0;
    let mut penalty = 0.0;
    let protected = posfun_acc(next, 10.0, &mut penalty);

    assert!(next < 10.0);
    assert!(protected > 10.0);
    assert_relative_eq!(penalty, 0.01 * (next - 10.0).powi(2), epsilon = 1e-15);
}
