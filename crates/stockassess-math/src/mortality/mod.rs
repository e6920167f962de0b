//! Mortality estimation.
//!
//! - [`cr_mort`] / [`chapman_robson`]: closed-form total mortality `Z` from a
//!   truncated age composition (Chapman and Robson, 1960; Dunn et al., 2002)
//! - [`solve_baranov_dd`]: fishing mortality `F` matching an observed catch
//!   under the Baranov catch equation, for models without age structure
//!
//! # Choosing a Routine
//!
//! | Routine | Input | Output | Cost |
//! |---------|-------|--------|------|
//! | Chapman-Robson | Age composition | `Z` (or `-1`) | One pass over ages |
//! | Baranov | Catch, biomass, `M` | `F`, `Z` | Fixed Newton iterations |
//!
//! # Example
//!
//! ```rust
//! use stockassess_math::mortality::{baranov_catch, solve_baranov_dd};
//!
//! let sol = solve_baranov_dd(20, 1.0, 50.0_f64, 0.2, 1000.0);
//! assert!((baranov_catch(sol.f, 0.2, 1000.0) - 50.0).abs() < 1e-8);
//! assert!((sol.z - (0.2 + sol.f)).abs() < 1e-15);
//! ```

mod baranov;
mod chapman_robson;

pub use baranov::{
    baranov_catch, solve_baranov_dd, solve_baranov_with, BaranovConfig, BaranovSolution,
    DEFAULT_BARANOV_ITERATIONS,
};
pub use chapman_robson::{
    chapman_robson, cr_mort, CatchCurveConfig, ChapmanRobson, CR_MORT_SENTINEL,
};
