//! # Stockassess Math
//!
//! Numerical routines used inside gradient-based stock assessment models.
//!
//! This crate provides:
//!
//! - **Barrier**: Smooth positivity barrier with penalty ([`posfun`]) and [`square`]
//! - **Composition**: Logistic-normal noise ([`add_comp_noise`]) and negative
//!   log-density ([`neg_log_logistic_normal`]) for compositional data
//! - **Mortality**: Chapman-Robson total mortality ([`cr_mort`]) and the
//!   fixed-iteration Baranov catch equation solver ([`solve_baranov_dd`])
//!
//! ## Design Philosophy
//!
//! - **Differentiable**: Every routine is generic over [`Scalar`], so it
//!   runs on `f64` or on [`Dual`](stockassess_core::Dual) numbers unchanged
//! - **No hard failures**: Degenerate numerics produce sentinels or penalties
//! - **Fixed cost**: Iterative routines run a fixed number of steps
//!
//! [`Scalar`]: stockassess_core::Scalar

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]

pub mod barrier;
pub mod composition;
pub mod error;
pub mod mortality;

pub use barrier::{posfun, posfun_acc, square, square_all, Posfun};
pub use composition::{add_comp_noise, neg_log_logistic_normal, validate_composition};
pub use error::{MathError, MathResult};
pub use mortality::{
    baranov_catch, chapman_robson, cr_mort, solve_baranov_dd, solve_baranov_with,
    BaranovConfig, BaranovSolution, CatchCurveConfig, ChapmanRobson,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::barrier::{posfun, posfun_acc, square, square_all, Posfun};
    pub use crate::composition::{
        add_comp_noise, neg_log_logistic_normal, validate_composition,
    };
    pub use crate::error::{MathError, MathResult};
    pub use crate::mortality::{
        baranov_catch, chapman_robson, cr_mort, solve_baranov_dd, solve_baranov_with,
        BaranovConfig, BaranovSolution, CatchCurveConfig, ChapmanRobson,
    };
    pub use stockassess_core::{select_ge, select_lt, Dual, Scalar};
}
