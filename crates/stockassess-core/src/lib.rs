//! # Stockassess Core
//!
//! Scalar abstraction shared by the Stockassess numerical routines.
//!
//! This crate provides:
//!
//! - **Scalar**: the differentiable numeric type every routine is generic over
//! - **Selection**: branch-free conditional selection ([`select_ge`], [`select_lt`])
//! - **Dual numbers**: forward-mode automatic differentiation via [`Dual`]
//!
//! ## Design Philosophy
//!
//! - **Differentiable by construction**: routines written against [`Scalar`]
//!   work unchanged with `f64` and with [`Dual`]
//! - **No hidden branches**: conditional results are chosen with selection
//!   primitives whose branch values are evaluated before the choice is made
//! - **Generic**: Works with `f32`, `f64` and `Dual<T>`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]

pub mod dual;
pub mod scalar;

pub use dual::Dual;
pub use scalar::{select_ge, select_lt, Scalar};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::dual::Dual;
    pub use crate::scalar::{select_ge, select_lt, Scalar};
}
