/*!
Conjugate gradient solvers for dense least-squares problems `A·x ≈ b`.

Two entry points solve the normal equations `AᵀA·x = Aᵀb`:
- [`NormalEquationCg`] when `AᵀA` and `Aᵀb` are already available.
- [`DirectLeastSquaresCg`] when only `A` and `b` are, computing `Aᵀ·(A·p)` on the fly.

Both are stateless and report convergence diagnostics in a [`CgSolution`].
*/

#![warn(missing_docs)]

/// Floating-point type used by this library.
pub type Real = f64;

extern crate nalgebra as na;

pub use self::batch::{LeastSquaresProblem, NormalEquationProblem};
pub use self::config::CgConfig;
pub use self::direct::DirectLeastSquaresCg;
pub use self::error::{CgError, Result};
pub use self::normal_equation::NormalEquationCg;
pub use self::operator::{least_squares_residual_norm, normal_equations};
pub use self::solution::{CgSolution, Termination};

pub mod batch;
mod config;
mod conjugate_gradient;
mod direct;
mod error;
mod normal_equation;
mod operator;
mod solution;
