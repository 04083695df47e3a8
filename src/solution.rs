use crate::Real;
use na::DVector;

/// Why the conjugate gradient iteration stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Termination {
    /// The residual norm dropped below the tolerance.
    Converged,
    /// The iteration cap was reached before the tolerance.
    MaxIterations,
    /// `pᵀ·AᵀA·p` vanished (or became non-finite) while the residual was still above
    /// the tolerance. This happens when `AᵀA` is singular or not positive-definite.
    DegenerateDirection,
}

/// The approximate solution of a least-squares problem, with convergence diagnostics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct CgSolution {
    /// The last iterate. Always finite, even when the iteration did not converge.
    pub x: DVector<Real>,
    /// Number of conjugate gradient steps actually applied to `x`: convergence on the
    /// first step reports `1`, an initial guess already within the tolerance reports `0`.
    pub iterations: usize,
    /// `true` iff `termination == Termination::Converged`.
    pub converged: bool,
    /// Norm of the (recurrence-updated) residual associated to `x`.
    pub residual_norm: Real,
    /// Why the iteration stopped.
    pub termination: Termination,
    /// Residual norms `‖r₀‖, ‖r₁‖, …`, only filled when
    /// [`crate::CgConfig::record_residuals`] is set.
    pub residual_history: Vec<Real>,
}

impl CgSolution {
    /// Consumes the solution, keeping only the iterate.
    pub fn into_vector(self) -> DVector<Real> {
        self.x
    }
}
