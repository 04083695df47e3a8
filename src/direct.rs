use crate::conjugate_gradient::solve_conjugate_gradient;
use crate::error::{CgError, Result};
use crate::operator::ImplicitNormalMatrix;
use crate::{CgConfig, CgSolution, Real};
use na::{DMatrix, DVector};

/// Conjugate gradient solver for the least-squares problem `A·x ≈ b` that works on
/// `A` directly.
///
/// Each iteration computes `Aᵀ·(A·p)` with two matrix-vector products instead of
/// multiplying by `AᵀA`. This costs one extra `O(mn)` product per iteration but
/// never forms `AᵀA`, whose condition number is the square of `A`'s.
///
/// With the default configuration the iteration cap is `n` (the number of columns
/// of `A`), the same as [`crate::NormalEquationCg`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DirectLeastSquaresCg {
    config: CgConfig,
}

impl DirectLeastSquaresCg {
    /// Creates a solver with the given iteration parameters.
    pub fn new(config: CgConfig) -> Self {
        Self { config }
    }

    /// The iteration parameters of this solver.
    pub fn config(&self) -> &CgConfig {
        &self.config
    }

    /// Minimizes `‖a * x − b‖`, starting from `x0`.
    ///
    /// `a` is `m×n` (typically `m >= n` with full column rank), `b` has length `m`
    /// and `x0` has length `n`. `x0` is copied, never modified. If `a` is
    /// column-rank-deficient the iteration may stop with
    /// [`crate::Termination::DegenerateDirection`].
    pub fn solve(
        &self,
        a: &DMatrix<Real>,
        b: &DVector<Real>,
        x0: &DVector<Real>,
    ) -> Result<CgSolution> {
        self.config.validate()?;
        CgError::check_len("b", a.nrows(), b.len())?;
        CgError::check_len("x0", a.ncols(), x0.len())?;

        let mut op = ImplicitNormalMatrix::new(a, b);
        Ok(solve_conjugate_gradient(
            &mut op,
            x0,
            &self.config,
            "direct_least_squares",
        ))
    }
}
