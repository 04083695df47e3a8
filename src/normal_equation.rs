use crate::conjugate_gradient::solve_conjugate_gradient;
use crate::error::{CgError, Result};
use crate::operator::ExplicitNormalMatrix;
use crate::{CgConfig, CgSolution, Real};
use na::{DMatrix, DVector};

/// Conjugate gradient solver for normal equations `AᵀA·x = Aᵀb` whose matrix
/// `AᵀA` has already been formed.
///
/// The solver is stateless: every call to [`Self::solve`] is independent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NormalEquationCg {
    config: CgConfig,
}

impl NormalEquationCg {
    /// Creates a solver with the given iteration parameters.
    pub fn new(config: CgConfig) -> Self {
        Self { config }
    }

    /// The iteration parameters of this solver.
    pub fn config(&self) -> &CgConfig {
        &self.config
    }

    /// Solves `ata * x = atb`, starting from `x0`.
    ///
    /// # Parameters
    /// - `ata`: the `n×n` normal-equation matrix. It must be symmetric positive-definite;
    ///   this is not checked (that would require a factorization). If it is not, the
    ///   iteration may stagnate, diverge, or stop with
    ///   [`crate::Termination::DegenerateDirection`].
    /// - `atb`: the right-hand side, of length `n`.
    /// - `x0`: the initial guess, of length `n`. It is copied, never modified.
    ///
    /// Running out of iterations or hitting a degenerate direction is not an error:
    /// the last iterate is returned with `converged == false`.
    pub fn solve(
        &self,
        ata: &DMatrix<Real>,
        atb: &DVector<Real>,
        x0: &DVector<Real>,
    ) -> Result<CgSolution> {
        self.config.validate()?;

        if ata.nrows() != ata.ncols() {
            return Err(CgError::NotSquare {
                rows: ata.nrows(),
                cols: ata.ncols(),
            });
        }

        let n = ata.ncols();
        CgError::check_len("atb", n, atb.len())?;
        CgError::check_len("x0", n, x0.len())?;

        let mut op = ExplicitNormalMatrix::new(ata, atb);
        Ok(solve_conjugate_gradient(
            &mut op,
            x0,
            &self.config,
            "normal_equation",
        ))
    }
}
