//! Parallel solving of independent problems.
//!
//! Each problem runs its own sequential recurrence; only distinct problems are
//! distributed over the rayon thread pool.

use crate::error::Result;
use crate::{CgSolution, DirectLeastSquaresCg, NormalEquationCg, Real};
use na::{DMatrix, DVector};
use rayon::prelude::*;

/// Normal equations `ata * x = atb` with an initial guess `x0`.
#[derive(Copy, Clone, Debug)]
pub struct NormalEquationProblem<'a> {
    /// The `n×n` symmetric positive-definite matrix.
    pub ata: &'a DMatrix<Real>,
    /// The right-hand side.
    pub atb: &'a DVector<Real>,
    /// The initial guess.
    pub x0: &'a DVector<Real>,
}

/// A least-squares problem `a * x ≈ b` with an initial guess `x0`.
#[derive(Copy, Clone, Debug)]
pub struct LeastSquaresProblem<'a> {
    /// The `m×n` matrix.
    pub a: &'a DMatrix<Real>,
    /// The observations, of length `m`.
    pub b: &'a DVector<Real>,
    /// The initial guess.
    pub x0: &'a DVector<Real>,
}

impl NormalEquationCg {
    /// Solves every problem in parallel. Results are in the same order as `problems`.
    pub fn solve_batch(&self, problems: &[NormalEquationProblem]) -> Vec<Result<CgSolution>> {
        problems
            .par_iter()
            .map(|pb| self.solve(pb.ata, pb.atb, pb.x0))
            .collect()
    }
}

impl DirectLeastSquaresCg {
    /// Solves every problem in parallel. Results are in the same order as `problems`.
    pub fn solve_batch(&self, problems: &[LeastSquaresProblem]) -> Vec<Result<CgSolution>> {
        problems
            .par_iter()
            .map(|pb| self.solve(pb.a, pb.b, pb.x0))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::{LeastSquaresProblem, NormalEquationProblem};
    use crate::{CgError, DirectLeastSquaresCg, NormalEquationCg};
    use na::{DMatrix, DVector};

    #[test]
    fn batch_preserves_order_and_errors() {
        let scales = [1.0, 2.0, 4.0, 8.0];
        let matrices: Vec<_> = scales
            .iter()
            .map(|s| DMatrix::<f64>::identity(3, 3) * *s)
            .collect();
        let rhs = DVector::from_column_slice(&[1.0, 2.0, 3.0]);
        let x0 = DVector::zeros(3);
        let bad_x0 = DVector::zeros(2);

        let mut problems: Vec<_> = matrices
            .iter()
            .map(|ata| NormalEquationProblem {
                ata,
                atb: &rhs,
                x0: &x0,
            })
            .collect();
        problems.push(NormalEquationProblem {
            ata: &matrices[0],
            atb: &rhs,
            x0: &bad_x0,
        });

        let results = NormalEquationCg::default().solve_batch(&problems);
        assert_eq!(results.len(), 5);

        for (result, s) in results.iter().zip(scales.iter()) {
            let sol = result.as_ref().unwrap();
            assert!(sol.converged);
            assert!((&sol.x - &rhs / *s).norm() < 1.0e-12);
        }

        assert!(matches!(
            results[4],
            Err(CgError::DimensionMismatch { what: "x0", .. })
        ));
    }

    #[test]
    fn direct_batch() {
        let a = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
        let b1 = DVector::from_column_slice(&[1.0, 1.0, 2.0]);
        let b2 = DVector::from_column_slice(&[2.0, -1.0, 1.0]);
        let x0 = DVector::zeros(2);
        let problems = [
            LeastSquaresProblem {
                a: &a,
                b: &b1,
                x0: &x0,
            },
            LeastSquaresProblem {
                a: &a,
                b: &b2,
                x0: &x0,
            },
        ];

        let results = DirectLeastSquaresCg::default().solve_batch(&problems);
        let x1 = &results[0].as_ref().unwrap().x;
        let x2 = &results[1].as_ref().unwrap().x;
        assert!((x1 - DVector::from_column_slice(&[1.0, 1.0])).norm() < 1.0e-10);
        assert!((x2 - DVector::from_column_slice(&[2.0, -1.0])).norm() < 1.0e-10);
    }
}
