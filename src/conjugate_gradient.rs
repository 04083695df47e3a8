use crate::operator::NormalOperator;
use crate::{CgConfig, CgSolution, Real, Termination};
use na::DVector;

/// Runs the conjugate gradient recurrence on `op`, starting from a copy of `x0`.
///
/// The residual is updated by the recurrence and never recomputed, so it may
/// drift slightly from `Aᵀb − AᵀA·x` on long runs.
pub(crate) fn solve_conjugate_gradient<Op: NormalOperator>(
    op: &mut Op,
    x0: &DVector<Real>,
    config: &CgConfig,
    solver: &'static str,
) -> CgSolution {
    let n = op.dim();
    let max_iters = config.max_iterations_for(n);
    let mut x = x0.clone();
    let mut r = op.initial_residual(&x);
    let mut p = r.clone();
    let mut ap = DVector::zeros(n);
    let mut rr = r.dot(&r);
    let mut residual_history = vec![];
    let mut iterations = 0;

    if config.record_residuals {
        residual_history.push(rr.sqrt());
    }

    let mut termination = if rr.sqrt() < config.tolerance {
        Termination::Converged
    } else {
        Termination::MaxIterations
    };

    if termination != Termination::Converged {
        for i in 0..max_iters {
            op.apply(&p, &mut ap);
            let pap = p.dot(&ap);
            let alpha = rr / pap;

            // pᵀ·AᵀA·p ≈ 0 relative to ‖p‖·‖AᵀA·p‖ although r ≠ 0: AᵀA is
            // singular or indefinite along p.
            if !alpha.is_finite()
                || pap.abs() <= config.breakdown_tolerance * p.norm() * ap.norm()
            {
                tracing::warn!(
                    solver,
                    iteration = i,
                    curvature = pap,
                    residual = rr.sqrt(),
                    "degenerate search direction"
                );
                termination = Termination::DegenerateDirection;
                break;
            }

            x.axpy(alpha, &p, 1.0);
            r.axpy(-alpha, &ap, 1.0);
            iterations = i + 1;

            let new_rr = r.dot(&r);
            let beta = new_rr / rr;
            rr = new_rr;

            if config.record_residuals {
                residual_history.push(rr.sqrt());
            }

            tracing::trace!(solver, iteration = i, residual = rr.sqrt());

            if rr.sqrt() < config.tolerance {
                termination = Termination::Converged;
                break;
            }

            p.axpy(1.0, &r, beta);
        }
    }

    let residual_norm = rr.sqrt();
    tracing::debug!(
        solver,
        dim = n,
        iterations,
        residual = residual_norm,
        termination = ?termination,
        "conjugate gradient finished"
    );

    CgSolution {
        x,
        iterations,
        converged: termination == Termination::Converged,
        residual_norm,
        termination,
        residual_history,
    }
}
