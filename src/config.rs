use crate::error::{CgError, Result};
use crate::Real;

/// Parameters of the conjugate gradient iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct CgConfig {
    /// The iteration stops as soon as the residual norm `‖r‖` drops below this value.
    pub tolerance: Real,
    /// Maximum number of iterations. `None` means the problem dimension `n`,
    /// which is the exact-arithmetic termination bound of the method.
    pub max_iterations: Option<usize>,
    /// A search direction `p` is considered degenerate when
    /// `|pᵀ·AᵀA·p| <= breakdown_tolerance * ‖p‖ * ‖AᵀA·p‖`, i.e. when `p` and
    /// `AᵀA·p` are numerically orthogonal. The test does not depend on the scale of `AᵀA`.
    /// Must lie in `[0, 1]`.
    pub breakdown_tolerance: Real,
    /// Record the residual norm of every iteration in
    /// [`crate::CgSolution::residual_history`].
    pub record_residuals: bool,
}

impl Default for CgConfig {
    fn default() -> Self {
        Self {
            tolerance: 1.0e-10,
            max_iterations: None,
            breakdown_tolerance: Real::EPSILON,
            record_residuals: false,
        }
    }
}

impl CgConfig {
    /// Sets the residual tolerance.
    pub fn with_tolerance(mut self, tolerance: Real) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets an explicit iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Sets the relative curvature threshold below which a search direction is degenerate.
    pub fn with_breakdown_tolerance(mut self, breakdown_tolerance: Real) -> Self {
        self.breakdown_tolerance = breakdown_tolerance;
        self
    }

    /// Enables or disables the residual history.
    pub fn with_residual_history(mut self, record: bool) -> Self {
        self.record_residuals = record;
        self
    }

    /// The iteration cap for a problem of dimension `n`.
    pub fn max_iterations_for(&self, n: usize) -> usize {
        self.max_iterations.unwrap_or(n)
    }

    /// Checks that the parameters are usable.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(CgError::InvalidConfig {
                field: "tolerance",
                reason: "must be finite and strictly positive",
            });
        }

        if !(0.0..=1.0).contains(&self.breakdown_tolerance) {
            return Err(CgError::InvalidConfig {
                field: "breakdown_tolerance",
                reason: "must lie in [0, 1]",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::CgConfig;
    use crate::{CgError, Real};

    #[test]
    fn default_cap_is_problem_dimension() {
        let config = CgConfig::default();
        assert_eq!(config.max_iterations_for(12), 12);
        assert_eq!(config.with_max_iterations(3).max_iterations_for(12), 3);
    }

    #[test]
    fn rejects_bad_tolerances() {
        assert!(CgConfig::default().validate().is_ok());
        assert!(matches!(
            CgConfig::default().with_tolerance(0.0).validate(),
            Err(CgError::InvalidConfig {
                field: "tolerance",
                ..
            })
        ));
        assert!(CgConfig::default()
            .with_tolerance(Real::NAN)
            .validate()
            .is_err());
        assert!(matches!(
            CgConfig::default().with_breakdown_tolerance(-1.0).validate(),
            Err(CgError::InvalidConfig {
                field: "breakdown_tolerance",
                ..
            })
        ));
        assert!(CgConfig::default()
            .with_breakdown_tolerance(1.5)
            .validate()
            .is_err());
        assert!(CgConfig::default()
            .with_breakdown_tolerance(1.0)
            .validate()
            .is_ok());
    }
}
