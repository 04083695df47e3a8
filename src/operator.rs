use crate::Real;
use na::{DMatrix, DVector};

/// The symmetric operator `v ↦ AᵀA·v` the conjugate gradient iterates on.
pub(crate) trait NormalOperator {
    /// The dimension `n` of the normal equations.
    fn dim(&self) -> usize;
    /// Computes `out ← AᵀA·v`.
    fn apply(&mut self, v: &DVector<Real>, out: &mut DVector<Real>);
    /// Computes the residual `Aᵀb − AᵀA·x` of the normal equations at `x`.
    fn initial_residual(&self, x: &DVector<Real>) -> DVector<Real>;
}

/// Normal equations given by a precomputed `AᵀA` and `Aᵀb`.
pub(crate) struct ExplicitNormalMatrix<'a> {
    ata: &'a DMatrix<Real>,
    atb: &'a DVector<Real>,
}

impl<'a> ExplicitNormalMatrix<'a> {
    pub fn new(ata: &'a DMatrix<Real>, atb: &'a DVector<Real>) -> Self {
        Self { ata, atb }
    }
}

impl<'a> NormalOperator for ExplicitNormalMatrix<'a> {
    fn dim(&self) -> usize {
        self.ata.ncols()
    }

    fn apply(&mut self, v: &DVector<Real>, out: &mut DVector<Real>) {
        out.gemv(1.0, self.ata, v, 0.0);
    }

    fn initial_residual(&self, x: &DVector<Real>) -> DVector<Real> {
        let mut r = self.atb.clone();
        r.gemv(-1.0, self.ata, x, 1.0);
        r
    }
}

/// Normal equations of `A·x ≈ b` where `AᵀA` is never formed: every product
/// goes through `A·v` followed by `Aᵀ·(A·v)`.
pub(crate) struct ImplicitNormalMatrix<'a> {
    a: &'a DMatrix<Real>,
    b: &'a DVector<Real>,
    // Holds `A·v`, of length `m`.
    av: DVector<Real>,
}

impl<'a> ImplicitNormalMatrix<'a> {
    pub fn new(a: &'a DMatrix<Real>, b: &'a DVector<Real>) -> Self {
        Self {
            a,
            b,
            av: DVector::zeros(a.nrows()),
        }
    }
}

impl<'a> NormalOperator for ImplicitNormalMatrix<'a> {
    fn dim(&self) -> usize {
        self.a.ncols()
    }

    fn apply(&mut self, v: &DVector<Real>, out: &mut DVector<Real>) {
        self.av.gemv(1.0, self.a, v, 0.0);
        out.gemv_tr(1.0, self.a, &self.av, 0.0);
    }

    fn initial_residual(&self, x: &DVector<Real>) -> DVector<Real> {
        let mut b_ax = self.b.clone();
        b_ax.gemv(-1.0, self.a, x, 1.0);
        self.a.tr_mul(&b_ax)
    }
}

/// Forms the normal equations `(AᵀA, Aᵀb)` of the least-squares problem `A·x ≈ b`.
///
/// This costs `O(n²m)`. Prefer [`crate::DirectLeastSquaresCg`] when `AᵀA` is
/// not needed for anything else.
pub fn normal_equations(a: &DMatrix<Real>, b: &DVector<Real>) -> (DMatrix<Real>, DVector<Real>) {
    (a.tr_mul(a), a.tr_mul(b))
}

/// The norm of the normal-equation residual `‖Aᵀ(b − A·x)‖`, recomputed from scratch.
///
/// Unlike [`crate::CgSolution::residual_norm`] this does not accumulate the round-off
/// of the conjugate gradient recurrence.
pub fn least_squares_residual_norm(
    a: &DMatrix<Real>,
    b: &DVector<Real>,
    x: &DVector<Real>,
) -> Real {
    let mut b_ax = b.clone();
    b_ax.gemv(-1.0, a, x, 1.0);
    a.tr_mul(&b_ax).norm()
}

#[cfg(test)]
mod test {
    use super::{ExplicitNormalMatrix, ImplicitNormalMatrix, NormalOperator};
    use na::{DMatrix, DVector};

    fn sample() -> (DMatrix<f64>, DVector<f64>) {
        let a = DMatrix::from_row_slice(4, 2, &[1.0, 2.0, 0.0, 1.0, 3.0, -1.0, 2.0, 2.0]);
        let b = DVector::from_column_slice(&[1.0, -1.0, 2.0, 0.5]);
        (a, b)
    }

    #[test]
    fn implicit_and_explicit_products_agree() {
        let (a, b) = sample();
        let (ata, atb) = super::normal_equations(&a, &b);
        let v = DVector::from_column_slice(&[0.5, -2.0]);

        let mut explicit = ExplicitNormalMatrix::new(&ata, &atb);
        let mut implicit = ImplicitNormalMatrix::new(&a, &b);
        assert_eq!(explicit.dim(), 2);
        assert_eq!(implicit.dim(), 2);

        let mut out1 = DVector::zeros(2);
        let mut out2 = DVector::zeros(2);
        explicit.apply(&v, &mut out1);
        implicit.apply(&v, &mut out2);
        assert!((&out1 - &out2).norm() < 1.0e-12);
        assert!((&out1 - &ata * &v).norm() < 1.0e-12);

        let r1 = explicit.initial_residual(&v);
        let r2 = implicit.initial_residual(&v);
        assert!((&r1 - &r2).norm() < 1.0e-12);
        assert!((r1.norm() - super::least_squares_residual_norm(&a, &b, &v)).abs() < 1.0e-12);
    }

    #[test]
    fn normal_equations_of_identity() {
        let a = DMatrix::identity(3, 3);
        let b = DVector::from_column_slice(&[1.0, 2.0, 3.0]);
        let (ata, atb) = super::normal_equations(&a, &b);
        assert_eq!(ata, a);
        assert_eq!(atb, b);
    }
}
