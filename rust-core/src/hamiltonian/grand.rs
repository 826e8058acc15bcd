use nalgebra::DMatrix;
use num_complex::Complex64;

use crate::errors::SpinwaveError;

/// Build the 2n x 2n grand Hamiltonian `[[A - C, B], [B^dagger, A - C]]`.
pub fn build_grand_hamiltonian(
    a: &DMatrix<Complex64>,
    b: &DMatrix<Complex64>,
    c: &DMatrix<Complex64>,
) -> Result<DMatrix<Complex64>, SpinwaveError> {
    let n = a.nrows();
    for (what, m) in [("A", a), ("B", b), ("C", c)] {
        if m.nrows() != n {
            return Err(SpinwaveError::InputShape {
                what,
                expected: n,
                found: m.nrows(),
            });
        }
        if m.ncols() != n {
            return Err(SpinwaveError::InputShape {
                what,
                expected: n,
                found: m.ncols(),
            });
        }
    }
    Ok(grand_from_blocks(a, b, c))
}

pub(crate) fn grand_from_blocks(
    a: &DMatrix<Complex64>,
    b: &DMatrix<Complex64>,
    c: &DMatrix<Complex64>,
) -> DMatrix<Complex64> {
    let n = a.nrows();
    let diagonal_block = a - c;
    let mut h = DMatrix::<Complex64>::zeros(2 * n, 2 * n);
    h.view_mut((0, 0), (n, n)).copy_from(&diagonal_block);
    h.view_mut((0, n), (n, n)).copy_from(b);
    h.view_mut((n, 0), (n, n)).copy_from(&b.adjoint());
    h.view_mut((n, n), (n, n)).copy_from(&diagonal_block);
    h
}

/// Frobenius norm of `H - H^dagger`.
pub fn hermiticity_residual(h: &DMatrix<Complex64>) -> f64 {
    (h - h.adjoint()).norm()
}
