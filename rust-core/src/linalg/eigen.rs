use nalgebra::{DMatrix, DVector, Schur, SymmetricEigen};
use num_complex::Complex64;

use crate::errors::DecompositionError;

/// Whether `||M - M^dagger||_F <= tol * ||M||_F`.
pub fn is_hermitian(m: &DMatrix<Complex64>, tol: f64) -> bool {
    if m.nrows() != m.ncols() {
        return false;
    }
    (m - m.adjoint()).norm() <= tol * m.norm()
}

/// Eigenvalues (ascending) and optionally eigenvectors of the Hermitian part of `m`.
pub fn hermitian_eigen(
    m: &DMatrix<Complex64>,
    want_vectors: bool,
    max_iterations: usize,
) -> Result<(DVector<f64>, Option<DMatrix<Complex64>>), DecompositionError> {
    let (rows, cols) = m.shape();
    if rows != cols {
        return Err(DecompositionError::NotSquare { rows, cols });
    }
    if rows == 0 {
        return Ok((DVector::zeros(0), want_vectors.then(|| DMatrix::zeros(0, 0))));
    }
    let hermitian_part = (m + m.adjoint()) * Complex64::new(0.5, 0.0);
    let eigen = SymmetricEigen::try_new(hermitian_part, f64::EPSILON, max_iterations).ok_or(
        DecompositionError::NoConvergence {
            iterations: max_iterations,
        },
    )?;
    let vectors = if want_vectors {
        Some(eigen.eigenvectors)
    } else {
        None
    };
    Ok((eigen.eigenvalues, vectors))
}

/// Eigenvalues of a general complex matrix from its complex Schur form.
///
/// Fails with [`DecompositionError::NoConvergence`] when the Schur iteration does not
/// converge within `max_iterations` (a zero budget leaves nothing to iterate with).
pub fn general_eigenvalues(m: &DMatrix<Complex64>, max_iterations: usize) -> Result<Vec<Complex64>, DecompositionError> {
    let (rows, cols) = m.shape();
    if rows != cols {
        return Err(DecompositionError::NotSquare { rows, cols });
    }
    if m.iter().any(|c| !c.re.is_finite() || !c.im.is_finite()) {
        return Err(DecompositionError::NonFinite);
    }
    match rows {
        0 => return Ok(Vec::new()),
        1 => return Ok(vec![m[(0, 0)]]),
        _ => {}
    }
    // nalgebra reads a zero budget as unbounded
    if max_iterations == 0 {
        return Err(DecompositionError::NoConvergence { iterations: 0 });
    }

    let no_convergence = DecompositionError::NoConvergence {
        iterations: max_iterations,
    };
    let schur = Schur::try_new(m.clone(), f64::EPSILON, max_iterations).ok_or(no_convergence.clone())?;
    // A complex Schur form is triangular, so the diagonal is always available
    let values = schur.eigenvalues().ok_or(no_convergence)?;
    Ok(values.iter().copied().collect())
}
