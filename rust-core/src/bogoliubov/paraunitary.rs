use log::debug;
use nalgebra::DMatrix;
use num_complex::Complex64;

use crate::config::SpinwaveConfig;
use crate::errors::{DecompositionError, SingularHamiltonian, WavevectorError};
use crate::interfaces::{DecompositionMethod, Stage};
use crate::linalg::{
    block_square_root, cholesky_lower, general_eigenvalues, hermitian_eigen, is_hermitian, ldl_bunch_kaufman,
};

/// Square-root factorization `H = K K~`.
///
/// `K~ = K^dagger` on the Cholesky path and for positive semi-definite LDL
/// factors; with complex block roots it is `S (P L)^dagger`.
#[derive(Debug, Clone)]
pub struct SquareRootFactor {
    pub k: DMatrix<Complex64>,
    pub k_tilde: DMatrix<Complex64>,
    pub method: DecompositionMethod,
    /// Whether `K~ = K^dagger`, which makes the signature-weighted matrix Hermitian.
    pub hermitian: bool,
}

/// Eigen-decomposition of one grand Hamiltonian under the bosonic metric.
#[derive(Debug, Clone)]
pub struct BogoliubovSolution {
    /// All 2n eigenvalues of `K~ Sigma K`, unsorted. They coincide with those of `Sigma H`.
    pub eigenvalues: Vec<Complex64>,
    pub method: DecompositionMethod,
    /// Eigenvectors of `K~ Sigma K` (columns), only from the Hermitian solver.
    pub eigenvectors: Option<DMatrix<Complex64>>,
    pub factor: Option<DMatrix<Complex64>>,
}

/// First attempt: `H = K K^dagger` with `K` lower triangular.
pub fn attempt_cholesky(h: &DMatrix<Complex64>, config: &SpinwaveConfig) -> Result<SquareRootFactor, SingularHamiltonian> {
    let k = cholesky_lower(h, config.cholesky_tolerance)?;
    let k_tilde = k.adjoint();
    Ok(SquareRootFactor {
        k,
        k_tilde,
        method: DecompositionMethod::Cholesky,
        hermitian: true,
    })
}

/// Fallback: Bunch-Kaufman `P^T H P = L D L^dagger`, `K = P L S`, `K~ = S (P L)^dagger` with `S S = D`.
pub fn attempt_ldl(h: &DMatrix<Complex64>, config: &SpinwaveConfig) -> Result<SquareRootFactor, DecompositionError> {
    let factorization = ldl_bunch_kaufman(h, config.pivot_tolerance)?;
    let root = block_square_root(
        &factorization.blocks,
        h.nrows(),
        factorization.scale,
        config.pivot_tolerance,
        config.indefinite_blocks,
    )?;
    let pl = factorization.permuted_l();
    let k = &pl * &root.s;
    let k_tilde = &root.s * pl.adjoint();
    Ok(SquareRootFactor {
        k,
        k_tilde,
        method: DecompositionMethod::Ldl,
        hermitian: root.hermitian,
    })
}

/// `Sigma = diag(+1 x n, -1 x n)` applied from the left: negates the lower half of the rows.
pub fn apply_signature(m: &DMatrix<Complex64>) -> DMatrix<Complex64> {
    let n = m.nrows() / 2;
    let mut weighted = m.clone();
    for i in n..m.nrows() {
        weighted.row_mut(i).neg_mut();
    }
    weighted
}

/// `M = K~ Sigma K`, similar to `Sigma H` whenever `K` is invertible.
pub fn signature_weighted(factor: &SquareRootFactor) -> DMatrix<Complex64> {
    &factor.k_tilde * apply_signature(&factor.k)
}

// Pipeline stage a fallback error belongs to
fn ldl_stage(err: &DecompositionError) -> Stage {
    match err {
        DecompositionError::NegativePivot { .. }
        | DecompositionError::IndefiniteBlock { .. }
        | DecompositionError::NoBlockSquareRoot { .. } => Stage::BlockSquareRoot,
        _ => Stage::Ldl,
    }
}

/// Diagonalize `H` under the bosonic signature.
///
/// Cholesky failure is expected for singular `H` and is recovered by the LDL
/// fallback; anything failing after that is fatal for this wavevector only.
pub fn diagonalize(
    h: &DMatrix<Complex64>,
    q_index: usize,
    config: &SpinwaveConfig,
) -> Result<BogoliubovSolution, WavevectorError> {
    let factor = match attempt_cholesky(h, config) {
        Ok(factor) => factor,
        Err(singular) => {
            debug!("q[{}]: {}; falling back to LDL", q_index, singular);
            attempt_ldl(h, config).map_err(|source| WavevectorError {
                q_index,
                stage: ldl_stage(&source),
                source,
            })?
        }
    };

    let m = signature_weighted(&factor);
    let budget = config.eigen_iteration_budget(m.nrows());
    let to_wavevector_error = |source| WavevectorError {
        q_index,
        stage: Stage::Diagonalization,
        source,
    };

    let (eigenvalues, eigenvectors): (Vec<Complex64>, Option<DMatrix<Complex64>>) = if is_hermitian(&m, config.hermiticity_tolerance) {
        let (values, vectors) =
            hermitian_eigen(&m, config.keep_eigenvectors, budget).map_err(to_wavevector_error)?;
        (values.iter().map(|&v| Complex64::new(v, 0.0)).collect(), vectors)
    } else {
        debug!("q[{}]: signature-weighted matrix is not Hermitian; using the general solver", q_index);
        (general_eigenvalues(&m, budget).map_err(to_wavevector_error)?, None)
    };

    debug!("q[{}]: diagonalized via {}", q_index, factor.method);
    Ok(BogoliubovSolution {
        eigenvalues,
        method: factor.method,
        eigenvectors,
        factor: config.keep_eigenvectors.then_some(factor.k),
    })
}
