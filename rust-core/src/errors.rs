//! Error types.
//!
//! Static input problems ([`SpinwaveError`]) are detected once, before any
//! wavevector is processed. Numerical failures are local to one wavevector and
//! carry its index ([`WavevectorError`]).

use thiserror::Error;

use crate::interfaces::Stage;

/// Errors that abort a calculation (or surface a per-wavevector failure from a batch).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpinwaveError {
    #[error("input shape mismatch: {what} has {found} entries, expected {expected}")]
    InputShape {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("coupling {coupling} references site {index}, but there are only {n_sites} sites")]
    CouplingIndex {
        coupling: usize,
        index: usize,
        n_sites: usize,
    },

    #[error("site {site}: {source}")]
    InvalidFrame { site: usize, source: FrameError },

    #[error("site {site}: spin magnitude must be positive and finite, got {value}")]
    InvalidMagnitude { site: usize, value: f64 },

    #[error("{what} {index} contains non-finite values")]
    NonFinite { what: &'static str, index: usize },

    #[error("coupling {coupling} has no reciprocal partner (swapped indices, adjoint matrix, negated offset)")]
    NonReciprocalCoupling { coupling: usize },

    #[error(transparent)]
    Wavevector(#[from] WavevectorError),
}

/// Problems turning a moment direction or rotation into a local frame.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameError {
    #[error("direction or rotation contains non-finite values")]
    NonFinite,

    #[error("rotation is not orthonormal (max |R^T R - I| = {deviation:e})")]
    NotOrthonormal { deviation: f64 },
}

/// The Cholesky attempt failed; `H` is not numerically positive definite.
///
/// Never user visible on its own: it routes the wavevector to the LDL fallback.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Cholesky pivot {column} is not positive ({pivot:e})")]
pub struct SingularHamiltonian {
    pub column: usize,
    pub pivot: f64,
}

/// Failures of the LDL fallback, the block square roots or the eigensolver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecompositionError {
    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    #[error("matrix contains non-finite entries")]
    NonFinite,

    #[error("pivot {index} is negative ({value:e})")]
    NegativePivot { index: usize, value: f64 },

    #[error("2x2 pivot block at {index} is indefinite (eigenvalues {lower:e}, {upper:e})")]
    IndefiniteBlock { index: usize, lower: f64, upper: f64 },

    #[error("2x2 pivot block at {index} is numerically singular")]
    SingularPivotBlock { index: usize },

    #[error("2x2 pivot block at {index} has no principal square root")]
    NoBlockSquareRoot { index: usize },

    #[error("eigenvalue iteration did not converge within {iterations} steps")]
    NoConvergence { iterations: usize },
}

/// Unrecoverable decomposition failure of a single wavevector.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("wavevector {q_index}: {stage} failed: {source}")]
pub struct WavevectorError {
    pub q_index: usize,
    pub stage: Stage,
    pub source: DecompositionError,
}
