// Definitions that are used throughout all modules

use serde::{Deserialize, Serialize};
use std::fmt;

// Which square-root factorization produced H = K K~
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecompositionMethod {
    Cholesky,
    Ldl,
}

impl fmt::Display for DecompositionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecompositionMethod::Cholesky => write!(f, "Cholesky"),
            DecompositionMethod::Ldl => write!(f, "LDL"),
        }
    }
}

// Pipeline stage a per-wavevector failure is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Cholesky,
    Ldl,
    BlockSquareRoot,
    Diagonalization,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Cholesky => write!(f, "Cholesky factorization"),
            Stage::Ldl => write!(f, "LDL factorization"),
            Stage::BlockSquareRoot => write!(f, "pivot block square root"),
            Stage::Diagonalization => write!(f, "eigen-decomposition"),
        }
    }
}

// Handling of negative pivots / indefinite 2x2 blocks in the LDL fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IndefiniteBlockPolicy {
    /// Fail the wavevector with an unrecoverable decomposition error.
    #[default]
    Reject,
    /// Use complex principal square roots; the spectrum may pick up imaginary parts.
    Permit,
}

// How the (j, i, J^dagger, -d) partner of every coupling is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReciprocityMode {
    /// Every coupling must already have its partner; otherwise the input is rejected.
    #[default]
    Validate,
    /// Missing partners are synthesized before the calculation.
    Complete,
}
