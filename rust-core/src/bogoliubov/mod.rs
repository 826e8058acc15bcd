// Bogoliubov module: paraunitary diagonalization of the grand Hamiltonian
// Two-stage square-root factorization (Cholesky, then Bunch-Kaufman LDL) followed by
// the eigenproblem of the signature-weighted matrix K~ Sigma K

// ======================== MODULE DECLARATIONS ========================
pub mod paraunitary;

// Test modules
mod _tests_paraunitary;

// ======================== FACTORIZATION PIPELINE ========================
pub use paraunitary::{
    apply_signature,    // fn(m) -> DMatrix<Complex64> - Sigma m
    attempt_cholesky,   // fn(h, config) -> Result<SquareRootFactor, SingularHamiltonian>
    attempt_ldl,        // fn(h, config) -> Result<SquareRootFactor, DecompositionError>
    diagonalize,        // fn(h, q_index, config) -> Result<BogoliubovSolution, WavevectorError>
    signature_weighted, // fn(factor) -> DMatrix<Complex64> - K~ Sigma K
    BogoliubovSolution, // struct - raw eigenvalues, method and optional eigenvectors / factor
    SquareRootFactor,   // struct - K, K~, method, Hermitian flag
};
