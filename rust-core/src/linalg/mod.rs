// Linalg module: dense complex factorizations and eigenvalue solvers used by the Bogoliubov step

// ======================== MODULE DECLARATIONS ========================
pub mod block_sqrt;
pub mod cholesky;
pub mod eigen;
pub mod ldl;


// ======================== FACTORIZATIONS ========================
pub use cholesky::cholesky_lower; // fn(h, tol) -> Result<DMatrix<Complex64>, SingularHamiltonian> - H = L L^dagger
pub use ldl::{
    ldl_bunch_kaufman, // fn(h, tol) -> Result<LdlFactorization, DecompositionError> - P^T H P = L D L^dagger
    LdlFactorization,  // struct - unit lower L, pivot blocks, permutation and reference scale
    PivotBlock,        // enum - 1x1 or 2x2 diagonal block of D
};
pub use block_sqrt::{
    block_square_root,           // fn(blocks, dim, scale, tol, policy) -> Result<BlockSquareRoot, DecompositionError>
    hermitian_block_eigenvalues, // fn(e: &Matrix2<Complex64>) -> (f64, f64)
    principal_sqrt_2x2,          // fn(e: &Matrix2<Complex64>) -> Option<Matrix2<Complex64>>
    BlockSquareRoot,             // struct - S with S S = D and a Hermitian flag
};

// ======================== EIGENVALUE SOLVERS ========================
pub use eigen::{
    general_eigenvalues, // fn(m, max_iterations) -> Result<Vec<Complex64>, DecompositionError> - complex Schur form
    hermitian_eigen,     // fn(m, want_vectors, max_iterations) -> Result<(DVector<f64>, Option<DMatrix<Complex64>>), _>
    is_hermitian,        // fn(m, tol) -> bool - relative Frobenius test
};

// ======================== RE-EXPORTS FOR CONVENIENCE ========================
pub use crate::errors::{DecompositionError, SingularHamiltonian};
