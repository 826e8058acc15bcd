// Hamiltonian module: bosonic A, B, C blocks and the grand Hamiltonian H(q)

// ======================== MODULE DECLARATIONS ========================
pub mod assembly;
pub mod grand;

// Test modules
mod _tests_hamiltonian;

// ======================== ASSEMBLY ========================
pub use assembly::QIndependentTerms; // struct - z, spin coefficients, C and Zeeman terms shared across wavevectors
// QIndependentTerms impl methods:
//   new(frames, magnitudes, couplings, field) -> Result<Self, SpinwaveError> - validates shapes and indices
//   assemble(&self, q: &Vector3<f64>) -> (DMatrix<Complex64>, DMatrix<Complex64>) - A(q), B(q)
//   c_matrix(&self) -> DMatrix<Complex64>                                           - diagonal self-energy C
//   grand_hamiltonian(&self, q) -> DMatrix<Complex64>                               - H(q)

pub use assembly::check_coupling_indices; // fn(couplings, n_sites) -> Result<(), SpinwaveError>

// ======================== GRAND HAMILTONIAN ========================
pub use grand::{
    build_grand_hamiltonian, // fn(a, b, c) -> Result<DMatrix<Complex64>, SpinwaveError> - [[A-C, B], [B^dagger, A-C]]
    hermiticity_residual,    // fn(h) -> f64 - ||H - H^dagger||_F
};
