// Couplings module: exchange couplings, Bloch phases, reciprocity and external fields

// ======================== MODULE DECLARATIONS ========================
pub mod coupling;
pub mod field;
pub mod reciprocity;

// Test modules
mod _tests_coupling;

// ======================== EXCHANGE COUPLINGS ========================
pub use coupling::Coupling; // struct - directed coupling (index1, index2, J, inter-site vector)
// Coupling impl methods:
//   new(i, j, matrix: Matrix3<Complex64>, d: Vector3<f64>) -> Self  - general complex exchange tensor
//   real(i, j, matrix: Matrix3<f64>, d) -> Self                      - real exchange tensor
//   isotropic(i, j, exchange: f64, d) -> Self                        - Heisenberg J S_i . S_j
//   reversed(&self) -> Coupling                                      - (j, i, J^dagger, -d)
//   phase(&self, q: &Vector3<f64>) -> Complex64                      - exp(2 pi i q . d)
//   is_partner_of(&self, other, tol) -> bool                         - reciprocal pair test

pub use coupling::phase_factor; // fn(q: &Vector3<f64>, d: &Vector3<f64>) -> Complex64 - Bloch phase

// ======================== RECIPROCITY ========================
pub use reciprocity::{
    complete_reciprocity, // fn(couplings: &[Coupling], tol: f64) -> Vec<Coupling> - appends missing partners
    validate_reciprocity, // fn(couplings: &[Coupling], tol: f64) -> Result<(), SpinwaveError> - rejects unpaired couplings
};

// ======================== EXTERNAL FIELD ========================
pub use field::MagneticField; // struct - field vector in tesla plus per-site g-tensors
