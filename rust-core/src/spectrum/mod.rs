// Spectrum module: sorting, physical-branch selection and stability checks

// ======================== MODULE DECLARATIONS ========================
pub mod energies;


// ======================== ENERGY SPECTRA ========================
pub use energies::EnergySpectrum; // struct - sorted 2n eigenvalues with optional eigenvectors
// EnergySpectrum impl methods:
//   from_raw(values: Vec<Complex64>, eigenvectors: Option<DMatrix<Complex64>>) -> Self - sorts by (Re, Im)
//   raw(&self) -> &[Complex64]                  - all eigenvalues, sorted
//   physical(&self, zero_tol: f64) -> Vec<f64>  - upper half of the paired spectrum with Goldstone snapping
//   max_imaginary(&self) -> f64                 - largest |Im E|

// ======================== STABILITY ========================
pub use energies::{
    check_stability,    // fn(spectrum, q_index, tol) -> Option<InstabilityWarning> - logs and returns a warning
    InstabilityWarning, // struct - q_index and imaginary residue
};
