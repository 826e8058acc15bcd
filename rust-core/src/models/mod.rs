// Models module: small reference structures with known dispersions, and q paths

// ======================== MODULE DECLARATIONS ========================
pub mod chains;
pub mod triangular;

// ======================== CHAINS ========================
pub use chains::{
    antiferromagnetic_chain,      // fn(exchange, spin) -> Result<SpinwaveInput, SpinwaveError> - two-site Neel chain
    ferrimagnetic_chain,          // fn(exchange, spin1, spin2) -> Result<SpinwaveInput, SpinwaveError> - unequal Neel chain
    ferromagnetic_chain,          // fn(exchange, spin) -> Result<SpinwaveInput, SpinwaveError> - two-site ferromagnet
    ferromagnetic_chain_in_field, // fn(exchange, spin, field_tesla, g) -> Result<SpinwaveInput, SpinwaveError>
    isolated_site,                // fn(spin) -> Result<SpinwaveInput, SpinwaveError> - no couplings
    single_site_chain,            // fn(exchange, spin) -> Result<SpinwaveInput, SpinwaveError> - one site per cell
};

// ======================== TWO-DIMENSIONAL ========================
pub use triangular::{
    triangular_antiferromagnet, // fn(exchange, spin) -> Result<SpinwaveInput, SpinwaveError> - 120 degree three-site cell
    triangular_branches,        // fn(exchange, spin, q) -> Vec<f64> - closed-form dispersion of the same cell
};

// ======================== WAVEVECTOR PATHS ========================
pub use chains::q_line; // fn(start, end, n) -> Vec<Vector3<f64>> - straight line including both ends
