//! Linear spin-wave theory library
//!
//! This library computes magnon dispersions of ordered magnetic structures: it
//! assembles the bosonic grand Hamiltonian from local spin frames and exchange
//! couplings and diagonalizes it under the paraunitary constraint, with a
//! Cholesky / Bunch-Kaufman LDL fallback for singular Hamiltonians.

pub mod bogoliubov;
pub mod calculation;
pub mod config;
pub mod couplings;
pub mod errors;
pub mod frames;
pub mod hamiltonian;
pub mod interfaces;
pub mod linalg;
pub mod models;
pub mod spectrum;

pub use calculation::{calculate, calculate_energies, SpinwaveInput, SpinwaveResult};
pub use config::SpinwaveConfig;
pub use couplings::{Coupling, MagneticField};
pub use errors::{SpinwaveError, WavevectorError};

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, SpinwaveError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
