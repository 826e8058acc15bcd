// Constants and run configuration

use serde::{Deserialize, Serialize};

use crate::interfaces::{IndefiniteBlockPolicy, ReciprocityMode};

// Physical constants
pub const MU_B: f64 = 0.05788382; // Bohr magneton in meV/T

// Tolerances
pub const FRAME_TOLERANCE: f64 = 1e-8; // Orthonormality of user supplied rotations
pub const FRAME_AXIS_SWITCH: f64 = 0.9; // |e3 . z| above which x is the reference axis
pub const CHOLESKY_TOLERANCE: f64 = 1e-12; // Relative pivot floor for H = K K^dagger
pub const PIVOT_TOLERANCE: f64 = 1e-10; // Relative floor below which LDL pivots count as zero
pub const HERMITICITY_TOLERANCE: f64 = 1e-9; // Relative ||M - M^dagger|| for the Hermitian eigensolver
pub const ZERO_ENERGY_TOLERANCE: f64 = 1e-6; // Energies this close to zero are Goldstone modes
pub const INSTABILITY_TOLERANCE: f64 = 1e-6; // Largest tolerated |Im E|
pub const COUPLING_TOLERANCE: f64 = 1e-10; // Matching of reciprocal coupling partners
pub const MAX_EIGEN_ITERATIONS_PER_MODE: usize = 60; // QR sweeps per eigenvalue before giving up

/// Numerical settings for a spin-wave calculation.
///
/// Every tolerance is explicit; nothing is cached between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinwaveConfig {
    /// Cholesky pivots must exceed `cholesky_tolerance * max|H_ii|`.
    pub cholesky_tolerance: f64,
    /// LDL pivots below `pivot_tolerance * max|H_ij|` are treated as exact zeros.
    pub pivot_tolerance: f64,
    pub hermiticity_tolerance: f64,
    pub zero_energy_tolerance: f64,
    pub instability_tolerance: f64,
    pub coupling_tolerance: f64,
    pub max_eigen_iterations_per_mode: usize,
    /// What to do with negative pivots and indefinite 2x2 blocks of the LDL factor.
    pub indefinite_blocks: IndefiniteBlockPolicy,
    pub reciprocity: ReciprocityMode,
    /// Keep the eigenvectors of the signature-weighted matrix and the square-root factor.
    pub keep_eigenvectors: bool,
}

impl Default for SpinwaveConfig {
    fn default() -> Self {
        SpinwaveConfig {
            cholesky_tolerance: CHOLESKY_TOLERANCE,
            pivot_tolerance: PIVOT_TOLERANCE,
            hermiticity_tolerance: HERMITICITY_TOLERANCE,
            zero_energy_tolerance: ZERO_ENERGY_TOLERANCE,
            instability_tolerance: INSTABILITY_TOLERANCE,
            coupling_tolerance: COUPLING_TOLERANCE,
            max_eigen_iterations_per_mode: MAX_EIGEN_ITERATIONS_PER_MODE,
            indefinite_blocks: IndefiniteBlockPolicy::Reject,
            reciprocity: ReciprocityMode::Validate,
            keep_eigenvectors: false,
        }
    }
}

impl SpinwaveConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cholesky_tolerance(mut self, tol: f64) -> Self {
        self.cholesky_tolerance = tol;
        self
    }

    pub fn with_pivot_tolerance(mut self, tol: f64) -> Self {
        self.pivot_tolerance = tol;
        self
    }

    pub fn with_hermiticity_tolerance(mut self, tol: f64) -> Self {
        self.hermiticity_tolerance = tol;
        self
    }

    pub fn with_zero_energy_tolerance(mut self, tol: f64) -> Self {
        self.zero_energy_tolerance = tol;
        self
    }

    pub fn with_instability_tolerance(mut self, tol: f64) -> Self {
        self.instability_tolerance = tol;
        self
    }

    pub fn with_coupling_tolerance(mut self, tol: f64) -> Self {
        self.coupling_tolerance = tol;
        self
    }

    pub fn with_indefinite_blocks(mut self, policy: IndefiniteBlockPolicy) -> Self {
        self.indefinite_blocks = policy;
        self
    }

    pub fn with_reciprocity(mut self, mode: ReciprocityMode) -> Self {
        self.reciprocity = mode;
        self
    }

    pub fn with_eigenvectors(mut self, keep: bool) -> Self {
        self.keep_eigenvectors = keep;
        self
    }

    /// Iteration budget of the general eigensolver for a matrix of dimension `dim`.
    pub fn eigen_iteration_budget(&self, dim: usize) -> usize {
        self.max_eigen_iterations_per_mode.saturating_mul(dim.max(1))
    }
}
