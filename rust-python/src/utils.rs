/// Utility functions for the spinwave Python module
use pyo3::prelude::*;

/// Get the version of the spinwave library
#[pyfunction]
pub fn version() -> &'static str {
    spinwave_core::VERSION
}

/// Bohr magneton in meV/T as used by the Zeeman term
#[pyfunction]
pub fn bohr_magneton() -> f64 {
    spinwave_core::config::MU_B
}
