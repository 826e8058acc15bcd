use pyo3::prelude::*;

// Module declarations
mod calculation;
mod coupling;
mod utils;

use calculation::{local_frames, spinwave_calculation};
use coupling::PyCoupling;
use utils::{bohr_magneton, version};

/// Python module definition
#[pymodule]
fn spinwave_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCoupling>()?;

    // Calculation functions
    m.add_function(wrap_pyfunction!(spinwave_calculation, m)?)?;
    m.add_function(wrap_pyfunction!(local_frames, m)?)?;

    // Utility functions
    m.add_function(wrap_pyfunction!(version, m)?)?;
    m.add_function(wrap_pyfunction!(bohr_magneton, m)?)?;

    // Module metadata
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
