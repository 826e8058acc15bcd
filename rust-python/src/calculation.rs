//! Python bindings for the spin-wave calculation

use nalgebra::{Matrix3, Vector3};
use num_complex::Complex64;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use spinwave_core::frames::resolve_frames;
use spinwave_core::interfaces::{IndefiniteBlockPolicy, ReciprocityMode};
use spinwave_core::{calculate_energies, MagneticField, SpinwaveConfig, SpinwaveError, SpinwaveInput};

use crate::coupling::PyCoupling;

fn to_py_err(err: SpinwaveError) -> PyErr {
    match err {
        SpinwaveError::Wavevector(_) => PyRuntimeError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

fn matrix_from_rows(rows: &[[f64; 3]; 3]) -> Matrix3<f64> {
    Matrix3::from_fn(|i, j| rows[i][j])
}

/// Linear spin-wave energies for a list of wavevectors
///
/// Args:
///     rotations: One 3x3 rotation per site, row by row; its columns are the local axes e1, e2, e3
///     magnitudes: Spin length per site
///     q_vectors: Wavevectors in reciprocal lattice units
///     couplings: Exchange couplings, each accompanied by its reverse
///     field: Optional external field in tesla
///     g_tensors: One 3x3 g-tensor per site, required with a field
///     complete_reciprocity: Synthesize missing reverse couplings instead of rejecting them
///     permit_indefinite: Accept indefinite Hamiltonians and return complex-derived energies
///
/// Returns:
///     list[list[float]]: One magnon energy per site and wavevector in meV, ascending
#[pyfunction]
#[pyo3(signature = (rotations, magnitudes, q_vectors, couplings, field=None, g_tensors=None, complete_reciprocity=false, permit_indefinite=false))]
#[allow(clippy::too_many_arguments)]
pub fn spinwave_calculation(
    py: Python<'_>,
    rotations: Vec<[[f64; 3]; 3]>,
    magnitudes: Vec<f64>,
    q_vectors: Vec<[f64; 3]>,
    couplings: Vec<PyCoupling>,
    field: Option<[f64; 3]>,
    g_tensors: Option<Vec<[[f64; 3]; 3]>>,
    complete_reciprocity: bool,
    permit_indefinite: bool,
) -> PyResult<Vec<Vec<f64>>> {
    let rotations: Vec<Matrix3<f64>> = rotations.iter().map(matrix_from_rows).collect();
    let couplings = couplings.into_iter().map(|c| c.inner).collect();
    let mut input = SpinwaveInput::from_rotations(rotations, magnitudes, couplings).map_err(to_py_err)?;

    if let Some(b) = field {
        let n_sites = input.n_sites();
        let g = match g_tensors {
            Some(g) => g.iter().map(matrix_from_rows).collect(),
            None => vec![Matrix3::identity() * 2.0; n_sites],
        };
        input = input
            .with_field(MagneticField::new(Vector3::from(b), g))
            .map_err(to_py_err)?;
    }

    let mut config = SpinwaveConfig::default();
    if complete_reciprocity {
        config = config.with_reciprocity(ReciprocityMode::Complete);
    }
    if permit_indefinite {
        config = config.with_indefinite_blocks(IndefiniteBlockPolicy::Permit);
    }

    let qs: Vec<Vector3<f64>> = q_vectors.into_iter().map(Vector3::from).collect();
    py.allow_threads(|| calculate_energies(&input, &qs, &config))
        .map_err(to_py_err)
}

/// Local frames for moment directions
///
/// Args:
///     directions: Moment direction per site; only the real part is used
///
/// Returns:
///     list: One 3x3 rotation per site, row by row, whose last column is the moment direction
#[pyfunction]
pub fn local_frames(directions: Vec<[Complex64; 3]>) -> PyResult<Vec<[[f64; 3]; 3]>> {
    let directions: Vec<Vector3<Complex64>> = directions.into_iter().map(Vector3::from).collect();
    let frames = resolve_frames(&directions).map_err(to_py_err)?;
    Ok(frames
        .iter()
        .map(|f| {
            let r = f.rotation();
            [
                [r[(0, 0)], r[(0, 1)], r[(0, 2)]],
                [r[(1, 0)], r[(1, 1)], r[(1, 2)]],
                [r[(2, 0)], r[(2, 1)], r[(2, 2)]],
            ]
        })
        .collect())
}
