//! Python bindings for Coupling

use nalgebra::{Matrix3, Vector3};
use num_complex::Complex64;
use pyo3::prelude::*;
use spinwave_core::couplings::Coupling;

/// Python wrapper for an exchange coupling
#[pyclass(name = "Coupling", frozen)]
#[derive(Clone)]
pub struct PyCoupling {
    pub(crate) inner: Coupling,
}

#[pymethods]
impl PyCoupling {
    /// Create a coupling S_index1^T J S_index2 across an inter-site vector
    ///
    /// Args:
    ///     index1: First site index
    ///     index2: Second site index
    ///     matrix: 3x3 exchange tensor given row by row (real or complex entries)
    ///     inter_site_vector: Offset between the two sites in lattice units
    ///
    /// Returns:
    ///     Coupling: The coupling. Its reverse (index2, index1, J^dagger, -d) must also be supplied.
    #[new]
    fn new(index1: usize, index2: usize, matrix: [[Complex64; 3]; 3], inter_site_vector: [f64; 3]) -> Self {
        let m = Matrix3::from_fn(|i, j| matrix[i][j]);
        PyCoupling {
            inner: Coupling::new(index1, index2, m, Vector3::from(inter_site_vector)),
        }
    }

    #[getter]
    fn index1(&self) -> usize {
        self.inner.index1
    }

    #[getter]
    fn index2(&self) -> usize {
        self.inner.index2
    }

    /// Exchange tensor as nested rows
    #[getter]
    fn matrix(&self) -> [[Complex64; 3]; 3] {
        let m = &self.inner.matrix;
        [
            [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
            [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
            [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
        ]
    }

    #[getter]
    fn inter_site_vector(&self) -> [f64; 3] {
        let d = &self.inner.inter_site_vector;
        [d.x, d.y, d.z]
    }

    /// The reciprocal partner (index2, index1, J^dagger, -d)
    fn reversed(&self) -> Self {
        PyCoupling {
            inner: self.inner.reversed(),
        }
    }

    fn __repr__(&self) -> String {
        let d = &self.inner.inter_site_vector;
        format!(
            "Coupling(index1={}, index2={}, inter_site_vector=[{}, {}, {}])",
            self.inner.index1, self.inner.index2, d.x, d.y, d.z
        )
    }
}
