use nalgebra::{Matrix3, Vector3};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Directed exchange coupling `S_index1^T J S_index2` across `inter_site_vector`.
///
/// The offset is in lattice units, so the Bloch phase at wavevector `q`
/// (reciprocal lattice units) is `exp(2 pi i q . d)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupling {
    pub index1: usize,
    pub index2: usize,
    pub matrix: Matrix3<Complex64>,
    pub inter_site_vector: Vector3<f64>,
}

impl Coupling {
    pub fn new(
        index1: usize,
        index2: usize,
        matrix: Matrix3<Complex64>,
        inter_site_vector: Vector3<f64>,
    ) -> Self {
        Coupling {
            index1,
            index2,
            matrix,
            inter_site_vector,
        }
    }

    /// Coupling with a real exchange tensor.
    pub fn real(
        index1: usize,
        index2: usize,
        matrix: Matrix3<f64>,
        inter_site_vector: Vector3<f64>,
    ) -> Self {
        Self::new(
            index1,
            index2,
            matrix.map(|x| Complex64::new(x, 0.0)),
            inter_site_vector,
        )
    }

    /// Heisenberg coupling `J S_i . S_j`.
    pub fn isotropic(index1: usize, index2: usize, exchange: f64, inter_site_vector: Vector3<f64>) -> Self {
        Self::real(index1, index2, Matrix3::identity() * exchange, inter_site_vector)
    }

    /// The partner `(index2, index1, J^dagger, -d)` describing the same bond seen from the other site.
    pub fn reversed(&self) -> Self {
        Coupling {
            index1: self.index2,
            index2: self.index1,
            matrix: self.matrix.adjoint(),
            inter_site_vector: -self.inter_site_vector,
        }
    }

    pub fn phase(&self, q: &Vector3<f64>) -> Complex64 {
        phase_factor(q, &self.inter_site_vector)
    }

    pub fn is_finite(&self) -> bool {
        self.matrix.iter().all(|c| c.re.is_finite() && c.im.is_finite())
            && self.inter_site_vector.iter().all(|x| x.is_finite())
    }

    /// Whether `other` is this coupling's reciprocal partner within `tol`.
    pub fn is_partner_of(&self, other: &Coupling, tol: f64) -> bool {
        if self.index1 != other.index2 || self.index2 != other.index1 {
            return false;
        }
        let scale = max_modulus(&self.matrix).max(1.0);
        let matrix_mismatch = max_modulus(&(self.matrix - other.matrix.adjoint()));
        let offset_mismatch = (self.inter_site_vector + other.inter_site_vector).amax();
        matrix_mismatch <= tol * scale && offset_mismatch <= tol
    }

    pub fn is_self_reciprocal(&self, tol: f64) -> bool {
        self.is_partner_of(self, tol)
    }
}

/// Bloch phase `exp(2 pi i q . d)`.
pub fn phase_factor(q: &Vector3<f64>, d: &Vector3<f64>) -> Complex64 {
    Complex64::from_polar(1.0, 2.0 * PI * q.dot(d))
}

pub(crate) fn max_modulus(m: &Matrix3<Complex64>) -> f64 {
    m.iter().map(|c| c.norm()).fold(0.0, f64::max)
}
