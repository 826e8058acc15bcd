use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::MU_B;
use crate::errors::SpinwaveError;
use crate::frames::LocalFrame;

/// Uniform external field (tesla) with one g-tensor per site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagneticField {
    pub field: Vector3<f64>,
    pub g_tensors: Vec<Matrix3<f64>>,
}

impl MagneticField {
    pub fn new(field: Vector3<f64>, g_tensors: Vec<Matrix3<f64>>) -> Self {
        MagneticField { field, g_tensors }
    }

    /// Same scalar g-factor on every site.
    pub fn isotropic(field: Vector3<f64>, g: f64, n_sites: usize) -> Self {
        Self::new(field, vec![Matrix3::identity() * g; n_sites])
    }

    pub fn validate(&self, n_sites: usize) -> Result<(), SpinwaveError> {
        if self.g_tensors.len() != n_sites {
            return Err(SpinwaveError::InputShape {
                what: "g_tensors",
                expected: n_sites,
                found: self.g_tensors.len(),
            });
        }
        if self.field.iter().any(|x| !x.is_finite()) {
            return Err(SpinwaveError::NonFinite {
                what: "field",
                index: 0,
            });
        }
        if let Some(index) = self
            .g_tensors
            .iter()
            .position(|g| g.iter().any(|x| !x.is_finite()))
        {
            return Err(SpinwaveError::NonFinite {
                what: "g_tensor",
                index,
            });
        }
        Ok(())
    }

    /// On-site magnon energy shift `-mu_B B^T g eta` of one site.
    ///
    /// A moment antiparallel to the field gains `g mu_B |B|`.
    pub fn zeeman_shift(&self, site: usize, frame: &LocalFrame) -> f64 {
        match self.g_tensors.get(site) {
            Some(g) => -MU_B * self.field.dot(&(g * frame.eta())),
            None => 0.0,
        }
    }
}
