use nalgebra::{Matrix3, Vector3};
use num_complex::Complex64;

use crate::couplings::{Coupling, MagneticField};
use crate::errors::SpinwaveError;
use crate::frames::{resolve_frames, LocalFrame};
use crate::hamiltonian::check_coupling_indices;

/// A validated magnetic structure: one frame and spin length per site plus the couplings.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinwaveInput {
    frames: Vec<LocalFrame>,
    magnitudes: Vec<f64>,
    couplings: Vec<Coupling>,
    field: Option<MagneticField>,
}

impl SpinwaveInput {
    /// Structure from explicit local rotations `R = [e1 e2 e3]`.
    pub fn from_rotations(
        rotations: Vec<Matrix3<f64>>,
        magnitudes: Vec<f64>,
        couplings: Vec<Coupling>,
    ) -> Result<Self, SpinwaveError> {
        check_site_count(rotations.len(), magnitudes.len())?;
        let frames = rotations
            .into_iter()
            .enumerate()
            .map(|(site, r)| LocalFrame::from_rotation(r).map_err(|source| SpinwaveError::InvalidFrame { site, source }))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_frames(frames, magnitudes, couplings)
    }

    /// Structure from moment directions; frames are constructed from the real parts.
    pub fn from_directions(
        directions: &[Vector3<Complex64>],
        magnitudes: Vec<f64>,
        couplings: Vec<Coupling>,
    ) -> Result<Self, SpinwaveError> {
        check_site_count(directions.len(), magnitudes.len())?;
        let frames = resolve_frames(directions)?;
        Self::from_frames(frames, magnitudes, couplings)
    }

    /// Structure from already resolved frames.
    pub fn from_frames(
        frames: Vec<LocalFrame>,
        magnitudes: Vec<f64>,
        couplings: Vec<Coupling>,
    ) -> Result<Self, SpinwaveError> {
        check_site_count(frames.len(), magnitudes.len())?;
        if let Some((site, &value)) = magnitudes
            .iter()
            .enumerate()
            .find(|(_, s)| !(s.is_finite() && **s > 0.0))
        {
            return Err(SpinwaveError::InvalidMagnitude { site, value });
        }
        if let Some(index) = couplings.iter().position(|c| !c.is_finite()) {
            return Err(SpinwaveError::NonFinite { what: "coupling", index });
        }
        check_coupling_indices(&couplings, frames.len())?;

        Ok(SpinwaveInput {
            frames,
            magnitudes,
            couplings,
            field: None,
        })
    }

    /// Add a Zeeman term; the field must carry one g-tensor per site.
    pub fn with_field(mut self, field: MagneticField) -> Result<Self, SpinwaveError> {
        field.validate(self.n_sites())?;
        self.field = Some(field);
        Ok(self)
    }

    pub fn n_sites(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[LocalFrame] {
        &self.frames
    }

    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitudes
    }

    pub fn couplings(&self) -> &[Coupling] {
        &self.couplings
    }

    pub fn field(&self) -> Option<&MagneticField> {
        self.field.as_ref()
    }
}

fn check_site_count(frames: usize, magnitudes: usize) -> Result<(), SpinwaveError> {
    if frames != magnitudes {
        return Err(SpinwaveError::InputShape {
            what: "magnitudes",
            expected: frames,
            found: magnitudes,
        });
    }
    Ok(())
}
