use nalgebra::{Matrix3, Vector3};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::config::{FRAME_AXIS_SWITCH, FRAME_TOLERANCE};
use crate::errors::{FrameError, SpinwaveError};

/// Orthonormal local frame of one magnetic site.
///
/// The columns of `rotation` are `e1, e2, e3`, with `e3` along the ordered
/// moment. The spin-wave expansion only needs the complex transverse axis
/// `z = e1 + i e2` and the longitudinal axis `eta = e3`, which are cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalFrame {
    rotation: Matrix3<f64>,
    z: Vector3<Complex64>,
    eta: Vector3<f64>,
}

impl LocalFrame {
    /// Accept a user supplied rotation, checking `R^T R = I` within [`FRAME_TOLERANCE`].
    pub fn from_rotation(rotation: Matrix3<f64>) -> Result<Self, FrameError> {
        if rotation.iter().any(|x| !x.is_finite()) {
            return Err(FrameError::NonFinite);
        }
        let deviation = orthonormality_deviation(&rotation);
        if deviation > FRAME_TOLERANCE {
            return Err(FrameError::NotOrthonormal { deviation });
        }
        Ok(Self::from_columns_unchecked(rotation))
    }

    /// Build a right-handed frame whose third axis points along `direction`.
    ///
    /// The reference axis is `z` unless the moment is within `acos(0.9)` of it,
    /// in which case `x` is used. A moment along `+z` gives the identity frame.
    /// A zero vector is treated as a moment along `+z`.
    pub fn from_direction(direction: &Vector3<f64>) -> Result<Self, FrameError> {
        if direction.iter().any(|x| !x.is_finite()) {
            return Err(FrameError::NonFinite);
        }
        let norm = direction.norm();
        if norm == 0.0 {
            return Ok(Self::from_columns_unchecked(Matrix3::identity()));
        }
        let e3 = direction / norm;

        let reference = if e3.z.abs() > FRAME_AXIS_SWITCH {
            Vector3::<f64>::x()
        } else {
            Vector3::<f64>::z()
        };
        let e2 = e3.cross(&reference).normalize();
        let e1 = e2.cross(&e3);

        Ok(Self::from_columns_unchecked(Matrix3::from_columns(&[
            e1, e2, e3,
        ])))
    }

    /// Same as [`LocalFrame::from_direction`] on the real part of `direction`.
    pub fn from_complex_direction(direction: &Vector3<Complex64>) -> Result<Self, FrameError> {
        if direction.iter().any(|c| !c.re.is_finite() || !c.im.is_finite()) {
            return Err(FrameError::NonFinite);
        }
        Self::from_direction(&direction.map(|c| c.re))
    }

    fn from_columns_unchecked(rotation: Matrix3<f64>) -> Self {
        let e1 = rotation.column(0).into_owned();
        let e2 = rotation.column(1).into_owned();
        let eta = rotation.column(2).into_owned();
        let z = Vector3::from_fn(|k, _| Complex64::new(e1[k], e2[k]));
        LocalFrame { rotation, z, eta }
    }

    pub fn rotation(&self) -> &Matrix3<f64> {
        &self.rotation
    }

    pub fn z(&self) -> &Vector3<Complex64> {
        &self.z
    }

    pub fn eta(&self) -> &Vector3<f64> {
        &self.eta
    }

    /// `eta` promoted to a complex vector for contractions with complex exchange tensors.
    pub fn eta_complex(&self) -> Vector3<Complex64> {
        self.eta.map(|x| Complex64::new(x, 0.0))
    }
}

pub fn orthonormality_deviation(r: &Matrix3<f64>) -> f64 {
    (r.transpose() * r - Matrix3::identity()).amax()
}

/// Resolve one frame per site from (possibly complex) moment directions.
pub fn resolve_frames(directions: &[Vector3<Complex64>]) -> Result<Vec<LocalFrame>, SpinwaveError> {
    directions
        .iter()
        .enumerate()
        .map(|(site, d)| {
            LocalFrame::from_complex_direction(d)
                .map_err(|source| SpinwaveError::InvalidFrame { site, source })
        })
        .collect()
}
