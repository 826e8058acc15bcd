// Frames module: local spin frames for the Holstein-Primakoff expansion
// Every site gets an orthonormal frame whose third axis is the ordered moment direction

// ======================== MODULE DECLARATIONS ========================
pub mod local_frame;

// Test modules
mod _tests_local_frame;

// ======================== LOCAL FRAMES ========================
pub use local_frame::LocalFrame; // struct - orthonormal R = [e1 e2 e3] with z = e1 + i e2 and eta = e3
// LocalFrame impl methods:
//   from_rotation(rotation: Matrix3<f64>) -> Result<Self, FrameError>            - validates orthonormality
//   from_direction(direction: &Vector3<f64>) -> Result<Self, FrameError>         - builds a frame with e3 along the moment
//   from_complex_direction(direction: &Vector3<Complex64>) -> Result<Self, FrameError> - uses the real part
//   rotation(&self) -> &Matrix3<f64>                                             - the frame as a rotation matrix
//   z(&self) -> &Vector3<Complex64>                                              - transverse complex axis
//   eta(&self) -> &Vector3<f64>                                                  - moment direction

pub use local_frame::{
    orthonormality_deviation, // fn(r: &Matrix3<f64>) -> f64 - max |R^T R - I|
    resolve_frames,           // fn(directions: &[Vector3<Complex64>]) -> Result<Vec<LocalFrame>, SpinwaveError>
};
