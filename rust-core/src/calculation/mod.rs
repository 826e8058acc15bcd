// Calculation module: validated input, per-wavevector pipeline and batch driver

// ======================== MODULE DECLARATIONS ========================
pub mod engine;
pub mod input;
pub mod result;


// ======================== INPUT ========================
pub use input::SpinwaveInput; // struct - frames, spin lengths, couplings and optional field
// SpinwaveInput impl methods:
//   from_rotations(rotations, magnitudes, couplings) -> Result<Self, SpinwaveError>   - explicit local frames
//   from_directions(directions, magnitudes, couplings) -> Result<Self, SpinwaveError> - frames from moment directions
//   from_frames(frames, magnitudes, couplings) -> Result<Self, SpinwaveError>         - already resolved frames
//   with_field(self, field: MagneticField) -> Result<Self, SpinwaveError>              - adds a Zeeman term

// ======================== DRIVER ========================
pub use engine::{
    calculate,           // fn(input, q_vectors, config) -> Result<SpinwaveResult, SpinwaveError>
    calculate_energies,  // fn(input, q_vectors, config) -> Result<Vec<Vec<f64>>, SpinwaveError>
    effective_couplings, // fn(couplings, config) -> Result<Cow<[Coupling]>, SpinwaveError> - reciprocity handling
    solve_wavevector,    // fn(terms, q_index, q, config) -> Result<WavevectorOutcome, WavevectorError>
};

// ======================== RESULTS ========================
pub use result::{
    SpinwaveResult,    // struct - per-wavevector outcomes in input order
    WavevectorOutcome, // struct - spectrum, method, warning and optional factor of one wavevector
};
