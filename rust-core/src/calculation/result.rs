use nalgebra::{DMatrix, Vector3};
use num_complex::Complex64;

use crate::errors::WavevectorError;
use crate::interfaces::DecompositionMethod;
use crate::spectrum::{EnergySpectrum, InstabilityWarning};

/// Everything computed for one wavevector.
#[derive(Debug, Clone, PartialEq)]
pub struct WavevectorOutcome {
    pub q_index: usize,
    pub q: Vector3<f64>,
    pub spectrum: EnergySpectrum,
    pub method: DecompositionMethod,
    pub warning: Option<InstabilityWarning>,
    /// Square-root factor `K`, kept only when eigenvectors are requested.
    pub factor: Option<DMatrix<Complex64>>,
}

/// Per-wavevector results in input order. Failures are isolated to their own wavevector.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinwaveResult {
    pub outcomes: Vec<Result<WavevectorOutcome, WavevectorError>>,
    pub zero_energy_tolerance: f64,
}

impl SpinwaveResult {
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Physical energies per wavevector, or the first failure in input order.
    pub fn energies(&self) -> Result<Vec<Vec<f64>>, WavevectorError> {
        self.outcomes
            .iter()
            .map(|outcome| match outcome {
                Ok(o) => Ok(o.spectrum.physical(self.zero_energy_tolerance)),
                Err(e) => Err(e.clone()),
            })
            .collect()
    }

    /// All 2n sorted eigenvalues per wavevector, `None` where the wavevector failed.
    pub fn raw_energies(&self) -> Vec<Option<&[Complex64]>> {
        self.outcomes
            .iter()
            .map(|outcome| outcome.as_ref().ok().map(|o| o.spectrum.raw()))
            .collect()
    }

    pub fn methods(&self) -> Vec<Option<DecompositionMethod>> {
        self.outcomes
            .iter()
            .map(|outcome| outcome.as_ref().ok().map(|o| o.method))
            .collect()
    }

    pub fn warnings(&self) -> Vec<&InstabilityWarning> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.as_ref().ok().and_then(|o| o.warning.as_ref()))
            .collect()
    }

    pub fn failures(&self) -> Vec<&WavevectorError> {
        self.outcomes.iter().filter_map(|outcome| outcome.as_ref().err()).collect()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.is_ok()).count()
    }
}
