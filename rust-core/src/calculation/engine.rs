use std::borrow::Cow;

use log::{debug, info, warn};
use nalgebra::Vector3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::input::SpinwaveInput;
use super::result::{SpinwaveResult, WavevectorOutcome};
use crate::bogoliubov::diagonalize;
use crate::config::SpinwaveConfig;
use crate::couplings::{complete_reciprocity, validate_reciprocity, Coupling};
use crate::errors::{SpinwaveError, WavevectorError};
use crate::hamiltonian::QIndependentTerms;
use crate::interfaces::ReciprocityMode;
use crate::spectrum::{check_stability, EnergySpectrum};

/// Couplings that enter the Hamiltonian, after the configured reciprocity handling.
pub fn effective_couplings<'a>(
    couplings: &'a [Coupling],
    config: &SpinwaveConfig,
) -> Result<Cow<'a, [Coupling]>, SpinwaveError> {
    match config.reciprocity {
        ReciprocityMode::Validate => {
            validate_reciprocity(couplings, config.coupling_tolerance)?;
            Ok(Cow::Borrowed(couplings))
        }
        ReciprocityMode::Complete => Ok(Cow::Owned(complete_reciprocity(couplings, config.coupling_tolerance))),
    }
}

/// Assemble, diagonalize and post-process one wavevector.
pub fn solve_wavevector(
    terms: &QIndependentTerms,
    q_index: usize,
    q: &Vector3<f64>,
    config: &SpinwaveConfig,
) -> Result<WavevectorOutcome, WavevectorError> {
    let h = terms.grand_hamiltonian(q);
    let solution = diagonalize(&h, q_index, config)?;
    let spectrum = EnergySpectrum::from_raw(solution.eigenvalues, solution.eigenvectors);
    let warning = check_stability(&spectrum, q_index, config.instability_tolerance);

    Ok(WavevectorOutcome {
        q_index,
        q: *q,
        spectrum,
        method: solution.method,
        warning,
        factor: solution.factor,
    })
}

/// Linear spin-wave spectra for every wavevector.
///
/// Static problems with the input abort before any wavevector is touched.
/// Numerical failures stay confined to their wavevector in the returned outcomes.
pub fn calculate(
    input: &SpinwaveInput,
    q_vectors: &[Vector3<f64>],
    config: &SpinwaveConfig,
) -> Result<SpinwaveResult, SpinwaveError> {
    if let Some(index) = q_vectors.iter().position(|q| q.iter().any(|x| !x.is_finite())) {
        return Err(SpinwaveError::NonFinite { what: "wavevector", index });
    }

    let couplings = effective_couplings(input.couplings(), config)?;
    let terms = QIndependentTerms::new(input.frames(), input.magnitudes(), &couplings, input.field())?;
    debug!(
        "Spin-wave calculation: {} sites, {} couplings, {} wavevectors",
        terms.n_sites(),
        couplings.len(),
        q_vectors.len()
    );

    #[cfg(feature = "parallel")]
    let outcomes: Vec<_> = q_vectors
        .par_iter()
        .enumerate()
        .map(|(q_index, q)| solve_wavevector(&terms, q_index, q, config))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<_> = q_vectors
        .iter()
        .enumerate()
        .map(|(q_index, q)| solve_wavevector(&terms, q_index, q, config))
        .collect();

    let result = SpinwaveResult {
        outcomes,
        zero_energy_tolerance: config.zero_energy_tolerance,
    };
    for failure in result.failures() {
        warn!("{}", failure);
    }
    info!(
        "Spin-wave calculation finished: {}/{} wavevectors solved, {} instability warnings",
        result.succeeded(),
        result.len(),
        result.warnings().len()
    );
    Ok(result)
}

/// Physical energies per wavevector, failing on the first wavevector that could not be solved.
pub fn calculate_energies(
    input: &SpinwaveInput,
    q_vectors: &[Vector3<f64>],
    config: &SpinwaveConfig,
) -> Result<Vec<Vec<f64>>, SpinwaveError> {
    Ok(calculate(input, q_vectors, config)?.energies()?)
}
