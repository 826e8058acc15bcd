use log::warn;
use nalgebra::DMatrix;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// The 2n eigenvalues of one wavevector, ascending by real part (ties by imaginary part).
#[derive(Debug, Clone, PartialEq)]
pub struct EnergySpectrum {
    values: Vec<Complex64>,
    eigenvectors: Option<DMatrix<Complex64>>,
}

impl EnergySpectrum {
    /// Sort raw eigenvalues, permuting eigenvector columns alongside.
    pub fn from_raw(values: Vec<Complex64>, eigenvectors: Option<DMatrix<Complex64>>) -> Self {
        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_by(|&a, &b| {
            values[a]
                .re
                .total_cmp(&values[b].re)
                .then(values[a].im.total_cmp(&values[b].im))
        });

        let sorted_values = order.iter().map(|&i| values[i]).collect();
        let sorted_vectors = eigenvectors
            .filter(|v| v.ncols() == values.len())
            .map(|v| v.select_columns(order.iter()));

        EnergySpectrum {
            values: sorted_values,
            eigenvectors: sorted_vectors,
        }
    }

    pub fn raw(&self) -> &[Complex64] {
        &self.values
    }

    pub fn eigenvectors(&self) -> Option<&DMatrix<Complex64>> {
        self.eigenvectors.as_ref()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Real parts of the physical branch: the upper half of the sorted, +/- paired spectrum.
    ///
    /// Exactly one member of each pair is kept, so the list has n entries for n sites.
    /// Entries with `|Re E| < zero_tol` are snapped to zero.
    pub fn physical(&self, zero_tol: f64) -> Vec<f64> {
        let half = self.values.len() / 2;
        self.values[half..]
            .iter()
            .map(|v| if v.re.abs() < zero_tol { 0.0 } else { v.re })
            .collect()
    }

    /// Largest `|Im E|`; zero for an empty spectrum.
    pub fn max_imaginary(&self) -> f64 {
        self.values.iter().map(|v| v.im.abs()).fold(0.0, f64::max)
    }
}

/// The magnetic structure is not a stable ground state at this wavevector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstabilityWarning {
    pub q_index: usize,
    /// Largest imaginary part found in the spectrum.
    pub residue: f64,
}

/// Flag a spectrum whose eigenvalues carry imaginary parts above `tol`.
pub fn check_stability(spectrum: &EnergySpectrum, q_index: usize, tol: f64) -> Option<InstabilityWarning> {
    let residue = spectrum.max_imaginary();
    if residue > tol {
        warn!(
            "q[{}]: complex magnon energies (max |Im E| = {:.3e}); the magnetic structure may be unstable",
            q_index, residue
        );
        Some(InstabilityWarning { q_index, residue })
    } else {
        None
    }
}
