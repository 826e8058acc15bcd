use nalgebra::{DMatrix, DVector, Vector3};
use num_complex::Complex64;

use super::grand::grand_from_blocks;
use crate::couplings::{Coupling, MagneticField};
use crate::errors::SpinwaveError;
use crate::frames::LocalFrame;

/// Everything of the quadratic boson Hamiltonian that does not depend on the wavevector.
///
/// Built once per batch and shared read-only between the per-wavevector workers.
#[derive(Debug, Clone)]
pub struct QIndependentTerms {
    z: Vec<Vector3<Complex64>>,
    coeff: DMatrix<f64>,
    c_diagonal: DVector<f64>,
    zeeman: Option<DVector<f64>>,
    couplings: Vec<Coupling>,
}

impl QIndependentTerms {
    pub fn new(
        frames: &[LocalFrame],
        magnitudes: &[f64],
        couplings: &[Coupling],
        field: Option<&MagneticField>,
    ) -> Result<Self, SpinwaveError> {
        let n = frames.len();
        if magnitudes.len() != n {
            return Err(SpinwaveError::InputShape {
                what: "magnitudes",
                expected: n,
                found: magnitudes.len(),
            });
        }
        check_coupling_indices(couplings, n)?;

        let z: Vec<Vector3<Complex64>> = frames.iter().map(|f| *f.z()).collect();
        let eta: Vec<Vector3<Complex64>> = frames.iter().map(|f| f.eta_complex()).collect();

        // sqrt(S_i / 2) sqrt(S_j / 2)
        let coeff = DMatrix::from_fn(n, n, |i, j| (magnitudes[i] * magnitudes[j]).sqrt() / 2.0);

        // Longitudinal correction: C_ii = sum_j S_j eta_i^T J eta_j, Hermitian part only
        let mut c_diagonal = DVector::<f64>::zeros(n);
        for c in couplings {
            let value = eta[c.index1].dot(&(c.matrix * eta[c.index2]));
            c_diagonal[c.index1] += magnitudes[c.index2] * value.re;
        }

        let zeeman = match field {
            Some(f) => {
                f.validate(n)?;
                Some(DVector::from_fn(n, |i, _| f.zeeman_shift(i, &frames[i])))
            }
            None => None,
        };

        Ok(QIndependentTerms {
            z,
            coeff,
            c_diagonal,
            zeeman,
            couplings: couplings.to_vec(),
        })
    }

    pub fn n_sites(&self) -> usize {
        self.z.len()
    }

    pub fn couplings(&self) -> &[Coupling] {
        &self.couplings
    }

    /// Diagonal self-energy matrix `C`.
    pub fn c_matrix(&self) -> DMatrix<Complex64> {
        DMatrix::from_diagonal(&self.c_diagonal.map(|x| Complex64::new(x, 0.0)))
    }

    /// The `A(q)` and `B(q)` blocks.
    ///
    /// `A_ij += coeff_ij (z_i^T J conj(z_j)) e^{i phi}` and
    /// `B_ij += coeff_ij (z_i^T J z_j) e^{i phi}`, summed over couplings.
    pub fn assemble(&self, q: &Vector3<f64>) -> (DMatrix<Complex64>, DMatrix<Complex64>) {
        let n = self.n_sites();
        let mut a = DMatrix::<Complex64>::zeros(n, n);
        let mut b = DMatrix::<Complex64>::zeros(n, n);

        for c in &self.couplings {
            let (i, j) = (c.index1, c.index2);
            let weight = c.phase(q) * self.coeff[(i, j)];
            let zi = &self.z[i];
            let zj = &self.z[j];
            a[(i, j)] += zi.dot(&(c.matrix * zj.conjugate())) * weight;
            b[(i, j)] += zi.dot(&(c.matrix * zj)) * weight;
        }

        if let Some(zeeman) = &self.zeeman {
            for i in 0..n {
                a[(i, i)] += Complex64::new(zeeman[i], 0.0);
            }
        }
        (a, b)
    }

    /// `H(q) = [[A - C, B], [B^dagger, A - C]]`.
    pub fn grand_hamiltonian(&self, q: &Vector3<f64>) -> DMatrix<Complex64> {
        let (a, b) = self.assemble(q);
        grand_from_blocks(&a, &b, &self.c_matrix())
    }
}

pub fn check_coupling_indices(couplings: &[Coupling], n_sites: usize) -> Result<(), SpinwaveError> {
    for (coupling, c) in couplings.iter().enumerate() {
        for index in [c.index1, c.index2] {
            if index >= n_sites {
                return Err(SpinwaveError::CouplingIndex {
                    coupling,
                    index,
                    n_sites,
                });
            }
        }
    }
    Ok(())
}
