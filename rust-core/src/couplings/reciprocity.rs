use log::debug;

use super::coupling::Coupling;
use crate::errors::SpinwaveError;

// Pair every coupling with a distinct reciprocal partner. Self-reciprocal couplings
// pair with themselves. Returns the indices left without a partner.
fn unmatched_couplings(couplings: &[Coupling], tol: f64) -> Vec<usize> {
    let mut matched = vec![false; couplings.len()];
    let mut unmatched = Vec::new();

    for i in 0..couplings.len() {
        if matched[i] {
            continue;
        }
        matched[i] = true;
        if couplings[i].is_self_reciprocal(tol) {
            continue;
        }
        let partner = (i + 1..couplings.len())
            .find(|&j| !matched[j] && couplings[i].is_partner_of(&couplings[j], tol));
        match partner {
            Some(j) => matched[j] = true,
            None => unmatched.push(i),
        }
    }
    unmatched
}

/// Check that the couplings form reciprocal pairs `(i, j, J, d)` / `(j, i, J^dagger, -d)`.
///
/// Reciprocity is what makes the grand Hamiltonian Hermitian.
pub fn validate_reciprocity(couplings: &[Coupling], tol: f64) -> Result<(), SpinwaveError> {
    match unmatched_couplings(couplings, tol).first() {
        Some(&coupling) => Err(SpinwaveError::NonReciprocalCoupling { coupling }),
        None => Ok(()),
    }
}

/// Append the missing reciprocal partners. Already paired couplings are left untouched.
pub fn complete_reciprocity(couplings: &[Coupling], tol: f64) -> Vec<Coupling> {
    let unmatched = unmatched_couplings(couplings, tol);
    if !unmatched.is_empty() {
        debug!("Synthesizing {} reciprocal coupling partners", unmatched.len());
    }
    let mut completed = couplings.to_vec();
    completed.extend(unmatched.into_iter().map(|i| couplings[i].reversed()));
    completed
}
