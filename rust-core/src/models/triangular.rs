use nalgebra::{Matrix3, Vector3};
use num_complex::Complex64;
use std::f64::consts::PI;

use crate::calculation::SpinwaveInput;
use crate::couplings::Coupling;
use crate::errors::SpinwaveError;

// Nearest neighbours of the triangular lattice in units of t1 = (1, 0), t2 = (1/2, sqrt(3)/2)
const NEIGHBOURS: [(i32, i32); 6] = [(1, 0), (-1, 0), (0, 1), (0, -1), (-1, 1), (1, -1)];

/// Couplings of the cell `A1 = 3 t1`, `A2 = t1 + t2` with sites at 0, t1 and 2 t1.
///
/// The point `m t1 + n t2` sits on sublattice `(m - n) mod 3` in cell `a A1 + n A2`.
fn triangular_couplings(exchange: f64) -> Vec<Coupling> {
    let j = Matrix3::identity() * exchange;
    let mut couplings = Vec::with_capacity(3 * NEIGHBOURS.len());
    for site in 0..3i32 {
        for &(dm, dn) in &NEIGHBOURS {
            let (m, n) = (site + dm, dn);
            let target = (m - n).rem_euclid(3);
            let a = (m - n - target) / 3;
            couplings.push(Coupling::real(
                site as usize,
                target as usize,
                j,
                Vector3::new(a as f64, n as f64, 0.0),
            ));
        }
    }
    couplings
}

/// Triangular-lattice Heisenberg antiferromagnet with 120 degree order in the xy-plane.
///
/// Wavevectors are in units of the reciprocal vectors of the three-site cell.
pub fn triangular_antiferromagnet(exchange: f64, spin: f64) -> Result<SpinwaveInput, SpinwaveError> {
    let directions: Vec<Vector3<Complex64>> = (0..3)
        .map(|k| {
            let angle = 2.0 * PI * k as f64 / 3.0;
            Vector3::new(angle.cos(), angle.sin(), 0.0).map(|x| Complex64::new(x, 0.0))
        })
        .collect();
    SpinwaveInput::from_directions(&directions, vec![spin; 3], triangular_couplings(exchange))
}

/// The three folded branches `3JS sqrt((1 - g)(1 + 2g))` at cell wavevector `q`, ascending.
///
/// `g` is the lattice structure factor at `k`, `k + Q` and `k + 2Q`, with `Q` the 120 degree ordering vector.
pub fn triangular_branches(exchange: f64, spin: f64, q: &Vector3<f64>) -> Vec<f64> {
    // k . t1 = 2 pi x, k . t2 = 2 pi y
    let x = q.x / 3.0;
    let y = q.y - q.x / 3.0;
    let mut branches: Vec<f64> = (0..3)
        .map(|s| {
            let (xs, ys) = (x + s as f64 / 3.0, y - s as f64 / 3.0);
            let g = ((2.0 * PI * xs).cos() + (2.0 * PI * ys).cos() + (2.0 * PI * (ys - xs)).cos()) / 3.0;
            3.0 * exchange * spin * ((1.0 - g) * (1.0 + 2.0 * g)).max(0.0).sqrt()
        })
        .collect();
    branches.sort_by(f64::total_cmp);
    branches
}
