use nalgebra::{Matrix3, Vector3};

use crate::couplings::{Coupling, MagneticField};
use crate::errors::SpinwaveError;
use crate::calculation::SpinwaveInput;

// Two sites per cell at y = 0 and y = 1/2; the cell repeats along y
fn two_site_chain_bonds(exchange: f64) -> Vec<Coupling> {
    let y = Vector3::new(0.0, 1.0, 0.0);
    vec![
        Coupling::isotropic(0, 1, exchange, Vector3::zeros()),
        Coupling::isotropic(1, 0, exchange, Vector3::zeros()),
        Coupling::isotropic(1, 0, exchange, y),
        Coupling::isotropic(0, 1, exchange, -y),
    ]
}

/// Two-site ferromagnetic chain along y with both moments along +z.
///
/// For `exchange = -|J|` the branches are `2|J|S (1 -/+ |cos(pi q_y)|)`.
pub fn ferromagnetic_chain(exchange: f64, spin: f64) -> Result<SpinwaveInput, SpinwaveError> {
    SpinwaveInput::from_rotations(
        vec![Matrix3::identity(), Matrix3::identity()],
        vec![spin, spin],
        two_site_chain_bonds(exchange),
    )
}

/// Two-site Neel chain along y; the second moment points along -z.
///
/// For `exchange = J > 0` both branches are `2JS |sin(pi q_y)|`.
pub fn antiferromagnetic_chain(exchange: f64, spin: f64) -> Result<SpinwaveInput, SpinwaveError> {
    ferrimagnetic_chain(exchange, spin, spin)
}

/// Neel chain with unequal spin lengths on the two sublattices.
///
/// With `d = spin1 - spin2` the branches are
/// `J (sqrt(d^2 + 4 spin1 spin2 sin^2(pi q_y)) -/+ d)`, one of them gapped by `2J|d|` at q = 0.
pub fn ferrimagnetic_chain(exchange: f64, spin1: f64, spin2: f64) -> Result<SpinwaveInput, SpinwaveError> {
    SpinwaveInput::from_rotations(
        vec![
            Matrix3::identity(),
            Matrix3::from_diagonal(&Vector3::new(-1.0, 1.0, -1.0)),
        ],
        vec![spin1, spin2],
        two_site_chain_bonds(exchange),
    )
}

/// One site per cell coupled to its neighbours at +-y, moment along +z.
///
/// Antiferromagnetic `exchange > 0` makes this ferromagnetic order unstable.
pub fn single_site_chain(exchange: f64, spin: f64) -> Result<SpinwaveInput, SpinwaveError> {
    let y = Vector3::new(0.0, 1.0, 0.0);
    SpinwaveInput::from_rotations(
        vec![Matrix3::identity()],
        vec![spin],
        vec![
            Coupling::isotropic(0, 0, exchange, y),
            Coupling::isotropic(0, 0, exchange, -y),
        ],
    )
}

/// A lone spin without couplings; every magnon energy vanishes.
pub fn isolated_site(spin: f64) -> Result<SpinwaveInput, SpinwaveError> {
    SpinwaveInput::from_rotations(vec![Matrix3::identity()], vec![spin], Vec::new())
}

/// Ferromagnetic chain with moments antiparallel to a field along +z.
///
/// Every branch is lifted by `g mu_B B`.
pub fn ferromagnetic_chain_in_field(
    exchange: f64,
    spin: f64,
    field_tesla: f64,
    g: f64,
) -> Result<SpinwaveInput, SpinwaveError> {
    let down = Matrix3::from_diagonal(&Vector3::new(1.0, -1.0, -1.0));
    SpinwaveInput::from_rotations(vec![down, down], vec![spin, spin], two_site_chain_bonds(exchange))?
        .with_field(MagneticField::isotropic(Vector3::new(0.0, 0.0, field_tesla), g, 2))
}

/// `n` evenly spaced wavevectors from `start` to `end`, both included.
pub fn q_line(start: Vector3<f64>, end: Vector3<f64>, n: usize) -> Vec<Vector3<f64>> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => (0..n)
            .map(|i| start + (end - start) * (i as f64 / (n - 1) as f64))
            .collect(),
    }
}
