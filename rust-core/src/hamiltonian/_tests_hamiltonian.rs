#[cfg(test)]
mod _tests_hamiltonian {
    use super::super::assembly::QIndependentTerms;
    use super::super::grand::{build_grand_hamiltonian, hermiticity_residual};
    use crate::config::MU_B;
    use crate::couplings::{complete_reciprocity, phase_factor, Coupling, MagneticField};
    use crate::errors::SpinwaveError;
    use crate::frames::LocalFrame;
    use approx::assert_relative_eq;
    use nalgebra::{DMatrix, Matrix3, Vector3};
    use num_complex::Complex64;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-12;

    fn chain_bonds(exchange: f64) -> Vec<Coupling> {
        let y = Vector3::new(0.0, 1.0, 0.0);
        vec![
            Coupling::isotropic(0, 1, exchange, Vector3::zeros()),
            Coupling::isotropic(1, 0, exchange, Vector3::zeros()),
            Coupling::isotropic(1, 0, exchange, y),
            Coupling::isotropic(0, 1, exchange, -y),
        ]
    }

    fn identity_frames(n: usize) -> Vec<LocalFrame> {
        (0..n)
            .map(|_| LocalFrame::from_rotation(Matrix3::identity()).unwrap())
            .collect()
    }

    fn antiparallel_frames() -> Vec<LocalFrame> {
        vec![
            LocalFrame::from_rotation(Matrix3::identity()).unwrap(),
            LocalFrame::from_rotation(Matrix3::from_diagonal(&Vector3::new(-1.0, 1.0, -1.0))).unwrap(),
        ]
    }

    #[test]
    fn test_ferromagnetic_blocks() {
        let terms = QIndependentTerms::new(&identity_frames(2), &[1.0, 1.0], &chain_bonds(-1.0), None).unwrap();
        let c = terms.c_matrix();
        assert_relative_eq!(c[(0, 0)].re, -2.0, epsilon = TOL);
        assert_relative_eq!(c[(1, 1)].re, -2.0, epsilon = TOL);
        assert_relative_eq!(c[(0, 1)].norm(), 0.0, epsilon = TOL);

        let q = Vector3::new(0.0, 0.3, 0.0);
        let (a, b) = terms.assemble(&q);
        let expected = -(Complex64::new(1.0, 0.0) + phase_factor(&q, &Vector3::new(0.0, -1.0, 0.0)));
        assert_relative_eq!(a[(0, 1)].re, expected.re, epsilon = TOL);
        assert_relative_eq!(a[(0, 1)].im, expected.im, epsilon = TOL);
        assert_relative_eq!(a[(0, 0)].norm(), 0.0, epsilon = TOL);
        assert!(b.iter().all(|x| x.norm() < TOL));

        let h = terms.grand_hamiltonian(&q);
        assert_eq!(h.shape(), (4, 4));
        assert_relative_eq!(h[(0, 0)].re, 2.0, epsilon = TOL);
        assert_relative_eq!(h[(3, 3)].re, 2.0, epsilon = TOL);
        assert!(hermiticity_residual(&h) < TOL);
    }

    #[test]
    fn test_antiferromagnetic_blocks() {
        let terms = QIndependentTerms::new(&antiparallel_frames(), &[1.0, 1.0], &chain_bonds(1.0), None).unwrap();
        let c = terms.c_matrix();
        assert_relative_eq!(c[(0, 0)].re, -2.0, epsilon = TOL);

        let (a, b) = terms.assemble(&Vector3::zeros());
        // Antiparallel neighbours only couple through the anomalous block
        assert!(a.iter().all(|x| x.norm() < TOL));
        assert_relative_eq!(b[(0, 1)].re, -2.0, epsilon = TOL);
        assert_relative_eq!(b[(1, 0)].re, -2.0, epsilon = TOL);
    }

    #[test]
    fn test_spin_coefficients() {
        let terms = QIndependentTerms::new(&identity_frames(2), &[2.0, 0.5], &chain_bonds(-1.0), None).unwrap();
        let (a, _) = terms.assemble(&Vector3::zeros());
        // coeff = sqrt(2 * 0.5) / 2 and z0^T J conj(z1) = -2 for each of two bonds
        assert_relative_eq!(a[(0, 1)].re, -2.0, epsilon = TOL);
        // C_00 = S_1 * (-1) * 2 bonds
        assert_relative_eq!(terms.c_matrix()[(0, 0)].re, -1.0, epsilon = TOL);
        assert_relative_eq!(terms.c_matrix()[(1, 1)].re, -4.0, epsilon = TOL);
    }

    #[test]
    fn test_zeeman_on_diagonal() {
        let frames = vec![LocalFrame::from_direction(&Vector3::new(0.0, 0.0, -1.0)).unwrap()];
        let field = MagneticField::isotropic(Vector3::new(0.0, 0.0, 3.0), 2.0, 1);
        let terms = QIndependentTerms::new(&frames, &[1.0], &[], Some(&field)).unwrap();
        let (a, _) = terms.assemble(&Vector3::new(0.1, 0.2, 0.3));
        assert_relative_eq!(a[(0, 0)].re, 2.0 * MU_B * 3.0, epsilon = TOL);
    }

    #[test]
    fn test_triangular_dm_structure_is_hermitian() {
        let directions: Vec<Vector3<f64>> = (0..3)
            .map(|k| {
                let angle = 2.0 * PI * k as f64 / 3.0;
                Vector3::new(angle.cos(), angle.sin(), 0.0)
            })
            .collect();
        let frames: Vec<LocalFrame> = directions
            .iter()
            .map(|d| LocalFrame::from_direction(d).unwrap())
            .collect();

        let dm = |d: f64| Matrix3::new(1.0, d, 0.0, -d, 1.0, 0.0, 0.0, 0.0, 0.8).map(|x| Complex64::new(x, 0.0));
        let half = vec![
            Coupling::new(0, 1, dm(0.2), Vector3::new(1.0, 0.0, 0.0)),
            Coupling::new(1, 2, dm(0.2), Vector3::new(0.0, 1.0, 0.0)),
            Coupling::new(2, 0, dm(0.2), Vector3::new(-1.0, -1.0, 0.0)),
            Coupling::new(0, 0, dm(0.0), Vector3::new(0.0, 0.0, 1.0)),
        ];
        let couplings = complete_reciprocity(&half, 1e-10);
        let terms = QIndependentTerms::new(&frames, &[1.5, 1.5, 1.5], &couplings, None).unwrap();

        for q in [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.1, 0.2, 0.3),
            Vector3::new(1.0 / 3.0, 1.0 / 3.0, 0.0),
            Vector3::new(-0.45, 0.05, 0.7),
        ] {
            let h = terms.grand_hamiltonian(&q);
            assert!(hermiticity_residual(&h) < 1e-12, "H(q) not Hermitian at {:?}", q);
        }
    }

    #[test]
    fn test_out_of_range_coupling_rejected() {
        let bonds = vec![Coupling::isotropic(0, 2, 1.0, Vector3::zeros())];
        let result = QIndependentTerms::new(&identity_frames(2), &[1.0, 1.0], &bonds, None);
        assert_eq!(
            result.unwrap_err(),
            SpinwaveError::CouplingIndex {
                coupling: 0,
                index: 2,
                n_sites: 2
            }
        );
    }

    #[test]
    fn test_magnitude_count_mismatch() {
        let result = QIndependentTerms::new(&identity_frames(2), &[1.0], &[], None);
        assert!(matches!(result, Err(SpinwaveError::InputShape { what: "magnitudes", .. })));
    }

    #[test]
    fn test_grand_block_layout() {
        let a = DMatrix::from_fn(2, 2, |i, j| Complex64::new((i + 2 * j) as f64, 0.0));
        let b = DMatrix::from_fn(2, 2, |i, j| Complex64::new(0.0, (1 + i + j) as f64));
        let c = DMatrix::from_diagonal_element(2, 2, Complex64::new(1.0, 0.0));
        let h = build_grand_hamiltonian(&a, &b, &c).unwrap();
        assert_eq!(h[(0, 0)], Complex64::new(-1.0, 0.0));
        assert_eq!(h[(2, 3)], a[(0, 1)]);
        assert_eq!(h[(0, 3)], b[(0, 1)]);
        assert_eq!(h[(3, 0)], b[(0, 1)].conj());
    }

    #[test]
    fn test_grand_shape_mismatch() {
        let a = DMatrix::<Complex64>::zeros(2, 2);
        let b = DMatrix::<Complex64>::zeros(3, 3);
        let c = DMatrix::<Complex64>::zeros(2, 2);
        assert_eq!(
            build_grand_hamiltonian(&a, &b, &c),
            Err(SpinwaveError::InputShape {
                what: "B",
                expected: 2,
                found: 3
            })
        );
    }
}
