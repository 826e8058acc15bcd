#[cfg(test)]
mod _tests_paraunitary {
    use super::super::paraunitary::{apply_signature, attempt_cholesky, attempt_ldl, diagonalize, signature_weighted};
    use crate::config::SpinwaveConfig;
    use crate::errors::DecompositionError;
    use crate::interfaces::{DecompositionMethod, IndefiniteBlockPolicy, Stage};
    use crate::linalg::general_eigenvalues;
    use approx::assert_relative_eq;
    use nalgebra::DMatrix;
    use num_complex::Complex64;

    const TOL: f64 = 1e-9;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    fn real_matrix(n: usize, entries: &[f64]) -> DMatrix<Complex64> {
        DMatrix::from_row_slice(n, n, entries).map(|x| c(x, 0.0))
    }

    fn positive_definite(n: usize) -> DMatrix<Complex64> {
        let x = DMatrix::from_fn(n, n, |i, j| {
            let t = (i * n + j) as f64;
            c((0.8 * t + 0.3).cos(), (1.7 * t - 0.2).sin())
        });
        &x * x.adjoint() + DMatrix::from_diagonal_element(n, n, c(2.0 * n as f64, 0.0))
    }

    fn sorted(mut values: Vec<Complex64>) -> Vec<Complex64> {
        values.sort_by(|a, b| a.re.total_cmp(&b.re).then(a.im.total_cmp(&b.im)));
        values
    }

    fn max_deviation(a: &DMatrix<Complex64>, b: &DMatrix<Complex64>) -> f64 {
        (a - b).iter().map(|z| z.norm()).fold(0.0, f64::max)
    }

    // Two-site ferromagnetic chain at the zone centre: exactly singular
    fn ferromagnetic_gamma() -> DMatrix<Complex64> {
        real_matrix(
            4,
            &[
                2.0, -2.0, 0.0, 0.0, //
                -2.0, 2.0, 0.0, 0.0, //
                0.0, 0.0, 2.0, -2.0, //
                0.0, 0.0, -2.0, 2.0,
            ],
        )
    }

    #[test]
    fn test_signature_negates_lower_half() {
        let m = DMatrix::from_element(4, 2, c(1.0, 1.0));
        let s = apply_signature(&m);
        assert_eq!(s[(1, 1)], c(1.0, 1.0));
        assert_eq!(s[(2, 0)], c(-1.0, -1.0));
        assert_eq!(s[(3, 1)], c(-1.0, -1.0));
    }

    #[test]
    fn test_both_factorizations_agree_on_positive_definite() {
        let config = SpinwaveConfig::default();
        let h = positive_definite(6);

        let chol = attempt_cholesky(&h, &config).unwrap();
        let ldl = attempt_ldl(&h, &config).unwrap();
        assert_eq!(chol.method, DecompositionMethod::Cholesky);
        assert_eq!(ldl.method, DecompositionMethod::Ldl);
        assert!(ldl.hermitian);
        assert!(max_deviation(&(&chol.k * &chol.k_tilde), &h) < TOL);
        assert!(max_deviation(&(&ldl.k * &ldl.k_tilde), &h) < TOL);

        let budget = config.eigen_iteration_budget(6);
        let from_chol = sorted(general_eigenvalues(&signature_weighted(&chol), budget).unwrap());
        let from_ldl = sorted(general_eigenvalues(&signature_weighted(&ldl), budget).unwrap());
        let reference = sorted(general_eigenvalues(&apply_signature(&h), budget).unwrap());
        for ((a, b), r) in from_chol.iter().zip(from_ldl.iter()).zip(reference.iter()) {
            assert!((a - b).norm() < 1e-8);
            assert!((a - r).norm() < 1e-8);
        }
    }

    #[test]
    fn test_singular_hamiltonian_falls_back_to_ldl() {
        let config = SpinwaveConfig::default();
        let h = ferromagnetic_gamma();
        assert!(attempt_cholesky(&h, &config).is_err());

        let solution = diagonalize(&h, 3, &config).unwrap();
        assert_eq!(solution.method, DecompositionMethod::Ldl);
        let values = sorted(solution.eigenvalues);
        let expected = [-4.0, 0.0, 0.0, 4.0];
        for (v, e) in values.iter().zip(expected.iter()) {
            assert_relative_eq!(v.re, *e, epsilon = TOL);
            assert_relative_eq!(v.im, 0.0, epsilon = TOL);
        }
        assert!(solution.eigenvectors.is_none());
        assert!(solution.factor.is_none());
    }

    #[test]
    fn test_ldl_factor_reconstructs_singular() {
        let config = SpinwaveConfig::default();
        let h = ferromagnetic_gamma();
        let factor = attempt_ldl(&h, &config).unwrap();
        assert!(factor.hermitian);
        assert!(max_deviation(&(&factor.k * &factor.k_tilde), &h) < TOL);
        assert!(max_deviation(&factor.k_tilde, &factor.k.adjoint()) < TOL);
    }

    #[test]
    fn test_indefinite_block_rejected_by_default() {
        let h = real_matrix(2, &[-1.0, 2.0, 2.0, -1.0]);
        let err = diagonalize(&h, 7, &SpinwaveConfig::default()).unwrap_err();
        assert_eq!(err.q_index, 7);
        assert_eq!(err.stage, Stage::BlockSquareRoot);
        assert!(matches!(err.source, DecompositionError::IndefiniteBlock { index: 0, .. }));
    }

    #[test]
    fn test_indefinite_block_permitted_gives_complex_pair() {
        let h = real_matrix(2, &[-1.0, 2.0, 2.0, -1.0]);
        let config = SpinwaveConfig::default().with_indefinite_blocks(IndefiniteBlockPolicy::Permit);
        let factor = attempt_ldl(&h, &config).unwrap();
        assert!(!factor.hermitian);
        assert!(max_deviation(&(&factor.k * &factor.k_tilde), &h) < TOL);

        let solution = diagonalize(&h, 0, &config).unwrap();
        let values = sorted(solution.eigenvalues);
        let root = 3.0_f64.sqrt();
        assert_relative_eq!(values[0].im, -root, epsilon = TOL);
        assert_relative_eq!(values[1].im, root, epsilon = TOL);
        assert!(values.iter().all(|v| v.re.abs() < TOL));
    }

    #[test]
    fn test_negative_pivot_is_block_square_root_failure() {
        let h = real_matrix(2, &[-2.0, 0.0, 0.0, -2.0]);
        let err = diagonalize(&h, 1, &SpinwaveConfig::default()).unwrap_err();
        assert_eq!(err.stage, Stage::BlockSquareRoot);
        assert_eq!(err.source, DecompositionError::NegativePivot { index: 0, value: -2.0 });
    }

    #[test]
    fn test_eigenvectors_kept_on_request() {
        let h = positive_definite(4);
        let config = SpinwaveConfig::default().with_eigenvectors(true);
        let solution = diagonalize(&h, 0, &config).unwrap();
        assert_eq!(solution.method, DecompositionMethod::Cholesky);
        let vectors = solution.eigenvectors.unwrap();
        let k = solution.factor.unwrap();
        assert_eq!(vectors.shape(), (4, 4));
        assert_eq!(k.shape(), (4, 4));

        // Columns are eigenvectors of K^dagger Sigma K
        let m = k.adjoint() * apply_signature(&k);
        for (col, value) in solution.eigenvalues.iter().enumerate() {
            let v = vectors.column(col);
            assert!((&m * v - v * *value).norm() < 1e-8);
        }
    }
}
