#[cfg(test)]
mod _tests_coupling {
    use super::super::coupling::{phase_factor, Coupling};
    use super::super::field::MagneticField;
    use crate::config::MU_B;
    use crate::errors::SpinwaveError;
    use crate::frames::LocalFrame;
    use approx::assert_relative_eq;
    use nalgebra::{Matrix3, Vector3};
    use num_complex::Complex64;

    const TOL: f64 = 1e-12;

    fn dm_matrix() -> Matrix3<Complex64> {
        // Heisenberg plus an antisymmetric Dzyaloshinskii-Moriya part along z
        Matrix3::new(1.0, 0.3, 0.0, -0.3, 1.0, 0.0, 0.0, 0.0, 0.5).map(|x| Complex64::new(x, 0.0))
    }

    #[test]
    fn test_phase_is_unit_modulus() {
        let q = Vector3::new(0.13, -0.71, 2.4);
        let d = Vector3::new(1.0, 0.5, -0.25);
        let p = phase_factor(&q, &d);
        assert_relative_eq!(p.norm(), 1.0, epsilon = TOL);
    }

    #[test]
    fn test_phase_values() {
        let d = Vector3::new(0.0, 1.0, 0.0);
        let half = phase_factor(&Vector3::new(0.0, 0.5, 0.0), &d);
        assert_relative_eq!(half.re, -1.0, epsilon = TOL);
        assert_relative_eq!(half.im, 0.0, epsilon = TOL);

        let quarter = phase_factor(&Vector3::new(0.0, 0.25, 0.0), &d);
        assert_relative_eq!(quarter.re, 0.0, epsilon = TOL);
        assert_relative_eq!(quarter.im, 1.0, epsilon = TOL);

        let origin = phase_factor(&Vector3::zeros(), &d);
        assert_relative_eq!(origin.re, 1.0, epsilon = TOL);
    }

    #[test]
    fn test_reversed_is_partner() {
        let c = Coupling::new(0, 2, dm_matrix(), Vector3::new(1.0, 0.0, 0.0));
        let r = c.reversed();
        assert_eq!(r.index1, 2);
        assert_eq!(r.index2, 0);
        assert_relative_eq!(r.inter_site_vector, Vector3::new(-1.0, 0.0, 0.0), epsilon = TOL);
        assert!(c.is_partner_of(&r, 1e-10));
        assert!(r.is_partner_of(&c, 1e-10));

        // An on-site DM tensor is not its own adjoint
        let onsite = Coupling::new(0, 0, dm_matrix(), Vector3::zeros());
        assert!(!onsite.is_self_reciprocal(1e-10));
    }

    #[test]
    fn test_onsite_symmetric_coupling_is_self_reciprocal() {
        let c = Coupling::real(1, 1, Matrix3::from_diagonal(&Vector3::new(1.0, -3.0, 0.0)), Vector3::zeros());
        assert!(c.is_self_reciprocal(1e-10));
        let shifted = Coupling::isotropic(1, 1, 1.0, Vector3::new(0.0, 1.0, 0.0));
        assert!(!shifted.is_self_reciprocal(1e-10));
    }

    #[test]
    fn test_non_finite_coupling_detected() {
        let c = Coupling::isotropic(0, 1, f64::NAN, Vector3::zeros());
        assert!(!c.is_finite());
        let d = Coupling::isotropic(0, 1, 1.0, Vector3::new(f64::INFINITY, 0.0, 0.0));
        assert!(!d.is_finite());
    }

    #[test]
    fn test_zeeman_shift_antiparallel_moment() {
        let field = MagneticField::isotropic(Vector3::new(0.0, 0.0, 2.0), 2.0, 1);
        let down = LocalFrame::from_direction(&Vector3::new(0.0, 0.0, -1.0)).unwrap();
        assert_relative_eq!(field.zeeman_shift(0, &down), 2.0 * MU_B * 2.0, epsilon = TOL);
        let up = LocalFrame::from_direction(&Vector3::new(0.0, 0.0, 1.0)).unwrap();
        assert_relative_eq!(field.zeeman_shift(0, &up), -2.0 * MU_B * 2.0, epsilon = TOL);
        let perpendicular = LocalFrame::from_direction(&Vector3::new(1.0, 0.0, 0.0)).unwrap();
        assert_relative_eq!(field.zeeman_shift(0, &perpendicular), 0.0, epsilon = TOL);
    }

    #[test]
    fn test_field_validation() {
        let field = MagneticField::isotropic(Vector3::new(0.0, 0.0, 1.0), 2.0, 2);
        assert!(field.validate(2).is_ok());
        assert_eq!(
            field.validate(3),
            Err(SpinwaveError::InputShape {
                what: "g_tensors",
                expected: 3,
                found: 2
            })
        );
        let bad = MagneticField::isotropic(Vector3::new(f64::NAN, 0.0, 1.0), 2.0, 2);
        assert!(matches!(bad.validate(2), Err(SpinwaveError::NonFinite { what: "field", .. })));
    }
}
