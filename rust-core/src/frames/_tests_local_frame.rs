#[cfg(test)]
mod _tests_local_frame {
    use super::super::local_frame::{orthonormality_deviation, resolve_frames, LocalFrame};
    use crate::errors::{FrameError, SpinwaveError};
    use approx::assert_relative_eq;
    use nalgebra::{Matrix3, Vector3};
    use num_complex::Complex64;

    const TOL: f64 = 1e-12;

    fn check_frame(frame: &LocalFrame) {
        assert!(orthonormality_deviation(frame.rotation()) < TOL);
        // Right-handed
        assert_relative_eq!(frame.rotation().determinant(), 1.0, epsilon = TOL);
        // z . z = 0 and z . z* = 2
        let zz: Complex64 = frame.z().dot(frame.z());
        assert!(zz.norm() < TOL);
        let zzc: Complex64 = frame.z().dotc(frame.z());
        assert_relative_eq!(zzc.re, 2.0, epsilon = TOL);
        assert_relative_eq!(frame.eta().norm(), 1.0, epsilon = TOL);
    }

    #[test]
    fn test_moment_along_z_is_identity() {
        let frame = LocalFrame::from_direction(&Vector3::new(0.0, 0.0, 2.5)).unwrap();
        assert_relative_eq!(*frame.rotation(), Matrix3::identity(), epsilon = TOL);
        assert_relative_eq!(frame.z()[0].re, 1.0, epsilon = TOL);
        assert_relative_eq!(frame.z()[1].im, 1.0, epsilon = TOL);
    }

    #[test]
    fn test_eta_follows_direction() {
        let directions = [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(0.3, -0.2, 0.95),
            Vector3::new(-0.5, 0.8660254037844386, 0.0),
        ];
        for d in directions.iter() {
            let frame = LocalFrame::from_direction(d).unwrap();
            check_frame(&frame);
            let expected = d.normalize();
            assert_relative_eq!(*frame.eta(), expected, epsilon = TOL);
        }
    }

    #[test]
    fn test_zero_direction_defaults_to_z() {
        let frame = LocalFrame::from_direction(&Vector3::zeros()).unwrap();
        assert_relative_eq!(*frame.rotation(), Matrix3::identity(), epsilon = TOL);
    }

    #[test]
    fn test_non_finite_direction_rejected() {
        let result = LocalFrame::from_direction(&Vector3::new(f64::NAN, 0.0, 1.0));
        assert_eq!(result.unwrap_err(), FrameError::NonFinite);
    }

    #[test]
    fn test_complex_direction_uses_real_part() {
        let d = Vector3::new(
            Complex64::new(1.0, 5.0),
            Complex64::new(0.0, -3.0),
            Complex64::new(0.0, 0.0),
        );
        let frame = LocalFrame::from_complex_direction(&d).unwrap();
        assert_relative_eq!(*frame.eta(), Vector3::x(), epsilon = TOL);
    }

    #[test]
    fn test_from_rotation_accepts_orthonormal() {
        let r = Matrix3::from_diagonal(&Vector3::new(-1.0, 1.0, -1.0));
        let frame = LocalFrame::from_rotation(r).unwrap();
        assert_relative_eq!(*frame.eta(), Vector3::new(0.0, 0.0, -1.0), epsilon = TOL);
        assert_relative_eq!(frame.z()[0].re, -1.0, epsilon = TOL);
    }

    #[test]
    fn test_from_rotation_rejects_sheared_matrix() {
        let mut r = Matrix3::identity();
        r[(0, 1)] = 0.1;
        match LocalFrame::from_rotation(r) {
            Err(FrameError::NotOrthonormal { deviation }) => assert!(deviation > 0.05),
            other => panic!("expected NotOrthonormal, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_frames_tags_site() {
        let directions = vec![
            Vector3::new(Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)),
            Vector3::new(Complex64::new(f64::INFINITY, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)),
        ];
        match resolve_frames(&directions) {
            Err(SpinwaveError::InvalidFrame { site, source }) => {
                assert_eq!(site, 1);
                assert_eq!(source, FrameError::NonFinite);
            }
            other => panic!("expected InvalidFrame, got {:?}", other),
        }
    }
}
