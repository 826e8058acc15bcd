use nalgebra::DMatrix;
use num_complex::Complex64;

use crate::errors::SingularHamiltonian;

/// Lower triangular `L` with `H = L L^dagger`.
///
/// Only the lower triangle of `h` is read. A pivot that does not exceed
/// `tol * max|H_ii|` means `H` is not numerically positive definite.
pub fn cholesky_lower(h: &DMatrix<Complex64>, tol: f64) -> Result<DMatrix<Complex64>, SingularHamiltonian> {
    let n = h.nrows();
    let scale = (0..n).map(|i| h[(i, i)].norm()).fold(0.0, f64::max);
    let floor = tol * scale;
    let mut l = DMatrix::<Complex64>::zeros(n, n);

    for j in 0..n {
        let mut pivot = h[(j, j)].re;
        for k in 0..j {
            pivot -= l[(j, k)].norm_sqr();
        }
        // Negated comparison so NaN pivots fail as well
        if !(pivot > floor) {
            return Err(SingularHamiltonian { column: j, pivot });
        }
        let ljj = pivot.sqrt();
        l[(j, j)] = Complex64::new(ljj, 0.0);

        for i in j + 1..n {
            let mut s = h[(i, j)];
            for k in 0..j {
                s -= l[(i, k)] * l[(j, k)].conj();
            }
            l[(i, j)] = s / ljj;
        }
    }
    Ok(l)
}
