use nalgebra::{DMatrix, Matrix2};
use num_complex::Complex64;

use super::ldl::PivotBlock;
use crate::errors::DecompositionError;
use crate::interfaces::IndefiniteBlockPolicy;

/// Block diagonal `S` with `S S = D`.
#[derive(Debug, Clone)]
pub struct BlockSquareRoot {
    pub s: DMatrix<Complex64>,
    /// True when every block was positive semi-definite, so `S = S^dagger`.
    pub hermitian: bool,
}

/// Eigenvalues `(lower, upper)` of a Hermitian 2x2 block.
pub fn hermitian_block_eigenvalues(e: &Matrix2<Complex64>) -> (f64, f64) {
    let (a, d) = (e[(0, 0)].re, e[(1, 1)].re);
    let half_trace = 0.5 * (a + d);
    let radius = (0.25 * (a - d) * (a - d) + e[(0, 1)].norm_sqr()).sqrt();
    (half_trace - radius, half_trace + radius)
}

/// Principal square root of a 2x2 matrix, `(E + s I) / t` with `s = sqrt(det E)`
/// and `t = sqrt(tr E + 2 s)`. Returns `None` when `t` vanishes.
pub fn principal_sqrt_2x2(e: &Matrix2<Complex64>) -> Option<Matrix2<Complex64>> {
    let s = e.determinant().sqrt();
    let t = (e.trace() + s * 2.0).sqrt();
    if t.norm() == 0.0 || !t.re.is_finite() || !t.im.is_finite() {
        return None;
    }
    Some((e + Matrix2::identity() * s) / t)
}

// Hermitian square root of a positive semi-definite block, with round-off below zero clamped
fn psd_sqrt_2x2(e: &Matrix2<Complex64>) -> Matrix2<Complex64> {
    let det = e.determinant().re.max(0.0);
    let s = det.sqrt();
    let t2 = e[(0, 0)].re + e[(1, 1)].re + 2.0 * s;
    if t2 <= 0.0 {
        return Matrix2::zeros();
    }
    let mut root = (e + Matrix2::identity() * Complex64::new(s, 0.0)) / Complex64::new(t2.sqrt(), 0.0);
    // Exact Hermitian symmetry
    root[(1, 0)] = root[(0, 1)].conj();
    root[(0, 0)].im = 0.0;
    root[(1, 1)].im = 0.0;
    root
}

/// Square root of every pivot block of `D`.
///
/// Pivots within `tol * scale` of zero count as zero. Anything genuinely negative
/// or indefinite is rejected under [`IndefiniteBlockPolicy::Reject`] and receives
/// a complex principal root under [`IndefiniteBlockPolicy::Permit`].
pub fn block_square_root(
    blocks: &[PivotBlock],
    dim: usize,
    scale: f64,
    tol: f64,
    policy: IndefiniteBlockPolicy,
) -> Result<BlockSquareRoot, DecompositionError> {
    let floor = tol * scale;
    let mut s = DMatrix::<Complex64>::zeros(dim, dim);
    let mut hermitian = true;

    for block in blocks {
        match block {
            PivotBlock::One { index, value } => {
                let root = if *value >= -floor {
                    Complex64::new(value.max(0.0).sqrt(), 0.0)
                } else {
                    match policy {
                        IndefiniteBlockPolicy::Reject => {
                            return Err(DecompositionError::NegativePivot {
                                index: *index,
                                value: *value,
                            })
                        }
                        IndefiniteBlockPolicy::Permit => {
                            hermitian = false;
                            Complex64::new(0.0, (-value).sqrt())
                        }
                    }
                };
                s[(*index, *index)] = root;
            }
            PivotBlock::Two { index, block } => {
                let (lower, upper) = hermitian_block_eigenvalues(block);
                let root = if lower >= -floor {
                    psd_sqrt_2x2(block)
                } else {
                    match policy {
                        IndefiniteBlockPolicy::Reject => {
                            return Err(DecompositionError::IndefiniteBlock {
                                index: *index,
                                lower,
                                upper,
                            })
                        }
                        IndefiniteBlockPolicy::Permit => {
                            hermitian = false;
                            principal_sqrt_2x2(block)
                                .ok_or(DecompositionError::NoBlockSquareRoot { index: *index })?
                        }
                    }
                };
                s.view_mut((*index, *index), (2, 2)).copy_from(&root);
            }
        }
    }

    Ok(BlockSquareRoot { s, hermitian })
}
