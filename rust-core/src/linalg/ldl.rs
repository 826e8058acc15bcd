use nalgebra::{DMatrix, Matrix2};
use num_complex::Complex64;

use crate::errors::DecompositionError;

// Bunch-Kaufman growth bound
const ALPHA: f64 = 0.6403882032022076; // (1 + sqrt(17)) / 8

/// One diagonal block of `D`, starting at row `index` of the permuted matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum PivotBlock {
    One { index: usize, value: f64 },
    Two { index: usize, block: Matrix2<Complex64> },
}

impl PivotBlock {
    pub fn index(&self) -> usize {
        match self {
            PivotBlock::One { index, .. } | PivotBlock::Two { index, .. } => *index,
        }
    }

    pub fn size(&self) -> usize {
        match self {
            PivotBlock::One { .. } => 1,
            PivotBlock::Two { .. } => 2,
        }
    }
}

/// Symmetric-indefinite factorization `P^T H P = L D L^dagger`.
#[derive(Debug, Clone)]
pub struct LdlFactorization {
    /// Unit lower triangular factor in pivoted order.
    pub l: DMatrix<Complex64>,
    pub blocks: Vec<PivotBlock>,
    /// `perm[k]` is the original row that ended up at position `k`.
    pub perm: Vec<usize>,
    /// Largest entry modulus of the input, the reference for pivot tolerances.
    pub scale: f64,
}

impl LdlFactorization {
    /// `P L`, so that `H = (P L) D (P L)^dagger`.
    pub fn permuted_l(&self) -> DMatrix<Complex64> {
        let n = self.l.nrows();
        let mut pl = DMatrix::<Complex64>::zeros(n, n);
        for (k, &row) in self.perm.iter().enumerate() {
            pl.row_mut(row).copy_from(&self.l.row(k));
        }
        pl
    }

    /// Block diagonal `D` assembled from the pivot blocks.
    pub fn d_matrix(&self) -> DMatrix<Complex64> {
        let n = self.l.nrows();
        let mut d = DMatrix::<Complex64>::zeros(n, n);
        for block in &self.blocks {
            let k = block.index();
            match block {
                PivotBlock::One { value, .. } => d[(k, k)] = Complex64::new(*value, 0.0),
                PivotBlock::Two { block, .. } => d.view_mut((k, k), (2, 2)).copy_from(block),
            }
        }
        d
    }
}

fn symmetric_swap(w: &mut DMatrix<Complex64>, l: &mut DMatrix<Complex64>, perm: &mut [usize], k: usize, p: usize, q: usize) {
    if p == q {
        return;
    }
    w.swap_rows(p, q);
    w.swap_columns(p, q);
    for c in 0..k {
        l.swap((p, c), (q, c));
    }
    perm.swap(p, q);
}

/// Bunch-Kaufman LDL^dagger of a Hermitian matrix with 1x1 and 2x2 pivots.
///
/// Columns whose entries all fall below `tol * max|H_ij|` become exact zero
/// pivots, which keeps positive semi-definite matrices with Goldstone modes
/// factorizable.
pub fn ldl_bunch_kaufman(h: &DMatrix<Complex64>, tol: f64) -> Result<LdlFactorization, DecompositionError> {
    let (rows, cols) = h.shape();
    if rows != cols {
        return Err(DecompositionError::NotSquare { rows, cols });
    }
    if h.iter().any(|c| !c.re.is_finite() || !c.im.is_finite()) {
        return Err(DecompositionError::NonFinite);
    }

    let n = rows;
    let scale = h.iter().map(|c| c.norm()).fold(0.0, f64::max);
    let zero = tol * scale;

    let mut w = h.clone();
    let mut l = DMatrix::<Complex64>::zeros(n, n);
    let mut perm: Vec<usize> = (0..n).collect();
    let mut blocks = Vec::new();

    let mut k = 0;
    while k < n {
        let absakk = w[(k, k)].re.abs();
        let (r, colmax) = (k + 1..n)
            .map(|i| (i, w[(i, k)].norm()))
            .fold((k, 0.0), |best, cand| if cand.1 > best.1 { cand } else { best });

        if absakk.max(colmax) <= zero {
            l[(k, k)] = Complex64::new(1.0, 0.0);
            blocks.push(PivotBlock::One {
                index: k,
                value: w[(k, k)].re,
            });
            k += 1;
            continue;
        }

        let two_by_two = if absakk >= ALPHA * colmax {
            false
        } else {
            let rowmax = (k..n)
                .filter(|&j| j != r)
                .map(|j| w[(r, j)].norm())
                .fold(0.0, f64::max);
            if absakk * rowmax >= ALPHA * colmax * colmax {
                false
            } else if w[(r, r)].re.abs() >= ALPHA * rowmax {
                symmetric_swap(&mut w, &mut l, &mut perm, k, k, r);
                false
            } else {
                symmetric_swap(&mut w, &mut l, &mut perm, k, k + 1, r);
                true
            }
        };

        if !two_by_two {
            let d = w[(k, k)].re;
            l[(k, k)] = Complex64::new(1.0, 0.0);
            for i in k + 1..n {
                l[(i, k)] = w[(i, k)] / d;
            }
            for j in k + 1..n {
                let ljk = l[(j, k)].conj();
                for i in k + 1..n {
                    let wik = w[(i, k)];
                    w[(i, j)] -= wik * ljk;
                }
            }
            blocks.push(PivotBlock::One { index: k, value: d });
            k += 1;
        } else {
            let e = Matrix2::new(
                Complex64::new(w[(k, k)].re, 0.0),
                w[(k, k + 1)],
                w[(k + 1, k)],
                Complex64::new(w[(k + 1, k + 1)].re, 0.0),
            );
            let e_inv = e
                .try_inverse()
                .ok_or(DecompositionError::SingularPivotBlock { index: k })?;

            l[(k, k)] = Complex64::new(1.0, 0.0);
            l[(k + 1, k + 1)] = Complex64::new(1.0, 0.0);
            for i in k + 2..n {
                let (w0, w1) = (w[(i, k)], w[(i, k + 1)]);
                l[(i, k)] = w0 * e_inv[(0, 0)] + w1 * e_inv[(1, 0)];
                l[(i, k + 1)] = w0 * e_inv[(0, 1)] + w1 * e_inv[(1, 1)];
            }
            for j in k + 2..n {
                let (lj0, lj1) = (l[(j, k)].conj(), l[(j, k + 1)].conj());
                for i in k + 2..n {
                    let (w0, w1) = (w[(i, k)], w[(i, k + 1)]);
                    w[(i, j)] -= w0 * lj0 + w1 * lj1;
                }
            }
            blocks.push(PivotBlock::Two { index: k, block: e });
            k += 2;
        }
    }

    Ok(LdlFactorization { l, blocks, perm, scale })
}
