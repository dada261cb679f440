#![allow(non_snake_case)]

use super::PermutationError;
use crate::algebra::{FloatT, Matrix, ShapedMatrix};
use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Row permutation produced by a pivoted LU factorization.
///
/// Entry `P[i]` is the index of the original row that occupies
/// row `i` after pivoting, so that `(P*A)[i,:] = A[P[i],:]`.  A
/// `Permutation` is always a bijection on `0..n`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Permutation {
    perm: Vec<usize>,
}

impl Permutation {
    pub fn identity(n: usize) -> Self {
        Self {
            perm: (0..n).collect(),
        }
    }

    /// Builds a permutation from a sequence of row transpositions, where
    /// row `k` was exchanged with row `ipiv[k]` at step `k`.
    ///
    /// # Panics
    /// Panics if any `ipiv[k]` lies outside `k..n`.
    pub fn from_transpositions(ipiv: &[usize]) -> Self {
        let n = ipiv.len();
        let mut P = Self::identity(n);
        for (k, &p) in ipiv.iter().enumerate() {
            assert!(k <= p && p < n, "invalid transposition ({k}, {p})");
            P.perm.swap(k, p);
        }
        P
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.perm
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.perm
    }

    pub fn is_identity(&self) -> bool {
        self.perm.iter().enumerate().all(|(i, &p)| i == p)
    }

    /// The inverse permutation, i.e. `Q` with `Q[P[i]] = i`
    pub fn inverse(&self) -> Self {
        Self {
            perm: _invperm_unchecked(&self.perm),
        }
    }

    /// Computes `P*A`, the rows of `A` in permuted order.
    ///
    /// # Panics
    /// Panics if the number of rows of `A` differs from the permutation length.
    pub fn permute_rows<T: FloatT>(&self, A: &Matrix<T>) -> Matrix<T> {
        assert_eq!(A.nrows(), self.len());
        let mut B = Matrix::zeros(A.size());
        for (i, &p) in self.perm.iter().enumerate() {
            B.row_slice_mut(i).copy_from_slice(A.row_slice(p));
        }
        B
    }

    /// Computes `P^T*B`, undoing [`permute_rows`](Permutation::permute_rows).
    ///
    /// # Panics
    /// Panics if the number of rows of `B` differs from the permutation length.
    pub fn ipermute_rows<T: FloatT>(&self, B: &Matrix<T>) -> Matrix<T> {
        assert_eq!(B.nrows(), self.len());
        let mut A = Matrix::zeros(B.size());
        for (i, &p) in self.perm.iter().enumerate() {
            A.row_slice_mut(p).copy_from_slice(B.row_slice(i));
        }
        A
    }

    /// Minimum number of row transpositions that compose to this
    /// permutation, i.e. `n` minus the number of cycles.
    pub fn swap_count(&self) -> usize {
        let n = self.len();
        let mut visited = vec![false; n];
        let mut cycles = 0;
        for start in 0..n {
            if visited[start] {
                continue;
            }
            cycles += 1;
            let mut i = start;
            while !visited[i] {
                visited[i] = true;
                i = self.perm[i];
            }
        }
        n - cycles
    }

    /// Explicit permutation matrix with a single one in each row.
    pub fn to_matrix<T: FloatT>(&self) -> Matrix<T> {
        let n = self.len();
        let mut P = Matrix::zeros((n, n));
        for (i, &p) in self.perm.iter().enumerate() {
            P[(i, p)] = T::one();
        }
        P
    }
}

impl Deref for Permutation {
    type Target = [usize];
    fn deref(&self) -> &[usize] {
        &self.perm
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = PermutationError;

    fn try_from(perm: Vec<usize>) -> Result<Self, Self::Error> {
        _check_perm(&perm)?;
        Ok(Self { perm })
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(P: Permutation) -> Self {
        P.perm
    }
}

impl std::fmt::Display for Permutation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self.perm)
    }
}

// checks that perm is a bijection on 0..n
pub(crate) fn _check_perm(perm: &[usize]) -> Result<(), PermutationError> {
    let n = perm.len();
    let mut seen = vec![false; n];
    for &p in perm {
        if p >= n || seen[p] {
            return Err(PermutationError::InvalidPermutation);
        }
        seen[p] = true;
    }
    Ok(())
}

fn _invperm_unchecked(perm: &[usize]) -> Vec<usize> {
    let mut iperm = vec![0; perm.len()];
    for (i, &p) in perm.iter().enumerate() {
        iperm[p] = i;
    }
    iperm
}
