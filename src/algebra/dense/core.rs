#![allow(non_snake_case)]

use crate::algebra::{
    DenseMatrix, FloatT, InvalidMatrixError, Matrix, MatrixTriangle, ShapedMatrix, VectorMath,
};
use std::ops::{Index, IndexMut};

impl<T> DenseMatrix for Matrix<T>
where
    T: FloatT,
{
    type T = T;
    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 * self.n + idx.1
    }
    fn data(&self) -> &[T] {
        &self.data
    }
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self { m, n, data }
    }

    pub fn identity(n: usize) -> Self {
        let mut mat = Matrix::zeros((n, n));
        mat.set_identity();
        mat
    }

    pub fn set_identity(&mut self) {
        assert!(self.m == self.n);
        self.data_mut().set(T::zero());
        for i in 0..self.n {
            self[(i, i)] = T::one();
        }
    }

    /// Create a matrix from row-major data.
    ///
    /// # Panics
    /// Panics if `src` does not have `m*n` elements
    pub fn new_from_slice(size: (usize, usize), src: &[T]) -> Self {
        let (m, n) = size;
        assert!(m * n == src.len());
        Self {
            m,
            n,
            data: src.to_vec(),
        }
    }

    /// Create a matrix from row-major data, checking dimensions.
    pub fn try_new(size: (usize, usize), data: Vec<T>) -> Result<Self, InvalidMatrixError> {
        let (m, n) = size;
        let A = Self { m, n, data };
        A.check_format()?;
        Ok(A)
    }

    /// Checks that the data length agrees with the dimension fields.
    /// Matrices assembled field by field or deserialized are not
    /// otherwise validated.
    pub fn check_format(&self) -> Result<(), InvalidMatrixError> {
        if self.m.checked_mul(self.n) != Some(self.data.len()) {
            return Err(InvalidMatrixError::IncompatibleDimension);
        }
        Ok(())
    }

    pub fn copy_from_slice(&mut self, src: &[T]) -> &mut Self {
        self.data.copy_from_slice(src);
        self
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        assert!(row < self.m);
        &self.data[(row * self.n)..(row + 1) * self.n]
    }

    pub fn row_slice_mut(&mut self, row: usize) -> &mut [T] {
        assert!(row < self.m);
        &mut self.data[(row * self.n)..(row + 1) * self.n]
    }

    /// Copies column `col` into `v`
    pub fn col_copy(&self, col: usize, v: &mut [T]) {
        assert!(col < self.n && v.len() == self.m);
        for (i, vi) in v.iter_mut().enumerate() {
            *vi = self[(i, col)];
        }
    }

    /// Exchange two rows in place
    pub fn swap_rows(&mut self, r1: usize, r2: usize) {
        assert!(r1 < self.m && r2 < self.m);
        if r1 == r2 {
            return;
        }
        let (lo, hi) = (usize::min(r1, r2), usize::max(r1, r2));
        let n = self.n;
        let (head, tail) = self.data.split_at_mut(hi * n);
        head[(lo * n)..(lo + 1) * n].swap_with_slice(&mut tail[..n]);
    }

    /// Split into two row slices `(row i, row k)` with `k < i`,
    /// where the first is mutable.  Used by elimination kernels
    /// to update one row using an earlier one.
    pub(crate) fn row_pair_mut(&mut self, i: usize, k: usize) -> (&mut [T], &[T]) {
        assert!(k < i && i < self.m);
        let n = self.n;
        let (head, tail) = self.data.split_at_mut(i * n);
        (&mut tail[..n], &head[(k * n)..(k + 1) * n])
    }

    pub fn transpose(&self) -> Self {
        let mut At = Matrix::zeros((self.n, self.m));
        for i in 0..self.m {
            for j in 0..self.n {
                At[(j, i)] = self[(i, j)];
            }
        }
        At
    }

    pub fn is_triu(&self) -> bool {
        self.is_triangular(MatrixTriangle::Triu)
    }

    pub fn is_tril(&self) -> bool {
        self.is_triangular(MatrixTriangle::Tril)
    }

    /// true if every entry outside of the given triangle
    /// (diagonal included) is exactly zero.
    pub fn is_triangular(&self, uplo: MatrixTriangle) -> bool {
        for r in 0..self.nrows() {
            for c in 0..self.ncols() {
                let outside = match uplo {
                    MatrixTriangle::Triu => r > c,
                    MatrixTriangle::Tril => c > r,
                };
                if outside && self[(r, c)] != T::zero() {
                    return false;
                }
            }
        }
        true
    }

    /// true if lower triangular with every diagonal entry exactly one
    pub fn is_unit_tril(&self) -> bool {
        self.is_square() && self.is_tril() && (0..self.n).all(|i| self[(i, i)] == T::one())
    }

    /// Returns the first entry that is NaN or infinite, if any.
    pub fn find_nonfinite(&self) -> Option<(usize, usize)> {
        if self.data.is_finite() {
            return None;
        }
        let lidx = self.data.iter().position(|x| !x.is_finite())?;
        Some((lidx / self.n, lidx % self.n))
    }

    /// diagonal entries as a vector
    pub fn diag(&self) -> Vec<T> {
        (0..usize::min(self.m, self.n))
            .map(|i| self[(i, i)])
            .collect()
    }
}

// construct from a fixed size array of rows, e.g.
// Matrix::from(&[[1., 2.], [3., 4.]])
impl<T, const M: usize, const N: usize> From<&[[T; N]; M]> for Matrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; N]; M]) -> Self {
        let data = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Self { m: M, n: N, data }
    }
}

// construct from a grid of rows with runtime dimensions
impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T>
where
    T: FloatT,
{
    type Error = InvalidMatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        let m = rows.len();
        let n = rows.first().map_or(0, |r| r.len());

        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(InvalidMatrixError::RaggedRows {
                row,
                len: r.len(),
                expected: n,
            });
        }
        let data = rows.into_iter().flatten().collect();
        Ok(Self { m, n, data })
    }
}

impl<T> From<&Matrix<T>> for Vec<Vec<T>>
where
    T: FloatT,
{
    fn from(A: &Matrix<T>) -> Self {
        (0..A.m).map(|i| A.row_slice(i).to_vec()).collect()
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

impl<T> Index<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.data()[self.index_linear(idx)]
    }
}

impl<T> ShapedMatrix for Matrix<T>
where
    T: FloatT,
{
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: FloatT,
{
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_matrix(self, f)
    }
}

fn display_matrix<M>(m: &M, f: &mut std::fmt::Formatter) -> std::fmt::Result
where
    M: DenseMatrix,
    M::Output: FloatT,
{
    for i in 0..m.nrows() {
        write!(f, "[")?;
        for j in 0..m.ncols() {
            write!(f, " {:>12.6}", m[(i, j)])?;
        }
        writeln!(f, " ]")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_indexing_matrix() -> Matrix<f64> {
        // Create a 3x3 matrix in row-major order:
        // [ 1.0  2.0  3.0 ]
        // [ 4.0  5.0  6.0 ]
        // [ 7.0  8.0  9.0 ]
        Matrix::from(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]])
    }

    #[test]
    fn test_matrix_indexing() {
        let matrix = create_indexing_matrix();

        assert_eq!(matrix[(0, 0)], 1.0);
        assert_eq!(matrix[(0, 2)], 3.0);
        assert_eq!(matrix[(1, 0)], 4.0);
        assert_eq!(matrix[(2, 1)], 8.0);

        // row-major linear indexing
        assert_eq!(matrix.index_linear((0, 1)), 1);
        assert_eq!(matrix.index_linear((1, 0)), 3);
        assert_eq!(matrix.index_linear((2, 2)), 8);
        assert_eq!(matrix.row_slice(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_swap_rows() {
        let mut A = create_indexing_matrix();
        A.swap_rows(2, 0);
        assert_eq!(A.row_slice(0), &[7.0, 8.0, 9.0]);
        assert_eq!(A.row_slice(1), &[4.0, 5.0, 6.0]);
        assert_eq!(A.row_slice(2), &[1.0, 2.0, 3.0]);

        // swapping a row with itself is a no-op
        let B = A.clone();
        A.swap_rows(1, 1);
        assert_eq!(A, B);
    }

    #[test]
    fn test_row_pair_mut() {
        let mut A = create_indexing_matrix();
        let (ri, rk) = A.row_pair_mut(2, 0);
        for (x, y) in ri.iter_mut().zip(rk) {
            *x -= *y;
        }
        assert_eq!(A.row_slice(2), &[6.0, 6.0, 6.0]);
    }

    #[test]
    fn test_try_from_rows() {
        let A = Matrix::try_from(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(A, Matrix::from(&[[1.0, 2.0], [3.0, 4.0]]));

        let rows: Vec<Vec<f64>> = (&A).into();
        assert_eq!(rows, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);

        let err = Matrix::try_from(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            InvalidMatrixError::RaggedRows {
                row: 1,
                len: 1,
                expected: 2
            }
        );

        let E = Matrix::<f64>::try_from(vec![]).unwrap();
        assert_eq!(E.size(), (0, 0));
    }

    #[test]
    fn test_try_new() {
        assert!(Matrix::try_new((2, 3), vec![0.0; 6]).is_ok());
        assert_eq!(
            Matrix::try_new((2, 3), vec![0.0; 5]),
            Err(InvalidMatrixError::IncompatibleDimension)
        );

        // dimension product overflows usize
        let A = Matrix::<f64> {
            m: usize::MAX,
            n: 2,
            data: vec![],
        };
        assert_eq!(
            A.check_format(),
            Err(InvalidMatrixError::IncompatibleDimension)
        );
        assert_eq!(
            Matrix::<f64>::try_new((usize::MAX, 2), vec![]),
            Err(InvalidMatrixError::IncompatibleDimension)
        );
    }

    #[test]
    fn test_triangles() {
        let I = Matrix::<f64>::identity(3);
        assert!(I.is_triu() && I.is_tril() && I.is_unit_tril());

        let U = Matrix::from(&[[1.0, 2.0], [0.0, 3.0]]);
        assert!(U.is_triu());
        assert!(!U.is_tril());
        assert!(U.transpose().is_tril());
        assert!(!U.transpose().is_unit_tril());
    }

    #[test]
    fn test_find_nonfinite() {
        let mut A = create_indexing_matrix();
        assert_eq!(A.find_nonfinite(), None);
        A[(1, 2)] = f64::NAN;
        A[(2, 0)] = f64::INFINITY;
        assert_eq!(A.find_nonfinite(), Some((1, 2)));
    }
}
