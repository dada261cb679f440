#![allow(non_snake_case)]

use std::ops::Index;

/// Matrix dimension queries
pub trait ShapedMatrix {
    /// number of rows
    fn nrows(&self) -> usize;
    /// number of columns
    fn ncols(&self) -> usize;
    /// (rows, columns)
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    /// true if the matrix has the same number of rows and columns
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}

//NB: the concrete dense type is just called "Matrix".  The "DenseMatrix" trait
//gives read access to the raw row-major data of anything that can be indexed
//like a Matrix, so that native kernels can be written against the trait.
pub trait DenseMatrix: ShapedMatrix + Index<(usize, usize)> {
    type T;
    /// position of entry (row, col) within `data()`
    fn index_linear(&self, idx: (usize, usize)) -> usize;
    /// raw data
    fn data(&self) -> &[Self::T];
}

/// General matrix-matrix multiply, i.e. `self = αA*B + βself`
pub trait MultiplyGEMM {
    type T;
    fn mul<MATA, MATB>(&mut self, A: &MATA, B: &MATB, α: Self::T, β: Self::T) -> &Self
    where
        MATA: DenseMatrix<T = Self::T>,
        MATB: DenseMatrix<T = Self::T>;
}
