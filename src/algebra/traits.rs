/// Vector operations on slices of [`FloatT`](crate::algebra::FloatT)

pub trait VectorMath<T> {
    /// Set all elements to the same value.
    fn set(&mut self, c: T) -> &mut Self;

    /// Largest absolute value of any element (∞-norm).
    fn norm_inf(&self) -> T;

    /// Euclidean distance between self and `y`.
    fn dist(&self, y: &[T]) -> T;

    /// Index of the first element of largest absolute value.
    /// Returns `None` for an empty slice.
    fn iamax(&self) -> Option<usize>;

    /// true if every element is neither NaN nor infinite
    fn is_finite(&self) -> bool;
}

/// Matrix-wide norms and comparisons
pub trait MatrixMath {
    type T;

    /// Frobenius norm of the difference between self and `B`.
    #[allow(non_snake_case)]
    fn norm_fro_diff(&self, B: &Self) -> Self::T;

    /// Largest absolute value of any entry.
    fn norm_max(&self) -> Self::T;
}
