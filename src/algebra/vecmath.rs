use super::{FloatT, VectorMath};
use itertools::izip;

impl<T: FloatT> VectorMath<T> for [T] {
    fn set(&mut self, c: T) -> &mut Self {
        self.fill(c);
        self
    }

    fn norm_inf(&self) -> T {
        self.iter().fold(T::zero(), |acc, &x| T::max(acc, x.abs()))
    }

    fn dist(&self, y: &[T]) -> T {
        let dist2 = izip!(self, y).fold(T::zero(), |acc, (&x, &y)| acc + T::powi(x - y, 2));
        T::sqrt(dist2)
    }

    fn iamax(&self) -> Option<usize> {
        // strict comparison keeps the first of any tied entries
        let mut best: Option<(usize, T)> = None;
        for (i, &x) in self.iter().enumerate() {
            let ax = x.abs();
            match best {
                Some((_, b)) if ax <= b => {}
                _ => best = Some((i, ax)),
            }
        }
        best.map(|(i, _)| i)
    }

    fn is_finite(&self) -> bool {
        self.iter().all(|x| x.is_finite())
    }
}

#[test]
fn test_norms() {
    let x = [1.0, -4.0, 3.0];
    let y = [1.0, -1.0, -1.0];
    assert_eq!(x.norm_inf(), 4.0);
    assert_eq!(x.dist(&y), 5.0);
    assert_eq!([0.0; 3].norm_inf(), 0.0);
}

#[test]
fn test_iamax() {
    assert_eq!([2.0, -4.0, 3.0].iamax(), Some(1));
    // ties resolve to the first occurrence
    assert_eq!([1.0, -3.0, 3.0, -3.0].iamax(), Some(1));
    assert_eq!([0.0, 0.0].iamax(), Some(0));
    assert_eq!(Vec::<f64>::new().iamax(), None);
}

#[test]
fn test_is_finite() {
    assert!([1.0, 2.0].is_finite());
    assert!(![1.0, f64::NAN].is_finite());
    assert!(![f64::NEG_INFINITY].is_finite());
}
