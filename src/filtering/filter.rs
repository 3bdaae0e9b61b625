//! Filtering trait.

/// Pure token detector: two successive equal inputs give two equal outputs.
pub trait Filter<T>: Default {
    fn detect(&self, item: T) -> bool;
}

/// An optional filter. A disabled (`None`) filter detects nothing.
impl<T, F: Filter<T>> Filter<T> for Option<F> {
    fn detect(&self, item: T) -> bool {
        self.as_ref().map_or(false, |filter| filter.detect(item))
    }
}
