//! Lazy Cartesian product over a fixed list of axes.

use std::iter::FusedIterator;

/// Yields every combination of one element per axis exactly once.
///
/// The cursor works like an odometer: the last axis turns fastest, the first axis
/// slowest, so output is in lexicographic order of the axes' own orderings.
/// Any empty axis (or no axes at all) makes the product empty.
#[derive(Debug, Clone)]
pub struct CartesianProduct<T> {
    axes: Vec<Vec<T>>,
    cursor: Vec<usize>,
    remaining: usize,
}

impl<T: Clone> CartesianProduct<T> {
    pub fn new(axes: Vec<Vec<T>>) -> Self {
        let remaining = if axes.is_empty() {
            0
        } else {
            axes.iter().map(Vec::len).product()
        };

        CartesianProduct {
            cursor: vec![0; axes.len()],
            axes,
            remaining,
        }
    }

    /// Elements of one axis in the order they are combined
    pub fn axis(&self, index: usize) -> Option<&[T]> {
        self.axes.get(index).map(Vec::as_slice)
    }

    fn advance(&mut self) {
        for (index, axis) in self.cursor.iter_mut().zip(&self.axes).rev() {
            *index += 1;
            if *index < axis.len() {
                return;
            }
            *index = 0;
        }
    }
}

impl<T: Clone> Iterator for CartesianProduct<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let item = self
            .cursor
            .iter()
            .zip(&self.axes)
            .map(|(&index, axis)| axis[index].clone())
            .collect();

        self.remaining -= 1;
        self.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Clone> ExactSizeIterator for CartesianProduct<T> {}

impl<T: Clone> FusedIterator for CartesianProduct<T> {}
