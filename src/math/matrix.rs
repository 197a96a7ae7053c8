use rand::Rng;
use serde::ser::{Serialize, Serializer};

/// Fixed-size, stack-resident row-major matrix.
///
/// Shape is part of the type, so a `Matrix<R, C>` can never be resized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<const R: usize, const C: usize> {
    pub data: [[f64; C]; R],
}

impl<const R: usize, const C: usize> Matrix<R, C> {
    pub fn zeros() -> Matrix<R, C> {
        Matrix { data: [[0.0; C]; R] }
    }

    pub fn from_data(data: [[f64; C]; R]) -> Matrix<R, C> {
        Matrix { data }
    }

    /// Redraws every entry independently from U[0, 1).
    pub fn fill_random<G: Rng + ?Sized>(&mut self, rng: &mut G) {
        for row in self.data.iter_mut() {
            for x in row.iter_mut() {
                *x = rng.gen::<f64>();
            }
        }
    }

    pub const fn rows(&self) -> usize {
        R
    }

    pub const fn cols(&self) -> usize {
        C
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64; C]> {
        self.data.iter()
    }
}

impl<const R: usize, const C: usize> Default for Matrix<R, C> {
    fn default() -> Self {
        Matrix::zeros()
    }
}

// serde only derives arrays up to a fixed length, so rows go out as slices.
impl<const R: usize, const C: usize> Serialize for Matrix<R, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.data.iter().map(|row| &row[..]))
    }
}

/// Fills a vector with independent U[0, 1) draws.
pub fn fill_random<G: Rng + ?Sized, const N: usize>(v: &mut [f64; N], rng: &mut G) {
    for x in v.iter_mut() {
        *x = rng.gen::<f64>();
    }
}
