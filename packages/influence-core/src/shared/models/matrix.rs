//! Dense growable matrix
//!
//! Row-major arena of `f64` rows. Used both as the full weight matrix (grown
//! one node at a time while loading) and for every per-group working copy
//! (submatrices, `I - A`, the augmented elimination matrix).
//!
//! Growth does not re-validate the whole matrix; shape checks happen once
//! after load and at each binary operation.

use std::ops::{Index, IndexMut};

use crate::errors::{InfluenceError, Result};

/// Dense `rows × cols` matrix of `f64`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix {
    data: Vec<Vec<f64>>,
    cols: usize,
}

impl Matrix {
    /// Zero matrix of the given shape
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![vec![0.0; cols]; rows],
            cols,
        }
    }

    /// `n × n` identity
    pub fn identity(n: usize) -> Self {
        let mut m = Self::new(n, n);
        for i in 0..n {
            m.data[i][i] = 1.0;
        }
        m
    }

    /// Build from explicit rows; all rows must have the same length
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(InfluenceError::dimension(format!(
                "row {} has {} columns, expected {}",
                i,
                row.len(),
                cols
            )));
        }
        Ok(Self { data: rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.data.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row][col] = value;
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.iter().map(Vec::as_slice)
    }

    /// Append a zero row
    pub fn add_row(&mut self) {
        self.data.push(vec![0.0; self.cols]);
    }

    /// Append a zero column to every row
    pub fn add_column(&mut self) {
        for row in &mut self.data {
            row.push(0.0);
        }
        self.cols += 1;
    }

    /// One more row and one more column, both zero.
    ///
    /// On an empty matrix this yields the 1×1 zero matrix, so a square matrix
    /// stays square across any number of calls.
    pub fn grow(&mut self) {
        self.add_column();
        self.add_row();
    }

    /// Copy of the cells at `rows × cols`; no aliasing back into `self`
    pub fn submatrix(&self, rows: &[usize], cols: &[usize]) -> Matrix {
        let data = rows
            .iter()
            .map(|&r| cols.iter().map(|&c| self.data[r][c]).collect())
            .collect();
        Matrix {
            data,
            cols: cols.len(),
        }
    }

    /// True when every cell is within `epsilon` of zero
    pub fn is_zero(&self, epsilon: f64) -> bool {
        self.data.iter().flatten().all(|v| v.abs() <= epsilon)
    }

    /// Elementwise `self - other`
    pub fn sub(&self, other: &Matrix) -> Result<Matrix> {
        self.check_same_shape(other, "subtract")?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a.iter().zip(b).map(|(x, y)| x - y).collect())
            .collect();
        Ok(Matrix {
            data,
            cols: self.cols,
        })
    }

    /// Matrix product `self · other`
    pub fn mul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows() {
            return Err(InfluenceError::dimension(format!(
                "cannot multiply {}x{} by {}x{}",
                self.rows(),
                self.cols,
                other.rows(),
                other.cols
            )));
        }
        let mut out = Matrix::new(self.rows(), other.cols);
        for (i, row) in self.data.iter().enumerate() {
            for (k, &a) in row.iter().enumerate() {
                if a == 0.0 {
                    continue;
                }
                for (j, &b) in other.data[k].iter().enumerate() {
                    out.data[i][j] += a * b;
                }
            }
        }
        Ok(out)
    }

    /// Concatenate `other` to the right of `self`
    pub fn append_columns(&mut self, other: &Matrix) -> Result<()> {
        if self.rows() != other.rows() {
            return Err(InfluenceError::dimension(format!(
                "cannot append {}x{} to the right of {}x{}",
                other.rows(),
                other.cols,
                self.rows(),
                self.cols
            )));
        }
        for (row, extra) in self.data.iter_mut().zip(&other.data) {
            row.extend_from_slice(extra);
        }
        self.cols += other.cols;
        Ok(())
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }

    /// Sum of column `col` over all rows
    pub fn column_sum(&self, col: usize) -> f64 {
        self.data.iter().map(|row| row[col]).sum()
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<f64>] {
        &mut self.data
    }

    pub(crate) fn into_rows(self) -> Vec<Vec<f64>> {
        self.data
    }

    fn check_same_shape(&self, other: &Matrix, op: &str) -> Result<()> {
        if self.rows() != other.rows() || self.cols != other.cols {
            return Err(InfluenceError::dimension(format!(
                "cannot {} {}x{} and {}x{}",
                op,
                self.rows(),
                self.cols,
                other.rows(),
                other.cols
            )));
        }
        Ok(())
    }
}

impl Index<usize> for Matrix {
    type Output = [f64];

    fn index(&self, row: usize) -> &[f64] {
        &self.data[row]
    }
}

impl IndexMut<usize> for Matrix {
    fn index_mut(&mut self, row: usize) -> &mut [f64] {
        &mut self.data[row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_grow_from_empty_stays_square() {
        let mut matrix = Matrix::default();
        assert!(matrix.is_empty());

        matrix.grow();
        assert_eq!((matrix.rows(), matrix.cols()), (1, 1));
        assert_eq!(matrix[0][0], 0.0);

        matrix.set(0, 0, 0.25);
        matrix.grow();
        matrix.grow();
        assert_eq!((matrix.rows(), matrix.cols()), (3, 3));
        assert!(matrix.is_square());
        assert_eq!(matrix[0][0], 0.25);
        assert_eq!(matrix[2][2], 0.0);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Dimension);
    }

    #[test]
    fn test_submatrix_is_independent_copy() {
        let source = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
        let mut sub = source.submatrix(&[2, 0], &[1, 2]);
        assert_eq!(sub, m(&[&[8.0, 9.0], &[2.0, 3.0]]));

        sub.set(0, 0, 100.0);
        assert_eq!(source[2][1], 8.0);
    }

    #[test]
    fn test_empty_submatrix_is_zero() {
        let source = m(&[&[1.0]]);
        let sub = source.submatrix(&[], &[0]);
        assert_eq!(sub.rows(), 0);
        assert!(sub.is_zero(1e-9));
    }

    #[test]
    fn test_is_zero_uses_tolerance() {
        let matrix = m(&[&[1e-12, -1e-12], &[0.0, 0.0]]);
        assert!(matrix.is_zero(1e-10));
        assert!(!matrix.is_zero(1e-13));
    }

    #[test]
    fn test_identity_minus_weights() {
        let a = m(&[&[0.0, 0.5], &[0.5, 0.0]]);
        let b = Matrix::identity(2).sub(&a).unwrap();
        assert_eq!(b, m(&[&[1.0, -0.5], &[-0.5, 1.0]]));
    }

    #[test]
    fn test_sub_shape_mismatch() {
        let err = Matrix::identity(2).sub(&Matrix::identity(3)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Dimension);
    }

    #[test]
    fn test_mul() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[0.0, 1.0], &[1.0, 0.0]]);
        assert_eq!(a.mul(&b).unwrap(), m(&[&[2.0, 1.0], &[4.0, 3.0]]));
        assert_eq!(a.mul(&Matrix::identity(2)).unwrap(), a);

        let err = a.mul(&Matrix::identity(3)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Dimension);
    }

    #[test]
    fn test_append_columns() {
        let mut a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        a.append_columns(&Matrix::identity(2)).unwrap();
        assert_eq!((a.rows(), a.cols()), (2, 4));
        assert_eq!(a.row(1), &[3.0, 4.0, 0.0, 1.0]);

        let err = a.append_columns(&Matrix::identity(3)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Dimension);
    }

    #[test]
    fn test_column_sum_and_swap() {
        let mut a = m(&[&[0.1, 0.2], &[0.3, 0.4]]);
        assert!((a.column_sum(1) - 0.6).abs() < 1e-12);

        a.swap_rows(0, 1);
        assert_eq!(a.row(0), &[0.3, 0.4]);
    }
}
