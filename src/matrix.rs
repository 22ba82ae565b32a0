//! Row-wise 2-D prefix sums and diagonal sums over rectangular matrices.

use crate::core::{Error, Result, check_range};

/// Immutable per-row column prefixes over a fixed matrix.
///
/// `prefix[r][c]` holds the sum of row `r` at columns `0..=c`. A rectangle
/// query takes the column prefix at `col2` in each covered row, subtracting
/// the prefix at `col1 - 1` when the rectangle does not start at column 0.
#[derive(Debug, Clone)]
pub struct MatrixPrefixSums {
    prefix: Vec<Vec<i64>>,
}

impl MatrixPrefixSums {
    /// Build per-row column prefixes. Fails on an empty matrix or when a
    /// row's width differs from the first row's.
    pub fn new(mat: &[Vec<i64>]) -> Result<MatrixPrefixSums> {
        if mat.is_empty() || mat[0].is_empty() {
            return Err(Error::EmptyInput("MatrixPrefixSums::new"));
        }
        let cols = mat[0].len();
        let mut prefix = Vec::with_capacity(mat.len());
        for (r, row) in mat.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::RaggedMatrix {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            let mut acc = 0i64;
            prefix.push(
                row.iter()
                    .map(|&v| {
                        acc += v;
                        acc
                    })
                    .collect(),
            );
        }
        Ok(MatrixPrefixSums { prefix })
    }

    /// Sum of the inclusive rectangle `(row1, col1)..=(row2, col2)`.
    pub fn sum_region(&self, row1: usize, col1: usize, row2: usize, col2: usize) -> Result<i64> {
        check_range(row1, row2, self.prefix.len())?;
        check_range(col1, col2, self.prefix[0].len())?;
        let mut sum = 0i64;
        for row in &self.prefix[row1..=row2] {
            sum += row[col2];
            if col1 > 0 {
                sum -= row[col1 - 1];
            }
        }
        Ok(sum)
    }

    pub fn rows(&self) -> usize {
        self.prefix.len()
    }

    pub fn cols(&self) -> usize {
        self.prefix[0].len()
    }
}

/// Sum of both diagonals of a square matrix, counting the center cell of
/// an odd-sized matrix once.
pub fn diagonal_sum(mat: &[Vec<i64>]) -> Result<i64> {
    if mat.is_empty() {
        return Err(Error::EmptyInput("diagonal_sum"));
    }
    let n = mat.len();
    let cols = mat[0].len();
    for (r, row) in mat.iter().enumerate() {
        if row.len() != cols {
            return Err(Error::RaggedMatrix {
                row: r,
                expected: cols,
                found: row.len(),
            });
        }
    }
    if cols != n {
        return Err(Error::NotSquare { rows: n, cols });
    }
    let mut sum = 0i64;
    for i in 0..n {
        sum += mat[i][i];
        if i != n - 1 - i {
            sum += mat[i][n - 1 - i];
        }
    }
    Ok(sum)
}
