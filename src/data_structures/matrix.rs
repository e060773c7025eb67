use std::ops::Index;

use crate::data_structures::Distance;
use crate::graph::Weight;

/// Dense `n x n` matrix of distances, stored row-major.
///
/// `matrix[i][j]` is the distance from `i` to `j`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix<W>
where
    W: Weight,
{
    size: usize,
    cells: Vec<Distance<W>>,
}

impl<W> DistanceMatrix<W>
where
    W: Weight,
{
    /// Creates a matrix where every vertex reaches only itself, at distance zero
    pub fn new(size: usize) -> Self {
        let mut cells = vec![Distance::Unreachable; size * size];
        for i in 0..size {
            cells[i * size + i] = Distance::zero();
        }
        DistanceMatrix { size, cells }
    }

    /// Stacks one distance vector per source vertex.
    ///
    /// Panics if a row length differs from the number of rows.
    pub fn from_rows(rows: Vec<Vec<Distance<W>>>) -> Self {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            assert_eq!(row.len(), size, "distance matrix rows must have {} entries", size);
            cells.extend(row);
        }
        DistanceMatrix { size, cells }
    }

    /// Number of vertices (rows and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, from: usize, to: usize) -> Distance<W> {
        self.cells[from * self.size + to]
    }

    pub fn set(&mut self, from: usize, to: usize, distance: Distance<W>) {
        self.cells[from * self.size + to] = distance;
    }

    /// Distances from `from` to every vertex
    pub fn row(&self, from: usize) -> &[Distance<W>] {
        &self.cells[from * self.size..(from + 1) * self.size]
    }

    /// Iterates over the rows in vertex order
    pub fn rows(&self) -> impl Iterator<Item = &[Distance<W>]> + '_ {
        (0..self.size).map(move |from| self.row(from))
    }

    /// True when some vertex reaches itself with negative total weight, which
    /// only happens when the graph contains a negative cycle
    pub fn has_negative_diagonal(&self) -> bool {
        (0..self.size).any(|i| self.get(i, i) < Distance::zero())
    }
}

impl<W> Index<usize> for DistanceMatrix<W>
where
    W: Weight,
{
    type Output = [Distance<W>];

    fn index(&self, from: usize) -> &Self::Output {
        self.row(from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_matrix_has_zero_diagonal() {
        let matrix: DistanceMatrix<i64> = DistanceMatrix::new(3);

        assert_eq!(matrix.size(), 3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { Distance::Finite(0) } else { Distance::Unreachable };
                assert_eq!(matrix[i][j], expected);
            }
        }
        assert!(!matrix.has_negative_diagonal());
    }

    #[test]
    fn rows_round_trip_through_from_rows() {
        let rows = vec![
            vec![Distance::Finite(0), Distance::Finite(4)],
            vec![Distance::Unreachable, Distance::Finite(-1)],
        ];
        let matrix = DistanceMatrix::from_rows(rows.clone());

        assert_eq!(matrix.rows().map(|row| row.to_vec()).collect::<Vec<_>>(), rows);
        assert_eq!(matrix.get(0, 1), Distance::Finite(4));
        assert!(matrix.has_negative_diagonal());
    }

    #[test]
    #[should_panic]
    fn from_rows_rejects_ragged_input() {
        let _ = DistanceMatrix::<i64>::from_rows(vec![vec![Distance::Finite(0)], vec![]]);
    }
}
