use ndarray::{s, ArrayView1};

/// A borrowed view of a matrix stored in the compressed sparse column format.
///
/// The row indices of column `j` are `indices[indptr[j]..indptr[j + 1]]` and
/// the matching non-zero values are `data[indptr[j]..indptr[j + 1]]`. The
/// optional `X_offset` holds one offset per column: the matrix is then
/// treated as `X - 1 X_offset^T` without ever being densified.
#[derive(Debug, Clone, PartialEq)]
pub struct CSCArray<'a, T> {
    pub data: ArrayView1<'a, T>,
    pub indices: ArrayView1<'a, i32>,
    pub indptr: ArrayView1<'a, i32>,
    pub X_offset: Option<ArrayView1<'a, T>>,
}

impl<'a, T> CSCArray<'a, T> {
    pub fn new(
        data: ArrayView1<'a, T>,
        indices: ArrayView1<'a, i32>,
        indptr: ArrayView1<'a, i32>,
    ) -> CSCArray<'a, T> {
        CSCArray {
            data,
            indices,
            indptr,
            X_offset: None,
        }
    }

    /// Attaches per-column offsets to logically center the matrix.
    pub fn with_offsets(mut self, X_offset: ArrayView1<'a, T>) -> CSCArray<'a, T> {
        self.X_offset = Some(X_offset);
        self
    }

    /// Iterates over the `(row, value)` pairs stored for column `j`.
    pub fn column(&self, j: usize) -> impl Iterator<Item = (usize, &T)> + '_ {
        let start = self.indptr[j] as usize;
        let end = self.indptr[j + 1] as usize;
        self.indices
            .slice(s![start..end])
            .into_iter()
            .map(|&i| i as usize)
            .zip(self.data.slice(s![start..end]))
    }
}
