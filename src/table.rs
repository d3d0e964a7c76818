//! The classic LCS length table.
//!
//! `table[i][j]` holds the LCS length of `source[0..i]` and `target[0..j]`.
//! Row 0 and column 0 are zero; a matching pair extends the diagonal by one,
//! otherwise the cell takes the larger of its upper and left neighbours.
//!
//! Only `==` is ever applied to tokens, so any `PartialEq` element type works.

/// Full `(m + 1) × (n + 1)` DP table, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LcsTable {
    cells: Vec<u32>,
    rows: usize,
    cols: usize,
}

impl LcsTable {
    /// Fill the table for `source` (rows) against `target` (columns).
    ///
    /// O(m·n) time and space. Total over any pair of finite slices.
    pub fn build<T: PartialEq>(source: &[T], target: &[T]) -> Self {
        #[cfg(feature = "tracing")]
        let _span =
            tracing::trace_span!("build_table", source_len = source.len(), target_len = target.len())
                .entered();

        let rows = source.len() + 1;
        let cols = target.len() + 1;
        let mut cells = vec![0u32; rows * cols];

        for i in 1..rows {
            let tok = &source[i - 1];
            for j in 1..cols {
                let up = cells[(i - 1) * cols + j];
                let left = cells[i * cols + j - 1];
                cells[i * cols + j] = if *tok == target[j - 1] {
                    cells[(i - 1) * cols + j - 1] + 1
                } else {
                    up.max(left)
                };
            }
        }

        Self { cells, rows, cols }
    }

    /// Number of rows, `source.len() + 1`.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `target.len() + 1`.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell `(i, j)`.
    ///
    /// # Panics
    /// Panics if `i >= rows()` or `j >= cols()`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        assert!(
            i < self.rows && j < self.cols,
            "cell ({i}, {j}) outside {}x{} table",
            self.rows,
            self.cols
        );
        self.cells[i * self.cols + j]
    }

    /// Row `i` as a slice of length `cols()`.
    ///
    /// # Panics
    /// Panics if `i >= rows()`.
    pub fn row(&self, i: usize) -> &[u32] {
        assert!(
            i < self.rows,
            "row {i} outside {}x{} table",
            self.rows,
            self.cols
        );
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// LCS length of the full inputs, i.e. the bottom-right cell.
    #[inline]
    pub fn lcs_len(&self) -> u32 {
        // rows, cols >= 1, so the table is never empty.
        self.cells[self.cells.len() - 1]
    }
}

/// Length of the LCS of `source` and `target` without keeping the table.
///
/// Uses two rolling rows over the shorter input, so memory is
/// O(min(m, n)).
pub fn lcs_length<T: PartialEq>(source: &[T], target: &[T]) -> u32 {
    let (outer, inner) = if source.len() >= target.len() {
        (source, target)
    } else {
        (target, source)
    };
    let width = inner.len();
    let mut prev = vec![0u32; width + 1];
    let mut curr = vec![0u32; width + 1];

    for tok in outer {
        for j in 1..=width {
            curr[j] = if *tok == inner[j - 1] {
                prev[j - 1] + 1
            } else {
                prev[j].max(curr[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[width]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_give_zero_table() {
        let t = LcsTable::build::<u8>(b"", b"ABC");
        assert_eq!(t.rows(), 1);
        assert_eq!(t.cols(), 4);
        assert_eq!(t.row(0), &[0, 0, 0, 0]);
        assert_eq!(t.lcs_len(), 0);

        let t = LcsTable::build::<u8>(b"", b"");
        assert_eq!(t.lcs_len(), 0);
    }

    #[test]
    fn classic_example_table() {
        let t = LcsTable::build(b"ABCBDAB", b"BDCABA");
        assert_eq!(t.lcs_len(), 4);
        // Last row from the textbook figure.
        assert_eq!(t.row(7), &[0, 1, 2, 2, 3, 4, 4]);
        assert_eq!(t.get(1, 4), 1);
    }

    #[test]
    fn identical_inputs_fill_min_of_indices() {
        let s = b"HELLO";
        let t = LcsTable::build(s, s);
        for i in 0..t.rows() {
            for j in 0..t.cols() {
                assert_eq!(t.get(i, j), i.min(j) as u32);
            }
        }
    }

    #[test]
    fn monotone_along_both_axes() {
        let t = LcsTable::build(b"ABDEDA", b"ADEBADDA");
        for i in 0..t.rows() {
            for j in 0..t.cols() {
                if i > 0 {
                    assert!(t.get(i, j) >= t.get(i - 1, j));
                }
                if j > 0 {
                    assert!(t.get(i, j) >= t.get(i, j - 1));
                }
            }
        }
    }

    #[test]
    fn rolling_length_matches_table() {
        let cases: &[(&[u8], &[u8])] = &[
            (b"", b""),
            (b"A", b""),
            (b"", b"A"),
            (b"A", b"A"),
            (b"A", b"B"),
            (b"ABCBDAB", b"BDCABA"),
            (b"BDCABA", b"ABCBDAB"),
            (b"ACCGGTCGAGTGCGCGGAAGCCGGCCGAA", b"GTCGTTCGGAATGCCGTTGCTCTGTAAA"),
        ];
        for &(s, t) in cases {
            assert_eq!(lcs_length(s, t), LcsTable::build(s, t).lcs_len());
        }
        assert_eq!(
            lcs_length(
                b"ACCGGTCGAGTGCGCGGAAGCCGGCCGAA",
                b"GTCGTTCGGAATGCCGTTGCTCTGTAAA"
            ),
            20
        );
    }

    #[test]
    fn works_with_non_byte_tokens() {
        let s = ["the", "quick", "brown", "fox"];
        let t = ["the", "lazy", "brown", "dog"];
        assert_eq!(LcsTable::build(&s, &t).lcs_len(), 2);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_range_cell_panics() {
        let t = LcsTable::build(b"AB", b"A");
        t.get(3, 0);
    }

    #[test]
    #[should_panic(expected = "row 3 outside 3x2 table")]
    fn out_of_range_row_panics() {
        let t = LcsTable::build(b"AB", b"A");
        t.row(3);
    }
}
