use crate::error::{LabError, LabResult};

/// A rectangular grid of elevation samples with uniform spacing.
///
/// Always at least one row and one column, every row has `cols` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    x_step: f32,
    z_step: f32,
    cols: usize,
    heights: Vec<f32>,
}

impl HeightField {
    /// Builds a field from row vectors, rejecting empty and ragged input.
    pub fn new(x_step: f32, z_step: f32, rows: Vec<Vec<f32>>) -> LabResult<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return Err(LabError::malformed(0, "height field needs at least one row and column"));
        }
        if let Some(bad) = rows.iter().position(|r| r.len() != cols) {
            return Err(LabError::malformed(
                0,
                format!(
                    "row {} has {} samples, expected {}",
                    bad,
                    rows[bad].len(),
                    cols
                ),
            ));
        }
        Ok(Self {
            x_step,
            z_step,
            cols,
            heights: rows.into_iter().flatten().collect(),
        })
    }

    /// Samples `height(row, col)` over a `rows` x `cols` grid.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        x_step: f32,
        z_step: f32,
        mut height: impl FnMut(usize, usize) -> f32,
    ) -> LabResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(LabError::malformed(0, "height field needs at least one row and column"));
        }
        let mut heights = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                heights.push(height(row, col));
            }
        }
        Ok(Self {
            x_step,
            z_step,
            cols,
            heights,
        })
    }

    pub fn rows(&self) -> usize {
        self.heights.len() / self.cols
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn x_step(&self) -> f32 {
        self.x_step
    }

    pub fn z_step(&self) -> f32 {
        self.z_step
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if col >= self.cols {
            return None;
        }
        self.heights.get(row * self.cols + col).copied()
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f32]> {
        self.heights.chunks_exact(self.cols)
    }

    /// Lowest and highest sample.
    pub fn height_range(&self) -> (f32, f32) {
        self.heights
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &h| {
                (lo.min(h), hi.max(h))
            })
    }

    /// World-space size along x and z.
    pub fn extent(&self) -> (f32, f32) {
        (
            (self.cols - 1) as f32 * self.x_step,
            (self.rows() - 1) as f32 * self.z_step,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_ragged_rows() {
        let err = HeightField::new(1.0, 1.0, vec![vec![0.0, 1.0], vec![2.0]]).unwrap_err();
        assert!(matches!(err, LabError::MalformedHeightField { .. }));
    }

    #[test]
    fn rejects_empty() {
        assert!(HeightField::new(1.0, 1.0, vec![]).is_err());
        assert!(HeightField::new(1.0, 1.0, vec![vec![]]).is_err());
        assert!(HeightField::from_fn(0, 3, 1.0, 1.0, |_, _| 0.0).is_err());
    }

    #[test]
    fn indexing_and_extent() {
        let field = HeightField::from_fn(3, 4, 2.0, 0.5, |r, c| (r * 4 + c) as f32).unwrap();
        assert_eq!(field.rows(), 3);
        assert_eq!(field.cols(), 4);
        assert_eq!(field.get(2, 3), Some(11.0));
        assert_eq!(field.get(0, 4), None);
        assert_eq!(field.get(3, 0), None);
        assert_eq!(field.height_range(), (0.0, 11.0));
        assert_eq!(field.extent(), (6.0, 1.0));
        assert_eq!(field.iter_rows().nth(1), Some(&[4.0, 5.0, 6.0, 7.0][..]));
    }
}
