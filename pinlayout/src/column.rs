//! Column bookkeeping for a single layout pass.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// How the engine picks the column for the next item.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ColumnStrategy {
    /// Columns are filled in strict rotation: item `i` lands in column
    /// `i % columns`, whatever the current column heights are.
    #[default]
    RoundRobin,
    /// Each item lands in the column whose stack is currently the shortest.
    /// Ties go to the leftmost column.
    Shortest,
}

/// A cell claimed in one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Placement {
    pub column: usize,
    /// Full cell frame, padding included.
    pub frame: Rect,
}

/// Running offsets of every column during a layout pass.
#[derive(Debug, Clone)]
pub(crate) struct ColumnState {
    width: f64,
    x_offsets: Vec<f64>,
    y_offsets: Vec<f64>,
    cursor: usize,
    strategy: ColumnStrategy,
}

impl ColumnState {
    /// Splits `content_width` into `columns` equal columns, all starting at
    /// y = 0.
    ///
    /// `columns` must be at least 1. A negative content width yields
    /// zero-width columns.
    pub fn new(columns: usize, content_width: f64, strategy: ColumnStrategy) -> Self {
        let width = content_width.max(0.0) / columns as f64;
        let x_offsets = (0..columns).map(|column| column as f64 * width).collect();
        Self {
            width,
            x_offsets,
            y_offsets: vec![0.0; columns],
            cursor: 0,
            strategy,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.y_offsets.len()
    }

    /// The column the next call to [`place`](Self::place) will use.
    pub fn next_column(&self) -> usize {
        match self.strategy {
            ColumnStrategy::RoundRobin => self.cursor,
            ColumnStrategy::Shortest => find_shortest_column(&self.y_offsets),
        }
    }

    /// Stacks a cell of `height` on top of the next column and advances.
    pub fn place(&mut self, height: f64) -> Placement {
        let column = self.next_column();
        let frame = Rect::new(
            self.x_offsets[column],
            self.y_offsets[column],
            self.width,
            height,
        );
        self.y_offsets[column] += height;
        self.cursor = (column + 1) % self.len();
        Placement { column, frame }
    }
}

fn find_shortest_column(y_offsets: &[f64]) -> usize {
    let mut index = 0;
    let mut best = y_offsets.first().copied().unwrap_or(0.0);
    for (i, offset) in y_offsets.iter().enumerate().skip(1) {
        if *offset < best {
            best = *offset;
            index = i;
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_columns_split_width_evenly() {
        let state = ColumnState::new(3, 300.0, ColumnStrategy::RoundRobin);
        assert_eq!(state.width(), 100.0);
        assert_eq!(state.len(), 3);
        assert_eq!(state.x_offsets, vec![0.0, 100.0, 200.0]);
        assert_eq!(state.y_offsets, vec![0.0; 3]);
    }

    #[test]
    fn test_negative_width_yields_empty_columns() {
        let state = ColumnState::new(2, -40.0, ColumnStrategy::RoundRobin);
        assert_eq!(state.width(), 0.0);
        assert_eq!(state.x_offsets, vec![0.0, 0.0]);
    }

    #[test]
    fn test_round_robin_ignores_heights() {
        let mut state = ColumnState::new(2, 300.0, ColumnStrategy::RoundRobin);
        let first = state.place(500.0);
        let second = state.place(10.0);
        let third = state.place(10.0);
        assert_eq!(first.column, 0);
        assert_eq!(second.column, 1);
        // Column 0 is far taller, round robin goes there anyway.
        assert_eq!(third.column, 0);
        assert_eq!(third.frame, Rect::new(0.0, 500.0, 150.0, 10.0));
    }

    #[test]
    fn test_shortest_follows_heights() {
        let mut state = ColumnState::new(2, 300.0, ColumnStrategy::Shortest);
        state.place(500.0);
        state.place(10.0);
        let third = state.place(10.0);
        assert_eq!(third.column, 1);
        assert_eq!(third.frame, Rect::new(150.0, 10.0, 150.0, 10.0));
    }

    #[test]
    fn test_single_column_stacks() {
        let mut state = ColumnState::new(1, 80.0, ColumnStrategy::RoundRobin);
        for expected_y in [0.0, 20.0, 40.0] {
            let placement = state.place(20.0);
            assert_eq!(placement.column, 0);
            assert_eq!(placement.frame.y, expected_y);
        }
        assert_eq!(state.y_offsets, vec![60.0]);
    }

    #[rstest]
    #[case(&[0.0, 0.0, 0.0], 0)]
    #[case(&[5.0, 3.0, 3.0], 1)]
    #[case(&[5.0, 4.0, 1.0], 2)]
    #[case(&[], 0)]
    fn test_find_shortest_column(#[case] offsets: &[f64], #[case] expected: usize) {
        assert_eq!(find_shortest_column(offsets), expected);
    }
}
