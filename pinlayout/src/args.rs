//! Configuration for [`PinterestLayout`](crate::PinterestLayout).
use derive_setters::Setters;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    column::ColumnStrategy,
    error::{LayoutError, LayoutResult},
};

/// Default number of columns.
pub const DEFAULT_COLUMNS: usize = 2;

/// Default padding applied around every cell, in layout units.
pub const DEFAULT_CELL_PADDING: f64 = 6.0;

/// Arguments for a masonry layout.
///
/// The arguments are fixed for the lifetime of the engine built from them.
/// Build a new engine to lay out with different arguments.
///
/// # Examples
///
/// ```
/// use pinlayout::{ColumnStrategy, PinterestLayoutArgs};
///
/// let args = PinterestLayoutArgs::default()
///     .columns(3)
///     .cell_padding(4.0)
///     .column_strategy(ColumnStrategy::Shortest);
/// assert!(args.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinterestLayoutArgs {
    /// Number of equal-width columns. Must be at least 1.
    pub columns: usize,
    /// Padding inset on every side of each cell. Adjacent cells are separated
    /// by twice this value.
    pub cell_padding: f64,
    /// How the column for the next item is chosen.
    pub column_strategy: ColumnStrategy,
}

impl Default for PinterestLayoutArgs {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            cell_padding: DEFAULT_CELL_PADDING,
            column_strategy: ColumnStrategy::RoundRobin,
        }
    }
}

impl PinterestLayoutArgs {
    /// Checks that the arguments describe a layout that can be computed.
    pub fn validate(&self) -> LayoutResult<()> {
        if self.columns == 0 {
            return Err(LayoutError::InvalidColumnCount);
        }
        if !self.cell_padding.is_finite() || self.cell_padding < 0.0 {
            return Err(LayoutError::InvalidCellPadding(self.cell_padding));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_defaults() {
        let args = PinterestLayoutArgs::default();
        assert_eq!(args.columns, 2);
        assert_eq!(args.cell_padding, 6.0);
        assert_eq!(args.column_strategy, ColumnStrategy::RoundRobin);
        assert_eq!(args.validate(), Ok(()));
    }

    #[test]
    fn test_setters_chain() {
        let args = PinterestLayoutArgs::default().columns(4).cell_padding(0.0);
        assert_eq!(args.columns, 4);
        assert_eq!(args.cell_padding, 0.0);
    }

    #[rstest]
    #[case(1, 0.0)]
    #[case(2, 6.0)]
    #[case(12, 100.5)]
    fn test_validate_accepts(#[case] columns: usize, #[case] padding: f64) {
        let args = PinterestLayoutArgs::default()
            .columns(columns)
            .cell_padding(padding);
        assert_eq!(args.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_zero_columns() {
        let args = PinterestLayoutArgs::default().columns(0);
        assert_eq!(args.validate(), Err(LayoutError::InvalidColumnCount));
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::INFINITY)]
    fn test_validate_rejects_padding(#[case] padding: f64) {
        let args = PinterestLayoutArgs::default().cell_padding(padding);
        assert_eq!(args.validate(), Err(LayoutError::InvalidCellPadding(padding)));
    }

    #[test]
    fn test_validate_rejects_nan_padding() {
        let args = PinterestLayoutArgs::default().cell_padding(f64::NAN);
        assert!(matches!(
            args.validate(),
            Err(LayoutError::InvalidCellPadding(p)) if p.is_nan()
        ));
    }
}
