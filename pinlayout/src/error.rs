//! Errors reported by the layout engine.
use thiserror::Error;

/// An external capability the engine needs to run a layout pass.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MissingCapability {
    /// Nothing reports the container bounds, insets and item count.
    #[error("layout container")]
    Container,
    /// Nothing reports per-item heights.
    #[error("item height provider")]
    HeightProvider,
}

/// Errors that can occur while configuring, computing or querying a layout.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LayoutError {
    /// A layout pass was requested without one of its collaborators.
    ///
    /// The pass is skipped and the engine stays empty.
    #[error("cannot compute layout: no {0} attached")]
    MissingContext(MissingCapability),
    /// The height provider had no height for an item the container reports.
    ///
    /// The pass is aborted and the engine stays empty.
    #[error("no height reported for item {index}")]
    MissingHeight { index: usize },
    /// An item was looked up outside the computed range.
    #[error("item index {index} is out of range for a layout of {len} items")]
    IndexOutOfRange { index: usize, len: usize },
    /// The layout was configured with zero columns.
    #[error("column count must be at least 1")]
    InvalidColumnCount,
    /// The cell padding is negative or not a finite number.
    #[error("cell padding must be a finite, non-negative value, got {0}")]
    InvalidCellPadding(f64),
}

/// Convenience alias for results produced by the layout engine.
pub type LayoutResult<T> = Result<T, LayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LayoutError::MissingContext(MissingCapability::HeightProvider).to_string(),
            "cannot compute layout: no item height provider attached"
        );
        assert_eq!(
            LayoutError::MissingContext(MissingCapability::Container).to_string(),
            "cannot compute layout: no layout container attached"
        );
        assert_eq!(
            LayoutError::MissingHeight { index: 3 }.to_string(),
            "no height reported for item 3"
        );
        assert_eq!(
            LayoutError::IndexOutOfRange { index: 3, len: 3 }.to_string(),
            "item index 3 is out of range for a layout of 3 items"
        );
        assert_eq!(
            LayoutError::InvalidCellPadding(-1.0).to_string(),
            "cell padding must be a finite, non-negative value, got -1"
        );
    }
}
