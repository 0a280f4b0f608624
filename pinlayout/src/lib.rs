//! Masonry ("Pinterest") column layout for scrollable item containers.
//!
//! `pinlayout` computes where every item of a vertically scrolling container
//! goes when items of varying height are stacked into a fixed number of
//! equal-width columns. It renders nothing: the host supplies the container
//! width, the item count and each item's height, and reads back frames and
//! the total content extent.
//!
//! # Overview
//!
//! - [`PinterestLayout`] - the engine: runs a layout pass and answers
//!   geometry queries from its cache
//! - [`PinterestLayoutArgs`] - column count, cell padding and column strategy
//! - [`LayoutContext`] - borrowed [`LayoutContainer`] and
//!   [`ItemHeightProvider`] for one call
//! - [`geometry`] - rectangles, sizes and insets in layout units
//!
//! # Example
//!
//! ```
//! use pinlayout::{
//!     ContainerMetrics, LayoutContext, PinterestLayout, PinterestLayoutArgs,
//!     geometry::Rect,
//! };
//!
//! let container = ContainerMetrics::new(300.0, 3);
//! let heights = [40.0, 100.0, 20.0];
//! let context = LayoutContext::new(&container, &heights);
//!
//! let mut layout = PinterestLayout::new(PinterestLayoutArgs::default()).unwrap();
//! layout.prepare(&context).unwrap();
//!
//! let visible: Vec<usize> = layout
//!     .attributes_in_rect(Rect::vertical_band(0.0, 60.0))
//!     .map(|item| item.index)
//!     .collect();
//! assert_eq!(visible, vec![0, 1, 2]);
//! ```
//!
//! # Logging
//!
//! The engine emits [`tracing`] events (`debug` per pass, `trace` per item,
//! `warn` for rejected input). Install a subscriber in the host to see them.

pub mod args;
pub mod column;
pub mod context;
pub mod error;
pub mod geometry;
pub mod layout;

pub use args::PinterestLayoutArgs;
pub use column::ColumnStrategy;
pub use context::{ContainerMetrics, ItemHeightProvider, LayoutContainer, LayoutContext};
pub use error::{LayoutError, LayoutResult, MissingCapability};
pub use layout::{LayoutAttributes, LayoutSnapshot, LayoutState, PinterestLayout, PrepareOutcome};
