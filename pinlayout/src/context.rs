//! Capabilities the layout engine borrows from its host.
//!
//! The engine never owns the scroll container or the height source. The host
//! lends them for the duration of a call through a [`LayoutContext`].
//!
//! ## Usage
//!
//! Implement [`LayoutContainer`] on the host's scroll view state (or use
//! [`ContainerMetrics`]) and [`ItemHeightProvider`] on whatever knows the item
//! heights. Slices, vectors and closures already implement
//! [`ItemHeightProvider`].
use crate::geometry::EdgeInsets;

/// The scrollable surface hosting the layout.
///
/// Every method is queried live; the engine keeps no copy of these values
/// between calls.
pub trait LayoutContainer {
    /// Full width of the container bounds.
    fn bounds_width(&self) -> f64;

    /// Content insets of the container. Only `left` and `right` are used.
    fn content_insets(&self) -> EdgeInsets;

    /// Number of items to lay out.
    fn item_count(&self) -> usize;

    /// Width available to columns: bounds width minus horizontal insets.
    fn content_width(&self) -> f64 {
        self.bounds_width() - self.content_insets().horizontal_total()
    }
}

/// Source of the intrinsic content height of each item.
///
/// Called once per item per layout pass, in ascending index order. The
/// returned height excludes cell padding. Returning `None` means the provider
/// knows no height for `index`, which aborts the pass.
pub trait ItemHeightProvider {
    /// Intrinsic height of the item at `index`, if known.
    fn item_height(&self, index: usize) -> Option<f64>;
}

impl ItemHeightProvider for [f64] {
    fn item_height(&self, index: usize) -> Option<f64> {
        self.get(index).copied()
    }
}

impl ItemHeightProvider for Vec<f64> {
    fn item_height(&self, index: usize) -> Option<f64> {
        self.as_slice().item_height(index)
    }
}

impl<const N: usize> ItemHeightProvider for [f64; N] {
    fn item_height(&self, index: usize) -> Option<f64> {
        self.as_slice().item_height(index)
    }
}

/// Closures answer every index.
impl<F> ItemHeightProvider for F
where
    F: Fn(usize) -> f64,
{
    fn item_height(&self, index: usize) -> Option<f64> {
        Some(self(index))
    }
}

/// Plain snapshot of a container's metrics.
///
/// # Examples
///
/// ```
/// use pinlayout::{ContainerMetrics, LayoutContainer, geometry::EdgeInsets};
///
/// let container = ContainerMetrics::new(320.0, 12)
///     .with_insets(EdgeInsets::horizontal(10.0, 10.0));
/// assert_eq!(container.content_width(), 300.0);
/// assert_eq!(container.item_count(), 12);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ContainerMetrics {
    /// Full width of the container bounds.
    pub bounds_width: f64,
    /// Content insets of the container.
    pub insets: EdgeInsets,
    /// Number of items to lay out.
    pub item_count: usize,
}

impl ContainerMetrics {
    /// Creates metrics for a container without insets.
    pub fn new(bounds_width: f64, item_count: usize) -> Self {
        Self {
            bounds_width,
            insets: EdgeInsets::ZERO,
            item_count,
        }
    }

    /// Replaces the content insets.
    pub fn with_insets(mut self, insets: EdgeInsets) -> Self {
        self.insets = insets;
        self
    }
}

impl LayoutContainer for ContainerMetrics {
    fn bounds_width(&self) -> f64 {
        self.bounds_width
    }

    fn content_insets(&self) -> EdgeInsets {
        self.insets
    }

    fn item_count(&self) -> usize {
        self.item_count
    }
}

/// Borrowed collaborators for one engine call.
///
/// Either capability may be absent, for instance while the host view is
/// detached. The engine reports which one was missing instead of guessing.
#[derive(Clone, Copy, Default)]
pub struct LayoutContext<'a> {
    container: Option<&'a dyn LayoutContainer>,
    heights: Option<&'a dyn ItemHeightProvider>,
}

impl<'a> LayoutContext<'a> {
    /// Creates a context with both capabilities attached.
    pub fn new(container: &'a dyn LayoutContainer, heights: &'a dyn ItemHeightProvider) -> Self {
        Self {
            container: Some(container),
            heights: Some(heights),
        }
    }

    /// Creates a context with no capabilities attached.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Attaches a container.
    pub fn with_container(mut self, container: &'a dyn LayoutContainer) -> Self {
        self.container = Some(container);
        self
    }

    /// Attaches a height provider.
    pub fn with_heights(mut self, heights: &'a dyn ItemHeightProvider) -> Self {
        self.heights = Some(heights);
        self
    }

    /// The attached container, if any.
    pub fn container(&self) -> Option<&'a dyn LayoutContainer> {
        self.container
    }

    /// The attached height provider, if any.
    pub fn heights(&self) -> Option<&'a dyn ItemHeightProvider> {
        self.heights
    }
}

impl std::fmt::Debug for LayoutContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutContext")
            .field("container", &self.container.is_some())
            .field("heights", &self.heights.is_some())
            .finish()
    }
}
