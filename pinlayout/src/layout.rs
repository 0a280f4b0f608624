//! The masonry layout engine.
//!
//! ## Usage
//!
//! Build a [`PinterestLayout`] once, call [`PinterestLayout::prepare`] before
//! the host asks for geometry, then answer the host's queries from the cache.
//! Call [`PinterestLayout::invalidate`] whenever the item count, item heights
//! or container width change; the engine does not detect those changes.
use std::ops::Range;

use tracing::{debug, instrument, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    args::PinterestLayoutArgs,
    column::ColumnState,
    context::LayoutContext,
    error::{LayoutError, LayoutResult, MissingCapability},
    geometry::{Rect, Size},
};

/// Computed placement of a single item.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutAttributes {
    /// Index of the item in the container.
    pub index: usize,
    /// Cell frame with the cell padding already inset.
    pub frame: Rect,
    /// Column the item was assigned to.
    pub column: usize,
}

/// Whether the engine currently holds computed geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutState {
    /// No geometry is cached. The next [`PinterestLayout::prepare`] runs a
    /// full pass.
    Empty,
    /// Geometry for every item is cached.
    Computed,
}

/// What a call to [`PinterestLayout::prepare`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrepareOutcome {
    /// A full pass ran and placed `items` items.
    Computed { items: usize },
    /// The engine already held a layout; nothing was recomputed.
    Cached,
}

/// Serializable view of a computed layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutSnapshot {
    /// Total scrollable extent.
    pub content_size: Size,
    /// Placement of every item, in index order.
    pub items: Vec<LayoutAttributes>,
}

#[derive(Debug, Clone)]
enum LayoutCache {
    Empty,
    Computed { attributes: Vec<LayoutAttributes> },
}

/// Masonry ("Pinterest") layout engine.
///
/// Items are stacked into equal-width columns. Each cell is as tall as the
/// item's intrinsic height plus twice the cell padding, and the stored frame
/// is the cell inset by the padding on every side.
///
/// # Examples
///
/// ```
/// use pinlayout::{
///     ContainerMetrics, LayoutContext, PinterestLayout, geometry::Rect,
/// };
///
/// let container = ContainerMetrics::new(300.0, 3);
/// let heights = vec![40.0, 100.0, 20.0];
/// let context = LayoutContext::new(&container, &heights);
///
/// let mut layout = PinterestLayout::default();
/// layout.prepare(&context).unwrap();
///
/// let third = layout.attributes_for_item(2).unwrap();
/// assert_eq!(third.frame, Rect::new(6.0, 58.0, 138.0, 20.0));
/// assert_eq!(layout.content_extent(&context).height, 112.0);
/// ```
#[derive(Debug, Clone)]
pub struct PinterestLayout {
    args: PinterestLayoutArgs,
    cache: LayoutCache,
    content_height: f64,
}

impl Default for PinterestLayout {
    fn default() -> Self {
        Self {
            args: PinterestLayoutArgs::default(),
            cache: LayoutCache::Empty,
            content_height: 0.0,
        }
    }
}

impl PinterestLayout {
    /// Creates an empty engine with the given arguments.
    ///
    /// Fails when the arguments do not pass
    /// [`PinterestLayoutArgs::validate`].
    pub fn new(args: PinterestLayoutArgs) -> LayoutResult<Self> {
        args.validate()?;
        Ok(Self {
            args,
            cache: LayoutCache::Empty,
            content_height: 0.0,
        })
    }

    /// The arguments this engine was built with.
    pub fn args(&self) -> &PinterestLayoutArgs {
        &self.args
    }

    /// Number of columns items are distributed over.
    pub fn column_count(&self) -> usize {
        self.args.columns
    }

    /// Current state of the cache.
    pub fn state(&self) -> LayoutState {
        match self.cache {
            LayoutCache::Empty => LayoutState::Empty,
            LayoutCache::Computed { .. } => LayoutState::Computed,
        }
    }

    /// Returns `true` once a pass has completed and until the next
    /// invalidation.
    pub fn is_computed(&self) -> bool {
        self.state() == LayoutState::Computed
    }

    /// Runs a layout pass if none is cached.
    ///
    /// Every item in `[0, item_count)` is queried for its height once, in
    /// ascending order, and placed in a column. When the engine already holds
    /// a layout this returns [`PrepareOutcome::Cached`] without touching the
    /// context; call [`invalidate`](Self::invalidate) first to force a new
    /// pass.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::MissingContext`] when the context lacks a
    /// container or a height provider, and [`LayoutError::MissingHeight`] when
    /// the provider has no height for an index below the container's item
    /// count. The engine stays empty in both cases.
    #[instrument(level = "debug", skip_all, fields(columns = self.args.columns))]
    pub fn prepare(&mut self, context: &LayoutContext<'_>) -> LayoutResult<PrepareOutcome> {
        if let LayoutCache::Computed { attributes } = &self.cache {
            trace!(items = attributes.len(), "layout already computed, reusing cache");
            return Ok(PrepareOutcome::Cached);
        }

        let Some(container) = context.container() else {
            warn!("skipping layout pass: no container attached");
            return Err(LayoutError::MissingContext(MissingCapability::Container));
        };
        let Some(heights) = context.heights() else {
            warn!("skipping layout pass: no item height provider attached");
            return Err(LayoutError::MissingContext(
                MissingCapability::HeightProvider,
            ));
        };

        let item_count = container.item_count();
        let padding = self.args.cell_padding;
        let mut columns = ColumnState::new(
            self.args.columns,
            container.content_width(),
            self.args.column_strategy,
        );
        debug!(
            items = item_count,
            column_width = columns.width(),
            strategy = ?self.args.column_strategy,
            "computing masonry layout"
        );

        let mut attributes = Vec::with_capacity(item_count);
        let mut content_height: f64 = 0.0;
        for index in 0..item_count {
            let Some(raw_height) = heights.item_height(index) else {
                warn!(index, items = item_count, "aborting layout pass: no height for item");
                return Err(LayoutError::MissingHeight { index });
            };
            let item_height = sanitize_item_height(index, raw_height);
            let placement = columns.place(padding * 2.0 + item_height);
            let frame = placement.frame.inset_by(padding, padding);
            trace!(index, column = placement.column, ?frame, "placed item");

            attributes.push(LayoutAttributes {
                index,
                frame,
                column: placement.column,
            });
            content_height = content_height.max(placement.frame.max_y());
        }

        debug!(items = item_count, content_height, "masonry layout computed");
        self.content_height = content_height;
        self.cache = LayoutCache::Computed { attributes };
        Ok(PrepareOutcome::Computed { items: item_count })
    }

    /// Drops the cached geometry so the next [`prepare`](Self::prepare) runs
    /// a full pass.
    ///
    /// The reported content height keeps the value of the last completed pass
    /// until that next pass finishes.
    pub fn invalidate(&mut self) {
        if self.is_computed() {
            debug!("invalidating masonry layout");
        }
        self.cache = LayoutCache::Empty;
    }

    /// Total scrollable extent of the content.
    ///
    /// The width is read from the context's container on every call (zero
    /// without a container). The height comes from the last completed pass
    /// and is zero if no pass ever ran.
    pub fn content_extent(&self, context: &LayoutContext<'_>) -> Size {
        let width = context
            .container()
            .map(|container| container.content_width())
            .unwrap_or(0.0);
        Size::new(width, self.content_height)
    }

    /// All cached attributes, in index order. Empty until a pass completes.
    pub fn attributes(&self) -> &[LayoutAttributes] {
        match &self.cache {
            LayoutCache::Empty => &[],
            LayoutCache::Computed { attributes } => attributes,
        }
    }

    /// Number of cached items.
    pub fn len(&self) -> usize {
        self.attributes().len()
    }

    /// Returns `true` when no item is cached.
    pub fn is_empty(&self) -> bool {
        self.attributes().is_empty()
    }

    /// Cached attributes of every item whose frame intersects `rect`, in
    /// index order.
    ///
    /// This scans the whole cache.
    pub fn attributes_in_rect(&self, rect: Rect) -> impl Iterator<Item = &LayoutAttributes> + '_ {
        self.attributes()
            .iter()
            .filter(move |attributes| attributes.frame.intersects(&rect))
    }

    /// Cached attributes of the item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::IndexOutOfRange`] when `index` is not below
    /// [`len`](Self::len), which includes every index before the first pass.
    pub fn attributes_for_item(&self, index: usize) -> LayoutResult<&LayoutAttributes> {
        let attributes = self.attributes();
        attributes.get(index).ok_or(LayoutError::IndexOutOfRange {
            index,
            len: attributes.len(),
        })
    }

    /// Contiguous range of item indices to instantiate for `viewport`.
    ///
    /// The range spans the first through the last item intersecting
    /// `viewport`, widened by `overscan` items on each side and clamped to the
    /// cache. Items inside the range that sit in other columns outside the
    /// viewport are included as well. Returns an empty range when nothing
    /// intersects.
    pub fn visible_range(&self, viewport: Rect, overscan: usize) -> Range<usize> {
        let mut hits = self.attributes_in_rect(viewport).map(|item| item.index);
        let Some(first) = hits.next() else {
            return 0..0;
        };
        let last = hits.last().unwrap_or(first);

        let start = first.saturating_sub(overscan);
        let end = last.saturating_add(1).saturating_add(overscan).min(self.len());
        start..end
    }

    /// Captures the content extent and every cached item.
    pub fn snapshot(&self, context: &LayoutContext<'_>) -> LayoutSnapshot {
        LayoutSnapshot {
            content_size: self.content_extent(context),
            items: self.attributes().to_vec(),
        }
    }
}

fn sanitize_item_height(index: usize, height: f64) -> f64 {
    if height.is_finite() && height >= 0.0 {
        height
    } else {
        warn!(index, height, "item height must be finite and non-negative, using 0");
        0.0
    }
}
