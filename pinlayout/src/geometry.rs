//! Layout-space geometry for the masonry engine.
//!
//! Every value here is expressed in layout units: the same unit the hosting
//! container uses for its bounds and the height provider uses for item
//! heights. The engine never converts between units.
//!
//! # Key Types
//!
//! - [`Point`] - A 2D position (x, y)
//! - [`Size`] - A 2D extent (width, height)
//! - [`Rect`] - An axis-aligned rectangle anchored at its top-left corner
//! - [`EdgeInsets`] - Margins applied to the four sides of the container
//!
//! # Coordinate System
//!
//! - Origin (0, 0) at the top-left corner of the scrollable content
//! - X-axis increases to the right
//! - Y-axis increases downward
//!
//! # Example
//!
//! ```
//! use pinlayout::geometry::{Rect, Size};
//!
//! let cell = Rect::new(0.0, 0.0, 150.0, 52.0);
//! let padded = cell.inset_by(6.0, 6.0);
//! assert_eq!(padded, Rect::new(6.0, 6.0, 138.0, 40.0));
//! assert_eq!(padded.size(), Size::new(138.0, 40.0));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D position in layout space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// The x-coordinate
    pub x: f64,
    /// The y-coordinate
    pub y: f64,
}

impl Point {
    /// A constant representing the origin (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new position from x and y coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A 2D size in layout space.
///
/// Used for the content extent reported to the scroll surface and for the
/// size portion of item frames.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    /// The width
    pub width: f64,
    /// The height
    pub height: f64,
}

impl Size {
    /// A constant representing zero size (0×0).
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new size from width and height.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in layout space.
///
/// The rectangle is anchored at its top-left corner (`x`, `y`) and spans
/// `width` to the right and `height` downward.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// The x-coordinate of the top-left corner
    pub x: f64,
    /// The y-coordinate of the top-left corner
    pub y: f64,
    /// The width of the rectangle
    pub width: f64,
    /// The height of the rectangle
    pub height: f64,
}

impl Rect {
    /// A constant representing a zero rectangle (0×0 at position (0, 0)).
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle from its top-left corner and dimensions.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a new rectangle from a position and size.
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Creates a rectangle spanning every x coordinate between `min_y` and
    /// `max_y`.
    ///
    /// Handy for querying the items that fall into a vertical scroll window
    /// regardless of their column.
    ///
    /// # Examples
    ///
    /// ```
    /// use pinlayout::geometry::Rect;
    ///
    /// let band = Rect::vertical_band(0.0, 60.0);
    /// assert!(band.intersects(&Rect::new(156.0, 6.0, 138.0, 100.0)));
    /// assert!(!band.intersects(&Rect::new(6.0, 60.0, 138.0, 20.0)));
    /// ```
    pub fn vertical_band(min_y: f64, max_y: f64) -> Self {
        Self {
            x: f64::MIN / 2.0,
            y: min_y,
            width: f64::MAX,
            height: (max_y - min_y).max(0.0),
        }
    }

    /// Returns the top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the dimensions.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the smallest x coordinate.
    pub fn min_x(&self) -> f64 {
        self.x
    }

    /// Returns the smallest y coordinate.
    pub fn min_y(&self) -> f64 {
        self.y
    }

    /// Returns the largest x coordinate.
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Returns the largest y coordinate.
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Returns `true` if the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Shrinks the rectangle by `dx` on the left and right edges and by `dy`
    /// on the top and bottom edges.
    ///
    /// The origin moves by (`dx`, `dy`) and each dimension loses twice the
    /// matching margin. Dimensions never go below zero; a margin larger than
    /// half a dimension collapses that dimension around the original center.
    ///
    /// # Examples
    ///
    /// ```
    /// use pinlayout::geometry::Rect;
    ///
    /// let rect = Rect::new(150.0, 0.0, 150.0, 112.0);
    /// assert_eq!(rect.inset_by(6.0, 6.0), Rect::new(156.0, 6.0, 138.0, 100.0));
    ///
    /// let thin = Rect::new(0.0, 0.0, 10.0, 10.0).inset_by(8.0, 0.0);
    /// assert_eq!(thin, Rect::new(5.0, 0.0, 0.0, 10.0));
    /// ```
    pub fn inset_by(&self, dx: f64, dy: f64) -> Self {
        let (x, width) = inset_axis(self.x, self.width, dx);
        let (y, height) = inset_axis(self.y, self.height, dy);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Checks whether this rectangle overlaps another.
    ///
    /// Overlap is strict on both axes: rectangles that only share an edge do
    /// not intersect, and a zero-sized rectangle intersects only when it lies
    /// strictly inside the other rectangle's span.
    ///
    /// # Examples
    ///
    /// ```
    /// use pinlayout::geometry::Rect;
    ///
    /// let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    /// let b = Rect::new(50.0, 50.0, 100.0, 100.0);
    /// let c = Rect::new(100.0, 0.0, 100.0, 100.0);
    /// assert!(a.intersects(&b));
    /// assert!(!a.intersects(&c));
    /// ```
    pub fn intersects(&self, other: &Self) -> bool {
        let x_overlap = self.min_x() < other.max_x() && other.min_x() < self.max_x();
        let y_overlap = self.min_y() < other.max_y() && other.min_y() < self.max_y();
        x_overlap && y_overlap
    }
}

fn inset_axis(start: f64, length: f64, margin: f64) -> (f64, f64) {
    let shrunk = length - margin * 2.0;
    if shrunk >= 0.0 {
        (start + margin, shrunk)
    } else {
        (start + length / 2.0, 0.0)
    }
}

/// Margins on the four sides of a container's content area.
///
/// Only the horizontal insets participate in the layout: they are subtracted
/// from the container bounds to obtain the content width.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EdgeInsets {
    /// Margin above the content
    pub top: f64,
    /// Margin left of the content
    pub left: f64,
    /// Margin below the content
    pub bottom: f64,
    /// Margin right of the content
    pub right: f64,
}

impl EdgeInsets {
    /// No margins on any side.
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Creates insets from the four side margins.
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Creates insets with the same margin on every side.
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Creates insets with only left and right margins.
    pub const fn horizontal(left: f64, right: f64) -> Self {
        Self::new(0.0, left, 0.0, right)
    }

    /// Sum of the left and right margins.
    pub fn horizontal_total(&self) -> f64 {
        self.left + self.right
    }
}
