//! Widget collaborator interface.
//!
//! The layout engine never draws anything. It talks to its children through
//! the [`Widget`] trait: a child reports a [`SizeHint`] and whether it may be
//! stretched, and receives back a rectangle plus an include/exclude signal.
//!
//! ## Example
//!
//! ```rust
//! use boxkit_layout::size_hint::SizeHint;
//! use boxkit_layout::widget::{Axis, Widget};
//! use embedded_graphics::primitives::Rectangle;
//!
//! struct Label {
//!     bounds: Option<Rectangle>,
//! }
//!
//! impl Widget for Label {
//!     fn size_hint(&self) -> SizeHint {
//!         SizeHint::fixed(80, 16)
//!     }
//!
//!     fn can_stretch(&self, _axis: Axis) -> bool {
//!         false
//!     }
//!
//!     fn set_rect(&mut self, bounds: Rectangle) {
//!         self.bounds = Some(bounds);
//!     }
//! }
//! ```

use core::fmt;

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::config::MAX_SIZE;
use crate::size_hint::SizeHint;

#[cfg(feature = "std")]
use std::boxed::Box;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

/// Layout axis of a box container.
///
/// The main axis is the one children are sequenced along; the cross axis is
/// perpendicular to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Children run left to right (HBox).
    Horizontal,
    /// Children run top to bottom (VBox).
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Split a `(width, height)` pair into `(main, cross)`.
    pub const fn split<T>(self, width: T, height: T) -> (T, T)
    where
        T: Copy,
    {
        match self {
            Self::Horizontal => (width, height),
            Self::Vertical => (height, width),
        }
    }

    /// Build a point from main/cross coordinates.
    pub const fn point(self, main: i32, cross: i32) -> Point {
        let (x, y) = self.split(main, cross);
        Point::new(x, y)
    }

    /// Build a size from main/cross extents.
    pub const fn size(self, main: u32, cross: u32) -> Size {
        let (width, height) = self.split(main, cross);
        Size::new(width, height)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}

/// A child that can be arranged by a box container.
pub trait Widget {
    /// Current size hint of the widget.
    fn size_hint(&self) -> SizeHint;

    /// Whether the container may grow or shrink this widget along `axis`.
    fn can_stretch(&self, axis: Axis) -> bool {
        let _ = axis;
        true
    }

    /// Receive the final rectangle computed by the container.
    fn set_rect(&mut self, bounds: Rectangle);

    /// The widget takes part in rendering.
    fn include(&mut self) {}

    /// The widget has no room left and is hidden, but stays in the sequence.
    fn exclude(&mut self) {}
}

impl<W: Widget + ?Sized> Widget for &mut W {
    fn size_hint(&self) -> SizeHint {
        (**self).size_hint()
    }

    fn can_stretch(&self, axis: Axis) -> bool {
        (**self).can_stretch(axis)
    }

    fn set_rect(&mut self, bounds: Rectangle) {
        (**self).set_rect(bounds);
    }

    fn include(&mut self) {
        (**self).include();
    }

    fn exclude(&mut self) {
        (**self).exclude();
    }
}

impl<W: Widget + ?Sized> Widget for Box<W> {
    fn size_hint(&self) -> SizeHint {
        (**self).size_hint()
    }

    fn can_stretch(&self, axis: Axis) -> bool {
        (**self).can_stretch(axis)
    }

    fn set_rect(&mut self, bounds: Rectangle) {
        (**self).set_rect(bounds);
    }

    fn include(&mut self) {
        (**self).include();
    }

    fn exclude(&mut self) {
        (**self).exclude();
    }
}

/// Blank space in a layout.
///
/// A fixed spacer always claims the same extent. A flexible spacer prefers
/// nothing and soaks up any leftover space it is offered.
///
/// # Example
///
/// ```rust
/// use boxkit_layout::widget::Spacer;
///
/// // Fixed 20×10 block
/// let spacer = Spacer::new(20, 10);
///
/// // Horizontal gap only
/// let h_spacer = Spacer::width(20);
///
/// // Pushes its neighbours apart
/// let filler = Spacer::flexible();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacer {
    hint: SizeHint,
    bounds: Option<Rectangle>,
    visible: bool,
}

impl Spacer {
    /// Create a fixed spacer with the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_hint(SizeHint::fixed(width, height))
    }

    /// Create a fixed spacer with a specific width (height = 0)
    pub fn width(width: u32) -> Self {
        Self::new(width, 0)
    }

    /// Create a fixed spacer with a specific height (width = 0)
    pub fn height(height: u32) -> Self {
        Self::new(0, height)
    }

    /// Create a spacer that prefers zero size and grows without bound.
    pub fn flexible() -> Self {
        Self::with_hint(SizeHint::new(0, 0, MAX_SIZE, 0, 0, MAX_SIZE))
    }

    /// Create a spacer reporting an arbitrary hint
    pub const fn with_hint(hint: SizeHint) -> Self {
        Self {
            hint,
            bounds: None,
            visible: false,
        }
    }

    /// Rectangle assigned by the last layout pass, if any.
    pub const fn bounds(&self) -> Option<Rectangle> {
        self.bounds
    }

    /// Whether the last layout pass included this spacer.
    pub const fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Widget for Spacer {
    fn size_hint(&self) -> SizeHint {
        self.hint
    }

    fn set_rect(&mut self, bounds: Rectangle) {
        self.bounds = Some(bounds);
    }

    fn include(&mut self) {
        self.visible = true;
    }

    fn exclude(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_cross() {
        assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
        assert_eq!(Axis::Vertical.cross(), Axis::Horizontal);
    }

    #[test]
    fn test_axis_split_and_rebuild() {
        assert_eq!(Axis::Horizontal.split(10, 20), (10, 20));
        assert_eq!(Axis::Vertical.split(10, 20), (20, 10));
        assert_eq!(Axis::Vertical.point(5, 7), Point::new(7, 5));
        assert_eq!(Axis::Vertical.size(30, 40), Size::new(40, 30));
    }

    #[test]
    fn test_axis_display() {
        assert_eq!(Axis::Horizontal.to_string(), "horizontal");
        assert_eq!(Axis::Vertical.to_string(), "vertical");
    }

    #[test]
    fn test_spacer_records_layout() {
        let mut spacer = Spacer::new(20, 10);
        assert_eq!(spacer.bounds(), None);
        assert!(!spacer.is_visible());

        let rect = Rectangle::new(Point::new(3, 4), Size::new(20, 10));
        spacer.set_rect(rect);
        spacer.include();
        assert_eq!(spacer.bounds(), Some(rect));
        assert!(spacer.is_visible());

        spacer.exclude();
        assert!(!spacer.is_visible());
    }

    #[test]
    fn test_spacer_hints() {
        assert_eq!(Spacer::width(20).size_hint(), SizeHint::fixed(20, 0));
        assert_eq!(Spacer::height(10).size_hint(), SizeHint::fixed(0, 10));

        let filler = Spacer::flexible().size_hint();
        assert_eq!(filler.width, 0);
        assert_eq!(filler.max_width, MAX_SIZE);
    }

    #[test]
    fn test_boxed_widget_forwards() {
        let mut boxed: Box<dyn Widget> = Box::new(Spacer::new(5, 6));
        assert_eq!(boxed.size_hint(), SizeHint::fixed(5, 6));
        assert!(boxed.can_stretch(Axis::Horizontal));
        boxed.set_rect(Rectangle::new(Point::zero(), Size::new(5, 6)));
    }
}
