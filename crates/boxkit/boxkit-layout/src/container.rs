//! Box containers (HBox / VBox)
//!
//! A [`BoxLayout`] arranges its children one after another along its
//! [`Axis`]. The same engine serves both orientations: an HBox is a
//! horizontal `BoxLayout`, a VBox a vertical one.
//!
//! # Layout pass
//!
//! 1. **Order**: children in insertion order, or reversed
//! 2. **Measure**: preferred main sizes plus spacing and collapsed margins
//! 3. **Flex**: grow or shrink stretchable children to fit the available
//!    main extent, bounded by their min/max
//! 4. **Align**: offset the whole run when it leaves space unused
//! 5. **Place**: walk a cursor along the main axis; a child whose start is
//!    past the available extent is excluded
//!
//! # Example
//!
//! ```
//! use boxkit_layout::prelude::*;
//!
//! let mut row: BoxLayout<Spacer, 4> = BoxLayout::hbox().spacing(5);
//! for _ in 0..3 {
//!     row.push(Spacer::new(50, 20)).unwrap();
//! }
//!
//! let result = row.layout(200, 40);
//! assert_eq!(result.used_main, 160);
//! assert_eq!(row.children()[1].bounds().unwrap().top_left.x, 55);
//! ```

use core::cell::Cell;

use embedded_graphics::prelude::Point;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

use crate::align::{resolve_offset, Align};
use crate::config::{BoxConfig, MAX_SIZE_I32};
use crate::flex::{distribute, FlexCandidate};
use crate::margin::{collapse, leading_edge, spacing_total, MarginPair};
use crate::props::LayoutProperties;
use crate::size_hint::{clamp_extent, signed, AxisHint, SizeHint};
use crate::widget::{Axis, Widget};

/// Default maximum number of children in a box.
///
/// This is a compile-time constant to enable `no_std` compatibility.
pub const MAX_CHILDREN: usize = 32;

/// Where one child ended up after a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildPlacement {
    /// Index of the child in insertion order.
    pub index: usize,
    /// Assigned rectangle, or `None` if the child was excluded.
    pub bounds: Option<Rectangle>,
}

impl ChildPlacement {
    /// Whether the child was given a rectangle.
    pub const fn is_included(&self) -> bool {
        self.bounds.is_some()
    }
}

/// Outcome of [`BoxLayout::layout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutResult<const N: usize> {
    /// Placements in layout order (reversed boxes list the last child first).
    pub placements: Vec<ChildPlacement, N>,
    /// Main-axis extent used by the children after flex correction,
    /// including spacing and margins.
    pub used_main: i32,
    /// Offset applied to every child for leftover-space alignment.
    pub align_offset: i32,
}

impl<const N: usize> LayoutResult<N> {
    /// Placement of the child with insertion index `index`.
    pub fn placement(&self, index: usize) -> Option<&ChildPlacement> {
        self.placements.iter().find(|p| p.index == index)
    }

    /// Rectangle of the child with insertion index `index`, if included.
    pub fn bounds(&self, index: usize) -> Option<Rectangle> {
        self.placement(index).and_then(|p| p.bounds)
    }

    /// Number of children that were given a rectangle.
    pub fn included_count(&self) -> usize {
        self.placements.iter().filter(|p| p.is_included()).count()
    }
}

/// Per-child data for one layout pass.
#[derive(Debug, Clone, Copy)]
struct Working {
    index: usize,
    hint: SizeHint,
    main: i32,
}

/// Horizontal or vertical box container.
///
/// # Type Parameters
///
/// - `W`: child widget type (`Box<dyn Widget>` for mixed children)
/// - `N`: maximum number of children (const generic for no_std compatibility)
///
/// The aggregate size hint is cached until the next mutation. The cache is
/// a [`Cell`], so a box can only be read from the thread that owns it.
#[derive(Debug)]
pub struct BoxLayout<W, const N: usize = MAX_CHILDREN> {
    axis: Axis,
    config: BoxConfig,
    children: Vec<W, N>,
    properties: Vec<LayoutProperties, N>,
    hint_cache: Cell<Option<SizeHint>>,
    bounds: Option<Rectangle>,
}

impl<W: Widget, const N: usize> BoxLayout<W, N> {
    /// Create an empty box laid out along `axis` with default configuration.
    pub fn new(axis: Axis) -> Self {
        Self::with_config(axis, BoxConfig::default())
    }

    /// Create an empty box with explicit configuration
    pub fn with_config(axis: Axis, config: BoxConfig) -> Self {
        Self {
            axis,
            config,
            children: Vec::new(),
            properties: Vec::new(),
            hint_cache: Cell::new(None),
            bounds: None,
        }
    }

    /// Create an empty horizontal box (HBox)
    pub fn hbox() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Create an empty vertical box (VBox)
    pub fn vbox() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Set the spacing between children
    pub fn spacing(mut self, spacing: i32) -> Self {
        self.set_spacing(spacing);
        self
    }

    /// Set the leftover-space alignment
    pub fn align(mut self, align: Align) -> Self {
        self.set_align(align);
        self
    }

    /// Set the reversed flag
    pub fn reversed(mut self, reversed: bool) -> Self {
        self.set_reversed(reversed);
        self
    }

    // ── Configuration ───────────────────────────────────────────────────────

    /// Main axis of this box.
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Current configuration.
    pub const fn config(&self) -> BoxConfig {
        self.config
    }

    /// Replace the whole configuration.
    pub fn set_config(&mut self, config: BoxConfig) {
        self.config = config;
        self.invalidate();
    }

    /// Change the spacing between children.
    pub fn set_spacing(&mut self, spacing: i32) {
        self.config.spacing = spacing;
        self.invalidate();
    }

    /// Change the leftover-space alignment.
    pub fn set_align(&mut self, align: Align) {
        self.config.align = align;
        self.invalidate();
    }

    /// Change the traversal order. The stored sequence is not touched.
    pub fn set_reversed(&mut self, reversed: bool) {
        self.config.reversed = reversed;
        self.invalidate();
    }

    /// Drop the cached size hint.
    ///
    /// Mutators on the box call this themselves. Call it directly when a
    /// child changed through a handle the box cannot see.
    pub fn invalidate(&self) {
        self.hint_cache.set(None);
    }

    // ── Children ────────────────────────────────────────────────────────────

    /// Add a child with the given layout properties.
    ///
    /// Returns the child's index.
    ///
    /// # Errors
    ///
    /// Returns the child if the box is full
    pub fn add(&mut self, child: W, properties: LayoutProperties) -> Result<usize, W> {
        let index = self.children.len();
        self.children.push(child)?;
        if self.properties.push(properties).is_err() {
            // Both vectors share the capacity N, so this cannot diverge.
            return self.children.pop().map_or(Ok(index), Err);
        }
        self.invalidate();
        Ok(index)
    }

    /// Add a child with default layout properties.
    ///
    /// # Errors
    ///
    /// Returns the child if the box is full
    pub fn push(&mut self, child: W) -> Result<usize, W> {
        self.add(child, LayoutProperties::new())
    }

    /// Remove the child at `index` together with its layout properties.
    pub fn remove(&mut self, index: usize) -> Option<W> {
        if index >= self.children.len() {
            return None;
        }
        let _ = self.properties.remove(index);
        let child = self.children.remove(index);
        self.invalidate();
        Some(child)
    }

    /// Children in insertion order, regardless of the reversed flag.
    pub fn children(&self) -> &[W] {
        &self.children
    }

    /// Child at `index`.
    pub fn child(&self, index: usize) -> Option<&W> {
        self.children.get(index)
    }

    /// Mutable access to the child at `index`. Invalidates the size hint.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut W> {
        self.invalidate();
        self.children.get_mut(index)
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the box has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Layout properties of the child at `index`.
    pub fn properties(&self, index: usize) -> Option<&LayoutProperties> {
        self.properties.get(index)
    }

    /// Replace the layout properties of the child at `index`.
    ///
    /// Returns the previous properties, or `None` if there is no such child.
    pub fn set_properties(
        &mut self,
        index: usize,
        properties: LayoutProperties,
    ) -> Option<LayoutProperties> {
        let slot = self.properties.get_mut(index)?;
        let previous = core::mem::replace(slot, properties);
        self.invalidate();
        Some(previous)
    }

    /// Rectangle last assigned to this box when nested in another one.
    pub const fn bounds(&self) -> Option<Rectangle> {
        self.bounds
    }

    // ── Layout ──────────────────────────────────────────────────────────────

    /// Aggregate size hint of the box, cached until the next mutation.
    pub fn size_hint(&self) -> SizeHint {
        if let Some(hint) = self.hint_cache.get() {
            return hint;
        }

        let order = self.order();
        let gaps = spacing_total(self.config.spacing, self.margins(&order));

        let mut min = gaps;
        let mut preferred = gaps;
        let mut max = gaps;
        let mut cross_min = 0;
        let mut cross_preferred = 0;
        let mut cross_max = MAX_SIZE_I32;

        for child in order.iter().filter_map(|&i| self.children.get(i)) {
            let hint = child.size_hint();
            let main = hint.main(self.axis);
            let cross = hint.cross(self.axis);

            min = min.saturating_add(signed(main.min));
            preferred = preferred.saturating_add(signed(main.preferred));
            max = max.saturating_add(signed(main.max));

            cross_min = cross_min.max(signed(cross.min));
            cross_preferred = cross_preferred.max(signed(cross.preferred));
            cross_max = cross_max.min(signed(cross.max));
        }

        let hint = SizeHint::from_main_cross(
            self.axis,
            AxisHint {
                min: clamp_extent(min),
                preferred: clamp_extent(preferred),
                max: clamp_extent(max),
            },
            AxisHint {
                min: clamp_extent(cross_min),
                preferred: clamp_extent(cross_preferred),
                max: clamp_extent(cross_max),
            },
        );

        tracing::debug!(
            axis = %self.axis,
            children = self.children.len(),
            hint = ?hint,
            "computed size hint"
        );
        self.hint_cache.set(Some(hint));
        hint
    }

    /// Lay the children out in a `width` × `height` area at the origin.
    ///
    /// Every child receives [`Widget::set_rect`] and [`Widget::include`], or
    /// [`Widget::exclude`] when no room is left for it. Negative sizes count
    /// as zero.
    pub fn layout(&mut self, width: i32, height: i32) -> LayoutResult<N> {
        self.arrange(Point::zero(), width, height)
    }

    fn arrange(&mut self, origin: Point, width: i32, height: i32) -> LayoutResult<N> {
        let axis = self.axis;
        let spacing = self.config.spacing;
        let (available_main, available_cross) = axis.split(width.max(0), height.max(0));

        let order = self.order();
        let mut working: Vec<Working, N> = order
            .iter()
            .filter_map(|&index| {
                self.children.get(index).map(|child| {
                    let hint = child.size_hint();
                    Working {
                        index,
                        hint,
                        main: signed(hint.main(axis).preferred),
                    }
                })
            })
            .collect();

        let gaps = spacing_total(spacing, self.margins(&order));
        let mut used_main = working
            .iter()
            .fold(gaps, |acc, w| acc.saturating_add(w.main));

        tracing::debug!(available = available_main, used = used_main, "initial main extents");

        if used_main != available_main {
            let growing = used_main < available_main;
            let mut candidates: Vec<FlexCandidate, N> = Vec::new();
            for w in &working {
                let props = self.properties.get(w.index).copied().unwrap_or_default();
                let stretchable = self
                    .children
                    .get(w.index)
                    .is_some_and(|child| child.can_stretch(axis));
                if !stretchable || !props.allows_flex() {
                    continue;
                }
                let main = w.hint.main(axis);
                let potential = if growing {
                    main.grow_potential()
                } else {
                    main.shrink_potential()
                };
                let candidate = FlexCandidate::new(w.index, potential, props.flex_weight());
                if candidates.push(candidate).is_err() {
                    break;
                }
            }

            if !candidates.is_empty() {
                let delta = available_main.saturating_sub(used_main);
                let offsets = distribute::<N>(&candidates, delta);
                for (index, offset) in offsets.iter() {
                    if let Some(w) = working.iter_mut().find(|w| w.index == index) {
                        tracing::trace!(child = index, offset, "flex correction");
                        w.main = w.main.saturating_add(offset);
                        used_main = used_main.saturating_add(offset);
                    }
                }
            }

            tracing::debug!(available = available_main, used = used_main, "corrected main extents");
        }

        let align_offset = if used_main < available_main && self.config.align != Align::Start {
            resolve_offset(self.config.align, used_main, available_main)
        } else {
            0
        };

        let mut placements: Vec<ChildPlacement, N> = Vec::new();
        let mut cursor = leading_edge(self.margins(&order));

        for (pos, w) in working.iter().enumerate() {
            let props = self.properties.get(w.index).copied().unwrap_or_default();
            let Some(child) = self.children.get_mut(w.index) else {
                continue;
            };

            let bounds = if cursor < available_main {
                let cross_size = signed(w.hint.cross(axis).preferred).min(available_cross);
                let cross_offset = resolve_offset(props.cross_align(), cross_size, available_cross)
                    .saturating_add(props.cross_shift());
                let main_offset = cursor.saturating_add(align_offset);

                let local = axis.point(main_offset, cross_offset);
                let top_left = Point::new(
                    origin.x.saturating_add(local.x),
                    origin.y.saturating_add(local.y),
                );
                let bounds = Rectangle::new(
                    top_left,
                    axis.size(clamp_extent(w.main), clamp_extent(cross_size)),
                );
                tracing::trace!(child = w.index, bounds = ?bounds, "placed");
                child.set_rect(bounds);
                child.include();
                Some(bounds)
            } else {
                tracing::trace!(child = w.index, cursor, "excluded");
                child.exclude();
                None
            };

            if placements
                .push(ChildPlacement {
                    index: w.index,
                    bounds,
                })
                .is_err()
            {
                break;
            }

            if let Some(next) = working.get(pos.saturating_add(1)) {
                let next_leading = self.properties.get(next.index).and_then(|p| p.margin_leading);
                cursor = cursor
                    .saturating_add(w.main)
                    .saturating_add(spacing)
                    .saturating_add(collapse(props.margin_trailing, next_leading));
            }
        }

        tracing::debug!(
            align_offset,
            included = placements.iter().filter(|p| p.is_included()).count(),
            "layout complete"
        );

        LayoutResult {
            placements,
            used_main,
            align_offset,
        }
    }

    /// Child indices in layout order.
    fn order(&self) -> Vec<usize, N> {
        let count = self.children.len();
        if self.config.reversed {
            (0..count).rev().collect()
        } else {
            (0..count).collect()
        }
    }

    fn margins<'a>(&'a self, order: &'a [usize]) -> impl Iterator<Item = MarginPair> + 'a {
        order.iter().map(|&index| {
            let props = self.properties.get(index).copied().unwrap_or_default();
            MarginPair {
                leading: props.margin_leading,
                trailing: props.margin_trailing,
            }
        })
    }
}

impl<W: Widget, const N: usize> Widget for BoxLayout<W, N> {
    fn size_hint(&self) -> SizeHint {
        Self::size_hint(self)
    }

    fn set_rect(&mut self, bounds: Rectangle) {
        self.bounds = Some(bounds);
        let width = signed(bounds.size.width);
        let height = signed(bounds.size.height);
        let _ = self.arrange(bounds.top_left, width, height);
    }

    fn exclude(&mut self) {
        self.bounds = None;
        for child in self.children.iter_mut() {
            child.exclude();
        }
    }
}
