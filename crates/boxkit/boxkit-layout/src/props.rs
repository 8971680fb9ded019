//! Per-child layout properties.
//!
//! A container attaches one [`LayoutProperties`] record to each child when it
//! is added and drops it when the child is removed. "Leading" and
//! "trailing" are interpreted against the container's axis: for an HBox the
//! main-axis margins are left/right and the cross-axis offsets are
//! top/bottom; for a VBox they are top/bottom and left/right.
//!
//! # Example
//!
//! ```
//! use boxkit_layout::props::LayoutProperties;
//! use boxkit_layout::align::Align;
//!
//! let props = LayoutProperties::new()
//!     .flex(2.0)
//!     .align(Align::Center)
//!     .margins(4, 8);
//! assert_eq!(props.margin_trailing, Some(8));
//! ```

use crate::align::Align;
use crate::config::DEFAULT_FLEX;

/// Layout properties of one child inside a box container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayoutProperties {
    /// Share of distributed space. `None` means the default weight; `0`
    /// keeps the child at its preferred size.
    pub flex: Option<f32>,
    /// Cross-axis alignment. `None` means [`Align::Start`].
    pub align: Option<Align>,
    /// Margin before the child on the main axis.
    pub margin_leading: Option<i32>,
    /// Margin after the child on the main axis.
    pub margin_trailing: Option<i32>,
    /// Relative shift away from the leading cross edge.
    pub offset_leading: Option<i32>,
    /// Relative shift away from the trailing cross edge. Ignored when
    /// `offset_leading` is set to a non-zero value.
    pub offset_trailing: Option<i32>,
}

impl LayoutProperties {
    /// Properties with nothing set.
    pub const fn new() -> Self {
        Self {
            flex: None,
            align: None,
            margin_leading: None,
            margin_trailing: None,
            offset_leading: None,
            offset_trailing: None,
        }
    }

    /// Set the flex weight
    pub const fn flex(mut self, flex: f32) -> Self {
        self.flex = Some(flex);
        self
    }

    /// Set the cross-axis alignment
    pub const fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Set the leading main-axis margin
    pub const fn margin_leading(mut self, margin: i32) -> Self {
        self.margin_leading = Some(margin);
        self
    }

    /// Set the trailing main-axis margin
    pub const fn margin_trailing(mut self, margin: i32) -> Self {
        self.margin_trailing = Some(margin);
        self
    }

    /// Set both main-axis margins
    pub const fn margins(self, leading: i32, trailing: i32) -> Self {
        self.margin_leading(leading).margin_trailing(trailing)
    }

    /// Set the leading cross-axis offset
    pub const fn offset_leading(mut self, offset: i32) -> Self {
        self.offset_leading = Some(offset);
        self
    }

    /// Set the trailing cross-axis offset
    pub const fn offset_trailing(mut self, offset: i32) -> Self {
        self.offset_trailing = Some(offset);
        self
    }

    /// Whether a child with these properties may join the flex pool.
    ///
    /// Only an explicit non-positive flex opts out.
    pub fn allows_flex(&self) -> bool {
        self.flex.map_or(true, |flex| flex > 0.0)
    }

    /// Weight of the child in the flex pool.
    pub fn flex_weight(&self) -> f32 {
        self.flex.unwrap_or(DEFAULT_FLEX)
    }

    /// Cross-axis alignment with the default applied.
    pub fn cross_align(&self) -> Align {
        self.align.unwrap_or_default()
    }

    /// Net shift applied to the cross-axis offset. The leading offset wins
    /// when both are set; a zero offset counts as unset.
    pub fn cross_shift(&self) -> i32 {
        let leading = self.offset_leading.filter(|&o| o != 0);
        let trailing = self.offset_trailing.filter(|&o| o != 0);
        match (leading, trailing) {
            (Some(leading), _) => leading,
            (None, Some(trailing)) => trailing.saturating_neg(),
            (None, None) => 0,
        }
    }
}
