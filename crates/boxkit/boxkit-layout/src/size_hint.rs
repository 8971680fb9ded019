//! Size hints reported by widgets.
//!
//! A [`SizeHint`] carries a minimum, preferred and maximum extent for each
//! axis. Every value lives in `[0, MAX_SIZE]` and each axis keeps
//! `min <= preferred <= max`.
//!
//! Malformed input is a contract violation. [`SizeHint::new`] resolves it by
//! clamping (values into range, `max` raised to `min`, `preferred` pulled
//! into `[min, max]`); [`SizeHint::try_new`] rejects it instead.

use crate::config::{MAX_SIZE, MAX_SIZE_I32};
use crate::error::LayoutError;
use crate::widget::Axis;

/// Min/preferred/max extents of a widget on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SizeHint {
    /// Smallest acceptable width.
    pub min_width: u32,
    /// Preferred width.
    pub width: u32,
    /// Largest acceptable width.
    pub max_width: u32,
    /// Smallest acceptable height.
    pub min_height: u32,
    /// Preferred height.
    pub height: u32,
    /// Largest acceptable height.
    pub max_height: u32,
}

/// The three extents of a [`SizeHint`] along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisHint {
    /// Minimum extent.
    pub min: u32,
    /// Preferred extent.
    pub preferred: u32,
    /// Maximum extent.
    pub max: u32,
}

impl AxisHint {
    /// Room to grow from the preferred extent.
    pub const fn grow_potential(self) -> u32 {
        self.max.saturating_sub(self.preferred)
    }

    /// Room to shrink from the preferred extent.
    pub const fn shrink_potential(self) -> u32 {
        self.preferred.saturating_sub(self.min)
    }

    fn normalized(self) -> Self {
        let min = self.min.min(MAX_SIZE);
        let max = self.max.min(MAX_SIZE).max(min);
        let preferred = self.preferred.clamp(min, max);
        Self { min, preferred, max }
    }

    fn is_ordered(self) -> bool {
        self.min <= self.preferred && self.preferred <= self.max
    }
}

impl SizeHint {
    /// Create a hint, clamping malformed values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boxkit_layout::size_hint::SizeHint;
    ///
    /// // preferred below min is raised, max above the ceiling is lowered
    /// let hint = SizeHint::new(50, 10, 40_000, 0, 20, 30);
    /// assert_eq!(hint.width, 50);
    /// assert_eq!(hint.max_width, 32_000);
    /// ```
    pub fn new(
        min_width: u32,
        width: u32,
        max_width: u32,
        min_height: u32,
        height: u32,
        max_height: u32,
    ) -> Self {
        let w = AxisHint {
            min: min_width,
            preferred: width,
            max: max_width,
        }
        .normalized();
        let h = AxisHint {
            min: min_height,
            preferred: height,
            max: max_height,
        }
        .normalized();
        Self::from_axes(w, h)
    }

    /// Create a hint, rejecting out-of-order bounds.
    ///
    /// Values above `MAX_SIZE` are still clamped; only ordering is checked.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidSizeHint`] if `min > preferred` or
    /// `preferred > max` on either axis.
    pub fn try_new(
        min_width: u32,
        width: u32,
        max_width: u32,
        min_height: u32,
        height: u32,
        max_height: u32,
    ) -> Result<Self, LayoutError> {
        let axes = [
            (
                Axis::Horizontal,
                AxisHint {
                    min: min_width,
                    preferred: width,
                    max: max_width,
                },
            ),
            (
                Axis::Vertical,
                AxisHint {
                    min: min_height,
                    preferred: height,
                    max: max_height,
                },
            ),
        ];
        for (axis, hint) in axes {
            if !hint.is_ordered() {
                return Err(LayoutError::InvalidSizeHint {
                    axis,
                    min: hint.min,
                    preferred: hint.preferred,
                    max: hint.max,
                });
            }
        }
        Ok(Self::new(
            min_width, width, max_width, min_height, height, max_height,
        ))
    }

    /// A hint that cannot grow or shrink.
    pub fn fixed(width: u32, height: u32) -> Self {
        Self::new(width, width, width, height, height, height)
    }

    /// A hint with the given preferred size, no minimum and an unbounded maximum.
    pub fn flexible(width: u32, height: u32) -> Self {
        Self::new(0, width, MAX_SIZE, 0, height, MAX_SIZE)
    }

    /// Build a hint from signed working values, clamping each into `[0, MAX_SIZE]`.
    pub fn from_signed(min: (i32, i32), preferred: (i32, i32), max: (i32, i32)) -> Self {
        Self::new(
            clamp_extent(min.0),
            clamp_extent(preferred.0),
            clamp_extent(max.0),
            clamp_extent(min.1),
            clamp_extent(preferred.1),
            clamp_extent(max.1),
        )
    }

    /// Extents along `axis`.
    pub const fn along(&self, axis: Axis) -> AxisHint {
        match axis {
            Axis::Horizontal => AxisHint {
                min: self.min_width,
                preferred: self.width,
                max: self.max_width,
            },
            Axis::Vertical => AxisHint {
                min: self.min_height,
                preferred: self.height,
                max: self.max_height,
            },
        }
    }

    /// Extents along the main axis of a container laid out on `axis`.
    pub const fn main(&self, axis: Axis) -> AxisHint {
        self.along(axis)
    }

    /// Extents along the cross axis of a container laid out on `axis`.
    pub const fn cross(&self, axis: Axis) -> AxisHint {
        self.along(axis.cross())
    }

    /// Assemble a hint from main-axis and cross-axis extents.
    pub fn from_main_cross(axis: Axis, main: AxisHint, cross: AxisHint) -> Self {
        let (w, h) = axis.split(main, cross);
        Self::from_axes(w.normalized(), h.normalized())
    }

    const fn from_axes(w: AxisHint, h: AxisHint) -> Self {
        Self {
            min_width: w.min,
            width: w.preferred,
            max_width: w.max,
            min_height: h.min,
            height: h.preferred,
            max_height: h.max,
        }
    }
}

impl Default for SizeHint {
    /// Prefers nothing, accepts anything.
    fn default() -> Self {
        Self::flexible(0, 0)
    }
}

/// Clamp a signed working extent into `[0, MAX_SIZE]`.
#[allow(clippy::cast_sign_loss)] // clamped to be non-negative first
pub const fn clamp_extent(value: i32) -> u32 {
    if value < 0 {
        0
    } else if value > MAX_SIZE_I32 {
        MAX_SIZE
    } else {
        value as u32
    }
}

/// Widen an extent for signed working arithmetic.
#[allow(clippy::cast_possible_wrap)] // extents are capped at MAX_SIZE
pub const fn signed(value: u32) -> i32 {
    if value > MAX_SIZE {
        MAX_SIZE_I32
    } else {
        value as i32
    }
}
