//! Layout configuration and shared constants
//!
//! Every component that clamps a size reads [`MAX_SIZE`] from here rather
//! than hardcoding the value. Container-level settings live in
//! [`BoxConfig`].

use crate::align::Align;

/// Largest extent any size hint may report. Acts as "unbounded".
pub const MAX_SIZE: u32 = 32_000;

/// [`MAX_SIZE`] as a signed value, for working arithmetic.
#[allow(clippy::cast_possible_wrap)] // 32_000 fits in i32
pub const MAX_SIZE_I32: i32 = MAX_SIZE as i32;

/// Spacing between children when none is configured.
pub const DEFAULT_SPACING: i32 = 5;

/// Leftover-space alignment when none is configured.
pub const DEFAULT_ALIGN: Align = Align::Start;

/// Flex weight used for a stretchable child without an explicit flex.
pub const DEFAULT_FLEX: f32 = 1.0;

/// Configuration of a box container.
///
/// # Example
///
/// ```
/// use boxkit_layout::config::BoxConfig;
/// use boxkit_layout::align::Align;
///
/// let config = BoxConfig::new().spacing(8).align(Align::Center).reversed(true);
/// assert_eq!(config.spacing, 8);
/// assert!(config.reversed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoxConfig {
    /// Gap between two neighbouring children, on top of their margins.
    pub spacing: i32,
    /// Alignment of the children as a block when they leave space unused.
    pub align: Align,
    /// Lay the children out last-to-first.
    pub reversed: bool,
}

impl BoxConfig {
    /// Configuration with the toolkit defaults.
    pub const fn new() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            align: DEFAULT_ALIGN,
            reversed: false,
        }
    }

    /// Set the spacing
    pub const fn spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the leftover-space alignment
    pub const fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set the reversed flag
    pub const fn reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoxConfig::default();
        assert_eq!(config.spacing, 5);
        assert_eq!(config.align, Align::Start);
        assert!(!config.reversed);
    }

    #[test]
    fn test_builder_methods() {
        let config = BoxConfig::new().spacing(0).align(Align::End).reversed(true);
        assert_eq!(config.spacing, 0);
        assert_eq!(config.align, Align::End);
        assert!(config.reversed);
    }

    #[test]
    fn test_max_size_signed_matches() {
        assert_eq!(i64::from(MAX_SIZE_I32), i64::from(MAX_SIZE));
    }
}
