//! Alignment along one axis.
//!
//! The same [`Align`] value is used for the container's leftover main-axis
//! space (left/center/right in an HBox) and for a child's position on the
//! cross axis (top/middle/bottom in an HBox).

/// Alignment of an extent inside a larger one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Align {
    /// Left in a row, top in a column.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "left", alias = "top"))]
    Start,
    /// Centered.
    #[cfg_attr(feature = "serde", serde(alias = "middle"))]
    Center,
    /// Right in a row, bottom in a column.
    #[cfg_attr(feature = "serde", serde(alias = "right", alias = "bottom"))]
    End,
}

/// Offset of an extent of `child_extent` inside `available_extent`.
///
/// `Center` rounds halves toward positive infinity. A child larger than the
/// available extent yields a negative offset for `Center` and `End`.
///
/// # Example
///
/// ```
/// use boxkit_layout::align::{resolve_offset, Align};
///
/// assert_eq!(resolve_offset(Align::Start, 10, 20), 0);
/// assert_eq!(resolve_offset(Align::Center, 10, 20), 5);
/// assert_eq!(resolve_offset(Align::End, 10, 20), 10);
/// ```
pub const fn resolve_offset(align: Align, child_extent: i32, available_extent: i32) -> i32 {
    let free = available_extent.saturating_sub(child_extent);
    match align {
        Align::Start => 0,
        Align::Center => free.saturating_add(1).div_euclid(2),
        Align::End => free,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_offset_modes() {
        assert_eq!(resolve_offset(Align::Start, 10, 20), 0);
        assert_eq!(resolve_offset(Align::Center, 10, 20), 5);
        assert_eq!(resolve_offset(Align::End, 10, 20), 10);
    }

    #[test]
    fn test_center_rounds_half_up() {
        assert_eq!(resolve_offset(Align::Center, 10, 15), 3);
        assert_eq!(resolve_offset(Align::Center, 10, 11), 1);
        assert_eq!(resolve_offset(Align::Center, 10, 10), 0);
    }

    #[test]
    fn test_center_negative_free_space() {
        // -5 / 2 = -2.5 rounds to -2
        assert_eq!(resolve_offset(Align::Center, 15, 10), -2);
        assert_eq!(resolve_offset(Align::End, 15, 10), -5);
    }

    #[test]
    fn test_default_is_start() {
        assert_eq!(Align::default(), Align::Start);
    }
}
