//! Contract-violation errors
//!
//! Layout itself never fails: underflow excludes children and an exhausted
//! flex pool saturates. These errors only come out of the validating
//! constructors ([`SizeHint::try_new`](crate::size_hint::SizeHint::try_new),
//! [`FlexCandidate::try_new`](crate::flex::FlexCandidate::try_new)).

use crate::widget::Axis;

/// Errors reported by validating constructors.
#[derive(Debug, Clone, Copy, PartialEq, thiserror_no_std::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutError {
    /// A size hint whose bounds are out of order on one axis.
    #[error("invalid {axis} size hint: min {min}, preferred {preferred}, max {max}")]
    InvalidSizeHint {
        /// Axis with the violation.
        axis: Axis,
        /// Reported minimum.
        min: u32,
        /// Reported preferred size.
        preferred: u32,
        /// Reported maximum.
        max: u32,
    },
    /// A flex weight that is zero, negative or not finite.
    #[error("invalid flex weight {value}")]
    InvalidFlex {
        /// Rejected weight.
        value: f32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_size_hint() {
        let err = LayoutError::InvalidSizeHint {
            axis: Axis::Horizontal,
            min: 20,
            preferred: 10,
            max: 30,
        };
        assert_eq!(
            err.to_string(),
            "invalid horizontal size hint: min 20, preferred 10, max 30"
        );
    }

    #[test]
    fn test_display_flex() {
        let err = LayoutError::InvalidFlex { value: -1.0 };
        assert_eq!(err.to_string(), "invalid flex weight -1");
    }
}
