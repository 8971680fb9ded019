//! Flex distribution of slack or deficit space.
//!
//! When the children of a box do not exactly fill the available main-axis
//! space, the difference is spread over the children that may stretch.
//! Each candidate has a *potential* (how far it may grow or shrink before
//! hitting its max or min) and a *weight* (its flex).
//!
//! # Algorithm
//!
//! 1. Compute each open candidate's share: `weight × remaining / Σweight`.
//! 2. Every candidate whose share reaches its potential is fixed at its
//!    potential and leaves the pool. The fixed amount comes off the
//!    remaining delta, and step 1 runs again over the smaller pool.
//! 3. Once a pass fixes nobody, the remaining delta is split by weight.
//!    Shares are rounded down and the leftover units go, one at a time, to
//!    the candidates with the largest fractional share (earlier candidates
//!    win ties).
//!
//! The returned offsets therefore sum to the delta exactly whenever the
//! pool's total potential covers it. Otherwise every candidate ends at its
//! potential.
//!
//! # Example
//!
//! ```
//! use boxkit_layout::flex::{distribute, FlexCandidate};
//!
//! let pool = [
//!     FlexCandidate::new(0, 10, 1.0), // saturates at 10
//!     FlexCandidate::new(1, 100, 1.0),
//!     FlexCandidate::new(2, 100, 2.0),
//! ];
//! let offsets = distribute::<4>(&pool, 70);
//!
//! assert_eq!(offsets.get(0), Some(10));
//! assert_eq!(offsets.get(1), Some(20));
//! assert_eq!(offsets.get(2), Some(40));
//! assert_eq!(offsets.total(), 70);
//! ```

use heapless::Vec;

use crate::error::LayoutError;

/// One child taking part in flex distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlexCandidate {
    /// Index of the child in its container.
    pub index: usize,
    /// Largest magnitude the child may absorb.
    pub potential: u32,
    /// Relative share of the delta.
    pub weight: f32,
}

impl FlexCandidate {
    /// Create a candidate.
    ///
    /// A weight that is zero, negative or not finite counts as `1` during
    /// distribution.
    pub const fn new(index: usize, potential: u32, weight: f32) -> Self {
        Self {
            index,
            potential,
            weight,
        }
    }

    /// Create a candidate, rejecting unusable weights.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidFlex`] if `weight` is zero, negative or
    /// not finite.
    pub fn try_new(index: usize, potential: u32, weight: f32) -> Result<Self, LayoutError> {
        if weight.is_finite() && weight > 0.0 {
            Ok(Self::new(index, potential, weight))
        } else {
            Err(LayoutError::InvalidFlex { value: weight })
        }
    }

    /// Weight actually used by the distributor.
    pub fn effective_weight(&self) -> f32 {
        if self.weight.is_finite() && self.weight > 0.0 {
            self.weight
        } else {
            1.0
        }
    }
}

/// Signed offsets produced by [`distribute`], keyed by child index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlexOffsets<const N: usize> {
    entries: Vec<(usize, i32), N>,
}

impl<const N: usize> FlexOffsets<N> {
    /// Offset for the child at `index`, if it was a candidate.
    pub fn get(&self, index: usize) -> Option<i32> {
        self.entries
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, offset)| *offset)
    }

    /// `(index, offset)` pairs in candidate order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, i32)> + '_ {
        self.entries.iter().copied()
    }

    /// Sum of all offsets.
    pub fn total(&self) -> i64 {
        self.entries.iter().map(|(_, offset)| i64::from(*offset)).sum()
    }

    /// Number of candidates that received an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no candidate received an entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    index: usize,
    capacity: u32,
    weight: f64,
    allocated: u32,
    fraction: f64,
    open: bool,
}

/// Spread `total_delta` over `candidates`.
///
/// Positive deltas grow children, negative deltas shrink them. No offset
/// exceeds its candidate's potential in magnitude. At most `N` candidates
/// are considered; later ones are ignored.
#[allow(
    clippy::cast_possible_truncation, // shares are below the slot capacity, a u32
    clippy::cast_sign_loss            // shares are non-negative
)]
pub fn distribute<const N: usize>(candidates: &[FlexCandidate], total_delta: i32) -> FlexOffsets<N> {
    let mut slots: Vec<Slot, N> = candidates
        .iter()
        .take(N)
        .map(|c| Slot {
            index: c.index,
            capacity: c.potential,
            weight: f64::from(c.effective_weight()),
            allocated: 0,
            fraction: 0.0,
            open: true,
        })
        .collect();

    let mut remaining = total_delta.unsigned_abs();

    while remaining > 0 {
        let total_weight: f64 = slots.iter().filter(|s| s.open).map(|s| s.weight).sum();
        if total_weight <= 0.0 {
            break;
        }
        let unit = f64::from(remaining) / total_weight;

        // Saturation pass: fix everyone whose share reaches their bound.
        let mut fixed: u32 = 0;
        let mut closed = false;
        for slot in slots.iter_mut().filter(|s| s.open) {
            if slot.weight * unit >= f64::from(slot.capacity) {
                slot.allocated = slot.capacity;
                slot.open = false;
                fixed = fixed.saturating_add(slot.capacity);
                closed = true;
            }
        }

        if closed {
            tracing::trace!(remaining, fixed, "flex pool saturated");
            remaining = remaining.saturating_sub(fixed);
            continue;
        }

        // Nobody saturated: split what is left by weight.
        let mut handed: u32 = 0;
        for slot in slots.iter_mut().filter(|s| s.open) {
            let share = slot.weight * unit;
            let whole = (share as u32).min(slot.capacity);
            slot.allocated = whole;
            slot.fraction = share - f64::from(whole);
            handed = handed.saturating_add(whole);
        }

        let mut leftover = remaining.saturating_sub(handed);
        while leftover > 0 {
            let mut best: Option<usize> = None;
            for (pos, slot) in slots.iter().enumerate() {
                if !slot.open || slot.allocated >= slot.capacity {
                    continue;
                }
                let better = match best.and_then(|b| slots.get(b)) {
                    Some(current) => slot.fraction > current.fraction,
                    None => true,
                };
                if better {
                    best = Some(pos);
                }
            }
            let Some(slot) = best.and_then(|b| slots.get_mut(b)) else {
                break;
            };
            slot.allocated = slot.allocated.saturating_add(1);
            slot.fraction -= 1.0;
            leftover = leftover.saturating_sub(1);
        }
        break;
    }

    let negative = total_delta < 0;
    let entries = slots
        .iter()
        .map(|slot| {
            let magnitude = i64::from(slot.allocated);
            let offset = if negative { magnitude.saturating_neg() } else { magnitude };
            let offset = i32::try_from(offset).unwrap_or(if negative { i32::MIN } else { i32::MAX });
            (slot.index, offset)
        })
        .collect();

    FlexOffsets { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(entries: &[(u32, f32)]) -> std::vec::Vec<FlexCandidate> {
        entries
            .iter()
            .enumerate()
            .map(|(i, &(potential, weight))| FlexCandidate::new(i, potential, weight))
            .collect()
    }

    #[test]
    fn test_single_candidate_absorbs_everything() {
        let offsets = distribute::<4>(&pool(&[(100, 1.0)]), 60);
        assert_eq!(offsets.get(0), Some(60));
        assert_eq!(offsets.total(), 60);
    }

    #[test]
    fn test_equal_weights_split_evenly() {
        let offsets = distribute::<4>(&pool(&[(100, 1.0), (100, 1.0)]), 40);
        assert_eq!(offsets.get(0), Some(20));
        assert_eq!(offsets.get(1), Some(20));
    }

    #[test]
    fn test_weights_are_proportional() {
        let offsets = distribute::<4>(&pool(&[(100, 1.0), (100, 3.0)]), 40);
        assert_eq!(offsets.get(0), Some(10));
        assert_eq!(offsets.get(1), Some(30));
    }

    #[test]
    fn test_rounding_remainder_is_handed_out() {
        // 10 / 3 = 3.33 each; one extra unit goes to the first candidate
        let offsets = distribute::<4>(&pool(&[(100, 1.0), (100, 1.0), (100, 1.0)]), 10);
        assert_eq!(offsets.get(0), Some(4));
        assert_eq!(offsets.get(1), Some(3));
        assert_eq!(offsets.get(2), Some(3));
        assert_eq!(offsets.total(), 10);
    }

    #[test]
    fn test_remainder_prefers_largest_fraction() {
        // shares: 7 × 1/3 = 2.33, 7 × 2/3 = 4.67; the second gets the spare unit
        let offsets = distribute::<4>(&pool(&[(100, 1.0), (100, 2.0)]), 7);
        assert_eq!(offsets.get(0), Some(2));
        assert_eq!(offsets.get(1), Some(5));
    }

    #[test]
    fn test_saturated_candidate_folds_back() {
        let offsets = distribute::<4>(&pool(&[(5, 1.0), (100, 1.0)]), 30);
        assert_eq!(offsets.get(0), Some(5));
        assert_eq!(offsets.get(1), Some(25));
    }

    #[test]
    fn test_cascading_saturation() {
        // First pass (10 each) fixes the 2; second pass (14 each) fixes the 12
        let offsets = distribute::<4>(&pool(&[(2, 1.0), (12, 1.0), (100, 1.0)]), 30);
        assert_eq!(offsets.get(0), Some(2));
        assert_eq!(offsets.get(1), Some(12));
        assert_eq!(offsets.get(2), Some(16));
    }

    #[test]
    fn test_exhausted_pool_saturates_everyone() {
        let offsets = distribute::<4>(&pool(&[(5, 1.0), (7, 2.0)]), 100);
        assert_eq!(offsets.get(0), Some(5));
        assert_eq!(offsets.get(1), Some(7));
        assert_eq!(offsets.total(), 12);
    }

    #[test]
    fn test_negative_delta_shrinks() {
        let offsets = distribute::<4>(&pool(&[(10, 1.0), (50, 1.0)]), -40);
        assert_eq!(offsets.get(0), Some(-10));
        assert_eq!(offsets.get(1), Some(-30));
        assert_eq!(offsets.total(), -40);
    }

    #[test]
    fn test_negative_delta_exhausted() {
        let offsets = distribute::<4>(&pool(&[(10, 1.0), (5, 1.0)]), -100);
        assert_eq!(offsets.total(), -15);
    }

    #[test]
    fn test_zero_delta_gives_zero_offsets() {
        let offsets = distribute::<4>(&pool(&[(10, 1.0), (5, 1.0)]), 0);
        assert_eq!(offsets.len(), 2);
        assert_eq!(offsets.get(0), Some(0));
        assert_eq!(offsets.total(), 0);
    }

    #[test]
    fn test_zero_potential_candidate_gets_nothing() {
        let offsets = distribute::<4>(&pool(&[(0, 1.0), (50, 1.0)]), 20);
        assert_eq!(offsets.get(0), Some(0));
        assert_eq!(offsets.get(1), Some(20));
    }

    #[test]
    fn test_invalid_weight_counts_as_one() {
        let with_bad = distribute::<4>(&pool(&[(100, 0.0), (100, f32::NAN), (100, 1.0)]), 30);
        assert_eq!(with_bad.get(0), Some(10));
        assert_eq!(with_bad.get(1), Some(10));
        assert_eq!(with_bad.get(2), Some(10));
    }

    #[test]
    fn test_try_new_rejects_bad_weights() {
        assert!(FlexCandidate::try_new(0, 10, 1.5).is_ok());
        assert_eq!(
            FlexCandidate::try_new(0, 10, 0.0),
            Err(LayoutError::InvalidFlex { value: 0.0 })
        );
        assert!(FlexCandidate::try_new(0, 10, -2.0).is_err());
        assert!(FlexCandidate::try_new(0, 10, f32::INFINITY).is_err());
    }

    #[test]
    fn test_empty_pool() {
        let offsets = distribute::<4>(&[], 50);
        assert!(offsets.is_empty());
        assert_eq!(offsets.total(), 0);
    }

    #[test]
    fn test_capacity_limits_candidates() {
        let offsets = distribute::<2>(&pool(&[(100, 1.0), (100, 1.0), (100, 1.0)]), 30);
        assert_eq!(offsets.len(), 2);
        assert_eq!(offsets.get(2), None);
        assert_eq!(offsets.total(), 30);
    }

    #[test]
    fn test_keyed_by_child_index() {
        let candidates = [FlexCandidate::new(7, 50, 1.0), FlexCandidate::new(3, 50, 1.0)];
        let offsets = distribute::<4>(&candidates, 10);
        assert_eq!(offsets.get(7), Some(5));
        assert_eq!(offsets.get(3), Some(5));
        assert_eq!(offsets.get(0), None);
        let pairs: std::vec::Vec<_> = offsets.iter().collect();
        assert_eq!(pairs, [(7, 5), (3, 5)]);
    }
}
