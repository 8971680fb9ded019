//! Margin collapsing between neighbouring children.
//!
//! Two adjacent margins merge into one gap equal to the larger of the two,
//! compared numerically: `-5` beats `-10`. Margins at the ends of a sequence
//! are used as-is. A margin of `0` is the same as no margin at all.

/// Main-axis margins of one child, in layout order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarginPair {
    /// Margin before the child.
    pub leading: Option<i32>,
    /// Margin after the child.
    pub trailing: Option<i32>,
}

/// Collapse the trailing margin of one child with the leading margin of
/// the next.
///
/// # Example
///
/// ```
/// use boxkit_layout::margin::collapse;
///
/// assert_eq!(collapse(Some(5), Some(10)), 10);
/// assert_eq!(collapse(Some(-5), Some(-10)), -5);
/// assert_eq!(collapse(Some(5), None), 5);
/// assert_eq!(collapse(Some(0), Some(-5)), -5);
/// assert_eq!(collapse(None, None), 0);
/// ```
pub fn collapse(trailing_of_left: Option<i32>, leading_of_right: Option<i32>) -> i32 {
    match (set(trailing_of_left), set(leading_of_right)) {
        (Some(left), Some(right)) => left.max(right),
        (Some(margin), None) | (None, Some(margin)) => margin,
        (None, None) => 0,
    }
}

/// Margin before the first child of a sequence.
pub fn leading_edge<I>(margins: I) -> i32
where
    I: IntoIterator<Item = MarginPair>,
{
    margins
        .into_iter()
        .next()
        .and_then(|m| set(m.leading))
        .unwrap_or(0)
}

/// A margin that takes part in layout; zero counts as unset.
fn set(margin: Option<i32>) -> Option<i32> {
    margin.filter(|&m| m != 0)
}

/// Total main-axis space taken by spacing and margins for a sequence.
///
/// Counts `spacing` once between each pair of neighbours, the leading
/// margin of the first child, every collapsed inter-child gap and the
/// trailing margin of the last child. An empty sequence takes no space.
///
/// # Example
///
/// ```
/// use boxkit_layout::margin::{spacing_total, MarginPair};
///
/// let margins = [
///     MarginPair { leading: Some(2), trailing: Some(4) },
///     MarginPair { leading: Some(6), trailing: None },
///     MarginPair { leading: None, trailing: Some(3) },
/// ];
/// // 2 + (5 + 6) + (5 + 0) + 3
/// assert_eq!(spacing_total(5, margins), 21);
/// ```
pub fn spacing_total<I>(spacing: i32, margins: I) -> i32
where
    I: IntoIterator<Item = MarginPair>,
{
    let mut iter = margins.into_iter();
    let Some(first) = iter.next() else {
        return 0;
    };

    let mut total = set(first.leading).unwrap_or(0);
    let mut previous = first;
    for next in iter {
        total = total
            .saturating_add(spacing)
            .saturating_add(collapse(previous.trailing, next.leading));
        previous = next;
    }
    total.saturating_add(set(previous.trailing).unwrap_or(0))
}
