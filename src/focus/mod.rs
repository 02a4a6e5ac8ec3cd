//! Focus cycling over the candidate list.
//!
//! The candidate list itself is opaque to this crate: the host supplies
//! it fresh on every rendering pass and this module only computes which
//! index is focused. Navigation wraps cyclically in both directions.

/// Direction of a discrete navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Move focus to the next candidate.
    Next,

    /// Move focus to the previous candidate.
    Previous,
}

impl Direction {
    /// Signed step for this direction.
    pub fn delta(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Previous => -1,
        }
    }
}

/// Advance the focused index by one step with wraparound.
///
/// With no current focus, the first command establishes the last
/// candidate (`count - 1`) as the predictable starting point. Every
/// subsequent step computes `(count + current + delta) mod count`, so the
/// result always lies in `[0, count)` and wraps in both directions. A
/// stale index at or past `count` (the list shrank between rendering
/// passes) is folded back into range by the same arithmetic.
///
/// # Arguments
/// * `current` - Currently focused index, if any
/// * `direction` - Navigation direction
/// * `count` - Number of candidates; must be non-zero
///
/// # Returns
/// * `usize` - The new focused index, always in `[0, count)`
///
/// # Panics
/// Panics if `count == 0`. Navigating an empty candidate list is a
/// caller contract violation and must be guarded before dispatching the
/// command.
pub fn advance(current: Option<usize>, direction: Direction, count: usize) -> usize {
    assert!(count > 0, "cannot navigate an empty candidate list");

    match current {
        None => count - 1,
        Some(index) => {
            let count = count as isize;
            (count + index as isize + direction.delta()).rem_euclid(count) as usize
        }
    }
}
