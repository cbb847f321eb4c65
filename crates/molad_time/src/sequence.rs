//! Lazy molad sequences that run from a seed up to a target month.

use std::iter::FusedIterator;

use tracing::debug;

use crate::advance::checked_advance_one_month;
use crate::instant::LunarInstant;

/// Where a molad sequence halts.
///
/// Reached once the year passes `year`, or the month `month` of `year` is hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StopTarget {
    pub year: i32,
    pub month: u8,
}

impl StopTarget {
    pub fn new(year: i32, month: u8) -> Self {
        Self { year, month }
    }

    /// Whether the sequence halts at `instant`.
    pub fn is_reached_by(&self, instant: &LunarInstant) -> bool {
        instant.year() > self.year || (instant.year() == self.year && instant.month() == self.month)
    }
}

/// Iterator over successive moladot.
///
/// The stop check runs before each advance, so the last item is the first
/// molad that reaches the target. A sequence that would roll past year
/// `i32::MAX` ends at Elul of that year instead. Once exhausted it stays
/// exhausted.
#[derive(Debug, Clone)]
pub struct MoladSequence {
    pending: Option<LunarInstant>,
    target: StopTarget,
}

impl MoladSequence {
    /// Sequence starting with `seed` itself.
    pub fn new(seed: LunarInstant, target: StopTarget) -> Self {
        Self {
            pending: Some(seed),
            target,
        }
    }

    /// Sequence of the moladot after `seed`; empty if `seed` already reaches the target.
    pub fn excluding_seed(seed: LunarInstant, target: StopTarget) -> Self {
        let pending = if target.is_reached_by(&seed) {
            None
        } else {
            checked_advance_one_month(&seed)
        };
        Self { pending, target }
    }

    pub fn target(&self) -> StopTarget {
        self.target
    }
}

impl Iterator for MoladSequence {
    type Item = LunarInstant;

    fn next(&mut self) -> Option<LunarInstant> {
        let current = self.pending.take()?;
        if self.target.is_reached_by(&current) {
            debug!(molad = %current, "molad sequence reached its target");
        } else {
            self.pending = checked_advance_one_month(&current);
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.pending {
            Some(_) => (1, None),
            None => (0, Some(0)),
        }
    }
}

impl FusedIterator for MoladSequence {}

/// Moladot from `seed` (inclusive) up to the first one reaching `target`.
pub fn molad_sequence(seed: LunarInstant, target: StopTarget) -> MoladSequence {
    MoladSequence::new(seed, target)
}
