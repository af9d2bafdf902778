//! Success/fail counters.

use serde::{Deserialize, Serialize};

/// Which counter the most recent step affected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Highlight {
    /// Neutral: the last step was a first pick.
    #[default]
    None,
    /// The last second pick matched.
    Success,
    /// The last second pick did not match.
    Fail,
}

/// Running counts of completed pair attempts, as shown to the player.
///
/// A UI draws two labelled counters and applies a colour cue to the one
/// named by `highlight`. Counts only grow. A restart keeps the tally; a new
/// engine starts at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tally {
    /// Pairs that matched.
    pub success: u32,
    /// Pairs that did not match.
    pub fail: u32,
    /// Counter touched by the most recent step.
    pub highlight: Highlight,
}

impl Tally {
    /// A zeroed tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total completed attempts.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.success + self.fail
    }

    pub(crate) fn record_success(&mut self) {
        self.success += 1;
        self.highlight = Highlight::Success;
    }

    pub(crate) fn record_fail(&mut self) {
        self.fail += 1;
        self.highlight = Highlight::Fail;
    }

    pub(crate) fn clear_highlight(&mut self) {
        self.highlight = Highlight::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record() {
        let mut tally = Tally::new();
        assert_eq!(tally.attempts(), 0);
        assert_eq!(tally.highlight, Highlight::None);

        tally.record_success();
        assert_eq!(tally.success, 1);
        assert_eq!(tally.highlight, Highlight::Success);

        tally.record_fail();
        tally.record_fail();
        assert_eq!(tally.fail, 2);
        assert_eq!(tally.highlight, Highlight::Fail);
        assert_eq!(tally.attempts(), 3);

        tally.clear_highlight();
        assert_eq!(tally.highlight, Highlight::None);
        assert_eq!(tally.attempts(), 3);
    }
}
