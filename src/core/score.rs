//! Score tracking across rounds

/// Points added for a won round
pub const WIN_REWARD: u32 = 10;

/// Points taken away for a lost round
pub const LOSS_PENALTY: u32 = 5;

/// Current session score and the all-time high score
///
/// `high` never decreases and is always at least `current`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreState {
    current: u32,
    high: u32,
}

impl ScoreState {
    /// Start a session with a previously stored high score
    #[must_use]
    pub const fn with_high_score(high: u32) -> Self {
        Self { current: 0, high }
    }

    #[inline]
    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current
    }

    #[inline]
    #[must_use]
    pub const fn high(&self) -> u32 {
        self.high
    }

    /// Apply a win
    ///
    /// Returns `true` when the high score was raised and needs saving.
    pub fn record_win(&mut self) -> bool {
        self.current = self.current.saturating_add(WIN_REWARD);
        if self.current > self.high {
            self.high = self.current;
            true
        } else {
            false
        }
    }

    /// Apply a loss, flooring the current score at zero
    pub fn record_loss(&mut self) {
        self.current = self.current.saturating_sub(LOSS_PENALTY);
    }
}
