//! Mutable generator state

/// Last issued millisecond and its sequence counter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State {
    /// Unix millisecond of the last issued ID, 0 until first use
    pub last_use_time: u64,
    pub sequence: u64,
}

impl State {
    /// Advance to the reading `now` and return the claimed (millisecond, sequence)
    ///
    /// The caller guarantees the sequence has headroom whenever
    /// `now == last_use_time`.
    #[inline]
    pub fn advance(&mut self, now: u64) -> (u64, u64) {
        if now == self.last_use_time {
            self.sequence += 1;
        } else {
            self.last_use_time = now;
            self.sequence = 0;
        }
        (self.last_use_time, self.sequence)
    }

    /// True when the current millisecond has no sequence values left
    #[inline(always)]
    pub fn exhausted(&self, now: u64, max_sequence: u64) -> bool {
        self.sequence >= max_sequence && now <= self.last_use_time
    }
}
