//! ID generation logic

use std::sync::Arc;

use tracing::{trace, warn};

use super::{Clock, SnowflakeGenerator};
use crate::error::SnowflakeError;
use crate::id::SnowflakeId;

impl<C: Clock> SnowflakeGenerator<C> {
    /// Generate a new snowflake from positional field values
    ///
    /// `values` follow the declared field order. Missing trailing values
    /// default to 0 and extra values are ignored. Values are not range
    /// checked; see [`try_next_id`](Self::try_next_id).
    ///
    /// Blocks while the sequence for the current millisecond is exhausted.
    pub fn next_id(&self, values: &[u64]) -> SnowflakeId {
        let fields = self.layout.take_values(values);
        let (millis, sequence) = self.claim();
        SnowflakeId::from_parts(
            Arc::clone(&self.layout),
            millis.saturating_sub(self.layout.epoch()),
            sequence,
            fields,
        )
    }

    /// Generate a new snowflake from name-keyed field values
    ///
    /// Names the layout does not know are ignored; absent fields are 0.
    pub fn next_id_named(&self, values: &[(&str, u64)]) -> SnowflakeId {
        self.next_id(&self.layout.resolve(values))
    }

    /// Like [`next_id`](Self::next_id) but rejects values wider than their field
    ///
    /// Nothing is claimed from the generator when validation fails.
    pub fn try_next_id(&self, values: &[u64]) -> Result<SnowflakeId, SnowflakeError> {
        self.layout.check_values(values)?;
        Ok(self.next_id(values))
    }

    /// Claim the next (unix millisecond, sequence) pair
    pub(crate) fn claim(&self) -> (u64, u64) {
        let max_sequence = self.layout.sequence_max();
        let mut state = self.lock_state();
        // Readings before the epoch are held at the epoch, so they count
        // sequences on offset 0 instead of restarting them each millisecond.
        let mut now = self.now_ms().max(self.layout.epoch());

        // Never issue behind the last timestamp; keep counting on it instead.
        if now < state.last_use_time {
            warn!(
                delta_ms = state.last_use_time - now,
                "clock moved backwards, holding last timestamp"
            );
            now = state.last_use_time;
        }

        if state.exhausted(now, max_sequence) {
            trace!(
                last_use_time = state.last_use_time,
                sequence = state.sequence,
                "sequence exhausted, waiting for next millisecond"
            );
            now = self.wait_next_millis(state.last_use_time);
        }

        state.advance(now)
    }
}
