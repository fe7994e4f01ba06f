//! Clock capability for local calendar date computation.
//!
//! The upsert key of a diary entry is the calendar date in Korea Standard Time,
//! independent of the host process's timezone setting and of the store's own
//! creation timestamps. Timezone conversion is therefore explicit here, and the
//! clock is injected into the service rather than called ambiently so the core
//! stays deterministic under test.

use crate::constants::KST_UTC_OFFSET_SECS;
use chrono::{FixedOffset, NaiveDate, Utc};

/// Provides "today" as a local calendar date.
pub trait Clock {
    /// Returns the current calendar date in the service's local timezone.
    fn today(&self) -> NaiveDate;
}

/// System clock pinned to Korea Standard Time (UTC+9, no DST).
#[derive(Debug, Clone, Copy, Default)]
pub struct KstClock;

impl Clock for KstClock {
    fn today(&self) -> NaiveDate {
        // KST_UTC_OFFSET_SECS is well within chrono's valid offset range.
        let kst = FixedOffset::east_opt(KST_UTC_OFFSET_SECS).expect("valid KST offset");
        Utc::now().with_timezone(&kst).date_naive()
    }
}

/// Clock that always reports the same date. Used by tests that need a
/// deterministic "today".
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kst_clock_is_at_most_one_day_ahead_of_utc() {
        // KST is UTC+9, so its calendar date is either the UTC date or the
        // day after, never behind.
        let utc_today = Utc::now().date_naive();
        let kst_today = KstClock.today();

        let delta = kst_today.signed_duration_since(utc_today).num_days();
        assert!((0..=1).contains(&delta), "unexpected KST/UTC delta: {delta}");
    }

    #[test]
    fn test_fixed_clock_returns_configured_date() {
        let date = NaiveDate::from_ymd_opt(2022, 9, 26).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
