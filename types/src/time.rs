//! Ledger time: seconds since the ledger epoch (2000-01-01T00:00:00Z).
//!
//! Fields such as `Expiration`, `CancelAfter` and `FinishAfter` use this
//! epoch rather than the Unix one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unix timestamp of the ledger epoch.
pub const RIPPLE_EPOCH_UNIX: u64 = 946_684_800;

/// A point in time, in seconds since the ledger epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RippleTime(u32);

impl RippleTime {
    pub const EPOCH: Self = Self(0);

    pub fn new(secs: u32) -> Self {
        Self(secs)
    }

    pub fn as_secs(&self) -> u32 {
        self.0
    }

    /// Seconds since the Unix epoch.
    pub fn to_unix(&self) -> u64 {
        RIPPLE_EPOCH_UNIX + u64::from(self.0)
    }

    /// Convert from Unix seconds. `None` if the instant predates the ledger
    /// epoch or does not fit.
    pub fn from_unix(unix_secs: u64) -> Option<Self> {
        let secs = unix_secs.checked_sub(RIPPLE_EPOCH_UNIX)?;
        u32::try_from(secs).ok().map(Self)
    }

    /// Whether this instant has passed relative to `now`.
    pub fn has_passed(&self, now: RippleTime) -> bool {
        now.0 >= self.0
    }
}

impl fmt::Display for RippleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_maps_to_2000() {
        assert_eq!(RippleTime::EPOCH.to_unix(), RIPPLE_EPOCH_UNIX);
    }

    #[test]
    fn from_unix_before_epoch_is_none() {
        assert_eq!(RippleTime::from_unix(0), None);
        assert_eq!(RippleTime::from_unix(RIPPLE_EPOCH_UNIX - 1), None);
    }

    #[test]
    fn has_passed_is_inclusive() {
        let t = RippleTime::new(100);
        assert!(t.has_passed(RippleTime::new(100)));
        assert!(!t.has_passed(RippleTime::new(99)));
    }
}
