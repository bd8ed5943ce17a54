use chrono::{DateTime, Duration, Utc};

use crate::constants::SECONDS_PER_BLOCK;

/// Projects the wall-clock instant at which `expires_height` is reached,
/// assuming the target block interval.
///
/// Heights already in the past map to an instant before `now`.
pub fn expires_time(now: DateTime<Utc>, current_height: u64, expires_height: u64) -> DateTime<Utc> {
    if current_height <= expires_height {
        now + Duration::seconds(((expires_height - current_height) * SECONDS_PER_BLOCK) as i64)
    } else {
        now - Duration::seconds(((current_height - expires_height) * SECONDS_PER_BLOCK) as i64)
    }
}
