use chrono::{DateTime, Duration, Utc};

/// Wall-clock instant used for record creation and expiry.
pub type Timestamp = DateTime<Utc>;

/// Compute the expiration instant for a record created at `created`.
///
/// A non-positive `ttl_ms` means the record never expires.
pub fn expiration_for(created: Timestamp, ttl_ms: i64) -> Option<Timestamp> {
    if ttl_ms <= 0 {
        return None;
    }
    created.checked_add_signed(Duration::milliseconds(ttl_ms))
}
