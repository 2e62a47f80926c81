use chrono::Utc;

/// Milliseconds since the Unix epoch. Post and comment timestamps (and the
/// ids derived from them) all use this clock.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
