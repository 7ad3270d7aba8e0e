use chrono::Utc;
use uuid::Uuid;

/// Milliseconds since the Unix epoch.
pub type Timestamp = i64;

pub fn now_millis() -> Timestamp {
    Utc::now().timestamp_millis()
}

/// Fresh document identifier.
pub fn make_id() -> String {
    Uuid::new_v4().simple().to_string()
}
