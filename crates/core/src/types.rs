use serde::{Deserialize, Deserializer};

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Deserialize a patch field that can be cleared.
///
/// Use on an `Option<Option<T>>` together with `#[serde(default)]`: an absent
/// field stays `None` (leave unchanged), while an explicit `null` becomes
/// `Some(None)` (clear).
pub fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
