/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A website's configuration bag: field key to arbitrary JSON value.
///
/// Values are the closed JSON variant (string, number, bool, null, list,
/// map), so nested style objects and list-valued fields survive untouched.
pub type Config = serde_json::Map<String, serde_json::Value>;
