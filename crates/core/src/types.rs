/// Catalog and identity ids are opaque strings (`"1"`, `"2"`, ...).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Upper bound of every completion / progress percentage.
pub const PERCENT_MAX: u8 = 100;
