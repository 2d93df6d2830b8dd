//! Shared primitive types used across the dashboard core.

/// Account identifier. Lookup key for detail data and list key for rows.
pub type AccountId = String;

/// One raw CSV row: column name to raw cell text.
pub type RawRow = std::collections::HashMap<String, String>;
