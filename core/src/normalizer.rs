//! Row normalisation — one raw CSV row to one `RiskAccount`.
//!
//! Never fails. Bad cells coerce to defaults (0, `LOW`, placeholders) so
//! a single malformed row cannot abort a load.

use crate::{
    account::{RiskAccount, RiskLevel},
    types::RawRow,
};
use chrono::{NaiveDate, Utc};

// ── Source columns ───────────────────────────────────────────────────────────

pub const COL_ACCOUNT:         &str = "Account";
pub const COL_CUSTOMER_NAME:   &str = "Customer_Name";
pub const COL_RISK_SCORE:      &str = "Risk_Score";
pub const COL_RISK_LEVEL:      &str = "Risk_Level";
pub const COL_TOTAL_AMOUNT:    &str = "Total_Amount";
pub const COL_TXN_COUNT:       &str = "Transaction_Count";
pub const COL_LAST_ACTIVITY:   &str = "Last_Activity";

/// Suspicious-activity rules: (source column, label prefix).
/// Order here is the order of entries in `suspicious_activity`.
pub const ACTIVITY_RULES: [(&str, &str); 7] = [
    ("Pattern_Type",        "Pattern"),
    ("Fan_Degree",          "Fan Degree"),
    ("Connection_Type",     "Connection"),
    ("Unique_Currencies",   "Currencies"),
    ("Time_Span_Days",      "Days"),
    ("Amount_Range_Ratio",  "Amt Range Ratio"),
    ("Temporal_Clustering", "Temporal Clustering"),
];

/// Maps raw rows to records. Holds the date used when a row has no
/// `Last_Activity`, so everything else stays deterministic.
#[derive(Debug, Clone)]
pub struct RecordNormalizer {
    today: NaiveDate,
}

impl Default for RecordNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordNormalizer {
    /// Fallback date is today's UTC date.
    pub fn new() -> Self {
        Self { today: Utc::now().date_naive() }
    }

    /// Fixed fallback date (tests, replays).
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Normalise `row`. `ordinal` is 1-based and only feeds placeholders.
    pub fn normalize(&self, row: &RawRow, ordinal: usize) -> RiskAccount {
        let account = populated(row, COL_ACCOUNT);

        RiskAccount {
            id: account
                .map(str::to_string)
                .unwrap_or_else(|| ordinal.to_string()),
            account_number: account
                .map(str::to_string)
                .unwrap_or_else(|| format!("ACC-{ordinal:04}")),
            customer_name: populated(row, COL_CUSTOMER_NAME)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Customer {ordinal}")),
            risk_score:           coerce_f64(row.get(COL_RISK_SCORE)),
            risk_level:           RiskLevel::from_raw(populated(row, COL_RISK_LEVEL).unwrap_or("")),
            transaction_amount:   coerce_f64(row.get(COL_TOTAL_AMOUNT)),
            flagged_transactions: coerce_count(row.get(COL_TXN_COUNT)),
            last_activity: populated(row, COL_LAST_ACTIVITY)
                .map(str::to_string)
                .unwrap_or_else(|| self.today.format("%Y-%m-%d").to_string()),
            suspicious_activity: suspicious_activity(row),
            customer_details: None,
        }
    }
}

/// Fold the activity rules over a row, keeping only populated columns.
pub fn suspicious_activity(row: &RawRow) -> Vec<String> {
    ACTIVITY_RULES
        .iter()
        .filter_map(|(column, label)| {
            populated(row, column).map(|value| format!("{label}: {value}"))
        })
        .collect()
}

/// A cell counts as present when it exists and is non-empty.
fn populated<'a>(row: &'a RawRow, column: &str) -> Option<&'a str> {
    row.get(column).map(String::as_str).filter(|v| !v.is_empty())
}

/// Lenient float parse: surrounding whitespace ignored; empty, garbage,
/// NaN and infinities all become 0.
pub fn coerce_f64(raw: Option<&String>) -> f64 {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Lenient count parse. Fractions truncate, negatives clamp to 0.
pub fn coerce_count(raw: Option<&String>) -> u64 {
    let value = coerce_f64(raw);
    if value <= 0.0 {
        0
    } else {
        value.trunc() as u64
    }
}
