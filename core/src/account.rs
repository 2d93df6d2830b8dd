//! The monitored-account record and its display intents.
//!
//! Risk scores and levels are computed upstream; this module only models
//! them and maps them onto the style names the presentation layer uses.

use crate::types::AccountId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse severity bucket. Never null: unknown input lands on `Low`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Map a raw upstream category. Case-insensitive; `CRITICAL` folds
    /// into `High`, anything unrecognised (or empty) is `Low`.
    pub fn from_raw(raw: &str) -> Self {
        match raw.to_uppercase().as_str() {
            "CRITICAL" | "HIGH" => Self::High,
            "MEDIUM"            => Self::Medium,
            _                   => Self::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High   => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low    => "LOW",
        }
    }

    pub fn badge_variant(&self) -> BadgeVariant {
        match self {
            Self::High   => BadgeVariant::Destructive,
            Self::Medium => BadgeVariant::Default,
            Self::Low    => BadgeVariant::Secondary,
        }
    }

    pub fn text_tone(&self) -> Tone {
        match self {
            Self::High   => Tone::Red,
            Self::Medium => Tone::Orange,
            Self::Low    => Tone::Yellow,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The risk-level selector above the account table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevelFilter {
    #[default]
    All,
    High,
    Medium,
    Low,
}

impl RiskLevelFilter {
    /// Selector buttons, in display order.
    pub const CHOICES: [RiskLevelFilter; 4] = [Self::All, Self::High, Self::Medium, Self::Low];

    pub fn admits(&self, level: RiskLevel) -> bool {
        match self {
            Self::All    => true,
            Self::High   => level == RiskLevel::High,
            Self::Medium => level == RiskLevel::Medium,
            Self::Low    => level == RiskLevel::Low,
        }
    }

    /// Selected button is solid, the rest are outlined.
    pub fn button_variant(&self, selected: RiskLevelFilter) -> BadgeVariant {
        if *self == selected {
            BadgeVariant::Default
        } else {
            BadgeVariant::Outline
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All    => "ALL",
            Self::High   => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low    => "LOW",
        }
    }
}

impl FromStr for RiskLevelFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ALL"    => Ok(Self::All),
            "HIGH"   => Ok(Self::High),
            "MEDIUM" => Ok(Self::Medium),
            "LOW"    => Ok(Self::Low),
            other    => Err(format!("unknown risk level filter '{other}'")),
        }
    }
}

/// Named badge styles understood by the presentation toolkit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    Destructive,
    Default,
    Secondary,
    Outline,
}

/// Named colour intents. The toolkit decides the actual palette.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Destructive,
    Warning,
    Primary,
}

/// Contact details. Only the embedded sample dataset carries these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub email:             String,
    pub phone:             String,
    pub address:           String,
    pub account_open_date: String,
}

/// One monitored financial account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskAccount {
    pub id:                   AccountId,
    pub account_number:       String,
    pub customer_name:        String,
    pub risk_score:           f64,
    pub risk_level:           RiskLevel,
    pub transaction_amount:   f64,
    pub flagged_transactions: u64,
    pub last_activity:        String,
    pub suspicious_activity:  Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_details:     Option<CustomerDetails>,
}

pub const NOT_AVAILABLE: &str = "N/A";

impl RiskAccount {
    pub fn email(&self) -> &str {
        self.customer_details.as_ref().map_or(NOT_AVAILABLE, |d| d.email.as_str())
    }

    pub fn phone(&self) -> &str {
        self.customer_details.as_ref().map_or(NOT_AVAILABLE, |d| d.phone.as_str())
    }

    pub fn address(&self) -> &str {
        self.customer_details.as_ref().map_or(NOT_AVAILABLE, |d| d.address.as_str())
    }

    pub fn account_open_date(&self) -> &str {
        self.customer_details
            .as_ref()
            .map_or(NOT_AVAILABLE, |d| d.account_open_date.as_str())
    }

    /// Labels shown in a table row: the first `limit` activities, then a
    /// `+N more` label if any were cut.
    pub fn activity_preview(&self, limit: usize) -> Vec<String> {
        let mut labels: Vec<String> = self.suspicious_activity.iter().take(limit).cloned().collect();
        let hidden = self.suspicious_activity.len().saturating_sub(limit);
        if hidden > 0 {
            labels.push(format!("+{hidden} more"));
        }
        labels
    }
}

/// Render an amount with thousands separators and at most three
/// fractional digits, e.g. `250000.0` -> `"250,000"`.
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }
    let rendered = format!("{:.3}", amount.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = amount < 0.0 && (grouped != "0" || !frac_part.is_empty());
    let sign = if negative { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}
