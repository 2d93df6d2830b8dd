//! Per-account drill-down data: transaction history and the status
//! distribution chart.
//!
//! RULE: a lookup miss is an empty list, never an error. Detail views
//! render an empty state for accounts the source knows nothing about.

use crate::{
    account::{BadgeVariant, Tone},
    types::AccountId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Transfer,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit    => "DEPOSIT",
            Self::Withdrawal => "WITHDRAWAL",
            Self::Transfer   => "TRANSFER",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "DEPOSIT"    => Some(Self::Deposit),
            "WITHDRAWAL" => Some(Self::Withdrawal),
            "TRANSFER"   => Some(Self::Transfer),
            _            => None,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Deposit    => Tone::Green,
            Self::Withdrawal => Tone::Red,
            Self::Transfer   => Tone::Blue,
        }
    }

    /// Withdrawals leave the account.
    pub fn sign(&self) -> char {
        match self {
            Self::Withdrawal => '-',
            _                => '+',
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Flagged,
    Suspicious,
    Normal,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flagged    => "FLAGGED",
            Self::Suspicious => "SUSPICIOUS",
            Self::Normal     => "NORMAL",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "FLAGGED"    => Some(Self::Flagged),
            "SUSPICIOUS" => Some(Self::Suspicious),
            "NORMAL"     => Some(Self::Normal),
            _            => None,
        }
    }

    pub fn badge_variant(&self) -> BadgeVariant {
        match self {
            Self::Flagged    => BadgeVariant::Destructive,
            Self::Suspicious => BadgeVariant::Default,
            Self::Normal     => BadgeVariant::Secondary,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id:          String,
    pub date:        String,
    #[serde(rename = "type")]
    pub txn_type:    TransactionType,
    pub amount:      f64,
    pub description: String,
    pub status:      TransactionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location:    Option<String>,
}

impl Transaction {
    /// `+250,000` / `-9,900` style amount for the history list.
    pub fn signed_amount(&self) -> String {
        format!("{}${}", self.txn_type.sign(), crate::account::format_amount(self.amount))
    }
}

/// One segment of the per-account status chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSlice {
    pub name:  String,
    pub value: u64,
    pub tone:  Tone,
}

pub fn chart_total(slices: &[ChartSlice]) -> u64 {
    slices.iter().map(|s| s.value).sum()
}

/// Supplies drill-down data for one account.
pub trait DetailSource {
    fn transactions(&self, account_id: &str) -> Vec<Transaction>;
    fn chart(&self, account_id: &str) -> Vec<ChartSlice>;
}

/// Built-in illustrative tables keyed by the sample account ids.
#[derive(Debug, Clone, Default)]
pub struct StaticDetailSource {
    transactions: HashMap<AccountId, Vec<Transaction>>,
    charts:       HashMap<AccountId, Vec<ChartSlice>>,
}

impl StaticDetailSource {
    /// An empty source: every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut source = Self::empty();
        for (account_id, rows) in builtin_transactions() {
            source.transactions.insert(account_id.to_string(), rows);
        }
        for (account_id, (flagged, suspicious, normal)) in BUILTIN_CHARTS {
            source.charts.insert(account_id.to_string(), status_chart(flagged, suspicious, normal));
        }
        source
    }

    pub fn insert_transactions(&mut self, account_id: impl Into<AccountId>, rows: Vec<Transaction>) {
        self.transactions.insert(account_id.into(), rows);
    }

    pub fn insert_chart(&mut self, account_id: impl Into<AccountId>, slices: Vec<ChartSlice>) {
        self.charts.insert(account_id.into(), slices);
    }

    pub fn account_ids(&self) -> Vec<AccountId> {
        let mut ids: Vec<AccountId> = self
            .transactions
            .keys()
            .chain(self.charts.keys())
            .cloned()
            .collect();
        ids.sort();
        ids.dedup();
        ids
    }
}

impl DetailSource for StaticDetailSource {
    fn transactions(&self, account_id: &str) -> Vec<Transaction> {
        let rows = self.transactions.get(account_id).cloned().unwrap_or_default();
        if rows.is_empty() {
            log::debug!("no transactions on record for account {account_id}");
        }
        rows
    }

    fn chart(&self, account_id: &str) -> Vec<ChartSlice> {
        self.charts.get(account_id).cloned().unwrap_or_default()
    }
}

/// Three-slice flagged / suspicious / normal distribution.
pub fn status_chart(flagged: u64, suspicious: u64, normal: u64) -> Vec<ChartSlice> {
    vec![
        ChartSlice { name: "Flagged Transactions".into(),    value: flagged,    tone: Tone::Destructive },
        ChartSlice { name: "Suspicious Transactions".into(), value: suspicious, tone: Tone::Warning },
        ChartSlice { name: "Normal Transactions".into(),     value: normal,     tone: Tone::Primary },
    ]
}

// (flagged, suspicious, normal)
const BUILTIN_CHARTS: [(&str, (u64, u64, u64)); 4] = [
    ("1", (15, 8, 25)),
    ("2", (8, 5, 18)),
    ("3", (3, 2, 35)),
    ("4", (22, 12, 15)),
];

fn txn(
    id: &str,
    date: &str,
    txn_type: TransactionType,
    amount: f64,
    description: &str,
    status: TransactionStatus,
    location: &str,
) -> Transaction {
    Transaction {
        id:          id.into(),
        date:        date.into(),
        txn_type,
        amount,
        description: description.into(),
        status,
        location:    Some(location.into()),
    }
}

fn builtin_transactions() -> Vec<(&'static str, Vec<Transaction>)> {
    use TransactionStatus::*;
    use TransactionType::*;

    vec![
        ("1", vec![
            txn("txn-001", "2024-01-15", Deposit,    50_000.0, "Large cash deposit",                Flagged,    "Branch A"),
            txn("txn-002", "2024-01-14", Transfer,   25_000.0, "International wire transfer",       Suspicious, "Online"),
            txn("txn-003", "2024-01-13", Withdrawal,  9_900.0, "ATM withdrawal",                    Flagged,    "ATM-123"),
            txn("txn-004", "2024-01-12", Deposit,    15_000.0, "Check deposit",                     Normal,     "Branch B"),
            txn("txn-005", "2024-01-11", Transfer,   30_000.0, "Wire transfer to offshore account", Suspicious, "Online"),
        ]),
        ("2", vec![
            txn("txn-006", "2024-01-14", Transfer,   20_000.0, "International transfer",            Flagged,    "Online"),
            txn("txn-007", "2024-01-13", Deposit,    12_000.0, "Cash deposit",                      Suspicious, "Branch C"),
        ]),
        ("3", vec![
            txn("txn-008", "2024-01-13", Transfer,   10_000.0, "Round number transfer",             Flagged,    "Online"),
        ]),
        ("4", vec![
            txn("txn-009", "2024-01-16", Deposit,    45_000.0, "Structured deposit",                Suspicious, "Branch A"),
            txn("txn-010", "2024-01-15", Transfer,   75_000.0, "Shell company transfer",            Flagged,    "Online"),
        ]),
    ]
}
