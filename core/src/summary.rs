//! Headline metrics for the stat cards.
//!
//! Computed over the full active dataset, never the filtered view.

use crate::account::{RiskAccount, RiskLevel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardSummary {
    pub total_accounts:             usize,
    pub high_risk_accounts:         usize,
    pub total_flagged_transactions: u64,
    pub total_suspicious_amount:    f64,
}

impl DashboardSummary {
    pub fn compute(accounts: &[RiskAccount]) -> Self {
        accounts.iter().fold(Self::default(), |mut acc, a| {
            acc.total_accounts += 1;
            if a.risk_level == RiskLevel::High {
                acc.high_risk_accounts += 1;
            }
            acc.total_flagged_transactions += a.flagged_transactions;
            acc.total_suspicious_amount += a.transaction_amount;
            acc
        })
    }
}
