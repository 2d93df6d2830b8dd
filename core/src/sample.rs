//! Embedded fallback dataset shown whenever the live load yields nothing.

use crate::account::{CustomerDetails, RiskAccount, RiskLevel};

pub const SAMPLE_SIZE: usize = 4;

#[allow(clippy::too_many_arguments)]
fn sample_account(
    id: &str,
    account_number: &str,
    customer_name: &str,
    risk_score: f64,
    risk_level: RiskLevel,
    transaction_amount: f64,
    flagged_transactions: u64,
    last_activity: &str,
    suspicious_activity: &[&str],
    details: (&str, &str, &str, &str),
) -> RiskAccount {
    let (email, phone, address, account_open_date) = details;
    RiskAccount {
        id:                   id.into(),
        account_number:       account_number.into(),
        customer_name:        customer_name.into(),
        risk_score,
        risk_level,
        transaction_amount,
        flagged_transactions,
        last_activity:        last_activity.into(),
        suspicious_activity:  suspicious_activity.iter().map(|s| s.to_string()).collect(),
        customer_details: Some(CustomerDetails {
            email:             email.into(),
            phone:             phone.into(),
            address:           address.into(),
            account_open_date: account_open_date.into(),
        }),
    }
}

/// The four demonstration accounts, ids `"1"`..`"4"`.
pub fn sample_accounts() -> Vec<RiskAccount> {
    vec![
        sample_account(
            "1", "ACC-2024-001", "John Smith", 87.0, RiskLevel::High, 250_000.0, 15, "2024-01-15",
            &["Large cash deposits", "Frequent international transfers"],
            ("john.smith@email.com", "+1-555-0123", "123 Main St, New York, NY 10001", "2020-05-15"),
        ),
        sample_account(
            "2", "ACC-2024-002", "Maria Garcia", 65.0, RiskLevel::Medium, 120_000.0, 8, "2024-01-14",
            &["Unusual transaction patterns", "High-risk jurisdictions"],
            ("maria.garcia@email.com", "+1-555-0124", "456 Oak Ave, Los Angeles, CA 90210", "2019-08-22"),
        ),
        sample_account(
            "3", "ACC-2024-003", "David Johnson", 42.0, RiskLevel::Low, 75_000.0, 3, "2024-01-13",
            &["Round number transactions"],
            ("david.johnson@email.com", "+1-555-0125", "789 Pine St, Chicago, IL 60601", "2021-03-10"),
        ),
        sample_account(
            "4", "ACC-2024-004", "Sarah Wilson", 91.0, RiskLevel::High, 380_000.0, 22, "2024-01-16",
            &["Structuring", "Shell company connections", "PEP connections"],
            ("sarah.wilson@email.com", "+1-555-0126", "321 Elm St, Miami, FL 33101", "2018-11-05"),
        ),
    ]
}
