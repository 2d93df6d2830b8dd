//! Search and risk-level filtering for the account table.

use crate::account::{RiskAccount, RiskLevelFilter};

/// Case-insensitive substring search over customer name and account
/// number, combined with the risk-level selector. Stable: survivors keep
/// their relative order. An empty search term matches everything.
pub fn filter_accounts(
    accounts: &[RiskAccount],
    search_term: &str,
    risk_level: RiskLevelFilter,
) -> Vec<RiskAccount> {
    let needle = search_term.to_lowercase();
    accounts
        .iter()
        .filter(|a| matches_search(a, &needle) && risk_level.admits(a.risk_level))
        .cloned()
        .collect()
}

/// `needle` must already be lowercased.
fn matches_search(account: &RiskAccount, needle: &str) -> bool {
    account.customer_name.to_lowercase().contains(needle)
        || account.account_number.to_lowercase().contains(needle)
}
