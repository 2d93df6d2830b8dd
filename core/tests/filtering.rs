//! Search + risk-level filtering of the account table.

use riskguard_core::{
    account::{RiskLevel, RiskLevelFilter},
    filter::filter_accounts,
    sample::sample_accounts,
};

fn ids(accounts: &[riskguard_core::account::RiskAccount]) -> Vec<&str> {
    accounts.iter().map(|a| a.id.as_str()).collect()
}

/// Empty search and ALL is the identity.
#[test]
fn empty_search_with_all_is_identity() {
    let accounts = sample_accounts();
    assert_eq!(filter_accounts(&accounts, "", RiskLevelFilter::All), accounts);
}

#[test]
fn search_is_case_insensitive_substring_on_name() {
    let accounts = sample_accounts();
    let hits = filter_accounts(&accounts, "SMITH", RiskLevelFilter::All);
    assert_eq!(ids(&hits), vec!["1"]);

    let hits = filter_accounts(&accounts, "ar", RiskLevelFilter::All);
    assert_eq!(ids(&hits), vec!["2", "4"], "Maria Garcia and Sarah Wilson contain 'ar'");
}

#[test]
fn search_matches_account_number() {
    let accounts = sample_accounts();
    let hits = filter_accounts(&accounts, "acc-2024-003", RiskLevelFilter::All);
    assert_eq!(ids(&hits), vec!["3"]);

    let hits = filter_accounts(&accounts, "2024", RiskLevelFilter::All);
    assert_eq!(hits.len(), 4);
}

#[test]
fn risk_level_narrows_and_preserves_order() {
    let accounts = sample_accounts();
    let high = filter_accounts(&accounts, "", RiskLevelFilter::High);
    assert_eq!(ids(&high), vec!["1", "4"]);
    assert!(high.iter().all(|a| a.risk_level == RiskLevel::High));

    assert_eq!(ids(&filter_accounts(&accounts, "", RiskLevelFilter::Medium)), vec!["2"]);
    assert_eq!(ids(&filter_accounts(&accounts, "", RiskLevelFilter::Low)), vec!["3"]);
}

/// Both predicates must hold.
#[test]
fn search_and_level_combine() {
    let accounts = sample_accounts();
    assert!(filter_accounts(&accounts, "garcia", RiskLevelFilter::High).is_empty());
    assert_eq!(ids(&filter_accounts(&accounts, "wilson", RiskLevelFilter::High)), vec!["4"]);
}

#[test]
fn filtering_is_idempotent() {
    let accounts = sample_accounts();
    for level in RiskLevelFilter::CHOICES {
        for term in ["", "a", "acc-2024-00", "zzz"] {
            let once = filter_accounts(&accounts, term, level);
            let twice = filter_accounts(&once, term, level);
            assert_eq!(once, twice, "filter not idempotent for {term:?} / {}", level.as_str());
        }
    }
}
