//! Stat-card aggregates.

use riskguard_core::{
    account::{RiskAccount, RiskLevel, RiskLevelFilter},
    event::ViewEvent,
    loader::{DatasetLoader, InlineSource},
    sample::sample_accounts,
    summary::DashboardSummary,
    view::ViewState,
};

#[test]
fn sample_dataset_totals() {
    let summary = DashboardSummary::compute(&sample_accounts());
    assert_eq!(summary.total_accounts, 4);
    assert_eq!(summary.high_risk_accounts, 2);
    assert_eq!(summary.total_flagged_transactions, 15 + 8 + 3 + 22);
    assert_eq!(summary.total_flagged_transactions, 48);
    assert_eq!(summary.total_suspicious_amount, 825_000.0);
}

#[test]
fn empty_dataset_is_all_zeros() {
    assert_eq!(DashboardSummary::compute(&[]), DashboardSummary::default());
}

#[test]
fn high_risk_counts_only_high() {
    let mut accounts: Vec<RiskAccount> = sample_accounts();
    accounts[2].risk_level = RiskLevel::Medium;
    let summary = DashboardSummary::compute(&accounts);
    assert_eq!(summary.high_risk_accounts, 2);
    assert_eq!(summary.total_accounts, 4);
}

/// Aggregates describe the whole dataset, not what the table shows.
#[test]
fn summary_ignores_active_filters() {
    let mut view = ViewState::new();
    DatasetLoader::new(
        InlineSource::csv(
            "Account,Risk_Level,Transaction_Count,Total_Amount\n\
             A1,HIGH,5,100\nA2,LOW,2,50\nA3,CRITICAL,1,25\n",
        ),
        "/data.csv",
    )
    .load_into(&mut view);

    view.apply(ViewEvent::RiskLevelChanged { level: RiskLevelFilter::Low });
    view.apply(ViewEvent::SearchChanged { term: "A2".into() });
    assert_eq!(view.visible_accounts().len(), 1);

    let summary = view.summary();
    assert_eq!(summary.total_accounts, 3);
    assert_eq!(summary.high_risk_accounts, 2);
    assert_eq!(summary.total_flagged_transactions, 8);
    assert_eq!(summary.total_suspicious_amount, 175.0);
}
