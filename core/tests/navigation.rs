//! LIST / DETAIL navigation and event application.

use riskguard_core::{
    account::{RiskLevel, RiskLevelFilter},
    detail::StaticDetailSource,
    event::ViewEvent,
    loader::{DatasetLoader, InlineSource},
    view::{ViewMode, ViewState},
};

fn sample_view() -> ViewState {
    let mut view = ViewState::new();
    DatasetLoader::new(InlineSource::status(404, "Not Found"), "/data.csv").load_into(&mut view);
    view
}

#[test]
fn new_view_starts_in_list_mode() {
    let view = ViewState::new();
    assert_eq!(view.mode(), ViewMode::List);
    assert_eq!(view.search_term(), "");
    assert_eq!(view.selected_risk_level(), RiskLevelFilter::All);
    assert!(view.selected_account().is_none());
}

#[test]
fn selecting_a_row_enters_detail_and_back_returns() {
    let mut view = sample_view();

    view.apply(ViewEvent::RowSelected { row: 1 });
    assert_eq!(view.mode(), ViewMode::Detail);
    assert_eq!(view.selected_account().map(|a| a.customer_name.as_str()), Some("Maria Garcia"));

    view.apply(ViewEvent::BackToList);
    assert_eq!(view.mode(), ViewMode::List);
    assert!(view.selected_account().is_none());
}

/// Filters survive a round trip through the detail screen.
#[test]
fn back_keeps_filters() {
    let mut view = sample_view();
    view.apply(ViewEvent::SearchChanged { term: "son".into() });
    view.apply(ViewEvent::RiskLevelChanged { level: RiskLevelFilter::High });
    view.apply(ViewEvent::RowSelected { row: 0 });
    assert_eq!(view.selected_account().map(|a| a.id.as_str()), Some("4"));
    view.apply(ViewEvent::BackToList);

    assert_eq!(view.search_term(), "son");
    assert_eq!(view.selected_risk_level(), RiskLevelFilter::High);
    let visible: Vec<_> = view.visible_accounts().into_iter().map(|a| a.id).collect();
    assert_eq!(visible, vec!["4".to_string()]);
}

#[test]
fn missing_row_stays_in_list() {
    let mut view = sample_view();
    assert!(!view.select_row(4));
    assert_eq!(view.mode(), ViewMode::List);

    view.apply(ViewEvent::SearchChanged { term: "zzz".into() });
    assert!(!view.select_row(0), "an empty table has no rows to click");
    assert_eq!(view.mode(), ViewMode::List);
}

/// Rows sharing an id each open their own record.
#[test]
fn duplicate_ids_open_the_clicked_row() {
    let mut view = ViewState::new();
    DatasetLoader::new(
        InlineSource::csv("Account,Customer_Name,Risk_Level\nDUP,First,HIGH\nX,Other,LOW\nDUP,Second,LOW\n"),
        "/data.csv",
    )
    .load_into(&mut view);
    assert_eq!(view.active_accounts().len(), 3, "duplicates are kept in the list");

    let clicked = view.visible_accounts()[0].clone();
    view.apply(ViewEvent::RowSelected { row: 0 });
    let shown = view.selected_account().expect("detail mode");
    assert_eq!(shown.customer_name, clicked.customer_name);
    assert_eq!(shown.customer_name, "First");
    assert_eq!(shown.risk_level, RiskLevel::High);

    view.apply(ViewEvent::BackToList);
    view.apply(ViewEvent::RowSelected { row: 2 });
    let shown = view.selected_account().expect("detail mode");
    assert_eq!(shown.customer_name, "Second");
    assert_eq!(shown.risk_level, RiskLevel::Low);
}

/// Row indices refer to the filtered table, not the full dataset.
#[test]
fn row_index_follows_the_filtered_table() {
    let mut view = sample_view();
    view.apply(ViewEvent::RiskLevelChanged { level: RiskLevelFilter::High });
    view.apply(ViewEvent::RowSelected { row: 1 });
    assert_eq!(view.selected_account().map(|a| a.customer_name.as_str()), Some("Sarah Wilson"));
}

/// Loaded records carry no contact details, so the detail screen shows N/A.
#[test]
fn loaded_records_show_not_available_details() {
    let mut view = ViewState::new();
    DatasetLoader::new(InlineSource::csv("Account\nA1\n"), "/data.csv").load_into(&mut view);
    view.apply(ViewEvent::RowSelected { row: 0 });

    let account = view.selected_account().expect("selected");
    assert_eq!(account.email(), "N/A");
    assert_eq!(account.phone(), "N/A");
    assert_eq!(account.address(), "N/A");
    assert_eq!(account.account_open_date(), "N/A");
}

#[test]
fn detail_is_none_in_list_mode() {
    let view = sample_view();
    assert!(view.detail(&StaticDetailSource::builtin()).is_none());
}

#[test]
fn events_round_trip_through_json() {
    let event: ViewEvent =
        serde_json::from_str(r#"{"type":"risk_level_changed","level":"MEDIUM"}"#).unwrap();
    assert_eq!(event, ViewEvent::RiskLevelChanged { level: RiskLevelFilter::Medium });

    let event: ViewEvent = serde_json::from_str(r#"{"type":"row_selected","row":3}"#).unwrap();
    assert_eq!(event, ViewEvent::RowSelected { row: 3 });

    let event: ViewEvent = serde_json::from_str(r#"{"type":"back_to_list"}"#).unwrap();
    assert_eq!(event, ViewEvent::BackToList);
}

#[test]
fn each_session_has_its_own_id() {
    assert_ne!(ViewState::new().session_id(), ViewState::new().session_id());
}

/// Table rows show two activities and collapse the rest.
#[test]
fn activity_preview_collapses_overflow() {
    let view = sample_view();
    let sarah = view.active_accounts().iter().find(|a| a.id == "4").unwrap();
    assert_eq!(
        sarah.activity_preview(2),
        vec!["Structuring", "Shell company connections", "+1 more"]
    );

    let david = view.active_accounts().iter().find(|a| a.id == "3").unwrap();
    assert_eq!(david.activity_preview(2), vec!["Round number transactions"]);
}

#[test]
fn risk_levels_map_to_badge_variants() {
    use riskguard_core::account::BadgeVariant;

    assert_eq!(RiskLevel::High.badge_variant(), BadgeVariant::Destructive);
    assert_eq!(RiskLevel::Medium.badge_variant(), BadgeVariant::Default);
    assert_eq!(RiskLevel::Low.badge_variant(), BadgeVariant::Secondary);
}
