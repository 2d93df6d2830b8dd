//! View state for one dashboard session.
//!
//! Two navigation states: LIST (no account selected) and DETAIL (one
//! account selected). LIST -> DETAIL by selecting a row, DETAIL -> LIST
//! by the back action. Nothing is persisted; dropping the value ends
//! the session.

use crate::{
    account::{RiskAccount, RiskLevelFilter},
    detail::{chart_total, ChartSlice, DetailSource, Transaction},
    error::DashResult,
    event::ViewEvent,
    filter::filter_accounts,
    sample::sample_accounts,
    summary::DashboardSummary,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    List,
    Detail,
}

/// Status banner above the stat cards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadStatus {
    Loading,
    /// The load failed; the sample dataset is on screen.
    Error { message: String },
    Ready,
}

/// Everything the detail screen shows for the selected account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailView {
    pub account:      RiskAccount,
    pub transactions: Vec<Transaction>,
    pub chart:        Vec<ChartSlice>,
    pub chart_total:  u64,
}

#[derive(Debug, Clone)]
pub struct ViewState {
    session_id:          String,
    search_term:         String,
    selected_risk_level: RiskLevelFilter,
    selected_account:    Option<RiskAccount>,
    loading:             bool,
    error:               Option<String>,
    accounts:            Vec<RiskAccount>,
    sample:              Vec<RiskAccount>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// A freshly mounted view: loading, nothing selected, no filters.
    pub fn new() -> Self {
        Self {
            session_id:          Uuid::new_v4().to_string(),
            search_term:         String::new(),
            selected_risk_level: RiskLevelFilter::All,
            selected_account:    None,
            loading:             true,
            error:               None,
            accounts:            Vec::new(),
            sample:              sample_accounts(),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected_risk_level(&self) -> RiskLevelFilter {
        self.selected_risk_level
    }

    pub fn selected_account(&self) -> Option<&RiskAccount> {
        self.selected_account.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn mode(&self) -> ViewMode {
        if self.selected_account.is_some() {
            ViewMode::Detail
        } else {
            ViewMode::List
        }
    }

    pub fn status(&self) -> LoadStatus {
        if self.loading {
            LoadStatus::Loading
        } else if let Some(message) = &self.error {
            LoadStatus::Error { message: message.clone() }
        } else {
            LoadStatus::Ready
        }
    }

    /// Records from the live load, possibly empty.
    pub fn loaded_accounts(&self) -> &[RiskAccount] {
        &self.accounts
    }

    pub fn using_sample(&self) -> bool {
        self.accounts.is_empty()
    }

    /// The dataset on screen: live records, or the sample when there
    /// are none.
    pub fn active_accounts(&self) -> &[RiskAccount] {
        if self.using_sample() {
            &self.sample
        } else {
            &self.accounts
        }
    }

    /// Table rows after search and risk-level filtering.
    pub fn visible_accounts(&self) -> Vec<RiskAccount> {
        filter_accounts(self.active_accounts(), &self.search_term, self.selected_risk_level)
    }

    /// Stat-card metrics over the whole active dataset.
    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary::compute(self.active_accounts())
    }

    /// Record the outcome of the one load this session runs. A second
    /// call is ignored so `loading` flips exactly once.
    pub fn finish_load(&mut self, outcome: DashResult<Vec<RiskAccount>>) {
        if !self.loading {
            log::warn!("[{}] load already finished, ignoring result", self.session_id);
            return;
        }
        self.loading = false;

        match outcome {
            Ok(accounts) => {
                warn_duplicate_ids(&self.session_id, &accounts);
                if accounts.is_empty() {
                    log::warn!("[{}] dataset is empty, showing sample data", self.session_id);
                }
                self.accounts = accounts;
                self.error = None;
            }
            Err(e) => {
                let message = e.load_message();
                log::warn!("[{}] {message}; showing sample data", self.session_id);
                self.accounts.clear();
                self.error = Some(message);
            }
        }
    }

    pub fn apply(&mut self, event: ViewEvent) {
        log::debug!("[{}] {}", self.session_id, event.name());
        match event {
            ViewEvent::SearchChanged { term }     => self.search_term = term,
            ViewEvent::RiskLevelChanged { level } => self.selected_risk_level = level,
            ViewEvent::RowSelected { row } => {
                self.select_row(row);
            }
            ViewEvent::BackToList => self.back_to_list(),
        }
    }

    /// LIST -> DETAIL for the `row`th entry of the filtered table. The
    /// clicked record itself is kept, so rows sharing an id stay distinct.
    /// Returns false, and stays put, if the row does not exist.
    pub fn select_row(&mut self, row: usize) -> bool {
        match self.visible_accounts().into_iter().nth(row) {
            Some(account) => {
                self.select_account(account);
                true
            }
            None => {
                log::debug!("[{}] no table row {row}", self.session_id);
                false
            }
        }
    }

    /// LIST -> DETAIL with a record the caller already holds.
    pub fn select_account(&mut self, account: RiskAccount) {
        self.selected_account = Some(account);
    }

    /// DETAIL -> LIST. Filters are kept.
    pub fn back_to_list(&mut self) {
        self.selected_account = None;
    }

    /// Drill-down data for the selected account, `None` in LIST mode.
    pub fn detail(&self, source: &dyn DetailSource) -> Option<DetailView> {
        let account = self.selected_account.as_ref()?;
        let transactions = source.transactions(&account.id);
        let chart = source.chart(&account.id);
        Some(DetailView {
            account: account.clone(),
            chart_total: chart_total(&chart),
            transactions,
            chart,
        })
    }
}

fn warn_duplicate_ids(session_id: &str, accounts: &[RiskAccount]) {
    let mut seen = HashSet::new();
    for account in accounts {
        if !seen.insert(account.id.as_str()) {
            log::warn!("[{session_id}] duplicate account id {}; id-keyed detail lookups are shared", account.id);
        }
    }
}
