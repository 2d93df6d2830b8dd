//! User interactions with the dashboard.
//!
//! RULE: after the load completes, view state changes ONLY by applying
//! one of these events. Variants are appended, never reordered.

use crate::account::RiskLevelFilter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewEvent {
    // ── List view ──────────────────────────────────
    SearchChanged {
        term: String,
    },
    RiskLevelChanged {
        level: RiskLevelFilter,
    },

    // ── Navigation ─────────────────────────────────
    /// Index into the currently visible (filtered) table rows.
    RowSelected {
        row: usize,
    },
    BackToList,
}

impl ViewEvent {
    /// Stable name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SearchChanged { .. }    => "search_changed",
            Self::RiskLevelChanged { .. } => "risk_level_changed",
            Self::RowSelected { .. }      => "row_selected",
            Self::BackToList              => "back_to_list",
        }
    }
}
