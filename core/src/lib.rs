//! riskguard-core: data ingestion and view logic for the account-risk
//! dashboard. Risk scores arrive precomputed in a CSV resource; this
//! crate loads, normalises, filters and summarises them and tracks the
//! list/detail navigation state a presentation layer renders.

pub mod account;
pub mod config;
pub mod detail;
pub mod error;
pub mod event;
pub mod filter;
pub mod loader;
pub mod normalizer;
pub mod sample;
pub mod store;
pub mod summary;
pub mod types;
pub mod view;
