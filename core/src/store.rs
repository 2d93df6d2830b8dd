//! SQLite-backed detail source.
//!
//! RULE: only store.rs talks to the database. Read failures are logged
//! and surface as empty lists so the detail view never errors.

use crate::{
    account::Tone,
    detail::{ChartSlice, DetailSource, Transaction, TransactionStatus, TransactionType},
    error::DashResult,
};
use rusqlite::{params, Connection};

pub struct SqliteDetailSource {
    conn: Connection,
}

impl SqliteDetailSource {
    /// Open (or create) the detail database at `path`.
    pub fn open(path: &str) -> DashResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> DashResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> DashResult<()> {
        self.conn.execute_batch(include_str!("../../migrations/001_detail.sql"))?;
        Ok(())
    }

    /// Copy every listed account's rows out of another source.
    /// Existing rows for those accounts are replaced.
    pub fn seed_from(&mut self, source: &dyn DetailSource, account_ids: &[String]) -> DashResult<()> {
        let tx = self.conn.transaction()?;
        for account_id in account_ids {
            tx.execute("DELETE FROM account_transaction WHERE account_id = ?1", params![account_id])?;
            tx.execute("DELETE FROM chart_slice WHERE account_id = ?1", params![account_id])?;

            for (seq, t) in source.transactions(account_id).iter().enumerate() {
                tx.execute(
                    "INSERT INTO account_transaction
                        (txn_id, account_id, txn_date, txn_type, amount, description, status, location, seq)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                    params![
                        t.id,
                        account_id,
                        t.date,
                        t.txn_type.as_str(),
                        t.amount,
                        t.description,
                        t.status.as_str(),
                        t.location,
                        seq as i64,
                    ],
                )?;
            }

            for (seq, slice) in source.chart(account_id).iter().enumerate() {
                let tone = serde_json::to_value(slice.tone)?;
                tx.execute(
                    "INSERT INTO chart_slice (account_id, seq, name, value, tone)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![account_id, seq as i64, slice.name, slice.value as i64, tone.as_str()],
                )?;
            }
        }
        tx.commit()?;
        log::info!("seeded detail data for {} accounts", account_ids.len());
        Ok(())
    }

    // ── Queries ────────────────────────────────────────────────

    pub fn query_transactions(&self, account_id: &str) -> DashResult<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(
            "SELECT txn_id, txn_date, txn_type, amount, description, status, location
             FROM account_transaction WHERE account_id = ?1
             ORDER BY seq ASC",
        )?;
        let raw = stmt
            .query_map(params![account_id], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, f64>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                    row.get::<_, Option<String>>(6)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let rows = raw
            .into_iter()
            .filter_map(|(id, date, txn_type, amount, description, status, location)| {
                let (Some(txn_type), Some(status)) =
                    (TransactionType::parse(&txn_type), TransactionStatus::parse(&status))
                else {
                    log::warn!("skipping transaction {id} with unknown type or status");
                    return None;
                };
                Some(Transaction { id, date, txn_type, amount, description, status, location })
            })
            .collect();
        Ok(rows)
    }

    pub fn query_chart(&self, account_id: &str) -> DashResult<Vec<ChartSlice>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, value, tone FROM chart_slice
             WHERE account_id = ?1 ORDER BY seq ASC",
        )?;
        let raw = stmt
            .query_map(params![account_id], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        raw.into_iter()
            .map(|(name, value, tone)| -> DashResult<ChartSlice> {
                let tone: Tone = serde_json::from_value(serde_json::Value::String(tone))?;
                Ok(ChartSlice { name, value: value.max(0) as u64, tone })
            })
            .collect()
    }
}

impl DetailSource for SqliteDetailSource {
    fn transactions(&self, account_id: &str) -> Vec<Transaction> {
        self.query_transactions(account_id).unwrap_or_else(|e| {
            log::warn!("transaction lookup for {account_id} failed: {e}");
            Vec::new()
        })
    }

    fn chart(&self, account_id: &str) -> Vec<ChartSlice> {
        self.query_chart(account_id).unwrap_or_else(|e| {
            log::warn!("chart lookup for {account_id} failed: {e}");
            Vec::new()
        })
    }
}
