//! Dataset loading — fetch the CSV resource, parse rows, normalise.
//!
//! RULE: nothing here panics or propagates past the view. A failed load
//! becomes an error message on the view state and the sample dataset
//! takes over for display.

use crate::{
    account::RiskAccount,
    error::{DashError, DashResult},
    normalizer::RecordNormalizer,
    types::RawRow,
    view::ViewState,
};
use std::{
    fs,
    io::ErrorKind,
    path::PathBuf,
};

/// What a transport hands back for one resource request.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    pub status:      u16,
    pub status_text: String,
    pub body:        Vec<u8>,
}

impl FetchResponse {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self { status: 200, status_text: "OK".into(), body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Where the CSV resource comes from. `Err` means the body could not be
/// read at all; a non-2xx status is still `Ok`.
pub trait CsvSource {
    fn fetch(&self, path: &str) -> DashResult<FetchResponse>;
}

/// Serves resources out of a directory, the way a static web root does.
#[derive(Debug, Clone)]
pub struct StaticDirSource {
    root: PathBuf,
}

impl StaticDirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

impl CsvSource for StaticDirSource {
    fn fetch(&self, path: &str) -> DashResult<FetchResponse> {
        let file = self.resolve(path);
        match fs::read(&file) {
            Ok(body) => Ok(FetchResponse::ok(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(FetchResponse {
                status:      404,
                status_text: "Not Found".into(),
                body:        Vec::new(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}

/// A canned response, whatever path is asked for.
#[derive(Debug, Clone)]
pub struct InlineSource {
    response: FetchResponse,
}

impl InlineSource {
    pub fn new(response: FetchResponse) -> Self {
        Self { response }
    }

    pub fn csv(body: impl Into<Vec<u8>>) -> Self {
        Self::new(FetchResponse::ok(body))
    }

    pub fn status(status: u16, status_text: impl Into<String>) -> Self {
        Self::new(FetchResponse { status, status_text: status_text.into(), body: Vec::new() })
    }
}

impl CsvSource for InlineSource {
    fn fetch(&self, _path: &str) -> DashResult<FetchResponse> {
        Ok(self.response.clone())
    }
}

/// Parse a CSV body into raw rows. Header row required, blank lines
/// skipped. Short rows simply lack the trailing columns; a body that is
/// not UTF-8 is a parse error.
pub fn parse_rows(body: &[u8]) -> DashResult<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body);

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(column, value)| (column.to_string(), value.to_string()))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

pub struct DatasetLoader<S: CsvSource> {
    source:     S,
    path:       String,
    normalizer: RecordNormalizer,
}

impl<S: CsvSource> DatasetLoader<S> {
    pub fn new(source: S, path: impl Into<String>) -> Self {
        Self {
            source,
            path: path.into(),
            normalizer: RecordNormalizer::new(),
        }
    }

    pub fn with_normalizer(mut self, normalizer: RecordNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Fetch, parse and normalise. Rows keep their file order.
    pub fn load(&self) -> DashResult<Vec<RiskAccount>> {
        let response = self.source.fetch(&self.path)?;
        if !response.is_success() {
            return Err(DashError::Fetch {
                path:        self.path.clone(),
                status:      response.status,
                status_text: response.status_text,
            });
        }

        let rows = parse_rows(&response.body)?;
        let accounts = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| self.normalizer.normalize(row, idx + 1))
            .collect();
        Ok(accounts)
    }

    /// Run one load and hand the outcome to `view`. Called once per
    /// view session; `view.loading` is false afterwards on every path.
    pub fn load_into(&self, view: &mut ViewState) {
        log::info!("[{}] loading dataset from {}", view.session_id(), self.path);
        let outcome = self.load();
        match &outcome {
            Ok(accounts) => log::info!(
                "[{}] loaded {} accounts from {}",
                view.session_id(),
                accounts.len(),
                self.path
            ),
            Err(e) => log::warn!("[{}] load of {} failed: {e}", view.session_id(), self.path),
        }
        view.finish_load(outcome);
    }
}
