use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("Failed to fetch CSV file: {status_text}")]
    Fetch {
        path:        String,
        status:      u16,
        status_text: String,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Parse(#[from] csv::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The two failure classes a dataset load can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// Transport status or body read failed.
    Fetch,
    /// The body arrived but was not valid CSV.
    Parse,
}

impl DashError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            Self::Parse(_) => LoadErrorKind::Parse,
            _              => LoadErrorKind::Fetch,
        }
    }

    /// The status line shown above the table when a load fails.
    pub fn load_message(&self) -> String {
        match self.kind() {
            LoadErrorKind::Fetch => format!("Failed to load CSV file: {self}"),
            LoadErrorKind::Parse => format!("Failed to parse CSV file: {self}"),
        }
    }
}

pub type DashResult<T> = Result<T, DashError>;
