//! Complexity ledger: the externally maintained per-problem rows of time and
//! space complexity and approach names.
//!
//! The ledger is a JSON array of objects (a spreadsheet's record export) with
//! `Time`, `Space` and `Ways` columns. Each column holds a `"; "`-separated
//! list, one item per approach. Rows are keyed by position only.

use std::path::Path;
use std::time::Duration;

use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

/// Separator between approaches inside one ledger cell.
pub const CELL_DELIMITER: &str = "; ";

/// Errors from loading the ledger.
#[derive(Debug, Error, Diagnostic)]
pub enum LedgerError {
    #[error("failed to read ledger {location}: {message}")]
    #[diagnostic(
        code(leetdocs::ledger::read),
        help(
            "Point `ledger` in leetdocs.toml at a readable JSON file, \
             or at an http(s) URL serving the sheet's JSON export."
        )
    )]
    Read { location: String, message: String },

    #[error("failed to parse ledger {location}: {message}")]
    #[diagnostic(
        code(leetdocs::ledger::parse),
        help("The ledger must be a JSON array of objects with Time, Space and Ways fields.")
    )]
    Parse { location: String, message: String },
}

pub type LedgerResult<T> = std::result::Result<T, LedgerError>;

/// One problem's complexity data, split into per-approach lists.
///
/// The three lists are expected to have equal length when more than one
/// approach exists; this is not checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerRow {
    pub time_complexities: Vec<String>,
    pub space_complexities: Vec<String>,
    pub approach_labels: Vec<String>,
}

impl LedgerRow {
    /// Build a row from raw cell text.
    pub fn from_cells(time: &str, space: &str, ways: &str) -> Self {
        Self {
            time_complexities: split_cell(time),
            space_complexities: split_cell(space),
            approach_labels: split_cell(ways),
        }
    }

    /// Whether the row documents more than one approach.
    pub fn has_multiple_approaches(&self) -> bool {
        self.approach_labels.len() > 1
    }
}

fn split_cell(cell: &str) -> Vec<String> {
    cell.split(CELL_DELIMITER).map(str::to_string).collect()
}

#[derive(Deserialize)]
struct RawRow {
    #[serde(rename = "Time", default, deserialize_with = "cell_text")]
    time: String,
    #[serde(rename = "Space", default, deserialize_with = "cell_text")]
    space: String,
    #[serde(rename = "Ways", default, deserialize_with = "cell_text")]
    ways: String,
}

/// Spreadsheet exports type numeric-looking cells as numbers; take any scalar.
fn cell_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Ordered, read-only ledger rows.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    rows: Vec<LedgerRow>,
}

impl Ledger {
    pub fn new(rows: Vec<LedgerRow>) -> Self {
        Self { rows }
    }

    /// Load from a local path or an `http(s)` URL. `timeout` bounds the download.
    pub fn load(location: &str, timeout: Duration) -> LedgerResult<Self> {
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::fetch(location, timeout)
        } else {
            Self::open(Path::new(location))
        }
    }

    /// Read a ledger JSON file.
    pub fn open(path: &Path) -> LedgerResult<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| LedgerError::Read {
            location: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&path.display().to_string(), &data)
    }

    /// Download a ledger JSON export.
    pub fn fetch(url: &str, timeout: Duration) -> LedgerResult<Self> {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        let body = agent
            .get(url)
            .call()
            .map_err(|e| LedgerError::Read {
                location: url.into(),
                message: e.to_string(),
            })?
            .into_string()
            .map_err(|e| LedgerError::Read {
                location: url.into(),
                message: format!("read body: {e}"),
            })?;
        Self::parse(url, &body)
    }

    /// Parse ledger rows from JSON text.
    pub fn parse(location: &str, json: &str) -> LedgerResult<Self> {
        let raw: Vec<RawRow> = serde_json::from_str(json).map_err(|e| LedgerError::Parse {
            location: location.into(),
            message: e.to_string(),
        })?;
        let rows: Vec<LedgerRow> = raw
            .iter()
            .map(|r| LedgerRow::from_cells(&r.time, &r.space, &r.ways))
            .collect();
        tracing::info!(location, rows = rows.len(), "loaded ledger");
        Ok(Self { rows })
    }

    /// Row at `position`, if the ledger is long enough.
    pub fn row(&self, position: usize) -> Option<&LedgerRow> {
        self.rows.get(position)
    }

    pub fn truncate(&mut self, n: usize) {
        self.rows.truncate(n);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_http::{StubResponse, StubServer};
    use std::time::Instant;

    #[test]
    fn cells_split_on_delimiter() {
        let row = LedgerRow::from_cells("O(n); O(n log n)", "O(1); O(n)", "Two pointers; Sort");
        assert_eq!(row.time_complexities, vec!["O(n)", "O(n log n)"]);
        assert_eq!(row.space_complexities, vec!["O(1)", "O(n)"]);
        assert_eq!(row.approach_labels, vec!["Two pointers", "Sort"]);
        assert!(row.has_multiple_approaches());
    }

    #[test]
    fn empty_cell_is_one_empty_item() {
        let row = LedgerRow::from_cells("O(n)", "O(1)", "");
        assert_eq!(row.approach_labels, vec![""]);
        assert!(!row.has_multiple_approaches());
    }

    #[test]
    fn parse_accepts_numbers_and_missing_columns() {
        let json = r#"[
            {"Time": "O(n)", "Space": "O(1)", "Ways": "Hash map", "No": 1},
            {"Time": 1, "Space": null}
        ]"#;
        let ledger = Ledger::parse("inline", json).unwrap();
        assert_eq!(ledger.len(), 2);
        let second = ledger.row(1).unwrap();
        assert_eq!(second.time_complexities, vec!["1"]);
        assert_eq!(second.space_complexities, vec![""]);
        assert_eq!(second.approach_labels, vec![""]);
        assert!(ledger.row(2).is_none());
    }

    #[test]
    fn parse_rejects_non_array() {
        let err = Ledger::parse("inline", r#"{"Time": "O(n)"}"#).unwrap_err();
        assert!(matches!(err, LedgerError::Parse { .. }));
    }

    #[test]
    fn open_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        std::fs::write(&path, r#"[{"Time": "O(1)", "Space": "O(1)", "Ways": "Math"}]"#).unwrap();
        let ledger = Ledger::load(path.to_str().unwrap(), Duration::from_secs(1)).unwrap();
        assert_eq!(ledger.row(0).unwrap().approach_labels, vec!["Math"]);
    }

    #[test]
    fn open_missing_file_is_read_error() {
        let err = Ledger::open(Path::new("/nonexistent/ledger.json")).unwrap_err();
        assert!(matches!(err, LedgerError::Read { .. }));
    }

    #[test]
    fn load_downloads_url() {
        let server = StubServer::start(vec![StubResponse::ok(
            r#"[{"Time": "O(n)", "Space": "O(1)", "Ways": "Scan"}]"#,
        )]);
        let url = format!("{}/ledger.json", server.base_url);
        let ledger = Ledger::load(&url, Duration::from_secs(5)).unwrap();
        assert_eq!(ledger.row(0).unwrap().approach_labels, vec!["Scan"]);

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/ledger.json");
    }

    #[test]
    fn stalled_download_times_out() {
        // Accepts connections into the backlog but never answers.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/ledger.json", listener.local_addr().unwrap());

        let started = Instant::now();
        let err = Ledger::fetch(&url, Duration::from_millis(200)).unwrap_err();
        assert!(matches!(err, LedgerError::Read { .. }));
        assert!(started.elapsed() < Duration::from_secs(5));
        drop(listener);
    }

    #[test]
    fn error_status_is_read_error() {
        let server = StubServer::start(vec![StubResponse::status(503, "busy")]);
        let url = format!("{}/ledger.json", server.base_url);
        let err = Ledger::fetch(&url, Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, LedgerError::Read { .. }));
    }
}
