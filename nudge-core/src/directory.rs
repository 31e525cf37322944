//! Identity directory: reviewer email to Slack handle
//!
//! Loaded once per run from a CSV file with `email` and `slack` columns
//! (extra columns are ignored). The run controller constructs it up front
//! and passes it down; nothing re-reads the file mid-run.

use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::Result;

#[derive(Debug, Deserialize)]
struct Row {
    #[serde(default)]
    email: String,
    #[serde(default)]
    slack: String,
}

/// Mapping from reviewer email to Slack handle
#[derive(Debug, Clone, Default)]
pub struct IdentityDirectory {
    handles: HashMap<String, String>,
}

impl IdentityDirectory {
    /// Load the directory from a CSV file
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let directory = Self::from_reader(file)?;
        debug!(path = %path.display(), entries = directory.len(), "Loaded identity directory");
        Ok(directory)
    }

    /// Load the directory from any CSV reader
    ///
    /// Rows with a blank email or handle are skipped. Duplicate emails are
    /// first-seen-wins, matching the accumulation order of the source file.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut handles = HashMap::new();

        for row in csv_reader.deserialize::<Row>() {
            let row = row?;
            if row.email.is_empty() || row.slack.is_empty() {
                warn!(email = %row.email, "Skipping identity row with a blank field");
                continue;
            }
            handles.entry(row.email).or_insert(row.slack);
        }

        Ok(Self { handles })
    }

    /// Resolve an email to its Slack handle
    ///
    /// Exact, case-sensitive match; unknown emails resolve to `None` and the
    /// caller drops them from the reminder.
    pub fn resolve(&self, email: &str) -> Option<&str> {
        self.handles.get(email).map(String::as_str)
    }

    /// Number of known identities
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether the directory is empty
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
