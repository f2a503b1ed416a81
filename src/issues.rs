//! Categorized, append-only record of per-file problems.
//!
//! The log is a plain value passed by `&mut` through the pipeline. It holds no
//! lock; callers that process albums concurrently must synchronize access
//! themselves.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

/// Issue categories, in the order they appear in the saved log.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    MissingMetadata,
    InvalidMetadata,
    InvalidFilenames,
    InvalidFolders,
    InvalidDateMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueEntry {
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Raw date value for `invalid_date_metadata` entries (`null` when absent).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_field: Option<Option<String>>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct IssueLog {
    entries: BTreeMap<IssueKind, Vec<IssueEntry>>,
}

impl IssueLog {
    /// Create a log that always serializes the given categories, even when empty.
    pub fn with_categories(kinds: &[IssueKind]) -> Self {
        Self {
            entries: kinds.iter().map(|k| (*k, Vec::new())).collect(),
        }
    }

    /// Categories reported by the reorganize pipeline.
    pub fn for_reorganize() -> Self {
        Self::with_categories(&[
            IssueKind::MissingMetadata,
            IssueKind::InvalidMetadata,
            IssueKind::InvalidFilenames,
            IssueKind::InvalidFolders,
            IssueKind::InvalidDateMetadata,
        ])
    }

    /// Categories reported by the metadata audit.
    pub fn for_audit() -> Self {
        Self::with_categories(&[
            IssueKind::MissingMetadata,
            IssueKind::InvalidMetadata,
            IssueKind::InvalidDateMetadata,
        ])
    }

    /// Categories reported by the file prefixer.
    pub fn for_prefix() -> Self {
        Self::with_categories(&[IssueKind::InvalidFilenames])
    }

    pub fn push(&mut self, kind: IssueKind, entry: IssueEntry) {
        self.entries.entry(kind).or_default().push(entry);
    }

    /// Record an error raised while handling `file`.
    pub fn error(&mut self, kind: IssueKind, file: &Path, error: impl ToString) {
        self.push(
            kind,
            IssueEntry {
                file: file.display().to_string(),
                error: Some(error.to_string()),
                message: None,
                date_field: None,
            },
        );
    }

    /// Record a descriptive message about `file`.
    pub fn message(&mut self, kind: IssueKind, file: &Path, message: impl ToString) {
        self.push(
            kind,
            IssueEntry {
                file: file.display().to_string(),
                error: None,
                message: Some(message.to_string()),
                date_field: None,
            },
        );
    }

    pub fn invalid_date(&mut self, file: &Path, raw: Option<&str>) {
        self.push(
            IssueKind::InvalidDateMetadata,
            IssueEntry {
                file: file.display().to_string(),
                error: None,
                message: Some("Invalid or missing date field".to_string()),
                date_field: Some(raw.map(str::to_string)),
            },
        );
    }

    #[cfg(test)]
    pub fn entries(&self, kind: IssueKind) -> &[IssueEntry] {
        self.entries.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write the log to `path`, replacing any previous content.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
