use serde::Serialize;

use crate::error::{Error, Result};

/// Data rows shown under the header
pub const PREVIEW_ROWS: usize = 5;

/// First rows of a CSV file, shown before it is uploaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsvPreview {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvPreview {
    /// Parses the header and up to five data rows, ignoring blank lines.
    ///
    /// A file without at least one data row is rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .take(PREVIEW_ROWS + 1)
            .collect();

        if lines.len() < 2 {
            return Err(Error::InvalidInput(
                "CSV file must contain a header row and at least one data row".to_string(),
            ));
        }

        let joined = lines.join("\n");
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(joined.as_bytes());

        let headers = reader.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record?.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }
}

/// Import dialog after a file was picked
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ImportDialog {
    Invalid { file_name: String, message: String },
    Ready { file_name: String, preview: CsvPreview },
}

impl ImportDialog {
    pub fn load(file_name: impl Into<String>, text: &str) -> Self {
        let file_name = file_name.into();
        match CsvPreview::parse(text) {
            Ok(preview) => ImportDialog::Ready { file_name, preview },
            Err(err) => ImportDialog::Invalid {
                file_name,
                message: err.to_string(),
            },
        }
    }

    pub fn can_import(&self) -> bool {
        matches!(self, ImportDialog::Ready { .. })
    }

    pub fn preview(&self) -> Option<&CsvPreview> {
        match self {
            ImportDialog::Ready { preview, .. } => Some(preview),
            ImportDialog::Invalid { .. } => None,
        }
    }
}
