//! Reference table loading
//!
//! Both tables share one line format: `name, item1, item2, ...`.
//! Lines starting with `#` and blank lines are skipped. Malformed rows are
//! dropped with a warning rather than repaired.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::DEFAULT_DEGREE_LABELS;
use super::{DataError, Result};

/// Chords per key row, one per scale degree
pub const KEY_ROW_LENGTH: usize = 7;

const BUILTIN_SCALES: &str = include_str!("../../data/scales.txt");
const BUILTIN_PROGRESSIONS: &str = include_str!("../../data/progressions.txt");

/// One parsed, validated line of a reference table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub line: usize,
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable {
    pub rows: Vec<TableRow>,
    pub warnings: Vec<String>,
}

/// A key and its seven diatonic chords, index 0 = degree I
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEntry {
    pub name: String,
    pub chords: [String; KEY_ROW_LENGTH],
}

/// A named chord sequence in play order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionEntry {
    pub name: String,
    pub chords: Vec<String>,
}

/// Parse a comma-separated reference table
pub fn parse_table(text: &str, table: &str) -> Result<ParsedTable> {
    let mut parsed = ParsedTable::default();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() < 2 {
            parsed.warnings.push(format!(
                "Skipping invalid row at line {} of {}: insufficient columns",
                line_number, table
            ));
            continue;
        }

        let name = parts[0];
        if name.is_empty() {
            parsed.warnings.push(format!(
                "Skipping invalid row at line {} of {}: empty key name",
                line_number, table
            ));
            continue;
        }

        let items: Vec<String> = parts[1..]
            .iter()
            .filter(|item| !item.is_empty())
            .map(|item| item.to_string())
            .collect();
        if items.is_empty() {
            parsed.warnings.push(format!(
                "Skipping invalid row at line {} of {}: no data items",
                line_number, table
            ));
            continue;
        }

        parsed.rows.push(TableRow {
            line: line_number,
            name: name.to_string(),
            items,
        });
    }

    if parsed.rows.is_empty() {
        return Err(DataError::NoValidRows(table.to_string()));
    }

    Ok(parsed)
}

/// Parse the key table; rows must list exactly seven degree-ordered chords
pub fn parse_key_table(text: &str) -> Result<(Vec<KeyEntry>, Vec<String>)> {
    let ParsedTable { rows, mut warnings } = parse_table(text, "scales")?;
    let mut keys = Vec::with_capacity(rows.len());

    for row in rows {
        let found = row.items.len();
        match <[String; KEY_ROW_LENGTH]>::try_from(row.items) {
            Ok(chords) => keys.push(KeyEntry { name: row.name, chords }),
            Err(_) => warnings.push(
                DataError::KeyRowLength {
                    line: row.line,
                    name: row.name,
                    expected: KEY_ROW_LENGTH,
                    found,
                }
                .to_string(),
            ),
        }
    }

    if keys.is_empty() {
        return Err(DataError::NoValidRows("scales".to_string()));
    }
    Ok((keys, warnings))
}

pub fn parse_progression_table(text: &str) -> Result<(Vec<ProgressionEntry>, Vec<String>)> {
    let ParsedTable { rows, warnings } = parse_table(text, "progressions")?;
    let progressions = rows
        .into_iter()
        .map(|row| ProgressionEntry {
            name: row.name,
            chords: row.items,
        })
        .collect();
    Ok((progressions, warnings))
}

/// The immutable dataset the analyzer queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceData {
    pub keys: Vec<KeyEntry>,
    pub progressions: Vec<ProgressionEntry>,
    pub degree_labels: [String; KEY_ROW_LENGTH],
    /// Non-fatal problems seen while loading
    pub warnings: Vec<String>,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            progressions: Vec::new(),
            degree_labels: DEFAULT_DEGREE_LABELS.map(String::from),
            warnings: Vec::new(),
        }
    }
}

impl ReferenceData {
    /// Load both tables from text.
    ///
    /// A table that fails to parse is reported as a warning and left
    /// empty; only when both are unusable is the dataset unavailable.
    pub fn from_tables(scales: &str, progressions: &str) -> Result<Self> {
        let mut data = ReferenceData::default();

        match parse_key_table(scales) {
            Ok((keys, warnings)) => {
                data.keys = keys;
                data.warnings.extend(warnings);
            }
            Err(e) => data.warnings.push(format!("Failed to load scales: {}", e)),
        }

        match parse_progression_table(progressions) {
            Ok((entries, warnings)) => {
                data.progressions = entries;
                data.warnings.extend(warnings);
            }
            Err(e) => data.warnings.push(format!("Failed to load progressions: {}", e)),
        }

        if data.keys.is_empty() && data.progressions.is_empty() {
            log::error!("no chord or progression data could be loaded");
            return Err(DataError::Unavailable);
        }
        if data.keys.is_empty() {
            data.warnings.push(
                "Warning: No chord scale data available - chord analysis will be limited".to_string(),
            );
        }
        if data.progressions.is_empty() {
            data.warnings.push(
                "Warning: No progression data available - progression suggestions will be unavailable"
                    .to_string(),
            );
        }
        for warning in &data.warnings {
            log::warn!("{}", warning);
        }

        log::info!(
            "Loaded {} chord scales and {} chord progressions",
            data.keys.len(),
            data.progressions.len()
        );
        Ok(data)
    }

    /// Tables shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_tables(BUILTIN_SCALES, BUILTIN_PROGRESSIONS)
    }

    pub fn from_files(scales: impl AsRef<Path>, progressions: impl AsRef<Path>) -> Result<Self> {
        let scales = std::fs::read_to_string(scales)?;
        let progressions = std::fs::read_to_string(progressions)?;
        Self::from_tables(&scales, &progressions)
    }

    pub fn with_degree_labels(mut self, labels: [String; KEY_ROW_LENGTH]) -> Self {
        self.degree_labels = labels;
        self
    }

    /// Both tables present
    pub fn is_loaded(&self) -> bool {
        !self.keys.is_empty() && !self.progressions.is_empty()
    }

    pub fn key(&self, name: &str) -> Option<&KeyEntry> {
        self.keys.iter().find(|k| k.name == name)
    }
}
