//! Dashboard records: purchases, returns and messages.
//!
//! Records are read from a JSON array on disk. Every record carries a
//! seller (or message counterparty) and a date so the filter panel can narrow
//! the list.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::filter::Filterable;
use crate::ui::core::actions::Panel;

/// Kind of dashboard record.
///
/// Deserialized from lowercase tags; an unknown tag fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Purchase,
    Return,
    Message,
}

impl RecordKind {
    /// Short badge text shown in the record list
    pub fn badge(&self) -> &'static str {
        match self {
            RecordKind::Purchase => "BUY",
            RecordKind::Return => "RET",
            RecordKind::Message => "MSG",
        }
    }

    /// Dashboard panel that lists records of this kind
    pub fn panel(&self) -> Panel {
        match self {
            RecordKind::Purchase => Panel::Purchases,
            RecordKind::Return => Panel::Returns,
            RecordKind::Message => Panel::Messages,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub kind: RecordKind,
    /// Seller name, or the counterparty for messages
    pub seller: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub amount_cents: Option<i64>,
}

impl Filterable for Record {
    fn seller(&self) -> &str {
        &self.seller
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Format an amount in cents as `123.45`
pub fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Parse records from a JSON array
pub fn parse_records(json: &str) -> Result<Vec<Record>> {
    serde_json::from_str(json).context("Failed to parse records JSON")
}

/// Load records from a JSON file
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read records file: {}", path.as_ref().display()))?;
    let records = parse_records(&content)
        .with_context(|| format!("Invalid records file: {}", path.as_ref().display()))?;
    log::info!("Loaded {} records from {}", records.len(), path.as_ref().display());
    Ok(records)
}

/// Records belonging to one dashboard panel, in file order
pub fn records_for_panel(records: &[Record], panel: Panel) -> Vec<Record> {
    records.iter().filter(|r| r.kind.panel() == panel).cloned().collect()
}
