// Turns parsed rows into records. One `Dataset` backs both views: the full
// record view and the single-column total.
use std::collections::HashMap;

use shared::models::Record;
use tracing::{debug, info};

use super::csv_parser::{self, Row};
use crate::error::{EngineError, Result};

pub const PRODUCT_ALIASES: &[&str] = &["product", "item", "name"];
pub const REGION_ALIASES: &[&str] = &["region", "area"];
pub const SALES_ALIASES: &[&str] = &["sales", "amount", "total"];

/// Header row with a case-insensitive name lookup.
#[derive(Debug, Clone)]
pub struct Header {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl Header {
    pub fn new(row: &[String]) -> Self {
        let names: Vec<String> = row.iter().map(|name| name.trim().to_string()).collect();
        let mut index = HashMap::new();
        for (pos, name) in names.iter().enumerate() {
            // The leftmost column wins when a name repeats.
            index.entry(name.to_lowercase()).or_insert(pos);
        }
        Header { names, index }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(&name.trim().to_lowercase()).copied()
    }

    /// First alias present in the header, tried in priority order.
    pub fn resolve(&self, aliases: &[&str]) -> Option<usize> {
        aliases.iter().find_map(|alias| self.position(alias))
    }
}

/// Column positions of the recognised fields, resolved once per header.
#[derive(Debug, Clone, Copy)]
struct FieldMap {
    product: Option<usize>,
    region: Option<usize>,
    sales: Option<usize>,
}

impl FieldMap {
    fn new(header: &Header) -> Self {
        FieldMap {
            product: header.resolve(PRODUCT_ALIASES),
            region: header.resolve(REGION_ALIASES),
            sales: header.resolve(SALES_ALIASES),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dataset {
    header: Header,
    rows: Vec<Row>,
}

impl Dataset {
    /// Parses `text` and splits off the header row.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut rows = csv_parser::parse(text).into_iter();
        let header = rows.next().ok_or(EngineError::EmptyInput)?;
        let dataset = Dataset {
            header: Header::new(&header),
            rows: rows.collect(),
        };
        info!(
            columns = dataset.header.names().len(),
            rows = dataset.rows.len(),
            "Loaded CSV dataset"
        );
        Ok(dataset)
    }

    /// Keyed view: one record per data row. Missing fields fall back to their
    /// defaults and unparseable amounts count as 0.
    pub fn records(&self) -> Vec<Record> {
        let fields = FieldMap::new(&self.header);
        self.rows.iter().map(|row| to_record(row, fields)).collect()
    }

    /// Column view: sums the column named `column` (case-insensitive). Blank or
    /// unparseable cells are skipped rather than counted as 0.
    pub fn column_total(&self, column: &str) -> Result<f64> {
        let pos = self.header.position(column).ok_or_else(|| EngineError::MissingColumn {
            column: column.to_string(),
            found: self.header.names().to_vec(),
        })?;

        let mut total = 0.0;
        let mut skipped = 0usize;
        for row in &self.rows {
            let Some(raw) = row.get(pos) else {
                skipped += 1;
                continue;
            };
            match parse_numeric_cell(raw) {
                Some(value) => total += value,
                None => skipped += 1,
            }
        }
        debug!(column, total, skipped, "Summed single column");
        Ok(total)
    }
}

fn cell(row: &[String], pos: Option<usize>) -> &str {
    pos.and_then(|p| row.get(p)).map(|c| c.trim()).unwrap_or("")
}

fn to_record(row: &[String], fields: FieldMap) -> Record {
    let sales_raw = match fields.sales.and_then(|p| row.get(p)) {
        Some(raw) => raw.as_str(),
        None => "0",
    };
    Record::new(
        cell(row, fields.product),
        cell(row, fields.region),
        coerce_sales(sales_raw),
    )
}

/// Strips everything but digits, dots and minus signs, then parses. Anything
/// that still fails to parse, or parses to a non-finite value, is 0.
pub fn coerce_sales(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Cell parsing for the column view: keeps digits, sign, dot and exponent
/// characters. Returns `None` for blank, unparseable or non-finite cells.
pub fn parse_numeric_cell(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let cleaned: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
        .collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
