use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Product name used when a row carries no product value.
pub const UNKNOWN_PRODUCT: &str = "Unknown";

/// Selection value meaning "do not filter by region".
pub const ALL_REGIONS: &str = "all";

/// One normalized data row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub product: String,
    /// Empty string means the region is unspecified.
    pub region: String,
    /// Always finite.
    pub sales: f64,
}

impl Record {
    pub fn new(product: impl Into<String>, region: impl Into<String>, sales: f64) -> Self {
        let product = product.into();
        Self {
            product: if product.trim().is_empty() { UNKNOWN_PRODUCT.to_string() } else { product },
            region: region.into(),
            sales: if sales.is_finite() { sales } else { 0.0 },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RegionFilter {
    #[default]
    All,
    Region(String),
}

impl RegionFilter {
    /// Maps a raw control value onto a filter. Unset, blank and the "all"
    /// sentinel all mean no filtering.
    pub fn from_selection(selection: Option<&str>) -> Self {
        match selection.map(str::trim) {
            None | Some("") | Some(ALL_REGIONS) => RegionFilter::All,
            Some(region) => RegionFilter::Region(region.to_string()),
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Region(region) => record.region == *region,
        }
    }
}

/// Everything the aggregation depends on besides the records themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub region: RegionFilter,
    pub currency: String,
}

impl Selection {
    pub fn new(region: RegionFilter, currency: impl Into<String>) -> Self {
        Self { region, currency: currency.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregationResult {
    pub total: f64,
    pub by_group: BTreeMap<String, f64>,
}

impl AggregationResult {
    /// Groups in display order.
    pub fn ordered_groups(&self) -> Vec<(&str, f64)> {
        let mut groups: Vec<(&str, f64)> = self
            .by_group
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect();
        groups.sort_by(|a, b| crate::utils::compare_keys(a.0, b.0));
        groups
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTotal {
    pub name: String,
    pub value: String,
}

/// What the presentation layer receives for one render.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardView {
    pub currency: String,
    pub total: String,
    pub groups: Vec<GroupTotal>,
    pub regions: Vec<String>,
    pub currencies: Vec<String>,
}
