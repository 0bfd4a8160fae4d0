// Presentation boundary: keeps the last good dataset and rate table and turns
// a selection into display-ready values.
use shared::models::{AggregationResult, DashboardView, GroupTotal, Record, Selection};
use shared::utils::format_amount;
use tracing::{info, warn};

use crate::aggregator::{aggregate, distinct_regions};
use crate::data::normalizer::Dataset;
use crate::data::rates::RateTable;
use crate::error::{EngineError, Result};

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    dataset: Option<Dataset>,
    records: Vec<Record>,
    regions: Vec<String>,
    rates: RateTable,
}

impl Dashboard {
    pub fn new(rates: RateTable) -> Self {
        Dashboard {
            rates,
            ..Default::default()
        }
    }

    /// Parses and normalizes `text`. On failure the previously loaded data is
    /// left untouched. Returns the number of records loaded.
    pub fn load_csv(&mut self, text: &str) -> Result<usize> {
        let dataset = match Dataset::from_text(text) {
            Ok(dataset) => dataset,
            Err(e) => {
                warn!(error = %e, kept_records = self.records.len(), "CSV load failed, keeping previous data");
                return Err(e);
            }
        };
        let records = dataset.records();
        self.regions = distinct_regions(&records);
        self.records = records;
        self.dataset = Some(dataset);
        info!(records = self.records.len(), regions = self.regions.len(), "Dashboard data replaced");
        Ok(self.records.len())
    }

    pub fn aggregate(&self, selection: &Selection) -> AggregationResult {
        let rate = self.rates.rate_for(&selection.currency);
        aggregate(&self.records, &selection.region, rate)
    }

    pub fn render(&self, selection: &Selection) -> DashboardView {
        let result = self.aggregate(selection);
        DashboardView {
            currency: selection.currency.clone(),
            total: format_amount(result.total),
            groups: result
                .ordered_groups()
                .into_iter()
                .map(|(name, value)| GroupTotal {
                    name: name.to_string(),
                    value: format_amount(value),
                })
                .collect(),
            regions: self.regions.clone(),
            currencies: self.rates.codes(),
        }
    }

    /// Unconverted sum of a single column of the loaded dataset.
    pub fn column_total(&self, column: &str) -> Result<f64> {
        self.dataset
            .as_ref()
            .ok_or(EngineError::EmptyInput)?
            .column_total(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::RegionFilter;
    use std::collections::BTreeMap;

    const CSV: &str = "Product,Region,Sales\nWidget,North,100\nGadget,South,50.5\nWidget,South,25\n";

    fn loaded() -> Dashboard {
        let rates = RateTable::new(BTreeMap::from([
            ("INR".to_string(), 1.0),
            ("USD".to_string(), 2.0),
        ]));
        let mut dashboard = Dashboard::new(rates);
        dashboard.load_csv(CSV).unwrap();
        dashboard
    }

    #[test]
    fn test_render_all_regions() {
        let view = loaded().render(&Selection::new(RegionFilter::All, "INR"));
        assert_eq!(view.total, "175.50");
        assert_eq!(
            view.groups,
            vec![
                GroupTotal { name: "Gadget".into(), value: "50.50".into() },
                GroupTotal { name: "Widget".into(), value: "125".into() },
            ]
        );
        assert_eq!(view.regions, vec!["North".to_string(), "South".to_string()]);
        assert_eq!(view.currencies, vec!["INR".to_string(), "USD".to_string()]);
    }

    #[test]
    fn test_render_with_filter_and_currency() {
        let view = loaded().render(&Selection::new(RegionFilter::Region("South".into()), "USD"));
        assert_eq!(view.total, "151");
        assert_eq!(view.groups.len(), 2);
        assert_eq!(view.currency, "USD");
    }

    #[test]
    fn test_unknown_currency_uses_identity() {
        let view = loaded().render(&Selection::new(RegionFilter::All, "EUR"));
        assert_eq!(view.total, "175.50");
    }

    #[test]
    fn test_failed_load_keeps_last_good_state() {
        let mut dashboard = loaded();
        assert!(matches!(dashboard.load_csv(""), Err(EngineError::EmptyInput)));
        let view = dashboard.render(&Selection::new(RegionFilter::All, "INR"));
        assert_eq!(view.total, "175.50");
        assert_eq!(view.groups.len(), 2);
        assert_eq!(view.regions, vec!["North".to_string(), "South".to_string()]);
    }

    #[test]
    fn test_render_before_load() {
        let dashboard = Dashboard::default();
        let view = dashboard.render(&Selection::new(RegionFilter::All, "INR"));
        assert_eq!(view.total, "0");
        assert!(view.groups.is_empty());
        assert_eq!(view.currencies, vec!["INR".to_string()]);
        assert!(matches!(dashboard.column_total("sales"), Err(EngineError::EmptyInput)));
    }

    #[test]
    fn test_column_total() {
        assert_eq!(loaded().column_total("sales").unwrap(), 175.5);
    }
}
