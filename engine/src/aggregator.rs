// Grand total and per-product subtotals over normalized records.
use std::collections::BTreeMap;

use shared::models::{AggregationResult, Record, RegionFilter, UNKNOWN_PRODUCT};
use shared::utils::compare_keys;
use tracing::debug;

/// Sums the records passing `filter`, grouped by product. Raw amounts are
/// summed first and multiplied by `rate` once per total; a rate that is not
/// finite and positive is treated as 1.
pub fn aggregate(records: &[Record], filter: &RegionFilter, rate: f64) -> AggregationResult {
    let rate = if rate.is_finite() && rate > 0.0 { rate } else { 1.0 };

    let mut raw_total = 0.0;
    let mut raw_groups: BTreeMap<String, f64> = BTreeMap::new();
    let mut included = 0usize;

    for record in records.iter().filter(|r| filter.matches(r)) {
        let key = if record.product.trim().is_empty() {
            UNKNOWN_PRODUCT
        } else {
            record.product.as_str()
        };
        raw_total += record.sales;
        *raw_groups.entry(key.to_string()).or_insert(0.0) += record.sales;
        included += 1;
    }

    debug!(included, groups = raw_groups.len(), raw_total, rate, "Aggregated records");

    AggregationResult {
        total: raw_total * rate,
        by_group: raw_groups
            .into_iter()
            .map(|(name, sum)| (name, sum * rate))
            .collect(),
    }
}

/// Distinct non-blank regions, in display order.
pub fn distinct_regions(records: &[Record]) -> Vec<String> {
    let mut regions: Vec<String> = records
        .iter()
        .map(|r| r.region.trim())
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .collect();
    regions.sort_by(|a, b| compare_keys(a, b));
    regions.dedup();
    regions
}
