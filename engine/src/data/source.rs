// Loading raw inputs. This is the only asynchronous part of the pipeline; each
// read is bounded by a timeout.
use std::path::Path;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{info, warn};

use super::rates::RateTable;
use crate::error::{EngineError, Result};

/// Reads the CSV text at `path`, failing if it takes longer than `limit`.
pub async fn load_text(path: &Path, limit: Duration) -> Result<String> {
    let text = match timeout(limit, tokio::fs::read_to_string(path)).await {
        Ok(read) => read?,
        Err(_) => {
            return Err(EngineError::Timeout {
                what: path.display().to_string(),
                millis: limit.as_millis() as u64,
            })
        }
    };
    info!(path = %path.display(), bytes = text.len(), "Loaded CSV text");
    Ok(text)
}

/// Loads the rate table. Never fails: an absent path, a slow or failed read,
/// or an unparseable file all yield the default table.
pub async fn load_rates(path: Option<&Path>, limit: Duration) -> RateTable {
    let Some(path) = path else {
        return RateTable::default();
    };
    let loaded = load_text(path, limit)
        .await
        .and_then(|text| RateTable::from_json(&text));
    match loaded {
        Ok(table) => {
            info!(path = %path.display(), currencies = table.codes().len(), "Loaded rate table");
            table
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Falling back to default rate table");
            RateTable::default()
        }
    }
}
