// Text front end: loads the configured CSV and rate table, renders one view.
use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use engine::config::settings::EngineSettings;
use engine::data::source::{load_rates, load_text};
use engine::services::report::{render_text, write_summary_csv};
use engine::services::Dashboard;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = EngineSettings::load(config_path.as_deref())?;
    info!(csv = %settings.csv_path.display(), currency = %settings.currency, "Starting sales dashboard");

    let timeout = settings.fetch_timeout();
    let rates = load_rates(settings.rates_path.as_deref(), timeout).await;
    let text = load_text(&settings.csv_path, timeout)
        .await
        .with_context(|| format!("Failed to load CSV from {}", settings.csv_path.display()))?;

    let mut dashboard = Dashboard::new(rates);
    dashboard.load_csv(&text)?;

    let view = dashboard.render(&settings.selection());
    print!("{}", render_text(&view));

    match dashboard.column_total(&settings.sales_column) {
        Ok(total) => info!(column = %settings.sales_column, total, "Raw column total"),
        Err(e) => warn!(error = %e, "Column total unavailable"),
    }

    if let Some(path) = &settings.export_path {
        let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        write_summary_csv(&view, file)?;
        info!(path = %path.display(), "Wrote summary CSV");
    }

    Ok(())
}
