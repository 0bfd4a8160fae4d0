// Text and CSV renderings of a dashboard view.
use std::fmt::Write as _;
use std::io;

use csv::WriterBuilder;
use shared::models::DashboardView;

use crate::error::Result;

pub fn render_text(view: &DashboardView) -> String {
    let width = view
        .groups
        .iter()
        .map(|g| g.name.chars().count())
        .chain(std::iter::once("TOTAL".len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "Sales by product ({})", view.currency);
    for group in &view.groups {
        let _ = writeln!(out, "  {:<width$}  {}", group.name, group.value, width = width);
    }
    let _ = writeln!(out, "  {:<width$}  {}", "TOTAL", view.total, width = width);
    if !view.regions.is_empty() {
        let _ = writeln!(out, "Regions: {}", view.regions.join(", "));
    }
    let _ = writeln!(out, "Currencies: {}", view.currencies.join(", "));
    out
}

/// Writes `product,total` rows followed by a `TOTAL` row.
pub fn write_summary_csv<W: io::Write>(view: &DashboardView, writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    wtr.write_record(["product", "total"])?;
    for group in &view.groups {
        wtr.write_record([group.name.as_str(), group.value.as_str()])?;
    }
    wtr.write_record(["TOTAL", view.total.as_str()])?;
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::GroupTotal;

    fn view() -> DashboardView {
        DashboardView {
            currency: "INR".to_string(),
            total: "150".to_string(),
            groups: vec![
                GroupTotal { name: "Acme, Inc.".to_string(), value: "100".to_string() },
                GroupTotal { name: "B".to_string(), value: "50".to_string() },
            ],
            regions: vec!["North".to_string(), "South".to_string()],
            currencies: vec!["INR".to_string(), "USD".to_string()],
        }
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&view());
        assert!(text.starts_with("Sales by product (INR)\n"));
        assert!(text.contains("  Acme, Inc.  100\n"));
        assert!(text.contains("  TOTAL       150\n"));
        assert!(text.contains("Regions: North, South\n"));
        assert!(text.ends_with("Currencies: INR, USD\n"));
    }

    #[test]
    fn test_write_summary_csv_quotes_names() {
        let mut buf = Vec::new();
        write_summary_csv(&view(), &mut buf).unwrap();
        let written = String::from_utf8(buf).unwrap();
        assert_eq!(written, "product,total\n\"Acme, Inc.\",100\nB,50\nTOTAL,150\n");
    }

    #[test]
    fn test_summary_csv_reads_back_through_parser() {
        let mut buf = Vec::new();
        write_summary_csv(&view(), &mut buf).unwrap();
        let rows = crate::data::csv_parser::parse(&String::from_utf8(buf).unwrap());
        assert_eq!(rows[1], vec!["Acme, Inc.".to_string(), "100".to_string()]);
    }
}
