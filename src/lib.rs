pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod publish;
pub mod visualization;

use std::path::PathBuf;

use tracing::debug;

use crate::config::ReportConfig;
use crate::error::Result;
use crate::format::{format_br, NumberKind};
use crate::model::RegimeTable;
use crate::visualization::{reference_cards, reference_charts, render_report, ReportPage};

/// Render the comparison report for `table` as a complete HTML document
pub fn render_table_report(table: &RegimeTable) -> Result<String> {
    let [tax_chart, rate_chart] = reference_charts(table);
    debug!(regimes = table.len(), "charts built");

    let cards = reference_cards(tax_chart.to_fragment()?, rate_chart.to_fragment()?);
    Ok(render_report(&ReportPage::reference(), &cards))
}

/// Render the report for the built-in dataset
pub fn render_reference_report() -> Result<String> {
    let table = RegimeTable::reference();
    if let Some(lowest) = table.lowest() {
        debug!(regime = %lowest.name, tax = %lowest.tax_value, "lowest tax regime");
    }
    render_table_report(&table)
}

/// Build, write and (optionally) open the report
pub fn run(config: &ReportConfig) -> Result<PathBuf> {
    let html = render_reference_report()?;
    publish::publish(&html, &config.output, config.open_browser)
}

/// Plain-text table of the dataset; the lowest-tax row is marked with `*`
pub fn format_regime_summary(table: &RegimeTable) -> String {
    let mut out = String::new();
    out.push_str("Tax Regime Comparison\n");
    out.push_str("=====================\n");
    for record in table.records() {
        let marker = if record.is_min_tax() { "*" } else { " " };
        out.push_str(&format!(
            "{} {:<30} {:>16} {:>8}\n",
            marker,
            record.name,
            format_br(Some(record.tax_value), NumberKind::Currency),
            format_br(Some(record.effective_rate), NumberKind::Percentage),
        ));
    }
    out
}

/// Print a plain-text summary of the dataset
pub fn print_regime_summary(table: &RegimeTable) {
    print!("{}", format_regime_summary(table));
}
