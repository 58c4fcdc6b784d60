use std::path::PathBuf;
use clap::Parser;
use anyhow::{Context, Result};

use tax_regime_report::config::{ReportConfig, DEFAULT_OUTPUT};
use tax_regime_report::model::RegimeTable;
use tax_regime_report::{logging, print_regime_summary, run};

#[derive(Parser)]
#[command(name = "tax-regime-report")]
#[command(author, version, about = "Tax regime comparison report generator")]
struct Cli {
    /// Output HTML file path
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Write the report without opening it in a browser
    #[arg(long)]
    no_open: bool,

    /// Also print the compared regimes as a text table
    #[arg(short, long)]
    summary: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    if cli.summary {
        print_regime_summary(&RegimeTable::reference());
    }

    let config = ReportConfig {
        output: cli.output,
        open_browser: !cli.no_open,
    };

    run(&config).with_context(|| format!("writing report to {}", config.output.display()))?;

    Ok(())
}
