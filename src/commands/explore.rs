use crate::analysis::explore;
use crate::config::Config;
use crate::export::{AnalysisData, AnalysisExport};
use crate::ingest::load_table;
use crate::pipeline::Mode;
use anyhow::Result;
use std::path::PathBuf;

pub fn run(
    dataset: PathBuf,
    mode: Option<String>,
    output_file: PathBuf,
    delimiter: Option<char>,
    config: &Config,
) -> Result<()> {
    let mode: Option<Mode> = mode.map(|m| m.parse::<Mode>()).transpose()?;

    let report = load_table(&dataset, config, delimiter)?;
    super::report_skipped(&report);

    let exploration = explore(&report.table, mode, config.top_n);
    let exclusions = exploration.mode.as_ref().map(|m| m.exclusions);
    let metadata = super::metadata(&report, mode, exclusions);

    let tab = &exploration.region_period;
    println!("Samples by region and period:");
    for row in &tab.rows {
        println!("  {:<12} {:>6}", row.region, row.total);
    }
    let per_period: Vec<String> = tab
        .periods
        .iter()
        .zip(&tab.totals)
        .map(|(period, count)| format!("{} {}", period, count))
        .collect();
    println!("  by period: {}", per_period.join(", "));
    if tab.unassigned > 0 {
        println!("  {} samples have no recognized period", tab.unassigned);
    }

    AnalysisExport::new(AnalysisData::Exploration(exploration), metadata).save(&output_file)?;
    println!("Exploration written to {}", output_file.display());
    Ok(())
}
