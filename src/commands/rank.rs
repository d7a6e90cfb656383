use crate::config::Config;
use crate::export::formats::ranking::RankingExport;
use crate::export::{AnalysisData, AnalysisExport};
use crate::ingest::load_table;
use crate::pipeline::{Mode, Session};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

pub fn run(
    dataset: PathBuf,
    mode: String,
    top: Option<usize>,
    output_file: Option<PathBuf>,
    delimiter: Option<char>,
    config: &Config,
) -> Result<()> {
    let mode: Mode = mode.parse()?;
    let top_n = top.unwrap_or(config.top_n);

    let report = load_table(&dataset, config, delimiter)?;
    super::report_skipped(&report);

    let mut session = Session::new(&report.table).with_top_n(top_n);
    let exclusions = session.view(mode).exclusions;
    let ranking = RankingExport {
        mode,
        top_n,
        ranking: session.ranking(mode),
    };

    match output_file {
        Some(path) if path.extension().is_some_and(|ext| ext == "json") => {
            let metadata = super::metadata(&report, Some(mode), Some(exclusions));
            AnalysisExport::new(AnalysisData::Ranking(ranking), metadata).save(&path)?;
            println!("Ranking written to {}", path.display());
        }
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            ranking.write_tsv(BufWriter::new(file))?;
            println!("Ranking written to {}", path.display());
        }
        None => ranking.write_tsv(io::stdout().lock())?,
    }
    Ok(())
}
