use crate::config::Config;
use crate::export::formats::track::TrackExport;
use crate::export::{AnalysisData, AnalysisExport};
use crate::ingest::load_table;
use crate::pipeline::{Mode, Selection, Session, TrackRequest};
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::Result;
use std::path::PathBuf;

pub fn run(
    dataset: PathBuf,
    mode: String,
    haplogroups: Vec<String>,
    animate: Option<String>,
    output_file: PathBuf,
    delimiter: Option<char>,
    config: &Config,
) -> Result<()> {
    // Input errors surface before the dataset is read.
    let mode: Mode = mode.parse()?;
    let selection = Selection::new(haplogroups)?;
    let mut request = TrackRequest::new(mode, selection);
    if let Some(target) = animate {
        request.selection.require_target(&target)?;
        request = request.with_target(target);
    }

    let report = load_table(&dataset, config, delimiter)?;
    super::report_skipped(&report);

    let mut session = Session::new(&report.table).with_top_n(config.top_n);
    let output = session.track(&request)?;
    let animation = &output.animation;

    let progress = ProgressBarBuilder::new(format!("Building frames for {}", animation.target()))
        .with_length(animation.frame_count() as u64)
        .build()?;
    let track = TrackExport::with_frames(
        &output,
        request.selection.labels(),
        progress.wrap_iter(animation.frames()),
    );
    progress.finish_and_clear();

    let metadata = super::metadata(&report, Some(mode), Some(output.exclusions));
    if let Some(excluded) = &metadata.excluded {
        eprintln!("{}", excluded);
    }
    AnalysisExport::new(AnalysisData::Track(track), metadata).save(&output_file)?;

    println!(
        "{} {}: {} selected samples, {} animation frames -> {}",
        mode,
        animation.target(),
        output.static_layer.points.len(),
        animation.frame_count(),
        output_file.display()
    );
    Ok(())
}
