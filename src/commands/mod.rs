pub mod config;
pub mod explore;
pub mod rank;
pub mod track;

use crate::export::ExportMetadata;
use crate::ingest::IngestReport;
use crate::pipeline::{Exclusions, Mode};

fn metadata(report: &IngestReport, mode: Option<Mode>, exclusions: Option<Exclusions>) -> ExportMetadata {
    ExportMetadata {
        dataset: report.path.display().to_string(),
        dataset_sha256: report.sha256.clone(),
        samples: report.table.len(),
        mode,
        excluded: exclusions.and_then(|e| e.summary()),
    }
}

fn report_skipped(report: &IngestReport) {
    if report.skipped_rows > 0 {
        eprintln!(
            "Skipped {} of {} rows without a usable date",
            report.skipped_rows, report.rows_read
        );
    }
}
