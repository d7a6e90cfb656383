//! Loading a sample table from delimited text.
//!
//! Headers are harmonized (see [`columns`]), coordinate sentinels become `None`, locale
//! decimal commas are accepted, and unknown regions are back-filled from the country.
//! The core pipeline only ever sees the resulting [`RecordTable`].

mod columns;
mod regions;

use crate::config::Config;
use crate::records::{Coordinates, Period, RecordTable, SampleRecord, Sex};
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::{Context, Result};
use columns::{ColumnMap, Field};
use csv::{ReaderBuilder, StringRecord, Trim};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct IngestReport {
    pub path: PathBuf,
    pub table: RecordTable,
    pub rows_read: usize,
    /// Rows dropped for an unusable date.
    pub skipped_rows: usize,
    /// Rows kept without coordinates; geographic views leave them out.
    pub missing_coordinates: usize,
    pub regions_filled: usize,
    /// SHA-256 of the decompressed dataset text.
    pub sha256: String,
}

pub fn load_table(path: &Path, config: &Config, delimiter: Option<char>) -> Result<IngestReport> {
    let progress = ProgressBarBuilder::new(format!("Loading {}...", path.display()))
        .with_tick()
        .build()?;

    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let (mut reader, format) = niffler::get_reader(Box::new(file))
        .with_context(|| format!("Failed to detect compression of {}", path.display()))?;
    let mut content = Vec::new();
    reader
        .read_to_end(&mut content)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    debug!(path = %path.display(), ?format, bytes = content.len(), "dataset read");

    let sha256 = hex_digest(&content);
    let delimiter = delimiter
        .or(config.delimiter)
        .unwrap_or_else(|| infer_delimiter(path));
    let mut report = parse_table(content.as_slice(), delimiter, config)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    report.path = path.to_path_buf();
    report.sha256 = sha256;

    info!(
        path = %path.display(),
        samples = report.table.len(),
        skipped = report.skipped_rows,
        missing_coordinates = report.missing_coordinates,
        "dataset loaded"
    );
    progress.finish_with_message(format!("Loaded {} samples", report.table.len()));
    Ok(report)
}

/// Comma for `.csv` (optionally compressed), tab otherwise.
pub fn infer_delimiter(path: &Path) -> char {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let stem = [".gz", ".bz2", ".xz", ".zst"]
        .iter()
        .find_map(|ext| name.strip_suffix(ext))
        .unwrap_or(&name);
    if stem.ends_with(".csv") {
        ','
    } else {
        '\t'
    }
}

pub fn parse_table<R: Read>(input: R, delimiter: char, config: &Config) -> Result<IngestReport> {
    let delimiter = u8::try_from(delimiter)
        .ok()
        .filter(|d| d.is_ascii())
        .with_context(|| format!("Delimiter {:?} is not a single ASCII character", delimiter))?;
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let columns = ColumnMap::from_headers(&headers)?;

    let mut rows = Vec::new();
    let mut report = IngestReport {
        path: PathBuf::new(),
        table: RecordTable::default(),
        rows_read: 0,
        skipped_rows: 0,
        missing_coordinates: 0,
        regions_filled: 0,
        sha256: String::new(),
    };

    for (line, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Malformed row {}", line + 2))?;
        report.rows_read += 1;

        let Some(sample) = parse_record(&record, &columns, config, &mut report) else {
            debug!(row = line + 2, "skipping row without a usable date");
            report.skipped_rows += 1;
            continue;
        };
        if sample.coordinates.is_none() {
            report.missing_coordinates += 1;
        }
        rows.push(sample);
    }

    report.table = RecordTable::new(rows);
    Ok(report)
}

fn parse_record(
    record: &StringRecord,
    columns: &ColumnMap,
    config: &Config,
    report: &mut IngestReport,
) -> Option<SampleRecord> {
    let text = |field: Field| columns.get(record, field).unwrap_or("");

    let date = parse_decimal(text(Field::Date)).filter(|d| *d >= 0.0)?;

    let lat = parse_coordinate(text(Field::Lat), &config.coordinate_sentinel);
    let long = parse_coordinate(text(Field::Long), &config.coordinate_sentinel);
    let coordinates = lat.zip(long).and_then(|(lat, long)| Coordinates::new(lat, long));

    let country = text(Field::Country).to_string();
    let mut region = text(Field::Region).to_string();
    if region == config.unknown_region || region.is_empty() {
        if let Some(continent) = regions::continent_for(&country) {
            region = continent.to_string();
            report.regions_filled += 1;
        }
    }

    let label = |field: Field| {
        let raw = text(field);
        (!config.is_missing_label(raw)).then(|| raw.to_string())
    };

    Some(SampleRecord {
        sex: Sex::parse(text(Field::Sex)),
        coordinates,
        region,
        country,
        mt_haplogroup: label(Field::MtHaplogroup),
        y_haplogroup: label(Field::YHaplogroup),
        date,
        period: text(Field::Period).parse::<Period>().ok(),
        score: parse_decimal(text(Field::Score)),
    })
}

fn parse_coordinate(raw: &str, sentinel: &str) -> Option<f64> {
    if raw == sentinel {
        return None;
    }
    parse_decimal(raw)
}

/// Parses a finite number, accepting a decimal comma when no point is present.
pub(crate) fn parse_decimal(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let value = if raw.contains(',') && !raw.contains('.') {
        raw.replace(',', ".").parse::<f64>()
    } else {
        raw.parse::<f64>()
    };
    value.ok().filter(|v| v.is_finite())
}

fn hex_digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
