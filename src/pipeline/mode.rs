use crate::error::TrackerError;
use crate::records::{Coordinates, LabelColumn, RecordTable, SampleRecord, Sex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Which slice of the dataset is analysed, and through which haplogroup label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "MtDNA")]
    MtDna,
    #[serde(rename = "MtDNA-Male")]
    MtDnaMale,
    #[serde(rename = "MtDNA-Female")]
    MtDnaFemale,
    #[serde(rename = "Y-Chromosome")]
    YChromosome,
}

impl Mode {
    pub const ALL: [Mode; 4] = [
        Mode::MtDna,
        Mode::MtDnaMale,
        Mode::MtDnaFemale,
        Mode::YChromosome,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::MtDna => "MtDNA",
            Mode::MtDnaMale => "MtDNA-Male",
            Mode::MtDnaFemale => "MtDNA-Female",
            Mode::YChromosome => "Y-Chromosome",
        }
    }

    pub fn label_column(&self) -> LabelColumn {
        match self {
            Mode::MtDna | Mode::MtDnaMale | Mode::MtDnaFemale => LabelColumn::MtDna,
            Mode::YChromosome => LabelColumn::YChromosome,
        }
    }

    /// Y-chromosome lineages only exist in male samples, so that mode shares the
    /// male sex filter and differs only in the label column it reads.
    pub fn admits(&self, sex: Sex) -> bool {
        match self {
            Mode::MtDna => true,
            Mode::MtDnaMale | Mode::YChromosome => sex == Sex::Male,
            Mode::MtDnaFemale => sex == Sex::Female,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TrackerError::InvalidMode(s.to_string()))
    }
}

/// Rows dropped from a geographic view. These are recovered, not errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusions {
    pub missing_coordinates: usize,
    pub missing_label: usize,
}

impl Exclusions {
    pub fn summary(&self) -> Option<String> {
        let mut parts = Vec::new();
        if self.missing_coordinates > 0 {
            parts.push(format!(
                "{} rows excluded for missing coordinates",
                self.missing_coordinates
            ));
        }
        if self.missing_label > 0 {
            parts.push(format!(
                "{} rows excluded for missing haplogroup",
                self.missing_label
            ));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        }
    }
}

/// A record as seen through a mode: coordinates resolved and the active label picked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeRow<'a> {
    pub record: &'a SampleRecord,
    pub haplogroup: &'a str,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone)]
pub struct ModeView<'a> {
    pub mode: Mode,
    pub rows: Vec<ModeRow<'a>>,
    pub exclusions: Exclusions,
}

impl<'a> ModeView<'a> {
    pub fn filter(table: &'a RecordTable, mode: Mode) -> Self {
        let column = mode.label_column();
        let mut exclusions = Exclusions::default();
        let mut rows = Vec::new();

        for record in table.iter().filter(|r| mode.admits(r.sex)) {
            let Some(coordinates) = record.coordinates else {
                exclusions.missing_coordinates += 1;
                continue;
            };
            let Some(haplogroup) = record.label(column) else {
                exclusions.missing_label += 1;
                continue;
            };
            rows.push(ModeRow {
                record,
                haplogroup,
                coordinates,
            });
        }

        debug!(
            mode = mode.name(),
            rows = rows.len(),
            missing_coordinates = exclusions.missing_coordinates,
            missing_label = exclusions.missing_label,
            "mode filter applied"
        );

        Self {
            mode,
            rows,
            exclusions,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.rows.iter().map(|row| row.haplogroup)
    }
}
