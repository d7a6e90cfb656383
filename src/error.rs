use serde::Serialize;
use thiserror::Error;

pub type TrackerResult<T> = Result<T, TrackerError>;

/// Errors raised by the analysis pipeline. Each one is reported where it is detected and
/// leaves no state behind, so the next request starts clean.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum TrackerError {
    #[error("Invalid mode: '{0}'. Must be one of MtDNA, MtDNA-Male, MtDNA-Female, Y-Chromosome")]
    InvalidMode(String),

    #[error("Please select at least one haplogroup")]
    NoSelection,

    #[error("No {mode} samples carry the selected haplogroup(s): {}", labels.join(", "))]
    EmptySelection { mode: String, labels: Vec<String> },

    #[error("Cannot animate '{target}': it is not among the selected haplogroups ({})", selection.join(", "))]
    InvalidTarget {
        target: String,
        selection: Vec<String>,
    },
}
