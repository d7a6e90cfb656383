use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
    Unknown,
}

impl Sex {
    /// Molecular sex as written in AADR-style tables ("M", "F", "U") or spelled out.
    /// Anything unrecognized is `Unknown`, never an error.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Sex::Male,
            "f" | "female" => Sex::Female,
            _ => Sex::Unknown,
        }
    }
}

/// Archaeological period. Declaration order is chronological, so `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Period {
    Paleolithic,
    Mesolithic,
    Neolithic,
    #[serde(rename = "Post-Neolithic")]
    PostNeolithic,
}

impl Period {
    pub const ALL: [Period; 4] = [
        Period::Paleolithic,
        Period::Mesolithic,
        Period::Neolithic,
        Period::PostNeolithic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Period::Paleolithic => "Paleolithic",
            Period::Mesolithic => "Mesolithic",
            Period::Neolithic => "Neolithic",
            Period::PostNeolithic => "Post-Neolithic",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The PRS dataset labels periods in Portuguese.
        match s.trim().to_lowercase().as_str() {
            "paleolithic" | "paleolítico" | "paleolitico" => Ok(Period::Paleolithic),
            "mesolithic" | "mesolítico" | "mesolitico" => Ok(Period::Mesolithic),
            "neolithic" | "neolítico" | "neolitico" => Ok(Period::Neolithic),
            "post-neolithic" | "postneolithic" | "pós-neolítico" | "pos-neolitico" => {
                Ok(Period::PostNeolithic)
            }
            other => Err(format!("Unknown period: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub long: f64,
}

impl Coordinates {
    /// Both components must be finite; anything else is treated as absent.
    pub fn new(lat: f64, long: f64) -> Option<Self> {
        if lat.is_finite() && long.is_finite() {
            Some(Self { lat, long })
        } else {
            None
        }
    }
}

/// Which haplogroup label a view reads from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelColumn {
    #[serde(rename = "mtDNA")]
    MtDna,
    #[serde(rename = "Y-DNA")]
    YChromosome,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleRecord {
    pub sex: Sex,
    pub coordinates: Option<Coordinates>,
    pub region: String,
    pub country: String,
    pub mt_haplogroup: Option<String>,
    pub y_haplogroup: Option<String>,
    /// Years before present (1950 CE).
    pub date: f64,
    pub period: Option<Period>,
    pub score: Option<f64>,
}

impl SampleRecord {
    pub fn label(&self, column: LabelColumn) -> Option<&str> {
        match column {
            LabelColumn::MtDna => self.mt_haplogroup.as_deref(),
            LabelColumn::YChromosome => self.y_haplogroup.as_deref(),
        }
    }
}

/// The loaded dataset. Cloning shares the rows; nothing mutates them after load.
#[derive(Debug, Clone, Default)]
pub struct RecordTable {
    rows: Arc<[SampleRecord]>,
}

impl RecordTable {
    pub fn new(rows: Vec<SampleRecord>) -> Self {
        Self { rows: rows.into() }
    }

    pub fn rows(&self) -> &[SampleRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SampleRecord> {
        self.rows.iter()
    }
}

impl From<Vec<SampleRecord>> for RecordTable {
    fn from(rows: Vec<SampleRecord>) -> Self {
        Self::new(rows)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_parse() {
        assert_eq!(Sex::parse("M"), Sex::Male);
        assert_eq!(Sex::parse(" f "), Sex::Female);
        assert_eq!(Sex::parse("U"), Sex::Unknown);
        assert_eq!(Sex::parse(""), Sex::Unknown);
    }

    #[test]
    fn test_period_parse_portuguese() {
        assert_eq!("Pós-Neolítico".parse::<Period>(), Ok(Period::PostNeolithic));
        assert_eq!("Paleolítico".parse::<Period>(), Ok(Period::Paleolithic));
        assert_eq!("neolithic".parse::<Period>(), Ok(Period::Neolithic));
        assert!("Bronze Age".parse::<Period>().is_err());
    }

    #[test]
    fn test_period_order_is_chronological() {
        let mut periods = vec![Period::PostNeolithic, Period::Paleolithic, Period::Neolithic];
        periods.sort();
        assert_eq!(
            periods,
            vec![Period::Paleolithic, Period::Neolithic, Period::PostNeolithic]
        );
    }

    #[test]
    fn test_coordinates_reject_non_finite() {
        assert!(Coordinates::new(f64::NAN, 1.0).is_none());
        assert!(Coordinates::new(1.0, f64::INFINITY).is_none());
        assert!(Coordinates::new(41.3, 2.1).is_some());
    }
}
