use crate::pipeline::mode::ModeRow;
use crate::records::Coordinates;

/// Offset from the BP reference year (1950 CE) to the present used for display.
pub const PRESENT_OFFSET_YEARS: f64 = 70.0;

/// A selected row with its display fields. The source record is never modified, so
/// deriving the same rows again always yields the same `adjusted_date`.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedRow<'a> {
    pub row: ModeRow<'a>,
    pub adjusted_date: f64,
    pub hover_label: String,
}

impl<'a> DerivedRow<'a> {
    pub fn haplogroup(&self) -> &'a str {
        self.row.haplogroup
    }

    pub fn coordinates(&self) -> Coordinates {
        self.row.coordinates
    }
}

pub fn derive<'a>(rows: &[ModeRow<'a>]) -> Vec<DerivedRow<'a>> {
    rows.iter().map(derive_row).collect()
}

fn derive_row<'a>(row: &ModeRow<'a>) -> DerivedRow<'a> {
    let adjusted_date = row.record.date + PRESENT_OFFSET_YEARS;
    let hover_label = hover_label(&row.record.country, adjusted_date);
    DerivedRow {
        row: *row,
        adjusted_date,
        hover_label,
    }
}

pub fn hover_label(country: &str, adjusted_date: f64) -> String {
    format!("{}\t{} years ago", country, format_years(adjusted_date))
}

/// Whole years print without a fractional part; anything else keeps its exact digits.
pub fn format_years(years: f64) -> String {
    if years.fract() == 0.0 && years.abs() < 1e15 {
        format!("{}", years as i64)
    } else {
        format!("{}", years)
    }
}
