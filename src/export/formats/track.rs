use crate::pipeline::{DerivedRow, Exclusions, Frame, LabelCount, Mode, TrackOutput};
use crate::records::{Coordinates, Period};
use serde::{Deserialize, Serialize};

/// Everything a renderer needs to draw the selection map and play the animation.
/// Carries data only; colors, marker sizes and map styles are the renderer's business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackExport {
    pub mode: Mode,
    pub selection: Vec<String>,
    pub target: String,
    pub center: Coordinates,
    /// All selected samples, oldest first.
    pub points: Vec<PointExport>,
    /// Drawn before playback; frames start right after it.
    pub origin: PointExport,
    pub frames: Vec<FrameExport>,
    pub ranking: Vec<LabelCount>,
    pub exclusions: Exclusions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointExport {
    pub haplogroup: String,
    pub lat: f64,
    pub long: f64,
    pub label: String,
    pub date_bp: f64,
    pub years_ago: f64,
    pub country: String,
    pub region: String,
    pub period: Option<Period>,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameExport {
    pub index: usize,
    pub current: PointExport,
    pub path: Vec<Coordinates>,
}

impl From<&DerivedRow<'_>> for PointExport {
    fn from(row: &DerivedRow<'_>) -> Self {
        let record = row.row.record;
        let coordinates = row.coordinates();
        Self {
            haplogroup: row.haplogroup().to_string(),
            lat: coordinates.lat,
            long: coordinates.long,
            label: row.hover_label.clone(),
            date_bp: record.date,
            years_ago: row.adjusted_date,
            country: record.country.clone(),
            region: record.region.clone(),
            period: record.period,
            score: record.score,
        }
    }
}

impl From<Frame<'_, '_>> for FrameExport {
    fn from(frame: Frame<'_, '_>) -> Self {
        Self {
            index: frame.index,
            current: frame.current_point.into(),
            path: frame.path_so_far.iter().map(|r| r.coordinates()).collect(),
        }
    }
}

impl TrackExport {
    pub fn new(output: &TrackOutput<'_>, selection: &[String]) -> Self {
        Self::with_frames(output, selection, output.animation.frames())
    }

    /// Like `new`, but consumes the caller's frame iterator so it can be instrumented.
    pub fn with_frames<'r, 'a>(
        output: &'r TrackOutput<'a>,
        selection: &[String],
        frames: impl Iterator<Item = Frame<'r, 'a>>,
    ) -> Self {
        let animation = &output.animation;
        Self {
            mode: output.mode,
            selection: selection.to_vec(),
            target: animation.target().to_string(),
            center: output.static_layer.center,
            points: output.static_layer.points.iter().map(PointExport::from).collect(),
            origin: animation.origin().into(),
            frames: frames.map(FrameExport::from).collect(),
            ranking: output.ranking.clone(),
            exclusions: output.exclusions,
        }
    }
}
