//! Exploratory summaries behind the dashboard's statistical charts.

pub mod breakdown;
pub mod crosstab;
pub mod scores;

pub use breakdown::HaplogroupBreakdown;
pub use crosstab::{CrossTab, CrossTabRow};
pub use scores::{PeriodBand, ScoreSummary, ScoreTimeline, TimelinePoint};

use crate::pipeline::{Exclusions, Mode, ModeView};
use crate::records::RecordTable;
use serde::{Deserialize, Serialize};

/// Whole-dataset summaries, plus an optional mode-specific section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exploration {
    pub samples: usize,
    pub region_period: CrossTab,
    pub scores_by_period: Vec<ScoreSummary>,
    pub scores_by_region: Vec<ScoreSummary>,
    pub timeline: ScoreTimeline,
    pub mode: Option<ModeExploration>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeExploration {
    pub mode: Mode,
    pub samples: usize,
    pub exclusions: Exclusions,
    pub scores_by_period: Vec<ScoreSummary>,
    pub top_haplogroups: Vec<HaplogroupBreakdown>,
}

impl ModeExploration {
    pub fn build(view: &ModeView<'_>, top_n: usize) -> Self {
        Self {
            mode: view.mode,
            samples: view.len(),
            exclusions: view.exclusions,
            scores_by_period: scores::by_period(view.rows.iter().map(|r| r.record)),
            top_haplogroups: breakdown::top_haplogroups(view, top_n),
        }
    }
}

pub fn explore(table: &RecordTable, mode: Option<Mode>, top_n: usize) -> Exploration {
    let mode = mode.map(|mode| ModeExploration::build(&ModeView::filter(table, mode), top_n));
    Exploration {
        samples: table.len(),
        region_period: CrossTab::build(table.iter()),
        scores_by_period: scores::by_period(table.iter()),
        scores_by_region: scores::by_region(table.iter()),
        timeline: ScoreTimeline::build(table.iter()),
        mode,
    }
}
