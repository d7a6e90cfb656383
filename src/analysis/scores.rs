use crate::records::{Period, SampleRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Distribution of risk scores within one group (a period or a region).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub group: String,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
}

impl ScoreSummary {
    /// `None` when there are no scores to summarize.
    pub fn from_scores(group: impl Into<String>, mut scores: Vec<f64>) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }
        scores.sort_by(f64::total_cmp);
        let count = scores.len();
        let mean = scores.iter().sum::<f64>() / count as f64;
        Some(Self {
            group: group.into(),
            count,
            min: scores[0],
            q1: quantile(&scores, 0.25),
            median: quantile(&scores, 0.5),
            q3: quantile(&scores, 0.75),
            max: scores[count - 1],
            mean,
        })
    }
}

/// Linear interpolation between closest ranks; `sorted` must be ascending and non-empty.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// One summary per period that has scored samples, in chronological order.
pub fn by_period<'a, I>(records: I) -> Vec<ScoreSummary>
where
    I: IntoIterator<Item = &'a SampleRecord>,
{
    let mut groups: BTreeMap<Period, Vec<f64>> = BTreeMap::new();
    for record in records {
        if let (Some(period), Some(score)) = (record.period, record.score) {
            groups.entry(period).or_default().push(score);
        }
    }
    groups
        .into_iter()
        .filter_map(|(period, scores)| ScoreSummary::from_scores(period.name(), scores))
        .collect()
}

/// One summary per region that has scored samples, sorted by region name.
pub fn by_region<'a, I>(records: I) -> Vec<ScoreSummary>
where
    I: IntoIterator<Item = &'a SampleRecord>,
{
    let mut groups: BTreeMap<&'a str, Vec<f64>> = BTreeMap::new();
    for record in records {
        if let Some(score) = record.score {
            groups.entry(record.region.as_str()).or_default().push(score);
        }
    }
    groups
        .into_iter()
        .filter_map(|(region, scores)| ScoreSummary::from_scores(region, scores))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub date: f64,
    pub score: f64,
    pub region: String,
}

/// Date range (years BP) shaded for a period behind the score timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodBand {
    pub period: Period,
    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTimeline {
    /// Ascending by date; ties keep input order.
    pub points: Vec<TimelinePoint>,
    pub bands: Vec<PeriodBand>,
}

const POST_NEOLITHIC_END: f64 = 4000.0;
const NEOLITHIC_END: f64 = 8000.0;
const MESOLITHIC_END: f64 = 13000.0;
const PALEOLITHIC_MARGIN: f64 = 1000.0;

impl ScoreTimeline {
    pub fn build<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a SampleRecord>,
    {
        let mut points: Vec<TimelinePoint> = records
            .into_iter()
            .filter_map(|r| {
                r.score.map(|score| TimelinePoint {
                    date: r.date,
                    score,
                    region: r.region.clone(),
                })
            })
            .collect();
        points.sort_by(|a, b| a.date.total_cmp(&b.date));

        let oldest = points.last().map(|p| p.date).unwrap_or(0.0);
        let bands = vec![
            PeriodBand {
                period: Period::PostNeolithic,
                start: 0.0,
                end: POST_NEOLITHIC_END,
            },
            PeriodBand {
                period: Period::Neolithic,
                start: POST_NEOLITHIC_END,
                end: NEOLITHIC_END,
            },
            PeriodBand {
                period: Period::Mesolithic,
                start: NEOLITHIC_END,
                end: MESOLITHIC_END,
            },
            PeriodBand {
                period: Period::Paleolithic,
                start: MESOLITHIC_END,
                end: (oldest + PALEOLITHIC_MARGIN).max(MESOLITHIC_END),
            },
        ];

        Self { points, bands }
    }
}
