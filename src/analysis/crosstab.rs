use crate::records::{Period, SampleRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sample counts per region and period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossTab {
    pub periods: Vec<Period>,
    pub rows: Vec<CrossTabRow>,
    /// Column totals, in `periods` order.
    pub totals: Vec<usize>,
    /// Samples with no recognizable period.
    pub unassigned: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossTabRow {
    pub region: String,
    /// One entry per `CrossTab::periods`.
    pub counts: Vec<usize>,
    pub total: usize,
}

impl CrossTab {
    pub fn build<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a SampleRecord>,
    {
        let mut by_region: BTreeMap<&'a str, [usize; 4]> = BTreeMap::new();
        let mut unassigned = 0;

        for record in records {
            let Some(period) = record.period else {
                unassigned += 1;
                continue;
            };
            by_region.entry(record.region.as_str()).or_default()[period as usize] += 1;
        }

        let rows: Vec<CrossTabRow> = by_region
            .into_iter()
            .map(|(region, counts)| CrossTabRow {
                region: region.to_string(),
                counts: counts.to_vec(),
                total: counts.iter().sum(),
            })
            .collect();

        let totals = (0..Period::ALL.len())
            .map(|i| rows.iter().map(|r| r.counts[i]).sum())
            .collect();

        Self {
            periods: Period::ALL.to_vec(),
            rows,
            totals,
            unassigned,
        }
    }
}
