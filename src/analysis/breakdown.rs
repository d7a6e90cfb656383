use crate::pipeline::selector::top_n;
use crate::pipeline::ModeView;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How one frequent haplogroup spreads across regions and periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HaplogroupBreakdown {
    pub haplogroup: String,
    pub total: usize,
    pub by_region: BTreeMap<String, usize>,
    /// Keyed by period name; rows without a period are left out.
    pub by_period: BTreeMap<String, usize>,
}

/// Breakdowns for the `n` most frequent labels of a view, most frequent first.
pub fn top_haplogroups(view: &ModeView<'_>, n: usize) -> Vec<HaplogroupBreakdown> {
    let mut breakdowns: Vec<HaplogroupBreakdown> = top_n(view.labels(), n)
        .into_iter()
        .map(|c| HaplogroupBreakdown {
            haplogroup: c.label,
            total: c.count,
            by_region: BTreeMap::new(),
            by_period: BTreeMap::new(),
        })
        .collect();

    for row in &view.rows {
        let Some(entry) = breakdowns
            .iter_mut()
            .find(|b| b.haplogroup == row.haplogroup)
        else {
            continue;
        };
        *entry
            .by_region
            .entry(row.record.region.clone())
            .or_default() += 1;
        if let Some(period) = row.record.period {
            *entry.by_period.entry(period.name().to_string()).or_default() += 1;
        }
    }

    breakdowns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Mode;
    use crate::records::fixtures::record;
    use crate::records::{Period, RecordTable, Sex};

    #[test]
    fn test_breakdown_of_top_labels() {
        let mut rows = vec![
            record(Sex::Female, "H1", 1.0, 1.0, 100.0),
            record(Sex::Female, "H1", 1.0, 1.0, 200.0),
            record(Sex::Female, "U5", 1.0, 1.0, 300.0),
            record(Sex::Female, "K1", 1.0, 1.0, 400.0),
        ];
        rows[0].period = Some(Period::Neolithic);
        rows[1].region = "Ásia".to_string();
        let table = RecordTable::new(rows);
        let view = ModeView::filter(&table, Mode::MtDna);

        let breakdowns = top_haplogroups(&view, 2);
        assert_eq!(breakdowns.len(), 2);
        assert_eq!(breakdowns[0].haplogroup, "H1");
        assert_eq!(breakdowns[0].total, 2);
        assert_eq!(breakdowns[0].by_region.get("Europa"), Some(&1));
        assert_eq!(breakdowns[0].by_region.get("Ásia"), Some(&1));
        assert_eq!(breakdowns[0].by_period.get("Neolithic"), Some(&1));
        assert_eq!(breakdowns[1].haplogroup, "U5");
        assert!(breakdowns[1].by_period.is_empty());
    }
}
