use crate::error::{TrackerError, TrackerResult};
use crate::pipeline::mode::{ModeRow, ModeView};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of labels offered for selection and kept for histograms.
pub const DEFAULT_TOP_N: usize = 20;

/// A non-empty set of haplogroup labels, in the order the user gave them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    labels: Vec<String>,
}

impl Selection {
    pub fn new<I, S>(labels: I) -> TrackerResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for label in labels {
            let label = label.into().trim().to_string();
            if !label.is_empty() && !unique.contains(&label) {
                unique.push(label);
            }
        }
        if unique.is_empty() {
            return Err(TrackerError::NoSelection);
        }
        Ok(Self { labels: unique })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// The first selected label, used when no animate target is given.
    pub fn first(&self) -> &str {
        &self.labels[0]
    }

    pub fn require_target<'s>(&self, target: &'s str) -> TrackerResult<&'s str> {
        if self.contains(target) {
            Ok(target)
        } else {
            Err(TrackerError::InvalidTarget {
                target: target.to_string(),
                selection: self.labels.clone(),
            })
        }
    }
}

/// Rows of the view whose label is in the selection, in view order.
pub fn select<'a>(view: &ModeView<'a>, selection: &Selection) -> TrackerResult<Vec<ModeRow<'a>>> {
    let rows: Vec<ModeRow<'a>> = view
        .rows
        .iter()
        .filter(|row| selection.contains(row.haplogroup))
        .copied()
        .collect();

    if rows.is_empty() {
        return Err(TrackerError::EmptySelection {
            mode: view.mode.name().to_string(),
            labels: selection.labels().to_vec(),
        });
    }
    Ok(rows)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// The `n` most frequent labels, most frequent first. Equal counts keep the order in
/// which the labels were first seen.
pub fn top_n<'a, I>(labels: I, n: usize) -> Vec<LabelCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<LabelCount> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for label in labels {
        match index.get(label) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(label, counts.len());
                counts.push(LabelCount {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable, which preserves first-seen order among ties
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}
