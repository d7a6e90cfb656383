use crate::pipeline::{LabelCount, Mode};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingExport {
    pub mode: Mode,
    pub top_n: usize,
    pub ranking: Vec<LabelCount>,
}

impl RankingExport {
    pub fn write_tsv<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "Haplogroup\tCount")?;
        for entry in &self.ranking {
            writeln!(writer, "{}\t{}", entry.label, entry.count)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_tsv() {
        let export = RankingExport {
            mode: Mode::YChromosome,
            top_n: 20,
            ranking: vec![
                LabelCount {
                    label: "R1b".to_string(),
                    count: 12,
                },
                LabelCount {
                    label: "I2a".to_string(),
                    count: 4,
                },
            ],
        };
        let mut buf = Vec::new();
        export.write_tsv(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Haplogroup\tCount\nR1b\t12\nI2a\t4\n"
        );
    }
}
