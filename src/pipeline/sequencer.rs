use crate::pipeline::derive::DerivedRow;

/// Orders rows oldest first (largest adjusted BP date first). The sort is stable, so
/// rows dated the same keep their input order.
pub fn sequence(mut rows: Vec<DerivedRow<'_>>) -> Vec<DerivedRow<'_>> {
    rows.sort_by(|a, b| b.adjusted_date.total_cmp(&a.adjusted_date));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::derive::derive;
    use crate::pipeline::mode::{Mode, ModeView};
    use crate::records::fixtures::record;
    use crate::records::{RecordTable, Sex};

    #[test]
    fn test_sorted_descending() {
        let table = RecordTable::new(vec![
            record(Sex::Female, "H1", 10.0, 20.0, 100.0),
            record(Sex::Female, "H1", 11.0, 21.0, 200.0),
            record(Sex::Female, "H1", 12.0, 22.0, 300.0),
        ]);
        let view = ModeView::filter(&table, Mode::MtDna);
        let rows = sequence(derive(&view.rows));
        let dates: Vec<f64> = rows.iter().map(|r| r.row.record.date).collect();
        assert_eq!(dates, vec![300.0, 200.0, 100.0]);
        assert!(rows
            .windows(2)
            .all(|w| w[0].adjusted_date >= w[1].adjusted_date));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let table = RecordTable::new(vec![
            record(Sex::Female, "A", 1.0, 1.0, 500.0),
            record(Sex::Female, "B", 2.0, 2.0, 900.0),
            record(Sex::Female, "C", 3.0, 3.0, 500.0),
            record(Sex::Female, "D", 4.0, 4.0, 500.0),
        ]);
        let view = ModeView::filter(&table, Mode::MtDna);
        let rows = sequence(derive(&view.rows));
        let labels: Vec<&str> = rows.iter().map(|r| r.haplogroup()).collect();
        assert_eq!(labels, vec!["B", "A", "C", "D"]);
    }
}
