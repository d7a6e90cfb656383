use haplo_tracker::pipeline::{Mode, Selection, Session, TrackRequest};
use haplo_tracker::records::{Coordinates, RecordTable, SampleRecord, Sex};
use haplo_tracker::TrackerError;

fn sample(sex: Sex, mt: &str, y: Option<&str>, lat: f64, long: f64, date: f64) -> SampleRecord {
    SampleRecord {
        sex,
        coordinates: Coordinates::new(lat, long),
        region: "Europa".to_string(),
        country: "Portugal".to_string(),
        mt_haplogroup: Some(mt.to_string()),
        y_haplogroup: y.map(str::to_string),
        date,
        period: None,
        score: None,
    }
}

fn selection(labels: &[&str]) -> Selection {
    Selection::new(labels.iter().copied()).unwrap()
}

// Three H1 samples, oldest first after sequencing: the origin is drawn up front and
// each frame adds one point.
#[test]
fn three_points_play_as_two_frames() {
    let table = RecordTable::new(vec![
        sample(Sex::Female, "H1", None, 38.7, -9.1, 100.0),
        sample(Sex::Male, "H1", None, 41.1, -8.6, 300.0),
        sample(Sex::Female, "H1", None, 40.2, -8.4, 200.0),
    ]);
    let mut session = Session::new(&table);
    let output = session
        .track(&TrackRequest::new(Mode::MtDna, selection(&["H1"])))
        .unwrap();

    let animation = &output.animation;
    assert_eq!(animation.origin().adjusted_date, 370.0);
    assert_eq!(animation.frame_count(), 2);

    let frames: Vec<_> = animation.frames().collect();
    assert_eq!(frames[0].current_point.adjusted_date, 270.0);
    assert_eq!(frames[0].path_so_far.len(), 2);
    assert_eq!(frames[1].current_point.adjusted_date, 170.0);
    assert_eq!(frames[1].path_so_far.len(), 3);
    assert_eq!(frames[1].current_point.hover_label, "Portugal\t170 years ago");

    // Input rows keep their original dates.
    let dates: Vec<f64> = table.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![100.0, 300.0, 200.0]);
}

#[test]
fn target_outside_selection_is_rejected() {
    let table = RecordTable::new(vec![
        sample(Sex::Female, "H1", None, 38.7, -9.1, 100.0),
        sample(Sex::Female, "H2", None, 41.1, -8.6, 300.0),
        sample(Sex::Female, "H3", None, 40.2, -8.4, 200.0),
    ]);
    let mut session = Session::new(&table);
    let request = TrackRequest::new(Mode::MtDna, selection(&["H1", "H2"])).with_target("H3");

    let err = session.track(&request).unwrap_err();
    assert_eq!(
        err,
        TrackerError::InvalidTarget {
            target: "H3".to_string(),
            selection: vec!["H1".to_string(), "H2".to_string()],
        }
    );
}

#[test]
fn y_chromosome_without_males_is_empty() {
    let table = RecordTable::new(vec![
        sample(Sex::Female, "H1", Some("R1b"), 38.7, -9.1, 100.0),
        sample(Sex::Unknown, "H1", Some("R1b"), 41.1, -8.6, 300.0),
    ]);
    let mut session = Session::new(&table);
    assert!(session.view(Mode::YChromosome).is_empty());

    let err = session
        .track(&TrackRequest::new(Mode::YChromosome, selection(&["R1b"])))
        .unwrap_err();
    assert!(matches!(err, TrackerError::EmptySelection { .. }));
}

#[test]
fn modes_partition_by_sex() {
    let table = RecordTable::new(vec![
        sample(Sex::Male, "H1", Some("R1b"), 38.7, -9.1, 100.0),
        sample(Sex::Female, "H1", None, 41.1, -8.6, 300.0),
        sample(Sex::Unknown, "U5", None, 40.2, -8.4, 200.0),
    ]);
    let mut session = Session::new(&table);
    assert_eq!(session.view(Mode::MtDna).len(), 3);
    assert_eq!(session.view(Mode::MtDnaMale).len(), 1);
    assert_eq!(session.view(Mode::MtDnaFemale).len(), 1);
    assert_eq!(session.view(Mode::YChromosome).len(), 1);
}

#[test]
fn session_recovers_after_error() {
    let table = RecordTable::new(vec![
        sample(Sex::Female, "H1", None, 38.7, -9.1, 100.0),
        sample(Sex::Female, "H1", None, 41.1, -8.6, 300.0),
    ]);
    let mut session = Session::new(&table);

    let bad = TrackRequest::new(Mode::MtDna, selection(&["K1"]));
    assert!(session.track(&bad).is_err());

    let good = TrackRequest::new(Mode::MtDna, selection(&["H1"]));
    let output = session.track(&good).unwrap();
    assert_eq!(output.static_layer.points.len(), 2);
    assert_eq!(output.animation.frame_count(), 1);
}

#[test]
fn ranking_breaks_ties_by_first_appearance() {
    let table = RecordTable::new(vec![
        sample(Sex::Female, "U5", None, 38.7, -9.1, 100.0),
        sample(Sex::Female, "H1", None, 41.1, -8.6, 300.0),
        sample(Sex::Female, "H1", None, 41.1, -8.6, 300.0),
        sample(Sex::Female, "K1", None, 40.2, -8.4, 200.0),
    ]);
    let mut session = Session::new(&table).with_top_n(2);
    let ranking = session.ranking(Mode::MtDna);
    let labels: Vec<&str> = ranking.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["H1", "U5"]);
    assert_eq!(ranking[0].count, 2);
}

#[test]
fn mode_names_parse() {
    assert_eq!("mtdna-female".parse::<Mode>().unwrap(), Mode::MtDnaFemale);
    assert_eq!(
        "Autosomal".parse::<Mode>().unwrap_err(),
        TrackerError::InvalidMode("Autosomal".to_string())
    );
}
