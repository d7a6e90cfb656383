use haplo_tracker::config::Config;
use haplo_tracker::export::formats::track::TrackExport;
use haplo_tracker::export::{AnalysisData, AnalysisExport, ExportMetadata};
use haplo_tracker::ingest::load_table;
use haplo_tracker::pipeline::{Mode, Selection, Session, TrackRequest};
use std::fs;
use tempfile::tempdir;

const DATASET: &str = "\
Molecular Sex,Lat.,Long.,Continente,mtDNA haplogroup if >2x or published,Y haplogroup (manual curation in terminal mutation format),Date mean in BP,Political Entity
M,43.3,-5.8,Europa,H1,R1b-M269,4200,Spain
F,..,..,Europa,H1,n/a (female),3900,Spain
F,37.9,23.7,Europa,U5a,n/a (female),8800,Greece
M,48.8,2.3,Indeterminado,H1,I2a,6100,France
U,52.5,13.4,Europa,H1,..,1500,Germany
";

#[test]
fn dataset_to_track_export() {
    let dir = tempdir().unwrap();
    let dataset = dir.path().join("samples.csv");
    fs::write(&dataset, DATASET).unwrap();

    let report = load_table(&dataset, &Config::default(), None).unwrap();
    assert_eq!(report.table.len(), 5);
    assert_eq!(report.missing_coordinates, 1);
    assert_eq!(report.regions_filled, 1);
    assert_eq!(report.sha256.len(), 64);

    let mut session = Session::new(&report.table);
    let selection = Selection::new(["H1", "U5a"]).unwrap();
    let request = TrackRequest::new(Mode::MtDna, selection.clone());
    let output = session.track(&request).unwrap();
    assert_eq!(output.exclusions.missing_coordinates, 1);
    assert_eq!(output.static_layer.points.len(), 4);
    assert_eq!(output.animation.target(), "H1");
    // H1 with coordinates: 6100, 4200, 1500 BP.
    assert_eq!(output.animation.frame_count(), 2);

    let track = TrackExport::new(&output, selection.labels());
    assert_eq!(track.origin.years_ago, 6170.0);
    assert_eq!(track.origin.region, "Europa");
    assert_eq!(track.frames.len(), 2);
    assert_eq!(track.frames[1].path.len(), 3);
    assert_eq!(track.points[0].haplogroup, "U5a");

    let out = dir.path().join("track.json");
    let metadata = ExportMetadata {
        dataset: dataset.display().to_string(),
        dataset_sha256: report.sha256.clone(),
        samples: report.table.len(),
        mode: Some(Mode::MtDna),
        excluded: output.exclusions.summary(),
    };
    AnalysisExport::new(AnalysisData::Track(track), metadata)
        .save(&out)
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["$type"], "haplotracker.analysis");
    assert_eq!(json["type"], "Track");
    assert_eq!(json["mode"], "MtDNA");
    assert_eq!(json["metadata"]["dataset_sha256"], report.sha256.as_str());
    assert_eq!(json["frames"].as_array().unwrap().len(), 2);
}

#[test]
fn y_chromosome_reads_male_labels() {
    let dir = tempdir().unwrap();
    let dataset = dir.path().join("samples.csv");
    fs::write(&dataset, DATASET).unwrap();

    let report = load_table(&dataset, &Config::default(), None).unwrap();
    let mut session = Session::new(&report.table);
    let ranking = session.ranking(Mode::YChromosome);
    let labels: Vec<&str> = ranking.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["R1b-M269", "I2a"]);
}

#[test]
fn missing_dataset_is_an_error() {
    let dir = tempdir().unwrap();
    let err = load_table(&dir.path().join("absent.tsv"), &Config::default(), None).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to open"));
}
