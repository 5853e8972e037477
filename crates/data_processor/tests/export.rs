use std::path::Path;

use hrtf_data_processor::{export, DatasetSource, MitKemarDirectory, SourceDataset};
use pretty_assertions::assert_eq;

fn scenario() -> SourceDataset {
    SourceDataset {
        elev_min: -40.0,
        elev_increment: 10.0,
        azimuths: vec![vec![vec![1.0, 0.0]; 4], vec![vec![0.5, 0.5]; 2]],
    }
}

fn angles(db: &hrtf_datasets::HrtfDataset) -> Vec<(f64, Vec<f64>)> {
    db.elevations
        .iter()
        .map(|e| (e.angle, e.azimuths.iter().map(|a| a.angle).collect()))
        .collect()
}

#[test]
fn test_export_and_load() {
    let root = tempfile::tempdir().unwrap();
    let report = hrtf_data_processor::export_to_repo(&scenario(), root.path()).unwrap();

    assert_eq!(report.path, export::output_path(root.path()));
    assert!(report
        .path
        .ends_with("crates/datasets/src/bin_protos/mit_kemar.bin"));
    assert_eq!(
        std::fs::metadata(&report.path).unwrap().len(),
        report.bytes_written as u64
    );

    let loaded = hrtf_datasets::load_dataset(&report.path).unwrap();
    assert_eq!(
        angles(&loaded),
        vec![
            (-40.0, vec![0.0, 90.0, 180.0, 270.0]),
            (-30.0, vec![0.0, 180.0]),
        ]
    );
    for a in &loaded.elevations[0].azimuths {
        assert_eq!(a.impulse, vec![1.0, 0.0]);
    }
    for a in &loaded.elevations[1].azimuths {
        assert_eq!(a.impulse, vec![0.5, 0.5]);
    }
}

#[test]
fn test_file_matches_writer_output() {
    let root = tempfile::tempdir().unwrap();
    let report = hrtf_data_processor::export_to_repo(&scenario(), root.path()).unwrap();

    let mut expected: Vec<u8> = vec![];
    hrtf_data_processor::export_to_writer(&scenario(), &mut expected).unwrap();
    assert_eq!(std::fs::read(&report.path).unwrap(), expected);
}

#[test]
fn test_export_twice_overwrites() {
    let root = tempfile::tempdir().unwrap();
    let first = hrtf_data_processor::export_to_repo(&scenario(), root.path()).unwrap();

    let mut smaller = scenario();
    smaller.azimuths.truncate(1);
    let second = hrtf_data_processor::export_to_repo(&smaller, root.path()).unwrap();

    assert_eq!(first.path, second.path);
    assert!(second.bytes_written < first.bytes_written);
    assert_eq!(
        std::fs::metadata(&second.path).unwrap().len(),
        second.bytes_written as u64
    );
    assert_eq!(
        hrtf_datasets::load_dataset(&second.path)
            .unwrap()
            .elevations
            .len(),
        1
    );
}

#[test]
fn test_empty_row_writes_nothing() {
    let root = tempfile::tempdir().unwrap();
    let mut db = scenario();
    db.azimuths.push(vec![]);

    let err = hrtf_data_processor::export_to_repo(&db, root.path()).unwrap_err();
    assert!(err.is_invalid_input(), "{err}");
    assert!(!export::output_path(root.path()).exists());
}

#[test]
fn test_unwritable_root() {
    let root = tempfile::tempdir().unwrap();
    // A file where a directory needs to be.
    let blocker = root.path().join("crates");
    std::fs::write(&blocker, "").unwrap();

    let err = hrtf_data_processor::export_to_repo(&scenario(), root.path()).unwrap_err();
    assert!(err.is_io(), "{err}");
    assert!(
        err.to_string()
            .starts_with("Unable to create output directory"),
        "{err}"
    );
}

fn write_measurement(root: &Path, elev: i32, az: i32, samples: &[i16]) {
    let dir = root.join(format!("elev{elev}"));
    std::fs::create_dir_all(&dir).unwrap();
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: hrtf_data_processor::SR,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(dir.join(format!("L{elev}e{az:03}a.wav")), spec).unwrap();
    for s in samples {
        writer.write_sample(*s).unwrap();
    }
    writer.finalize().unwrap();
}

#[test]
fn test_mit_kemar_pipeline() {
    let data = tempfile::tempdir().unwrap();
    for az in [0, 90, 180, 270] {
        write_measurement(data.path(), -40, az, &[16384, 0]);
    }
    for az in [0, 180] {
        write_measurement(data.path(), -30, az, &[8192, 8192]);
    }
    write_measurement(data.path(), -20, 0, &[0, 16384]);

    let db = MitKemarDirectory::new(data.path())
        .compute_hrtf_data()
        .unwrap();
    assert_eq!(db.num_azimuths(), vec![4, 2, 1]);

    let root = tempfile::tempdir().unwrap();
    let report = hrtf_data_processor::export_to_repo(&db, root.path()).unwrap();
    let loaded = hrtf_datasets::load_dataset(&report.path).unwrap();

    assert_eq!(
        angles(&loaded),
        vec![
            (-40.0, vec![0.0, 90.0, 180.0, 270.0]),
            (-30.0, vec![0.0, 180.0]),
            (-20.0, vec![0.0]),
        ]
    );
    assert_eq!(loaded.elevations[0].azimuths[3].impulse, vec![0.5, 0.0]);
    assert_eq!(loaded.elevations[1].azimuths[1].impulse, vec![0.25, 0.25]);
}
