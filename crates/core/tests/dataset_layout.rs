use bids_core::tree::dir_tree_lines;
use bids_core::{
    copy_recording_set, copyfile_brainvision, BidsError, BidsFilename, BidsFolders, CoreConfig,
    DatasetDescription, FilesError, SyntheticRecording,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_raw_recording_moved_into_dataset() {
    let temp = TempDir::new().unwrap();
    let raw_dir = temp.path().join("raw");
    fs::create_dir(&raw_dir).unwrap();
    let root = temp.path().join("bids");
    let config = CoreConfig::new(root.clone(), "1.1.1".into()).unwrap();

    let recording = SyntheticRecording {
        seed: Some(7),
        duration_secs: 2,
        ..SyntheticRecording::default()
    };
    let raw_header = recording.write(&raw_dir).unwrap();

    let folder = BidsFolders::new("01")
        .session("01")
        .kind("eeg")
        .root(config.bids_root())
        .build()
        .unwrap();
    let header = BidsFilename::new()
        .subject("01")
        .session("01")
        .task("rest")
        .run(1)
        .suffix("eeg.vhdr")
        .prefix(folder.to_string_lossy())
        .build()
        .unwrap();

    copy_recording_set(&raw_header, Path::new(&header)).unwrap();
    DatasetDescription {
        name: Some("Synthetic".into()),
        ..Default::default()
    }
    .write(config.bids_root(), &config)
    .unwrap();

    let header_text = fs::read_to_string(&header).unwrap();
    assert!(header_text.contains("\nDataFile=sub-01_ses-01_task-rest_run-01_eeg.eeg\n"));
    assert!(header_text.contains("\nMarkerFile=sub-01_ses-01_task-rest_run-01_eeg.vmrk\n"));
    assert_eq!(
        fs::read(raw_dir.join("test.eeg")).unwrap(),
        fs::read(folder.join("sub-01_ses-01_task-rest_run-01_eeg.eeg")).unwrap()
    );

    let lines = dir_tree_lines(&root).unwrap();
    assert_eq!(lines[0], "bids");
    let header_line = format!("{} sub-01_ses-01_task-rest_run-01_eeg.vhdr", "-----".repeat(4));
    assert!(lines.contains(&header_line));
    assert!(lines.contains(&"----- dataset_description.json".to_string()));
}

#[test]
fn test_invalid_entity_leaves_dataset_untouched() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("bids");

    let folders = BidsFolders::new("01").session("pre-op").kind("eeg").root(&root).build();
    let filename = BidsFilename::new().subject("01").task("rest_eyes").build();

    assert!(matches!(folders, Err(BidsError::InvalidLabel(_))));
    assert!(matches!(filename, Err(BidsError::InvalidLabel(_))));
    assert!(!root.exists());
}

#[test]
fn test_mismatched_member_copy_creates_nothing() {
    let temp = TempDir::new().unwrap();
    let header = SyntheticRecording {
        basename: "x".into(),
        duration_secs: 1,
        seed: Some(1),
        ..SyntheticRecording::default()
    }
    .write(temp.path())
    .unwrap();
    let dest = temp.path().join("y.eeg");

    let err = copyfile_brainvision(&header, &dest).unwrap_err();

    assert!(matches!(err, FilesError::ExtensionMismatch { .. }));
    assert!(!dest.exists());
}
