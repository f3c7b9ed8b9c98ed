use applefile::tools::*;
use applefile::types::Variant;

use std::fs;
use std::path::Path;

#[test]
fn unfork_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("readme.txt.applesingle");
    fs::write(&input, include_bytes!("../testdata/readme.txt.applesingle")).unwrap();

    let mut attributes = MemoryAttributes::new();
    let output = unfork_file(
        &mut FileSystem,
        &mut attributes,
        &input,
        &UnforkOptions::default(),
    )
    .unwrap();

    assert_eq!(output, dir.path().join("readme.txt"));
    assert_eq!(fs::read(&output).unwrap(), b"hi");
    let finder_info = attributes.get(&output, FINDER_INFO_ATTRIBUTE).unwrap();
    assert_eq!(&finder_info[..8], b"TEXTttxt");
}

#[test]
fn wrap_then_unfork_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes");
    fs::write(&input, b"some notes").unwrap();

    let mut attributes = MemoryAttributes::new();
    attributes
        .set_attribute(&input, RESOURCE_FORK_ATTRIBUTE, b"resource bytes")
        .unwrap();
    attributes
        .set_attribute(&input, FINDER_INFO_ATTRIBUTE, &[0x20; 32])
        .unwrap();

    let wrapped = wrap_file(&mut FileSystem, &attributes, &input, &WrapOptions::default()).unwrap();
    assert_eq!(wrapped, dir.path().join("notes.applesingle"));
    let raw = fs::read(&wrapped).unwrap();
    assert_eq!(applefile::classify(&raw), Some(Variant::Single));

    let restored = dir.path().join("restored");
    let mut restored_attributes = MemoryAttributes::new();
    let output = unfork_file(
        &mut FileSystem,
        &mut restored_attributes,
        &wrapped,
        &UnforkOptions {
            output: Some(restored.clone()),
        },
    )
    .unwrap();

    assert_eq!(output, restored);
    assert_eq!(fs::read(&restored).unwrap(), b"some notes");
    assert_eq!(
        restored_attributes.get(&restored, RESOURCE_FORK_ATTRIBUTE),
        Some(&b"resource bytes"[..])
    );
    assert_eq!(
        restored_attributes.get(&restored, FINDER_INFO_ATTRIBUTE),
        Some(&[0x20; 32][..])
    );
}

#[test]
fn batch_reports_each_file() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.applesingle");
    let bad = dir.path().join("bad.applesingle");
    fs::write(&good, include_bytes!("../testdata/readme.txt.applesingle")).unwrap();
    // Header and descriptors only, the payloads are gone.
    fs::write(&bad, &include_bytes!("../testdata/readme.txt.applesingle")[..62]).unwrap();

    let mut attributes = MemoryAttributes::new();
    let inputs = [bad.clone(), dir.path().join("absent"), good.clone()];
    let report = run_batch(&inputs, |input| {
        unfork_file(
            &mut FileSystem,
            &mut attributes,
            input,
            &UnforkOptions {
                output: Some(input.with_extension("out")),
            },
        )
    });

    assert_eq!(report.succeeded, 1);
    assert_eq!(report.failed, 2);
    assert!(Path::new(&good.with_extension("out")).exists());
    assert!(!bad.with_extension("out").exists());
}

#[test]
fn attribute_store_contract() {
    let mut attributes = MemoryAttributes::new();
    let path = Path::new("f");
    assert_eq!(attributes.get_attribute(path, FINDER_INFO_ATTRIBUTE).unwrap(), None);
    attributes.set_attribute(path, FINDER_INFO_ATTRIBUTE, b"x").unwrap();
    assert_eq!(
        attributes.get_attribute(path, FINDER_INFO_ATTRIBUTE).unwrap(),
        Some(b"x".to_vec())
    );
    attributes.remove_attribute(path, FINDER_INFO_ATTRIBUTE).unwrap();
    attributes.remove_attribute(path, FINDER_INFO_ATTRIBUTE).unwrap();
    assert!(attributes.is_empty());
}
