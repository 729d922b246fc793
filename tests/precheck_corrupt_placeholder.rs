use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::tempdir;
use unbackslash::{PrecheckError, precheck, scan_dir};

fn snapshot(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| {
            let e = e.unwrap();
            let name = e.file_name().to_string_lossy().into_owned();
            let bytes = if e.file_type().unwrap().is_file() {
                fs::read(e.path()).unwrap()
            } else {
                Vec::new()
            };
            (name, bytes)
        })
        .collect()
}

/// A placeholder carrying payload refuses the whole run, and the refusal has
/// zero side effects.
#[test]
fn non_empty_placeholder_aborts_without_mutation() {
    let td = tempdir().unwrap();
    fs::write(td.path().join(r"x\"), b"ten bytes!").unwrap();
    fs::write(td.path().join(r"x\file.txt"), b"payload").unwrap();
    let before = snapshot(td.path());

    let scan = scan_dir(td.path()).unwrap();
    let err = precheck(&scan).unwrap_err();

    match &err {
        PrecheckError::CorruptPlaceholder { placeholder, size } => {
            assert_eq!(placeholder, r"x\");
            assert_eq!(*size, 10);
        }
        other => panic!("expected CorruptPlaceholder, got {other:?}"),
    }
    assert!(err.to_string().contains(r"x\"));

    assert_eq!(snapshot(td.path()), before, "refused run must not mutate");
}

/// One bad placeholder poisons the whole set, even when others are fine.
#[test]
fn single_corrupt_placeholder_fails_entire_set() {
    let td = tempdir().unwrap();
    fs::write(td.path().join(r"good\"), b"").unwrap();
    fs::write(td.path().join(r"zbad\"), b"data").unwrap();

    let scan = scan_dir(td.path()).unwrap();
    let err = precheck(&scan).unwrap_err();
    assert_eq!(err.kind(), "corrupt_placeholder");
    assert!(td.path().join(r"good\").exists(), "nothing may be removed");
}
