use std::fs;
use tempfile::tempdir;
use unbackslash::{PrecheckError, precheck, scan_dir};

/// A pre-existing file at the spot a placeholder wants to become a directory
/// refuses the run before any mutation.
#[test]
fn existing_file_at_target_aborts() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("a"), b"i was here first").unwrap();
    fs::write(td.path().join(r"a\"), b"").unwrap();
    fs::write(td.path().join(r"a\b.txt"), b"payload").unwrap();

    let scan = scan_dir(td.path()).unwrap();
    let err = precheck(&scan).unwrap_err();

    match &err {
        PrecheckError::PathTypeConflict {
            placeholder,
            target,
        } => {
            assert_eq!(placeholder, r"a\");
            assert!(target.ends_with("a"));
        }
        other => panic!("expected PathTypeConflict, got {other:?}"),
    }

    // Untouched: the blocking file, the placeholder and the flattened file.
    assert_eq!(fs::read(td.path().join("a")).unwrap(), b"i was here first");
    assert!(td.path().join(r"a\").exists());
    assert_eq!(fs::read(td.path().join(r"a\b.txt")).unwrap(), b"payload");
}

/// A target that already exists as a directory is fine; the placeholder is
/// simply redundant.
#[test]
fn existing_directory_at_target_is_accepted() {
    let td = tempdir().unwrap();
    fs::create_dir(td.path().join("a")).unwrap();
    fs::write(td.path().join(r"a\"), b"").unwrap();

    let scan = scan_dir(td.path()).unwrap();
    precheck(&scan).unwrap();
}
