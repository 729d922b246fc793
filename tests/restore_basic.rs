use std::fs;
use tempfile::tempdir;
use unbackslash::{precheck, restore, scan_dir};

/// The canonical flattened layout: two placeholders and two files encoding
/// a two-level tree.
#[test]
fn rebuilds_two_level_tree() {
    let td = tempdir().unwrap();
    fs::write(td.path().join(r"a\"), b"").unwrap();
    fs::write(td.path().join(r"a\b.txt"), b"bee").unwrap();
    fs::write(td.path().join(r"a\c\"), b"").unwrap();
    fs::write(td.path().join(r"a\c\d.txt"), b"dee").unwrap();

    let scan = scan_dir(td.path()).unwrap();
    precheck(&scan).expect("layout should pass pre-check");
    restore(td.path(), &scan).expect("restore should succeed");

    assert!(td.path().join("a").is_dir());
    assert!(td.path().join("a/c").is_dir());
    assert_eq!(fs::read(td.path().join("a/b.txt")).unwrap(), b"bee");
    assert_eq!(fs::read(td.path().join("a/c/d.txt")).unwrap(), b"dee");

    // No backslash-bearing names remain at the base level.
    for entry in fs::read_dir(td.path()).unwrap() {
        let name = entry.unwrap().file_name();
        assert!(
            !name.to_string_lossy().contains('\\'),
            "flattened entry left behind: {:?}",
            name
        );
    }
}

#[test]
fn entries_without_backslashes_are_untouched() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("keep.txt"), b"keep").unwrap();
    fs::write(td.path().join(r"a\"), b"").unwrap();
    fs::write(td.path().join(r"a\new.txt"), b"new").unwrap();

    let scan = scan_dir(td.path()).unwrap();
    precheck(&scan).unwrap();
    restore(td.path(), &scan).unwrap();

    assert_eq!(fs::read(td.path().join("keep.txt")).unwrap(), b"keep");
    assert_eq!(fs::read(td.path().join("a/new.txt")).unwrap(), b"new");
}
