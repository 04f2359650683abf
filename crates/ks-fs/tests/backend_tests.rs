//! Behaviour shared by every `Filesystem` backend.

use std::io::ErrorKind;

use ks_fs::EntryKind;
use ks_test_utils::sandbox::Sandbox;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::memory(Sandbox::memory())]
#[case::disk(Sandbox::disk())]
fn write_then_read_round_trips(#[case] sb: Sandbox) {
    let file = sb.path("schema.json");
    sb.fs().write_file(&file, b"{\"swagger\": \"2.0\"}").unwrap();

    assert_eq!(sb.fs().read_file(&file).unwrap(), b"{\"swagger\": \"2.0\"}");
    assert!(sb.fs().exists(&file).unwrap());
    assert!(!sb.fs().dir_exists(&file).unwrap());
}

#[rstest]
#[case::memory(Sandbox::memory())]
#[case::disk(Sandbox::disk())]
fn write_truncates_existing_file(#[case] sb: Sandbox) {
    let file = sb.path("k.libsonnet");
    sb.fs().write_file(&file, b"a much longer original body").unwrap();
    sb.fs().write_file(&file, b"short").unwrap();

    assert_eq!(sb.fs().read_file(&file).unwrap(), b"short");
}

#[rstest]
#[case::memory(Sandbox::memory())]
#[case::disk(Sandbox::disk())]
fn write_into_missing_directory_fails(#[case] sb: Sandbox) {
    let file = sb.path("missing/file.txt");
    let err = sb.fs().write_file(&file, b"x").unwrap_err();

    assert_eq!(err.io_kind(), Some(ErrorKind::NotFound));
    assert!(!sb.fs().exists(&file).unwrap());
}

#[rstest]
#[case::memory(Sandbox::memory())]
#[case::disk(Sandbox::disk())]
fn read_missing_file_fails(#[case] sb: Sandbox) {
    let err = sb.fs().read_file(&sb.path("nope")).unwrap_err();
    assert_eq!(err.io_kind(), Some(ErrorKind::NotFound));
}

#[rstest]
#[case::memory(Sandbox::memory())]
#[case::disk(Sandbox::disk())]
fn create_dir_all_is_idempotent(#[case] sb: Sandbox) {
    let dir = sb.path("environments/default");
    sb.fs().create_dir_all(&dir).unwrap();
    sb.fs().create_dir_all(&dir).unwrap();

    assert!(sb.fs().dir_exists(&dir).unwrap());
    assert!(sb.fs().dir_exists(&sb.path("environments")).unwrap());
}

#[rstest]
#[case::memory(Sandbox::memory())]
#[case::disk(Sandbox::disk())]
fn read_dir_lists_immediate_children_only(#[case] sb: Sandbox) {
    sb.mkdir("listing/sub/deeper");
    sb.touch("listing/top.jsonnet");
    sb.touch("listing/sub/inner.jsonnet");

    let mut entries: Vec<(String, EntryKind)> = sb
        .fs()
        .read_dir(&sb.path("listing"))
        .unwrap()
        .into_iter()
        .map(|e| (e.name().to_string(), e.kind))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    assert_eq!(
        entries,
        vec![
            ("sub".to_string(), EntryKind::Dir),
            ("top.jsonnet".to_string(), EntryKind::File),
        ]
    );
}

#[rstest]
#[case::memory(Sandbox::memory())]
#[case::disk(Sandbox::disk())]
fn read_dir_of_missing_directory_fails(#[case] sb: Sandbox) {
    let err = sb.fs().read_dir(&sb.path("ghost")).unwrap_err();
    assert_eq!(err.io_kind(), Some(ErrorKind::NotFound));
}

#[rstest]
#[case::memory(Sandbox::memory())]
#[case::disk(Sandbox::disk())]
fn missing_path_does_not_exist(#[case] sb: Sandbox) {
    let ghost = sb.path("ghost");
    assert!(!sb.fs().exists(&ghost).unwrap());
    assert!(!sb.fs().dir_exists(&ghost).unwrap());
}

#[cfg(unix)]
#[test]
fn disk_read_dir_reports_symlinks_as_other_and_keeps_names_verbatim() {
    let sb = Sandbox::disk();
    let dir = sb.mkdir("listing");
    sb.touch("listing/target.jsonnet");
    sb.touch("listing/..\\name.jsonnet");
    std::os::unix::fs::symlink(
        dir.join("target.jsonnet").to_native(),
        dir.join("link.jsonnet").to_native(),
    )
    .unwrap();

    let mut entries: Vec<(String, EntryKind)> = sb
        .fs()
        .read_dir(&dir)
        .unwrap()
        .into_iter()
        .map(|e| {
            assert_eq!(e.path.parent().as_ref(), Some(&dir));
            (e.name().to_string(), e.kind)
        })
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    assert_eq!(
        entries,
        vec![
            ("..\\name.jsonnet".to_string(), EntryKind::File),
            ("link.jsonnet".to_string(), EntryKind::Other),
            ("target.jsonnet".to_string(), EntryKind::File),
        ]
    );
}
