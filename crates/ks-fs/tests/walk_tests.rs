use std::collections::BTreeSet;

use ks_fs::{AbsPath, Filesystem, MemFs, OsFs, walk_files};
use pretty_assertions::assert_eq;

fn populate(fs: &dyn Filesystem, base: &AbsPath) {
    fs.create_dir_all(&base.join("a/b")).unwrap();
    fs.create_dir_all(&base.join("skip/nested")).unwrap();
    fs.create_dir_all(&base.join("empty")).unwrap();
    fs.write_file(&base.join("one.jsonnet"), b"").unwrap();
    fs.write_file(&base.join("a/two.jsonnet"), b"").unwrap();
    fs.write_file(&base.join("a/b/three.jsonnet"), b"").unwrap();
    fs.write_file(&base.join("skip/hidden.jsonnet"), b"").unwrap();
    fs.write_file(&base.join("skip/nested/deeper.jsonnet"), b"").unwrap();
}

fn relative(base: &AbsPath, files: Vec<AbsPath>) -> BTreeSet<String> {
    files
        .iter()
        .map(|f| f.as_str()[base.as_str().len() + 1..].to_string())
        .collect()
}

fn expected() -> BTreeSet<String> {
    ["one.jsonnet", "a/two.jsonnet", "a/b/three.jsonnet"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[test]
fn walk_prunes_named_subtree_in_memory() {
    let fs = MemFs::new();
    let base = AbsPath::new("/walk").unwrap();
    populate(&fs, &base);

    let files = walk_files(&fs, &base, |entry| entry.name() == "skip").unwrap();

    assert_eq!(files.len(), 3);
    assert_eq!(relative(&base, files), expected());
}

#[test]
fn walk_prunes_named_subtree_on_disk() {
    let temp = assert_fs::TempDir::new().unwrap();
    let base = AbsPath::new(temp.path()).unwrap();
    let fs = OsFs::new();
    populate(&fs, &base);

    let files = walk_files(&fs, &base, |entry| entry.name() == "skip").unwrap();

    assert_eq!(relative(&base, files), expected());
}

#[test]
fn walk_without_pruning_finds_everything() {
    let fs = MemFs::new();
    let base = AbsPath::new("/walk").unwrap();
    populate(&fs, &base);

    let files = walk_files(&fs, &base, |_| false).unwrap();
    assert_eq!(files.len(), 5);
}

#[test]
fn walk_of_empty_directory_is_empty() {
    let fs = MemFs::new();
    let base = AbsPath::new("/walk").unwrap();
    fs.create_dir_all(&base).unwrap();

    assert!(walk_files(&fs, &base, |_| false).unwrap().is_empty());
}

#[test]
fn walk_of_missing_directory_fails() {
    let fs = MemFs::new();
    let base = AbsPath::new("/nowhere").unwrap();

    assert!(walk_files(&fs, &base, |_| false).is_err());
}
