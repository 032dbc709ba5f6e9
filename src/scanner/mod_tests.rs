use std::fs;
use std::path::{Path, PathBuf};

use super::*;
use tempfile::TempDir;

struct PruneNothing;

impl DirectoryFilter for PruneNothing {
    fn should_prune(&self, _dir: &Path) -> bool {
        false
    }
}

fn scan<F: DirectoryFilter>(walker: &DirectoryWalker<F>, root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walker.walk(root, |path| files.push(path.to_path_buf()))?;
    Ok(files)
}

fn relative(root: &Path, files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|f| {
            f.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn scanner_finds_files_in_subdirectories() {
    let temp_dir = TempDir::new().unwrap();
    let sub_dir = temp_dir.path().join("src");
    fs::create_dir(&sub_dir).unwrap();
    fs::write(sub_dir.join("main.py"), "print(1)\n").unwrap();
    fs::write(temp_dir.path().join("setup.py"), "").unwrap();

    let walker = DirectoryWalker::new(PruneNothing);
    let files = scan(&walker, temp_dir.path()).unwrap();

    assert_eq!(files.len(), 2);
}

#[test]
fn scanner_visits_in_sorted_pre_order() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("b/inner")).unwrap();
    fs::write(root.join("c.json"), "{}").unwrap();
    fs::write(root.join("a.json"), "{}").unwrap();
    fs::write(root.join("b/z.json"), "{}").unwrap();
    fs::write(root.join("b/inner/y.json"), "{}").unwrap();

    let files = scan(&DirectoryWalker::new(PruneNothing), root).unwrap();

    assert_eq!(
        relative(root, &files),
        vec!["a.json", "b/inner/y.json", "b/z.json", "c.json"]
    );
}

#[test]
fn excluded_directory_is_pruned_at_any_depth() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("vendor/deep/deeper")).unwrap();
    fs::create_dir_all(root.join("lib/vendor")).unwrap();
    fs::write(root.join("vendor/bad.rb"), "def").unwrap();
    fs::write(root.join("vendor/deep/deeper/bad.rb"), "def").unwrap();
    fs::write(root.join("lib/vendor/also.rb"), "def").unwrap();
    fs::write(root.join("lib/ok.rb"), "puts 1").unwrap();

    let filter = ExcludeFilter::new(vec!["vendor".to_string()], &[]).unwrap();
    let files = scan(&DirectoryWalker::new(filter), root).unwrap();

    assert_eq!(relative(root, &files), vec!["lib/ok.rb"]);
}

#[test]
fn excluded_root_yields_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("vendor");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("x.rb"), "").unwrap();

    let filter = ExcludeFilter::new(vec!["vendor".to_string()], &[]).unwrap();
    let files = scan(&DirectoryWalker::new(filter), &root).unwrap();

    assert!(files.is_empty());
}

#[test]
fn file_root_is_visited_directly() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("single.yaml");
    fs::write(&file, "a: 1\n").unwrap();

    let files = scan(&DirectoryWalker::new(PruneNothing), &file).unwrap();

    assert_eq!(files, vec![file]);
}

#[test]
fn directories_are_not_visited() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("empty/nested")).unwrap();

    let mut seen = Vec::new();
    let count = DirectoryWalker::new(PruneNothing)
        .walk(temp_dir.path(), |p| seen.push(p.to_path_buf()))
        .unwrap();

    assert_eq!(count, 0);
    assert!(seen.is_empty());
}

#[test]
fn missing_root_is_a_hard_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope");

    let err = scan(&DirectoryWalker::new(PruneNothing), &missing).unwrap_err();

    assert!(matches!(err, SyntaxGuardError::Traversal { path, .. } if path == missing));
}

#[cfg(unix)]
#[test]
fn symlinked_file_is_visited_under_its_link_path() {
    let temp_dir = TempDir::new().unwrap();
    let real = temp_dir.path().join("real");
    let tree = temp_dir.path().join("tree");
    fs::create_dir(&real).unwrap();
    fs::create_dir(&tree).unwrap();
    fs::write(real.join("x.txt"), "{").unwrap();
    std::os::unix::fs::symlink(real.join("x.txt"), tree.join("link.json")).unwrap();

    let files = scan(&DirectoryWalker::new(PruneNothing), &tree).unwrap();

    assert_eq!(files, vec![tree.join("link.json")]);
}

#[cfg(unix)]
#[test]
fn symlinked_directory_is_not_descended() {
    let temp_dir = TempDir::new().unwrap();
    let real = temp_dir.path().join("real");
    let tree = temp_dir.path().join("tree");
    fs::create_dir(&real).unwrap();
    fs::create_dir(&tree).unwrap();
    fs::write(real.join("a.json"), "{}").unwrap();
    std::os::unix::fs::symlink(&real, tree.join("linked")).unwrap();

    let files = scan(&DirectoryWalker::new(PruneNothing), &tree).unwrap();

    assert!(files.is_empty());
}
