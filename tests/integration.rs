// CLI-level tests: invoke the binary as a subprocess against tempdir targets.
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

const EXAMPLE: &str = "\
Project/
├── src/
│   ├── main.py
│   └── utils.py
├── tests/
│   └── test_main.py
└── README.md
";

fn write_structure(dir: &Path) -> PathBuf {
    let path = dir.join("structure.txt");

    fs::write(&path, EXAMPLE).unwrap();

    path
}

/// Relative paths of everything under `root`, sorted, `/`-separated.
fn created_paths(root: &Path) -> Vec<String> {
    let mut paths: Vec<String> = walkdir::WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            entry
                .unwrap()
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();

    paths.sort();

    paths
}

#[test]
fn build_creates_the_documented_layout() {
    let scratch = tempfile::tempdir().unwrap();
    let structure = write_structure(scratch.path());
    let target = scratch.path().join("out");
    fs::create_dir(&target).unwrap();

    let mut cmd = Command::cargo_bin("dirsmith").unwrap();
    cmd.arg("build").arg(&structure).arg(&target).arg("--yes");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("done:"));

    let expected = [
        "Project",
        "Project/README.md",
        "Project/src",
        "Project/src/main.py",
        "Project/src/utils.py",
        "Project/tests",
        "Project/tests/test_main.py",
    ];
    assert_eq!(created_paths(&target), expected);
}

#[test]
fn build_from_stdin_without_subfolder() {
    let scratch = tempfile::tempdir().unwrap();
    let target = scratch.path().join("out");
    fs::create_dir(&target).unwrap();

    let mut cmd = Command::cargo_bin("dirsmith").unwrap();
    cmd.arg("build")
        .arg("-")
        .arg(&target)
        .arg("--yes")
        .arg("--no-subfolder")
        .write_stdin("Notes/\n└── todo.md\n");

    cmd.assert().success();

    assert_eq!(created_paths(&target), ["todo.md"]);
}

#[test]
fn preview_touches_nothing() {
    let scratch = tempfile::tempdir().unwrap();
    let structure = write_structure(scratch.path());

    let mut cmd = Command::cargo_bin("dirsmith").unwrap();
    cmd.arg("preview").arg(&structure);

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("README.md"));

    // only the structure file itself is in the scratch dir
    assert_eq!(created_paths(scratch.path()), ["structure.txt"]);
}

#[test]
fn empty_structure_is_a_diagnostic() {
    let scratch = tempfile::tempdir().unwrap();
    let structure = scratch.path().join("structure.txt");
    fs::write(&structure, "# nothing here\n\n").unwrap();
    let target = scratch.path().join("out");
    fs::create_dir(&target).unwrap();

    let mut cmd = Command::cargo_bin("dirsmith").unwrap();
    cmd.arg("build").arg(&structure).arg(&target).arg("--yes");

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("no structure provided"));
}

#[test]
fn missing_structure_file_is_a_diagnostic() {
    let mut cmd = Command::cargo_bin("dirsmith").unwrap();
    cmd.arg("preview").arg("does-not-exist.txt");

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("does-not-exist.txt"));
}

#[test]
fn rerunning_a_build_succeeds() {
    let scratch = tempfile::tempdir().unwrap();
    let structure = write_structure(scratch.path());
    let target = scratch.path().join("out");
    fs::create_dir(&target).unwrap();

    for _ in 0..2 {
        let mut cmd = Command::cargo_bin("dirsmith").unwrap();
        cmd.arg("build").arg(&structure).arg(&target).arg("--yes");
        cmd.assert().success();
    }

    assert!(target.join("Project/src/main.py").is_file());
}
