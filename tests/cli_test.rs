use std::fs::{create_dir_all, read_to_string, write};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn filelist() -> Command {
    Command::cargo_bin("filelist").unwrap()
}

#[test]
fn test_writes_default_output_path() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("dataset").join("03001627");
    create_dir_all(root.join("1a2b")).unwrap();
    create_dir_all(temp_dir.path().join("public").join("assets")).unwrap();
    let offset = root.to_str().unwrap().chars().count();

    filelist()
        .current_dir(temp_dir.path())
        .arg("--source-root")
        .arg(&root)
        .arg("--offset")
        .arg(offset.to_string())
        .assert()
        .success();

    let content = read_to_string(temp_dir.path().join("public/assets/filelist.txt")).unwrap();
    assert_eq!(content, "/data/1a2b/models/model_normalized.obj\n");
}

#[test]
fn test_dry_run_prints_list() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("root");
    create_dir_all(root.join("b")).unwrap();
    create_dir_all(root.join("a")).unwrap();
    let output = temp_dir.path().join("filelist.txt");
    let offset = root.to_str().unwrap().chars().count();

    filelist()
        .current_dir(temp_dir.path())
        .arg("-s")
        .arg(&root)
        .arg("-o")
        .arg(&output)
        .args(["--offset", &offset.to_string(), "--prefix", "/assets", "--sort", "--dry"])
        .assert()
        .success()
        .stdout(
            "/assets/a/models/model_normalized.obj\n/assets/b/models/model_normalized.obj\n",
        );

    assert!(!output.exists());
}

#[test]
fn test_reads_config_file() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("root");
    create_dir_all(root.join("chair")).unwrap();
    let output = temp_dir.path().join("list.txt");
    let config_path = temp_dir.path().join("chairs.yaml");
    write(
        &config_path,
        format!(
            "source_root: {}\noutput_path: {}\noffset: {}\nsuffix: /model.obj\n",
            root.display(),
            output.display(),
            root.to_str().unwrap().chars().count()
        ),
    )
    .unwrap();

    filelist()
        .current_dir(temp_dir.path())
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    assert_eq!(read_to_string(&output).unwrap(), "/data/chair/model.obj\n");
}

#[test]
fn test_missing_source_root_fails() {
    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("filelist.txt");

    filelist()
        .current_dir(temp_dir.path())
        .arg("-s")
        .arg(temp_dir.path().join("missing"))
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to list directory"));

    assert!(!output.exists());
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp_dir = tempdir().unwrap();

    filelist()
        .current_dir(temp_dir.path())
        .args(["--config", "nowhere.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nowhere.yaml"));
}

#[test]
fn test_help_lists_options() {
    filelist()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--source-root"))
        .stdout(predicate::str::contains("--offset"))
        .stdout(predicate::str::contains("--dry"));
}
