use std::{fs, path::Path, process::Command};
use tempfile::TempDir;

fn generate(folder: &Path, seed: &str) {
    let status = Command::new(env!("CARGO_BIN_EXE_noise-maker"))
        .arg("--folder")
        .arg(folder)
        .args([
            "--files",
            "2",
            "--lines",
            "50",
            "--start-date",
            "2019-03-31",
            "--seed",
            seed,
        ])
        .status()
        .expect("Failed to start noise-maker");
    assert!(status.success());
}

#[test]
fn writes_daily_log_files() {
    let dir = TempDir::new().unwrap();
    generate(dir.path(), "7");

    let mut names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["u_ex190331.log", "u_ex190401.log"]);

    let body = fs::read_to_string(dir.path().join("u_ex190401.log")).unwrap();
    let requests: Vec<_> = body.lines().filter(|l| !l.starts_with('#')).collect();
    assert_eq!(requests.len(), 50);
    assert!(requests.iter().all(|l| l.split_whitespace().count() == 15));

    let times: Vec<_> = requests
        .iter()
        .map(|l| l.split_whitespace().nth(1).unwrap())
        .collect();
    let mut sorted = times.clone();
    sorted.sort();
    assert_eq!(times, sorted);
}

#[test]
fn same_seed_same_output() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    generate(first.path(), "42");
    generate(second.path(), "42");

    let a = fs::read(first.path().join("u_ex190331.log")).unwrap();
    let b = fs::read(second.path().join("u_ex190331.log")).unwrap();
    assert_eq!(a, b);
}
