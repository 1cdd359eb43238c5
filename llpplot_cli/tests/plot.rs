use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::str;
use std::fs;

fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let data = dir.child("data_points");
    data.child("ANUBIS1.dat")
        .write_str("1e-2\t1e-6\n1\t1e-9\n1e5\t1e-7\n")
        .unwrap();
    data.child("FASER.dat")
        .write_str("1e-2\t1e-7\n1\t1e-8\n")
        .unwrap();
    data.child("UNKNOWN.dat").write_str("1\t1e-8\n").unwrap();
    dir
}

#[test]
fn pdf() {
    let dir = data_dir();
    let output = dir.child("plots/benchmark_one.pdf");

    Command::cargo_bin("llpplot")
        .unwrap()
        .args([
            "plot",
            "--style=one",
            dir.child("data_points").path().to_str().unwrap(),
            output.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout("");

    assert!(fs::read(output.path()).unwrap().starts_with(b"%PDF-"));
}

#[test]
fn svg_with_exclusions() {
    let dir = data_dir();
    let output = dir.child("plot.svg");

    Command::cargo_bin("llpplot")
        .unwrap()
        .args([
            "plot",
            "-s",
            "twoA",
            "--exclude=FASER,MAPP1",
            dir.child("data_points").path().to_str().unwrap(),
            output.path().to_str().unwrap(),
        ])
        .assert()
        .success();

    let svg = fs::read_to_string(output.path()).unwrap();

    assert!(svg.contains("ANUBIS, 3 ab⁻¹"));
    assert!(!svg.contains("FASER, 150 fb⁻¹"));
    assert!(svg.contains("M_A=410 GeV"));
}

#[test]
fn unknown_style() {
    let dir = data_dir();
    let output = dir.child("plot.svg");

    Command::cargo_bin("llpplot")
        .unwrap()
        .args([
            "plot",
            "--style=four",
            dir.child("data_points").path().to_str().unwrap(),
            output.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(str::contains("unknown plot style `four`"));

    let svg = fs::read_to_string(output.path()).unwrap();

    assert!(!svg.contains("ANUBIS, 3 ab⁻¹"));
    assert!(!svg.contains("GeV"));
}

#[test]
fn missing_directory() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("llpplot")
        .unwrap()
        .args([
            "plot",
            "--style=one",
            dir.child("data_points").path().to_str().unwrap(),
            dir.child("plot.pdf").path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(str::contains("is not a directory"));

    dir.child("plot.pdf").assert(predicates::path::missing());
}
