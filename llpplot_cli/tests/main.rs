use assert_cmd::Command;
use predicates::str;

#[test]
fn help() {
    Command::cargo_bin("llpplot")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(str::contains("Usage: llpplot [OPTIONS] <COMMAND>"))
        .stdout(str::contains("benchmark"))
        .stdout(str::contains("plot"))
        .stdout(str::contains("read"))
        .stdout(str::contains("styles"));
}

#[test]
fn no_arguments() {
    Command::cargo_bin("llpplot")
        .unwrap()
        .assert()
        .failure()
        .stderr(str::contains("Usage: llpplot [OPTIONS] <COMMAND>"));
}

#[test]
fn version() {
    Command::cargo_bin("llpplot")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(str::starts_with("llpplot "));
}
