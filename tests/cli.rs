//! End-to-end tests for the `id3tag` binary.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use common::{cbr_mp3, scratch_mp3};

fn id3tag() -> Command {
    Command::cargo_bin("id3tag").unwrap()
}

#[test]
fn no_arguments_prints_usage_and_exits_1() {
    id3tag()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn create_without_file_prints_usage_and_exits_1() {
    id3tag()
        .arg("create")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn extra_positional_argument_is_rejected() {
    id3tag()
        .args(["print", "a.mp3", "b.mp3"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_exits_0() {
    id3tag().arg("--help").assert().success();
}

#[test]
fn create_then_print_default_fixture() {
    let dir = TempDir::new().unwrap();
    let path = scratch_mp3(&dir);

    id3tag().arg("create").arg(&path).assert().success();

    id3tag().arg("print").arg(&path).assert().success().stdout(
        "Dummy Title\n\
         Dummy Artist\n\
         Dummy Album\n\
         1/10\n\
         2000\n\
         Dummy Comment\n\
         Dummy Comment 2\n\
         Pop\n\
         992dc19a-5631-40f5-b252-fbfedbc328a9\n",
    );
}

#[test]
fn print_with_ids_prefixes_frame_ids() {
    let dir = TempDir::new().unwrap();
    let path = scratch_mp3(&dir);

    id3tag().arg("create").arg(&path).assert().success();

    id3tag()
        .args(["print", "--ids"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("TIT2: Dummy Title"))
        .stdout(predicate::str::contains("TCON: Pop"));
}

#[test]
fn create_with_overrides() {
    let dir = TempDir::new().unwrap();
    let path = scratch_mp3(&dir);

    id3tag()
        .arg("create")
        .arg(&path)
        .args([
            "--title",
            "Shy Boy",
            "--artist",
            "Katie Melua",
            "--track",
            "1/12",
            "--comment",
            "only one comment",
        ])
        .assert()
        .success();

    id3tag()
        .arg("print")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Shy Boy"))
        .stdout(predicate::str::contains("Katie Melua"))
        .stdout(predicate::str::contains("1/12"))
        .stdout(predicate::str::contains("only one comment"))
        .stdout(predicate::str::contains("Dummy Comment").not());
}

#[test]
fn strip_then_print_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = scratch_mp3(&dir);

    id3tag().arg("create").arg(&path).assert().success();

    id3tag()
        .arg("strip")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("stripped ID3v2"));

    id3tag()
        .arg("print")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn info_reports_stream_and_tag() {
    let dir = TempDir::new().unwrap();
    let path = cbr_mp3(&dir, 39);

    id3tag().arg("create").arg(&path).assert().success();

    id3tag()
        .arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("sample rate: 44100 Hz"))
        .stdout(predicate::str::contains("channels:    2"))
        .stdout(predicate::str::contains("title:       Dummy Title"))
        .stdout(predicate::str::contains("artist:      Dummy Artist"));
}

#[test]
fn create_on_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does_not_exist.mp3");

    id3tag()
        .arg("create")
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error"));
}

#[test]
fn malformed_user_text_fails() {
    let dir = TempDir::new().unwrap();
    let path = scratch_mp3(&dir);

    id3tag()
        .arg("create")
        .arg(&path)
        .args(["--user-text", "missing-separator"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("DESC=VALUE"));
}
