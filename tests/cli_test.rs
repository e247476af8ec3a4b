//! End-to-end tests of the `incflat` binary.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn incflat() -> Command {
    let mut cmd = Command::cargo_bin("incflat").expect("binary built");
    cmd.env_remove("INCFLAT_INCLUDE_PATH");
    cmd
}

fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dirs");
    }
    std::fs::write(path, content).expect("write fixture");
}

#[test]
fn test_expand_to_stdout() {
    let temp = TempDir::new().expect("temp dir");
    write_file(temp.path(), "a", "#include \"b\"\ntext-after\n");
    write_file(temp.path(), "b", "hello\n");

    incflat()
        .args(["expand"])
        .arg(temp.path().join("a"))
        .assert()
        .success()
        .stdout("hello\ntext-after\n");
}

#[test]
fn test_expand_with_include_dirs() {
    let temp = TempDir::new().expect("temp dir");
    write_file(temp.path(), "main.c", "#include <sys.h>\nint main;\n");
    write_file(temp.path(), "inc2/sys.h", "second\n");
    write_file(temp.path(), "inc1/sys.h", "first\n");

    incflat()
        .arg("expand")
        .arg(temp.path().join("main.c"))
        .arg("-I")
        .arg(temp.path().join("inc1"))
        .arg("-I")
        .arg(temp.path().join("inc2"))
        .assert()
        .success()
        .stdout("first\nint main;\n");
}

#[test]
fn test_include_path_from_env() {
    let temp = TempDir::new().expect("temp dir");
    write_file(temp.path(), "main.c", "#include <env.h>\n");
    write_file(temp.path(), "envinc/env.h", "from env\n");

    incflat()
        .env("INCFLAT_INCLUDE_PATH", temp.path().join("envinc"))
        .arg("expand")
        .arg(temp.path().join("main.c"))
        .assert()
        .success()
        .stdout("from env\n");
}

#[test]
fn test_unresolved_include_reports_location() {
    let temp = TempDir::new().expect("temp dir");
    write_file(temp.path(), "root.c", "#include <missing.h>\n");

    incflat()
        .arg("expand")
        .arg(temp.path().join("root.c"))
        .assert()
        .failure()
        .stdout("")
        .stderr(
            predicate::str::contains("unknown include file missing.h")
                .and(predicate::str::contains("root.c"))
                .and(predicate::str::contains("at line 1")),
        );
}

#[test]
fn test_json_error_on_stdout() {
    let temp = TempDir::new().expect("temp dir");
    write_file(temp.path(), "root.c", "ok\n#include \"gone.h\"\n");
    let out = temp.path().join("root.out");

    incflat()
        .args(["--format", "json", "expand"])
        .arg(temp.path().join("root.c"))
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stdout(
            predicate::str::contains("\"kind\": \"unresolved_include\"")
                .and(predicate::str::contains("\"line\": 2")),
        );
    assert!(!out.exists());
}

#[test]
fn test_json_error_kept_off_streamed_output() {
    let temp = TempDir::new().expect("temp dir");
    write_file(temp.path(), "root.c", "partial-line\n#include <gone.h>\n");

    incflat()
        .args(["--format", "json", "expand"])
        .arg(temp.path().join("root.c"))
        .assert()
        .failure()
        .stdout("partial-line\n")
        .stderr(
            predicate::str::contains("\"kind\": \"unresolved_include\"")
                .and(predicate::str::contains("gone.h")),
        );
}

#[test]
fn test_include_dir_with_colon() {
    let temp = TempDir::new().expect("temp dir");
    write_file(temp.path(), "m.c", "#include <x.h>\n");
    write_file(temp.path(), "inc:v2/x.h", "colon dir\n");

    incflat()
        .arg("expand")
        .arg(temp.path().join("m.c"))
        .arg("-I")
        .arg(temp.path().join("inc:v2"))
        .assert()
        .success()
        .stdout("colon dir\n");
}

#[test]
fn test_include_path_env_is_split() {
    let temp = TempDir::new().expect("temp dir");
    write_file(temp.path(), "main.c", "#include <a.h>\n#include <b.h>\n");
    write_file(temp.path(), "one/a.h", "a\n");
    write_file(temp.path(), "two/b.h", "b\n");
    let list = std::env::join_paths([temp.path().join("one"), temp.path().join("two")])
        .expect("join paths");

    incflat()
        .env("INCFLAT_INCLUDE_PATH", list)
        .arg("expand")
        .arg(temp.path().join("main.c"))
        .assert()
        .success()
        .stdout("a\nb\n");
}

#[test]
fn test_check_success() {
    let temp = TempDir::new().expect("temp dir");
    write_file(temp.path(), "a.c", "#include \"b.h\"\n");
    write_file(temp.path(), "b.h", "b\n");

    incflat()
        .arg("check")
        .arg(temp.path().join("a.c"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("OK:").and(predicate::str::contains("Includes:   1")));
}

#[test]
fn test_cycle_fails() {
    let temp = TempDir::new().expect("temp dir");
    write_file(temp.path(), "a.h", "#include \"a.h\"\n");

    incflat()
        .arg("check")
        .arg(temp.path().join("a.h"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cyclic include of a.h"));
}

#[test]
fn test_missing_subcommand() {
    incflat().assert().failure();
}
