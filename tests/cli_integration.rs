//! CLI integration tests for fcm-gen.
//!
//! These tests run the binary against input files in a temporary directory.

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the fcm-gen binary command.
fn fcm_gen() -> Command {
    let mut cmd = Command::cargo_bin("fcm-gen").unwrap();
    cmd.env_remove("FCM_GEN_CONFIG");
    cmd
}

/// Create a temporary directory holding `fqnames.txt` with the given lines.
fn input_dir(lines: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("fqnames.txt"), lines.join("\n")).unwrap();
    tmp
}

const EXAMPLE: &[&str] = &[
    "android.hardware.foo@1.0::IFoo/default",
    "android.hardware.foo@1.2::IFoo/default",
    "android.hardware.foo@1.0::IBar/special",
];

// ============================================================================
// fcm-gen generate
// ============================================================================

#[test]
fn test_generate_merges_entries() {
    let tmp = input_dir(EXAMPLE);

    let expected = "\
<hal format=\"hidl\" optional=\"true\">
    <name>android.hardware.foo</name>
    <version>1.0-2</version>
    <interface>
        <name>IFoo</name>
        <instance>default</instance>
    </interface>
    <interface>
        <name>IBar</name>
        <instance>special</instance>
    </interface>
</hal>

";

    fcm_gen()
        .args(["generate"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::eq(expected));
}

#[test]
fn test_generate_skips_bad_lines_with_warning() {
    let tmp = input_dir(&[
        "# comment",
        "android.hardware.a@1.0::IA",
        "not.a::fqn@@",
        "matrix.xml",
        "android.hardware.b.IB/x",
    ]);

    fcm_gen()
        .args(["generate"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("<name>android.hardware.a</name>"))
        .stdout(predicate::str::contains("<name>android.hardware.b</name>"))
        .stdout(predicate::str::contains("fqn@@").not())
        .stderr(predicate::str::contains("not.a::fqn@@"))
        .stderr(predicate::str::contains("matrix.xml"));
}

#[test]
fn test_generate_strict_fails_on_invalid_line() {
    let tmp = input_dir(&["android.hardware.a@1.0::IA", "vendor.foo.IFoo/a/b"]);

    fcm_gen()
        .args(["generate", "--strict"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 invalid instance name(s)"));
}

#[test]
fn test_generate_to_file_as_json() {
    let tmp = input_dir(EXAMPLE);
    let out = tmp.path().join("out.json");

    fcm_gen()
        .args(["generate", "--format", "json", "-o"])
        .arg(&out)
        .current_dir(tmp.path())
        .assert()
        .success();

    let json = fs::read_to_string(&out).unwrap();
    assert!(json.contains("\"android.hardware.foo\""));
    assert!(json.contains("\"minor\": \"2\""));
}

#[test]
fn test_generate_required_flag() {
    let tmp = input_dir(&["android.hardware.power.IPower"]);

    fcm_gen()
        .args(["generate", "--required"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<hal format=\"aidl\" optional=\"false\">",
        ));
}

#[test]
fn test_generate_reads_project_config() {
    let tmp = input_dir(&["android.hardware.power.IPower", "hardware/Android.bp"]);
    fs::create_dir(tmp.path().join(".fcm-gen")).unwrap();
    fs::write(
        tmp.path().join(".fcm-gen/config.toml"),
        "[filter]\nskip_extensions = [\".bp\"]\n\n[output]\noptional = false\n",
    )
    .unwrap();

    fcm_gen()
        .args(["generate"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("optional=\"false\""))
        .stderr(predicate::str::contains("skipping file name"));
}

#[test]
fn test_generate_missing_input_fails() {
    let tmp = TempDir::new().unwrap();

    fcm_gen()
        .args(["generate", "missing.txt"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read input file"));
}

#[test]
fn test_generate_invalid_format_fails() {
    let tmp = input_dir(EXAMPLE);

    fcm_gen()
        .args(["generate", "--format", "yaml"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid output format"));
}

#[test]
fn test_generate_conflicting_formats_aborts() {
    let tmp = input_dir(&[
        "android.hardware.foo@1.0::IFoo",
        "android.hardware.foo.IFoo",
    ]);

    fcm_gen()
        .args(["generate"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("conflicting HAL formats"));
}

// ============================================================================
// fcm-gen check
// ============================================================================

#[test]
fn test_check_clean_input() {
    let tmp = input_dir(EXAMPLE);

    fcm_gen()
        .args(["--no-color", "check"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "note: 1 entries, 0 skipped line(s), 0 invalid",
        ));
}

#[test]
fn test_check_reports_invalid_lines() {
    let tmp = input_dir(&["android.hardware.a@1.0::IA", "pkg@1::IFoo"]);

    fcm_gen()
        .args(["--no-color", "check"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("fqnames.txt:2"))
        .stderr(predicate::str::contains(
            "error: 1 entries, 1 skipped line(s), 1 invalid",
        ))
        .stderr(predicate::str::contains("invalid version `1`"));
}

// ============================================================================
// fcm-gen completions
// ============================================================================

#[test]
fn test_completions_bash() {
    fcm_gen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fcm-gen"));
}
