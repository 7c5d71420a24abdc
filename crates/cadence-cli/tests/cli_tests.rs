use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to create a Command with --no-color for stable assertions
fn cadence_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cadence").expect("Failed to find cadence binary");
    cmd.arg("--no-color");
    cmd
}

/// The Acme Co example brief as inline flags, anchored to a fixed Monday
fn acme_args() -> Vec<&'static str> {
    vec![
        "generate",
        "--brand-name",
        "Acme Co",
        "--description",
        "We help small businesses grow with simple software.",
        "--audience",
        "small business owners",
        "--tone",
        "friendly",
        "--platforms",
        "twitter,linkedin",
        "--goals",
        "awareness,engagement",
        "--weeks",
        "1",
        "--cadence",
        "2",
        "--start",
        "2025-01-06T00:00:00Z",
    ]
}

#[test]
fn test_generate_markdown_calendar() {
    cadence_cmd()
        .args(acme_args())
        .assert()
        .success()
        .stdout(predicate::str::contains("Content plan for Acme Co"))
        .stdout(predicate::str::contains("small business owners"))
        .stdout(predicate::str::contains("## Week 1"))
        .stdout(predicate::str::contains("### TWITTER"))
        .stdout(predicate::str::contains("### LINKEDIN"))
        .stdout(predicate::str::contains("CTA:"));
}

#[test]
fn test_generate_json_uses_wire_contract() {
    cadence_cmd()
        .args(acme_args())
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"summary\""))
        .stdout(predicate::str::contains("\"scheduledAt\""))
        .stdout(predicate::str::contains("\"suggestedAsset\""))
        .stdout(predicate::str::contains("\"platform\": \"twitter\""));
}

#[test]
fn test_generate_csv_has_header_and_four_rows() {
    let output = cadence_cmd()
        .args(acme_args())
        .args(["--format", "csv"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5); // header + 2 platforms * 1 week * cadence 2
    assert_eq!(
        lines[0],
        "platform,scheduledAt,title,caption,hashtags,cta,goal,suggestedAsset"
    );
    assert!(lines[1].starts_with("twitter,2025-01-06T09:00:00Z"));
}

#[test]
fn test_generate_is_reproducible() {
    let run = || {
        let out = cadence_cmd()
            .args(acme_args())
            .args(["--seed", "7", "--format", "json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_unknown_platform_is_a_correction_request() {
    cadence_cmd()
        .args([
            "generate",
            "--brand-name",
            "Acme Co",
            "--description",
            "Simple software.",
            "--audience",
            "small business owners",
            "--platforms",
            "myspace",
            "--goals",
            "awareness",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("myspace"))
        .stderr(predicate::str::contains("twitter"));
}

#[test]
fn test_missing_brand_name_rejected() {
    cadence_cmd()
        .args([
            "generate",
            "--description",
            "Simple software.",
            "--audience",
            "small business owners",
            "--platforms",
            "twitter",
            "--goals",
            "awareness",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("brandName"));
}

#[test]
fn test_weeks_out_of_range_rejected() {
    cadence_cmd()
        .args(acme_args())
        .args(["--weeks", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_invalid_start_timestamp_rejected() {
    cadence_cmd()
        .args(acme_args())
        .args(["--start", "next tuesday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --start"));
}

#[test]
fn test_brief_file_input() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let brief_path = temp_dir.path().join("brief.json");
    fs::write(
        &brief_path,
        r#"{
            "brandName": "Acme Co",
            "brandDescription": "We help small businesses grow.",
            "audience": "small business owners",
            "tone": "bold",
            "goals": ["sales"],
            "platforms": ["tiktok"],
            "weeks": 1,
            "cadencePerWeek": 1
        }"#,
    )
    .unwrap();

    cadence_cmd()
        .args(["generate", "--brief", brief_path.to_str().unwrap()])
        .args(["--start", "2025-01-06T00:00:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### TIKTOK"))
        .stdout(predicate::str::contains("Asset: short video"));
}

#[test]
fn test_inline_flags_override_brief_file() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let brief_path = temp_dir.path().join("brief.json");
    fs::write(
        &brief_path,
        r#"{
            "brandName": "Acme Co",
            "brandDescription": "We help small businesses grow.",
            "audience": "small business owners",
            "goals": ["awareness"],
            "platforms": ["twitter"]
        }"#,
    )
    .unwrap();

    cadence_cmd()
        .args(["generate", "--brief", brief_path.to_str().unwrap()])
        .args(["--platforms", "linkedin", "--weeks", "1", "--cadence", "1"])
        .args(["--start", "2025-01-06T00:00:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### LINKEDIN"))
        .stdout(predicate::str::contains("### TWITTER").not());
}

#[test]
fn test_filter_narrows_calendar() {
    cadence_cmd()
        .args(acme_args())
        .args(["--filter", "linkedin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### LINKEDIN"))
        .stdout(predicate::str::contains("### TWITTER").not());
}

#[test]
fn test_out_writes_file() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let out_path = temp_dir.path().join("plan.csv");

    cadence_cmd()
        .args(acme_args())
        .args(["--format", "csv", "--out", out_path.to_str().unwrap()])
        .assert()
        .success();

    let written = fs::read_to_string(&out_path).unwrap();
    assert!(written.starts_with("platform,scheduledAt"));
    assert_eq!(written.lines().count(), 5);
}

#[test]
fn test_listing_commands() {
    cadence_cmd()
        .arg("platforms")
        .assert()
        .success()
        .stdout(predicate::str::contains("twitter"))
        .stdout(predicate::str::contains("tiktok"));

    cadence_cmd()
        .arg("goals")
        .assert()
        .success()
        .stdout(predicate::str::contains("awareness"))
        .stdout(predicate::str::contains("sales"));

    cadence_cmd()
        .arg("tones")
        .assert()
        .success()
        .stdout(predicate::str::contains("friendly"))
        .stdout(predicate::str::contains("bold"));
}

#[test]
fn test_generate_alias() {
    let mut args = acme_args();
    args[0] = "g";
    cadence_cmd()
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("Content plan for Acme Co"));
}
