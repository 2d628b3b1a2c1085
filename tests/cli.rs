use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Runs a session against a config path inside `temp`, so the user's real
/// config never leaks into the test.
fn studyspace(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("studyspace").unwrap();
    cmd.env_remove("STUDYSPACE_LOG")
        .arg("--config")
        .arg(temp.path().join("config.json"));
    cmd
}

fn last_json(stdout: &[u8]) -> Value {
    let text = String::from_utf8_lossy(stdout);
    serde_json::Deserializer::from_str(&text)
        .into_iter::<Value>()
        .filter_map(|v| v.ok())
        .last()
        .unwrap()
}

#[test]
fn test_dashboard_overview() {
    let temp = TempDir::new().unwrap();
    studyspace(&temp)
        .write_stdin("show\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard"))
        .stdout(predicate::str::contains("Total Notes"))
        .stdout(predicate::str::contains("Recent Activity"))
        .stdout(predicate::str::contains("Quantum Mechanics Basics"));
}

#[test]
fn test_create_note_flow() {
    let temp = TempDir::new().unwrap();
    let session = "\
go notes
new
set title Thermodynamics
set content Entropy never decreases
set tags physics, heat
save
search thermo
";
    studyspace(&temp)
        .write_stdin(session)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created note: Thermodynamics"))
        .stdout(predicate::str::contains("search: thermo"));
}

#[test]
fn test_rejected_draft_stays_open() {
    let temp = TempDir::new().unwrap();
    studyspace(&temp)
        .write_stdin("go notes\nnew\nset content No title here\nsave\nshow\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cannot submit: title is required"))
        .stdout(predicate::str::contains("New note"));
}

#[test]
fn test_json_filter_by_type() {
    let temp = TempDir::new().unwrap();
    let output = studyspace(&temp)
        .arg("--json")
        .write_stdin("go documents\nfilter exam\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let view = last_json(&output.stdout);
    assert_eq!(view["section"], "documents");
    assert_eq!(view["category_selector"], "exam");
    let records = view["visible_records"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["title"], "Midterm Exam Guide.pdf");
}

#[test]
fn test_remove_by_position() {
    let temp = TempDir::new().unwrap();
    let output = studyspace(&temp)
        .arg("--json")
        .write_stdin("go notes\nsearch calc\nrm 1\nsearch\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Deleted note: Calculus Integration"));

    let view = last_json(&output.stdout);
    let titles: Vec<&str> = view["visible_records"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r["title"].as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["Quantum Mechanics Basics", "Organic Chemistry Reactions"]
    );
}

#[test]
fn test_bad_lines_do_not_end_the_session() {
    let temp = TempDir::new().unwrap();
    studyspace(&temp)
        .write_stdin("fly away\nnew\nrm 9\ngo notes\nrm 9\nstats\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown command: fly"))
        .stderr(predicate::str::contains("The dashboard section has no collection"))
        .stderr(predicate::str::contains("No record at position 9"))
        .stdout(predicate::str::contains("Tags"));
}

#[test]
fn test_quit_stops_reading() {
    let temp = TempDir::new().unwrap();
    studyspace(&temp)
        .write_stdin("quit\ngo notes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Notes").not());
}

#[test]
fn test_document_stats() {
    let temp = TempDir::new().unwrap();
    studyspace(&temp)
        .write_stdin("go pdfs\nstats\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("12.5 MB"))
        .stdout(predicate::str::contains("Lecturers"));
}

#[test]
fn test_no_samples() {
    let temp = TempDir::new().unwrap();
    studyspace(&temp)
        .arg("--no-samples")
        .write_stdin("show\ngo materials\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No activity yet."))
        .stdout(predicate::str::contains("No materials found."));
}

#[test]
fn test_config_file_is_honoured() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.json"),
        r#"{ "initial_section": "materials", "default_category": "Misc" }"#,
    )
    .unwrap();

    let output = studyspace(&temp)
        .arg("--json")
        .write_stdin("new\nset title Feynman Lectures\nsave\nshow\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let view = last_json(&output.stdout);
    assert_eq!(view["section"], "materials");
    assert_eq!(view["visible_records"][0]["title"], "Feynman Lectures");
    assert_eq!(view["visible_records"][0]["category"], "Misc");
    assert_eq!(view["visible_records"][0]["type"], "link");
}

#[test]
fn test_malformed_config_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.json"), "{ nope").unwrap();

    studyspace(&temp)
        .write_stdin("show\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Serialization error"));
}
