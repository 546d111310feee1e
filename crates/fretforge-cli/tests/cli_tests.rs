use assert_cmd::Command;
use std::io::Write;

fn fretforge() -> Command {
    Command::cargo_bin("fretforge").expect("binary builds")
}

#[test]
fn test_solve_inline_progression_prints_open_c() {
    let assert = fretforge()
        .args(["solve", "--progression", "C3,E3,G3,C4,E4"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(
        stdout.contains("x-3-2-0-1-0"),
        "expected open C voicing in output:\n{stdout}"
    );
    assert!(stdout.contains("Best path"));
}

#[test]
fn test_solve_json_output_is_parseable() {
    let assert = fretforge()
        .args([
            "solve",
            "--progression",
            "C3,E3,G3,C4,E4 G3,B3,D4,G4",
            "--json",
            "--k",
            "3",
        ])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let paths = value["paths"].as_array().expect("paths array");
    assert!(!paths.is_empty());
    assert!(paths.len() <= 3);
}

#[test]
fn test_solve_steps_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[["C3","E3","G3","C4","E4"],["G3","B3","D4","G4"]]"#).unwrap();
    fretforge()
        .args(["solve", "--steps", file.path().to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn test_solve_rejects_bad_pitch() {
    fretforge()
        .args(["solve", "--progression", "C4,X9"])
        .assert()
        .failure();
}

#[test]
fn test_solve_unrealizable_step_fails() {
    // C2 sits below a standard guitar's range.
    fretforge()
        .args(["solve", "--progression", "C4,E4,G4 C2"])
        .assert()
        .failure();
}

#[test]
fn test_enumerate_lists_candidates() {
    let assert = fretforge()
        .args(["enumerate", "--pitches", "C4,E4,G4"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("candidates"), "output:\n{stdout}");
    assert!(stdout.contains("Difficulty"));
}

#[test]
fn test_enumerate_json() {
    let assert = fretforge()
        .args(["enumerate", "--pitches", "E2", "--json"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert!(!value.as_array().expect("array").is_empty());
}

#[test]
fn test_missing_input_fails() {
    fretforge().arg("solve").assert().failure();
}
