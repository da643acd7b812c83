use std::io::Write;
use std::process::{Command, Stdio};

#[test]
fn auto_prints_three_rounds_and_verdict() {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "rps-referee", "--", "auto", "--seed", "1"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run rps-referee binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.contains("AI Game Referee — Rock-Paper-Scissors-Plus"));
    for n in 1..=3 {
        assert!(stdout.contains(&format!("Round {}:", n)), "missing round {}", n);
    }
    assert!(!stdout.contains("Round 4:"));
    assert!(stdout.contains("Game over — final result:"));
    assert!(!stdout.contains("[INFO]"));
}

#[test]
fn play_reports_spent_bomb_reason() {
    let mut child = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "rps-referee", "--", "play", "--seed", "1"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to run rps-referee binary");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"bomb\nbomb\nzz\n")
        .expect("write moves");
    let output = child.wait_with_output().expect("wait");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.contains("Note: Bomb already used in this game. This wastes the round."));
    assert!(stdout
        .contains("Note: Invalid move. Valid: rock, paper, scissors, bomb. This wastes the round."));
    assert!(stdout.contains("Game over — final result:"));
}
