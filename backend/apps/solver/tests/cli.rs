use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_solver(envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_solver"));
    cmd.env_remove("RUST_LOG");
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output().expect("failed to run solver")
}

fn run_check(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_check-ticket"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run check-ticket");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn prints_ticket_and_newline() {
    // 313331041 is the first accepted ticket at or above 100000000
    let output = run_solver(&[
        ("POW_RANGE_START", "313331000"),
        ("POW_RANGE_SIZE", "1"),
        ("POW_SCAN_WIDTH", "100"),
    ]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "313331041\n");
}

#[test]
fn exhausted_window_prints_nothing() {
    // The only candidate, 100000000, hashes to c732...
    let output = run_solver(&[
        ("POW_RANGE_START", "100000000"),
        ("POW_RANGE_SIZE", "1"),
        ("POW_SCAN_WIDTH", "1"),
        ("POW_SEED", "1"),
    ]);

    assert_eq!(output.status.code(), Some(solver::EXIT_NO_TICKET as i32));
    assert!(output.stdout.is_empty());
}

#[test]
fn invalid_override_fails_start_up() {
    let output = run_solver(&[("POW_SCAN_WIDTH", "lots")]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("POW_SCAN_WIDTH"));
}

#[test]
fn check_accepts_solved_ticket() {
    let output = run_check("313331041\n");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "00000006ccabbd0c7645704be2f64f5502931ef3063eaa2acc53698920155de6\n"
    );
}

#[test]
fn check_rejects_ticket_without_prefix() {
    let output = run_check("abcdefgh\n");

    assert_eq!(output.status.code(), Some(solver::EXIT_REJECTED as i32));
    assert!(output.stdout.is_empty());
}

#[test]
fn check_rejects_short_ticket() {
    let output = run_check("abc\n");
    assert_eq!(output.status.code(), Some(solver::EXIT_REJECTED as i32));
}
