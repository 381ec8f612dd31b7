// End-to-end tests for the clox-warmup binary

use std::process::Command;

fn run() -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_clox-warmup"))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run binary")
}

#[test]
fn test_prints_greeting() {
    let output = run();

    assert!(output.status.success());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"hello, world\n");
    assert!(
        output.stderr.is_empty(),
        "unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_output_is_identical_across_runs() {
    let first = run();
    let second = run();

    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
}

#[test]
fn test_arguments_are_ignored() {
    let output = Command::new(env!("CARGO_BIN_EXE_clox-warmup"))
        .args(["--help", "file.c"])
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"hello, world\n");
}

#[test]
fn test_debug_logging_leaves_stdout_alone() {
    let output = Command::new(env!("CARGO_BIN_EXE_clox-warmup"))
        .env("RUST_LOG", "debug")
        .output()
        .expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"hello, world\n");
}
