use crate::{Captured, lock_env};
use osmium::control_state::ControlFlow;
use osmium::input::tokenizer::parse_tokens;
use osmium::process::launch::{ChildStatus, Launcher, spawn_and_wait};
use std::env;
use std::time::{Duration, Instant};

#[test]
fn missing_program_reports_and_continues() {
    let captured = Captured::new();
    let tokens = parse_tokens("not-a-real-program-xyz arg").unwrap();

    assert_eq!(
        Launcher::default().launch(&tokens, &captured.io),
        ControlFlow::CONTINUE
    );
    assert_eq!(
        captured.err(),
        "osmium: command not found: not-a-real-program-xyz\n"
    );
}

#[cfg(unix)]
#[test]
fn non_executable_file_reports_os_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let script = temp_dir.path().join("not-executable");
    std::fs::write(&script, b"#!/bin/sh\nexit 0\n").unwrap();
    let captured = Captured::new();

    let line = script.display().to_string();
    let tokens = parse_tokens(&line).unwrap();
    assert_eq!(
        Launcher::default().launch(&tokens, &captured.io),
        ControlFlow::CONTINUE
    );
    let err = captured.err();
    assert!(err.starts_with(&format!("osmium: {line}: ")), "{err}");
}

#[test]
fn successful_program_exits_zero() {
    let tokens = parse_tokens("true").unwrap();
    assert_eq!(spawn_and_wait(&tokens).unwrap(), ChildStatus::Exited(0));
}

#[test]
fn failing_program_still_continues() {
    let captured = Captured::new();
    let tokens = parse_tokens("false").unwrap();

    assert_eq!(spawn_and_wait(&tokens).unwrap(), ChildStatus::Exited(1));
    assert_eq!(
        Launcher::default().launch(&tokens, &captured.io),
        ControlFlow::CONTINUE
    );
    assert!(captured.err().is_empty());
}

#[test]
fn launch_blocks_until_child_exits() {
    let captured = Captured::new();
    let tokens = parse_tokens("sleep 0.2").unwrap();

    let started = Instant::now();
    assert_eq!(
        Launcher::default().launch(&tokens, &captured.io),
        ControlFlow::CONTINUE
    );
    assert!(started.elapsed() >= Duration::from_millis(150));
}

#[test]
fn child_directory_change_does_not_leak() {
    let _guard = lock_env();
    let before = env::current_dir().unwrap();
    let tokens = parse_tokens("sh -c cd").unwrap();

    spawn_and_wait(&tokens).unwrap();
    assert_eq!(env::current_dir().unwrap(), before);
}

#[cfg(unix)]
#[test]
fn child_killed_by_signal_is_reported_and_continues() {
    let temp_dir = tempfile::tempdir().unwrap();
    let script = temp_dir.path().join("self-kill.sh");
    std::fs::write(&script, b"kill -9 $$\n").unwrap();
    let line = format!("sh {}", script.display());
    let tokens = parse_tokens(&line).unwrap();

    assert_eq!(spawn_and_wait(&tokens).unwrap(), ChildStatus::Signaled(9));

    let captured = Captured::new();
    assert_eq!(
        Launcher::new(true).launch(&tokens, &captured.io),
        ControlFlow::CONTINUE
    );
    assert_eq!(captured.err(), "osmium: sh: terminated by signal 9\n");
}
