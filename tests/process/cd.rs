use crate::{Captured, DirGuard, assert_paths_equal, lock_env};
use osmium::control_state::ControlFlow;
use osmium::input::tokenizer::parse_tokens;
use osmium::process::builtin::Builtin;
use osmium::process::cd::Cd;
use std::env;
use std::fs;

fn run_cd(line: &str, captured: &Captured) -> ControlFlow {
    let tokens = parse_tokens(line).unwrap();
    Cd::new().call(&tokens, &captured.io)
}

#[test]
fn cd_without_operand_reports_usage() {
    let _guard = lock_env();
    let before = env::current_dir().unwrap();
    let captured = Captured::new();

    assert_eq!(run_cd("cd", &captured), ControlFlow::CONTINUE);
    assert_eq!(env::current_dir().unwrap(), before);
    assert_eq!(captured.err(), "cd: expected argument to \"cd\"\n");
    assert!(captured.out().is_empty());
}

#[test]
fn cd_to_missing_directory_reports_os_error() {
    let _guard = lock_env();
    let before = env::current_dir().unwrap();
    let captured = Captured::new();

    assert_eq!(run_cd("cd /nonexistent-path", &captured), ControlFlow::CONTINUE);
    assert_eq!(env::current_dir().unwrap(), before);
    let err = captured.err();
    assert!(err.starts_with("cd: /nonexistent-path: "), "{err}");
    assert!(err.contains("No such file or directory"), "{err}");
}

#[test]
fn cd_to_regular_file_fails() {
    let _guard = lock_env();
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("plain");
    fs::write(&file, b"data").unwrap();
    let before = env::current_dir().unwrap();
    let captured = Captured::new();

    let line = format!("cd {}", file.display());
    assert_eq!(run_cd(&line, &captured), ControlFlow::CONTINUE);
    assert_eq!(env::current_dir().unwrap(), before);
    assert!(captured.err().starts_with("cd: "));
}

#[test]
fn cd_with_extra_operands_is_rejected() {
    let _guard = lock_env();
    let before = env::current_dir().unwrap();
    let captured = Captured::new();

    assert_eq!(run_cd("cd /tmp /", &captured), ControlFlow::CONTINUE);
    assert_eq!(env::current_dir().unwrap(), before);
    assert_eq!(captured.err(), "cd: too many arguments\n");
}

#[test]
fn cd_changes_working_directory() {
    let _guard = lock_env();
    let _dir = DirGuard::new();
    let temp_dir = tempfile::tempdir().unwrap();
    let target = temp_dir.path().join("nested");
    fs::create_dir_all(&target).unwrap();
    let captured = Captured::new();

    let line = format!("cd {}", target.display());
    assert_eq!(run_cd(&line, &captured), ControlFlow::CONTINUE);
    assert_paths_equal(&env::current_dir().unwrap(), &target);
    assert!(captured.err().is_empty());
}
