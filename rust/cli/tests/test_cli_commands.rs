//! End-to-end tests for the `cfg` command and configuration precedence.
//!
//! These tests mutate process environment variables, so every test takes the
//! shared lock and restores the variables it touched before returning.

use azulejo_cli::run;

use serde_json::Value;
use std::io::Write as _;
use std::sync::{Mutex, OnceLock};

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn clear_config_env() {
    unsafe {
        std::env::remove_var("AZULEJO_CONFIG");
    }
    unsafe {
        std::env::remove_var("AZULEJO_SEED");
    }
    unsafe {
        std::env::remove_var("AZULEJO_ROUNDS");
    }
}

#[test]
fn help_lists_expected_commands() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let _code = run(["azulejo", "--help"], &mut out, &mut err);
    let stdout = String::from_utf8_lossy(&out);
    for cmd in ["play", "deal", "cfg"] {
        assert!(stdout.contains(cmd), "help should list subcommand `{}`", cmd);
    }
}

#[test]
fn cfg_shows_default_settings() {
    let _guard = env_lock().lock().unwrap();
    clear_config_env();

    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();

    let code = run(["azulejo", "cfg"], &mut out, &mut err);
    assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err));

    let json: Value = serde_json::from_slice(&out).unwrap();

    let rounds = &json["rounds"];
    assert_eq!(rounds["value"].as_u64(), Some(5));
    assert_eq!(rounds["source"].as_str(), Some("default"));

    let seed = &json["seed"];
    assert!(seed["value"].is_null());
    assert_eq!(seed["source"].as_str(), Some("default"));

    let p1 = &json["p1_name"];
    assert_eq!(p1["value"].as_str(), Some("Player 1"));
    assert_eq!(p1["source"].as_str(), Some("default"));

    let p2 = &json["p2_name"];
    assert_eq!(p2["value"].as_str(), Some("Player 2"));
    assert_eq!(p2["source"].as_str(), Some("default"));
}

#[test]
fn cfg_precedence_env_over_file_over_default() {
    let _guard = env_lock().lock().unwrap();
    clear_config_env();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("azulejo.toml");
    let mut f = std::fs::File::create(&cfg_path).unwrap();
    writeln!(f, "rounds = 3").unwrap();
    writeln!(f, "seed = 456").unwrap();
    writeln!(f, "p1_name = \"Ana\"").unwrap();
    drop(f);
    unsafe {
        std::env::set_var("AZULEJO_CONFIG", &cfg_path);
    }

    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["azulejo", "cfg"], &mut out, &mut err);
    assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err));

    let json1: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json1["rounds"]["value"].as_u64(), Some(3));
    assert_eq!(json1["rounds"]["source"].as_str(), Some("file"));
    assert_eq!(json1["seed"]["value"].as_u64(), Some(456));
    assert_eq!(json1["seed"]["source"].as_str(), Some("file"));
    assert_eq!(json1["p1_name"]["value"].as_str(), Some("Ana"));
    assert_eq!(json1["p1_name"]["source"].as_str(), Some("file"));
    assert_eq!(json1["p2_name"]["value"].as_str(), Some("Player 2"));
    assert_eq!(json1["p2_name"]["source"].as_str(), Some("default"));

    unsafe {
        std::env::set_var("AZULEJO_SEED", "123");
    }
    unsafe {
        std::env::set_var("AZULEJO_ROUNDS", "7");
    }

    let mut out2: Vec<u8> = Vec::new();
    let mut err2: Vec<u8> = Vec::new();
    let code2 = run(["azulejo", "cfg"], &mut out2, &mut err2);
    assert_eq!(code2, 0, "stderr: {}", String::from_utf8_lossy(&err2));

    let json2: Value = serde_json::from_slice(&out2).unwrap();
    assert_eq!(json2["seed"]["value"].as_u64(), Some(123));
    assert_eq!(json2["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json2["rounds"]["value"].as_u64(), Some(7));
    assert_eq!(json2["rounds"]["source"].as_str(), Some("env"));

    clear_config_env();
}

#[test]
fn cfg_invalid_rounds_in_file_returns_two() {
    let _guard = env_lock().lock().unwrap();
    clear_config_env();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("azulejo.toml");
    std::fs::write(&cfg_path, "rounds = 0\n").unwrap();
    unsafe {
        std::env::set_var("AZULEJO_CONFIG", &cfg_path);
    }

    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["azulejo", "cfg"], &mut out, &mut err);
    assert_eq!(code, 2, "rounds=0 in the config file should be rejected");

    let err_str = String::from_utf8_lossy(&err);
    assert!(
        err_str.contains("Invalid configuration"),
        "stderr should explain the rejection, got: {}",
        err_str
    );

    clear_config_env();
}

#[test]
fn cfg_invalid_env_seed_returns_two() {
    let _guard = env_lock().lock().unwrap();
    clear_config_env();

    unsafe {
        std::env::set_var("AZULEJO_SEED", "not-a-number");
    }

    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["azulejo", "cfg"], &mut out, &mut err);
    assert_eq!(code, 2, "unparsable AZULEJO_SEED should be rejected");

    clear_config_env();
}
