use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const AGENT_A: &str = r#"{"id":"A-1","name":"Test Agent","role":"Sales Manager","deals":3,"revenue":5000000,"conversion":12.5,"responseTime":"10m","commission":100000,"status":"Active"}"#;
const AGENT_B: &str = r#"{"id":"A-2","name":"Second Agent","role":"Senior Advisor","deals":1,"revenue":9000000,"conversion":8.0,"responseTime":"1h 5m","commission":180000,"status":"Inactive","avatar":"placeholder"}"#;

/// Runs the binary from an empty directory with config and data dirs pointed
/// at it, so no user config leaks into the test.
fn run_brokerdash(args: &[&str]) -> Output {
    let home = TempDir::new().unwrap();
    run_brokerdash_in(home.path(), args)
}

fn run_brokerdash_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_brokerdash"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env("XDG_DATA_HOME", dir.join("data"))
        .env_remove("BROKERDASH_DATASET")
        .env_remove("BROKERDASH_LOG_LEVEL")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute brokerdash command")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn json_of(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}

fn write_dataset(dir: &Path, name: &str, agents: &[&str]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!(r#"{{"agents":[{}]}}"#, agents.join(","))).unwrap();
    path
}

mod version_command_tests {
    use super::*;

    #[test]
    fn test_version_command_basic() {
        let output = run_brokerdash(&["version"]);
        assert!(output.status.success());
        assert_eq!(
            stdout_of(&output).trim(),
            format!("brokerdash {}", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn test_version_command_detailed() {
        let output = run_brokerdash(&["version", "--detailed"]);
        let stdout = stdout_of(&output);
        assert!(output.status.success());
        assert!(stdout.contains("Version"));
        assert!(stdout.contains("Apache-2.0"));
    }
}

mod roster_command_tests {
    use super::*;

    #[test]
    fn test_roster_json_keeps_sample_order() {
        let output = run_brokerdash(&["roster", "--format", "json"]);
        assert!(output.status.success(), "stderr: {}", stderr_of(&output));

        let rows = json_of(&output);
        let ids: Vec<&str> = rows
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap())
            .collect();
        assert_eq!(
            ids,
            vec!["AG-1001", "AG-1002", "AG-1003", "AG-1004", "AG-1005", "AG-1006"]
        );
        assert_eq!(rows[0]["response_time"], "8m");
    }

    #[test]
    fn test_roster_text_lists_agents() {
        let output = run_brokerdash(&["roster"]);
        let stdout = stdout_of(&output);
        assert!(output.status.success());
        assert!(stdout.contains("Agents (6)"));
        assert!(stdout.contains("Layla Haddad"));
    }

    #[test]
    fn test_roster_from_dataset_file() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(dir.path(), "brokerage.json", &[AGENT_A, AGENT_B]);

        let output = run_brokerdash_in(
            dir.path(),
            &["roster", "--format", "json", "--dataset", path.to_str().unwrap()],
        );
        assert!(output.status.success(), "stderr: {}", stderr_of(&output));
        let rows = json_of(&output);
        assert_eq!(rows.as_array().unwrap().len(), 2);
        assert_eq!(rows[1]["response_time"], "1h 5m");
    }

    #[test]
    fn test_empty_roster_renders_zero_state() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(dir.path(), "empty.json", &[]);
        let dataset = path.to_str().unwrap();

        let output = run_brokerdash_in(dir.path(), &["roster", "--dataset", dataset]);
        assert!(output.status.success());
        assert!(stdout_of(&output).contains("No agents in this dataset."));

        let output = run_brokerdash_in(
            dir.path(),
            &["summary", "--format", "json", "--dataset", dataset],
        );
        let summary = json_of(&output);
        assert_eq!(summary["summary"]["total_agents"], 0);
        assert!(summary["summary"]["average_conversion"].is_null());
        assert_eq!(summary["revenue_by_agent"].as_array().unwrap().len(), 0);
    }
}

mod summary_command_tests {
    use super::*;

    #[test]
    fn test_summary_json() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(dir.path(), "brokerage.json", &[AGENT_A, AGENT_B]);

        let output = run_brokerdash_in(
            dir.path(),
            &["summary", "--format", "json", "--dataset", path.to_str().unwrap()],
        );
        assert!(output.status.success(), "stderr: {}", stderr_of(&output));

        let value = json_of(&output);
        assert_eq!(value["summary"]["active_agents"], 1);
        assert_eq!(value["summary"]["total_agents"], 2);
        assert_eq!(value["summary"]["total_revenue"], 14_000_000);
        assert_eq!(value["revenue_by_agent"][0]["revenue_millions"], 5.0);
        assert_eq!(value["revenue_by_agent"][1]["revenue_millions"], 9.0);
    }

    #[test]
    fn test_summary_text() {
        let output = run_brokerdash(&["summary"]);
        let stdout = stdout_of(&output);
        assert!(output.status.success());
        assert!(stdout.contains("Roster Summary"));
        assert!(stdout.contains("Revenue by Agent"));
    }
}

mod agent_command_tests {
    use super::*;

    #[test]
    fn test_agent_detail_json() {
        let output = run_brokerdash(&["agent", "AG-1002", "--format", "json"]);
        assert!(output.status.success(), "stderr: {}", stderr_of(&output));

        let detail = json_of(&output);
        assert_eq!(detail["id"], "AG-1002");
        assert_eq!(detail["name"], "Omar Siddiqui");
        assert_eq!(detail["roster_size"], 6);
        assert!(detail["rank"].is_u64());
    }

    #[test]
    fn test_agent_without_activity() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(dir.path(), "brokerage.json", &[AGENT_A, AGENT_B]);

        let output = run_brokerdash_in(
            dir.path(),
            &["agent", "A-1", "--dataset", path.to_str().unwrap()],
        );
        let stdout = stdout_of(&output);
        assert!(output.status.success(), "stderr: {}", stderr_of(&output));
        assert!(stdout.contains("Test Agent"));
        assert!(stdout.contains("#2 of 2"));
        assert!(stdout.contains("No monthly history"));
        assert!(stdout.contains("No assigned leads"));
    }

    #[test]
    fn test_unknown_agent_fails() {
        let output = run_brokerdash(&["agent", "AG-9999"]);
        assert_eq!(output.status.code(), Some(1));

        let stderr = stderr_of(&output);
        assert!(stderr.contains("Error"));
        assert!(stderr.contains("E3001"));
        assert!(stderr.contains("brokerdash roster"));
    }
}

mod analytics_command_tests {
    use super::*;

    #[test]
    fn test_analytics_json() {
        let output = run_brokerdash(&["analytics", "--format", "json"]);
        assert!(output.status.success(), "stderr: {}", stderr_of(&output));

        let value = json_of(&output);
        assert!(value["summary"]["total_visits"].as_u64().unwrap() > 0);
        assert!(!value["traffic"].as_array().unwrap().is_empty());
        assert!(value["funnel"][0]["step_conversion"].is_null());
    }

    #[test]
    fn test_analytics_without_section() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(dir.path(), "brokerage.json", &[AGENT_A]);

        let output = run_brokerdash_in(
            dir.path(),
            &["analytics", "--dataset", path.to_str().unwrap()],
        );
        let stdout = stdout_of(&output);
        assert!(output.status.success());
        assert!(stdout.contains("Executive Analytics"));
        assert!(stdout.contains("No analytics data in this dataset."));
    }
}

mod validate_command_tests {
    use super::*;

    #[test]
    fn test_validate_good_file() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(dir.path(), "brokerage.json", &[AGENT_A, AGENT_B]);

        let output = run_brokerdash_in(
            dir.path(),
            &["validate", path.to_str().unwrap(), "--format", "json"],
        );
        assert!(output.status.success(), "stderr: {}", stderr_of(&output));
        let value = json_of(&output);
        assert_eq!(value["valid"], true);
        assert_eq!(value["agents"], 2);
        assert_eq!(value["has_analytics"], false);
    }

    #[test]
    fn test_validate_duplicate_ids() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(dir.path(), "brokerage.json", &[AGENT_A, AGENT_A]);

        let output = run_brokerdash_in(dir.path(), &["validate", path.to_str().unwrap()]);
        assert_eq!(output.status.code(), Some(1));
        assert!(stderr_of(&output).contains("E1004"));
    }

    #[test]
    fn test_validate_unsupported_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("brokerage.csv");
        fs::write(&path, "id,name").unwrap();

        let output = run_brokerdash_in(dir.path(), &["validate", path.to_str().unwrap()]);
        assert_eq!(output.status.code(), Some(1));
        assert!(stderr_of(&output).contains("E1002"));
    }

    #[test]
    fn test_validate_missing_file() {
        let output = run_brokerdash(&["validate", "/nonexistent/brokerage.json"]);
        assert_eq!(output.status.code(), Some(1));
        assert!(stderr_of(&output).contains("E1001"));
    }
}
