use anyhow::{Context, Result};
use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Scratch working directory so `./golfdata.yaml` and `data/` never leak between tests.
struct GolfdataTestEnv {
    tmp: TempDir,
}

impl GolfdataTestEnv {
    fn new() -> Result<Self> {
        Ok(Self {
            tmp: tempfile::tempdir()?,
        })
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.tmp.path().join(rel)
    }

    fn golfdata(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("golfdata"));
        cmd.current_dir(self.tmp.path());
        for key in [
            "GOLFDATA_CONFIG",
            "GOLFDATA_TIMEOUT_SECS",
            "GOLFDATA_BANESTATUS_URL",
            "GOLFDATA_BANESTATUS_OUTPUT",
            "GOLFDATA_GOLFKLUBBER_URL",
            "GOLFDATA_GOLFKLUBBER_OUTPUT",
            "RUST_LOG",
        ] {
            cmd.env_remove(key);
        }
        cmd
    }
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_banestatus_from_fixture() -> Result<()> {
    let env = GolfdataTestEnv::new()?;

    env.golfdata()
        .args(["banestatus", "-o", "data/banestatus.json", "--input"])
        .arg(fixture("banestatus.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Wrote data/banestatus.json with 3 rows.",
        ));

    let content = fs::read_to_string(env.path("data/banestatus.json"))?;
    let snapshot: Value = serde_json::from_str(&content)?;
    let keys: Vec<&String> = snapshot
        .as_object()
        .context("snapshot is not an object")?
        .keys()
        .collect();
    assert_eq!(keys, vec!["source", "fetched", "items"]);
    assert!(snapshot["source"]
        .as_str()
        .context("source missing")?
        .starts_with("file://"));

    let items = snapshot["items"].as_array().context("items missing")?;
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["name"], "Oslo Golfklubb");
    assert_eq!(items[0]["status"], "Åpen");
    assert_eq!(items[1]["name"], "Bogstad & Omegn");
    assert_eq!(items[1]["status"], "Stengt");
    assert_eq!(items[2]["updated"], "28.04.2024");
    Ok(())
}

#[test]
fn test_banestatus_without_rows_fails() -> Result<()> {
    let env = GolfdataTestEnv::new()?;

    env.golfdata()
        .args(["banestatus", "--input"])
        .arg(fixture("empty.html"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No banestatus rows found."));

    assert!(!env.path("data/banestatus.json").exists());
    Ok(())
}

#[test]
fn test_banestatus_missing_input_is_fetch_failure() -> Result<()> {
    let env = GolfdataTestEnv::new()?;

    env.golfdata()
        .args(["banestatus", "--input", "nowhere.html"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to fetch banestatus:"));
    Ok(())
}

#[test]
fn test_golfklubber_passthrough() -> Result<()> {
    let env = GolfdataTestEnv::new()?;

    env.golfdata()
        .args(["golfklubber", "--input"])
        .arg(fixture("golfklubber.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Wrote data/golfklubber.json with 3 entries.",
        ));

    let written: Value = serde_json::from_str(&fs::read_to_string(
        env.path("data/golfklubber.json"),
    )?)?;
    let upstream: Value = serde_json::from_str(&fs::read_to_string(fixture("golfklubber.json"))?)?;
    assert_eq!(written["data"], upstream["data"]);
    assert_eq!(written["updated"], upstream["updated"]);

    let keys: Vec<&String> = written
        .as_object()
        .context("snapshot is not an object")?
        .keys()
        .collect();
    assert_eq!(keys, vec!["updated", "data", "source", "fetched"]);
    Ok(())
}

#[test]
fn test_golfklubber_shape_error_keeps_previous_file() -> Result<()> {
    let env = GolfdataTestEnv::new()?;
    fs::create_dir_all(env.path("data"))?;
    fs::write(env.path("data/golfklubber.json"), "{\"data\": []}\n")?;

    env.golfdata()
        .args(["golfklubber", "--input"])
        .arg(fixture("no_data.json"))
        .assert()
        .failure()
        .code(1)
        .stderr("Unexpected NGF payload shape.\n");

    assert_eq!(
        fs::read_to_string(env.path("data/golfklubber.json"))?,
        "{\"data\": []}\n"
    );
    Ok(())
}

#[test]
fn test_config_file_sets_output() -> Result<()> {
    let env = GolfdataTestEnv::new()?;
    fs::write(
        env.path("golfdata.yaml"),
        "golfklubber:\n  output: snapshots/ngf.json\n",
    )?;

    env.golfdata()
        .args(["golfklubber", "--input"])
        .arg(fixture("golfklubber.json"))
        .assert()
        .success();

    assert!(env.path("snapshots/ngf.json").is_file());
    assert!(!env.path("data/golfklubber.json").exists());
    Ok(())
}

#[test]
fn test_invalid_config_is_reported() -> Result<()> {
    let env = GolfdataTestEnv::new()?;
    fs::write(env.path("golfdata.yaml"), "timeout-secs: 0\n")?;

    env.golfdata()
        .args(["banestatus", "--input"])
        .arg(fixture("banestatus.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error:"));

    assert!(!env.path("data/banestatus.json").exists());
    Ok(())
}

#[test]
fn test_all_reports_both_failures() -> Result<()> {
    let env = GolfdataTestEnv::new()?;
    fs::write(
        env.path("golfdata.yaml"),
        "timeout-secs: 2\n\
         banestatus:\n  url: http://127.0.0.1:1/status\n\
         golfklubber:\n  url: http://127.0.0.1:1/ngf.json\n",
    )?;

    env.golfdata()
        .arg("all")
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("Failed to fetch banestatus:")
                .and(predicate::str::contains("Failed to fetch NGF list:")),
        );

    assert!(!env.path("data").exists());
    Ok(())
}
