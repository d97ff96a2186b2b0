use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Path to the sample farm document shipped with the repository.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("cashflow.json")
}

/// CLI invocation pinned to 2025-08-14 with an isolated config directory.
pub fn cli_command(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cashflow_cli").expect("binary built");
    cmd.arg("--today")
        .arg("2025-08-14")
        .arg("--no-color")
        .arg("--config-dir")
        .arg(config_dir.path())
        .env_remove("RUST_LOG");
    cmd
}
