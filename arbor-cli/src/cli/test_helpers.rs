//! Small helpers shared across CLI tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::{AlgorithmSelection, Cli, CliError, Command, RunCommand, run_cli};

/// Four vertices, five edges; both algorithms find a tree of weight 19.
pub(super) const REFERENCE_SUITE: &str = r#"{
  "graphs": [
    {
      "id": 1,
      "vertices": 4,
      "edges": [
        { "from": 0, "to": 1, "weight": 10 },
        { "from": 0, "to": 2, "weight": 6 },
        { "from": 0, "to": 3, "weight": 5 },
        { "from": 1, "to": 3, "weight": 15 },
        { "from": 2, "to": 3, "weight": 4 }
      ]
    },
    {
      "id": 2,
      "vertices": 2,
      "edges": [{ "from": 0, "to": 1, "weight": 7 }]
    }
  ]
}"#;

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_text_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn run_command(input: PathBuf) -> RunCommand {
    RunCommand {
        input,
        output: None,
        csv_dir: None,
        algorithm: AlgorithmSelection::Both,
        report: false,
    }
}

pub(super) fn run_cli_expecting_error(command: RunCommand, panic_msg: &str) -> CliError {
    match run_cli(Cli {
        command: Command::Run(command),
    }) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
