//! Shared integration-test harness: temporary content directories and a
//! helper for running the `starsite` binary against them.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Builds a narrative file with the required fields and the given tags.
#[must_use]
pub fn narrative(title: &str, tags: &[&str], published: bool) -> String {
    let tags = tags
        .iter()
        .map(|t| format!("\"{t}\""))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "---\n\
         title: {title}\n\
         tags: [{tags}]\n\
         situation: The situation\n\
         task: The task\n\
         action: The action\n\
         result: The result\n\
         short_summary_result: In short\n\
         published: {published}\n\
         date: 2024-03-01\n\
         ---\n\
         Body text that the catalog ignores.\n"
    )
}

/// A temporary content directory that is removed on drop.
pub struct ContentDir {
    dir: TempDir,
}

impl ContentDir {
    /// Creates an empty content directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    /// Writes `contents` to `name` inside the directory.
    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> &Self {
        std::fs::write(self.dir.path().join(name), contents).expect("failed to write fixture");
        self
    }

    /// Path of the directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The two-record directory used by the listing/detail scenario:
    /// `alpha` (published, tags x, y) and `beta` (draft, tags y, z).
    #[must_use]
    pub fn scenario_a() -> Self {
        let dir = Self::new();
        dir.write("alpha.md", narrative("Alpha", &["x", "y"], true));
        dir.write("beta.md", narrative("Beta", &["y", "z"], false));
        dir
    }
}

/// Runs the `starsite` binary and harnesses its output.
pub struct StarsiteProcess;

impl StarsiteProcess {
    /// Runs `starsite` with `args`, isolated from `STARSITE_*` variables.
    #[must_use]
    pub fn spawn_command(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_starsite"))
            .args(args)
            .env_remove("STARSITE_CONTENT_DIR")
            .env_remove("STARSITE_EXTENSION")
            .env_remove("STARSITE_LOG_LEVEL")
            .env("NO_COLOR", "1")
            .output()
            .expect("failed to run starsite")
    }

    /// Runs `starsite` against a content directory.
    #[must_use]
    pub fn run_in(content: &Path, args: &[&str]) -> Output {
        let content = content.to_str().expect("non-UTF-8 temp path");
        let mut full: Vec<&str> = vec!["--content", content];
        full.extend_from_slice(args);
        Self::spawn_command(&full)
    }

    /// Returns the path to a test fixture.
    #[must_use]
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }
}
