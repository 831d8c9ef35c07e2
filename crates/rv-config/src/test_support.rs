//! Scratch directory trees for rv-config unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A config that sets one value and does not stop discovery.
pub const PLAIN_CONFIG: &str = "[aspects]\nwindow = 3\n";

/// A temporary directory that tests populate with config and lexicon files.
pub struct Sandbox {
    /// Owned temp dir, removed on drop.
    root: TempDir,
}

impl Sandbox {
    /// Creates an empty sandbox.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Returns the sandbox root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory (and its parents) below the root. `""` is the root itself.
    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.root.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes `.rv.toml` with `content` into the directory `rel`.
    pub fn config(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.mkdir(rel).join(CONFIG_FILENAME);
        fs::write(&path, content).unwrap();
        path
    }

    /// Writes a `.rv.toml` that sets `root = true` into the directory `rel`.
    pub fn root_config(&self, rel: &str) -> PathBuf {
        self.config(rel, "root = true\n")
    }

    /// Writes a lexicon CSV with a header row at `rel`.
    pub fn lexicon(&self, rel: &str, entries: &[(&str, &str)]) -> PathBuf {
        let path = self.root.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let mut contents = String::from("word,sentiment\n");
        for (word, polarity) in entries {
            contents.push_str(&format!("{word},{polarity}\n"));
        }
        fs::write(&path, contents).unwrap();
        path
    }
}
