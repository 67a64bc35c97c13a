//! Boundaries to the outside world: the file system and external programs.
//!
//! [`App`](crate::App) talks to these through traits so tests can swap in
//! fakes.

use std::path::Path;
use std::process::Command;

use crate::error::EditorError;

/// Whole-file reads and writes.
pub trait FileStore {
    fn read_file(&self, path: &Path) -> Result<String, EditorError>;
    fn write_file(&self, path: &Path, text: &str) -> Result<(), EditorError>;
}

/// Local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileStore;

impl FileStore for LocalFileStore {
    fn read_file(&self, path: &Path) -> Result<String, EditorError> {
        std::fs::read_to_string(path).map_err(|source| EditorError::IoFailure {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_file(&self, path: &Path, text: &str) -> Result<(), EditorError> {
        std::fs::write(path, text).map_err(|source| EditorError::IoFailure {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Opens URLs in the user's browser.
pub trait Launcher {
    fn open_external(&self, url: &str) -> Result<(), EditorError>;
}

/// Hands URLs to the platform's opener without waiting for it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl SystemLauncher {
    #[cfg(target_os = "macos")]
    fn command(url: &str) -> Command {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    }

    #[cfg(target_os = "windows")]
    fn command(url: &str) -> Command {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    fn command(url: &str) -> Command {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

impl Launcher for SystemLauncher {
    fn open_external(&self, url: &str) -> Result<(), EditorError> {
        Self::command(url)
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|source| EditorError::ExternalLaunchFailure {
                url: url.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        let store = LocalFileStore;

        store.write_file(&path, "hello\n").unwrap();
        assert_eq!(store.read_file(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_missing_file_is_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        match LocalFileStore.read_file(&path) {
            Err(EditorError::IoFailure { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected IoFailure, got {:?}", other),
        }
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.txt");
        let err = LocalFileStore.write_file(&path, "x").unwrap_err();
        assert!(err.to_string().contains("out.txt"));
        assert!(!err.is_cancelled());
    }
}
