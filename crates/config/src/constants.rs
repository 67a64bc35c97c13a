//! Fixed values shared across crates.

/// Event polling interval (tick rate)
pub const EVENT_HANDLER_INTERVAL_MS: u64 = 250;

/// Spacing between dialog buttons
pub const MODAL_BUTTON_SPACING: u16 = 4;

/// Extension appended when a dialog path has none and no specific filter
/// is active
pub const DEFAULT_EXTENSION: &str = "txt";

/// Entry of the open/save dialog filter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub label: &'static str,
    pub pattern: &'static str,
    /// `None` matches every file
    pub extension: Option<&'static str>,
}

/// Filters offered by the open and save dialogs, in display order.
pub const FILE_FILTERS: &[FileFilter] = &[
    FileFilter {
        label: "All files",
        pattern: "*.*",
        extension: None,
    },
    FileFilter {
        label: "Text file",
        pattern: "*.txt",
        extension: Some("txt"),
    },
    FileFilter {
        label: "C# file",
        pattern: "*.cs",
        extension: Some("cs"),
    },
    FileFilter {
        label: "Java file",
        pattern: "*.java",
        extension: Some("java"),
    },
    FileFilter {
        label: "C++ file",
        pattern: "*.cpp",
        extension: Some("cpp"),
    },
    FileFilter {
        label: "C file",
        pattern: "*.c",
        extension: Some("c"),
    },
    FileFilter {
        label: "Python file",
        pattern: "*.py",
        extension: Some("py"),
    },
];

/// About → Contact links
pub const FACEBOOK_URL: &str =
    "https://www.facebook.com/profile.php?id=100010457925248&locale=bg_BG";
pub const GITHUB_URL: &str = "https://github.com/Tsvetelinmarinov";

/// Dialog texts
pub const UNSAVED_DATA_WARNING: &str =
    "Unsaved data will be lost!  Do you want to continue ?";
pub const NOTHING_TO_SAVE: &str = "There is nothing to be saved!";
pub const NO_FILE_SPECIFIED: &str = "No file path and file name specified.";
pub const LAUNCH_FAILED: &str = "Internal error! Can not start the process!";
