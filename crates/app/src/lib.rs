//! Application orchestrator for termpad.
//!
//! This crate ties the element model, dialogs and themes together and
//! provides:
//! - `App` - the event loop, key dispatch and menu commands
//! - `AppState` - every live element plus the open modal and its pending action
//! - `FileStore` / `Launcher` - boundaries to the file system and the browser
//! - `EditorError` - failures surfaced to the user
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        termpad (bin)                             │
//! │  main.rs - terminal setup, restart; ui.rs - screen composition  │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//!                                ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    termpad-app (this crate)                      │
//! │  App, AppState, guarded actions, collaborators                   │
//! └─────────────────────────────────────────────────────────────────┘
//!            │              │              │              │
//!            ▼              ▼              ▼              ▼
//!     ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────┐
//!     │   core   │  │  modal   │  │  theme   │  │  config  │
//!     └──────────┘  └──────────┘  └──────────┘  └──────────┘
//! ```

pub mod app;
pub mod collaborators;
pub mod error;
pub mod state;

pub use app::App;
pub use collaborators::{FileStore, Launcher, LocalFileStore, SystemLauncher};
pub use error::EditorError;
pub use state::{ActiveModal, AppState, ExitAction, GuardedAction, PendingAction};
