//! docsync core library.
//!
//! Keeps a documentation index file in step with the repository README:
//! the README is copied with the docs path prefix removed and excluded
//! regions dropped, or compared against the index for CI checks.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `transform`: Prefix stripping and exclusion region removal.
//! - `sync`: Write/check runs against the filesystem.
//! - `output`: Human/JSON printers for sync results.
//! - `error`: Error type shared by the modules above.
//! - `logging`: `tracing` subscriber setup.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod sync;
pub mod transform;
pub mod utils;

pub use error::{Error, Result};
pub use sync::{synchronize, Mode, SyncOutcome};
pub use transform::Transform;
