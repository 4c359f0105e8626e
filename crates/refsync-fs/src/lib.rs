//! Filesystem layer for refsync
//!
//! Provides normalized path handling, destination rewriting for staged
//! files, staging copies and disposable scratch workspaces.

pub mod error;
pub mod path;
pub mod scratch;
pub mod stage;
pub mod transform;

pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use scratch::ScratchDir;
