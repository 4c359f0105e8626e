//! Command implementations for refsync-cli

pub mod sync;

pub use sync::run_sync;
