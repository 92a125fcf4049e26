//! Run persistence
//!
//! Provides [`FsRunStore`], which writes each completed run to its own
//! directory under the output root.

mod fs_run_store;

pub use fs_run_store::{FsRunStore, sanitize_topic};
