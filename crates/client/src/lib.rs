//! Client side of the text hashing service: the HTTP adapter plus the
//! presentation helpers built on a successful result.

mod client;
pub mod config;
mod error;
pub mod format;
pub mod history;
pub mod stats;
mod task;

pub use client::{HashClient, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use error::ClientError;
pub use format::{digests_match, DigestFormat};
pub use history::{History, HistoryEntry};
pub use stats::TextStats;
pub use task::{spawn_hash, wait_for_outcome, HashEvent};
