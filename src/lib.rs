//! Status-page incident sync — fetch, diff, persist, commit.
//!
//! Polls a status-page Atom feed, folds entries not seen before into a
//! local JSON store, and records each change as a git commit. One linear
//! pass per invocation: fetch → parse → load store → diff → (persist +
//! publish) or no-op. Scheduling is left to the caller (cron, CI timer),
//! and runs are assumed not to overlap.
//!
//! No daemon, no DB, no retries; blocking I/O + a handful of external
//! git invocations.

pub mod config;
pub mod diff;
pub mod error;
pub mod feed;
pub mod fetch;
pub mod publish;
pub mod store;
pub mod sync;
pub mod types;

pub use config::Config;
pub use error::SyncError;
pub use sync::Outcome;
pub use types::{Incident, IncidentStore};
