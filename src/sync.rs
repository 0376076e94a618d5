//! Top-level pipeline: fetch → parse → diff → persist → publish.

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::diff;
use crate::error::SyncError;
use crate::feed;
use crate::fetch;
use crate::publish::{self, CommandRunner};
use crate::store;

/// What one run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  /// Every feed entry was already in the store; nothing written, no
  /// commands run.
  Unchanged,
  /// `new` records were added to the store and committed.
  Committed { new: usize },
}

/// One full run against the configured endpoint.
pub fn run(config: &Config, runner: &mut dyn CommandRunner) -> Result<Outcome, SyncError> {
  let body = fetch::fetch(&config.feed_url)?;
  sync_feed(config, &body, runner, Utc::now())
}

/// The pipeline from an already-fetched payload onward. Split out so
/// tests can supply the payload, the runner, and the clock.
pub fn sync_feed(
  config: &Config,
  body: &[u8],
  runner: &mut dyn CommandRunner,
  now: DateTime<Utc>,
) -> Result<Outcome, SyncError> {
  let feed = feed::parse(body)?;
  let mut incidents = store::load(&config.store_path)?;

  let new_incidents = diff::take_new(&feed.entries, &mut incidents);
  if new_incidents.is_empty() {
    return Ok(Outcome::Unchanged);
  }

  // Persist first; a failed git step leaves the file updated but uncommitted.
  store::save(&config.store_path, &incidents)?;
  publish::commit_and_push(runner, config, new_incidents.len(), now)?;
  Ok(Outcome::Committed {
    new: new_incidents.len(),
  })
}
