//! Fixed endpoints and identity, with production defaults.

use std::path::PathBuf;

/// Where the feed lives, where the store lives, and who commits.
///
/// There is no flag or environment surface; callers construct this
/// explicitly (tests with temp paths, the binary with the defaults).
#[derive(Debug, Clone)]
pub struct Config {
  /// Status-page Atom feed polled each run.
  pub feed_url: String,
  /// Local JSON store of every incident seen so far.
  pub store_path: PathBuf,
  /// Committer email for the generated commit.
  pub committer_email: String,
  /// Committer name for the generated commit.
  pub committer_name: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      feed_url: "https://status.hetzner.com/en.atom".into(),
      store_path: PathBuf::from("data.json"),
      committer_email: "github-actions[bot]@users.noreply.github.com".into(),
      committer_name: "GitHub Actions".into(),
    }
  }
}
