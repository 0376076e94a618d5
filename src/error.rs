//! Structured error types for the sync pipeline.
//!
//! Every failure is terminal: components return these through `Result`
//! and the binary maps the first one to a diagnostic and exit code 1.
//! A missing store file is not an error (first-run state).

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
  #[error("fetch {url}: {source}")]
  Fetch { url: String, source: reqwest::Error },

  #[error("read response body: {0}")]
  Read(#[source] reqwest::Error),

  #[error("feed parse: {0}")]
  Parse(#[from] quick_xml::DeError),

  #[error("open store {path}: {source}")]
  StoreOpen {
    path: PathBuf,
    source: std::io::Error,
  },

  #[error("decode store {path}: {source}")]
  StoreDecode {
    path: PathBuf,
    source: serde_json::Error,
  },

  #[error("write store {path}: {source}")]
  StoreWrite {
    path: PathBuf,
    source: std::io::Error,
  },

  #[error("encode store: {0}")]
  StoreEncode(#[source] serde_json::Error),

  #[error("run `{command}`: {source}")]
  CommandSpawn {
    command: String,
    source: std::io::Error,
  },

  #[error("command `{command}` failed: {status}")]
  CommandFailed { command: String, status: ExitStatus },
}
