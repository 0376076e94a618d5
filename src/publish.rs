//! Publish: record the updated store in git history.
//!
//! Five external invocations, in order: set committer email, set
//! committer name, stage the store file, commit, push. The first failure
//! aborts the rest — a commit that lands without a push stays local until
//! the next successful run.

use chrono::{DateTime, SecondsFormat, Utc};
use std::process::Command;

use crate::config::Config;
use crate::error::SyncError;

/// Narrow effect seam over external command execution, so the commit
/// sequence can be exercised with a recording stub.
pub trait CommandRunner {
  fn run(&mut self, program: &str, args: &[&str]) -> Result<(), SyncError>;
}

/// Runs commands for real. Stdout/stderr are inherited, so git's own
/// transcript is the user-visible output of a publishing run.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
  fn run(&mut self, program: &str, args: &[&str]) -> Result<(), SyncError> {
    let command = render(program, args);
    let status = Command::new(program)
      .args(args)
      .status()
      .map_err(|source| SyncError::CommandSpawn {
        command: command.clone(),
        source,
      })?;
    if !status.success() {
      return Err(SyncError::CommandFailed { command, status });
    }
    Ok(())
  }
}

fn render(program: &str, args: &[&str]) -> String {
  let mut rendered = String::from(program);
  for arg in args {
    rendered.push(' ');
    rendered.push_str(arg);
  }
  rendered
}

/// Commit message for a batch of new incidents.
pub fn commit_message(new_count: usize, now: DateTime<Utc>) -> String {
  format!(
    "Update incidents: {} new ({})",
    new_count,
    now.to_rfc3339_opts(SecondsFormat::Secs, true)
  )
}

/// Configure the committer identity, then stage, commit, and push the
/// store file. Invoked only when at least one new incident exists.
pub fn commit_and_push(
  runner: &mut dyn CommandRunner,
  config: &Config,
  new_count: usize,
  now: DateTime<Utc>,
) -> Result<(), SyncError> {
  runner.run(
    "git",
    &["config", "--global", "user.email", &config.committer_email],
  )?;
  runner.run(
    "git",
    &["config", "--global", "user.name", &config.committer_name],
  )?;

  let store_path = config.store_path.to_string_lossy();
  runner.run("git", &["add", &store_path])?;

  let message = commit_message(new_count, now);
  runner.run("git", &["commit", "-m", &message])?;
  runner.run("git", &["push"])?;
  Ok(())
}
