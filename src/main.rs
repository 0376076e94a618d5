//! Binary entrypoint: one sync pass, exit 0 on success or no-op, exit 1
//! with a single stderr diagnostic on the first failure.
//!
//! On a publishing run the visible output is the git transcript (the
//! runner inherits stdio); on a no-op run it is one stdout line.

use incident_sync::publish::SystemRunner;
use incident_sync::{sync, Config, Outcome};
use std::process;

fn main() {
  let config = Config::default();
  let mut runner = SystemRunner;

  match sync::run(&config, &mut runner) {
    Ok(Outcome::Unchanged) => println!("No new incidents to commit."),
    Ok(Outcome::Committed { .. }) => {}
    Err(e) => {
      eprintln!("incident-sync: {}", e);
      process::exit(1);
    }
  }
}
