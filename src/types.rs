//! Persisted incident records and the durable store mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::feed::Entry;

/// One incident as persisted in the store file. Immutable once stored:
/// a feed entry whose ID is already present is skipped, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
  pub id: String,
  /// Feed-native timestamp string, carried through verbatim.
  pub updated: String,
  pub title: String,
  pub content: String,
  pub link: String,
}

impl Incident {
  pub fn from_entry(entry: &Entry) -> Self {
    Self {
      id: entry.id.clone(),
      updated: entry.updated.clone(),
      title: entry.title.clone(),
      content: entry.content.div.clone(),
      link: entry.link.href.clone(),
    }
  }
}

/// Durable mapping of incident ID to record. Invariant: every key equals
/// its value's `id`. BTreeMap keeps the serialized file sorted by ID, so
/// repeated runs produce byte-identical output for the same contents.
pub type IncidentStore = BTreeMap<String, Incident>;
