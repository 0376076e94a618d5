//! Diff: fold feed entries into the store, collecting the unseen ones.

use crate::feed::Entry;
use crate::types::{Incident, IncidentStore};

/// Visit entries in feed order; each ID not already in the store becomes
/// an [`Incident`], is inserted, and lands on the returned list.
///
/// Inserting as we go means a duplicate ID within one feed counts once:
/// the first occurrence wins and later ones see the key as present.
/// Known IDs are never re-evaluated — an upstream edit to an existing
/// entry is invisible here.
pub fn take_new(entries: &[Entry], store: &mut IncidentStore) -> Vec<Incident> {
  let mut new_incidents = Vec::new();
  for entry in entries {
    if store.contains_key(&entry.id) {
      continue;
    }
    let incident = Incident::from_entry(entry);
    store.insert(incident.id.clone(), incident.clone());
    new_incidents.push(incident);
  }
  new_incidents
}
