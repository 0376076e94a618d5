//! Fixed-schema Atom feed deserialization.
//!
//! The schema is exactly what the status page serves: a `<feed>` holding
//! `<entry>` elements with id, updated, title, an xhtml `<content>` whose
//! body sits in a nested `<div>`, and a `<link href=..>`. Anything the
//! schema does not name is ignored; anything malformed is a hard failure.

use serde::Deserialize;

use crate::error::SyncError;

/// Top-level feed: the ordered entry collection.
#[derive(Debug, Deserialize)]
pub struct Feed {
  #[serde(rename = "entry", default)]
  pub entries: Vec<Entry>,
}

/// One feed entry, in feed-native form. `updated` stays a string — it is
/// carried through to the store verbatim, never re-parsed.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
  pub id: String,
  pub updated: String,
  pub title: String,
  pub content: Content,
  pub link: Link,
}

/// The xhtml content wrapper; the body text lives in the inner `<div>`.
#[derive(Debug, Clone, Deserialize)]
pub struct Content {
  #[serde(default)]
  pub div: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Link {
  #[serde(rename = "@href")]
  pub href: String,
}

/// Parse a raw feed payload into the fixed schema, preserving entry order.
pub fn parse(body: &[u8]) -> Result<Feed, SyncError> {
  let feed = quick_xml::de::from_reader(body)?;
  Ok(feed)
}
