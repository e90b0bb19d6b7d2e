//! Entity extraction for short multilingual text.
//!
//! Scans a message for the entity kinds such text carries (hashtags,
//! @mentions and list references, a leading @reply, URLs and $cashtags)
//! and reports each with its exact code-point span, so callers can
//! highlight or link the original text without re-deriving offsets.
//!
//! ```
//! use entitext::{extract_entities, EntityKind};
//!
//! let entities = extract_entities("#go is fun");
//! assert_eq!(entities.len(), 1);
//! assert_eq!(entities[0].kind(), EntityKind::Hashtag);
//! assert_eq!((entities[0].start, entities[0].end), (0, 3));
//! ```
//!
//! Overlapping candidates are resolved before anything is returned: a
//! fragment inside a URL never doubles as a hashtag, and a leading reply
//! yields to a wider list mention at the same position.
//!
//! ```
//! use entitext::{extract_entities, EntityKind};
//!
//! let entities = extract_entities("RT @alice: hi @bob");
//! let kinds: Vec<_> = entities.iter().map(|e| e.kind()).collect();
//! assert_eq!(kinds, vec![EntityKind::Reply, EntityKind::Mention]);
//! ```

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

pub mod char_classes;
pub mod tld;

mod extract;
mod pattern;

/// The kind of an extracted entity, derived from its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Hashtag,
    Mention,
    MentionList,
    Reply,
    Url,
    Cashtag,
}

/// Kind-specific payload of an extracted entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityData {
    Hashtag {
        /// Tag text without the leading `#` or `＃`.
        tag: String,
    },
    Mention {
        /// Username without the leading `@` or `＠`.
        username: String,
        /// List slug without its leading slash, when the mention is a
        /// list reference like `@user/list`.
        list: Option<String>,
    },
    Reply {
        username: String,
    },
    Url {
        /// Whether the matched text carried an explicit `http://` or
        /// `https://` prefix.
        protocol_present: bool,
        domain: String,
        port: Option<String>,
        /// Path as matched, starting with `/` or with a bare `#fragment`.
        path: Option<String>,
        /// Query string without the leading `?`.
        query: Option<String>,
    },
    Cashtag {
        /// Symbol without the leading `$`.
        symbol: String,
    },
}

/// One extracted entity. `start` and `end` are code-point offsets into
/// the source text (`end` exclusive); `text` is the exact slice they
/// cover, sigil included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub start: usize,
    pub end: usize,
    pub text: String,
    /// True when the matched text contains right-to-left script.
    pub contains_rtl: bool,
    #[serde(flatten)]
    pub data: EntityData,
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match &self.data {
            EntityData::Hashtag { .. } => EntityKind::Hashtag,
            EntityData::Mention { list: Some(_), .. } => EntityKind::MentionList,
            EntityData::Mention { .. } => EntityKind::Mention,
            EntityData::Reply { .. } => EntityKind::Reply,
            EntityData::Url { .. } => EntityKind::Url,
            EntityData::Cashtag { .. } => EntityKind::Cashtag,
        }
    }
}

/// Extracts every entity kind from `text`, overlaps already resolved,
/// sorted by position.
pub fn extract_entities(text: &str) -> Vec<Entity> {
    extract::extract_all(text)
}

/// Extracts hashtags only. Other entity kinds are not consulted, so a
/// fragment inside a URL does count here; use [`extract_entities`] when
/// cross-kind suppression matters.
pub fn extract_hashtags(text: &str) -> Vec<Entity> {
    extract::extract_hashtags_only(text)
}

/// Extracts @mentions and list references only.
pub fn extract_mentions(text: &str) -> Vec<Entity> {
    extract::extract_mentions_only(text)
}

/// Extracts the leading @reply, if the text has one.
pub fn extract_reply(text: &str) -> Option<Entity> {
    extract::extract_reply_only(text)
}

/// Extracts URLs only.
pub fn extract_urls(text: &str) -> Vec<Entity> {
    extract::extract_urls_only(text)
}

/// Extracts $cashtags only.
pub fn extract_cashtags(text: &str) -> Vec<Entity> {
    extract::extract_cashtags_only(text)
}

/// Runs [`extract_entities`] over a batch of texts in parallel, one
/// result vector per input, in input order.
pub fn extract_entities_batch(texts: &[&str]) -> Vec<Vec<Entity>> {
    texts.par_iter().map(|t| extract_entities(t)).collect()
}
