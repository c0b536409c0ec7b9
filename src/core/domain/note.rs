//! Secure note types.
//!
//! A note's `content` is sealed whenever `encrypted` is set; attachments are
//! always sealed.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::{RecordId, SealedValue};

/// A free-form note stored in the vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecureNote {
    id: RecordId,
    title: String,
    content: String,
    category: String,
    #[serde(default)]
    tags: BTreeSet<String>,
    encrypted: bool,
    created: DateTime<Utc>,
    last_modified: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<SecureAttachment>,
}

impl SecureNote {
    /// `content` must already be sealed when `encrypted` is set.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: RecordId,
        title: String,
        content: String,
        category: String,
        tags: BTreeSet<String>,
        encrypted: bool,
        attachments: Vec<SecureAttachment>,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            category,
            tags,
            encrypted,
            created,
            last_modified: created,
            attachments,
        }
    }

    /// Apply a non-empty update. Any new content must already be sealed
    /// for an encrypted note.
    pub(crate) fn apply(&mut self, update: NoteUpdate, now: DateTime<Utc>) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        self.last_modified = now;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sealed when the note is encrypted, plaintext otherwise.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn is_encrypted(&self) -> bool {
        self.encrypted
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    pub fn attachments(&self) -> &[SecureAttachment] {
        &self.attachments
    }

    /// Look up an attachment by id.
    pub fn attachment(&self, id: &str) -> Option<&SecureAttachment> {
        self.attachments.iter().find(|a| a.id == id)
    }
}

/// A sealed file attached to a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecureAttachment {
    id: RecordId,
    name: String,
    #[serde(rename = "type")]
    kind: String,
    size: u64,
    encrypted_data: SealedValue,
    created: DateTime<Utc>,
}

impl SecureAttachment {
    pub(crate) fn new(
        id: RecordId,
        name: String,
        kind: String,
        size: u64,
        encrypted_data: SealedValue,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            kind,
            size,
            encrypted_data,
            created,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// MIME type as supplied by the caller.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Plaintext size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn encrypted_data(&self) -> &str {
        &self.encrypted_data
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }
}

/// Input for creating a note.
#[derive(Debug, Clone, Default)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: BTreeSet<String>,
    pub encrypted: bool,
    pub attachments: Vec<NewAttachment>,
}

impl NewNote {
    /// Start a note with a title and content; everything else defaulted.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn encrypted(mut self, encrypted: bool) -> Self {
        self.encrypted = encrypted;
        self
    }

    pub fn attach(mut self, attachment: NewAttachment) -> Self {
        self.attachments.push(attachment);
        self
    }
}

/// Input for an attachment; `data` is sealed before it is stored.
#[derive(Clone)]
pub struct NewAttachment {
    pub name: String,
    pub kind: String,
    pub data: Vec<u8>,
}

impl std::fmt::Debug for NewAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewAttachment")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("size", &self.data.len())
            .finish()
    }
}

/// Partial update of a note. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Option<BTreeSet<String>>,
}

impl NoteUpdate {
    /// True when applying the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.category.is_none()
            && self.tags.is_none()
    }
}
