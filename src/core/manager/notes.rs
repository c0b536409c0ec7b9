//! Secure note operations.
//!
//! Content of an encrypted note is sealed before it is assigned, on create
//! and on every edit; the store never hands plaintext back except through
//! the explicit `reveal_*` calls.

use chrono::{DateTime, Utc};
use tracing::debug;
use zeroize::Zeroizing;

use super::SecurityManager;
use crate::core::domain::{NewAttachment, NewNote, NoteUpdate, SecureAttachment, SecureNote};
use crate::core::types::new_id;
use crate::core::validation;
use crate::error::{RecordError, Result};

impl SecurityManager {
    /// Add a note.
    ///
    /// # Returns
    ///
    /// The stored note. For encrypted notes `content` is the sealed form;
    /// callers that need the plaintext must keep their own copy.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the title is blank, `CipherError` if
    /// sealing fails, or `StoreError` if the snapshot cannot be written.
    pub fn add_secure_note(&mut self, note: NewNote) -> Result<SecureNote> {
        validation::require("title", &note.title)?;

        let now = self.clock.now();
        let plaintext = Zeroizing::new(note.content);
        let content = if note.encrypted {
            self.cipher.seal_str(&plaintext)?
        } else {
            plaintext.as_str().to_owned()
        };

        let attachments = note
            .attachments
            .into_iter()
            .map(|attachment| self.seal_attachment(attachment, now))
            .collect::<Result<Vec<_>>>()?;

        let stored = SecureNote::new(
            new_id(),
            note.title,
            content,
            note.category,
            note.tags,
            note.encrypted,
            attachments,
            now,
        );

        let added = stored.clone();
        self.commit(move |state| {
            state.secure_notes.push(stored);
            Ok(())
        })?;

        debug!(id = %added.id(), encrypted = added.is_encrypted(), "secure note added");
        Ok(added)
    }

    /// Edit a note's fields.
    ///
    /// New content is sealed again for encrypted notes and `lastModified`
    /// is refreshed. An empty update changes nothing and writes nothing.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` for an unknown id and
    /// `ValidationError` for a blank title.
    pub fn update_secure_note(&mut self, id: &str, mut update: NoteUpdate) -> Result<SecureNote> {
        if let Some(title) = &update.title {
            validation::require("title", title)?;
        }

        let index = self.note_index(id)?;
        if update.is_empty() {
            return Ok(self.state.secure_notes[index].clone());
        }

        let mut note = self.state.secure_notes[index].clone();
        if let Some(content) = update.content.take() {
            let plaintext = Zeroizing::new(content);
            update.content = Some(if note.is_encrypted() {
                self.cipher.seal_str(&plaintext)?
            } else {
                plaintext.as_str().to_owned()
            });
        }
        note.apply(update, self.clock.now());

        let updated = note.clone();
        self.commit(move |state| {
            state.secure_notes[index] = note;
            Ok(())
        })?;

        debug!(id = %id, "secure note updated");
        Ok(updated)
    }

    /// Delete a note and its attachments.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` for an unknown id.
    pub fn delete_secure_note(&mut self, id: &str) -> Result<SecureNote> {
        let index = self.note_index(id)?;
        let removed = self.commit(|state| Ok(state.secure_notes.remove(index)))?;

        debug!(id = %id, "secure note deleted");
        Ok(removed)
    }

    /// Plaintext content of a note.
    pub fn reveal_note(&self, id: &str) -> Result<Zeroizing<String>> {
        let note = self
            .secure_note(id)
            .ok_or_else(|| RecordError::not_found("secure note", id))?;

        if note.is_encrypted() {
            self.cipher.open_string(note.content())
        } else {
            Ok(Zeroizing::new(note.content().to_owned()))
        }
    }

    /// Plaintext bytes of an attachment.
    pub fn reveal_attachment(
        &self,
        note_id: &str,
        attachment_id: &str,
    ) -> Result<Zeroizing<Vec<u8>>> {
        let note = self
            .secure_note(note_id)
            .ok_or_else(|| RecordError::not_found("secure note", note_id))?;
        let attachment = note
            .attachment(attachment_id)
            .ok_or_else(|| RecordError::not_found("attachment", attachment_id))?;

        self.cipher.open(attachment.encrypted_data())
    }

    /// All notes in creation order.
    pub fn secure_notes(&self) -> &[SecureNote] {
        &self.state.secure_notes
    }

    pub fn secure_note(&self, id: &str) -> Option<&SecureNote> {
        self.state.secure_notes.iter().find(|n| n.id() == id)
    }

    fn note_index(&self, id: &str) -> Result<usize> {
        self.state
            .secure_notes
            .iter()
            .position(|n| n.id() == id)
            .ok_or_else(|| RecordError::not_found("secure note", id).into())
    }

    fn seal_attachment(
        &self,
        attachment: NewAttachment,
        now: DateTime<Utc>,
    ) -> Result<SecureAttachment> {
        let data = Zeroizing::new(attachment.data);
        Ok(SecureAttachment::new(
            new_id(),
            attachment.name,
            attachment.kind,
            data.len() as u64,
            self.cipher.seal(&data)?,
            now,
        ))
    }
}
