//! Password history tracking.
//!
//! Each credential keeps at most [`HISTORY_LIMIT`] prior values. Inserting
//! past the limit evicts exactly one entry, the oldest by `changedAt`.

use tracing::debug;
use zeroize::Zeroizing;

use super::SecurityManager;
use crate::core::constants::HISTORY_LIMIT;
use crate::core::domain::PasswordHistoryEntry;
use crate::core::types::new_id;
use crate::core::validation;
use crate::error::{RecordError, Result};

impl SecurityManager {
    /// Record that a credential's password changed.
    ///
    /// `old_password` is sealed before it is stored.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `password_id` is blank, `CipherError` if
    /// sealing fails, or `StoreError` if the snapshot cannot be written.
    pub fn track_password_change(
        &mut self,
        password_id: &str,
        old_password: &str,
        reason: &str,
    ) -> Result<()> {
        validation::require("password id", password_id)?;

        let entry = PasswordHistoryEntry::new(
            new_id(),
            password_id.to_string(),
            self.cipher.seal_str(old_password)?,
            self.clock.now(),
            reason.to_string(),
        );

        let evicted = self.commit(|state| {
            state.password_history.push(entry);
            Ok(evict_oldest(&mut state.password_history, password_id))
        })?;

        debug!(
            password_id = %password_id,
            evicted = evicted.is_some(),
            "password change tracked"
        );
        Ok(())
    }

    /// History of one credential, oldest first.
    pub fn password_history(&self, password_id: &str) -> Vec<&PasswordHistoryEntry> {
        let mut entries: Vec<_> = self
            .state
            .password_history
            .iter()
            .filter(|h| h.password_id() == password_id)
            .collect();
        entries.sort_by_key(|h| h.changed_at());
        entries
    }

    /// Plaintext of a stored previous password.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` for an unknown entry id.
    pub fn reveal_history_entry(&self, entry_id: &str) -> Result<Zeroizing<String>> {
        let entry = self
            .state
            .password_history
            .iter()
            .find(|h| h.id() == entry_id)
            .ok_or_else(|| RecordError::not_found("history entry", entry_id))?;

        self.cipher.open_string(entry.old_password())
    }
}

/// Remove the single oldest entry for `password_id` if it is over the limit.
///
/// Ties on `changedAt` go to the entry stored first.
fn evict_oldest(
    history: &mut Vec<PasswordHistoryEntry>,
    password_id: &str,
) -> Option<PasswordHistoryEntry> {
    let count = history
        .iter()
        .filter(|h| h.password_id() == password_id)
        .count();
    if count <= HISTORY_LIMIT {
        return None;
    }

    let mut oldest: Option<usize> = None;
    for (index, entry) in history.iter().enumerate() {
        if entry.password_id() != password_id {
            continue;
        }
        match oldest {
            Some(current) if history[current].changed_at() <= entry.changed_at() => {}
            _ => oldest = Some(index),
        }
    }

    oldest.map(|index| history.remove(index))
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;
    use chrono::{Duration, Utc};
    use proptest::prelude::*;

    #[test]
    fn test_old_password_is_sealed() {
        let mut f = fixture();
        f.manager
            .track_password_change("p1", "hunter2", "rotation")
            .unwrap();

        let history = f.manager.password_history("p1");
        assert_eq!(history.len(), 1);
        assert_ne!(history[0].old_password(), "hunter2");
        assert_eq!(history[0].reason(), "rotation");
        assert_eq!(
            f.manager
                .reveal_history_entry(history[0].id())
                .unwrap()
                .as_str(),
            "hunter2"
        );
    }

    #[test]
    fn test_eleventh_change_evicts_earliest() {
        let mut f = fixture();
        let first = f.clock.get();

        for i in 0..11 {
            f.manager
                .track_password_change("p1", &format!("old-{}", i), "rotation")
                .unwrap();
            f.clock.advance(Duration::minutes(1));
        }

        let history = f.manager.password_history("p1");
        assert_eq!(history.len(), 10);
        assert!(history.iter().all(|h| h.changed_at() != first));
        assert_eq!(history[0].changed_at(), first + Duration::minutes(1));
        assert_eq!(
            f.manager
                .reveal_history_entry(history[9].id())
                .unwrap()
                .as_str(),
            "old-10"
        );
    }

    #[test]
    fn test_eviction_is_per_credential() {
        let mut f = fixture();

        for _ in 0..10 {
            f.manager.track_password_change("p1", "a", "r").unwrap();
            f.clock.advance(Duration::seconds(1));
        }
        f.manager.track_password_change("p2", "b", "r").unwrap();

        assert_eq!(f.manager.password_history("p1").len(), 10);
        assert_eq!(f.manager.password_history("p2").len(), 1);
    }

    #[test]
    fn test_history_sorted_on_read() {
        let mut f = fixture();

        f.manager.track_password_change("p1", "newer", "r").unwrap();
        f.clock.advance(Duration::hours(-1));
        f.manager.track_password_change("p1", "older", "r").unwrap();

        let history = f.manager.password_history("p1");
        assert!(history[0].changed_at() < history[1].changed_at());
    }

    #[test]
    fn test_blank_password_id_rejected() {
        let mut f = fixture();
        assert!(f.manager.track_password_change("", "x", "r").is_err());
        assert!(f.manager.snapshot().password_history.is_empty());
    }

    #[test]
    fn test_evict_tie_takes_first_stored() {
        let at = Utc::now();
        let mut history: Vec<_> = (0..11)
            .map(|i| {
                PasswordHistoryEntry::new(
                    format!("h{}", i),
                    "p1".to_string(),
                    "sealed".to_string(),
                    at,
                    String::new(),
                )
            })
            .collect();

        let evicted = evict_oldest(&mut history, "p1").unwrap();
        assert_eq!(evicted.id(), "h0");
        assert_eq!(history.len(), 10);
    }

    #[test]
    fn test_evict_removes_only_one() {
        let at = Utc::now();
        let mut history: Vec<_> = (0..13)
            .map(|i| {
                PasswordHistoryEntry::new(
                    format!("h{}", i),
                    "p1".to_string(),
                    "sealed".to_string(),
                    at + Duration::seconds(i),
                    String::new(),
                )
            })
            .collect();

        evict_oldest(&mut history, "p1");
        assert_eq!(history.len(), 12);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn history_keeps_ten_most_recent(
            offsets in prop::collection::vec(-10_000i64..10_000, 1..30)
        ) {
            let at = Utc::now();
            let mut history = Vec::new();
            let mut all = Vec::new();

            for (i, offset) in offsets.iter().enumerate() {
                let changed = at + Duration::seconds(*offset);
                history.push(PasswordHistoryEntry::new(
                    format!("h{}", i),
                    "p1".to_string(),
                    String::new(),
                    changed,
                    String::new(),
                ));
                evict_oldest(&mut history, "p1");
                all.push(changed);

                prop_assert!(history.len() <= HISTORY_LIMIT);
            }

            // Retained set is the most recent timestamps
            all.sort();
            let expected: Vec<_> = all.iter().rev().take(HISTORY_LIMIT).rev().cloned().collect();
            let mut kept: Vec<_> = history.iter().map(|h| h.changed_at()).collect();
            kept.sort();
            prop_assert_eq!(kept, expected);
        }
    }
}
