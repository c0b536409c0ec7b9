//! Credential quality analysis.
//!
//! The report generator delegates strength, duplicate and age counting to
//! a [`CredentialAnalyzer`]. [`StrengthAnalyzer`] is the built-in scorer.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::core::domain::{Credential, CredentialStats};

/// Computes quality counts for the primary credential collection.
pub trait CredentialAnalyzer {
    fn analyze(&self, credentials: &[Credential], now: DateTime<Utc>) -> CredentialStats;

    /// Age in days past which a password counts as old, if the analyzer
    /// uses a fixed threshold.
    fn max_age_days(&self) -> Option<i64> {
        None
    }
}

/// Strength bucket for a password score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    fn from_score(score: u32) -> Self {
        match score {
            90.. => StrengthLevel::VeryStrong,
            75..=89 => StrengthLevel::Strong,
            60..=74 => StrengthLevel::Good,
            40..=59 => StrengthLevel::Fair,
            20..=39 => StrengthLevel::Weak,
            _ => StrengthLevel::VeryWeak,
        }
    }
}

/// Score (0-100) and level of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub score: u32,
    pub level: StrengthLevel,
}

impl Strength {
    /// Good or better.
    pub fn is_strong(&self) -> bool {
        self.level >= StrengthLevel::Good
    }

    /// Weak or worse.
    pub fn is_weak(&self) -> bool {
        self.level <= StrengthLevel::Weak
    }
}

/// Score a password by length and character variety.
pub fn strength(password: &str) -> Strength {
    let length = password.chars().count();
    let mut score = match length {
        64.. => 30,
        32..=63 => 20,
        16..=31 => 10,
        _ => 0,
    };

    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 15;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 15;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 15;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 25;
    }

    Strength {
        score,
        level: StrengthLevel::from_score(score),
    }
}

/// Built-in analyzer: character-variety scoring plus duplicate and age checks.
#[derive(Debug, Clone, Copy)]
pub struct StrengthAnalyzer {
    max_age: Duration,
}

impl StrengthAnalyzer {
    /// Passwords unchanged for longer than `max_age_days` count as old.
    pub fn new(max_age_days: u32) -> Self {
        Self {
            max_age: Duration::days(i64::from(max_age_days)),
        }
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }
}

impl Default for StrengthAnalyzer {
    fn default() -> Self {
        Self::new(crate::core::constants::DEFAULT_MAX_AGE_DAYS)
    }
}

impl CredentialAnalyzer for StrengthAnalyzer {
    fn analyze(&self, credentials: &[Credential], now: DateTime<Utc>) -> CredentialStats {
        let mut occurrences: HashMap<&str, usize> = HashMap::new();
        for credential in credentials {
            *occurrences.entry(credential.password.as_str()).or_default() += 1;
        }

        let mut stats = CredentialStats {
            total: credentials.len(),
            ..CredentialStats::default()
        };

        for credential in credentials {
            let s = strength(&credential.password);
            if s.is_strong() {
                stats.strong += 1;
            } else if s.is_weak() {
                stats.weak += 1;
            }

            if occurrences[credential.password.as_str()] > 1 {
                stats.duplicate += 1;
            }

            if let Some(changed) = credential.last_changed {
                if now - changed > self.max_age {
                    stats.old += 1;
                }
            }
        }

        stats
    }

    fn max_age_days(&self) -> Option<i64> {
        Some(self.max_age.num_days())
    }
}
