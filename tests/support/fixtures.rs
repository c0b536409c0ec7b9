//! Test fixtures and constants.

/// Credential export with two breached passwords out of four.
pub const MIXED_CREDENTIALS: &str = r#"[
  {"id": "bank", "password": "password123", "category": "Finance"},
  {"id": "email", "password": "c0rrect-H0rse-Battery!", "category": "Personal"},
  {"id": "vpn", "password": "admin", "category": "Work"},
  {"id": "forum", "password": "c0rrect-H0rse-Battery!", "category": "Social",
   "lastChanged": "2020-01-01T00:00:00Z"}
]"#;

/// Credential export with nothing to report.
pub const CLEAN_CREDENTIALS: &str = r#"[
  {"id": "bank", "password": "Xk9#mQ2$vL7&pR4!", "category": "Finance"}
]"#;
