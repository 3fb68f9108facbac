use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use super::profile::Profile;
use super::schema::ProfileViolation;

/// A profile document file holds either a single record or an array of
/// records (soft-deleted records stay in the array with `isActive: false`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DocumentBody {
    Single(Box<Profile>),
    Many(Vec<Profile>),
}

impl DocumentBody {
    fn into_records(self) -> Vec<Profile> {
        match self {
            Self::Single(profile) => vec![*profile],
            Self::Many(profiles) => profiles,
        }
    }
}

/// Read-side repository over a profile document file.
///
/// Reads resolve against the active record; inactive records are retained
/// but excluded.
pub struct ProfileStore {
    profiles: Vec<Profile>,
}

impl ProfileStore {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile document {}", path.display()))?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content)
                .with_context(|| format!("Invalid JSON profile document {}", path.display())),
            Some("yml") | Some("yaml") => Self::from_yaml_str(&content)
                .with_context(|| format!("Invalid YAML profile document {}", path.display())),
            _ => bail!(
                "Unsupported profile document extension: {} (expected .json, .yml or .yaml)",
                path.display()
            ),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let body: DocumentBody = serde_json::from_str(content)?;
        Ok(Self {
            profiles: body.into_records(),
        })
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let body: DocumentBody = serde_yaml::from_str(content)?;
        Ok(Self {
            profiles: body.into_records(),
        })
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// The live record all reads operate against.
    pub fn active(&self) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.is_active)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&Profile> {
        self.profiles
            .iter()
            .find(|p| p.email.eq_ignore_ascii_case(email))
    }

    /// Record-set invariants: unique emails, exactly one active record.
    pub fn check_integrity(&self) -> Vec<ProfileViolation> {
        let mut violations = Vec::new();

        let mut seen = std::collections::HashSet::new();
        for profile in &self.profiles {
            if !seen.insert(profile.email.to_lowercase()) {
                violations.push(ProfileViolation::DuplicateEmail(profile.email.clone()));
            }
        }

        let active = self.profiles.iter().filter(|p| p.is_active).count();
        match active {
            0 => violations.push(ProfileViolation::NoActiveProfile),
            1 => {}
            n => violations.push(ProfileViolation::MultipleActiveProfiles(n)),
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE: &str = r#"{"name": "Jane Doe", "email": "jane@example.com"}"#;

    const MANY: &str = r#"[
        {"name": "Old Self", "email": "old@example.com", "isActive": false},
        {"name": "Jane Doe", "email": "jane@example.com", "isActive": true}
    ]"#;

    #[test]
    fn loads_single_record_document() {
        let store = ProfileStore::from_json_str(SINGLE).unwrap();
        assert_eq!(store.profiles().len(), 1);
        assert_eq!(store.active().unwrap().name, "Jane Doe");
    }

    #[test]
    fn active_skips_soft_deleted_records() {
        let store = ProfileStore::from_json_str(MANY).unwrap();
        assert_eq!(store.profiles().len(), 2);
        assert_eq!(store.active().unwrap().email, "jane@example.com");
    }

    #[test]
    fn loads_yaml_document() {
        let store = ProfileStore::from_yaml_str(
            "name: Jane Doe\nemail: jane@example.com\nskills:\n  - name: rust\n    level: expert\n    category: backend\n",
        )
        .unwrap();
        assert_eq!(store.active().unwrap().skills[0].name, "rust");
    }

    #[test]
    fn email_lookup_is_case_insensitive() {
        let store = ProfileStore::from_json_str(MANY).unwrap();
        assert!(store.find_by_email("JANE@EXAMPLE.COM").is_some());
        assert!(store.find_by_email("nobody@example.com").is_none());
    }

    #[test]
    fn integrity_flags_duplicate_emails() {
        let store = ProfileStore::from_json_str(
            r#"[
                {"name": "A B", "email": "same@example.com"},
                {"name": "C D", "email": "Same@Example.com", "isActive": false}
            ]"#,
        )
        .unwrap();
        let violations = store.check_integrity();
        assert!(violations
            .iter()
            .any(|v| matches!(v, ProfileViolation::DuplicateEmail(_))));
    }

    #[test]
    fn integrity_flags_missing_and_multiple_active() {
        let none = ProfileStore::from_json_str(
            r#"[{"name": "A B", "email": "a@example.com", "isActive": false}]"#,
        )
        .unwrap();
        assert!(none
            .check_integrity()
            .contains(&ProfileViolation::NoActiveProfile));

        let both = ProfileStore::from_json_str(
            r#"[
                {"name": "A B", "email": "a@example.com"},
                {"name": "C D", "email": "c@example.com"}
            ]"#,
        )
        .unwrap();
        assert!(both
            .check_integrity()
            .contains(&ProfileViolation::MultipleActiveProfiles(2)));
    }
}
