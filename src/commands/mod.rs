//! CLI subcommands, one module per command.

pub mod init;
pub mod projects;
pub mod search;
pub mod show;
pub mod skills;
pub mod status;
pub mod validate;

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::core::profile::Profile;
use crate::core::store::ProfileStore;
use crate::search::engine::Pagination;

/// Uniform envelope for `--json` output.
#[derive(Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            pagination: None,
            message: None,
        }
    }

    pub fn ok_paged(data: T, pagination: Pagination) -> Self {
        Self {
            success: true,
            data: Some(data),
            pagination: Some(pagination),
            message: None,
        }
    }

    pub fn fail(message: &str) -> Self {
        Self {
            success: false,
            data: None,
            pagination: None,
            message: Some(message.to_string()),
        }
    }

    pub fn print(&self) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

/// Load the document and resolve the active profile, or report
/// "Profile not found" and exit like the platform's 404.
pub fn resolve_active(file: &Path, json: bool) -> Result<Profile> {
    let store = ProfileStore::load(file)?;
    match store.active() {
        Some(profile) => Ok(profile.clone()),
        None => {
            if json {
                Envelope::<()>::fail("Profile not found").print()?;
            } else {
                println!("{}", "Profile not found.".red());
            }
            std::process::exit(1);
        }
    }
}

pub fn truncate(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_chars {
        s.to_string()
    } else {
        format!("{}...", chars[..max_chars].iter().collect::<String>())
    }
}
