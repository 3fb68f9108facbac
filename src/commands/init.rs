use std::fs;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;

/// Starter document demonstrating every entity type.
const STARTER_DOCUMENT: &str = r#"{
  "name": "Alex Morgan",
  "email": "alex.morgan@example.com",
  "title": "Full Stack Developer",
  "bio": "Developer with a focus on web platforms, APIs and data-heavy backends.",
  "location": "Berlin, Germany",
  "phone": "+49 30 1234567",
  "skills": [
    { "name": "javascript", "level": "expert", "category": "frontend" },
    { "name": "react", "level": "expert", "category": "frontend" },
    { "name": "css", "level": "advanced", "category": "frontend" },
    { "name": "rust", "level": "advanced", "category": "backend" },
    { "name": "node.js", "level": "advanced", "category": "backend" },
    { "name": "postgresql", "level": "advanced", "category": "database" },
    { "name": "docker", "level": "intermediate", "category": "devops" },
    { "name": "git", "level": "expert", "category": "other" }
  ],
  "projects": [
    {
      "title": "Commerce Dashboard",
      "description": "Analytics dashboard for a mid-size shop: order funnels, cohort views and near-realtime inventory charts.",
      "links": ["https://github.com/alexmorgan-dev/commerce-dashboard"],
      "skills": ["react", "javascript", "node.js", "postgresql"],
      "startDate": "2023-02-01",
      "endDate": "2023-09-15",
      "status": "completed"
    },
    {
      "title": "Telemetry Collector",
      "description": "Lightweight agent and ingestion service for application metrics with a pull-based query API.",
      "links": ["https://github.com/alexmorgan-dev/telemetry-collector"],
      "skills": ["rust", "postgresql", "docker"],
      "startDate": "2024-01-10",
      "status": "in-progress"
    }
  ],
  "work": [
    {
      "company": "Brightline Systems",
      "position": "Senior Software Engineer",
      "description": "Owns the customer-facing dashboard stack and the internal component library.",
      "startDate": "2022-03-01",
      "current": true,
      "skills": ["react", "javascript", "node.js"]
    },
    {
      "company": "Datakraft GmbH",
      "position": "Backend Engineer",
      "description": "Built ingestion pipelines and reporting APIs.",
      "startDate": "2019-07-01",
      "endDate": "2022-02-28",
      "current": false,
      "skills": ["node.js", "postgresql"]
    }
  ],
  "education": [
    {
      "institution": "Technical University of Munich",
      "degree": "BSc",
      "field": "Computer Science",
      "startDate": "2015-10-01",
      "endDate": "2019-03-31",
      "gpa": 8.4
    }
  ],
  "links": {
    "github": "https://github.com/alexmorgan-dev",
    "linkedin": "https://linkedin.com/in/alex-morgan-dev",
    "portfolio": "https://alexmorgan.dev"
  },
  "isActive": true
}
"#;

pub fn run(file: &Path, force: bool) -> Result<()> {
    if file.exists() && !force {
        println!(
            "{} {} already exists.",
            "✗".red(),
            file.display()
        );
        println!("{}", "Run with --force to overwrite it.".yellow());
        std::process::exit(1);
    }

    fs::write(file, STARTER_DOCUMENT)?;

    println!("{} Created starter document {}", "✓".green(), file.display());
    println!();
    println!("Next steps:");
    println!("  {} edit the document with your own data", "•".cyan());
    println!("  {} folio validate -f {}", "•".cyan(), file.display());
    println!("  {} folio show -f {}", "•".cyan(), file.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::validate_profile;
    use crate::core::store::ProfileStore;

    #[test]
    fn starter_document_parses_and_validates() {
        let store = ProfileStore::from_json_str(STARTER_DOCUMENT).unwrap();
        let profile = store.active().expect("starter must contain an active profile");
        assert!(validate_profile(profile).is_empty());
        assert!(store.check_integrity().is_empty());
        assert!(!profile.skills.is_empty());
        assert!(!profile.projects.is_empty());
        assert!(!profile.work.is_empty());
        assert!(!profile.education.is_empty());
    }
}
