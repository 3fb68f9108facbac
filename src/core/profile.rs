use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ordinal proficiency tag, ranked beginner < intermediate < advanced < expert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Fixed ranking weight used when sorting skills by proficiency.
    pub fn weight(&self) -> u8 {
        match self {
            Self::Expert => 4,
            Self::Advanced => 3,
            Self::Intermediate => 2,
            Self::Beginner => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }
}

impl Default for SkillLevel {
    fn default() -> Self {
        Self::Intermediate
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            "expert" => Ok(Self::Expert),
            other => Err(format!(
                "invalid level '{}' (must be: beginner|intermediate|advanced|expert)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Devops,
    Mobile,
    Other,
}

impl SkillCategory {
    /// All categories in display order.
    pub const ALL: [SkillCategory; 6] = [
        Self::Frontend,
        Self::Backend,
        Self::Database,
        Self::Devops,
        Self::Mobile,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Database => "database",
            Self::Devops => "devops",
            Self::Mobile => "mobile",
            Self::Other => "other",
        }
    }
}

impl Default for SkillCategory {
    fn default() -> Self {
        Self::Other
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "frontend" => Ok(Self::Frontend),
            "backend" => Ok(Self::Backend),
            "database" => Ok(Self::Database),
            "devops" => Ok(Self::Devops),
            "mobile" => Ok(Self::Mobile),
            "other" => Ok(Self::Other),
            unknown => Err(format!(
                "invalid category '{}' (must be: frontend|backend|database|devops|mobile|other)",
                unknown
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
    #[serde(default)]
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Planned => "planned",
        }
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        Self::Completed
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub gpa: Option<f32>,
}

/// External presence links attached to a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

impl SocialLinks {
    pub fn urls(&self) -> Vec<(&'static str, &str)> {
        let mut urls = Vec::new();
        if let Some(u) = self.github.as_deref() {
            urls.push(("github", u));
        }
        if let Some(u) = self.linkedin.as_deref() {
            urls.push(("linkedin", u));
        }
        if let Some(u) = self.portfolio.as_deref() {
            urls.push(("portfolio", u));
        }
        if let Some(u) = self.resume.as_deref() {
            urls.push(("resume", u));
        }
        if let Some(u) = self.twitter.as_deref() {
            urls.push(("twitter", u));
        }
        urls
    }
}

/// The portfolio document: personal info plus owned sequences of skills,
/// projects, work history and education. Sequences keep insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub work: Vec<WorkEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<SocialLinks>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Profile {
    pub fn display_name(&self) -> &str {
        &self.name
    }

    /// The work entry flagged as the current position, if any.
    pub fn current_work(&self) -> Option<&WorkEntry> {
        self.work.iter().find(|w| w.current)
    }

    pub fn entity_count(&self) -> usize {
        self.skills.len() + self.projects.len() + self.work.len() + self.education.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_document() {
        let doc = r#"{
            "name": "Jane Doe",
            "email": "jane@example.com",
            "title": "Backend Engineer",
            "skills": [{"name": "rust", "level": "expert", "category": "backend"}],
            "projects": [{
                "title": "Widget Service",
                "description": "A service for widgets.",
                "skills": ["rust"],
                "startDate": "2023-01-15",
                "status": "in-progress"
            }],
            "work": [{
                "company": "Acme",
                "position": "Engineer",
                "startDate": "2021-06-01",
                "current": true,
                "skills": ["rust", "postgres"]
            }],
            "education": [{
                "institution": "State University",
                "degree": "BSc",
                "gpa": 8.5
            }],
            "isActive": true
        }"#;

        let profile: Profile = serde_json::from_str(doc).unwrap();
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.skills[0].level, SkillLevel::Expert);
        assert_eq!(profile.skills[0].category, SkillCategory::Backend);
        assert_eq!(profile.projects[0].status, ProjectStatus::InProgress);
        assert_eq!(
            profile.projects[0].start_date,
            NaiveDate::from_ymd_opt(2023, 1, 15)
        );
        assert!(profile.work[0].current);
        assert_eq!(profile.education[0].gpa, Some(8.5));
        assert!(profile.is_active);
    }

    #[test]
    fn optional_fields_and_enum_defaults() {
        let doc = r#"{
            "name": "Minimal",
            "email": "min@example.com",
            "skills": [{"name": "git"}]
        }"#;

        let profile: Profile = serde_json::from_str(doc).unwrap();
        assert!(profile.title.is_none());
        assert!(profile.is_active);
        assert_eq!(profile.skills[0].level, SkillLevel::Intermediate);
        assert_eq!(profile.skills[0].category, SkillCategory::Other);
        assert!(profile.projects.is_empty());
    }

    #[test]
    fn serializes_status_as_kebab_case() {
        let project = Project {
            title: "x".to_string(),
            description: "y".to_string(),
            links: vec![],
            skills: vec![],
            start_date: None,
            end_date: None,
            status: ProjectStatus::InProgress,
        };
        let json = serde_json::to_string(&project).unwrap();
        assert!(json.contains("\"in-progress\""));
    }

    #[test]
    fn level_weights_are_ordered() {
        assert!(SkillLevel::Expert.weight() > SkillLevel::Advanced.weight());
        assert!(SkillLevel::Advanced.weight() > SkillLevel::Intermediate.weight());
        assert!(SkillLevel::Intermediate.weight() > SkillLevel::Beginner.weight());
    }

    #[test]
    fn parses_level_and_category_from_str() {
        assert_eq!("Expert".parse::<SkillLevel>().unwrap(), SkillLevel::Expert);
        assert_eq!(
            "FRONTEND".parse::<SkillCategory>().unwrap(),
            SkillCategory::Frontend
        );
        assert!("wizard".parse::<SkillLevel>().is_err());
        assert!("fullstack".parse::<SkillCategory>().is_err());
    }

    #[test]
    fn current_work_picks_flagged_entry() {
        let profile: Profile = serde_json::from_str(
            r#"{
                "name": "n", "email": "e@x.com",
                "work": [
                    {"company": "Old", "position": "Dev", "startDate": "2019-01-01", "current": false},
                    {"company": "New", "position": "Dev", "startDate": "2022-01-01", "current": true}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(profile.current_work().unwrap().company, "New");
    }
}
