use lazy_static::lazy_static;
use regex::Regex;

use super::profile::Profile;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();
    static ref URL_RE: Regex = Regex::new(r"^https?://[^\s]+$").unwrap();
}

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 100;
pub const TITLE_MAX: usize = 200;
pub const BIO_MAX: usize = 1000;
pub const LOCATION_MAX: usize = 100;
pub const PROJECT_DESCRIPTION_MIN: usize = 10;
pub const PROJECT_DESCRIPTION_MAX: usize = 2000;
pub const WORK_DESCRIPTION_MAX: usize = 2000;
pub const ENTITY_NAME_MIN: usize = 2;
pub const ENTITY_NAME_MAX: usize = 200;
pub const SKILL_NAME_MAX: usize = 50;
pub const GPA_MAX: f32 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileViolation {
    FieldTooShort { field: String, min: usize, len: usize },
    FieldTooLong { field: String, max: usize, len: usize },
    InvalidEmail(String),
    InvalidLink { field: String, url: String },
    GpaOutOfRange { institution: String, gpa: f32 },
    EmptySkillName { field: String },
    DuplicateEmail(String),
    NoActiveProfile,
    MultipleActiveProfiles(usize),
}

impl std::fmt::Display for ProfileViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FieldTooShort { field, min, len } => {
                write!(f, "{} too short: {} chars (min {})", field, len, min)
            }
            Self::FieldTooLong { field, max, len } => {
                write!(f, "{} too long: {} chars (max {})", field, len, max)
            }
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidLink { field, url } => {
                write!(f, "Invalid URL in {}: {}", field, url)
            }
            Self::GpaOutOfRange { institution, gpa } => {
                write!(f, "GPA {} out of range [0, {}] for {}", gpa, GPA_MAX, institution)
            }
            Self::EmptySkillName { field } => write!(f, "Empty skill name in {}", field),
            Self::DuplicateEmail(email) => {
                write!(f, "Profile with this email already exists: {}", email)
            }
            Self::NoActiveProfile => write!(f, "No active profile in document"),
            Self::MultipleActiveProfiles(n) => {
                write!(f, "Multiple active profiles in document: {}", n)
            }
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_url(url: &str) -> bool {
    URL_RE.is_match(url)
}

/// Check a single profile document against the field constraints.
///
/// Returns every violation found rather than stopping at the first one.
pub fn validate_profile(profile: &Profile) -> Vec<ProfileViolation> {
    let mut violations = Vec::new();

    check_range(&mut violations, "name", &profile.name, NAME_MIN, NAME_MAX);

    if !is_valid_email(&profile.email) {
        violations.push(ProfileViolation::InvalidEmail(profile.email.clone()));
    }

    if let Some(title) = &profile.title {
        check_max(&mut violations, "title", title, TITLE_MAX);
    }
    if let Some(bio) = &profile.bio {
        check_max(&mut violations, "bio", bio, BIO_MAX);
    }
    if let Some(location) = &profile.location {
        check_max(&mut violations, "location", location, LOCATION_MAX);
    }

    for skill in &profile.skills {
        let len = skill.name.chars().count();
        if len == 0 {
            violations.push(ProfileViolation::EmptySkillName {
                field: "skills".to_string(),
            });
        } else if len > SKILL_NAME_MAX {
            violations.push(ProfileViolation::FieldTooLong {
                field: format!("skill '{}'", skill.name),
                max: SKILL_NAME_MAX,
                len,
            });
        }
    }

    for project in &profile.projects {
        let field = format!("project '{}'", project.title);
        check_range(&mut violations, &format!("{} title", field), &project.title, ENTITY_NAME_MIN, ENTITY_NAME_MAX);
        check_range(
            &mut violations,
            &format!("{} description", field),
            &project.description,
            PROJECT_DESCRIPTION_MIN,
            PROJECT_DESCRIPTION_MAX,
        );
        for link in &project.links {
            if !link.is_empty() && !is_valid_url(link) {
                violations.push(ProfileViolation::InvalidLink {
                    field: field.clone(),
                    url: link.clone(),
                });
            }
        }
        for skill in &project.skills {
            if skill.is_empty() {
                violations.push(ProfileViolation::EmptySkillName {
                    field: field.clone(),
                });
            }
        }
    }

    for work in &profile.work {
        let field = format!("work '{}'", work.company);
        check_range(&mut violations, &format!("{} company", field), &work.company, ENTITY_NAME_MIN, ENTITY_NAME_MAX);
        check_range(&mut violations, &format!("{} position", field), &work.position, ENTITY_NAME_MIN, ENTITY_NAME_MAX);
        if let Some(description) = &work.description {
            check_max(&mut violations, &format!("{} description", field), description, WORK_DESCRIPTION_MAX);
        }
        for skill in &work.skills {
            if skill.is_empty() {
                violations.push(ProfileViolation::EmptySkillName {
                    field: field.clone(),
                });
            }
        }
    }

    for education in &profile.education {
        let field = format!("education '{}'", education.institution);
        check_range(
            &mut violations,
            &format!("{} institution", field),
            &education.institution,
            ENTITY_NAME_MIN,
            ENTITY_NAME_MAX,
        );
        check_range(&mut violations, &format!("{} degree", field), &education.degree, ENTITY_NAME_MIN, ENTITY_NAME_MAX);
        if let Some(study_field) = &education.field {
            check_max(&mut violations, &format!("{} field", field), study_field, TITLE_MAX);
        }
        if let Some(gpa) = education.gpa {
            if !(0.0..=GPA_MAX).contains(&gpa) {
                violations.push(ProfileViolation::GpaOutOfRange {
                    institution: education.institution.clone(),
                    gpa,
                });
            }
        }
    }

    if let Some(links) = &profile.links {
        for (name, url) in links.urls() {
            if !is_valid_url(url) {
                violations.push(ProfileViolation::InvalidLink {
                    field: format!("links.{}", name),
                    url: url.to_string(),
                });
            }
        }
    }

    violations
}

fn check_range(
    violations: &mut Vec<ProfileViolation>,
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) {
    let len = value.chars().count();
    if len < min {
        violations.push(ProfileViolation::FieldTooShort {
            field: field.to_string(),
            min,
            len,
        });
    } else if len > max {
        violations.push(ProfileViolation::FieldTooLong {
            field: field.to_string(),
            max,
            len,
        });
    }
}

fn check_max(violations: &mut Vec<ProfileViolation>, field: &str, value: &str, max: usize) {
    let len = value.chars().count();
    if len > max {
        violations.push(ProfileViolation::FieldTooLong {
            field: field.to_string(),
            max,
            len,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_profile() -> Profile {
        serde_json::from_str(
            r#"{
                "name": "Jane Doe",
                "email": "jane@example.com",
                "skills": [{"name": "rust", "level": "expert", "category": "backend"}],
                "projects": [{
                    "title": "Widget Service",
                    "description": "A long enough description.",
                    "links": ["https://example.com/widgets"],
                    "skills": ["rust"]
                }],
                "work": [{"company": "Acme", "position": "Engineer", "startDate": "2021-06-01"}],
                "education": [{"institution": "State University", "degree": "BSc", "gpa": 8.5}]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn clean_profile_has_no_violations() {
        assert!(validate_profile(&base_profile()).is_empty());
    }

    #[test]
    fn rejects_malformed_email() {
        let mut profile = base_profile();
        profile.email = "not-an-email".to_string();
        let violations = validate_profile(&profile);
        assert!(violations
            .iter()
            .any(|v| matches!(v, ProfileViolation::InvalidEmail(_))));
    }

    #[test]
    fn rejects_short_name_and_long_bio() {
        let mut profile = base_profile();
        profile.name = "J".to_string();
        profile.bio = Some("x".repeat(BIO_MAX + 1));
        let violations = validate_profile(&profile);
        assert!(violations
            .iter()
            .any(|v| matches!(v, ProfileViolation::FieldTooShort { .. })));
        assert!(violations
            .iter()
            .any(|v| matches!(v, ProfileViolation::FieldTooLong { .. })));
    }

    #[test]
    fn rejects_gpa_out_of_range() {
        let mut profile = base_profile();
        profile.education[0].gpa = Some(11.0);
        let violations = validate_profile(&profile);
        assert!(violations
            .iter()
            .any(|v| matches!(v, ProfileViolation::GpaOutOfRange { .. })));
    }

    #[test]
    fn rejects_non_url_project_link_but_allows_empty() {
        let mut profile = base_profile();
        profile.projects[0].links = vec!["".to_string(), "ftp://example.com".to_string()];
        let violations = validate_profile(&profile);
        assert_eq!(
            violations
                .iter()
                .filter(|v| matches!(v, ProfileViolation::InvalidLink { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn rejects_invalid_social_link() {
        let mut profile = base_profile();
        profile.links = Some(crate::core::profile::SocialLinks {
            github: Some("github.com/jane".to_string()),
            ..Default::default()
        });
        let violations = validate_profile(&profile);
        assert!(violations
            .iter()
            .any(|v| matches!(v, ProfileViolation::InvalidLink { .. })));
    }

    #[test]
    fn rejects_short_project_description() {
        let mut profile = base_profile();
        profile.projects[0].description = "tiny".to_string();
        let violations = validate_profile(&profile);
        assert!(violations
            .iter()
            .any(|v| matches!(v, ProfileViolation::FieldTooShort { .. })));
    }
}
