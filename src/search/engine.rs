//! Search engine over a resolved profile document.
//!
//! Every operation is a pure read of the borrowed profile: no I/O, no
//! shared state, results are cloned out in document order.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::core::profile::{
    EducationEntry, Profile, Project, Skill, SkillCategory, WorkEntry,
};

/// Upper bound on the pagination page size.
pub const MAX_PAGE_LIMIT: usize = 100;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    #[error("Search query is required")]
    InvalidQuery,
    #[error("Page must be a positive integer")]
    InvalidPage,
    #[error("Limit must be between 1 and 100")]
    InvalidLimit,
}

/// Profile-level summary included when name, title or bio match a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub name: String,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub email: String,
}

/// Free-text search result: matching entities per class, document order,
/// unbounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub profile: Option<ProfileSummary>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub work: Vec<WorkEntry>,
    pub education: Vec<EducationEntry>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.profile.is_none()
            && self.projects.is_empty()
            && self.skills.is_empty()
            && self.work.is_empty()
            && self.education.is_empty()
    }

    pub fn total_matches(&self) -> usize {
        usize::from(self.profile.is_some())
            + self.projects.len()
            + self.skills.len()
            + self.work.len()
            + self.education.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub pages: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagedProjects {
    pub data: Vec<Project>,
    pub pagination: Pagination,
}

/// Skills grouped per category. Key order is first-seen document order,
/// not the enum's declaration order; in-bucket order is document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillsByCategory {
    groups: Vec<(SkillCategory, Vec<Skill>)>,
}

impl SkillsByCategory {
    fn push(&mut self, skill: Skill) {
        match self.groups.iter().position(|(c, _)| *c == skill.category) {
            Some(idx) => self.groups[idx].1.push(skill),
            None => self.groups.push((skill.category, vec![skill])),
        }
    }

    pub fn groups(&self) -> &[(SkillCategory, Vec<Skill>)] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Serialize for SkillsByCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (category, skills) in &self.groups {
            map.serialize_entry(category.as_str(), skills)?;
        }
        map.end()
    }
}

/// Read-only query engine over a borrowed profile.
pub struct SearchEngine<'a> {
    profile: &'a Profile,
}

impl<'a> SearchEngine<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self { profile }
    }

    /// Case-insensitive substring search across every entity class.
    ///
    /// An empty result is valid; only an empty query is an error.
    pub fn search(&self, query: &str) -> Result<SearchResults, QueryError> {
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return Err(QueryError::InvalidQuery);
        }

        let profile = self.profile;

        let summary = if contains(&profile.name, &term)
            || opt_contains(profile.bio.as_deref(), &term)
            || opt_contains(profile.title.as_deref(), &term)
        {
            Some(ProfileSummary {
                name: profile.name.clone(),
                title: profile.title.clone(),
                bio: profile.bio.clone(),
                email: profile.email.clone(),
            })
        } else {
            None
        };

        let projects = profile
            .projects
            .iter()
            .filter(|p| {
                contains(&p.title, &term)
                    || contains(&p.description, &term)
                    || any_contains(&p.skills, &term)
            })
            .cloned()
            .collect();

        let skills = profile
            .skills
            .iter()
            .filter(|s| contains(&s.name, &term) || contains(s.category.as_str(), &term))
            .cloned()
            .collect();

        let work = profile
            .work
            .iter()
            .filter(|w| {
                contains(&w.company, &term)
                    || contains(&w.position, &term)
                    || opt_contains(w.description.as_deref(), &term)
                    || any_contains(&w.skills, &term)
            })
            .cloned()
            .collect();

        let education = profile
            .education
            .iter()
            .filter(|e| {
                contains(&e.institution, &term)
                    || contains(&e.degree, &term)
                    || opt_contains(e.field.as_deref(), &term)
            })
            .cloned()
            .collect();

        Ok(SearchResults {
            query: query.trim().to_string(),
            profile: summary,
            projects,
            skills,
            work,
            education,
        })
    }

    /// Projects whose skill list matches `skill`, paginated. A missing
    /// filter means all projects; a page past the end is a valid empty
    /// page, not an error.
    pub fn projects_by_skill(
        &self,
        skill: Option<&str>,
        page: usize,
        limit: usize,
    ) -> Result<PagedProjects, QueryError> {
        if page < 1 {
            return Err(QueryError::InvalidPage);
        }
        if limit < 1 || limit > MAX_PAGE_LIMIT {
            return Err(QueryError::InvalidLimit);
        }

        let filter = skill.map(str::to_lowercase);
        let candidates: Vec<&Project> = self
            .profile
            .projects
            .iter()
            .filter(|p| match &filter {
                Some(term) => any_contains(&p.skills, term),
                None => true,
            })
            .collect();

        let total = candidates.len();
        let pages = total.div_ceil(limit);
        let skip = (page - 1) * limit;

        let data = candidates
            .into_iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect();

        Ok(PagedProjects {
            data,
            pagination: Pagination {
                page,
                limit,
                total,
                pages,
            },
        })
    }

    /// The `limit` highest-ranked skills by proficiency. The sort is
    /// stable: equal levels keep their document order.
    pub fn top_skills(&self, limit: usize) -> Result<Vec<Skill>, QueryError> {
        if limit < 1 {
            return Err(QueryError::InvalidLimit);
        }

        let mut skills = self.profile.skills.clone();
        skills.sort_by_key(|s| std::cmp::Reverse(s.level.weight()));
        skills.truncate(limit);
        Ok(skills)
    }

    /// Flat list of skills in one category, document order.
    pub fn skills_in_category(&self, category: SkillCategory) -> Vec<Skill> {
        self.profile
            .skills
            .iter()
            .filter(|s| s.category == category)
            .cloned()
            .collect()
    }

    /// All skills grouped per category in a single pass.
    pub fn skills_by_category(&self) -> SkillsByCategory {
        let mut grouped = SkillsByCategory::default();
        for skill in &self.profile.skills {
            grouped.push(skill.clone());
        }
        grouped
    }
}

fn contains(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(term)
}

fn opt_contains(haystack: Option<&str>, term: &str) -> bool {
    haystack.map(|h| contains(h, term)).unwrap_or(false)
}

fn any_contains(haystacks: &[String], term: &str) -> bool {
    haystacks.iter().any(|h| contains(h, term))
}
