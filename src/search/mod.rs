//! Search and filter engine for portfolio profiles
//!
//! Free-text search across all entity classes, skill-filtered project
//! pagination, proficiency ranking and category grouping.

pub mod engine;

pub use engine::{
    PagedProjects, Pagination, ProfileSummary, QueryError, SearchEngine, SearchResults,
    SkillsByCategory, MAX_PAGE_LIMIT,
};
