//! Core profile document model, store and schema validation.

pub mod profile;
pub mod schema;
pub mod store;

pub use profile::{
    EducationEntry, Profile, Project, ProjectStatus, Skill, SkillCategory, SkillLevel,
    SocialLinks, WorkEntry,
};
pub use schema::{validate_profile, ProfileViolation};
pub use store::ProfileStore;
