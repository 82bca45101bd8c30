mod about;
mod blog_post;
mod contact_message;
mod github_repo;
mod kind;
mod project;
mod record;
mod resume_link;
mod skill;
mod validation;

pub use about::AboutProfile;
pub use blog_post::BlogPost;
pub use contact_message::{ContactMessage, ContactSubmission};
pub use github_repo::GithubRepo;
pub use kind::ContentKind;
pub use project::Project;
pub use record::{ContentRecord, Stored};
pub use resume_link::ResumeLink;
pub use skill::{group_by_category, CategorySkill, Skill, SkillCategory};
pub use validation::{FieldResultExt, ValidationError};
