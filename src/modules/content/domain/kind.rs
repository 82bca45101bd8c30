use serde::{Deserialize, Serialize};
use std::fmt;

/// The content types managed by the CMS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    About,
    Skill,
    Project,
    BlogPost,
    GithubRepo,
    ContactMessage,
    ResumeLink,
}

impl ContentKind {
    pub const ALL: [ContentKind; 7] = [
        ContentKind::About,
        ContentKind::Skill,
        ContentKind::Project,
        ContentKind::BlogPost,
        ContentKind::GithubRepo,
        ContentKind::ContactMessage,
        ContentKind::ResumeLink,
    ];

    /// Value of the `kind` column in `content_records`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::About => "about",
            ContentKind::Skill => "skill",
            ContentKind::Project => "project",
            ContentKind::BlogPost => "blog_post",
            ContentKind::GithubRepo => "github_repo",
            ContentKind::ContactMessage => "contact_message",
            ContentKind::ResumeLink => "resume_link",
        }
    }

    /// Collection key used by the local store snapshot.
    pub fn storage_key(&self) -> &'static str {
        match self {
            ContentKind::About => "aboutData",
            ContentKind::Skill => "skillsData",
            ContentKind::Project => "projectsData",
            ContentKind::BlogPost => "blogData",
            ContentKind::GithubRepo => "githubRepos",
            ContentKind::ContactMessage => "contactMessages",
            ContentKind::ResumeLink => "resumeUrl",
        }
    }

    /// At most one record of this kind may exist.
    pub fn is_singleton(&self) -> bool {
        matches!(self, ContentKind::About | ContentKind::ResumeLink)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
