use std::sync::Arc;
use std::time::Duration;

use crate::content::{
    application::{
        ports::{incoming::use_cases::ManageContent, outgoing::ContentStore},
        services::ContentService,
    },
    domain::{
        AboutProfile, BlogPost, ContactMessage, ContentRecord, GithubRepo, Project, ResumeLink,
        Skill,
    },
};

/// One repository per content type.
#[derive(Clone)]
pub struct ContentUseCases {
    pub about: Arc<dyn ManageContent<AboutProfile>>,
    pub skills: Arc<dyn ManageContent<Skill>>,
    pub projects: Arc<dyn ManageContent<Project>>,
    pub blog_posts: Arc<dyn ManageContent<BlogPost>>,
    pub github_repos: Arc<dyn ManageContent<GithubRepo>>,
    pub messages: Arc<dyn ManageContent<ContactMessage>>,
    pub resume: Arc<dyn ManageContent<ResumeLink>>,
}

impl ContentUseCases {
    pub fn with_store(store: Arc<dyn ContentStore>, timeout: Duration) -> Self {
        fn repo<T: ContentRecord>(
            store: &Arc<dyn ContentStore>,
            timeout: Duration,
        ) -> Arc<dyn ManageContent<T>> {
            Arc::new(ContentService::<T>::new(store.clone(), timeout))
        }

        Self {
            about: repo(&store, timeout),
            skills: repo(&store, timeout),
            projects: repo(&store, timeout),
            blog_posts: repo(&store, timeout),
            github_repos: repo(&store, timeout),
            messages: repo(&store, timeout),
            resume: repo(&store, timeout),
        }
    }
}
