use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ContentKind, ContentRecord, FieldResultExt, ValidationError};
use crate::shared::sanitize::{
    clean_text, optional_email, optional_link, optional_reference, required_text,
};
use crate::media::application::domain::UploadPolicy;

/// Hero and about section. Optional fields are empty strings when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AboutProfile {
    pub name: String,
    pub role: String,
    pub bio: String,
    #[serde(default)]
    pub profile_image: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
}

impl ContentRecord for AboutProfile {
    const KIND: ContentKind = ContentKind::About;

    fn sanitize(self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_text(&self.name).field("name")?,
            role: required_text(&self.role).field("role")?,
            bio: required_text(&self.bio).field("bio")?,
            profile_image: optional_reference(&self.profile_image, UploadPolicy::IMAGE_MIME_TYPES)
                .field("profile_image")?,
            location: clean_text(&self.location).field("location")?,
            email: optional_email(&self.email).field("email")?,
            phone: clean_text(&self.phone).field("phone")?,
            linkedin: optional_link(&self.linkedin).field("linkedin")?,
            github: optional_link(&self.github).field("github")?,
        })
    }

    fn defaults() -> Vec<Self> {
        vec![AboutProfile {
            name: "Portfolio Owner".to_string(),
            role: "DevOps Engineer".to_string(),
            bio: "A cloud enthusiastic team player with 2+ years of experience in \
                  DevOps and cloud engineering. Passionate about automating \
                  infrastructure, building reliable CI/CD pipelines and running \
                  containerized workloads in production."
                .to_string(),
            profile_image: String::new(),
            location: "Hyderabad, India".to_string(),
            email: "hello@example.com".to_string(),
            phone: String::new(),
            linkedin: "https://www.linkedin.com/".to_string(),
            github: "https://github.com/".to_string(),
        }]
    }
}
