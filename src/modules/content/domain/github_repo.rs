use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ContentKind, ContentRecord, FieldResultExt, ValidationError};
use crate::shared::sanitize::{clean_text, required_link, required_text, FieldError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GithubRepo {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stars: i64,
    #[serde(default)]
    pub forks: i64,
    #[serde(default)]
    pub language: String,
    pub url: String,
}

fn non_negative(value: i64, field: &'static str) -> Result<i64, ValidationError> {
    if value < 0 {
        return Err(ValidationError::new(field, FieldError::Negative));
    }
    Ok(value)
}

impl ContentRecord for GithubRepo {
    const KIND: ContentKind = ContentKind::GithubRepo;

    fn sanitize(self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_text(&self.name).field("name")?,
            description: clean_text(&self.description).field("description")?,
            stars: non_negative(self.stars, "stars")?,
            forks: non_negative(self.forks, "forks")?,
            language: clean_text(&self.language).field("language")?,
            url: required_link(&self.url).field("url")?,
        })
    }

    fn defaults() -> Vec<Self> {
        const DEFAULTS: &[(&str, &str, i64, i64, &str)] = &[
            (
                "aws-terraform-infrastructure",
                "Production-ready AWS infrastructure as code using Terraform",
                45,
                12,
                "HCL",
            ),
            (
                "kubernetes-helm-charts",
                "Collection of Helm charts for deploying applications on Kubernetes",
                38,
                9,
                "YAML",
            ),
            (
                "jenkins-pipeline-library",
                "Reusable Jenkins pipeline scripts for CI/CD automation",
                52,
                15,
                "Groovy",
            ),
            (
                "ansible-playbooks",
                "Ansible playbooks for server configuration and deployment",
                31,
                8,
                "YAML",
            ),
        ];

        DEFAULTS
            .iter()
            .map(|(name, description, stars, forks, language)| GithubRepo {
                name: name.to_string(),
                description: description.to_string(),
                stars: *stars,
                forks: *forks,
                language: language.to_string(),
                url: "https://github.com/".to_string(),
            })
            .collect()
    }
}
