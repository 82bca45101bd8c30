use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ContentKind, ContentRecord, FieldResultExt, ValidationError};
use crate::shared::sanitize::{clean_text, optional_link, required_text};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default, alias = "github")]
    pub code_url: String,
    #[serde(default, alias = "live")]
    pub live_url: String,
}

impl ContentRecord for Project {
    const KIND: ContentKind = ContentKind::Project;

    fn sanitize(self) -> Result<Self, ValidationError> {
        let mut tech = Vec::with_capacity(self.tech.len());
        for tag in &self.tech {
            let tag = clean_text(tag).field("tech")?;
            if !tag.is_empty() {
                tech.push(tag);
            }
        }

        Ok(Self {
            title: required_text(&self.title).field("title")?,
            description: required_text(&self.description).field("description")?,
            tech,
            code_url: optional_link(&self.code_url).field("code_url")?,
            live_url: optional_link(&self.live_url).field("live_url")?,
        })
    }

    fn defaults() -> Vec<Self> {
        const DEFAULTS: &[(&str, &str, &[&str])] = &[
            (
                "AWS Infrastructure Automation",
                "Automated AWS infrastructure deployment using Terraform and CloudFormation, \
                 including VPC, EC2, RDS, S3, and ELB configuration with IAM security policies.",
                &["AWS", "Terraform", "CloudFormation", "IAM", "VPC"],
            ),
            (
                "CI/CD Pipeline Implementation",
                "Built end-to-end CI/CD pipelines using Jenkins, GitHub, Maven, and SonarQube \
                 for automated build, test, and deployment of microservices.",
                &["Jenkins", "GitHub", "Maven", "SonarQube", "Docker"],
            ),
            (
                "Kubernetes Cluster on AWS EKS",
                "Deployed and managed production-ready Kubernetes clusters on AWS EKS with Helm \
                 charts, auto-scaling, and monitoring using Prometheus and Grafana.",
                &["Kubernetes", "AWS EKS", "Helm", "Prometheus", "Grafana"],
            ),
            (
                "Microservices Deployment with Docker",
                "Containerized Java REST APIs and deployed them using Docker and Amazon ECS. \
                 Implemented service discovery and load balancing.",
                &["Docker", "Amazon ECS", "Java", "Microservices", "REST API"],
            ),
            (
                "Configuration Management with Ansible",
                "Developed Ansible playbooks and roles for automated server configuration, \
                 application deployment, and infrastructure management across multiple environments.",
                &["Ansible", "Python", "Linux", "YAML", "Shell Scripting"],
            ),
            (
                "Hybrid Cloud Migration",
                "Planned and executed hybrid cloud migration from on-premises to AWS with minimal \
                 downtime. Implemented monitoring using ELK stack and New Relic.",
                &["AWS", "Azure", "ELK Stack", "New Relic", "Migration"],
            ),
        ];

        DEFAULTS
            .iter()
            .map(|(title, description, tech)| Project {
                title: title.to_string(),
                description: description.to_string(),
                tech: tech.iter().map(|t| t.to_string()).collect(),
                code_url: "#".to_string(),
                live_url: "#".to_string(),
            })
            .collect()
    }
}
