use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ContentKind, ContentRecord, FieldResultExt, ValidationError};
use crate::shared::sanitize::{optional_link, required_text};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BlogPost {
    pub title: String,
    pub excerpt: String,
    /// Publish date, `YYYY-MM-DD`.
    pub date: NaiveDate,
    #[serde(default)]
    pub link: String,
}

impl ContentRecord for BlogPost {
    const KIND: ContentKind = ContentKind::BlogPost;

    fn sanitize(self) -> Result<Self, ValidationError> {
        Ok(Self {
            title: required_text(&self.title).field("title")?,
            excerpt: required_text(&self.excerpt).field("excerpt")?,
            date: self.date,
            link: optional_link(&self.link).field("link")?,
        })
    }

    fn defaults() -> Vec<Self> {
        const DEFAULTS: &[(&str, (i32, u32, u32), &str)] = &[
            (
                "Deploying Microservices on AWS EKS with Helm",
                (2024, 11, 15),
                "A comprehensive guide to deploying and managing microservices on Amazon EKS \
                 using Helm charts and best practices for production environments.",
            ),
            (
                "Infrastructure as Code: Terraform vs CloudFormation",
                (2024, 11, 8),
                "An in-depth comparison of Terraform and AWS CloudFormation for infrastructure \
                 automation, covering pros, cons, and use cases.",
            ),
            (
                "Building CI/CD Pipelines with Jenkins and Docker",
                (2024, 10, 28),
                "Step-by-step tutorial on creating robust CI/CD pipelines using Jenkins, Docker, \
                 and GitHub for automated deployments.",
            ),
            (
                "Securing Your AWS Infrastructure",
                (2024, 10, 15),
                "Best practices for securing AWS infrastructure including IAM policies, VPC \
                 design, encryption, and security monitoring.",
            ),
            (
                "Ansible Automation: From Basics to Advanced",
                (2024, 10, 5),
                "Master Ansible for configuration management and deployment automation with \
                 practical examples and real-world scenarios.",
            ),
            (
                "Monitoring Kubernetes with Prometheus and Grafana",
                (2024, 9, 22),
                "Complete guide to setting up monitoring and alerting for Kubernetes clusters \
                 using Prometheus and Grafana.",
            ),
        ];

        DEFAULTS
            .iter()
            .filter_map(|(title, (y, m, d), excerpt)| {
                NaiveDate::from_ymd_opt(*y, *m, *d).map(|date| BlogPost {
                    title: title.to_string(),
                    excerpt: excerpt.to_string(),
                    date,
                    link: "#".to_string(),
                })
            })
            .collect()
    }

    fn recency(&self) -> Option<DateTime<Utc>> {
        Some(self.date.and_time(NaiveTime::MIN).and_utc())
    }
}
