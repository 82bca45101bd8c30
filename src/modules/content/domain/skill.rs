use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{ContentKind, ContentRecord, FieldResultExt, Stored, ValidationError};
use crate::shared::sanitize::required_text;

pub const MIN_LEVEL: i64 = 0;
pub const MAX_LEVEL: i64 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub category: String,
    pub name: String,
    pub level: i64,
}

impl ContentRecord for Skill {
    const KIND: ContentKind = ContentKind::Skill;

    fn sanitize(self) -> Result<Self, ValidationError> {
        Ok(Self {
            category: required_text(&self.category).field("category")?,
            name: required_text(&self.name).field("name")?,
            level: self.level.clamp(MIN_LEVEL, MAX_LEVEL),
        })
    }

    fn defaults() -> Vec<Self> {
        const DEFAULTS: &[(&str, &[(&str, i64)])] = &[
            (
                "Cloud Platforms",
                &[("AWS (EC2, S3, RDS, Lambda, EKS)", 90), ("Microsoft Azure", 75)],
            ),
            (
                "Containerization & Orchestration",
                &[("Docker", 90), ("Kubernetes (EKS, Helm)", 85), ("Amazon ECS", 80)],
            ),
            (
                "CI/CD & Automation",
                &[("Jenkins", 90), ("GitHub Actions", 85), ("Maven", 80)],
            ),
            (
                "Infrastructure as Code",
                &[("Terraform", 85), ("Ansible", 85), ("CloudFormation", 80)],
            ),
            (
                "Version Control",
                &[("Git", 90), ("GitHub", 90), ("Bitbucket", 85)],
            ),
            (
                "Operating Systems",
                &[("Linux (RHEL, CentOS, Ubuntu)", 90), ("Shell Scripting (Bash)", 85)],
            ),
            (
                "Databases",
                &[("MySQL", 80), ("PostgreSQL", 80), ("MongoDB", 75)],
            ),
            (
                "Programming & Scripting",
                &[("Python", 85), ("Shell Scripting", 90), ("Groovy", 75)],
            ),
        ];

        DEFAULTS
            .iter()
            .flat_map(|(category, skills)| {
                skills.iter().map(move |(name, level)| Skill {
                    category: category.to_string(),
                    name: name.to_string(),
                    level: *level,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CategorySkill {
    pub id: Uuid,
    pub name: String,
    pub level: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<CategorySkill>,
}

/// Groups skills by category, keeping the order in which categories first appear.
pub fn group_by_category(skills: &[Stored<Skill>]) -> Vec<SkillCategory> {
    let mut groups: Vec<SkillCategory> = Vec::new();

    for stored in skills {
        let entry = CategorySkill {
            id: stored.id,
            name: stored.record.name.clone(),
            level: stored.record.level,
        };

        match groups
            .iter_mut()
            .find(|group| group.title == stored.record.category)
        {
            Some(group) => group.skills.push(entry),
            None => groups.push(SkillCategory {
                title: stored.record.category.clone(),
                skills: vec![entry],
            }),
        }
    }

    groups
}
