use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where an uploaded file ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UploadTarget {
    ProfileImage,
    Resume,
}

impl UploadTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            UploadTarget::ProfileImage => "profile-image",
            UploadTarget::Resume => "resume",
        }
    }
}

impl fmt::Display for UploadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UploadTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "profile-image" => Ok(UploadTarget::ProfileImage),
            "resume" => Ok(UploadTarget::Resume),
            other => Err(format!("unknown upload target '{other}'")),
        }
    }
}

/// Size ceilings per target, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadLimits {
    pub max_image_bytes: u64,
    pub max_resume_bytes: u64,
}

impl UploadLimits {
    pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;
    pub const DEFAULT_MAX_RESUME_BYTES: u64 = 10 * 1024 * 1024;
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_image_bytes: Self::DEFAULT_MAX_IMAGE_BYTES,
            max_resume_bytes: Self::DEFAULT_MAX_RESUME_BYTES,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub allowed_mime_types: &'static [&'static str],
}

impl UploadPolicy {
    pub const IMAGE_MIME_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/png", "image/webp", "image/gif"];
    pub const RESUME_MIME_TYPES: &'static [&'static str] = &["application/pdf"];

    pub fn for_target(target: UploadTarget, limits: &UploadLimits) -> Self {
        match target {
            UploadTarget::ProfileImage => Self {
                max_file_size_bytes: limits.max_image_bytes,
                allowed_mime_types: Self::IMAGE_MIME_TYPES,
            },
            UploadTarget::Resume => Self {
                max_file_size_bytes: limits.max_resume_bytes,
                allowed_mime_types: Self::RESUME_MIME_TYPES,
            },
        }
    }

    pub fn allows(&self, mime_type: &str) -> bool {
        self.allowed_mime_types.contains(&mime_type)
    }
}

/// Checks the leading bytes against the declared media type.
pub fn matches_signature(mime_type: &str, bytes: &[u8]) -> bool {
    match mime_type {
        "image/jpeg" => bytes.starts_with(&[0xFF, 0xD8, 0xFF]),
        "image/png" => bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
        "image/gif" => bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a"),
        "image/webp" => bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP",
        "application/pdf" => bytes.starts_with(b"%PDF-"),
        _ => false,
    }
}
