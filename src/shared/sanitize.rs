//! Boundary sanitization for user-supplied text and links.
//!
//! Everything that ends up in the content store passes through here first:
//! text is trimmed and stripped of control characters, anything that looks
//! like an HTML tag is refused, and links are restricted to schemes that are
//! safe to drop into an `href`.

use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("is required")]
    Blank,

    #[error("must not contain markup")]
    Markup,

    #[error("is not a valid email address")]
    InvalidEmail,

    #[error("is not an allowed link")]
    InvalidLink,

    #[error("must not be negative")]
    Negative,
}

const SAFE_LINK_PREFIXES: &[&str] = &["https://", "http://", "mailto:", "/", "#"];

fn markup_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<[A-Za-z/!?]").expect("static markup pattern"))
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"))
}

fn base64_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9+/]+=*$").expect("static base64 pattern"))
}

/// Trim, drop control characters (newlines and tabs survive), refuse markup.
pub fn clean_text(raw: &str) -> Result<String, FieldError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect();
    let cleaned = cleaned.trim();

    if markup_pattern().is_match(cleaned) {
        return Err(FieldError::Markup);
    }

    Ok(cleaned.to_string())
}

pub fn required_text(raw: &str) -> Result<String, FieldError> {
    let cleaned = clean_text(raw)?;
    if cleaned.is_empty() {
        return Err(FieldError::Blank);
    }
    Ok(cleaned)
}

pub fn is_valid_email(raw: &str) -> bool {
    email_pattern().is_match(raw)
}

pub fn required_email(raw: &str) -> Result<String, FieldError> {
    let cleaned = required_text(raw)?;
    if !is_valid_email(&cleaned) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(cleaned)
}

/// Empty stays empty; anything else must be a valid address.
pub fn optional_email(raw: &str) -> Result<String, FieldError> {
    let cleaned = clean_text(raw)?;
    if cleaned.is_empty() {
        return Ok(cleaned);
    }
    if !is_valid_email(&cleaned) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(cleaned)
}

fn is_safe_link(link: &str) -> bool {
    if link.chars().any(char::is_whitespace) {
        return false;
    }
    // `//host` and `/\host` are protocol-relative in browsers
    if link.starts_with("//") || link.starts_with("/\\") {
        return false;
    }
    let lower = link.to_ascii_lowercase();
    SAFE_LINK_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
}

/// Empty is allowed (the field is simply not shown).
pub fn optional_link(raw: &str) -> Result<String, FieldError> {
    let cleaned = clean_text(raw)?;
    if cleaned.is_empty() {
        return Ok(cleaned);
    }
    if !is_safe_link(&cleaned) {
        return Err(FieldError::InvalidLink);
    }
    Ok(cleaned)
}

pub fn required_link(raw: &str) -> Result<String, FieldError> {
    let cleaned = optional_link(raw)?;
    if cleaned.is_empty() {
        return Err(FieldError::Blank);
    }
    Ok(cleaned)
}

/// `data:<media type>;base64,<payload>` with the media type in `allowed`
/// and nothing but base64 in the payload.
fn is_allowed_data_url(rest: &str, allowed: &[&str]) -> bool {
    let Some((media_type, payload)) = rest.split_once(";base64,") else {
        return false;
    };
    allowed
        .iter()
        .any(|allowed| media_type.eq_ignore_ascii_case(allowed))
        && base64_pattern().is_match(payload)
}

/// A link, or an embedded `data:` reference whose media type is one of
/// `allowed_media_types`.
pub fn optional_reference(raw: &str, allowed_media_types: &[&str]) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if let Some(rest) = trimmed.strip_prefix("data:") {
        if is_allowed_data_url(rest, allowed_media_types) {
            return Ok(trimmed.to_string());
        }
        return Err(FieldError::InvalidLink);
    }
    optional_link(trimmed)
}

pub fn required_reference(raw: &str, allowed_media_types: &[&str]) -> Result<String, FieldError> {
    let cleaned = optional_reference(raw, allowed_media_types)?;
    if cleaned.is_empty() {
        return Err(FieldError::Blank);
    }
    Ok(cleaned)
}
