//! Portfolio item types and field validation.

use crate::error::CoreError;

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_URL_LEN: usize = 500;
pub const MAX_FILENAME_LEN: usize = 255;

define_label_enum! {
    /// Kind of portfolio entry.
    ItemType ("portfolio item type") {
        Project => "Project",
        Certificate => "Certificate",
        CaseStudy => "Case Study",
        Publication => "Publication",
        Other => "Other",
    }
}

impl Default for ItemType {
    fn default() -> Self {
        ItemType::Other
    }
}

/// Validate a portfolio title: non-blank, at most [`MAX_TITLE_LEN`] chars.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Title must not be empty".to_string()));
    }
    if trimmed.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate an external link. Only absolute http(s) URLs are accepted.
pub fn validate_link_url(url: &str) -> Result<(), CoreError> {
    if url.len() > MAX_URL_LEN {
        return Err(CoreError::Validation(format!(
            "Link URL must be at most {MAX_URL_LEN} characters"
        )));
    }
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => Ok(()),
        _ => Err(CoreError::Validation(format!(
            "Link URL '{url}' must be an absolute http(s) URL"
        ))),
    }
}

/// Validate a stored file name. Must be a bare name, never a path.
pub fn validate_file_name(name: &str) -> Result<(), CoreError> {
    if name.is_empty() || name.len() > MAX_FILENAME_LEN {
        return Err(CoreError::Validation(format!(
            "File name must be 1 to {MAX_FILENAME_LEN} characters"
        )));
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(CoreError::Validation(
            "File name must not contain path separators".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_bounds() {
        assert!(validate_title("Sales dashboard").is_ok());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"x".repeat(MAX_TITLE_LEN)).is_ok());
        assert!(validate_title(&"x".repeat(MAX_TITLE_LEN + 1)).is_err());
    }

    #[test]
    fn link_url_requires_http_scheme() {
        assert!(validate_link_url("https://github.com/me/project").is_ok());
        assert!(validate_link_url("http://example.com").is_ok());
        assert!(validate_link_url("ftp://example.com").is_err());
        assert!(validate_link_url("https://").is_err());
        assert!(validate_link_url("https://exa mple.com").is_err());
    }

    #[test]
    fn file_name_rejects_paths() {
        assert!(validate_file_name("cv.pdf").is_ok());
        assert!(validate_file_name("../etc/passwd").is_err());
        assert!(validate_file_name("a\\b.pdf").is_err());
        assert!(validate_file_name("").is_err());
    }

    #[test]
    fn item_type_defaults_to_other() {
        assert_eq!(ItemType::default(), ItemType::Other);
        assert_eq!("Case Study".parse::<ItemType>().unwrap(), ItemType::CaseStudy);
    }
}
