//! Error types for the portfolio

use thiserror::Error;

/// Main error type for portfolio content and configuration
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Content document could not be parsed
    #[error("Content parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Content has no sections to present
    #[error("Portfolio has no sections")]
    NoSections,

    /// A section was declared without an id
    #[error("Section {0} has an empty id")]
    EmptySectionId(usize),

    /// Two sections share the same id
    #[error("Duplicate section id: {0}")]
    DuplicateSection(String),

    /// A section kind that may appear only once appears twice
    #[error("More than one {0} section")]
    DuplicateKind(&'static str),

    /// A project link is not an absolute web URL
    #[error("Project '{project}' has an invalid link: {link}")]
    InvalidLink { project: String, link: String },

    /// Theme name did not match a known mode
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::DuplicateSection("about".to_string());
        assert_eq!(format!("{}", err), "Duplicate section id: about");

        let err = PortfolioError::InvalidLink {
            project: "Church App".to_string(),
            link: "ftp://example.com".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Project 'Church App' has an invalid link: ftp://example.com"
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PortfolioError = json_err.into();
        assert!(matches!(err, PortfolioError::Json(_)));
    }
}
