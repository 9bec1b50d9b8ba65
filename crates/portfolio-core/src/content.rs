//! Portfolio content model
//!
//! Everything the site presents is static data: a list of sections shown
//! one page at a time, and the projects displayed in the gallery section.
//! The bundled content lives in `content/portfolio.json` and is embedded at
//! compile time; an alternate document can be supplied with
//! [`Portfolio::from_json`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{PortfolioError, PortfolioResult};

const BUILTIN_CONTENT: &str = include_str!("../content/portfolio.json");

/// How a section is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Owner name with the typewriter tagline
    Intro,
    /// Titled card with one paragraph per body line
    #[default]
    Text,
    /// Titled card holding the project gallery
    Projects,
}

impl SectionKind {
    /// Lowercase name, matching the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::Intro => "intro",
            SectionKind::Text => "text",
            SectionKind::Projects => "projects",
        }
    }
}

/// A single full-viewport page of the portfolio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Stable identifier, also used as the URL path segment
    pub id: String,
    /// Title shown in the nav bar and as the card heading
    pub title: String,
    #[serde(default)]
    pub kind: SectionKind,
    /// Multi-line body text (unused for intro and projects sections)
    #[serde(default)]
    pub body: String,
}

impl Section {
    /// Body split into display lines. Blank lines are kept so paragraph
    /// spacing survives rendering.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.body.split('\n')
    }
}

/// A gallery entry linking out to a project artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Absolute http(s) URL to a document or repository
    pub link: String,
}

/// The complete content of the site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Name shown on the intro page
    pub owner: String,
    /// Text revealed by the typewriter on the intro page
    #[serde(default)]
    pub tagline: String,
    pub sections: Vec<Section>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Portfolio {
    /// Parse and validate a JSON content document.
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        let portfolio: Portfolio = serde_json::from_str(json)?;
        portfolio.validate()?;
        tracing::debug!(
            sections = portfolio.sections.len(),
            projects = portfolio.projects.len(),
            "Loaded portfolio content"
        );
        Ok(portfolio)
    }

    /// The content bundled with the binary.
    pub fn builtin() -> PortfolioResult<Self> {
        Self::from_json(BUILTIN_CONTENT)
    }

    /// Check the structural invariants the UI relies on.
    pub fn validate(&self) -> PortfolioResult<()> {
        if self.sections.is_empty() {
            return Err(PortfolioError::NoSections);
        }

        let mut seen = HashSet::new();
        let mut intro_seen = false;
        let mut projects_seen = false;

        for (i, section) in self.sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(PortfolioError::EmptySectionId(i));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(PortfolioError::DuplicateSection(section.id.clone()));
            }

            let flag = match section.kind {
                SectionKind::Intro => &mut intro_seen,
                SectionKind::Projects => &mut projects_seen,
                SectionKind::Text => continue,
            };
            if *flag {
                return Err(PortfolioError::DuplicateKind(section.kind.name()));
            }
            *flag = true;
        }

        for project in &self.projects {
            let valid = Url::parse(&project.link)
                .map(|url| matches!(url.scheme(), "http" | "https"))
                .unwrap_or(false);
            if !valid {
                return Err(PortfolioError::InvalidLink {
                    project: project.title.clone(),
                    link: project.link.clone(),
                });
            }
        }

        Ok(())
    }

    /// Position of the section with the given id.
    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
