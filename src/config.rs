//! Startup configuration.
//!
//! Resolved once in `main` before the UI launches and read by the root
//! component. Desktop builds take it from the command line; web builds
//! use the bundled content with default settings, since the URL already
//! carries the starting section.

use std::sync::OnceLock;

use portfolio_core::{Portfolio, ThemeMode};

static STARTUP: OnceLock<Startup> = OnceLock::new();

/// Everything the app needs before first render
#[derive(Debug, Clone)]
pub struct Startup {
    /// Content to present, or the reason it could not be loaded
    pub content: Result<Portfolio, String>,
    /// Theme on first render
    pub theme: ThemeMode,
    /// Section id to open instead of the intro
    pub section: Option<String>,
}

impl Startup {
    /// Bundled content, light theme, starting at the intro
    pub fn bundled() -> Self {
        Self {
            content: Portfolio::builtin().map_err(|e| e.to_string()),
            theme: ThemeMode::default(),
            section: None,
        }
    }
}

/// Store the startup configuration. Only the first call has any effect.
pub fn install(startup: Startup) {
    if STARTUP.set(startup).is_err() {
        tracing::warn!("Startup configuration already installed, ignoring");
    }
}

/// The installed configuration, falling back to [`Startup::bundled`].
pub fn startup() -> &'static Startup {
    STARTUP.get_or_init(Startup::bundled)
}

/// Command line for the desktop window
#[cfg(feature = "desktop")]
pub mod cli {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;
    use portfolio_core::{Portfolio, ThemeMode};

    use super::Startup;

    /// Personal portfolio - section-by-section presentation
    #[derive(Parser, Debug)]
    #[command(name = "portfolio")]
    #[command(about = "Single-page personal portfolio")]
    pub struct Args {
        /// Initial theme (light or dark)
        #[arg(short, long, default_value_t = ThemeMode::Light)]
        pub theme: ThemeMode,

        /// Section id to open on launch (e.g. "projects")
        #[arg(short, long)]
        pub section: Option<String>,

        /// Alternate JSON content file instead of the bundled content
        #[arg(short, long)]
        pub content: Option<PathBuf>,
    }

    impl Args {
        /// Load content and resolve the starting section.
        ///
        /// Content errors are fatal here; an unknown section id only warns
        /// and falls back to the intro.
        pub fn into_startup(self) -> anyhow::Result<Startup> {
            let portfolio = match &self.content {
                Some(path) => {
                    let json = std::fs::read_to_string(path)
                        .with_context(|| format!("reading content file {}", path.display()))?;
                    Portfolio::from_json(&json)
                        .with_context(|| format!("loading content file {}", path.display()))?
                }
                None => Portfolio::builtin().context("loading bundled content")?,
            };

            let section = match self.section {
                Some(id) if portfolio.section_index(&id).is_some() => Some(id),
                Some(id) => {
                    tracing::warn!("Unknown section '{}', starting at the intro", id);
                    None
                }
                None => None,
            };

            Ok(Startup {
                content: Ok(portfolio),
                theme: self.theme,
                section,
            })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn parses_theme_and_section() {
            let args = Args::parse_from(["portfolio", "--theme", "dark", "-s", "skills"]);
            let startup = args.into_startup().unwrap();
            assert_eq!(startup.theme, ThemeMode::Dark);
            assert_eq!(startup.section.as_deref(), Some("skills"));
            assert!(startup.content.is_ok());
        }

        #[test]
        fn unknown_section_falls_back_to_intro() {
            let args = Args::parse_from(["portfolio", "--section", "blog"]);
            let startup = args.into_startup().unwrap();
            assert_eq!(startup.section, None);
        }

        #[test]
        fn rejects_unknown_theme() {
            assert!(Args::try_parse_from(["portfolio", "--theme", "sepia"]).is_err());
        }

        #[test]
        fn missing_content_file_is_an_error() {
            let args = Args::parse_from(["portfolio", "--content", "/nonexistent/portfolio.json"]);
            assert!(args.into_startup().is_err());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_startup() {
        let startup = Startup::bundled();
        assert!(startup.content.is_ok());
        assert_eq!(startup.theme, ThemeMode::Light);
        assert!(startup.section.is_none());
    }
}
