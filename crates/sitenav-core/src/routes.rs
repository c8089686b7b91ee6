//! Route table mapping sections to URL paths

use crate::error::{Error, Result};
use crate::section::Section;

/// Path recorded when a section has no entry in the table
pub const FALLBACK_PATH: &str = "/";

/// Built-in routes of the site
pub const DEFAULT_ROUTES: &[(Section, &str)] = &[
    (Section::Main, "/"),
    (Section::Terms, "/terminos"),
    (Section::Privacy, "/privacidad"),
];

/// Immutable section → path mapping.
///
/// Sections and paths are each unique and `main` is always present, so
/// [`RouteTable::resolve`] can use it as the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<(Section, String)>,
}

impl RouteTable {
    /// Build a table, validating its invariants.
    pub fn new<I, P>(routes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Section, P)>,
        P: Into<String>,
    {
        let mut entries: Vec<(Section, String)> = Vec::new();

        for (section, path) in routes {
            let path = path.into();
            if !path.starts_with('/') {
                return Err(Error::invalid_routes(format!(
                    "path {path:?} for section {section} must start with '/'"
                )));
            }
            if entries.iter().any(|(s, _)| *s == section) {
                return Err(Error::invalid_routes(format!(
                    "section {section} is mapped more than once"
                )));
            }
            if let Some((other, _)) = entries.iter().find(|(_, p)| *p == path) {
                return Err(Error::invalid_routes(format!(
                    "path {path:?} is shared by {other} and {section}"
                )));
            }
            entries.push((section, path));
        }

        if !entries.iter().any(|(s, _)| *s == Section::Main) {
            return Err(Error::invalid_routes("section main is missing"));
        }

        Ok(Self { entries })
    }

    /// Path for a section, or [`FALLBACK_PATH`] if the table lacks it
    pub fn path_for(&self, section: Section) -> &str {
        self.entries
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, p)| p.as_str())
            .unwrap_or(FALLBACK_PATH)
    }

    /// Section whose path equals `path` exactly, or [`Section::Main`].
    pub fn resolve(&self, path: &str) -> Section {
        self.entries
            .iter()
            .find(|(_, p)| p == path)
            .map(|(s, _)| *s)
            .unwrap_or(Section::Main)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Section, &str)> {
        self.entries.iter().map(|(s, p)| (*s, p.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ROUTES
                .iter()
                .map(|(s, p)| (*s, (*p).to_string()))
                .collect(),
        }
    }
}
