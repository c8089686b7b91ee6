//! Logical content sections of the site

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One of the site's content panels.
///
/// Exactly one section is displayed at a time; [`Section::Main`] is shown
/// whenever nothing else matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Main,
    Terms,
    Privacy,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Main, Section::Terms, Section::Privacy];

    /// Identifier used in inline markup and in history state
    pub fn id(&self) -> &'static str {
        match self {
            Section::Main => "main",
            Section::Terms => "terms",
            Section::Privacy => "privacy",
        }
    }

    /// Default DOM id of the block holding this section's content
    pub fn content_id(&self) -> &'static str {
        match self {
            Section::Main => "main-content",
            Section::Terms => "terms-content",
            Section::Privacy => "privacy-content",
        }
    }

    /// Parse an identifier, rejecting anything outside the closed set.
    pub fn parse(id: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.id() == id)
            .ok_or_else(|| Error::unknown_section(id))
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
