//! State object stored with each history entry

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::section::Section;

/// History entry state, `{ "section": "<identifier>" }` on the wire.
///
/// The identifier is kept as a raw string so entries written by other code
/// (or older builds) can be carried around without failing to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub section: String,
}

impl NavigationState {
    pub fn new(section: Section) -> Self {
        Self {
            section: section.id().to_string(),
        }
    }

    /// The stored section, if it is one we know.
    pub fn section(&self) -> Option<Section> {
        Section::parse(&self.section).ok()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a state object, returning `None` for `null`, non-objects and
    /// objects without a string `section` field.
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str::<Option<Self>>(json).ok().flatten()
    }
}

impl From<Section> for NavigationState {
    fn from(section: Section) -> Self {
        Self::new(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let json = NavigationState::new(Section::Privacy).to_json().unwrap();
        assert_eq!(json, r#"{"section":"privacy"}"#);
    }

    #[test]
    fn test_from_json_known_section() {
        let state = NavigationState::from_json(r#"{"section":"terms"}"#).unwrap();
        assert_eq!(state.section(), Some(Section::Terms));
    }

    #[test]
    fn test_from_json_ignores_extra_fields() {
        let state = NavigationState::from_json(r#"{"section":"main","scroll":12}"#).unwrap();
        assert_eq!(state.section(), Some(Section::Main));
    }

    #[test]
    fn test_from_json_legacy_entries() {
        assert_eq!(NavigationState::from_json("null"), None);
        assert_eq!(NavigationState::from_json("{}"), None);
        assert_eq!(NavigationState::from_json(r#""terms""#), None);
        assert_eq!(NavigationState::from_json(r#"{"section":3}"#), None);
        assert_eq!(NavigationState::from_json(""), None);
    }

    #[test]
    fn test_unknown_section_decodes_but_does_not_parse() {
        let state = NavigationState::from_json(r#"{"section":"blog"}"#).unwrap();
        assert_eq!(state.section, "blog");
        assert_eq!(state.section(), None);
    }
}
