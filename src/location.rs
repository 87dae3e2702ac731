use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Where in the sources a compiler message points to.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path: Option<PathBuf>,
    #[serde(default)]
    line: u32,
    #[serde(default)]
    column: u32,
}

impl MessageLocation {
    /// Location of messages that are not tied to any file.
    pub const NONE: MessageLocation = MessageLocation {
        path: None,
        line: 0,
        column: 0,
    };

    pub fn new(path: impl Into<PathBuf>, line: u32, column: u32) -> Self {
        Self {
            path: Some(path.into()),
            line,
            column,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// Text put in front of a message, `"<path>: (<line>, <column>) "`.
    /// Empty when there is no path.
    pub fn prefix(&self) -> String {
        match &self.path {
            Some(path) => format!("{}: ({}, {}) ", path.display(), self.line, self.column),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_with_path() {
        assert_eq!(MessageLocation::new("Foo.kt", 3, 5).prefix(), "Foo.kt: (3, 5) ");
        assert_eq!(
            MessageLocation::new("src/main/kotlin/App.kt", 0, 0).prefix(),
            "src/main/kotlin/App.kt: (0, 0) "
        );
    }

    #[test]
    fn prefix_without_path() {
        assert_eq!(MessageLocation::NONE.prefix(), "");
        assert_eq!(MessageLocation::default(), MessageLocation::NONE);
    }

    #[test]
    fn deserialize_partial() {
        let location: MessageLocation = serde_json::from_str(r#"{"path":"A.kt","line":7}"#).unwrap();
        assert_eq!(location, MessageLocation::new("A.kt", 7, 0));

        let location: MessageLocation = serde_json::from_str("{}").unwrap();
        assert_eq!(location.path(), None);
    }
}
