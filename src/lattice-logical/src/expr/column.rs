//! Column references.

use serde::{Deserialize, Serialize};

/// Reference to a column, possibly qualified by an entity name or alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnRef {
    /// Optional qualifier (label, alias, or relationship type).
    pub qualifier: Option<String>,
    /// Column/property name.
    pub name: String,
}

impl ColumnRef {
    /// Create an unqualified column reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            qualifier: None,
            name: name.into(),
        }
    }

    /// Create a qualified column reference.
    pub fn qualified(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            qualifier: Some(qualifier.into()),
            name: name.into(),
        }
    }

    /// Parse a column reference from a string.
    ///
    /// `"column"` parses unqualified, `"Entity.column"` parses qualified.
    pub fn parse(s: &str) -> Self {
        if let Some((qualifier, name)) = s.split_once('.') {
            Self::qualified(qualifier, name)
        } else {
            Self::new(s)
        }
    }

    /// Whether this reference carries a qualifier.
    pub const fn is_qualified(&self) -> bool {
        self.qualifier.is_some()
    }

    /// The full display name, qualifier first.
    pub fn display_name(&self) -> String {
        self.qualifier
            .as_ref()
            .map_or_else(|| self.name.clone(), |q| format!("{q}.{}", self.name))
    }
}

impl std::fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let unqualified = ColumnRef::parse("name");
        assert!(!unqualified.is_qualified());
        assert_eq!(unqualified.name, "name");

        let qualified = ColumnRef::parse("Person.name");
        assert!(qualified.is_qualified());
        assert_eq!(qualified.qualifier, Some("Person".to_string()));
        assert_eq!(qualified.name, "name");
    }

    #[test]
    fn test_display() {
        assert_eq!(ColumnRef::new("name").display_name(), "name");
        assert_eq!(
            ColumnRef::qualified("Person", "name").display_name(),
            "Person.name"
        );
    }
}
