//! Catalog identifiers
//!
//! Name + slug pairs used to reference sports, categories, competitions and
//! the two sides of an event.

use super::error::ValidationError;

/// Name/slug pair identifying a sport, category or competition
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    name: String,
    key: String,
}

impl Identifier {
    /// Create a new identifier. The key must not be empty.
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ValidationError::MissingKey);
        }

        Ok(Self {
            name: name.into(),
            key,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// One side (home or away) of an event.
///
/// A side the provider did not report is represented by the zero value,
/// where every field is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TeamIdentifier {
    name: String,
    key: String,
    abbreviation: String,
    nationality: String,
}

impl TeamIdentifier {
    /// Create a team identifier. An empty key yields the zero value.
    pub fn new(
        name: impl Into<String>,
        key: impl Into<String>,
        abbreviation: impl Into<String>,
        nationality: impl Into<String>,
    ) -> Self {
        let key = key.into();
        if key.is_empty() {
            return Self::default();
        }

        Self {
            name: name.into(),
            key,
            abbreviation: abbreviation.into(),
            nationality: nationality.into(),
        }
    }

    /// Whether this side is unknown
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    pub fn nationality(&self) -> &str {
        &self.nationality
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_requires_key() {
        assert_eq!(Identifier::new("Tennis", ""), Err(ValidationError::MissingKey));

        let id = Identifier::new("Tennis", "tennis").unwrap();
        assert_eq!(id.name(), "Tennis");
        assert_eq!(id.key(), "tennis");
    }

    #[test]
    fn test_team_identifier_without_key_is_zero() {
        let team = TeamIdentifier::new("Rafael Nadal", "", "NAD", "ES");
        assert!(team.is_zero());
        assert_eq!(team.name(), "");

        let team = TeamIdentifier::new("Rafael Nadal", "rafael-nadal", "NAD", "ES");
        assert!(!team.is_zero());
        assert_eq!(team.abbreviation(), "NAD");
        assert_eq!(team.nationality(), "ES");
    }
}
