//! Profile schema definitions
//!
//! Defines the declarative schema for encoding profile tables. The
//! schema names the identifier column, which columns carry numeric
//! features, which carry categorical features, and which categorical
//! columns hold comma-separated value lists worth harvesting for
//! suggestions.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Profile schema version 1
///
/// Declares how a profile table turns into feature vectors. Column
/// order in the lists is meaningful: encoded blocks are laid out in
/// declared order, and harvested columns are visited in declared order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileSchema {
    /// Schema version for future compatibility
    #[serde(default = "default_version")]
    pub version: u32,

    /// Column holding the record identifier
    pub id_column: String,

    /// Columns standardized to zero mean and unit variance
    #[serde(default)]
    pub numeric: Vec<String>,

    /// Columns one-hot encoded over their observed values
    #[serde(default)]
    pub categorical: Vec<String>,

    /// Categorical columns holding comma-separated value lists
    #[serde(default)]
    pub multivalue: Vec<String>,
}

fn default_version() -> u32 {
    1
}

impl ProfileSchema {
    /// Create a new schema with the given column lists
    pub fn new(
        id_column: impl Into<String>,
        numeric: Vec<String>,
        categorical: Vec<String>,
        multivalue: Vec<String>,
    ) -> Self {
        Self {
            version: 1,
            id_column: id_column.into(),
            numeric,
            categorical,
            multivalue,
        }
    }

    /// The built-in lifestyle profile schema
    ///
    /// Matches the dataset the engine ships against: five numeric
    /// attributes plus ten comma-separated interest columns, with
    /// hobbies and clubs harvested for suggestions.
    #[must_use]
    pub fn lifestyle() -> Self {
        let numeric = [
            "age",
            "height",
            "weight",
            "spice_tolerance",
            "social_media_hours",
        ];
        let categorical = [
            "favorite_cuisines",
            "movie_genres",
            "series_genres",
            "gaming_platforms",
            "music_genres",
            "reading_genres",
            "shopping_preferences",
            "travel_destinations",
            "hobbies",
            "clubs",
        ];
        let multivalue = ["hobbies", "clubs"];
        Self::new(
            "user_id",
            numeric.iter().map(|s| s.to_string()).collect(),
            categorical.iter().map(|s| s.to_string()).collect(),
            multivalue.iter().map(|s| s.to_string()).collect(),
        )
    }

    /// Validate the schema
    /// - The identifier column must be named
    /// - At least one feature column must be declared
    /// - No column may be declared twice, and the identifier cannot be a feature
    /// - Harvested columns must be declared categorical
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.id_column.is_empty() {
            return Err(SchemaError::MissingIdColumn);
        }
        if self.numeric.is_empty() && self.categorical.is_empty() {
            return Err(SchemaError::NoFeatureColumns);
        }

        let mut seen = AHashSet::new();
        for name in self.feature_columns() {
            if !seen.insert(name.as_str()) {
                return Err(SchemaError::DuplicateColumn(name.clone()));
            }
            if *name == self.id_column {
                return Err(SchemaError::IdentifierIsFeature(name.clone()));
            }
        }

        let mut seen_multivalue = AHashSet::new();
        for name in &self.multivalue {
            if !seen_multivalue.insert(name.as_str()) {
                return Err(SchemaError::DuplicateColumn(name.clone()));
            }
            if !self.categorical.contains(name) {
                return Err(SchemaError::MultivalueNotCategorical(name.clone()));
            }
        }

        Ok(())
    }

    /// Parse a schema from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let schema: Self =
            serde_json::from_str(json).map_err(|e| SchemaError::Parse(e.to_string()))?;
        schema.validate()?;
        Ok(schema)
    }

    /// All feature columns in encoding order: numeric first, then categorical
    pub fn feature_columns(&self) -> impl Iterator<Item = &String> {
        self.numeric.iter().chain(self.categorical.iter())
    }
}

/// Errors that can occur during schema validation
#[derive(Debug, Clone, thiserror::Error)]
pub enum SchemaError {
    #[error("Schema must declare at least one feature column")]
    NoFeatureColumns,

    #[error("Schema must name an identifier column")]
    MissingIdColumn,

    #[error("Column '{0}' is declared more than once")]
    DuplicateColumn(String),

    #[error("Identifier column '{0}' cannot also be a feature column")]
    IdentifierIsFeature(String),

    #[error("Multi-value column '{0}' must also be declared categorical")]
    MultivalueNotCategorical(String),

    #[error("Invalid schema JSON: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_schema_creation() {
        let schema = ProfileSchema::new(
            "user_id",
            strings(&["age"]),
            strings(&["hobbies"]),
            strings(&["hobbies"]),
        );
        assert_eq!(schema.version, 1);
        assert_eq!(schema.numeric.len(), 1);
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_lifestyle_schema_is_valid() {
        let schema = ProfileSchema::lifestyle();
        assert!(schema.validate().is_ok());
        assert_eq!(schema.id_column, "user_id");
        assert_eq!(schema.numeric.len(), 5);
        assert_eq!(schema.categorical.len(), 10);
        assert_eq!(schema.multivalue, strings(&["hobbies", "clubs"]));
    }

    #[test]
    fn test_no_feature_columns_error() {
        let schema = ProfileSchema::new("user_id", vec![], vec![], vec![]);
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::NoFeatureColumns)
        ));
    }

    #[test]
    fn test_missing_id_column_error() {
        let schema = ProfileSchema::new("", strings(&["age"]), vec![], vec![]);
        assert!(matches!(schema.validate(), Err(SchemaError::MissingIdColumn)));
    }

    #[test]
    fn test_duplicate_column_error() {
        let schema = ProfileSchema::new("user_id", strings(&["age", "age"]), vec![], vec![]);
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::DuplicateColumn(name)) if name == "age"
        ));

        let schema = ProfileSchema::new(
            "user_id",
            strings(&["age"]),
            strings(&["age"]),
            vec![],
        );
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::DuplicateColumn(_))
        ));
    }

    #[test]
    fn test_identifier_is_feature_error() {
        let schema = ProfileSchema::new("age", strings(&["age"]), vec![], vec![]);
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::IdentifierIsFeature(_))
        ));
    }

    #[test]
    fn test_multivalue_not_categorical_error() {
        let schema = ProfileSchema::new(
            "user_id",
            strings(&["age"]),
            vec![],
            strings(&["hobbies"]),
        );
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::MultivalueNotCategorical(name)) if name == "hobbies"
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let schema = ProfileSchema::lifestyle();
        let json = serde_json::to_string(&schema).unwrap();
        let parsed: ProfileSchema = serde_json::from_str(&json).unwrap();

        assert_eq!(schema, parsed);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "id_column": "user_id",
            "numeric": ["age"],
            "categorical": ["hobbies"],
            "multivalue": ["hobbies"]
        }"#;
        let schema = ProfileSchema::from_json(json).unwrap();
        assert_eq!(schema.version, 1);
        assert_eq!(schema.id_column, "user_id");

        assert!(matches!(
            ProfileSchema::from_json("{not json"),
            Err(SchemaError::Parse(_))
        ));
        assert!(matches!(
            ProfileSchema::from_json(r#"{"id_column": "user_id"}"#),
            Err(SchemaError::NoFeatureColumns)
        ));
    }
}
