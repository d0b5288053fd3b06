use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything registered with the pipeline, as served by `/schema`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaListing {
    /// Registered table names
    #[serde(default)]
    pub tables: Vec<String>,
    /// Column names per table, local columns included
    #[serde(default)]
    pub columns: BTreeMap<String, Vec<String>>,
    /// Registered step names
    #[serde(default)]
    pub steps: Vec<String>,
    /// Registered injectable names
    #[serde(default)]
    pub injectables: Vec<String>,
    /// Broadcasts as `(cast, onto)` pairs
    #[serde(default)]
    pub broadcasts: Vec<(String, String)>,
}

impl SchemaListing {
    /// Number of columns known for `table`, if the listing carries them
    pub fn column_count(&self, table: &str) -> Option<usize> {
        self.columns.get(table).map(Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_listing() {
        let listing: SchemaListing = serde_json::from_value(json!({
            "tables": ["households", "persons"],
            "columns": { "households": ["income", "persons"], "persons": ["age"] },
            "steps": ["simulate"],
            "injectables": ["year"],
            "broadcasts": [["persons", "households"]]
        }))
        .unwrap();

        assert_eq!(listing.tables.len(), 2);
        assert_eq!(listing.column_count("households"), Some(2));
        assert_eq!(listing.column_count("zones"), None);
        assert_eq!(
            listing.broadcasts,
            vec![("persons".to_string(), "households".to_string())]
        );
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let listing: SchemaListing =
            serde_json::from_value(json!({ "tables": ["orders"] })).unwrap();
        assert_eq!(listing.tables, vec!["orders".to_string()]);
        assert!(listing.steps.is_empty());
        assert!(listing.injectables.is_empty());
        assert!(listing.broadcasts.is_empty());
    }
}
