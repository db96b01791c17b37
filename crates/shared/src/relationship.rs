//! Directed, typed edges between twins

use crate::value::{Properties, PropertyValue};
use serde::{Deserialize, Serialize};

/// A relationship `(source, relation, target, properties)`
///
/// Relation names are sent as given; no namespace expansion applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub source: String,
    pub relation: String,
    pub target: String,
    pub properties: Option<Properties>,
}

impl Relationship {
    pub fn new(
        source: impl Into<String>,
        relation: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            relation: relation.into(),
            target: target.into(),
            properties: None,
        }
    }

    /// Attach a single property, creating the map if needed
    pub fn property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties
            .get_or_insert_with(Properties::new)
            .insert(key, value);
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = Some(properties);
        self
    }
}

impl<S, R, T> From<(S, R, T, Option<Properties>)> for Relationship
where
    S: Into<String>,
    R: Into<String>,
    T: Into<String>,
{
    fn from((source, relation, target, properties): (S, R, T, Option<Properties>)) -> Self {
        Self {
            source: source.into(),
            relation: relation.into(),
            target: target.into(),
            properties,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_conversion_wire_shape() {
        let rel: Relationship = ("constellation-globalnet", "hasSatellite", "sat-0001", None).into();

        assert_eq!(rel.source, "constellation-globalnet");
        assert_eq!(rel.relation, "hasSatellite");
        assert_eq!(rel.target, "sat-0001");

        let json = serde_json::to_string(&rel).unwrap();
        assert_eq!(
            json,
            r#"{"source":"constellation-globalnet","relation":"hasSatellite","target":"sat-0001","properties":null}"#
        );
    }

    #[test]
    fn test_property_creates_map() {
        let rel = Relationship::new("sub-1", "powerSupply", "gen-1").property("capacityMw", 120.0);

        let props = rel.properties.unwrap();
        assert_eq!(props.get("capacityMw"), Some(&PropertyValue::Float(120.0)));
    }

    #[test]
    fn test_relation_name_not_expanded() {
        let rel = Relationship::new("a", "dependsOn", "b");
        assert_eq!(rel.relation, "dependsOn");
        assert!(rel.properties.is_none());
    }
}
