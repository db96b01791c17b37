//! Twin records and their preparation for submission

use crate::namespace::NamespaceRegistry;
use crate::value::{Properties, PropertyValue};
use serde::{Deserialize, Serialize};

/// A twin as built by a domain generator, before namespace expansion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwinRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub twin_type: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default)]
    pub properties: Properties,
}

impl TwinRecord {
    pub fn new(id: impl Into<String>, twin_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            twin_type: twin_type.into(),
            name: name.into(),
            description: None,
            domain: None,
            properties: Properties::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key, value);
        self
    }

    /// Replace the whole property map
    pub fn properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }
}

/// A twin ready to be sent to the ingestion service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparedTwin {
    pub id: String,
    #[serde(rename = "type")]
    pub twin_type: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub domain: String,
    #[serde(default)]
    pub properties: Properties,
}

/// True when a type string already carries a URI scheme
pub fn is_qualified(twin_type: &str) -> bool {
    twin_type.contains("://")
}

/// Expand a short type name against the domain's namespace
///
/// Qualified types are returned unchanged. So are short types when the
/// domain has no registered namespace.
pub fn qualify_type(twin_type: &str, domain: &str, registry: &NamespaceRegistry) -> String {
    if is_qualified(twin_type) {
        return twin_type.to_string();
    }
    match registry.lookup(domain) {
        Some(namespace) => format!("{namespace}{twin_type}"),
        None => twin_type.to_string(),
    }
}

/// Normalize a record for submission under `domain`
///
/// Any `domain` already set on the record is overwritten.
pub fn prepare_twin(record: TwinRecord, domain: &str, registry: &NamespaceRegistry) -> PreparedTwin {
    let twin_type = qualify_type(&record.twin_type, domain, registry);
    PreparedTwin {
        id: record.id,
        twin_type,
        name: record.name,
        description: record.description,
        domain: domain.to_string(),
        properties: record.properties,
    }
}

/// Prepare a whole list, preserving order
pub fn prepare_twins(
    records: Vec<TwinRecord>,
    domain: &str,
    registry: &NamespaceRegistry,
) -> Vec<PreparedTwin> {
    records
        .into_iter()
        .map(|record| prepare_twin(record, domain, registry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aerospace_registry() -> NamespaceRegistry {
        let mut registry = NamespaceRegistry::new();
        registry.register("aerospace", "http://tesserai.io/ontology/aerospace#");
        registry
    }

    #[test]
    fn test_short_type_expanded() {
        let registry = aerospace_registry();
        let record = TwinRecord::new("sat-0001", "CommunicationsSatellite", "GlobalNet-0001")
            .property("altitudeKm", 550.0);

        let twin = prepare_twin(record, "aerospace", &registry);

        assert_eq!(twin.id, "sat-0001");
        assert_eq!(
            twin.twin_type,
            "http://tesserai.io/ontology/aerospace#CommunicationsSatellite"
        );
        assert_eq!(twin.name, "GlobalNet-0001");
        assert_eq!(twin.domain, "aerospace");
        assert_eq!(twin.properties.get("altitudeKm"), Some(&PropertyValue::Float(550.0)));
    }

    #[test]
    fn test_prepared_twin_wire_shape() {
        let registry = aerospace_registry();
        let record = TwinRecord::new("sat-0001", "CommunicationsSatellite", "GlobalNet-0001")
            .property("orbit", "LEO");

        let json = serde_json::to_value(prepare_twin(record, "aerospace", &registry)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "sat-0001",
                "type": "http://tesserai.io/ontology/aerospace#CommunicationsSatellite",
                "name": "GlobalNet-0001",
                "domain": "aerospace",
                "properties": { "orbit": "LEO" }
            })
        );
    }

    #[test]
    fn test_qualified_type_unchanged() {
        let registry = aerospace_registry();
        let record = TwinRecord::new("x-1", "https://schema.org/Place", "Somewhere");

        let twin = prepare_twin(record, "aerospace", &registry);
        assert_eq!(twin.twin_type, "https://schema.org/Place");

        // Preparing twice never double-prefixes
        let again = qualify_type(&twin.twin_type, "aerospace", &registry);
        assert_eq!(again, twin.twin_type);
    }

    #[test]
    fn test_domain_overwritten() {
        let registry = aerospace_registry();
        let mut record = TwinRecord::new("sat-0002", "Satellite", "Sat 2");
        record.domain = Some("finance".to_string());

        let twin = prepare_twin(record, "aerospace", &registry);
        assert_eq!(twin.domain, "aerospace");
    }

    #[test]
    fn test_unregistered_domain_passes_through() {
        let registry = NamespaceRegistry::new();
        let record = TwinRecord::new("t-1", "Thing", "Thing 1");

        let twin = prepare_twin(record, "unknown", &registry);
        assert_eq!(twin.twin_type, "Thing");
        assert_eq!(twin.domain, "unknown");
    }

    #[test]
    fn test_missing_fields_pass_through() {
        let registry = aerospace_registry();
        let twin = prepare_twin(TwinRecord::new("", "Satellite", ""), "aerospace", &registry);

        assert!(twin.id.is_empty());
        assert!(twin.name.is_empty());
        assert!(twin.description.is_none());
    }

    #[test]
    fn test_prepare_twins_preserves_order() {
        let registry = aerospace_registry();
        let records = (0..5)
            .map(|i| TwinRecord::new(format!("sat-{i:04}"), "Satellite", format!("Sat {i}")))
            .collect();

        let twins = prepare_twins(records, "aerospace", &registry);
        let ids: Vec<_> = twins.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["sat-0000", "sat-0001", "sat-0002", "sat-0003", "sat-0004"]);
    }
}
