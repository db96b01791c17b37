//! Optional ontology metadata a domain may publish alongside its twins

use serde::{Deserialize, Serialize};

/// A class in a domain ontology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OntologyClass {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A relation declared by a domain ontology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OntologyRelation {
    pub name: String,
    pub domain_class: String,
    pub range_class: String,
}

/// Ontology document uploaded before a domain's twins are linked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ontology {
    pub id: String,
    pub name: String,
    pub namespace: String,
    #[serde(default)]
    pub classes: Vec<OntologyClass>,
    #[serde(default)]
    pub relations: Vec<OntologyRelation>,
}

impl Ontology {
    pub fn new(id: impl Into<String>, name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            namespace: namespace.into(),
            classes: Vec::new(),
            relations: Vec::new(),
        }
    }

    /// Declare a class, optionally under a parent class
    pub fn class(mut self, name: &str, parent: Option<&str>, description: Option<&str>) -> Self {
        self.classes.push(OntologyClass {
            name: name.to_string(),
            parent: parent.map(|s| s.to_string()),
            description: description.map(|s| s.to_string()),
        });
        self
    }

    pub fn relation(mut self, name: &str, domain_class: &str, range_class: &str) -> Self {
        self.relations.push(OntologyRelation {
            name: name.to_string(),
            domain_class: domain_class.to_string(),
            range_class: range_class.to_string(),
        });
        self
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_serialization() {
        let ontology = Ontology::new("bldg", "Building", "http://example.org/bldg#")
            .class("Space", None, Some("Any bounded area"))
            .class("Room", Some("Space"), None)
            .relation("contains", "Space", "Space");

        assert!(ontology.has_class("Room"));
        assert!(!ontology.has_class("Floor"));

        let json = serde_json::to_value(&ontology).unwrap();
        assert_eq!(json["classes"][1]["parent"], "Space");
        assert_eq!(json["relations"][0]["domainClass"], "Space");
        assert!(json["classes"][1].get("description").is_none());
    }
}
