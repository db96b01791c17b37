//! NamespaceRegistry - maps short domain names to ontology namespace URIs

use std::collections::BTreeMap;

/// Base for the built-in namespaces
pub const ONTOLOGY_BASE: &str = "http://tesserai.io/ontology/";

/// Domains that ship with a namespace out of the box
pub const BUILTIN_DOMAINS: &[&str] = &[
    "aerospace",
    "agriculture",
    "automotive",
    "energy",
    "finance",
    "healthcare",
    "logistics",
    "manufacturing",
    "retail",
    "telecom",
];

/// Namespace registry
///
/// Owned by whoever drives seeding and handed to each domain explicitly.
/// Registering an existing domain replaces its namespace.
#[derive(Debug, Clone, Default)]
pub struct NamespaceRegistry {
    namespaces: BTreeMap<String, String>,
}

impl NamespaceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in domain
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for domain in BUILTIN_DOMAINS {
            registry.register(*domain, format!("{ONTOLOGY_BASE}{domain}#"));
        }
        registry
    }

    /// Register (or overwrite) the namespace for a domain
    pub fn register(&mut self, domain: impl Into<String>, namespace: impl Into<String>) {
        self.namespaces.insert(domain.into(), namespace.into());
    }

    /// Look up the namespace for a domain
    pub fn lookup(&self, domain: &str) -> Option<&str> {
        self.namespaces.get(domain).map(|s| s.as_str())
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.namespaces.contains_key(domain)
    }

    /// Registered domain names, sorted
    pub fn domains(&self) -> Vec<&str> {
        self.namespaces.keys().map(|s| s.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}
