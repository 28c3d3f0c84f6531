//! Configuration du builder d'enveloppes

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::SoapError;

/// Options de construction d'un [`EnvBuilder`](crate::EnvBuilder).
///
/// ```yaml
/// namespaces:
///   u: "urn:schemas-upnp-org:service:AVTransport:1"
///   xsd: "http://www.w3.org/2001/XMLSchema"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvBuilderConfig {
    /// Déclarations de namespaces ajoutées sur l'élément racine
    #[serde(default)]
    pub namespaces: BTreeMap<String, String>,
}

impl EnvBuilderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute (ou remplace) une déclaration de namespace
    pub fn with_namespace(mut self, prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        self.namespaces.insert(prefix.into(), uri.into());
        self
    }

    /// Charge la configuration depuis un document YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SoapError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_namespace_overrides() {
        let config = EnvBuilderConfig::new()
            .with_namespace("u", "urn:first")
            .with_namespace("u", "urn:second")
            .with_namespace("xsd", "http://www.w3.org/2001/XMLSchema");

        assert_eq!(config.namespaces.len(), 2);
        assert_eq!(config.namespaces["u"], "urn:second");
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
namespaces:
  u: "urn:schemas-upnp-org:service:AVTransport:1"
  xsi: "http://www.w3.org/2001/XMLSchema-instance"
"#;
        let config = EnvBuilderConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(
            config.namespaces.get("u").map(String::as_str),
            Some("urn:schemas-upnp-org:service:AVTransport:1")
        );
        assert_eq!(config.namespaces.len(), 2);
    }

    #[test]
    fn test_from_yaml_defaults() {
        let config = EnvBuilderConfig::from_yaml_str("{}").unwrap();
        assert!(config.namespaces.is_empty());
    }

    #[test]
    fn test_from_yaml_invalid() {
        let result = EnvBuilderConfig::from_yaml_str("namespaces: [1, 2]");
        assert!(matches!(result, Err(SoapError::Config(_))));
    }
}
