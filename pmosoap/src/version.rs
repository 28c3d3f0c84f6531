//! Versions SOAP supportées et métadonnées associées

use std::fmt;
use std::str::FromStr;

use crate::errors::SoapError;

/// Identifiant de la version SOAP 1.1
pub const V11: &str = "1.1";

/// Identifiant de la version SOAP 1.2
pub const V12: &str = "1.2";

/// Namespace de l'enveloppe SOAP 1.1
pub const SOAP11_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Namespace de l'enveloppe SOAP 1.2
pub const SOAP12_NAMESPACE: &str = "http://www.w3.org/2003/05/soap-envelope";

/// Content-Type HTTP d'un message SOAP 1.1
pub const SOAP11_CONTENT_TYPE: &str = r#"text/xml; charset="utf-8""#;

/// Content-Type HTTP d'un message SOAP 1.2 (sans le paramètre `action`)
pub const SOAP12_CONTENT_TYPE: &str = "application/soap+xml; charset=utf-8";

/// Version du protocole SOAP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoapVersion {
    V11,
    V12,
}

impl SoapVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoapVersion::V11 => V11,
            SoapVersion::V12 => V12,
        }
    }

    /// Namespace de l'élément `Envelope`
    pub fn namespace(&self) -> &'static str {
        match self {
            SoapVersion::V11 => SOAP11_NAMESPACE,
            SoapVersion::V12 => SOAP12_NAMESPACE,
        }
    }

    /// Préfixe lié au namespace de l'enveloppe sur l'élément racine.
    ///
    /// Ce préfixe est réservé : une déclaration fournie par l'appelant pour
    /// ce préfixe est ignorée.
    pub fn envelope_prefix(&self) -> &'static str {
        match self {
            SoapVersion::V11 => "soap",
            SoapVersion::V12 => "env",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            SoapVersion::V11 => SOAP11_CONTENT_TYPE,
            SoapVersion::V12 => SOAP12_CONTENT_TYPE,
        }
    }

    /// Retrouve la version à partir du namespace d'une enveloppe
    pub fn from_namespace(namespace: &str) -> Option<Self> {
        match namespace {
            SOAP11_NAMESPACE => Some(SoapVersion::V11),
            SOAP12_NAMESPACE => Some(SoapVersion::V12),
            _ => None,
        }
    }
}

impl fmt::Display for SoapVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for SoapVersion {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for SoapVersion {
    type Err = SoapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            V11 => Ok(SoapVersion::V11),
            V12 => Ok(SoapVersion::V12),
            other => Err(SoapError::InvalidVersion(other.to_string())),
        }
    }
}

/// Vérifie qu'un identifiant de version est supporté ("1.1" ou "1.2")
pub fn is_valid_version(version: &str) -> bool {
    version.parse::<SoapVersion>().is_ok()
}

pub fn namespace_for(version: SoapVersion) -> &'static str {
    version.namespace()
}

pub fn content_type_for(version: SoapVersion) -> &'static str {
    version.content_type()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_versions() {
        assert!(is_valid_version("1.1"));
        assert!(is_valid_version("1.2"));
        assert!(!is_valid_version("1.0"));
        assert!(!is_valid_version("9.9"));
        assert!(!is_valid_version(""));
        assert!(!is_valid_version(" 1.1"));
    }

    #[test]
    fn test_parse_version() {
        assert_eq!("1.1".parse::<SoapVersion>().unwrap(), SoapVersion::V11);
        assert_eq!("1.2".parse::<SoapVersion>().unwrap(), SoapVersion::V12);

        match "2.0".parse::<SoapVersion>() {
            Err(SoapError::InvalidVersion(v)) => assert_eq!(v, "2.0"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_namespace_lookup() {
        assert_eq!(namespace_for(SoapVersion::V11), SOAP11_NAMESPACE);
        assert_eq!(namespace_for(SoapVersion::V12), SOAP12_NAMESPACE);
        assert_eq!(
            SoapVersion::from_namespace(SOAP12_NAMESPACE),
            Some(SoapVersion::V12)
        );
        assert_eq!(SoapVersion::from_namespace("urn:other"), None);
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type_for(SoapVersion::V11), r#"text/xml; charset="utf-8""#);
        assert!(content_type_for(SoapVersion::V12).starts_with("application/soap+xml"));
    }
}
