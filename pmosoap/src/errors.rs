use thiserror::Error;

/// Erreurs du builder d'enveloppes SOAP
#[derive(Error, Debug)]
pub enum SoapError {
    #[error("Invalid SOAP version '{0}' (expected \"1.1\" or \"1.2\")")]
    InvalidVersion(String),

    #[error("SOAP serialization error: {0}")]
    Serialization(#[from] SerializationError),

    #[error("HTTP request construction error: {0}")]
    RequestConstruction(#[from] ureq::http::Error),

    #[error("Invalid SOAP builder configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}

/// Cause d'un échec de sérialisation (payload, headers ou document complet)
#[derive(Error, Debug)]
pub enum SerializationError {
    #[error(transparent)]
    Serde(#[from] quick_xml::errors::serialize::SeError),

    #[error(transparent)]
    Element(#[from] xmltree::Error),

    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Erreur de décodage d'une enveloppe SOAP
#[derive(Error, Debug)]
pub enum SoapParseError {
    #[error("XML parse error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("Invalid attribute: {0}")]
    AttrError(#[from] quick_xml::events::attributes::AttrError),

    #[error("Missing SOAP Envelope")]
    MissingEnvelope,

    #[error("Unknown SOAP envelope namespace '{0}'")]
    UnknownNamespace(String),

    #[error("Missing SOAP Body")]
    MissingBody,
}
