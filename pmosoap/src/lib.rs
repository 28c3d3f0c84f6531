//! # pmosoap - Construction d'enveloppes SOAP
//!
//! Ce crate construit des enveloppes SOAP 1.1 et 1.2 côté client et les
//! emballe, si besoin, dans une requête HTTP prête à être envoyée.
//!
//! ## Fonctionnalités
//!
//! - ✅ Headers et payload à partir de n'importe quelle valeur `Serialize`
//! - ✅ Contenu XML opaque ou `xmltree::Element` recopié tel quel
//! - ✅ Enveloppes SOAP 1.1 et 1.2 avec namespaces supplémentaires
//! - ✅ Requêtes HTTP (`SOAPAction` en 1.1, paramètre `action` en 1.2)
//! - ✅ Décodage d'une enveloppe (version, header, body)
//!
//! ## Architecture
//!
//! - [`EnvBuilder`] : accumule headers et payload, construit l'enveloppe
//! - [`Envelope`] : enveloppe construite, sérialisable en XML
//! - [`SoapItem`] : valeur placée dans le header ou le body
//! - [`SoapVersion`] : version du protocole et métadonnées associées
//!
//! Aucun envoi réseau n'est effectué : la requête produite est un
//! `ureq::http::Request` que l'appelant transmet à son client HTTP.
//!
//! ## Example
//!
//! ```
//! use pmosoap::{EnvBuilder, request_action, soap_items};
//!
//! #[derive(serde::Serialize)]
//! #[serde(rename = "u:Stop")]
//! struct Stop {
//!     #[serde(rename = "@xmlns:u")]
//!     xmlns: &'static str,
//!     #[serde(rename = "InstanceID")]
//!     instance_id: u32,
//! }
//!
//! let mut builder = EnvBuilder::new();
//! builder.set_payload(soap_items![Stop {
//!     xmlns: "urn:schemas-upnp-org:service:AVTransport:1",
//!     instance_id: 0,
//! }]);
//!
//! let request = builder
//!     .build_http_request("1.1", "urn:schemas-upnp-org:service:AVTransport:1#Stop")
//!     .unwrap();
//!
//! assert_eq!(request.method(), "POST");
//! assert_eq!(
//!     request_action(&request).as_deref(),
//!     Some("urn:schemas-upnp-org:service:AVTransport:1#Stop")
//! );
//! ```

mod builder;
mod config;
mod envelope;
mod errors;
mod item;
mod parser;
mod request;
mod version;

pub use builder::{EnvBuilder, new_envelope};
pub use config::EnvBuilderConfig;
pub use envelope::{Body, Envelope, Header};
pub use errors::{SerializationError, SoapError, SoapParseError};
pub use item::SoapItem;
pub use parser::parse_envelope;
pub use request::{SOAP_ACTION_HEADER, request_action};
pub use version::{
    SOAP11_CONTENT_TYPE, SOAP11_NAMESPACE, SOAP12_CONTENT_TYPE, SOAP12_NAMESPACE, SoapVersion,
    V11, V12, content_type_for, is_valid_version, namespace_for,
};
