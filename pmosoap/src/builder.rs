//! Construction d'enveloppes SOAP

use std::collections::BTreeMap;

use tracing::{debug, warn};
use ureq::http::Request;

use crate::config::EnvBuilderConfig;
use crate::envelope::{Body, Envelope, Header};
use crate::errors::SoapError;
use crate::item::{SoapItem, marshal};
use crate::version::SoapVersion;

/// Builder d'enveloppes SOAP.
///
/// Les headers et le payload sont accumulés puis sérialisés à chaque appel de
/// [`build`](EnvBuilder::build). La dernière enveloppe construite avec succès
/// reste accessible via [`env`](EnvBuilder::env).
///
/// # Example
///
/// ```
/// use pmosoap::{EnvBuilder, soap_items};
///
/// #[derive(serde::Serialize)]
/// struct GetTransportInfo {
///     #[serde(rename = "InstanceID")]
///     instance_id: u32,
/// }
///
/// let mut builder = EnvBuilder::new();
/// builder.set_payload(soap_items![GetTransportInfo { instance_id: 0 }]);
///
/// let env = builder.build("1.1").unwrap();
/// assert_eq!(
///     env.body().content(),
///     b"<GetTransportInfo><InstanceID>0</InstanceID></GetTransportInfo>"
/// );
/// assert!(env.header().is_none());
/// ```
#[derive(Debug, Default)]
pub struct EnvBuilder {
    headers: Vec<SoapItem>,
    payload: Vec<SoapItem>,
    env: Option<Envelope>,
    xmlns: BTreeMap<String, String>,
}

impl EnvBuilder {
    /// Crée un builder vide
    pub fn new() -> Self {
        Self::default()
    }

    /// Crée un builder à partir d'une configuration
    pub fn with_config(config: EnvBuilderConfig) -> Self {
        Self {
            xmlns: config.namespaces,
            ..Self::default()
        }
    }

    /// Remplace les déclarations de namespaces supplémentaires
    pub fn set_xmlns(&mut self, xmlns: BTreeMap<String, String>) -> &mut Self {
        self.xmlns = xmlns;
        self
    }

    /// Remplace les headers SOAP précédents
    pub fn set_headers<I>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = SoapItem>,
    {
        self.headers = headers.into_iter().collect();
        self
    }

    /// Remplace le payload précédent
    pub fn set_payload<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = SoapItem>,
    {
        self.payload = items.into_iter().collect();
        self
    }

    /// Dernière enveloppe construite avec succès, `None` si aucun `build`
    /// n'a encore réussi
    pub fn env(&self) -> Option<&Envelope> {
        self.env.as_ref()
    }

    /// Construit l'enveloppe pour la version demandée ("1.1" ou "1.2").
    ///
    /// En cas d'erreur, l'enveloppe précédemment construite reste inchangée.
    pub fn build(&mut self, version: impl AsRef<str>) -> Result<&Envelope, SoapError> {
        let version: SoapVersion = version.as_ref().parse()?;

        let body = marshal(&self.payload)?;
        let mut env = Envelope::new(version, Body::new(body)).with_xmlns(self.xmlns.clone());

        if !self.headers.is_empty() {
            let header = marshal(&self.headers)?;
            if !header.is_empty() {
                env.set_header(Header::new(header));
            }
        }

        if let Some(uri) = self.xmlns.get(version.envelope_prefix()) {
            if uri != version.namespace() {
                warn!(
                    prefix = version.envelope_prefix(),
                    ignored = %uri,
                    "Namespace prefix is reserved for the SOAP envelope"
                );
            }
        }

        debug!(
            %version,
            body_len = env.body().content().len(),
            header = env.header().is_some(),
            "SOAP envelope built"
        );

        Ok(self.env.insert(env))
    }

    /// Construit l'enveloppe puis la requête HTTP associée, à destination de
    /// `/`. Voir [`Envelope::to_http_request`].
    pub fn build_http_request(
        &mut self,
        version: impl AsRef<str>,
        action: &str,
    ) -> Result<Request<Vec<u8>>, SoapError> {
        self.build(version)?.to_http_request(action)
    }

    /// Comme [`build_http_request`](EnvBuilder::build_http_request), avec
    /// une URL de contrôle explicite
    pub fn build_http_request_for(
        &mut self,
        version: impl AsRef<str>,
        endpoint: &str,
        action: &str,
    ) -> Result<Request<Vec<u8>>, SoapError> {
        self.build(version)?.to_http_request_for(endpoint, action)
    }
}

/// Construit directement une enveloppe à partir de headers et d'un payload
pub fn new_envelope<H, P>(
    version: impl AsRef<str>,
    headers: H,
    payload: P,
    config: EnvBuilderConfig,
) -> Result<Envelope, SoapError>
where
    H: IntoIterator<Item = SoapItem>,
    P: IntoIterator<Item = SoapItem>,
{
    let mut builder = EnvBuilder::with_config(config);
    builder.set_headers(headers).set_payload(payload);
    builder.build(version).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soap_items;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Play {
        #[serde(rename = "InstanceID")]
        instance_id: u32,
        #[serde(rename = "Speed")]
        speed: String,
    }

    struct Broken;

    impl Serialize for Broken {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("broken value"))
        }
    }

    fn play() -> Play {
        Play {
            instance_id: 0,
            speed: "1".to_string(),
        }
    }

    #[test]
    fn test_env_absent_before_build() {
        let builder = EnvBuilder::new();
        assert!(builder.env().is_none());
    }

    #[test]
    fn test_build_stores_snapshot() {
        let mut builder = EnvBuilder::new();
        builder.set_payload(soap_items![play()]);
        let built = builder.build("1.2").unwrap().clone();

        assert_eq!(builder.env(), Some(&built));
        assert_eq!(built.version(), SoapVersion::V12);
    }

    #[test]
    fn test_build_accepts_version_enum() {
        let mut builder = EnvBuilder::new();
        assert_eq!(builder.build(SoapVersion::V11).unwrap().version(), SoapVersion::V11);
    }

    #[test]
    fn test_invalid_version_before_serialization() {
        let mut builder = EnvBuilder::new();
        builder.set_payload(soap_items![Broken]);

        let err = builder.build("1.3").unwrap_err();
        assert!(matches!(err, SoapError::InvalidVersion(ref v) if v == "1.3"));
    }

    #[test]
    fn test_payload_error_keeps_previous_snapshot() {
        let mut builder = EnvBuilder::new();
        builder.set_payload(soap_items![play()]);
        let previous = builder.build("1.1").unwrap().clone();

        builder.set_payload(soap_items![Broken]);
        let err = builder.build("1.1").unwrap_err();

        assert!(matches!(err, SoapError::Serialization(_)));
        assert_eq!(builder.env(), Some(&previous));
    }

    #[test]
    fn test_header_error_discards_envelope() {
        let mut builder = EnvBuilder::new();
        builder.set_headers(soap_items![Broken]);

        assert!(matches!(
            builder.build("1.2"),
            Err(SoapError::Serialization(_))
        ));
        assert!(builder.env().is_none());
    }

    #[test]
    fn test_empty_header_suppressed() {
        let mut builder = EnvBuilder::new();
        builder.set_headers([SoapItem::raw(""), SoapItem::raw(Vec::<u8>::new())]);

        assert!(builder.build("1.1").unwrap().header().is_none());
    }

    #[test]
    fn test_setters_replace() {
        let mut builder = EnvBuilder::new();
        builder
            .set_headers([SoapItem::raw("<A/>")])
            .set_headers([SoapItem::raw("<B/>")])
            .set_payload([SoapItem::raw("<C/>")])
            .set_payload(Vec::new());

        let env = builder.build("1.1").unwrap();
        assert_eq!(env.header().unwrap().content(), b"<B/>");
        assert!(env.body().is_empty());
    }

    #[test]
    fn test_config_namespaces_applied() {
        let config = EnvBuilderConfig::new().with_namespace("u", "urn:test");
        let mut builder = EnvBuilder::with_config(config);
        assert_eq!(builder.build("1.1").unwrap().xmlns()["u"], "urn:test");

        builder.set_xmlns(BTreeMap::new());
        assert!(builder.build("1.1").unwrap().xmlns().is_empty());
    }

    #[test]
    fn test_new_envelope() {
        let env = new_envelope(
            "1.2",
            [SoapItem::raw("<Auth>token</Auth>")],
            soap_items![play()],
            EnvBuilderConfig::default(),
        )
        .unwrap();

        assert_eq!(env.header().unwrap().content(), b"<Auth>token</Auth>");
        assert_eq!(
            env.body().content(),
            b"<Play><InstanceID>0</InstanceID><Speed>1</Speed></Play>"
        );
    }
}
