//! Structures de l'enveloppe SOAP

use std::collections::BTreeMap;
use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use crate::errors::{SerializationError, SoapError};
use crate::version::SoapVersion;

/// En-tête SOAP
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Header {
    /// Contenu XML brut des blocs d'en-tête
    content: Vec<u8>,
}

impl Header {
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

/// Corps SOAP
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Body {
    /// Contenu XML brut du payload (éventuellement vide)
    content: Vec<u8>,
}

impl Body {
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Enveloppe SOAP complète, en version 1.1 ou 1.2.
///
/// Les deux versions ne diffèrent que par le namespace et le préfixe de
/// l'élément racine, et par les conventions de transport HTTP (voir
/// [`Envelope::to_http_request`]). Le traitement du header et du body est
/// identique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    version: SoapVersion,

    /// Déclarations de namespaces supplémentaires (préfixe → URI)
    xmlns: BTreeMap<String, String>,

    /// En-tête SOAP optionnel
    header: Option<Header>,

    /// Corps SOAP, toujours présent
    body: Body,
}

impl Envelope {
    /// Crée une nouvelle enveloppe sans header
    pub fn new(version: SoapVersion, body: Body) -> Self {
        Self {
            version,
            xmlns: BTreeMap::new(),
            header: None,
            body,
        }
    }

    pub fn with_xmlns(mut self, xmlns: BTreeMap<String, String>) -> Self {
        self.xmlns = xmlns;
        self
    }

    pub(crate) fn set_header(&mut self, header: Header) {
        self.header = Some(header);
    }

    pub fn version(&self) -> SoapVersion {
        self.version
    }

    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Déclarations supplémentaires fournies par la configuration
    pub fn xmlns(&self) -> &BTreeMap<String, String> {
        &self.xmlns
    }

    /// Ensemble des déclarations portées par l'élément racine : celles de la
    /// configuration, plus le préfixe réservé de l'enveloppe.
    pub fn namespaces(&self) -> BTreeMap<String, String> {
        let mut namespaces = self.xmlns.clone();
        namespaces.insert(
            self.version.envelope_prefix().to_string(),
            self.version.namespace().to_string(),
        );
        namespaces
    }

    fn qualified(&self, local: &str) -> String {
        format!("{}:{}", self.version.envelope_prefix(), local)
    }

    /// Écrit le document XML complet dans `writer`
    pub fn write_to<W: Write>(&self, writer: W) -> Result<W, SerializationError> {
        let mut writer = Writer::new(writer);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let root_name = self.qualified("Envelope");
        let mut root = BytesStart::new(root_name.as_str());
        for (prefix, uri) in self.namespaces() {
            let key = if prefix.is_empty() {
                "xmlns".to_string()
            } else {
                format!("xmlns:{}", prefix)
            };
            root.push_attribute((key.as_str(), uri.as_str()));
        }
        writer.write_event(Event::Start(root))?;

        if let Some(header) = &self.header {
            write_wrapped(&mut writer, &self.qualified("Header"), header.content())?;
        }
        write_wrapped(&mut writer, &self.qualified("Body"), self.body.content())?;

        writer.write_event(Event::End(BytesEnd::new(root_name.as_str())))?;
        Ok(writer.into_inner())
    }

    /// Sérialise l'enveloppe en octets
    pub fn to_bytes(&self) -> Result<Vec<u8>, SoapError> {
        Ok(self.write_to(Vec::new())?)
    }
}

/// Écrit `<name>content</name>` en recopiant `content` sans échappement
fn write_wrapped<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    content: &[u8],
) -> Result<(), SerializationError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.get_mut().write_all(content)?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
