//! Valeurs placées dans le header ou le body d'une enveloppe

use std::fmt;

use serde::Serialize;
use xmltree::{Element, EmitterConfig};

use crate::errors::SerializationError;

/// Effacement de type pour les valeurs `Serialize`
trait XmlValue {
    fn to_xml(&self) -> Result<String, SerializationError>;
}

impl<T: Serialize> XmlValue for T {
    fn to_xml(&self) -> Result<String, SerializationError> {
        Ok(quick_xml::se::to_string(self)?)
    }
}

enum ItemKind {
    Value(Box<dyn XmlValue>),
    Element(Element),
    Raw(Vec<u8>),
}

/// Élément de header ou de payload SOAP.
///
/// Un item est sérialisé uniquement au moment du `build` : une valeur
/// invalide n'est détectée qu'à ce moment-là.
pub struct SoapItem(ItemKind);

impl SoapItem {
    /// Valeur sérialisée avec `quick_xml::se`. L'élément racine porte le nom
    /// du type (ou celui donné par `#[serde(rename = "...")]`).
    pub fn value<T: Serialize + 'static>(value: T) -> Self {
        SoapItem(ItemKind::Value(Box::new(value)))
    }

    /// Élément XML déjà construit
    pub fn element(element: Element) -> Self {
        SoapItem(ItemKind::Element(element))
    }

    /// Contenu XML opaque, recopié tel quel dans l'enveloppe
    pub fn raw(xml: impl Into<Vec<u8>>) -> Self {
        SoapItem(ItemKind::Raw(xml.into()))
    }

    fn write_into(&self, out: &mut Vec<u8>) -> Result<(), SerializationError> {
        match &self.0 {
            ItemKind::Value(value) => out.extend_from_slice(value.to_xml()?.as_bytes()),
            ItemKind::Element(element) => {
                let config = EmitterConfig::new()
                    .write_document_declaration(false)
                    .perform_indent(false);
                element.write_with_config(&mut *out, config)?;
            }
            ItemKind::Raw(xml) => out.extend_from_slice(xml),
        }
        Ok(())
    }
}

impl fmt::Debug for SoapItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ItemKind::Value(_) => f.write_str("SoapItem::Value(..)"),
            ItemKind::Element(e) => write!(f, "SoapItem::Element({})", e.name),
            ItemKind::Raw(xml) => write!(f, "SoapItem::Raw({} bytes)", xml.len()),
        }
    }
}

/// Sérialise une liste d'items en concaténant leurs représentations XML.
///
/// Une liste vide produit un contenu vide.
pub(crate) fn marshal(items: &[SoapItem]) -> Result<Vec<u8>, SerializationError> {
    let mut out = Vec::new();
    for item in items {
        item.write_into(&mut out)?;
    }
    Ok(out)
}

/// Construit un `Vec<SoapItem>` à partir de valeurs `Serialize`
///
/// ```
/// use pmosoap::soap_items;
///
/// #[derive(serde::Serialize)]
/// struct Ping;
///
/// let items = soap_items![Ping, Ping];
/// assert_eq!(items.len(), 2);
/// ```
#[macro_export]
macro_rules! soap_items {
    () => {
        ::std::vec::Vec::<$crate::SoapItem>::new()
    };
    ($($item:expr),+ $(,)?) => {
        ::std::vec![$($crate::SoapItem::value($item)),+]
    };
}
