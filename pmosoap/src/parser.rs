//! Decoding of SOAP envelopes.
//!
//! The Header and Body inner content is kept as the exact bytes found
//! between the opening and closing tags, so an envelope produced by this
//! crate decodes back to an equal [`Envelope`].

use std::collections::BTreeMap;

use quick_xml::events::Event;
use quick_xml::name::{Namespace, QName, ResolveResult};
use quick_xml::reader::NsReader;

use crate::envelope::{Body, Envelope, Header};
use crate::errors::SoapParseError;
use crate::version::SoapVersion;

/// Parses a SOAP 1.1 or 1.2 envelope.
///
/// The version is taken from the namespace bound to the root `Envelope`
/// element. Namespace declarations of the root other than the envelope one
/// are returned through [`Envelope::xmlns`].
pub fn parse_envelope(xml: &[u8]) -> Result<Envelope, SoapParseError> {
    let mut reader = NsReader::from_reader(xml);

    let (version, env_prefix, xmlns) = loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let version = {
                    let (ns, local) = reader.resolve_element(e.name());
                    if local.as_ref() != b"Envelope" {
                        return Err(SoapParseError::MissingEnvelope);
                    }
                    envelope_version(ns)?
                };

                let env_prefix = e
                    .name()
                    .prefix()
                    .map(|p| p.as_ref().to_vec())
                    .unwrap_or_default();

                let mut xmlns = BTreeMap::new();
                for attr in e.attributes() {
                    let attr = attr?;
                    let key = attr.key.as_ref();
                    let prefix = if key == b"xmlns" {
                        &key[..0]
                    } else if let Some(prefix) = key.strip_prefix(b"xmlns:") {
                        prefix
                    } else {
                        continue;
                    };
                    if prefix == env_prefix.as_slice() {
                        continue;
                    }
                    let uri = attr.decode_and_unescape_value(reader.decoder())?;
                    xmlns.insert(
                        String::from_utf8_lossy(prefix).into_owned(),
                        uri.into_owned(),
                    );
                }
                break (version, env_prefix, xmlns);
            }
            Event::Empty(e) if e.local_name().as_ref() == b"Envelope" => {
                return Err(SoapParseError::MissingBody);
            }
            Event::Empty(_) => return Err(SoapParseError::MissingEnvelope),
            Event::Eof => return Err(SoapParseError::MissingEnvelope),
            _ => {}
        }
    };

    let mut header = None;
    let mut body = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let local = e.local_name().as_ref().to_vec();
                let end = e.name().as_ref().to_vec();
                let span = reader.read_to_end(QName(&end))?;
                let inner = slice(xml, span.start, span.end)?;
                match local.as_slice() {
                    b"Header" => header = Some(Header::new(inner)),
                    b"Body" => body = Some(Body::new(inner)),
                    _ => {}
                }
            }
            Event::Empty(e) => match e.local_name().as_ref() {
                b"Header" => header = Some(Header::default()),
                b"Body" => body = Some(Body::default()),
                _ => {}
            },
            Event::End(_) | Event::Eof => break,
            _ => {}
        }
    }

    tracing::trace!(
        %version,
        prefix = %String::from_utf8_lossy(&env_prefix),
        header = header.is_some(),
        "SOAP envelope parsed"
    );

    let body = body.ok_or(SoapParseError::MissingBody)?;
    let mut env = Envelope::new(version, body).with_xmlns(xmlns);
    if let Some(header) = header {
        env.set_header(header);
    }
    Ok(env)
}

fn envelope_version(ns: ResolveResult<'_>) -> Result<SoapVersion, SoapParseError> {
    match ns {
        ResolveResult::Bound(Namespace(uri)) => {
            let uri = String::from_utf8_lossy(uri);
            SoapVersion::from_namespace(&uri)
                .ok_or_else(|| SoapParseError::UnknownNamespace(uri.into_owned()))
        }
        _ => Err(SoapParseError::UnknownNamespace(String::new())),
    }
}

fn slice<P>(xml: &[u8], start: P, end: P) -> Result<Vec<u8>, SoapParseError>
where
    usize: TryFrom<P>,
{
    let start = usize::try_from(start).map_err(|_| SoapParseError::MissingBody)?;
    let end = usize::try_from(end).map_err(|_| SoapParseError::MissingBody)?;
    xml.get(start..end)
        .map(<[u8]>::to_vec)
        .ok_or(SoapParseError::MissingBody)
}
