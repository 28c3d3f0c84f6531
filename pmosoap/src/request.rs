//! HTTP transport binding for SOAP envelopes.
//!
//! SOAP 1.1 carries the action in a dedicated `SOAPAction` header, SOAP 1.2
//! carries it as the `action` parameter of the `application/soap+xml`
//! content type. Requests are only built here: sending them is up to the
//! caller (e.g. `ureq::Agent::run`).

use tracing::trace;
use ureq::http::header::CONTENT_TYPE;
use ureq::http::{Method, Request};

use crate::envelope::Envelope;
use crate::errors::SoapError;
use crate::version::SoapVersion;

/// SOAP 1.1 action header
pub const SOAP_ACTION_HEADER: &str = "SOAPAction";

impl Envelope {
    /// Builds a POST request targeting `/` that carries this envelope.
    ///
    /// The target can be changed afterwards through `Request::uri_mut`, or
    /// given directly with [`to_http_request_for`](Envelope::to_http_request_for).
    pub fn to_http_request(&self, action: &str) -> Result<Request<Vec<u8>>, SoapError> {
        self.to_http_request_for("/", action)
    }

    /// Builds a POST request to `endpoint` that carries this envelope.
    pub fn to_http_request_for(
        &self,
        endpoint: &str,
        action: &str,
    ) -> Result<Request<Vec<u8>>, SoapError> {
        let body = self.to_bytes()?;

        let builder = Request::builder().method(Method::POST).uri(endpoint);
        let builder = match self.version() {
            SoapVersion::V11 => builder
                .header(CONTENT_TYPE, self.version().content_type())
                .header(SOAP_ACTION_HEADER, format!(r#""{}""#, action)),
            SoapVersion::V12 if action.is_empty() => {
                builder.header(CONTENT_TYPE, self.version().content_type())
            }
            SoapVersion::V12 => builder.header(
                CONTENT_TYPE,
                format!(r#"{}; action="{}""#, self.version().content_type(), action),
            ),
        };

        trace!(
            version = %self.version(),
            endpoint,
            action,
            body_len = body.len(),
            "Building SOAP HTTP request"
        );

        Ok(builder.body(body)?)
    }
}

/// Returns the action carried by a SOAP request, following the convention of
/// either version: the `SOAPAction` header first, then the `action` parameter
/// of the content type. Surrounding quotes are removed.
pub fn request_action<B>(request: &Request<B>) -> Option<String> {
    let headers = request.headers();

    if let Some(value) = headers.get(SOAP_ACTION_HEADER) {
        return value.to_str().ok().map(|v| unquote(v).to_string());
    }

    let content_type = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    content_type
        .split(';')
        .skip(1)
        .filter_map(|param| param.trim().split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("action"))
        .map(|(_, value)| unquote(value.trim()).to_string())
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
