//! Construit une requête SOAP GetTransportInfo et l'affiche.
//!
//! ```sh
//! RUST_LOG=pmosoap=trace cargo run -p pmosoap --example build_request -- 1.2
//! ```

use anyhow::{Context, Result};
use pmosoap::{EnvBuilder, EnvBuilderConfig, SoapItem, soap_items};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const AVTRANSPORT: &str = "urn:schemas-upnp-org:service:AVTransport:1";

#[derive(Serialize)]
#[serde(rename = "u:GetTransportInfo")]
struct GetTransportInfo {
    #[serde(rename = "InstanceID")]
    instance_id: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let version = std::env::args().nth(1).unwrap_or_else(|| "1.1".to_string());

    let config = EnvBuilderConfig::new().with_namespace("u", AVTRANSPORT);
    let mut builder = EnvBuilder::with_config(config);
    builder
        .set_headers([SoapItem::raw("<u:ClientId>pmomusic</u:ClientId>")])
        .set_payload(soap_items![GetTransportInfo { instance_id: 0 }]);

    let request = builder
        .build_http_request_for(
            &version,
            "http://192.168.1.20:49152/upnp/control/AVTransport1",
            &format!("{}#GetTransportInfo", AVTRANSPORT),
        )
        .with_context(|| format!("Failed to build SOAP {} request", version))?;

    println!("{} {}", request.method(), request.uri());
    for (name, value) in request.headers() {
        println!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
    }
    println!();
    println!("{}", String::from_utf8_lossy(request.body()));

    Ok(())
}
