use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::catalog::Component;
use crate::error::{AlbatrozError, Result};

/// Where component sources come from.
pub trait ComponentSource {
    /// Download the source of `component` from the repository at `base_url`.
    ///
    /// The body is returned untouched so it can be written byte for byte.
    fn fetch(&self, base_url: &str, component: &Component) -> Result<Vec<u8>>;
}

/// `<base_url>/<slug>.tsx`, without doubling the separator.
pub fn component_url(base_url: &str, component: &Component) -> String {
    format!("{}/{}.tsx", base_url.trim_end_matches('/'), component.slug())
}

/// Downloads components over HTTP(S).
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Use a preconfigured client (proxy, timeouts, TLS settings).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl ComponentSource for HttpSource {
    fn fetch(&self, base_url: &str, component: &Component) -> Result<Vec<u8>> {
        let url = component_url(base_url, component);
        tracing::debug!(%url, "Fetching component");

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| AlbatrozError::Http(format!("{url}: {e}")))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AlbatrozError::ComponentNotFound(component.slug()));
        }
        if !status.is_success() {
            return Err(AlbatrozError::Http(format!("{url} returned {status}")));
        }

        resp.bytes()
            .map(|body| body.to_vec())
            .map_err(|e| AlbatrozError::Http(format!("Invalid response body from {url}: {e}")))
    }
}
