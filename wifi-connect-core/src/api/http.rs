use crate::config::BackendConfig;
use crate::structs::{ConnectionRequest, NetworkEntry};
use crate::traits::NetworkApi;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Talks to the provisioning backend over plain HTTP.
///
/// Response status codes are not inspected: a body that decodes is a
/// success, anything else surfaces as a transport or JSON error.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    networks_url: String,
    connect_url: String,
}

impl HttpApi {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let base = config.base_url.trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(Error::InvalidUrl(config.base_url.clone()));
        }

        let client = Client::builder().build()?;

        Ok(Self {
            client,
            networks_url: join_url(base, &config.networks_path),
            connect_url: join_url(base, &config.connect_path),
        })
    }

    pub fn networks_url(&self) -> &str {
        &self.networks_url
    }

    pub fn connect_url(&self) -> &str {
        &self.connect_url
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base, path.trim_start_matches('/'))
}

#[async_trait]
impl NetworkApi for HttpApi {
    async fn list_networks(&self) -> Result<Vec<NetworkEntry>> {
        tracing::debug!(url = %self.networks_url, "Fetching network list");
        let body = self.client.get(&self.networks_url).send().await?.bytes().await?;
        let networks: Vec<NetworkEntry> = serde_json::from_slice(&body)?;
        Ok(networks)
    }

    async fn connect(&self, request: &ConnectionRequest) -> Result<serde_json::Value> {
        tracing::debug!(url = %self.connect_url, ssid = %request.ssid, "Posting connect request");
        let body = self
            .client
            .post(&self.connect_url)
            .json(request)
            .send()
            .await?
            .bytes()
            .await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(base_url: &str) -> BackendConfig {
        BackendConfig {
            base_url: base_url.to_string(),
            ..BackendConfig::default()
        }
    }

    #[test]
    fn builds_endpoint_urls() {
        let api = HttpApi::new(&backend("http://192.168.42.1:8080/")).unwrap();
        assert_eq!(api.networks_url(), "http://192.168.42.1:8080/networks");
        assert_eq!(api.connect_url(), "http://192.168.42.1:8080/connect");
    }

    #[test]
    fn rejects_non_http_base_url() {
        let result = HttpApi::new(&backend("192.168.42.1"));
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }
}
