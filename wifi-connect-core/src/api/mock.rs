use crate::Result;
use crate::structs::{ConnectionRequest, NetworkEntry, Security};
use crate::traits::NetworkApi;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::sleep;

/// A mock backend for local development and tests.
/// It simulates scanning and connecting without any real device behind it.
#[derive(Debug)]
pub struct MockApi {
    networks: Vec<NetworkEntry>,
    delay: Duration,
    fail_scan: bool,
    submitted: Mutex<Vec<ConnectionRequest>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            networks: vec![
                NetworkEntry::new("MyHomeWiFi", 95, Security::Wpa2),
                NetworkEntry::new("CafeGuest", 78, Security::Open),
                NetworkEntry::new("Neighbor's Network", 55, Security::Wpa),
                NetworkEntry::new("CorpNet", 61, Security::Enterprise),
                NetworkEntry::new("OldRouter", 20, Security::Wep),
            ],
            delay: Duration::ZERO,
            fail_scan: false,
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn with_networks(mut self, networks: Vec<NetworkEntry>) -> Self {
        self.networks = networks;
        self
    }

    /// Simulated latency applied to every call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Makes every scan fail, as if the backend were unreachable.
    pub fn failing_scan(mut self) -> Self {
        self.fail_scan = true;
        self
    }

    /// Requests received so far, in order.
    pub fn submitted(&self) -> Vec<ConnectionRequest> {
        self.submitted
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NetworkApi for MockApi {
    async fn list_networks(&self) -> Result<Vec<NetworkEntry>> {
        tracing::info!("🤖 [MockApi] Scanning for networks...");
        sleep(self.delay).await;

        if self.fail_scan {
            tracing::info!("🤖 [MockApi] Scan failed (simulated)");
            return Err(crate::Error::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "Simulated scan failure",
            )));
        }

        tracing::info!("🤖 [MockApi] Found {} networks.", self.networks.len());
        Ok(self.networks.clone())
    }

    async fn connect(&self, request: &ConnectionRequest) -> Result<serde_json::Value> {
        tracing::info!(
            "🤖 [MockApi] Connect requested for SSID '{}' ({}), passphrase: {}",
            request.ssid,
            request.security,
            if request.passphrase.is_some() { "********" } else { "(none)" }
        );
        sleep(self.delay).await;

        if let Ok(mut submitted) = self.submitted.lock() {
            submitted.push(request.clone());
        }
        Ok(json!({ "status": "Success" }))
    }
}
