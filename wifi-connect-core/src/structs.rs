use serde::{Deserialize, Serialize};
use std::fmt;

/// 无线网络的安全类型。
///
/// The backend reports it as a plain string. Known values get their own
/// variant; anything else is kept verbatim so it can be echoed back to
/// `/connect` unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Security {
    Open,
    Wep,
    Wpa,
    Wpa2,
    Enterprise,
    /// Manual-entry sentinel: the real security comes from the secondary selector.
    Hidden,
    Other(String),
}

impl Security {
    pub fn as_str(&self) -> &str {
        match self {
            Security::Open => "OPEN",
            Security::Wep => "WEP",
            Security::Wpa => "WPA",
            Security::Wpa2 => "WPA2",
            Security::Enterprise => "ENTERPRISE",
            Security::Hidden => "HIDDEN",
            Security::Other(s) => s,
        }
    }

    /// Everything except an open network needs a passphrase.
    pub fn needs_passphrase(&self) -> bool {
        !matches!(self, Security::Open)
    }

    pub fn needs_identity(&self) -> bool {
        matches!(self, Security::Enterprise)
    }
}

impl From<&str> for Security {
    fn from(s: &str) -> Self {
        match s {
            "OPEN" => Security::Open,
            "WEP" => Security::Wep,
            "WPA" => Security::Wpa,
            "WPA2" => Security::Wpa2,
            "ENTERPRISE" => Security::Enterprise,
            "HIDDEN" => Security::Hidden,
            other => Security::Other(other.to_string()),
        }
    }
}

impl From<String> for Security {
    fn from(s: String) -> Self {
        Security::from(s.as_str())
    }
}

impl From<Security> for String {
    fn from(s: Security) -> Self {
        match s {
            Security::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Security {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 表示扫描到的单个 Wi-Fi 网络
///
/// `/networks` sends each entry as a `[ssid, strength, security]` tuple,
/// which serde accepts for a struct with fields in that order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NetworkEntry {
    pub ssid: String,
    pub strength: i32, // 信号强度，0到100；手动输入选项为 -1
    pub security: Security,
}

impl NetworkEntry {
    pub fn new(ssid: impl Into<String>, strength: i32, security: impl Into<Security>) -> Self {
        Self {
            ssid: ssid.into(),
            strength,
            security: security.into(),
        }
    }
}

/// /connect 的请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionRequest {
    pub ssid: String,
    pub security: Security,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
}
