use crate::page::DEFAULT_HIDDEN_SECURITY_CHOICES;
use serde::Deserialize;
use std::path::Path;

/// 内置的默认配置
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../configs.toml");

/// 顶层应用配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// [backend] 表
    pub backend: BackendConfig,
    /// [ui] 表
    pub ui: UiConfig,
}

// ============= 后端配置 =============

/// Where the provisioning backend lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub networks_path: String,
    pub connect_path: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://192.168.42.1".to_string(),
            networks_path: "/networks".to_string(),
            connect_path: "/connect".to_string(),
        }
    }
}

// ============= 页面配置 =============

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Values offered by the `hidden-security` selector, first one preselected.
    pub hidden_security_choices: Vec<String>,
    /// Fetch the network list as soon as the page is loaded.
    pub refresh_on_start: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            hidden_security_choices: DEFAULT_HIDDEN_SECURITY_CHOICES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            refresh_on_start: true,
        }
    }
}

// ============= 配置加载函数 =============

/// 从 TOML 字符串加载应用配置
pub fn load_config_from_toml_str(s: &str) -> crate::Result<AppConfig> {
    let mut config: AppConfig = toml::from_str(s)?;
    if config.ui.hidden_security_choices.is_empty() {
        tracing::warn!("ui.hidden_security_choices is empty, using defaults");
        config.ui.hidden_security_choices = UiConfig::default().hidden_security_choices;
    }
    Ok(config)
}

/// 从文件加载；文件不存在时由调用方决定是否回退到内置配置
pub fn load_config_from_file(path: impl AsRef<Path>) -> crate::Result<AppConfig> {
    let content = std::fs::read_to_string(path.as_ref())?;
    load_config_from_toml_str(&content)
}

/// 内置默认配置
pub fn embedded_config() -> crate::Result<AppConfig> {
    load_config_from_toml_str(DEFAULT_CONFIG_TOML)
}
