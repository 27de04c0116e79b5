//! Configuration: a YAML file loaded from `-f <path>` (default
//! `etc/explore.yaml`), overridden by recognized environment variables,
//! which are themselves seeded from an optional `.env` file that never
//! clobbers a variable already set in the process environment.

use explore_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub backend_host: String,
    pub backend_port: u16,
    pub eino_base_url: Option<String>,
    pub image_recognition_models: Vec<String>,
    pub intent_model: Option<String>,
    pub image_generation_model: Option<String>,
    pub text_generation_models: Vec<String>,
    pub use_ai_model: bool,
    pub enable_static_server: bool,
    pub mcp_enabled: bool,
    pub mcp_servers: Vec<String>,
    pub mcp_config_path: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            backend_host: "0.0.0.0".to_string(),
            backend_port: 8080,
            eino_base_url: None,
            image_recognition_models: Vec::new(),
            intent_model: None,
            image_generation_model: None,
            text_generation_models: Vec::new(),
            use_ai_model: true,
            enable_static_server: false,
            mcp_enabled: false,
            mcp_servers: Vec::new(),
            mcp_config_path: None,
        }
    }
}

impl GatewayConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.backend_host, self.backend_port)
    }

    /// Apply recognized environment variables over whatever the YAML file
    /// set, so the process environment always wins.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("BACKEND_HOST") {
            self.backend_host = v;
        }
        if let Ok(v) = std::env::var("BACKEND_PORT") {
            if let Ok(port) = v.parse() {
                self.backend_port = port;
            }
        }
        if let Ok(v) = std::env::var("EINO_BASE_URL") {
            self.eino_base_url = Some(v);
        }
        if let Ok(v) = std::env::var("IMAGE_RECOGNITION_MODELS") {
            self.image_recognition_models = split_csv(&v);
        }
        if let Ok(v) = std::env::var("INTENT_MODEL") {
            self.intent_model = Some(v);
        }
        if let Ok(v) = std::env::var("IMAGE_GENERATION_MODEL") {
            self.image_generation_model = Some(v);
        }
        if let Ok(v) = std::env::var("TEXT_GENERATION_MODELS") {
            self.text_generation_models = split_csv(&v);
        }
        if let Ok(v) = std::env::var("USE_AI_MODEL") {
            self.use_ai_model = parse_bool(&v, self.use_ai_model);
        }
        if let Ok(v) = std::env::var("ENABLE_STATIC_SERVER") {
            self.enable_static_server = parse_bool(&v, self.enable_static_server);
        }
        if let Ok(v) = std::env::var("MCP_ENABLED") {
            self.mcp_enabled = parse_bool(&v, self.mcp_enabled);
        }
        if let Ok(v) = std::env::var("MCP_SERVERS") {
            self.mcp_servers = split_csv(&v);
        }
        if let Ok(v) = std::env::var("MCP_CONFIG_PATH") {
            self.mcp_config_path = Some(v);
        }
    }
}

fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_bool(value: &str, default: bool) -> bool {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

/// Load `.env` (cwd, then the config file's parent directory) without
/// overwriting variables already present in the process environment, then
/// load the YAML config and apply environment overrides on top.
pub fn load(config_path: &Path) -> Result<GatewayConfig> {
    let _ = dotenvy::from_filename(".env");
    if let Some(parent) = config_path.parent() {
        let _ = dotenvy::from_path(parent.join(".env"));
    }

    let mut config = if config_path.exists() {
        let contents = std::fs::read_to_string(config_path)?;
        serde_yaml::from_str(&contents)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", config_path.display(), e)))?
    } else {
        GatewayConfig::default()
    };

    config.apply_env_overrides();
    Ok(config)
}
