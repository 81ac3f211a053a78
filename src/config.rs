//! Configuration for the gateway and its upstream

use std::time::Duration;
use log::debug;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://api.deepseek.com";
pub const DEFAULT_MODEL: &str = "deepseek-chat";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Gateway configuration, injected at construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig
{   /// DeepSeek credential; `None` selects development mode
    pub api_key: Option<String>
  , /// API base URL
    pub api_base: String
  , /// Upstream model name
    pub model: String
  , /// Max tokens to generate
    pub max_tokens: usize
  , /// Temperature for sampling
    pub temperature: f32
  , /// Wait budget for the upstream call in milliseconds
    pub timeout_ms: u64
  , /// Address the HTTP server binds to
    pub bind_addr: String
}

impl Default for GatewayConfig
{   fn default() -> Self
    {   GatewayConfig
        {   api_key: None
          , api_base: DEFAULT_API_BASE.to_string()
          , model: DEFAULT_MODEL.to_string()
          , max_tokens: 500
          , temperature: 0.7
          , timeout_ms: 10_000
          , bind_addr: DEFAULT_BIND_ADDR.to_string()
        }
    }
}

impl GatewayConfig
{   /// Build from the process environment
    pub fn from_env() -> Result<Self, crate::error::Error>
    {   Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F)
      -> Result<Self, crate::error::Error>
    where F: Fn(&str) -> Option<String>
    {   let mut config = GatewayConfig::default();

        // An empty key counts as unset
        config.api_key = lookup("DEEPSEEK_API_KEY")
          .filter(|k| !k.trim().is_empty());

        if let Some(base) = lookup("DEEPSEEK_API_BASE")
        {   config.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(model) = lookup("DEEPSEEK_MODEL")
        {   config.model = model;
        }
        if let Some(raw) = lookup("DEEPSEEK_TIMEOUT_MS")
        {   config.timeout_ms = raw.parse().map_err(|_| {
              crate::error::Error::InvalidConfiguration(
                format!("DEEPSEEK_TIMEOUT_MS={}", raw)
              )
            })?;
        }
        if let Some(addr) = lookup("LUMI_BIND_ADDR")
        {   config.bind_addr = addr;
        }

        debug!(
          "Loaded config: api_base={} model={} key_present={}",
          config.api_base, config.model, config.api_key.is_some()
        );
        Ok(config)
    }

    pub fn timeout(&self) -> Duration
    {   Duration::from_millis(self.timeout_ms)
    }

    /// Full chat-completion endpoint
    pub fn completions_url(&self) -> String
    {   format!("{}/chat/completions", self.api_base)
    }
}
