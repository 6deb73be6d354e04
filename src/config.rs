use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Groq API key. When absent the conversion endpoint stays disabled
    /// while the health check and static assets keep working.
    pub groq_api_key: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Groq API origin. Only ever changed to point at a stub server.
    #[serde(default = "default_groq_base_url")]
    pub groq_base_url: String,
}

fn default_port() -> u16 {
    5000
}

fn default_static_dir() -> String {
    "frontend".to_string()
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_groq_base_url() -> String {
    "https://api.groq.com".to_string()
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let groq_api_key = std::env::var("GROQ_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid PORT value: {raw}"))?,
            Err(_) => default_port(),
        };

        let static_dir =
            std::env::var("BIZTONE_STATIC_DIR").unwrap_or_else(|_| default_static_dir());
        let model = std::env::var("GROQ_MODEL").unwrap_or_else(|_| default_model());
        let groq_base_url =
            std::env::var("GROQ_BASE_URL").unwrap_or_else(|_| default_groq_base_url());

        Ok(Self {
            groq_api_key,
            port,
            static_dir,
            model,
            groq_base_url,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            groq_api_key: None,
            port: default_port(),
            static_dir: default_static_dir(),
            model: default_model(),
            groq_base_url: default_groq_base_url(),
        }
    }
}
