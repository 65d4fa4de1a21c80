use std::env;
use std::time::Duration;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const OPENAI_MODEL: &str = "gpt-3.5-turbo";
const OPENAI_TEMPERATURE: f32 = 0.7;
const COMPLETION_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub completion: CompletionConfig,
}

#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Without a key every generation request fails at the completion step.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: OPENAI_BASE_URL.to_string(),
            model: OPENAI_MODEL.to_string(),
            temperature: OPENAI_TEMPERATURE,
            timeout: Duration::from_secs(COMPLETION_TIMEOUT_SECS),
        }
    }
}

fn parsed_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| HOST.to_string()),
            port: parsed_or("PORT", PORT),
            completion: CompletionConfig::from_env(),
        }
    }
}

impl CompletionConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("OPENAI_API_KEY").ok().filter(|key| !key.is_empty()),
            base_url: env::var("OPENAI_BASE_URL").unwrap_or_else(|_| OPENAI_BASE_URL.to_string()),
            model: env::var("OPENAI_MODEL").unwrap_or_else(|_| OPENAI_MODEL.to_string()),
            temperature: parsed_or("OPENAI_TEMPERATURE", OPENAI_TEMPERATURE),
            timeout: Duration::from_secs(parsed_or("COMPLETION_TIMEOUT_SECS", COMPLETION_TIMEOUT_SECS)),
        }
    }
}
