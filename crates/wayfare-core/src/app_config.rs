use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Directory holding the persisted trip history.
    pub data_dir: PathBuf,
    /// Optional YAML override for the built-in destination catalog.
    pub destinations_path: Option<PathBuf>,
    pub api_base_url: String,
    pub api_key: Option<String>,
    pub api_timeout_secs: u64,
    pub api_user_agent: String,
    pub api_max_retries: u32,
    pub api_retry_backoff_base_ms: u64,
    /// Fixed seed for the local itinerary generator; `None` uses the thread RNG.
    pub synth_seed: Option<u64>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("data_dir", &self.data_dir)
            .field("destinations_path", &self.destinations_path)
            .field("api_base_url", &self.api_base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("api_timeout_secs", &self.api_timeout_secs)
            .field("api_user_agent", &self.api_user_agent)
            .field("api_max_retries", &self.api_max_retries)
            .field("api_retry_backoff_base_ms", &self.api_retry_backoff_base_ms)
            .field("synth_seed", &self.synth_seed)
            .finish()
    }
}
