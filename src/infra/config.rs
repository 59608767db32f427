use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub log_path: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    pub allow_origins: Vec<String>,
    pub address: String,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    /// Base for public object URLs. Falls back to `url`.
    #[serde(default)]
    pub public_url: Option<String>,
}

impl SupabaseConfig {
    pub fn public_base(&self) -> &str {
        self.public_url.as_deref().unwrap_or(&self.url)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_avatar_bucket")]
    pub avatar_bucket: String,
    #[serde(default = "default_cache_control")]
    pub cache_control: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            avatar_bucket: default_avatar_bucket(),
            cache_control: default_cache_control(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub access_cookie_name: String,
    pub refresh_cookie_name: String,
    pub refresh_max_age: i64,
    pub cookie_secure: bool,
    pub cookie_http_only: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub logger: LoggerConfig,
    pub application: ApplicationConfig,
    pub supabase: SupabaseConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<AppConfig> {
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_upload_bytes() -> usize {
    5 * 1024 * 1024
}

fn default_avatar_bucket() -> String {
    "avatars".to_string()
}

fn default_cache_control() -> u32 {
    3600
}
