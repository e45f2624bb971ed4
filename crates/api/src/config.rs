use std::env;
use std::path::PathBuf;

const DEFAULT_PRODUCT_CSV: &str = "data/product.csv";
const DEFAULT_CHAT_CSV: &str = "data/chat_data.csv";
const DEFAULT_TEMPLATES_ROOT: &str = "templates";
const DEFAULT_BIND: &str = "0.0.0.0:5000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub product_csv: PathBuf,
    pub chat_csv: PathBuf,
    pub templates_root: PathBuf,
    pub bind: String,
    /// Empty means any origin may call the API.
    pub allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            product_csv: PathBuf::from(DEFAULT_PRODUCT_CSV),
            chat_csv: PathBuf::from(DEFAULT_CHAT_CSV),
            templates_root: PathBuf::from(DEFAULT_TEMPLATES_ROOT),
            bind: DEFAULT_BIND.to_string(),
            allowed_origins: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            product_csv: env_path("GLUTEN_PRODUCT_CSV").unwrap_or(defaults.product_csv),
            chat_csv: env_path("GLUTEN_CHAT_CSV").unwrap_or(defaults.chat_csv),
            templates_root: env_path("GLUTEN_TEMPLATES_ROOT").unwrap_or(defaults.templates_root),
            bind: env::var("GLUTEN_BIND").unwrap_or(defaults.bind),
            allowed_origins: env::var("GLUTEN_ALLOWED_ORIGINS")
                .map(|value| parse_allowed_origins(&value))
                .unwrap_or_default(),
        }
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn parse_allowed_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|origin| origin.trim().trim_end_matches('/').to_string())
        .filter(|origin| !origin.is_empty() && origin != "*")
        .collect()
}
