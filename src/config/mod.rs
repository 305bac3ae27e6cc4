//! 本地配置 - API key 的持久化与掩码显示

pub mod error;
pub mod store;

pub use error::ConfigError;
pub use store::{mask_api_key, Config, ConfigStore, CONFIG_DIR, CONFIG_FILE, LEGACY_CONFIG_FILE, MASK_PLACEHOLDER};
