// src/cli/config.rs
//! config 命令 - 保存和查看 API key

use crate::config::{mask_api_key, Config, ConfigStore};
use anyhow::Result;
use clap::Subcommand;
use tracing::info;

/// config 子命令
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Save your Push API key
    ///
    /// The key is stored in ~/.push/config.json. Keys saved by older releases
    /// in ~/.push/config.yaml are not read; run set-key again to migrate.
    SetKey {
        /// API key
        api_key: String,
    },
    /// Display current configuration
    Show,
}

/// 处理 config 命令，返回要打印到 stdout 的内容
pub fn handle_config(action: ConfigAction, store: &ConfigStore, mut config: Config) -> Result<String> {
    match action {
        ConfigAction::SetKey { api_key } => {
            config.set_api_key(&api_key)?;
            store.save(&config)?;
            info!(path = %store.path().display(), "API key saved");
            Ok("API key saved successfully".to_string())
        }
        ConfigAction::Show => Ok(show_config(&config, store)),
    }
}

pub fn show_config(config: &Config, store: &ConfigStore) -> String {
    match config.api_key() {
        Some(key) => format!("API Key: {}", mask_api_key(key)),
        None if store.has_legacy_config() => format!(
            "No API key configured. Found {} from an older release, which is no longer read.\n\
             Run: push config set-key <api-key>",
            store.legacy_path().display()
        ),
        None => "No API key configured. Run: push config set-key <api-key>".to_string(),
    }
}
