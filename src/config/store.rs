//! 凭据存储 - `~/.push/config.json`
//!
//! 文件格式为 JSON 对象，API key 存在 `api_key` 字段，其他字段原样保留。
//! 配置在进程启动时读取一次，以 `Config` 值的形式传给各命令。

use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::ConfigError;

/// 配置目录（位于 home 下）
pub const CONFIG_DIR: &str = ".push";

/// 配置文件名
pub const CONFIG_FILE: &str = "config.json";

/// 旧版本使用的 YAML 配置文件名，不再读取
pub const LEGACY_CONFIG_FILE: &str = "config.yaml";

/// 短 key 的掩码
pub const MASK_PLACEHOLDER: &str = "****";

/// 本地配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

impl Config {
    /// 已配置的 API key（空字符串视为未配置）
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }

    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key().ok_or(ConfigError::MissingApiKey)
    }

    /// 设置 API key，去除首尾空白后不能为空
    pub fn set_api_key(&mut self, key: &str) -> Result<(), ConfigError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::EmptyKey);
        }
        self.api_key = Some(key.to_string());
        Ok(())
    }
}

/// 配置文件读写
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// 使用当前用户 home 下的默认路径
    pub fn from_home() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        Ok(Self::at(home.join(CONFIG_DIR).join(CONFIG_FILE)))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 同目录下旧版 `config.yaml` 的路径
    pub fn legacy_path(&self) -> PathBuf {
        self.path.with_file_name(LEGACY_CONFIG_FILE)
    }

    pub fn has_legacy_config(&self) -> bool {
        self.legacy_path().exists()
    }

    /// 读取配置；文件不存在时返回空配置，格式错误直接报错
    pub fn load(&self) -> Result<Config, ConfigError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No config file, using empty config");
                return Ok(Config::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), "Loaded config");
        Ok(config)
    }

    /// 保存配置，目录权限 0700，文件权限 0600
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            create_private_dir(dir)?;
        }

        let content = serde_json::to_string_pretty(config).map_err(ConfigError::Encode)?;

        // 先写临时文件再 rename，失败时不留下临时文件
        let temp_path = self.path.with_extension("json.tmp");
        let result = write_private(&temp_path, content.as_bytes()).and_then(|()| {
            fs::rename(&temp_path, &self.path).map_err(|source| ConfigError::Write {
                path: self.path.clone(),
                source,
            })
        });
        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result?;

        debug!(path = %self.path.display(), "Saved config");
        Ok(())
    }
}

/// 掩码显示 API key：超过 8 个字符时保留首尾各 4 个，否则固定为 `****`
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return MASK_PLACEHOLDER.to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

fn create_private_dir(dir: &Path) -> Result<(), ConfigError> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder.create(dir).map_err(|source| ConfigError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

fn write_private(path: &Path, content: &[u8]) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path).map_err(write_err)?;
    file.write_all(content).map_err(write_err)?;
    file.sync_all().map_err(write_err)?;

    // 文件已存在时 mode() 不生效，显式收紧
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|source| {
            ConfigError::Permissions {
                path: path.to_path_buf(),
                source,
            }
        })?;
    }

    Ok(())
}
