use std::path::PathBuf;
use thiserror::Error;

/// 本地配置读写错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("finding home directory")]
    HomeDirNotFound,

    #[error("reading config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("encoding config")]
    Encode(#[source] serde_json::Error),

    #[error("creating config directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("writing config file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("setting permissions on {}", path.display())]
    Permissions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("API key cannot be empty")]
    EmptyKey,

    #[error("No API key configured. Run: push config set-key <api-key>")]
    MissingApiKey,
}
