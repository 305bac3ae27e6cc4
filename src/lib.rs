//! Push CLI - 通过 Push 服务从命令行发送推送通知

pub mod api;
pub mod cli;
pub mod config;
pub mod notification;

pub use api::{ApiError, ClientConfig, PushClient};
pub use config::{mask_api_key, Config, ConfigError, ConfigStore};
pub use notification::{build_notify_request, NotifyRequest, Sound, ValidationError};
