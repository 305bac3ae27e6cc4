//! Push 服务 HTTP 客户端

pub mod client;
pub mod error;

pub use client::{group_path, ClientConfig, PushClient, API_KEY_HEADER, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::ApiError;
