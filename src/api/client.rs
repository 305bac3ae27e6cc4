//! Push API 客户端
//!
//! 每次调用只发送一个带认证的 POST 请求，不重试、不批量。
//! 响应体不做解析，2xx 时原样返回给调用方。

use reqwest::header::CONTENT_TYPE;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use super::error::ApiError;
use crate::notification::NotifyRequest;

/// Push 服务基础 URL
pub const DEFAULT_BASE_URL: &str = "https://push.techulus.com/api/v1";

/// 默认请求超时
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// 携带 API key 的请求头
pub const API_KEY_HEADER: &str = "x-api-key";

/// 客户端配置
#[derive(Clone)]
pub struct ClientConfig {
    /// API 密钥
    pub api_key: String,
    /// 服务基础 URL（仅测试时覆盖）
    pub base_url: String,
    /// 请求超时
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// 不输出 api_key
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Push API 客户端
#[derive(Debug)]
pub struct PushClient {
    client: reqwest::blocking::Client,
    config: ClientConfig,
}

impl PushClient {
    /// 使用默认地址和超时创建客户端
    pub fn new(api_key: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_config(ClientConfig::new(api_key))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::Build)?;

        Ok(Self { client, config })
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// 发送单条通知
    pub fn notify(&self, req: &NotifyRequest) -> Result<String, ApiError> {
        self.post("/notify", req)
    }

    /// 异步发送：服务端受理即返回，不等待投递完成
    pub fn notify_async(&self, req: &NotifyRequest) -> Result<String, ApiError> {
        self.post("/notify-async", req)
    }

    /// 发送给分组内的所有设备
    pub fn notify_group(&self, group_id: &str, req: &NotifyRequest) -> Result<String, ApiError> {
        self.post(&group_path(group_id), req)
    }

    fn post(&self, path: &str, req: &NotifyRequest) -> Result<String, ApiError> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        let payload = serde_json::to_vec(req).map_err(ApiError::Encode)?;

        debug!(
            url = %url,
            payload_len = payload.len(),
            timeout_ms = self.config.timeout.as_millis() as u64,
            "Sending request to Push API"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.config.api_key)
            .body(payload)
            .send()
            .map_err(ApiError::Transport)?;

        // text() 消费 response，连接在任何返回路径上都会释放
        let status = response.status();
        let body = response.text().map_err(ApiError::ReadResponse)?;

        debug!(
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "API request completed"
        );

        if !status.is_success() {
            warn!(status = status.as_u16(), path, "Push API returned an error");
            return Err(ApiError::Service {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

/// 分组通知路径，group_id 作为单个路径段转义（`/` 和空格不会被当作分隔符）
pub fn group_path(group_id: &str) -> String {
    format!("/notify/group/{}", urlencoding::encode(group_id))
}
