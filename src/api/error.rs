//! API 调用错误分类

use thiserror::Error;

/// Push API 调用错误
///
/// 传输层失败（连接、DNS、TLS、超时）与服务端返回的非 2xx 状态分开，
/// 调用方据此决定如何展示。
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("creating HTTP client")]
    Build(#[source] reqwest::Error),

    #[error("marshaling request")]
    Encode(#[source] serde_json::Error),

    #[error("sending request")]
    Transport(#[source] reqwest::Error),

    #[error("reading response")]
    ReadResponse(#[source] reqwest::Error),

    /// 服务端错误，body 原样保留以便展示服务端自己的提示
    #[error("API error (HTTP {status}): {body}")]
    Service { status: u16, body: String },
}

impl ApiError {
    /// 是否为传输层错误（未拿到完整的 HTTP 响应）
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::ReadResponse(_))
    }

    /// 服务端返回的 HTTP 状态码
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}
