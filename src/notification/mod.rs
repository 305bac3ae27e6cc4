//! 通知请求 - 载荷定义、提示音枚举和请求构建
//!
//! # 使用示例
//! ```ignore
//! use push_cli::notification::{build_notify_request, NotifyRequest};
//!
//! let req = build_notify_request(&args, stdin)?;
//! client.notify(&req)?;
//! ```

pub mod builder;
pub mod error;
pub mod payload;

pub use builder::{build_notify_request, resolve_body, NotifyInput, BODY_FROM_STDIN};
pub use error::ValidationError;
pub use payload::{NotifyRequest, Sound};
