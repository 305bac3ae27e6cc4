//! 请求构建阶段的校验错误

use thiserror::Error;

use super::payload::Sound;

/// 发起网络请求前检测到的输入错误
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("body is required (use --body flag or pipe via stdin)")]
    BodyRequired,

    #[error("invalid sound {value:?}, valid sounds: {valid}", valid = Sound::valid_names())]
    InvalidSound { value: String },

    #[error("reading stdin")]
    ReadInput(#[source] std::io::Error),
}
