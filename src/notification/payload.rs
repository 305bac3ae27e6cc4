//! 通知载荷 - 发送给 Push 服务的 JSON 请求体

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::error::ValidationError;

/// 通知提示音
///
/// 顺序即服务端文档顺序，错误提示按此顺序列出。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sound {
    Default,
    Arcade,
    Correct,
    Fail,
    Harp,
    Reveal,
    Bubble,
    Doorbell,
    Flute,
    Money,
    Scifi,
    Clear,
    Elevator,
    Guitar,
    Pop,
}

impl Sound {
    /// 所有可用提示音（有序）
    pub const ALL: [Sound; 15] = [
        Sound::Default,
        Sound::Arcade,
        Sound::Correct,
        Sound::Fail,
        Sound::Harp,
        Sound::Reveal,
        Sound::Bubble,
        Sound::Doorbell,
        Sound::Flute,
        Sound::Money,
        Sound::Scifi,
        Sound::Clear,
        Sound::Elevator,
        Sound::Guitar,
        Sound::Pop,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sound::Default => "default",
            Sound::Arcade => "arcade",
            Sound::Correct => "correct",
            Sound::Fail => "fail",
            Sound::Harp => "harp",
            Sound::Reveal => "reveal",
            Sound::Bubble => "bubble",
            Sound::Doorbell => "doorbell",
            Sound::Flute => "flute",
            Sound::Money => "money",
            Sound::Scifi => "scifi",
            Sound::Clear => "clear",
            Sound::Elevator => "elevator",
            Sound::Guitar => "guitar",
            Sound::Pop => "pop",
        }
    }

    /// 逗号分隔的提示音列表，用于错误信息
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sound {
    type Err = ValidationError;

    /// 精确匹配，不做大小写折叠
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|sound| sound.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidSound {
                value: s.to_string(),
            })
    }
}

/// 通知请求体
///
/// 可选字段为零值（None、空字符串、false）时不出现在序列化结果中，
/// 服务端会区分"未设置"和"显式为空"。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyRequest {
    /// 标题（原样转发，由服务端校验）
    pub title: String,
    /// 正文
    pub body: String,
    /// 提示音，None 表示使用服务端默认
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<Sound>,
    /// 分组频道
    #[serde(skip_serializing_if = "is_blank")]
    pub channel: Option<String>,
    /// 点击通知时打开的链接
    #[serde(skip_serializing_if = "is_blank")]
    pub link: Option<String>,
    /// 图片 URL
    #[serde(skip_serializing_if = "is_blank")]
    pub image: Option<String>,
    /// 时效性通知
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub time_sensitive: bool,
}

impl NotifyRequest {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..Default::default()
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}
