//! 请求构建 - 把命令行参数和 stdin 组装成 `NotifyRequest`

use std::io::Read;
use tracing::debug;

use super::error::ValidationError;
use super::payload::{NotifyRequest, Sound};

/// `--body -` 表示从 stdin 读取
pub const BODY_FROM_STDIN: &str = "-";

/// 构建请求所需的原始输入（未校验）
#[derive(Debug, Clone, Default)]
pub struct NotifyInput {
    pub title: String,
    pub body: Option<String>,
    pub sound: Option<String>,
    pub channel: Option<String>,
    pub link: Option<String>,
    pub image: Option<String>,
    pub time_sensitive: bool,
}

/// 根据原始输入构建通知请求
///
/// `input` 为已连接的输入流（管道或重定向）；交互式终端应传 `None`。
/// 只有当 body 缺失、为空或为 `-` 时才会读取 `input`。
/// 空字符串的可选字段（包括 sound）视为未设置。
pub fn build_notify_request<R: Read>(
    raw: &NotifyInput,
    input: Option<R>,
) -> Result<NotifyRequest, ValidationError> {
    let body = resolve_body(raw.body.as_deref(), input)?;
    let sound = non_empty(&raw.sound)
        .as_deref()
        .map(str::parse::<Sound>)
        .transpose()?;

    Ok(NotifyRequest {
        title: raw.title.clone(),
        body,
        sound,
        channel: non_empty(&raw.channel),
        link: non_empty(&raw.link),
        image: non_empty(&raw.image),
        time_sensitive: raw.time_sensitive,
    })
}

/// 解析正文：优先使用 `--body`，否则读取输入流并去除首尾空白
pub fn resolve_body<R: Read>(
    flag: Option<&str>,
    input: Option<R>,
) -> Result<String, ValidationError> {
    if let Some(body) = flag.filter(|b| !b.is_empty() && *b != BODY_FROM_STDIN) {
        return Ok(body.to_string());
    }

    let Some(mut input) = input else {
        return Err(ValidationError::BodyRequired);
    };

    let mut data = String::new();
    input
        .read_to_string(&mut data)
        .map_err(ValidationError::ReadInput)?;

    let trimmed = data.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BodyRequired);
    }

    debug!(len = trimmed.len(), "Read notification body from stdin");
    Ok(trimmed.to_string())
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    fn args(title: &str, body: Option<&str>) -> NotifyInput {
        NotifyInput {
            title: title.to_string(),
            body: body.map(String::from),
            ..Default::default()
        }
    }

    /// 读取即 panic，用来断言输入流没有被消费
    struct Untouched;

    impl Read for Untouched {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            panic!("input stream should not be read");
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn test_body_flag_wins_over_stdin() {
        let req = build_notify_request(&args("Test", Some("Hello")), Some(Untouched)).unwrap();
        assert_eq!(req.title, "Test");
        assert_eq!(req.body, "Hello");
    }

    #[test]
    fn test_body_flag_is_used_verbatim() {
        let req = build_notify_request(&args("Test", Some("  Hello  ")), None::<Untouched>).unwrap();
        assert_eq!(req.body, "  Hello  ");
    }

    #[test]
    fn test_dash_reads_stdin() {
        let input = Cursor::new("  piped message\n");
        let req = build_notify_request(&args("Test", Some("-")), Some(input)).unwrap();
        assert_eq!(req.body, "piped message");
    }

    #[test]
    fn test_missing_body_reads_stdin() {
        let input = Cursor::new("from pipe");
        let req = build_notify_request(&args("Test", None), Some(input)).unwrap();
        assert_eq!(req.body, "from pipe");
    }

    #[test]
    fn test_empty_body_flag_reads_stdin() {
        let input = Cursor::new("from pipe");
        let req = build_notify_request(&args("Test", Some("")), Some(input)).unwrap();
        assert_eq!(req.body, "from pipe");
    }

    #[test]
    fn test_no_body_without_stdin_fails() {
        let err = build_notify_request(&args("Test", None), None::<Untouched>).unwrap_err();
        assert!(matches!(err, ValidationError::BodyRequired));
        assert!(err.to_string().contains("body is required"));
    }

    #[test]
    fn test_dash_without_stdin_fails() {
        let err = build_notify_request(&args("Test", Some("-")), None::<Untouched>).unwrap_err();
        assert!(matches!(err, ValidationError::BodyRequired));
    }

    #[test]
    fn test_whitespace_only_stdin_fails() {
        let input = Cursor::new("   \n  ");
        let err = build_notify_request(&args("Test", None), Some(input)).unwrap_err();
        assert!(err.to_string().contains("body is required"));
    }

    #[test]
    fn test_stdin_read_failure() {
        let err = build_notify_request(&args("Test", None), Some(Broken)).unwrap_err();
        assert!(matches!(err, ValidationError::ReadInput(_)));
    }

    #[test]
    fn test_empty_title_is_forwarded() {
        let req = build_notify_request(&args("", Some("Hello")), None::<Untouched>).unwrap();
        assert_eq!(req.title, "");
    }

    #[test]
    fn test_valid_sound() {
        let mut a = args("Test", Some("Hello"));
        a.sound = Some("arcade".to_string());
        let req = build_notify_request(&a, None::<Untouched>).unwrap();
        assert_eq!(req.sound, Some(Sound::Arcade));
    }

    #[test]
    fn test_every_listed_sound_is_accepted() {
        for sound in Sound::ALL {
            let mut a = args("Test", Some("Hello"));
            a.sound = Some(sound.as_str().to_string());
            let req = build_notify_request(&a, None::<Untouched>).unwrap();
            assert_eq!(req.sound, Some(sound));
        }
    }

    #[test]
    fn test_invalid_sound_lists_valid_sounds_in_order() {
        let mut a = args("Test", Some("Hello"));
        a.sound = Some("invalid".to_string());
        let err = build_notify_request(&a, None::<Untouched>).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("\"invalid\""));
        assert!(msg.contains(
            "default, arcade, correct, fail, harp, reveal, bubble, doorbell, flute, money, scifi, clear, elevator, guitar, pop"
        ));
    }

    #[test]
    fn test_all_flags() {
        let a = NotifyInput {
            title: "Test".to_string(),
            body: Some("Hello".to_string()),
            sound: Some("pop".to_string()),
            channel: Some("alerts".to_string()),
            link: Some("https://example.com".to_string()),
            image: Some("https://example.com/img.png".to_string()),
            time_sensitive: true,
        };
        let req = build_notify_request(&a, None::<Untouched>).unwrap();

        assert_eq!(req.sound, Some(Sound::Pop));
        assert_eq!(req.channel.as_deref(), Some("alerts"));
        assert_eq!(req.link.as_deref(), Some("https://example.com"));
        assert_eq!(req.image.as_deref(), Some("https://example.com/img.png"));
        assert!(req.time_sensitive);
    }

    #[test]
    fn test_empty_sound_is_left_out() {
        let mut a = args("Test", Some("Hello"));
        a.sound = Some(String::new());
        let req = build_notify_request(&a, None::<Untouched>).unwrap();
        assert!(req.sound.is_none());

        let value = serde_json::to_value(&req).unwrap();
        assert!(value.get("sound").is_none());
    }

    #[test]
    fn test_empty_optional_flags_become_none() {
        let mut a = args("Test", Some("Hello"));
        a.channel = Some(String::new());
        a.link = Some(String::new());
        let req = build_notify_request(&a, None::<Untouched>).unwrap();
        assert!(req.channel.is_none());
        assert!(req.link.is_none());
        assert!(req.image.is_none());
    }
}
