// src/cli/notify.rs
//! notify / notify-async / notify-group 命令处理

use crate::api::{ApiError, PushClient};
use crate::config::Config;
use crate::notification::{build_notify_request, NotifyInput, NotifyRequest};
use anyhow::Result;
use clap::Args;
use std::io::Read;
use tracing::debug;

/// 三个通知命令共用的参数
#[derive(Args, Debug, Clone, Default)]
pub struct NotifyArgs {
    /// Notification title
    #[arg(long)]
    pub title: String,

    /// Notification body (use '-' to read from stdin)
    #[arg(long)]
    pub body: Option<String>,

    /// Notification sound
    #[arg(long)]
    pub sound: Option<String>,

    /// Notification channel
    #[arg(long)]
    pub channel: Option<String>,

    /// URL to open when notification is tapped
    #[arg(long)]
    pub link: Option<String>,

    /// Image URL for the notification
    #[arg(long)]
    pub image: Option<String>,

    /// Mark as time-sensitive
    #[arg(long)]
    pub time_sensitive: bool,
}

impl From<&NotifyArgs> for NotifyInput {
    fn from(args: &NotifyArgs) -> Self {
        Self {
            title: args.title.clone(),
            body: args.body.clone(),
            sound: args.sound.clone(),
            channel: args.channel.clone(),
            link: args.link.clone(),
            image: args.image.clone(),
            time_sensitive: args.time_sensitive,
        }
    }
}

/// notify-group 命令参数
#[derive(Args, Debug, Clone)]
pub struct NotifyGroupArgs {
    /// Group ID
    pub group_id: String,

    #[command(flatten)]
    pub notify: NotifyArgs,
}

/// 发送目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyTarget {
    Single,
    Async,
    Group(String),
}

/// 处理通知命令，返回服务端原始响应
///
/// 先校验输入，再检查 API key，最后发起一次请求。
pub fn handle_notify<R: Read>(
    target: &NotifyTarget,
    args: &NotifyArgs,
    config: &Config,
    input: Option<R>,
) -> Result<String> {
    let req = build_notify_request(&NotifyInput::from(args), input)?;
    let api_key = config.require_api_key()?;
    let client = PushClient::new(api_key)?;
    Ok(dispatch(&client, target, &req)?)
}

/// 按目标调用对应接口
pub fn dispatch(
    client: &PushClient,
    target: &NotifyTarget,
    req: &NotifyRequest,
) -> Result<String, ApiError> {
    debug!(?target, "Dispatching notification");
    match target {
        NotifyTarget::Single => client.notify(req),
        NotifyTarget::Async => client.notify_async(req),
        NotifyTarget::Group(group_id) => client.notify_group(group_id, req),
    }
}
