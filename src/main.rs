//! Push CLI
//!
//! 从命令行发送推送通知

use anyhow::Result;
use clap::{Parser, Subcommand};
use push_cli::{
    cli::{handle_config, handle_notify, ConfigAction, NotifyArgs, NotifyGroupArgs, NotifyTarget},
    config::ConfigStore,
};
use std::io::{self, IsTerminal, StdinLock};
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "push")]
#[command(about = "Push by Techulus - Send push notifications from the command line")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a push notification
    Notify(NotifyArgs),
    /// Send a push notification asynchronously
    NotifyAsync(NotifyArgs),
    /// Send a push notification to a group
    NotifyGroup(NotifyGroupArgs),
    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// 非交互 stdin（管道或重定向）才作为正文输入
fn attached_stdin() -> Option<StdinLock<'static>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        None
    } else {
        Some(stdin.lock())
    }
}

fn run(cli: Cli) -> Result<()> {
    let store = ConfigStore::from_home()?;
    let config = store.load()?;

    let output = match cli.command {
        Commands::Notify(args) => {
            handle_notify(&NotifyTarget::Single, &args, &config, attached_stdin())?
        }
        Commands::NotifyAsync(args) => {
            handle_notify(&NotifyTarget::Async, &args, &config, attached_stdin())?
        }
        Commands::NotifyGroup(NotifyGroupArgs { group_id, notify }) => {
            handle_notify(&NotifyTarget::Group(group_id), &notify, &config, attached_stdin())?
        }
        Commands::Config { action } => handle_config(action, &store, config)?,
    };

    println!("{}", output);
    Ok(())
}

fn main() -> ExitCode {
    // 通过 RUST_LOG 控制日志级别，日志只写 stderr，stdout 保留给响应内容
    // 例如: RUST_LOG=push_cli=debug push notify --title hi --body there
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("push_cli=warn,push=warn"));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    // 参数错误也按 1 退出；--help / --version 正常退出
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
