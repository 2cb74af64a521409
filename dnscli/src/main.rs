//! dnscli: DNS 记录管理工具
//!
//! 通过统一的命令管理 Cloudflare、阿里云、腾讯云 DNSPod 上的解析记录。
//! Provider 逻辑位于 `dnscli-provider`，这里只负责参数解析、配置、输出。

mod cli;
mod commands;
mod config;
mod table;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;

/// RUST_LOG 优先；否则两个 crate 使用 `--log-level`，依赖库保持 warn
fn env_filter(log_level: &str) -> EnvFilter {
    if std::env::var_os("RUST_LOG").is_some() {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return filter;
        }
        eprintln!("warning: invalid RUST_LOG, falling back to --log-level");
    }
    EnvFilter::try_new(format!(
        "warn,dnscli={log_level},dnscli_provider={log_level}"
    ))
    .unwrap_or_else(|_| EnvFilter::new("warn"))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // 日志输出到 stderr，stdout 只留给命令结果；log 记录经 tracing-log 桥接
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false),
        )
        .with(env_filter(&cli.log_level))
        .init();

    match commands::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("command failed: {e:?}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
