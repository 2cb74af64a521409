//! Command-line definition

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use dnscli_provider::ProviderCredentials;

#[derive(Parser, Debug)]
#[command(
    name = "dnscli",
    version,
    about = "DNS 记录管理工具，支持 Cloudflare、阿里云、腾讯云 DNSPod",
    long_about = None
)]
pub struct Cli {
    /// 配置文件路径 [default: <config_dir>/dnscli/config.json]
    #[arg(short = 'c', long, global = true, env = "DNSCLI_CONFIG")]
    pub config: Option<PathBuf>,

    /// 使用的配置名，缺省为默认配置
    #[arg(short = 'N', long = "config-name", global = true)]
    pub profile: Option<String>,

    #[command(flatten)]
    pub credentials: CredentialArgs,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "warn", env = "DNSCLI_LOG_LEVEL", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// 覆盖配置文件中凭证的命令行参数
#[derive(Args, Debug, Default)]
pub struct CredentialArgs {
    /// API 密钥 ID（阿里云 / 腾讯云）
    #[arg(long, global = true)]
    pub secret_id: Option<String>,

    /// API 密钥 Secret（阿里云 / 腾讯云）
    #[arg(long, global = true)]
    pub secret_key: Option<String>,

    /// Cloudflare API Token
    #[arg(long, global = true)]
    pub api_token: Option<String>,

    /// Cloudflare Global API Key
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Cloudflare 账户邮箱
    #[arg(long, global = true)]
    pub api_email: Option<String>,
}

impl CredentialArgs {
    pub fn to_credentials(&self) -> ProviderCredentials {
        ProviderCredentials {
            secret_id: self.secret_id.clone(),
            secret_key: self.secret_key.clone(),
            api_token: self.api_token.clone(),
            api_key: self.api_key.clone(),
            api_email: self.api_email.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 配置管理
    #[command(subcommand)]
    Config(ConfigCommand),

    /// 域名解析记录管理
    #[command(subcommand)]
    Record(RecordCommand),

    /// 域名管理
    #[command(subcommand)]
    Domain(DomainCommand),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// 添加 DNS 服务商配置，凭证取自 --secret-id 等参数
    Add {
        /// 配置名
        name: String,

        /// DNS 服务商 (aliyun, tencent, cloudflare)
        #[arg(short = 'p', long = "provider", visible_alias = "dnsapi")]
        provider: String,

        /// 设置为默认配置
        #[arg(long)]
        default: bool,
    },

    /// 查看 DNS 服务商配置
    #[command(visible_alias = "ls")]
    List,

    /// 设置默认 DNS 服务商配置
    #[command(visible_aliases = ["set", "default"])]
    SetDefault {
        /// 配置名
        name: String,
    },
}

/// create/update 共用的可选参数
#[derive(Args, Debug, Default)]
pub struct RecordOptions {
    /// 解析记录 TTL，0 表示使用服务商默认值
    #[arg(long, default_value_t = 0)]
    pub ttl: u32,

    /// 解析线路名（阿里云 / 腾讯云）
    #[arg(long)]
    pub line: Option<String>,

    /// 启用 Cloudflare 代理（仅 A/AAAA/CNAME）
    #[arg(long)]
    pub proxied: bool,

    /// MX 优先级，或 SRV 值中省略的优先级
    #[arg(long, default_value_t = 0)]
    pub priority: u16,
}

#[derive(Subcommand, Debug)]
pub enum RecordCommand {
    /// 创建解析记录
    #[command(visible_aliases = ["add", "a"])]
    Create {
        domain: String,
        name: String,
        #[arg(value_name = "TYPE")]
        record_type: String,
        value: String,
        #[command(flatten)]
        options: RecordOptions,
    },

    /// 查询解析记录
    #[command(visible_aliases = ["ls", "l"])]
    List {
        domain: String,

        /// 解析记录名（前缀匹配）
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// 解析记录类型
        #[arg(short = 't', long = "type")]
        record_type: Option<String>,

        /// 解析记录值（前缀匹配）
        #[arg(short = 'v', long)]
        value: Option<String>,

        /// 解析线路名
        #[arg(long)]
        line: Option<String>,
    },

    /// 查询单条解析记录
    Get { domain: String, id: String },

    /// 更新解析记录
    #[command(visible_alias = "u")]
    Update {
        domain: String,
        id: String,
        name: String,
        #[arg(value_name = "TYPE")]
        record_type: String,
        value: String,
        #[command(flatten)]
        options: RecordOptions,
    },

    /// 删除解析记录
    #[command(visible_aliases = ["del", "d"])]
    Delete {
        domain: String,
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DomainCommand {
    /// 查看域名列表
    #[command(visible_aliases = ["ls", "l"])]
    List,
}
