//! Provider 公共工具函数

use std::time::Duration;

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use reqwest::Client;
use sha2::{Digest, Sha256};

use crate::error::{ProviderError, Result};

type HmacSha256 = Hmac<Sha256>;

// ============ HTTP Client ============

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(provider: &str) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| ProviderError::NetworkError {
            provider: provider.to_string(),
            detail: format!("failed to create HTTP client: {e}"),
        })
}

/// Strips a trailing slash so paths can be appended with `format!`.
pub fn trim_endpoint(endpoint: &str) -> String {
    endpoint.trim_end_matches('/').to_string()
}

/// `https://host[:port]/...` -> `host[:port]`，签名用
pub fn endpoint_host(endpoint: &str) -> String {
    let without_scheme = endpoint
        .split_once("://")
        .map_or(endpoint, |(_, rest)| rest);
    without_scheme
        .split('/')
        .next()
        .unwrap_or(without_scheme)
        .to_string()
}

// ============ 凭证 ============

/// 取出非空凭证字段，缺失时返回 `InvalidCredentials`
pub fn require_credential(value: Option<&str>, provider: &str, label: &str) -> Result<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
        .ok_or_else(|| ProviderError::InvalidCredentials {
            provider: provider.to_string(),
            raw_message: Some(format!("missing {label}")),
        })
}

// ============ HMAC-SHA256 ============

/// HMAC-SHA256 计算（供 aliyun/dnspod 签名使用）
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    // HMAC accepts keys of any length, so this never takes the fallback branch
    let Ok(mut mac) = HmacSha256::new_from_slice(key) else {
        return Vec::new();
    };
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// 十六进制 SHA-256 摘要
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// ACS3 / TC3 共用的规范请求，URI 固定为 `/`
pub struct CanonicalRequest<'a> {
    pub query: &'a str,
    /// 小写请求头，已按名称排序
    pub headers: &'a [(&'a str, &'a str)],
    pub payload: &'a [u8],
}

impl CanonicalRequest<'_> {
    pub fn signed_headers(&self) -> String {
        self.headers
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(";")
    }

    /// 规范请求的摘要，即待签名字符串的最后一行
    pub fn digest(&self) -> String {
        let mut text = format!("POST\n/\n{}\n", self.query);
        for (name, value) in self.headers {
            text.push_str(&format!("{name}:{value}\n"));
        }
        text.push('\n');
        text.push_str(&self.signed_headers());
        text.push('\n');
        text.push_str(&sha256_hex(self.payload));

        log::trace!("CanonicalRequest:\n{text}");
        sha256_hex(text.as_bytes())
    }
}

// ============ 时间格式 ============

/// `Record.updated` / `Domain.created` 的统一格式
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 毫秒时间戳 -> `%Y-%m-%d %H:%M:%S` (UTC)
pub fn format_timestamp_millis(millis: i64) -> Option<String> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.format(DATETIME_FORMAT).to_string())
}

/// RFC3339 -> `%Y-%m-%d %H:%M:%S` (UTC)，无法解析时原样返回
pub fn format_rfc3339(value: &str) -> String {
    DateTime::parse_from_rfc3339(value).map_or_else(
        |_| value.to_string(),
        |dt| dt.with_timezone(&Utc).format(DATETIME_FORMAT).to_string(),
    )
}

// ============ 域名名称处理 ============

/// 去掉域名末尾的点
pub fn normalize_domain_name(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}

/// 将完整域名转换为相对名称
/// 如: "www.example.com" + "example.com" -> "www"
/// 如: "example.com" + "example.com" -> "@"
pub fn full_name_to_relative(full_name: &str, zone_name: &str) -> String {
    let full = normalize_domain_name(full_name);
    let zone = normalize_domain_name(zone_name);

    if full.eq_ignore_ascii_case(&zone) {
        "@".to_string()
    } else if let Some(subdomain) = full.strip_suffix(&format!(".{zone}")) {
        subdomain.to_string()
    } else {
        full
    }
}

/// 将相对名称转换为完整域名
/// 如: "www" + "example.com" -> "www.example.com"
/// 如: "@" + "example.com" -> "example.com"
pub fn relative_to_full_name(relative_name: &str, zone_name: &str) -> String {
    let zone = normalize_domain_name(zone_name);
    let relative = relative_name.trim();

    if relative == "@" || relative.is_empty() {
        zone
    } else if relative.ends_with(&format!(".{zone}")) {
        relative.to_string()
    } else {
        format!("{relative}.{zone}")
    }
}
