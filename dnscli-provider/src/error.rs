use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Broad classification of a [`ProviderError`].
///
/// Callers that only need to decide how to react (fix input, re-login, give up)
/// match on this instead of the fine-grained variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Missing or malformed input, raised before any request is sent.
    InvalidArgument,
    UnsupportedProvider,
    /// Zone or record does not exist.
    NotFound,
    AuthenticationFailed,
    /// Everything else, vendor-side or transport.
    Provider,
}

/// `": {msg}"` when the vendor sent a message
#[allow(clippy::ref_option)]
fn with_message(raw_message: &Option<String>) -> String {
    raw_message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

fn retry_hint(retry_after: &Option<u64>) -> String {
    retry_after
        .map(|secs| format!(" (retry after {secs}s)"))
        .unwrap_or_default()
}

/// `" in add_record for 'example.com'"`
#[allow(clippy::ref_option)]
fn during(operation: &Option<String>, target: &Option<String>) -> String {
    match (operation, target) {
        (Some(op), Some(t)) => format!(" in {op} for '{t}'"),
        (Some(op), None) => format!(" in {op}"),
        (None, Some(t)) => format!(" for '{t}'"),
        (None, None) => String::new(),
    }
}

/// `" list_records failed for 'example.com': (Code)"`
#[allow(clippy::ref_option)]
fn failure_context(
    operation: &Option<String>,
    target: &Option<String>,
    raw_code: &Option<String>,
) -> String {
    let mut out = match (operation, target) {
        (Some(op), Some(t)) => format!(" {op} failed for '{t}':"),
        (Some(op), None) => format!(" {op} failed:"),
        (None, Some(t)) => format!(" '{t}':"),
        (None, None) => String::new(),
    };
    if let Some(code) = raw_code.as_deref().filter(|c| !c.is_empty()) {
        out.push_str(&format!(" ({code})"));
    }
    out
}

/// DNS provider 统一错误类型
///
/// 除 `UnsupportedProvider` 外每个变体都带有产生错误的 `provider`。
/// 序列化时以 `code` 字段区分变体。
///
/// 适配器从不重试：`NetworkError`、`Timeout`、`RateLimited` 原样返回给调用方。
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// DNS 解析失败、连接被拒绝等
    #[error("[{provider}] Network error: {detail}")]
    NetworkError { provider: String, detail: String },

    #[error("[{provider}] Invalid credentials{}", with_message(.raw_message))]
    InvalidCredentials {
        provider: String,
        raw_message: Option<String>,
    },

    #[error(
        "[{provider}] Record '{record_name}' already exists{}{}",
        during(.operation, .target),
        with_message(.raw_message)
    )]
    RecordExists {
        provider: String,
        record_name: String,
        operation: Option<String>,
        target: Option<String>,
        raw_message: Option<String>,
    },

    #[error("[{provider}] Record '{record_id}' not found{}", with_message(.raw_message))]
    RecordNotFound {
        provider: String,
        record_id: String,
        raw_message: Option<String>,
    },

    /// 本地校验失败（空域名、不支持的记录类型等）或厂商拒绝某个参数
    #[error("[{provider}] Invalid parameter '{param}': {detail}")]
    InvalidParameter {
        provider: String,
        param: String,
        detail: String,
    },

    /// `provider_type` 原样保留无法识别的标签
    #[error("Unsupported DNS provider: {provider_type}")]
    UnsupportedProvider { provider_type: String },

    #[error(
        "[{provider}] Quota exceeded{}{}",
        during(.operation, .target),
        with_message(.raw_message)
    )]
    QuotaExceeded {
        provider: String,
        operation: Option<String>,
        target: Option<String>,
        raw_message: Option<String>,
    },

    /// HTTP 429 或等价错误码；`retry_after` 为秒
    #[error(
        "[{provider}] Rate limited{}{}{}",
        retry_hint(.retry_after),
        during(.operation, .target),
        with_message(.raw_message)
    )]
    RateLimited {
        provider: String,
        retry_after: Option<u64>,
        operation: Option<String>,
        target: Option<String>,
        raw_message: Option<String>,
    },

    #[error("[{provider}] Request timeout: {detail}")]
    Timeout { provider: String, detail: String },

    #[error("[{provider}] Domain '{domain}' not found{}", with_message(.raw_message))]
    DomainNotFound {
        provider: String,
        domain: String,
        raw_message: Option<String>,
    },

    #[error(
        "[{provider}] Domain '{domain}' is locked{}{}",
        during(.operation, .target),
        with_message(.raw_message)
    )]
    DomainLocked {
        provider: String,
        domain: String,
        operation: Option<String>,
        target: Option<String>,
        raw_message: Option<String>,
    },

    #[error(
        "[{provider}] Permission denied{}{}",
        during(.operation, .target),
        with_message(.raw_message)
    )]
    PermissionDenied {
        provider: String,
        operation: Option<String>,
        target: Option<String>,
        raw_message: Option<String>,
    },

    /// 响应体无法解析
    #[error("[{provider}] Parse error: {detail}")]
    ParseError { provider: String, detail: String },

    #[error("[{provider}] Serialization error: {detail}")]
    SerializationError { provider: String, detail: String },

    /// 未识别的厂商错误，保留失败的操作及其目标（域名或 `域名/记录ID`）
    #[error(
        "[{provider}]{} {raw_message}",
        failure_context(.operation, .target, .raw_code)
    )]
    Unknown {
        provider: String,
        operation: Option<String>,
        target: Option<String>,
        raw_code: Option<String>,
        raw_message: String,
    },
}

impl ProviderError {
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameter { .. } => ErrorKind::InvalidArgument,
            Self::UnsupportedProvider { .. } => ErrorKind::UnsupportedProvider,
            Self::RecordNotFound { .. } | Self::DomainNotFound { .. } => ErrorKind::NotFound,
            Self::InvalidCredentials { .. } => ErrorKind::AuthenticationFailed,
            Self::NetworkError { .. }
            | Self::RecordExists { .. }
            | Self::QuotaExceeded { .. }
            | Self::RateLimited { .. }
            | Self::Timeout { .. }
            | Self::DomainLocked { .. }
            | Self::PermissionDenied { .. }
            | Self::ParseError { .. }
            | Self::SerializationError { .. }
            | Self::Unknown { .. } => ErrorKind::Provider,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ProviderError::NetworkError {
            provider: "test".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[test] Network error: connection refused");
    }

    #[test]
    fn display_invalid_credentials_with_message() {
        let e = ProviderError::InvalidCredentials {
            provider: "aliyun".to_string(),
            raw_message: Some("bad key".to_string()),
        };
        assert_eq!(e.to_string(), "[aliyun] Invalid credentials: bad key");
    }

    #[test]
    fn display_invalid_parameter() {
        let e = ProviderError::InvalidParameter {
            provider: "tencent".to_string(),
            param: "record_id".to_string(),
            detail: "must not be empty".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[tencent] Invalid parameter 'record_id': must not be empty"
        );
    }

    #[test]
    fn display_unsupported_provider_names_tag() {
        let e = ProviderError::UnsupportedProvider {
            provider_type: "unknown-vendor".to_string(),
        };
        assert_eq!(e.to_string(), "Unsupported DNS provider: unknown-vendor");
    }

    #[test]
    fn display_rate_limited_with_retry() {
        let e = ProviderError::RateLimited {
            provider: "cloudflare".to_string(),
            retry_after: Some(30),
            operation: None,
            target: None,
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[cloudflare] Rate limited (retry after 30s)");
    }

    #[test]
    fn display_quota_exceeded_with_context() {
        let e = ProviderError::QuotaExceeded {
            provider: "aliyun".to_string(),
            operation: Some("add_record".to_string()),
            target: Some("example.com".to_string()),
            raw_message: Some("A record quota reached".to_string()),
        };
        assert_eq!(
            e.to_string(),
            "[aliyun] Quota exceeded in add_record for 'example.com': A record quota reached"
        );
    }

    #[test]
    fn display_record_exists_with_context() {
        let e = ProviderError::RecordExists {
            provider: "tencent".to_string(),
            record_name: "www".to_string(),
            operation: Some("add_record".to_string()),
            target: Some("example.com".to_string()),
            raw_message: None,
        };
        assert_eq!(
            e.to_string(),
            "[tencent] Record 'www' already exists in add_record for 'example.com'"
        );
    }

    #[test]
    fn display_domain_not_found_with_message() {
        let e = ProviderError::DomainNotFound {
            provider: "test".to_string(),
            domain: "example.com".to_string(),
            raw_message: Some("no such zone".to_string()),
        };
        assert_eq!(
            e.to_string(),
            "[test] Domain 'example.com' not found: no such zone"
        );
    }

    #[test]
    fn display_unknown_with_context() {
        let e = ProviderError::Unknown {
            provider: "aliyun".to_string(),
            operation: Some("add_record".to_string()),
            target: Some("example.com".to_string()),
            raw_code: Some("InternalError".to_string()),
            raw_message: "something broke".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[aliyun] add_record failed for 'example.com': (InternalError) something broke"
        );
    }

    #[test]
    fn display_unknown_without_context() {
        let e = ProviderError::Unknown {
            provider: "test".to_string(),
            operation: None,
            target: None,
            raw_code: None,
            raw_message: "something broke".to_string(),
        };
        assert_eq!(e.to_string(), "[test] something broke");
    }

    #[test]
    fn kind_projection() {
        let cases = [
            (
                ProviderError::InvalidParameter {
                    provider: "t".into(),
                    param: "type".into(),
                    detail: "x".into(),
                },
                ErrorKind::InvalidArgument,
            ),
            (
                ProviderError::UnsupportedProvider {
                    provider_type: "x".into(),
                },
                ErrorKind::UnsupportedProvider,
            ),
            (
                ProviderError::RecordNotFound {
                    provider: "t".into(),
                    record_id: "1".into(),
                    raw_message: None,
                },
                ErrorKind::NotFound,
            ),
            (
                ProviderError::DomainNotFound {
                    provider: "t".into(),
                    domain: "x.com".into(),
                    raw_message: None,
                },
                ErrorKind::NotFound,
            ),
            (
                ProviderError::InvalidCredentials {
                    provider: "t".into(),
                    raw_message: None,
                },
                ErrorKind::AuthenticationFailed,
            ),
            (
                ProviderError::Timeout {
                    provider: "t".into(),
                    detail: "30s".into(),
                },
                ErrorKind::Provider,
            ),
        ];

        for (err, kind) in cases {
            assert_eq!(err.kind(), kind, "{err}");
        }
    }

    #[test]
    fn serialize_tags_variant_code() {
        let e = ProviderError::RateLimited {
            provider: "cloudflare".to_string(),
            retry_after: Some(60),
            operation: None,
            target: None,
            raw_message: Some("too many requests".to_string()),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"RateLimited\""));
        assert!(json.contains("\"retry_after\":60"));
    }
}
