use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{Domain, Parameter, ProviderMetadata, Record};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（各 Provider 格式不同）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 失败的操作名（如 `list_records`）
    pub operation: Option<String>,
    /// 记录名称（用于 `RecordExists` 等错误）
    pub record_name: Option<String>,
    /// 记录 ID（用于 `RecordNotFound` 等错误）
    pub record_id: Option<String>,
    /// 域名（用于 `DomainNotFound` 等错误）
    pub domain: Option<String>,
}

impl ErrorContext {
    pub fn operation(operation: &str) -> Self {
        Self {
            operation: Some(operation.to_string()),
            ..Self::default()
        }
    }

    /// Context for an operation on `param`, filling whatever fields are set.
    pub fn for_param(operation: &str, param: &Parameter) -> Self {
        let non_empty = |s: &str| (!s.trim().is_empty()).then(|| s.to_string());
        Self {
            operation: Some(operation.to_string()),
            record_name: non_empty(&param.name),
            record_id: non_empty(&param.id),
            domain: non_empty(&param.domain),
        }
    }

    /// The most specific thing the operation was aimed at.
    fn target(&self) -> Option<String> {
        match (&self.domain, &self.record_id) {
            (Some(d), Some(id)) => Some(format!("{d}/{id}")),
            (Some(d), None) => Some(d.clone()),
            (None, Some(id)) => Some(id.clone()),
            (None, None) => None,
        }
    }
}

/// 厂商错误码归类结果
///
/// 各 Provider 只需把错误码归到某一类，统一错误的构造由 [`ErrorClass::into_error`] 完成。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorClass {
    Credentials,
    PermissionDenied,
    /// 可重试
    RateLimited,
    Quota,
    DomainNotFound,
    DomainLocked,
    RecordNotFound,
    RecordExists,
    /// 参数无效，携带出错的参数名
    Invalid(&'static str),
}

impl ErrorClass {
    fn into_error(self, provider: &str, raw: RawApiError, context: ErrorContext) -> ProviderError {
        const UNKNOWN: &str = "<unknown>";
        let provider = provider.to_string();
        let raw_message = Some(raw.message);
        let or_unknown = |v: Option<String>| v.unwrap_or_else(|| UNKNOWN.to_string());
        let target = context.target();
        let operation = context.operation;

        match self {
            Self::Credentials => ProviderError::InvalidCredentials { provider, raw_message },
            Self::PermissionDenied => ProviderError::PermissionDenied {
                provider,
                operation,
                target,
                raw_message,
            },
            Self::RateLimited => ProviderError::RateLimited {
                provider,
                retry_after: None,
                operation,
                target,
                raw_message,
            },
            Self::Quota => ProviderError::QuotaExceeded {
                provider,
                operation,
                target,
                raw_message,
            },
            Self::DomainNotFound => ProviderError::DomainNotFound {
                provider,
                domain: or_unknown(context.domain),
                raw_message,
            },
            Self::DomainLocked => ProviderError::DomainLocked {
                provider,
                domain: or_unknown(context.domain),
                operation,
                target,
                raw_message,
            },
            Self::RecordNotFound => ProviderError::RecordNotFound {
                provider,
                record_id: or_unknown(context.record_id),
                raw_message,
            },
            Self::RecordExists => ProviderError::RecordExists {
                provider,
                record_name: or_unknown(context.record_name),
                operation,
                target,
                raw_message,
            },
            Self::Invalid(param) => ProviderError::InvalidParameter {
                provider,
                param: param.to_string(),
                detail: raw_message.unwrap_or_default(),
            },
        }
    }
}

/// Provider 错误映射 Trait（内部使用）
/// 各 Provider 实现 `classify`，未归类的错误码统一落到 `Unknown`
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 厂商错误码归类；`None` 表示未识别
    fn classify(&self, code: &str, context: &ErrorContext) -> Option<ErrorClass>;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref().and_then(|code| self.classify(code, &context)) {
            Some(class) => class.into_error(self.provider_name(), raw, context),
            None => self.unknown_error(raw, &context),
        }
    }

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未知错误（fallback），保留操作上下文
    fn unknown_error(&self, raw: RawApiError, context: &ErrorContext) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            operation: context.operation.clone(),
            target: context.target(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// DNS 提供商 Trait
///
/// Every operation takes a [`Parameter`]; `domain` is required for all record
/// operations and checked before any request is sent.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 获取 Provider 元数据（类型级别）
    fn metadata() -> ProviderMetadata
    where
        Self: Sized;

    /// Every record in `param.domain` matching the optional name prefix,
    /// type, value and line filters, across all pages.
    async fn list_records(&self, param: &Parameter) -> Result<Vec<Record>>;

    /// One record by `param.id`.
    async fn get_record(&self, param: &Parameter) -> Result<Record>;

    /// 创建 DNS 记录
    async fn add_record(&self, param: &Parameter) -> Result<()>;

    /// Replaces the record `param.id` with the given fields. No merging with
    /// the current record happens here.
    async fn update_record(&self, param: &Parameter) -> Result<()>;

    /// 删除 DNS 记录
    async fn delete_record(&self, param: &Parameter) -> Result<()>;

    /// Every zone visible to the account, with status and creation time.
    async fn describe_domains(&self) -> Result<Vec<Domain>>;

    /// Zone names only.
    async fn list_domains(&self) -> Result<Vec<String>> {
        Ok(self
            .describe_domains()
            .await?
            .into_iter()
            .map(|d| d.name)
            .collect())
    }
}
