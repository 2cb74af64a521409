//! 请求发送与响应解析
//!
//! 各 Provider 自行构造 `RequestBuilder`（URL、认证头、签名），这里负责发送、记录日志，
//! 以及把传输层失败归类为 `ProviderError`。每个请求只发送一次。

use reqwest::{RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::traits::RawApiError;
use crate::utils::log_sanitizer::truncate_for_log;

/// 已读完 body 的响应
#[derive(Debug)]
pub(crate) struct Reply {
    pub status: u16,
    pub body: String,
    provider: &'static str,
}

impl Reply {
    pub fn is_failure(&self) -> bool {
        self.status >= 400
    }

    /// `HTTP <status>` 作为错误码，截断后的 body 作为消息
    pub fn as_raw_error(&self) -> RawApiError {
        RawApiError::with_code(format!("HTTP {}", self.status), truncate_for_log(&self.body))
    }

    /// 解析 JSON body
    ///
    /// 失败状态码下的非 JSON body（网关错误页等）交给 `on_http_failure`，其余解析失败为 `ParseError`。
    pub fn json<T: DeserializeOwned>(
        &self,
        on_http_failure: impl FnOnce(RawApiError) -> ProviderError,
    ) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|e| {
            if self.is_failure() {
                return on_http_failure(self.as_raw_error());
            }
            log::error!(
                "[{}] JSON parse failed: {e}; body: {}",
                self.provider,
                truncate_for_log(&self.body)
            );
            ProviderError::ParseError {
                provider: self.provider.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

/// 发送请求并读取 body
///
/// 429 直接返回 `RateLimited`（带 `Retry-After` 秒数），502/503/504 返回 `NetworkError`；
/// 其他状态码原样交给调用方，错误体的格式由各厂商决定。
pub(crate) async fn send(
    request: RequestBuilder,
    provider: &'static str,
    label: &str,
) -> Result<Reply> {
    log::debug!("[{provider}] {label}");

    let response = request.send().await.map_err(|e| {
        let detail = e.to_string();
        let provider = provider.to_string();
        if e.is_timeout() {
            ProviderError::Timeout { provider, detail }
        } else {
            ProviderError::NetworkError { provider, detail }
        }
    })?;

    let status = response.status();
    let retry_after = response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());

    let body = response
        .text()
        .await
        .map_err(|e| ProviderError::NetworkError {
            provider: provider.to_string(),
            detail: format!("failed to read response body: {e}"),
        })?;
    log::debug!("[{provider}] HTTP {} {}", status.as_u16(), truncate_for_log(&body));

    match status {
        StatusCode::TOO_MANY_REQUESTS => {
            log::warn!("[{provider}] rate limited, retry_after={retry_after:?}");
            Err(ProviderError::RateLimited {
                provider: provider.to_string(),
                retry_after,
                operation: None,
                target: None,
                raw_message: Some(truncate_for_log(&body)),
            })
        }
        StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
            log::warn!("[{provider}] upstream unavailable (HTTP {})", status.as_u16());
            Err(ProviderError::NetworkError {
                provider: provider.to_string(),
                detail: format!("HTTP {}: {}", status.as_u16(), truncate_for_log(&body)),
            })
        }
        _ => Ok(Reply {
            status: status.as_u16(),
            body,
            provider,
        }),
    }
}

/// 请求体序列化
pub(crate) fn encode_json<T: Serialize>(body: &T, provider: &str) -> Result<String> {
    serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
        provider: provider.to_string(),
        detail: e.to_string(),
    })
}

/// 非 JSON 的失败响应统一视为网络层错误
pub(crate) fn network_failure(provider: &str, raw: RawApiError) -> ProviderError {
    ProviderError::NetworkError {
        provider: provider.to_string(),
        detail: format!("{}: {}", raw.code.unwrap_or_default(), raw.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Payload {
        name: String,
    }

    fn reply(status: u16, body: &str) -> Reply {
        Reply {
            status,
            body: body.to_string(),
            provider: "test",
        }
    }

    #[test]
    fn json_body_is_parsed_regardless_of_status() {
        let ok: Payload = reply(200, r#"{"name":"www"}"#)
            .json(|raw| network_failure("test", raw))
            .unwrap();
        assert_eq!(ok.name, "www");

        let err: Payload = reply(400, r#"{"name":"bad"}"#)
            .json(|raw| network_failure("test", raw))
            .unwrap();
        assert_eq!(err.name, "bad");
    }

    #[test]
    fn html_error_page_goes_to_fallback() {
        let err = reply(500, "<html>oops</html>")
            .json::<Payload>(|raw| network_failure("test", raw))
            .unwrap_err();
        assert_eq!(err.to_string(), "[test] Network error: HTTP 500: <html>oops</html>");
    }

    #[test]
    fn garbage_success_body_is_parse_error() {
        let err = reply(200, "not json")
            .json::<Payload>(|raw| network_failure("test", raw))
            .unwrap_err();
        assert!(matches!(err, ProviderError::ParseError { provider, .. } if provider == "test"));
    }
}
