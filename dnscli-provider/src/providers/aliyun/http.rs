//! 阿里云 HTTP 请求方法

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{ALIYUN_DNS_VERSION, AliyunProvider, EMPTY_BODY_SHA256, serialize_to_query_string};

/// 从响应中取出 `Code`/`Message`，存在即视为错误
fn api_error(value: &serde_json::Value) -> Option<RawApiError> {
    let code = value.get("Code").and_then(|v| v.as_str())?;
    let message = value
        .get("Message")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    Some(RawApiError::with_code(code, message))
}

impl AliyunProvider {
    /// 执行阿里云 API 请求（RPC 风格：参数通过 query string 传递，body 为空）
    pub(crate) async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        action: &str,
        params: &B,
        ctx: &ErrorContext,
    ) -> Result<T> {
        let query_string = serialize_to_query_string(params)?;

        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let nonce = uuid::Uuid::new_v4().to_string();

        let authorization = self.sign(action, &query_string, &timestamp, &nonce);

        let url = if query_string.is_empty() {
            format!("{}/", self.endpoint)
        } else {
            format!("{}/?{query_string}", self.endpoint)
        };

        let request = self
            .client
            .post(&url)
            .header("Host", &self.host)
            .header("x-acs-action", action)
            .header("x-acs-version", ALIYUN_DNS_VERSION)
            .header("x-acs-date", &timestamp)
            .header("x-acs-signature-nonce", &nonce)
            .header("x-acs-content-sha256", EMPTY_BODY_SHA256)
            .header("Authorization", authorization);

        let reply = http_client::send(request, self.provider_name(), action).await?;

        // 4xx/5xx 的 body 通常也是 {Code, Message}
        let value: serde_json::Value =
            reply.json(|raw| http_client::network_failure(self.provider_name(), raw))?;

        if let Some(raw) = api_error(&value) {
            log::error!("[{}] {action} API error: {raw:?}", self.provider_name());
            return Err(self.map_error(raw, ctx.clone()));
        }
        if reply.is_failure() {
            return Err(self.unknown_error(reply.as_raw_error(), ctx));
        }

        serde_json::from_value(value).map_err(|e| self.parse_error(e))
    }
}
