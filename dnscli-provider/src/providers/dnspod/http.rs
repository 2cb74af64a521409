//! `DNSPod` HTTP 请求方法

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{DNSPOD_VERSION, DnspodProvider, TencentError, TencentResponse};

impl DnspodProvider {
    /// 执行腾讯云 API 请求，返回 `Response` 的原始内容
    ///
    /// 列表接口需要在映射前识别「无记录」错误，所以这里只做错误码提取。
    pub(crate) async fn request_raw<B: Serialize>(
        &self,
        action: &str,
        body: &B,
    ) -> Result<std::result::Result<serde_json::Value, RawApiError>> {
        let payload = http_client::encode_json(body, self.provider_name())?;
        log::debug!("[{}] Request Body: {payload}", self.provider_name());

        let timestamp = Utc::now().timestamp();
        let authorization = self.sign(action, &payload, timestamp);

        let request = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json; charset=utf-8")
            .header("Host", &self.host)
            .header("X-TC-Action", action)
            .header("X-TC-Version", DNSPOD_VERSION)
            .header("X-TC-Timestamp", timestamp.to_string())
            .header("Authorization", authorization)
            .body(payload);

        let reply = http_client::send(request, self.provider_name(), action).await?;
        let tc_response: TencentResponse =
            reply.json(|raw| http_client::network_failure(self.provider_name(), raw))?;

        // 业务错误在 Response.Error 中，HTTP 状态码仍为 200
        if let Some(error) = tc_response.response.get("Error") {
            let error: TencentError =
                serde_json::from_value(error.clone()).map_err(|e| self.parse_error(e))?;
            log::error!(
                "[{}] {action} API error: {} - {}",
                self.provider_name(),
                error.code,
                error.message
            );
            return Ok(Err(RawApiError::with_code(error.code, error.message)));
        }

        Ok(Ok(tc_response.response))
    }

    /// 执行腾讯云 API 请求，错误映射为 `ProviderError`
    pub(crate) async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        action: &str,
        body: &B,
        ctx: &ErrorContext,
    ) -> Result<T> {
        match self.request_raw(action, body).await? {
            Ok(value) => serde_json::from_value(value).map_err(|e| self.parse_error(e)),
            Err(raw) => Err(self.map_error(raw, ctx.clone())),
        }
    }
}
