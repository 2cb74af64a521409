//! Cloudflare HTTP 请求方法

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{CloudflareAuth, CloudflareProvider, CloudflareResponse};

impl CloudflareProvider {
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            CloudflareAuth::Token(token) => request.bearer_auth(token),
            CloudflareAuth::GlobalKey { api_key, email } => request
                .header("X-Auth-Key", api_key)
                .header("X-Auth-Email", email),
        }
    }

    /// 执行请求并解析 `{success, result, errors, result_info}` 信封
    ///
    /// `path_and_query` 以 `/` 开头，query 部分需已编码。
    pub(crate) async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path_and_query: &str,
        body: Option<&B>,
        ctx: &ErrorContext,
    ) -> Result<CloudflareResponse<T>> {
        let url = format!("{}{path_and_query}", self.endpoint);

        let mut request = self.authorize(self.client.request(method.clone(), &url));
        if let Some(body) = body {
            let payload = http_client::encode_json(body, self.provider_name())?;
            log::debug!("[{}] Request Body: {payload}", self.provider_name());
            request = request
                .header("Content-Type", "application/json")
                .body(payload);
        }

        let reply = http_client::send(request, self.provider_name(), &format!("{method} {url}")).await?;

        // 非 JSON 的错误页（如网关返回的 HTML）按 HTTP 状态码映射
        let cf_response: CloudflareResponse<T> =
            reply.json(|raw| self.map_error(raw, ctx.clone()))?;

        if !cf_response.success {
            let raw = cf_response.errors.first().map_or_else(
                || RawApiError::new(format!("request failed with HTTP {}", reply.status)),
                |e| RawApiError::with_code(e.code.to_string(), e.message.clone()),
            );
            log::error!("[{}] API error: {raw:?}", self.provider_name());
            return Err(self.map_error(raw, ctx.clone()));
        }

        Ok(cf_response)
    }

    /// GET 并取出 `result`
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path_and_query: &str,
        ctx: &ErrorContext,
    ) -> Result<T> {
        self.request::<T, ()>(Method::GET, path_and_query, None, ctx)
            .await?
            .result
            .ok_or_else(|| self.parse_error("响应中缺少 result 字段"))
    }

    /// 逐页 GET，直到 `result_info.total_pages` 或空页
    ///
    /// 任意一页失败则整体失败，已取得的数据丢弃。
    pub(crate) async fn get_all_pages<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        per_page: u32,
        ctx: &ErrorContext,
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut page = 1u32;
        let mut total_count = None;

        loop {
            let mut query_string = format!("?page={page}&per_page={per_page}");
            for (key, value) in query {
                query_string.push_str(&format!("&{key}={}", urlencoding::encode(value)));
            }

            let response: CloudflareResponse<Vec<T>> = self
                .request::<Vec<T>, ()>(Method::GET, &format!("{path}{query_string}"), None, ctx)
                .await?;

            let batch = response.result.unwrap_or_default();
            if batch.is_empty() {
                break;
            }
            items.extend(batch);

            let info = response.result_info;
            total_count = info.as_ref().and_then(|i| i.total_count).or(total_count);
            let total_pages = info.and_then(|i| i.total_pages).unwrap_or(page);
            if page >= total_pages {
                break;
            }
            page += 1;
        }

        log::debug!(
            "[{}] {path}: fetched {} items in {page} page(s), reported total {total_count:?}",
            self.provider_name(),
            items.len()
        );
        Ok(items)
    }
}
