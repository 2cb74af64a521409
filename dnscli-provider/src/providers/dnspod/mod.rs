//! 腾讯云 `DNSPod` Provider

mod error;
mod http;
mod provider;
mod sign;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::{
    create_http_client, endpoint_host, require_credential, trim_endpoint,
};
use crate::types::ProviderCredentials;

pub(crate) use types::{
    CreateRecordRequest, DescribeDomainListRequest, DescribeRecordListRequest,
    DescribeRecordResponse, DnspodDomain, DnspodRecord, DnspodRecordInfo, DomainListResponse,
    RecordIdRequest, RecordListResponse, TencentError, TencentResponse,
};

pub(crate) const DNSPOD_API_HOST: &str = "dnspod.tencentcloudapi.com";
pub(crate) const DNSPOD_SERVICE: &str = "dnspod";
pub(crate) const DNSPOD_VERSION: &str = "2021-03-23";
pub(crate) const PROVIDER_NAME: &str = "tencent";
/// `DNSPod` API 单页最大记录数
pub(crate) const MAX_PAGE_SIZE: u32 = 100;
/// 未指定线路时使用的默认线路
pub(crate) const DEFAULT_RECORD_LINE: &str = "默认";

/// 腾讯云 `DNSPod` Provider
///
/// TC3-HMAC-SHA256 签名，JSON body。记录 ID 为数字。
pub struct DnspodProvider {
    pub(crate) client: Client,
    pub(crate) secret_id: String,
    pub(crate) secret_key: String,
    pub(crate) endpoint: String,
    /// 参与签名的 host
    pub(crate) host: String,
}

/// `DNSPod` Provider Builder
pub struct DnspodProviderBuilder {
    secret_id: String,
    secret_key: String,
    endpoint: String,
}

impl DnspodProviderBuilder {
    fn new(secret_id: String, secret_key: String) -> Self {
        Self {
            secret_id,
            secret_key,
            endpoint: format!("https://{DNSPOD_API_HOST}"),
        }
    }

    /// Override the API endpoint (default `https://dnspod.tencentcloudapi.com`).
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn build(self) -> Result<DnspodProvider> {
        let endpoint = trim_endpoint(&self.endpoint);
        Ok(DnspodProvider {
            client: create_http_client(PROVIDER_NAME)?,
            secret_id: self.secret_id,
            secret_key: self.secret_key,
            host: endpoint_host(&endpoint),
            endpoint,
        })
    }
}

impl DnspodProvider {
    pub fn new(secret_id: String, secret_key: String) -> Result<Self> {
        Self::builder(secret_id, secret_key).build()
    }

    pub fn builder(secret_id: String, secret_key: String) -> DnspodProviderBuilder {
        DnspodProviderBuilder::new(secret_id, secret_key)
    }

    /// Requires `secret_id` and `secret_key`.
    pub fn from_credentials(credentials: &ProviderCredentials) -> Result<Self> {
        Self::new(
            require_credential(credentials.get("secret_id"), PROVIDER_NAME, "secret_id")?,
            require_credential(credentials.get("secret_key"), PROVIDER_NAME, "secret_key")?,
        )
    }
}
