//! 阿里云 DNS Provider

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
    AddDomainRecordResponse, AliyunDomain, AliyunRecord, DescribeDomainRecordInfoResponse,
    DescribeDomainRecordsRequest, DescribeDomainRecordsResponse, DescribeDomainsRequest,
    DescribeDomainsResponse, EmptyResponse, RecordIdRequest, WriteDomainRecordRequest,
    serialize_to_query_string,
};

pub(crate) const ALIYUN_DNS_HOST: &str = "alidns.cn-hangzhou.aliyuncs.com";
pub(crate) const ALIYUN_DNS_VERSION: &str = "2015-01-09";
pub(crate) const PROVIDER_NAME: &str = "aliyun";
/// 空 body 的 SHA256 hash (固定值)
pub(crate) const EMPTY_BODY_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
/// 阿里云 API 单页最大记录数
pub(crate) const MAX_PAGE_SIZE: u32 = 100;

/// Aliyun DNS provider implementation.
///
/// Authenticates via ACS3-HMAC-SHA256 signing with AccessKey ID/Secret.
/// Aliyun addresses records by domain name directly, no zone lookup needed.
///
/// # Construction
///
/// ```rust,no_run
/// use dnscli_provider::AliyunProvider;
///
/// let provider = AliyunProvider::new(
///     "your-access-key-id".to_string(),
///     "your-access-key-secret".to_string(),
/// )?;
/// # Ok::<(), dnscli_provider::ProviderError>(())
/// ```
pub struct AliyunProvider {
    pub(crate) client: Client,
    pub(crate) access_key_id: String,
    pub(crate) access_key_secret: String,
    /// `https://host`，不带结尾斜杠
    pub(crate) endpoint: String,
    /// 参与签名的 host
    pub(crate) host: String,
}

/// Builder for [`AliyunProvider`].
pub struct AliyunProviderBuilder {
    access_key_id: String,
    access_key_secret: String,
    endpoint: String,
}

impl AliyunProviderBuilder {
    fn new(access_key_id: String, access_key_secret: String) -> Self {
        Self {
            access_key_id,
            access_key_secret,
            endpoint: format!("https://{ALIYUN_DNS_HOST}"),
        }
    }

    /// Override the API endpoint (default `https://alidns.cn-hangzhou.aliyuncs.com`).
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Build the [`AliyunProvider`] instance.
    pub fn build(self) -> Result<AliyunProvider> {
        let endpoint = trim_endpoint(&self.endpoint);
        Ok(AliyunProvider {
            client: create_http_client(PROVIDER_NAME)?,
            access_key_id: self.access_key_id,
            access_key_secret: self.access_key_secret,
            host: endpoint_host(&endpoint),
            endpoint,
        })
    }
}

impl AliyunProvider {
    /// Creates a new Aliyun provider against the public endpoint.
    pub fn new(access_key_id: String, access_key_secret: String) -> Result<Self> {
        Self::builder(access_key_id, access_key_secret).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(access_key_id: String, access_key_secret: String) -> AliyunProviderBuilder {
        AliyunProviderBuilder::new(access_key_id, access_key_secret)
    }

    /// Requires `secret_id` (AccessKey ID) and `secret_key` (AccessKey Secret).
    pub fn from_credentials(credentials: &ProviderCredentials) -> Result<Self> {
        Self::new(
            require_credential(credentials.get("secret_id"), PROVIDER_NAME, "secret_id")?,
            require_credential(credentials.get("secret_key"), PROVIDER_NAME, "secret_key")?,
        )
    }
}
