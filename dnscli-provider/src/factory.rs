//! Provider factory functions and metadata.

use std::sync::Arc;

use crate::error::{ProviderError, Result};
use crate::traits::DnsProvider;
use crate::types::{
    FieldType, ProviderCredentialField, ProviderCredentials, ProviderFeatures, ProviderLimits,
    ProviderMetadata, ProviderType,
};

#[cfg(feature = "aliyun")]
use crate::providers::AliyunProvider;
#[cfg(feature = "cloudflare")]
use crate::providers::CloudflareProvider;
#[cfg(feature = "dnspod")]
use crate::providers::DnspodProvider;

/// Creates a [`DnsProvider`] for `provider_type` from the given credentials.
///
/// The factory does not check which credential fields are present; each
/// adapter constructor does, and its `InvalidCredentials` error is returned
/// as-is. A provider whose cargo feature is disabled is `UnsupportedProvider`.
///
/// # Examples
///
/// ```rust,no_run
/// use dnscli_provider::{create_provider, ProviderCredentials, ProviderType};
///
/// let credentials = ProviderCredentials {
///     api_token: Some("your-token".to_string()),
///     ..Default::default()
/// };
/// let provider = create_provider(ProviderType::Cloudflare, &credentials)?;
/// # Ok::<(), dnscli_provider::ProviderError>(())
/// ```
pub fn create_provider(
    provider_type: ProviderType,
    credentials: &ProviderCredentials,
) -> Result<Arc<dyn DnsProvider>> {
    log::debug!("creating {provider_type} provider");
    match provider_type {
        #[cfg(feature = "cloudflare")]
        ProviderType::Cloudflare => Ok(Arc::new(CloudflareProvider::from_credentials(
            credentials,
        )?)),
        #[cfg(feature = "aliyun")]
        ProviderType::Aliyun => Ok(Arc::new(AliyunProvider::from_credentials(credentials)?)),
        #[cfg(feature = "dnspod")]
        ProviderType::Tencent => Ok(Arc::new(DnspodProvider::from_credentials(credentials)?)),
        #[allow(unreachable_patterns)]
        other => Err(ProviderError::UnsupportedProvider {
            provider_type: other.to_string(),
        }),
    }
}

/// Same as [`create_provider`], selecting the provider by its tag
/// (`cloudflare`, `aliyun`, `tencent`/`dnspod`).
///
/// An unknown tag fails with `UnsupportedProvider` naming the tag.
pub fn create_provider_by_tag(
    tag: &str,
    credentials: &ProviderCredentials,
) -> Result<Arc<dyn DnsProvider>> {
    create_provider(tag.parse()?, credentials)
}

/// Static metadata of one provider, regardless of enabled features.
pub fn provider_metadata(provider_type: ProviderType) -> ProviderMetadata {
    match provider_type {
        ProviderType::Cloudflare => ProviderMetadata {
            id: ProviderType::Cloudflare,
            name: "Cloudflare".to_string(),
            description: "Cloudflare DNS，支持 API Token 或 Global API Key".to_string(),
            required_fields: vec![
                ProviderCredentialField::new(
                    "api_token",
                    "API Token",
                    FieldType::Password,
                    "在 Cloudflare Dashboard -> My Profile -> API Tokens 创建，需要 Zone:DNS:Edit 权限",
                ),
                ProviderCredentialField::new(
                    "api_key",
                    "Global API Key",
                    FieldType::Password,
                    "未使用 API Token 时必填",
                ),
                ProviderCredentialField::new(
                    "api_email",
                    "Account Email",
                    FieldType::Email,
                    "与 Global API Key 配套的账户邮箱",
                ),
            ],
            features: ProviderFeatures {
                proxy: true,
                line: false,
            },
            limits: ProviderLimits {
                max_page_size_domains: 50,
                max_page_size_records: 100,
            },
        },
        ProviderType::Aliyun => ProviderMetadata {
            id: ProviderType::Aliyun,
            name: "阿里云 DNS".to_string(),
            description: "阿里云云解析 DNS".to_string(),
            required_fields: vec![
                ProviderCredentialField::new(
                    "secret_id",
                    "AccessKey ID",
                    FieldType::Text,
                    "阿里云 RAM 用户的 AccessKey ID",
                ),
                ProviderCredentialField::new(
                    "secret_key",
                    "AccessKey Secret",
                    FieldType::Password,
                    "阿里云 RAM 用户的 AccessKey Secret",
                ),
            ],
            features: ProviderFeatures {
                proxy: false,
                line: true,
            },
            limits: ProviderLimits {
                max_page_size_domains: 100,
                max_page_size_records: 100,
            },
        },
        ProviderType::Tencent => ProviderMetadata {
            id: ProviderType::Tencent,
            name: "腾讯云 DNSPod".to_string(),
            description: "腾讯云 DNSPod 解析".to_string(),
            required_fields: vec![
                ProviderCredentialField::new(
                    "secret_id",
                    "SecretId",
                    FieldType::Text,
                    "腾讯云 API 密钥 SecretId",
                ),
                ProviderCredentialField::new(
                    "secret_key",
                    "SecretKey",
                    FieldType::Password,
                    "腾讯云 API 密钥 SecretKey",
                ),
            ],
            features: ProviderFeatures {
                proxy: false,
                line: true,
            },
            limits: ProviderLimits {
                max_page_size_domains: 100,
                max_page_size_records: 100,
            },
        },
    }
}

/// Returns metadata for all providers enabled via feature flags.
pub fn get_all_provider_metadata() -> Vec<ProviderMetadata> {
    vec![
        #[cfg(feature = "aliyun")]
        AliyunProvider::metadata(),
        #[cfg(feature = "dnspod")]
        DnspodProvider::metadata(),
        #[cfg(feature = "cloudflare")]
        CloudflareProvider::metadata(),
    ]
}
