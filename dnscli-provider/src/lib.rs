//! # dnscli-provider
//!
//! One record-management interface over several cloud DNS APIs.
//!
//! ## Supported Providers
//!
//! | Provider | Tag | Feature Flag | Auth Method |
//! |----------|-----|-------------|-------------|
//! | [Cloudflare](https://www.cloudflare.com/) | `cloudflare` | `cloudflare` | API Token, or Global API Key + e-mail |
//! | [Aliyun DNS](https://www.aliyun.com/product/dns) | `aliyun` | `aliyun` | ACS3-HMAC-SHA256 |
//! | [DNSPod (Tencent Cloud)](https://www.dnspod.cn/) | `tencent` | `dnspod` | TC3-HMAC-SHA256 |
//!
//! ## Feature Flags
//!
//! - **`all-providers`** *(default)*: enable all providers listed above.
//! - **`cloudflare`**, **`aliyun`**, **`dnspod`**: enable a single provider.
//! - **`native-tls`** *(default)* / **`rustls`**: TLS backend for `reqwest`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dnscli_provider::{
//!     create_provider_by_tag, DnsProvider, DnsRecordType, Parameter, ProviderCredentials,
//! };
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = ProviderCredentials {
//!         secret_id: Some("your-secret-id".to_string()),
//!         secret_key: Some("your-secret-key".to_string()),
//!         ..Default::default()
//!     };
//!     let provider = create_provider_by_tag("aliyun", &credentials)?;
//!
//!     // Create www.example.com A 1.1.1.1
//!     let param = Parameter {
//!         name: "www".to_string(),
//!         record_type: Some("A".parse::<DnsRecordType>()?),
//!         value: "1.1.1.1".to_string(),
//!         ttl: 600,
//!         ..Parameter::new("example.com")
//!     };
//!     provider.add_record(&param).await?;
//!
//!     // Read it back; the record ID is only known after listing
//!     let records = provider
//!         .list_records(&Parameter {
//!             name: "www".to_string(),
//!             ..Parameter::new("example.com")
//!         })
//!         .await?;
//!     for record in &records {
//!         println!("{} {} {} -> {}", record.id, record.name, record.record_type, record.value);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). Match on
//! [`ProviderError::kind`] for the broad category:
//!
//! - [`ErrorKind::InvalidArgument`]: missing domain/ID or malformed value, raised before any request
//! - [`ErrorKind::UnsupportedProvider`]: unknown provider tag
//! - [`ErrorKind::NotFound`]: domain or record does not exist
//! - [`ErrorKind::AuthenticationFailed`]: credentials rejected
//! - [`ErrorKind::Provider`]: anything else, with the vendor message preserved
//!
//! Nothing is retried. List operations either return every page or fail.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ErrorKind, ProviderError, Result};

// Re-export factory functions
pub use factory::{
    create_provider, create_provider_by_tag, get_all_provider_metadata, provider_metadata,
};

// Re-export core trait only (internal traits are not exported)
pub use traits::DnsProvider;

// Re-export types
pub use types::{
    DnsRecordType, Domain, DomainStatus, FieldType, Parameter, ProviderCredentialField,
    ProviderCredentials, ProviderFeatures, ProviderLimits, ProviderMetadata, ProviderType,
    Record, RecordData,
};

pub use utils::log_sanitizer::mask_secret;

// Re-export concrete providers (behind feature flags)
#[cfg(feature = "cloudflare")]
pub use providers::{CloudflareAuth, CloudflareProvider, CloudflareProviderBuilder};

#[cfg(feature = "aliyun")]
pub use providers::{AliyunProvider, AliyunProviderBuilder};

#[cfg(feature = "dnspod")]
pub use providers::{DnspodProvider, DnspodProviderBuilder};
