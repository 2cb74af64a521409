//! Cloudflare DNS Provider

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::{create_http_client, require_credential, trim_endpoint};
use crate::types::ProviderCredentials;

pub(crate) use types::{
    CloudflareCaaData, CloudflareDnsRecord, CloudflareRecordBody, CloudflareRecordData,
    CloudflareResponse, CloudflareSrvData, CloudflareZone,
};

pub(crate) const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";
pub(crate) const PROVIDER_NAME: &str = "cloudflare";
/// Cloudflare Zones API 单页最大记录数
pub(crate) const MAX_PAGE_SIZE_ZONES: u32 = 50;
/// Cloudflare DNS Records API 单页最大记录数
pub(crate) const MAX_PAGE_SIZE_RECORDS: u32 = 100;

/// How requests are authenticated.
#[derive(Clone)]
pub enum CloudflareAuth {
    /// Scoped API token, sent as `Authorization: Bearer`.
    Token(String),
    /// Legacy global API key plus account e-mail.
    GlobalKey { api_key: String, email: String },
}

impl std::fmt::Debug for CloudflareAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Token(_) => f.write_str("Token(***)"),
            Self::GlobalKey { email, .. } => write!(f, "GlobalKey({email}, ***)"),
        }
    }
}

/// Cloudflare DNS Provider
///
/// Records are keyed by zone ID, so every record operation first resolves the
/// domain name to its zone with an exact-name lookup. The lookup is not cached.
///
/// ```rust,no_run
/// use dnscli_provider::{CloudflareAuth, CloudflareProvider};
///
/// let provider = CloudflareProvider::builder(CloudflareAuth::Token("token".into())).build()?;
/// # Ok::<(), dnscli_provider::ProviderError>(())
/// ```
pub struct CloudflareProvider {
    pub(crate) client: Client,
    pub(crate) auth: CloudflareAuth,
    pub(crate) endpoint: String,
}

/// Builder for [`CloudflareProvider`].
pub struct CloudflareProviderBuilder {
    auth: CloudflareAuth,
    endpoint: String,
}

impl CloudflareProviderBuilder {
    /// Override the API base URL (default `https://api.cloudflare.com/client/v4`).
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn build(self) -> Result<CloudflareProvider> {
        Ok(CloudflareProvider {
            client: create_http_client(PROVIDER_NAME)?,
            auth: self.auth,
            endpoint: trim_endpoint(&self.endpoint),
        })
    }
}

impl CloudflareProvider {
    pub fn new(auth: CloudflareAuth) -> Result<Self> {
        Self::builder(auth).build()
    }

    pub fn builder(auth: CloudflareAuth) -> CloudflareProviderBuilder {
        CloudflareProviderBuilder {
            auth,
            endpoint: CF_API_BASE.to_string(),
        }
    }

    /// Picks the token when present, otherwise requires key and e-mail.
    pub fn auth_from_credentials(credentials: &ProviderCredentials) -> Result<CloudflareAuth> {
        if let Some(token) = credentials.get("api_token") {
            return Ok(CloudflareAuth::Token(token.trim().to_string()));
        }
        Ok(CloudflareAuth::GlobalKey {
            api_key: require_credential(
                credentials.get("api_key"),
                PROVIDER_NAME,
                "api_token or api_key",
            )?,
            email: require_credential(credentials.get("api_email"), PROVIDER_NAME, "api_email")?,
        })
    }

    pub fn from_credentials(credentials: &ProviderCredentials) -> Result<Self> {
        Self::new(Self::auth_from_credentials(credentials)?)
    }
}
