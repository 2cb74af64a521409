//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

#[cfg(feature = "aliyun")]
mod aliyun;
#[cfg(feature = "cloudflare")]
mod cloudflare;
#[cfg(feature = "dnspod")]
mod dnspod;

#[cfg(feature = "aliyun")]
pub use aliyun::{AliyunProvider, AliyunProviderBuilder};
#[cfg(feature = "cloudflare")]
pub use cloudflare::{CloudflareAuth, CloudflareProvider, CloudflareProviderBuilder};
#[cfg(feature = "dnspod")]
pub use dnspod::{DnspodProvider, DnspodProviderBuilder};
