//! Cloudflare error mapping
//!
//! Codes are the numeric `errors[].code` values, or `HTTP <status>` when the
//! body carried none. Reference: <https://api.cloudflare.com/#getting-started-responses>

use crate::traits::{ErrorClass, ErrorContext, ProviderErrorMapper};

use super::{CloudflareProvider, PROVIDER_NAME};

impl ProviderErrorMapper for CloudflareProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn classify(&self, code: &str, context: &ErrorContext) -> Option<ErrorClass> {
        let class = match code {
            // 6xxx: malformed auth headers, 9103/9106/9109: unknown or missing key
            "6003" | "6103" | "6111" | "9103" | "9106" | "9109" | "10000" | "HTTP 401" => {
                ErrorClass::Credentials
            }
            "HTTP 403" => ErrorClass::PermissionDenied,

            "9000" => ErrorClass::Invalid("name"),
            "9005" | "9006" | "9009" => ErrorClass::Invalid("value"),
            "9021" => ErrorClass::Invalid("ttl"),
            "9041" => ErrorClass::Invalid("proxied"),
            "1004" => ErrorClass::Invalid("general"),

            "81053" | "81054" | "81055" | "81056" | "81057" | "81058" => ErrorClass::RecordExists,
            "81044" => ErrorClass::RecordNotFound,
            "81045" => ErrorClass::Quota,

            // 路由不到的标识符：有记录 ID 时是记录，否则是 zone
            "7000" | "7003" | "HTTP 404" if context.record_id.is_some() => {
                ErrorClass::RecordNotFound
            }
            "7000" | "7003" | "HTTP 404" => ErrorClass::DomainNotFound,

            _ => return None,
        };
        Some(class)
    }
}
