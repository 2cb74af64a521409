//! 阿里云错误码归类
//!
//! 参考: <https://api.aliyun.com/document/Alidns/2015-01-09/errorCode>

use crate::traits::{ErrorClass, ErrorContext, ProviderErrorMapper};

use super::{AliyunProvider, PROVIDER_NAME};

impl ProviderErrorMapper for AliyunProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn classify(&self, code: &str, _context: &ErrorContext) -> Option<ErrorClass> {
        let class = match code {
            "InvalidAccessKeyId.NotFound"
            | "InvalidAccessKeyId.Inactive"
            | "SignatureDoesNotMatch"
            | "IncompleteSignature" => ErrorClass::Credentials,

            "DomainRecordDuplicate" | "DomainRecordConflict" | "DomainRecordExist" => {
                ErrorClass::RecordExists
            }
            "DomainRecordNotBelongToUser"
            | "InvalidRecordId.NotFound"
            | "InvalidRR.NoExist"
            | "PdnsRecord.NotExists" => ErrorClass::RecordNotFound,
            "InvalidDomainName.NoExist" | "DomainNotFound" | "PdnsZone.NotExists" => {
                ErrorClass::DomainNotFound
            }

            // QuotaExceeded.ARecord / .SubDomain / .TTL 等
            c if c.starts_with("QuotaExceeded.") || c == "LineDnsSlb.QuotaExceeded" => {
                ErrorClass::Quota
            }
            "Throttling" | "Throttling.User" => ErrorClass::RateLimited,

            "DomainRecordLocked"
            | "DomainExpiredDNSForbidden"
            | "Forbidden.DomainExpired"
            | "RecordForbidden.BlackHole"
            | "RecordFobidden.BlackHole" => ErrorClass::DomainLocked,
            "Forbidden"
            | "Forbidden.RiskControl"
            | "OperationDomain.NoPermission"
            | "IllegalUser"
            | "IncorrectDomainUser" => ErrorClass::PermissionDenied,

            "InvalidRR.TypeEmpty" | "SubDomainInvalid.Type" | "PdnsRecord.InvalidType" => {
                ErrorClass::Invalid("type")
            }
            "InvalidRR.AValue"
            | "InvalidRR.AAAAValue"
            | "InvalidRR.MXValue"
            | "InvalidRR.NSValue"
            | "PdnsRecord.InvalidRecordValue" => ErrorClass::Invalid("value"),
            "InvalidRR.RrEmpty" | "InvalidRR.Format" | "Record.Invalid.Rr" | "InvalidRR.Length" => {
                ErrorClass::Invalid("rr")
            }
            "SubDomainInvalid.TTL" | "PdnsRecord.InvalidTtl" => ErrorClass::Invalid("ttl"),
            "SubDomainInvalid.Line" | "UnsupportedLine" => ErrorClass::Invalid("line"),
            "SubDomainInvalid.Priority" => ErrorClass::Invalid("priority"),
            c if c.starts_with("InvalidDomainName.")
                || matches!(c, "DomainEmpty" | "PdnsZone.InvalidZoneName") =>
            {
                ErrorClass::Invalid("domain")
            }

            _ => return None,
        };
        Some(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::traits::RawApiError;

    fn provider() -> AliyunProvider {
        AliyunProvider::new("id".to_string(), "secret".to_string()).unwrap()
    }

    fn ctx() -> ErrorContext {
        ErrorContext {
            operation: Some("get_record".to_string()),
            record_name: Some("www".to_string()),
            record_id: Some("1001".to_string()),
            domain: Some("example.com".to_string()),
        }
    }

    fn map(code: &str) -> ProviderError {
        provider().map_error(RawApiError::with_code(code, "vendor message"), ctx())
    }

    #[test]
    fn credentials() {
        for code in ["InvalidAccessKeyId.NotFound", "SignatureDoesNotMatch"] {
            assert!(matches!(map(code), ProviderError::InvalidCredentials { .. }), "{code}");
        }
    }

    #[test]
    fn not_found_keeps_context() {
        assert!(matches!(
            map("InvalidRecordId.NotFound"),
            ProviderError::RecordNotFound { record_id, .. } if record_id == "1001"
        ));
        assert!(matches!(
            map("InvalidDomainName.NoExist"),
            ProviderError::DomainNotFound { domain, .. } if domain == "example.com"
        ));
    }

    #[test]
    fn domain_format_is_invalid_parameter() {
        assert!(matches!(
            map("InvalidDomainName.Format"),
            ProviderError::InvalidParameter { param, .. } if param == "domain"
        ));
    }

    #[test]
    fn quota_and_throttling() {
        let p = provider();
        assert_eq!(p.classify("QuotaExceeded.ARecord", &ctx()), Some(ErrorClass::Quota));
        assert_eq!(p.classify("Throttling.User", &ctx()), Some(ErrorClass::RateLimited));
        assert!(matches!(
            map("Throttling"),
            ProviderError::RateLimited { retry_after: None, .. }
        ));
    }

    #[test]
    fn duplicate_record() {
        assert!(matches!(
            map("DomainRecordDuplicate"),
            ProviderError::RecordExists { record_name, .. } if record_name == "www"
        ));
    }

    #[test]
    fn unmapped_code_is_unknown_with_vendor_message() {
        let err = map("InternalError");
        assert_eq!(err.kind(), crate::ErrorKind::Provider);
        assert!(matches!(
            err,
            ProviderError::Unknown { raw_code: Some(code), raw_message, .. }
                if code == "InternalError" && raw_message == "vendor message"
        ));
    }
}
