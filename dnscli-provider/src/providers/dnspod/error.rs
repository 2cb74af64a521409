//! `DNSPod` 错误码归类
//!
//! 错误码为 `大类.子类` 形式，能按大类判断的直接按前缀归类。
//! 参考: <https://cloud.tencent.com/document/api/1427/56192>

use crate::traits::{ErrorClass, ErrorContext, ProviderErrorMapper};

use super::{DnspodProvider, PROVIDER_NAME};

const CREDENTIAL_PARAMS: &[&str] = &[
    "InvalidParameter.InvalidSecretId",
    "InvalidParameter.InvalidSignature",
    "InvalidParameter.PermissionDenied",
];

const LOCKED: &[&str] = &[
    "FailedOperation.DomainIsLocked",
    "FailedOperation.DomainIsSpam",
    "FailedOperation.AccountIsLocked",
    "InvalidParameter.UserAlreadyLocked",
    "InvalidParameter.DomainIsNotlocked",
    "InvalidParameter.DomainNotAllowedLock",
];

const NOT_OWNER: &[&str] = &[
    "FailedOperation.NotDomainOwner",
    "FailedOperation.NotResourceOwner",
    "FailedOperation.NotBatchTaskOwner",
    "InvalidParameter.NoAuthorityToSrcDomain",
    "InvalidParameter.NoAuthorityToTheGroup",
];

/// `InvalidParameter.*` 中指向具体参数的错误码
fn invalid_param(code: &str) -> Option<&'static str> {
    let param = match code.strip_prefix("InvalidParameter.")? {
        "RecordLineInvalid" | "LineNotExist" => "line",
        "RecordTypeInvalid" => "type",
        "RecordValueInvalid" | "RecordValueLengthInvalid" => "value",
        "SubdomainInvalid" => "subdomain",
        "MxInvalid" => "mx",
        "DomainIdInvalid" | "DomainInvalid" | "DomainTooLong" | "DomainTypeInvalid" => "domain",
        _ => return None,
    };
    Some(param)
}

impl ProviderErrorMapper for DnspodProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn classify(&self, code: &str, context: &ErrorContext) -> Option<ErrorClass> {
        let class = match code {
            c if c.starts_with("AuthFailure")
                || c.starts_with("InvalidParameter.LoginToken")
                || CREDENTIAL_PARAMS.contains(&c) =>
            {
                ErrorClass::Credentials
            }

            // 纯频率限制，稍后可重试；带子类的 RequestLimitExceeded.* 是配额
            "RequestLimitExceeded"
            | "RequestLimitExceeded.RequestLimitExceeded"
            | "FailedOperation.FrequencyLimit"
            | "InvalidParameter.OperationIsTooFrequent" => ErrorClass::RateLimited,

            "LimitExceeded.RecordTtlLimit" => ErrorClass::Invalid("ttl"),
            c if c.starts_with("LimitExceeded") || c.starts_with("RequestLimitExceeded.") => {
                ErrorClass::Quota
            }

            "InvalidParameter.DomainRecordExist" => ErrorClass::RecordExists,
            "ResourceNotFound.NoDataOfDomain" | "InvalidParameterValue.DomainNotExists" => {
                ErrorClass::DomainNotFound
            }
            c if LOCKED.contains(&c) => ErrorClass::DomainLocked,

            c if c.starts_with("OperationDenied")
                || c == "UnauthorizedOperation"
                || NOT_OWNER.contains(&c) =>
            {
                ErrorClass::PermissionDenied
            }

            // 同一个错误码，有记录 ID 时表示记录不存在
            "ResourceNotFound.NoDataOfRecord" | "InvalidParameter.RecordIdInvalid"
                if context.record_id.is_some() =>
            {
                ErrorClass::RecordNotFound
            }
            "InvalidParameter.RecordIdInvalid" => ErrorClass::Invalid("record_id"),

            c => ErrorClass::Invalid(invalid_param(c)?),
        };
        Some(class)
    }
}
