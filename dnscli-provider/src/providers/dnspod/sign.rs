//! `DNSPod` TC3-HMAC-SHA256 签名
//!
//! 参考: <https://cloud.tencent.com/document/api/1427/56189>

use chrono::{DateTime, Utc};

use crate::providers::common::{CanonicalRequest, hmac_sha256};

use super::{DNSPOD_SERVICE, DnspodProvider};

const ALGORITHM: &str = "TC3-HMAC-SHA256";
const CONTENT_TYPE: &str = "application/json; charset=utf-8";

impl DnspodProvider {
    /// 返回 Authorization 头；签名日期取 `timestamp` 的 UTC 日期
    pub(crate) fn sign(&self, action: &str, payload: &str, timestamp: i64) -> String {
        let date = DateTime::from_timestamp(timestamp, 0)
            .unwrap_or_else(Utc::now)
            .format("%Y-%m-%d")
            .to_string();
        let scope = format!("{date}/{DNSPOD_SERVICE}/tc3_request");

        let action = action.to_lowercase();
        let headers = [
            ("content-type", CONTENT_TYPE),
            ("host", self.host.as_str()),
            ("x-tc-action", action.as_str()),
        ];
        let request = CanonicalRequest {
            query: "",
            headers: &headers,
            payload: payload.as_bytes(),
        };
        let string_to_sign = format!("{ALGORITHM}\n{timestamp}\n{scope}\n{}", request.digest());

        // 派生密钥: TC3<key> -> date -> service -> tc3_request
        let signing_key = [DNSPOD_SERVICE.as_bytes(), &b"tc3_request"[..]]
            .into_iter()
            .fold(
                hmac_sha256(format!("TC3{}", self.secret_key).as_bytes(), date.as_bytes()),
                |key, part| hmac_sha256(&key, part),
            );
        let signature = hex::encode(hmac_sha256(&signing_key, string_to_sign.as_bytes()));

        format!(
            "{ALGORITHM} Credential={}/{scope}, SignedHeaders={}, Signature={signature}",
            self.secret_id,
            request.signed_headers()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-01-15 08:00:00 UTC
    const TS: i64 = 1_705_305_600;

    fn provider() -> DnspodProvider {
        DnspodProvider::new("test_secret_id".to_string(), "test_secret_key".to_string()).unwrap()
    }

    fn field<'a>(auth: &'a str, name: &str) -> &'a str {
        auth.split(", ")
            .find_map(|p| p.split_once(&format!("{name}=")).map(|(_, v)| v))
            .unwrap_or_default()
    }

    #[test]
    fn credential_scope_uses_utc_date() {
        let p = provider();
        let morning = p.sign("DescribeRecordList", "{}", TS);
        let evening = p.sign("DescribeRecordList", "{}", TS + 12 * 3600);
        let next_day = p.sign("DescribeRecordList", "{}", TS + 24 * 3600);

        assert_eq!(
            field(&morning, "Credential"),
            "test_secret_id/2024-01-15/dnspod/tc3_request"
        );
        assert_eq!(field(&morning, "Credential"), field(&evening, "Credential"));
        assert_eq!(
            field(&next_day, "Credential"),
            "test_secret_id/2024-01-16/dnspod/tc3_request"
        );
        assert_eq!(field(&morning, "SignedHeaders"), "content-type;host;x-tc-action");
    }

    #[test]
    fn action_payload_and_key_are_signed() {
        let p = provider();
        let base = p.sign("DescribeRecordList", r#"{"Domain":"a.com"}"#, TS);
        assert_eq!(base, p.sign("DescribeRecordList", r#"{"Domain":"a.com"}"#, TS));

        let other_key = DnspodProvider::new("test_secret_id".to_string(), "key_beta".to_string()).unwrap();
        for other in [
            p.sign("CreateRecord", r#"{"Domain":"a.com"}"#, TS),
            p.sign("DescribeRecordList", r#"{"Domain":"b.com"}"#, TS),
            other_key.sign("DescribeRecordList", r#"{"Domain":"a.com"}"#, TS),
        ] {
            assert_ne!(field(&base, "Signature"), field(&other, "Signature"));
        }
    }

    #[test]
    fn snapshot() {
        let auth = provider().sign("DescribeRecordList", r#"{"Domain":"example.com"}"#, TS);
        assert_eq!(
            auth,
            "TC3-HMAC-SHA256 \
             Credential=test_secret_id/2024-01-15/dnspod/tc3_request, \
             SignedHeaders=content-type;host;x-tc-action, \
             Signature=f2e521deb895b213b30f29023c2cd4cca3a2b91b0af5c9218828d3479f559629"
        );
    }
}
