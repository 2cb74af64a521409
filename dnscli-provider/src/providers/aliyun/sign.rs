//! 阿里云 ACS3-HMAC-SHA256 签名
//!
//! RPC 风格：参数全部在已排序编码的 query string 中，body 为空。
//! 参考: <https://www.alibabacloud.com/help/zh/sdk/product-overview/v3-request-structure-and-signature>

use crate::providers::common::{CanonicalRequest, hmac_sha256};

use super::{ALIYUN_DNS_VERSION, AliyunProvider, EMPTY_BODY_SHA256};

const ALGORITHM: &str = "ACS3-HMAC-SHA256";

impl AliyunProvider {
    /// 返回 Authorization 头
    pub(crate) fn sign(
        &self,
        action: &str,
        query_string: &str,
        timestamp: &str,
        nonce: &str,
    ) -> String {
        let headers = [
            ("host", self.host.as_str()),
            ("x-acs-action", action),
            ("x-acs-content-sha256", EMPTY_BODY_SHA256),
            ("x-acs-date", timestamp),
            ("x-acs-signature-nonce", nonce),
            ("x-acs-version", ALIYUN_DNS_VERSION),
        ];
        let request = CanonicalRequest {
            query: query_string,
            headers: &headers,
            payload: b"",
        };

        let string_to_sign = format!("{ALGORITHM}\n{}", request.digest());
        let signature = hex::encode(hmac_sha256(
            self.access_key_secret.as_bytes(),
            string_to_sign.as_bytes(),
        ));

        format!(
            "{ALGORITHM} Credential={},SignedHeaders={},Signature={signature}",
            self.access_key_id,
            request.signed_headers()
        )
    }
}
