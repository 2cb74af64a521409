//! 共享测试工具：本地 mock server 上的 provider 与断言宏

#![allow(dead_code)]

use dnscli_provider::{
    AliyunProvider, CloudflareAuth, CloudflareProvider, DnsRecordType, DnspodProvider, Parameter,
};
use wiremock::MockServer;

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(res.is_ok(), "{}: {res:?}", format_args!($($msg)+));
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Err`，并解包返回错误。
#[macro_export]
macro_rules! require_err {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_err(), "expected Err(..), got {res:?}");
        let Err(err) = res else {
            return;
        };
        err
    }};
}

pub const TEST_DOMAIN: &str = "example.com";

pub fn cloudflare(server: &MockServer) -> CloudflareProvider {
    CloudflareProvider::builder(CloudflareAuth::Token("test-token".to_string()))
        .endpoint(server.uri())
        .build()
        .expect("cloudflare provider")
}

pub fn aliyun(server: &MockServer) -> AliyunProvider {
    AliyunProvider::builder("test-access-key".to_string(), "test-secret".to_string())
        .endpoint(server.uri())
        .build()
        .expect("aliyun provider")
}

pub fn dnspod(server: &MockServer) -> DnspodProvider {
    DnspodProvider::builder("test-secret-id".to_string(), "test-secret-key".to_string())
        .endpoint(server.uri())
        .build()
        .expect("dnspod provider")
}

/// `www.example.com A 1.1.1.1` 风格的参数
pub fn record_param(name: &str, record_type: DnsRecordType, value: &str) -> Parameter {
    Parameter {
        name: name.to_string(),
        record_type: Some(record_type),
        value: value.to_string(),
        ttl: 600,
        ..Parameter::new(TEST_DOMAIN)
    }
}

/// 只带 ID 的参数（get/delete）
pub fn id_param(id: &str) -> Parameter {
    Parameter {
        id: id.to_string(),
        ..Parameter::new(TEST_DOMAIN)
    }
}
