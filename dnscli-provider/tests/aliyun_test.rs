//! 阿里云 adapter 针对本地 mock server 的集成测试

mod common;

use common::{TEST_DOMAIN, aliyun, id_param, record_param};
use dnscli_provider::{DnsProvider, DnsRecordType, DomainStatus, ErrorKind, Parameter, ProviderError};
use serde_json::json;
use wiremock::matchers::{any, header, header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn aliyun_record(id: &str, rr: &str, value: &str) -> serde_json::Value {
    json!({
        "RecordId": id,
        "DomainName": TEST_DOMAIN,
        "RR": rr,
        "Type": "A",
        "Value": value,
        "TTL": 600,
        "Line": "default",
        "Status": "ENABLE",
        "UpdateTimestamp": 1_705_305_600_000_i64,
    })
}

fn records_page(records: &serde_json::Value, total: u32, page_number: u32) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "RequestId": "req",
        "TotalCount": total,
        "PageNumber": page_number,
        "PageSize": 100,
        "DomainRecords": {"Record": records},
    }))
}

fn action(name: &'static str) -> impl wiremock::Match {
    header("x-acs-action", name)
}

#[tokio::test]
async fn list_records_reads_until_total_count() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(action("DescribeDomainRecords"))
        .and(query_param("DomainName", TEST_DOMAIN))
        .and(query_param("PageNumber", "1"))
        .respond_with(records_page(
            &json!([aliyun_record("1", "www", "1.1.1.1"), aliyun_record("2", "@", "2.2.2.2")]),
            3,
            1,
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(action("DescribeDomainRecords"))
        .and(query_param("PageNumber", "2"))
        .respond_with(records_page(&json!([aliyun_record("3", "mail", "3.3.3.3")]), 3, 2))
        .expect(1)
        .mount(&server)
        .await;

    let provider = aliyun(&server);
    let records = require_ok!(provider.list_records(&Parameter::new(TEST_DOMAIN)).await);

    let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
    assert_eq!(records[0].line.as_deref(), Some("default"));
    assert_eq!(records[0].updated.as_deref(), Some("2024-01-15 08:00:00"));
    assert!(records.iter().all(|r| r.proxied.is_none()));
}

#[tokio::test]
async fn failed_page_discards_partial_results() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(action("DescribeDomainRecords"))
        .and(query_param("PageNumber", "1"))
        .respond_with(records_page(&json!([aliyun_record("1", "www", "1.1.1.1")]), 2, 1))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(action("DescribeDomainRecords"))
        .and(query_param("PageNumber", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "RequestId": "req",
            "Code": "InternalError",
            "Message": "The request processing has failed due to some unknown error.",
        })))
        .mount(&server)
        .await;

    let provider = aliyun(&server);
    let err = require_err!(provider.list_records(&Parameter::new(TEST_DOMAIN)).await);
    assert_eq!(err.kind(), ErrorKind::Provider);
    assert!(err.to_string().contains("InternalError"), "{err}");
}

#[tokio::test]
async fn add_then_list_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(action("AddDomainRecord"))
        .and(header_regex("Authorization", "^ACS3-HMAC-SHA256 Credential=test-access-key,"))
        .and(query_param("DomainName", TEST_DOMAIN))
        .and(query_param("RR", "www"))
        .and(query_param("Type", "A"))
        .and(query_param("Value", "1.1.1.1"))
        .and(query_param("TTL", "600"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "RequestId": "req",
            "RecordId": "9001",
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(action("DescribeDomainRecords"))
        .and(query_param("RRKeyWord", "www"))
        .respond_with(records_page(&json!([aliyun_record("9001", "www", "1.1.1.1")]), 1, 1))
        .mount(&server)
        .await;

    let provider = aliyun(&server);
    require_ok!(
        provider
            .add_record(&record_param("www", DnsRecordType::A, "1.1.1.1"))
            .await
    );

    let filter = Parameter {
        name: "www".to_string(),
        ..Parameter::new(TEST_DOMAIN)
    };
    let records = require_ok!(provider.list_records(&filter).await);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "9001");
    assert_eq!(records[0].name, "www");
    assert_eq!(records[0].record_type, "A");
    assert_eq!(records[0].value, "1.1.1.1");
}

#[tokio::test]
async fn update_sends_record_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(action("UpdateDomainRecord"))
        .and(query_param("RecordId", "9001"))
        .and(query_param("RR", "www"))
        .and(query_param("Value", "2.2.2.2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "RequestId": "req",
            "RecordId": "9001",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = aliyun(&server);
    let param = Parameter {
        id: "9001".to_string(),
        ..record_param("www", DnsRecordType::A, "2.2.2.2")
    };
    require_ok!(provider.update_record(&param).await);
}

#[tokio::test]
async fn quota_error_keeps_operation_and_vendor_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(action("AddDomainRecord"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "RequestId": "req",
            "Code": "QuotaExceeded.ARecord",
            "Message": "A record quota of example.com reached",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = aliyun(&server);
    let err = require_err!(
        provider
            .add_record(&record_param("www", DnsRecordType::A, "1.1.1.1"))
            .await
    );
    assert_eq!(err.kind(), ErrorKind::Provider);
    assert!(matches!(
        err,
        ProviderError::QuotaExceeded { ref operation, ref target, .. }
            if operation.as_deref() == Some("add_record") && target.as_deref() == Some(TEST_DOMAIN)
    ));
    assert_eq!(
        err.to_string(),
        "[aliyun] Quota exceeded in add_record for 'example.com': A record quota of example.com reached"
    );
}

#[tokio::test]
async fn delete_without_id_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let provider = aliyun(&server);
    let err = require_err!(provider.delete_record(&id_param("")).await);
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[tokio::test]
async fn get_missing_record_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(action("DescribeDomainRecordInfo"))
        .and(query_param("RecordId", "404404"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "RequestId": "req",
            "Code": "DomainRecordNotBelongToUser",
            "Message": "The DNS record does not belong to the current user.",
        })))
        .mount(&server)
        .await;

    let provider = aliyun(&server);
    let err = require_err!(provider.get_record(&id_param("404404")).await);
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(matches!(err, ProviderError::RecordNotFound { ref record_id, .. } if record_id == "404404"));
}

#[tokio::test]
async fn get_record_reads_single_record() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(action("DescribeDomainRecordInfo"))
        .and(query_param("RecordId", "9001"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(aliyun_record("9001", "www", "1.1.1.1")),
        )
        .mount(&server)
        .await;

    let provider = aliyun(&server);
    let record = require_ok!(provider.get_record(&id_param("9001")).await);
    assert_eq!(record.name, "www");
    assert_eq!(record.domain, TEST_DOMAIN);
}

#[tokio::test]
async fn describe_domains_maps_expired_instances() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(action("DescribeDomains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "RequestId": "req",
            "TotalCount": 2,
            "Domains": {"Domain": [
                {"DomainName": "example.com", "InstanceExpired": false, "CreateTimestamp": 1_704_067_200_000_i64},
                {"DomainName": "old.example", "InstanceExpired": true},
            ]},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = aliyun(&server);
    let domains = require_ok!(provider.describe_domains().await);
    assert_eq!(domains.len(), 2);
    assert_eq!(domains[0].status, DomainStatus::Active);
    assert_eq!(domains[0].created.as_deref(), Some("2024-01-01 00:00:00"));
    assert_eq!(domains[1].status, DomainStatus::Expired);
}

#[tokio::test]
async fn bad_access_key_is_authentication_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "RequestId": "req",
            "Code": "InvalidAccessKeyId.NotFound",
            "Message": "Specified access key is not found.",
        })))
        .mount(&server)
        .await;

    let provider = aliyun(&server);
    let err = require_err!(provider.describe_domains().await);
    assert_eq!(err.kind(), ErrorKind::AuthenticationFailed);
}
