//! Tencent Cloud `DNSPod` API type definition

use serde::{Deserialize, Serialize};

// ============ Tencent Cloud API response structure ============

/// Generic Tencent Cloud response envelope.
///
/// `Response` holds either the action payload or an `Error` object, so it is
/// kept as a raw value until the error check has run.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TencentResponse {
    pub response: serde_json::Value,
}

/// Error payload nested inside Tencent Cloud responses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TencentError {
    pub code: String,
    #[serde(default)]
    pub message: String,
}

// ============ DNSPod domain name related structure ============

/// Response payload for `DescribeDomainList`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainListResponse {
    pub domain_list: Option<Vec<DnspodDomain>>,
    pub domain_count_info: Option<DomainCountInfo>,
}

/// Domain count metadata from `DescribeDomainList`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainCountInfo {
    pub all_total: Option<u32>,
}

/// Domain item returned by `DescribeDomainList`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DnspodDomain {
    pub name: String,
    /// ENABLE / PAUSE / SPAM
    #[serde(default)]
    pub status: String,
    /// 空字符串或 DNSERROR（NS 未指向 DNSPod）
    #[serde(rename = "DNSStatus", default)]
    pub dns_status: String,
    /// `YYYY-MM-DD HH:MM:SS`
    pub created_on: Option<String>,
}

// ============ DNSPod record related structure ============

/// Response payload for `DescribeRecordList`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecordListResponse {
    pub record_list: Option<Vec<DnspodRecord>>,
    pub record_count_info: Option<RecordCountInfo>,
}

/// Record count metadata from `DescribeRecordList`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecordCountInfo {
    pub total_count: Option<u32>,
    /// 本页返回条数
    pub list_count: Option<u32>,
}

/// DNS record item returned by `DescribeRecordList`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DnspodRecord {
    pub record_id: u64,
    pub name: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(default)]
    pub value: String,
    #[serde(rename = "TTL", default)]
    pub ttl: u32,
    pub line: Option<String>,
    #[serde(rename = "MX")]
    pub mx: Option<u16>,
    pub updated_on: Option<String>,
}

/// Response payload for `DescribeRecord`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeRecordResponse {
    pub record_info: DnspodRecordInfo,
}

/// `DescribeRecord` 的记录详情，字段名与列表接口不同
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DnspodRecordInfo {
    pub id: u64,
    pub sub_domain: String,
    pub record_type: String,
    #[serde(default)]
    pub value: String,
    #[serde(rename = "TTL", default)]
    pub ttl: u32,
    pub record_line: Option<String>,
    #[serde(rename = "MX")]
    pub mx: Option<u16>,
    pub updated_on: Option<String>,
}

// ============ Requests ============

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeRecordListRequest<'a> {
    pub domain: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_line: Option<&'a str>,
    pub offset: u32,
    pub limit: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDomainListRequest {
    pub offset: u32,
    pub limit: u32,
}

/// `CreateRecord` / `ModifyRecord` 共用字段
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRecordRequest<'a> {
    pub domain: &'a str,
    /// 仅 `ModifyRecord` 使用
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<u64>,
    pub sub_domain: &'a str,
    pub record_type: &'static str,
    pub record_line: &'a str,
    pub value: String,
    #[serde(rename = "TTL", skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(rename = "MX", skip_serializing_if = "Option::is_none")]
    pub mx: Option<u16>,
}

/// `DescribeRecord` / `DeleteRecord`
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecordIdRequest<'a> {
    pub domain: &'a str,
    pub record_id: u64,
}
