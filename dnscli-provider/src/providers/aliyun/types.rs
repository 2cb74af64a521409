//! 阿里云 API 类型定义和辅助函数

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ProviderError, Result};

// ============ RPC 请求参数 ============

/// 请求结构 -> 按参数名排序、RFC3986 编码的 query string
///
/// 请求结构都是扁平的，嵌套对象和数组不会出现；`None` 字段已被 serde 跳过。
pub fn serialize_to_query_string<T: Serialize>(params: &T) -> Result<String> {
    let serialization_error = |detail: String| ProviderError::SerializationError {
        provider: super::PROVIDER_NAME.to_string(),
        detail,
    };

    let Value::Object(fields) =
        serde_json::to_value(params).map_err(|e| serialization_error(e.to_string()))?
    else {
        return Err(serialization_error("request is not an object".to_string()));
    };

    let mut sorted = BTreeMap::new();
    for (key, value) in &fields {
        let value = match value {
            Value::Null => continue,
            Value::String(s) => s.clone(),
            Value::Number(_) | Value::Bool(_) => value.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(serialization_error(format!("nested field {key}")));
            }
        };
        sorted.insert(key.as_str(), value);
    }

    Ok(sorted
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&"))
}

// ============ 域名相关结构 ============

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDomainsResponse {
    pub domains: Option<DomainsWrapper>,
    pub total_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainsWrapper {
    pub domain: Option<Vec<AliyunDomain>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AliyunDomain {
    pub domain_name: String,
    /// 云解析实例是否过期
    pub instance_expired: Option<bool>,
    /// 毫秒时间戳
    pub create_timestamp: Option<i64>,
}

// ============ 记录相关结构 ============

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDomainRecordsResponse {
    pub domain_records: Option<DomainRecordsWrapper>,
    pub total_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainRecordsWrapper {
    pub record: Option<Vec<AliyunRecord>>,
}

/// `DescribeDomainRecords` 列表项，同时也是 `DescribeDomainRecordInfo` 的响应
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AliyunRecord {
    pub record_id: String,
    pub domain_name: Option<String>,
    #[serde(rename = "RR")]
    pub rr: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(default)]
    pub value: String,
    #[serde(rename = "TTL", default)]
    pub ttl: u32,
    pub line: Option<String>,
    pub priority: Option<u16>,
    /// 毫秒时间戳
    pub update_timestamp: Option<i64>,
}

pub type DescribeDomainRecordInfoResponse = AliyunRecord;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddDomainRecordResponse {
    pub record_id: String,
}

/// 只关心成功与否的响应（Update/Delete）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmptyResponse {}

// ============ 请求结构 ============

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDomainsRequest {
    pub page_number: u32,
    pub page_size: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDomainRecordsRequest<'a> {
    pub domain_name: &'a str,
    pub page_number: u32,
    pub page_size: u32,
    /// 主机记录关键字
    #[serde(rename = "RRKeyWord", skip_serializing_if = "Option::is_none")]
    pub rr_keyword: Option<&'a str>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<&'static str>,
    #[serde(rename = "ValueKeyWord", skip_serializing_if = "Option::is_none")]
    pub value_keyword: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<&'a str>,
}

/// `AddDomainRecord` / `UpdateDomainRecord` 共用字段
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WriteDomainRecordRequest<'a> {
    /// 仅 Add 使用
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<&'a str>,
    /// 仅 Update 使用
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<&'a str>,
    #[serde(rename = "RR")]
    pub rr: &'a str,
    #[serde(rename = "Type")]
    pub record_type: &'static str,
    pub value: String,
    #[serde(rename = "TTL", skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecordIdRequest<'a> {
    pub record_id: &'a str,
}
