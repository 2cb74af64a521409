//! `DNSPod` DnsProvider trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{
    Domain, DomainStatus, Parameter, ProviderMetadata, ProviderType, Record, RecordData,
};

use super::{
    CreateRecordRequest, DEFAULT_RECORD_LINE, DescribeDomainListRequest,
    DescribeRecordListRequest, DescribeRecordResponse, DnspodDomain, DnspodProvider,
    DnspodRecord, DnspodRecordInfo, DomainListResponse, MAX_PAGE_SIZE, RecordIdRequest,
    RecordListResponse,
};

/// 空 zone 时 `DescribeRecordList` 返回的错误码
const NO_DATA_OF_RECORD: &str = "ResourceNotFound.NoDataOfRecord";

impl DnspodProvider {
    /// DNSPod 记录 ID 为 u64
    fn parse_record_id(&self, record_id: &str) -> Result<u64> {
        record_id
            .parse()
            .map_err(|_| ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "record_id".to_string(),
                detail: format!("invalid record ID '{record_id}', expected a number"),
            })
    }

    /// 状态：ENABLE / PAUSE / SPAM；DNSStatus 为 DNSERROR 表示 NS 未生效
    pub(crate) fn dnspod_domain_to_domain(domain: DnspodDomain) -> Domain {
        let status = match (domain.status.as_str(), domain.dns_status.as_str()) {
            ("ENABLE" | "enable", "DNSERROR") => DomainStatus::Pending,
            ("ENABLE" | "enable", _) => DomainStatus::Active,
            ("PAUSE" | "pause", _) => DomainStatus::Paused,
            ("SPAM" | "spam", _) => DomainStatus::Error,
            _ => DomainStatus::Unknown,
        };

        Domain {
            name: domain.name,
            status,
            created: domain.created_on,
        }
    }

    fn dnspod_record_to_record(record: DnspodRecord, domain: &str) -> Record {
        Record {
            id: record.record_id.to_string(),
            domain: domain.to_string(),
            name: record.name,
            record_type: record.record_type,
            value: record.value,
            ttl: record.ttl,
            line: record.line,
            priority: record.mx.filter(|mx| *mx > 0),
            proxied: None,
            updated: record.updated_on,
        }
    }

    fn record_info_to_record(info: DnspodRecordInfo, domain: &str) -> Record {
        Record {
            id: info.id.to_string(),
            domain: domain.to_string(),
            name: info.sub_domain,
            record_type: info.record_type,
            value: info.value,
            ttl: info.ttl,
            line: info.record_line,
            priority: info.mx.filter(|mx| *mx > 0),
            proxied: None,
            updated: info.updated_on,
        }
    }

    /// Create/Modify 共用的请求体
    fn write_request<'a>(
        param: &'a Parameter,
        domain: &'a str,
        record_id: Option<u64>,
    ) -> Result<CreateRecordRequest<'a>> {
        let data = RecordData::from_parameter(param, super::PROVIDER_NAME)?;
        Ok(CreateRecordRequest {
            domain,
            record_id,
            sub_domain: param.host(),
            record_type: data.record_type().as_str(),
            record_line: param.line_opt().unwrap_or(DEFAULT_RECORD_LINE),
            value: data.to_flat_value(),
            ttl: param.ttl_opt(),
            mx: data.mx_priority(),
        })
    }
}

#[async_trait]
impl DnsProvider for DnspodProvider {
    fn id(&self) -> &'static str {
        super::PROVIDER_NAME
    }

    fn metadata() -> ProviderMetadata {
        crate::factory::provider_metadata(ProviderType::Tencent)
    }

    async fn list_records(&self, param: &Parameter) -> Result<Vec<Record>> {
        let domain = param.require_domain(self.provider_name())?;
        let ctx = ErrorContext::for_param("list_records", param);

        let mut records = Vec::new();
        let mut offset = 0u32;

        loop {
            let req = DescribeRecordListRequest {
                domain,
                subdomain: param.name_filter(),
                record_type: param.record_type.map(|t| t.as_str()),
                keyword: param.value_filter(),
                record_line: param.line_opt(),
                offset,
                limit: MAX_PAGE_SIZE,
            };

            let response: RecordListResponse =
                match self.request_raw("DescribeRecordList", &req).await? {
                    Ok(value) => serde_json::from_value(value).map_err(|e| self.parse_error(e))?,
                    // 没有匹配的记录
                    Err(raw) if raw.code.as_deref() == Some(NO_DATA_OF_RECORD) => break,
                    Err(raw) => return Err(self.map_error(raw, ctx)),
                };

            let count_info = response.record_count_info;
            let batch = response.record_list.unwrap_or_default();
            if batch.is_empty() {
                break;
            }
            let list_count = count_info
                .as_ref()
                .and_then(|c| c.list_count)
                .unwrap_or(batch.len() as u32);
            let total_count = count_info.and_then(|c| c.total_count).unwrap_or(0);

            records.extend(
                batch
                    .into_iter()
                    .map(|r| Self::dnspod_record_to_record(r, domain)),
            );

            offset += list_count;
            if list_count == 0 || offset >= total_count {
                break;
            }
        }

        log::debug!(
            "[{}] {domain}: {} records",
            self.provider_name(),
            records.len()
        );
        Ok(records)
    }

    async fn get_record(&self, param: &Parameter) -> Result<Record> {
        let domain = param.require_domain(self.provider_name())?;
        let record_id = self.parse_record_id(param.require_record_id(self.provider_name())?)?;

        let response: DescribeRecordResponse = self
            .request(
                "DescribeRecord",
                &RecordIdRequest { domain, record_id },
                &ErrorContext::for_param("get_record", param),
            )
            .await?;

        Ok(Self::record_info_to_record(response.record_info, domain))
    }

    async fn add_record(&self, param: &Parameter) -> Result<()> {
        let domain = param.require_domain(self.provider_name())?;
        let req = Self::write_request(param, domain, None)?;

        let _response: serde_json::Value = self
            .request(
                "CreateRecord",
                &req,
                &ErrorContext::for_param("add_record", param),
            )
            .await?;

        log::info!(
            "[{}] created {} record {}.{domain}",
            self.provider_name(),
            req.record_type,
            req.sub_domain
        );
        Ok(())
    }

    async fn update_record(&self, param: &Parameter) -> Result<()> {
        let domain = param.require_domain(self.provider_name())?;
        let record_id = self.parse_record_id(param.require_record_id(self.provider_name())?)?;
        let req = Self::write_request(param, domain, Some(record_id))?;

        let _response: serde_json::Value = self
            .request(
                "ModifyRecord",
                &req,
                &ErrorContext::for_param("update_record", param),
            )
            .await?;

        log::info!("[{}] updated record {record_id}", self.provider_name());
        Ok(())
    }

    async fn delete_record(&self, param: &Parameter) -> Result<()> {
        let domain = param.require_domain(self.provider_name())?;
        let record_id = self.parse_record_id(param.require_record_id(self.provider_name())?)?;

        let _response: serde_json::Value = self
            .request(
                "DeleteRecord",
                &RecordIdRequest { domain, record_id },
                &ErrorContext::for_param("delete_record", param),
            )
            .await?;

        log::info!("[{}] deleted record {record_id}", self.provider_name());
        Ok(())
    }

    async fn describe_domains(&self) -> Result<Vec<Domain>> {
        let ctx = ErrorContext::operation("describe_domains");
        let mut domains = Vec::new();
        let mut offset = 0u32;

        loop {
            let req = DescribeDomainListRequest {
                offset,
                limit: MAX_PAGE_SIZE,
            };
            let response: DomainListResponse =
                self.request("DescribeDomainList", &req, &ctx).await?;

            let total = response
                .domain_count_info
                .and_then(|c| c.all_total)
                .unwrap_or(0);
            let batch = response.domain_list.unwrap_or_default();
            if batch.is_empty() {
                break;
            }

            offset += batch.len() as u32;
            domains.extend(batch.into_iter().map(Self::dnspod_domain_to_domain));
            if offset >= total {
                break;
            }
        }

        Ok(domains)
    }
}
