//! 阿里云 DnsProvider trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::providers::common::format_timestamp_millis;
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{
    Domain, DomainStatus, Parameter, ProviderMetadata, ProviderType, Record, RecordData,
};

use super::{
    AddDomainRecordResponse, AliyunDomain, AliyunProvider, AliyunRecord,
    DescribeDomainRecordInfoResponse, DescribeDomainRecordsRequest,
    DescribeDomainRecordsResponse, DescribeDomainsRequest, DescribeDomainsResponse,
    EmptyResponse, MAX_PAGE_SIZE, RecordIdRequest, WriteDomainRecordRequest,
};

impl AliyunProvider {
    /// `DescribeDomains` 不返回解析状态，只能从实例是否过期判断
    pub(crate) fn aliyun_domain_to_domain(domain: AliyunDomain) -> Domain {
        let status = match domain.instance_expired {
            Some(true) => DomainStatus::Expired,
            Some(false) | None => DomainStatus::Active,
        };

        Domain {
            name: domain.domain_name,
            status,
            created: domain.create_timestamp.and_then(format_timestamp_millis),
        }
    }

    pub(crate) fn aliyun_record_to_record(record: AliyunRecord, domain: &str) -> Record {
        Record {
            id: record.record_id,
            domain: record.domain_name.unwrap_or_else(|| domain.to_string()),
            name: record.rr,
            record_type: record.record_type,
            value: record.value,
            ttl: record.ttl,
            line: record.line,
            priority: record.priority,
            proxied: None, // 阿里云不支持代理
            updated: record.update_timestamp.and_then(format_timestamp_millis),
        }
    }

    /// Add/Update 共用的请求体
    fn write_request<'a>(
        param: &'a Parameter,
        domain_name: Option<&'a str>,
        record_id: Option<&'a str>,
    ) -> Result<WriteDomainRecordRequest<'a>> {
        let data = RecordData::from_parameter(param, super::PROVIDER_NAME)?;
        Ok(WriteDomainRecordRequest {
            domain_name,
            record_id,
            rr: param.host(),
            record_type: data.record_type().as_str(),
            value: data.to_flat_value(),
            ttl: param.ttl_opt(),
            priority: data.mx_priority(),
            line: param.line_opt(),
        })
    }
}

#[async_trait]
impl DnsProvider for AliyunProvider {
    fn id(&self) -> &'static str {
        super::PROVIDER_NAME
    }

    fn metadata() -> ProviderMetadata {
        crate::factory::provider_metadata(ProviderType::Aliyun)
    }

    async fn list_records(&self, param: &Parameter) -> Result<Vec<Record>> {
        let domain = param.require_domain(self.provider_name())?;
        let ctx = ErrorContext::for_param("list_records", param);

        let mut records = Vec::new();
        let mut page_number = 1u32;

        loop {
            let req = DescribeDomainRecordsRequest {
                domain_name: domain,
                page_number,
                page_size: MAX_PAGE_SIZE,
                rr_keyword: param.name_filter(),
                record_type: param.record_type.map(|t| t.as_str()),
                value_keyword: param.value_filter(),
                line: param.line_opt(),
            };

            let response: DescribeDomainRecordsResponse =
                self.request("DescribeDomainRecords", &req, &ctx).await?;

            let total_count = response.total_count.unwrap_or(0) as usize;
            let batch = response
                .domain_records
                .and_then(|r| r.record)
                .unwrap_or_default();
            if batch.is_empty() {
                break;
            }

            records.extend(
                batch
                    .into_iter()
                    .map(|r| Self::aliyun_record_to_record(r, domain)),
            );
            if records.len() >= total_count {
                break;
            }
            page_number += 1;
        }

        log::debug!(
            "[{}] {domain}: {} records in {page_number} page(s)",
            self.provider_name(),
            records.len()
        );
        Ok(records)
    }

    async fn get_record(&self, param: &Parameter) -> Result<Record> {
        let domain = param.require_domain(self.provider_name())?;
        let record_id = param.require_record_id(self.provider_name())?;

        let response: DescribeDomainRecordInfoResponse = self
            .request(
                "DescribeDomainRecordInfo",
                &RecordIdRequest { record_id },
                &ErrorContext::for_param("get_record", param),
            )
            .await?;

        Ok(Self::aliyun_record_to_record(response, domain))
    }

    async fn add_record(&self, param: &Parameter) -> Result<()> {
        let domain = param.require_domain(self.provider_name())?;
        let req = Self::write_request(param, Some(domain), None)?;

        let response: AddDomainRecordResponse = self
            .request(
                "AddDomainRecord",
                &req,
                &ErrorContext::for_param("add_record", param),
            )
            .await?;

        log::info!(
            "[{}] created {} record {}.{domain} ({})",
            self.provider_name(),
            req.record_type,
            req.rr,
            response.record_id
        );
        Ok(())
    }

    async fn update_record(&self, param: &Parameter) -> Result<()> {
        param.require_domain(self.provider_name())?;
        let record_id = param.require_record_id(self.provider_name())?;
        let req = Self::write_request(param, None, Some(record_id))?;

        let _response: EmptyResponse = self
            .request(
                "UpdateDomainRecord",
                &req,
                &ErrorContext::for_param("update_record", param),
            )
            .await?;

        log::info!("[{}] updated record {record_id}", self.provider_name());
        Ok(())
    }

    async fn delete_record(&self, param: &Parameter) -> Result<()> {
        param.require_domain(self.provider_name())?;
        let record_id = param.require_record_id(self.provider_name())?;

        let _response: EmptyResponse = self
            .request(
                "DeleteDomainRecord",
                &RecordIdRequest { record_id },
                &ErrorContext::for_param("delete_record", param),
            )
            .await?;

        log::info!("[{}] deleted record {record_id}", self.provider_name());
        Ok(())
    }

    async fn describe_domains(&self) -> Result<Vec<Domain>> {
        let ctx = ErrorContext::operation("describe_domains");
        let mut domains = Vec::new();
        let mut page_number = 1u32;

        loop {
            let req = DescribeDomainsRequest {
                page_number,
                page_size: MAX_PAGE_SIZE,
            };
            let response: DescribeDomainsResponse =
                self.request("DescribeDomains", &req, &ctx).await?;

            let total_count = response.total_count.unwrap_or(0) as usize;
            let batch = response
                .domains
                .and_then(|d| d.domain)
                .unwrap_or_default();
            if batch.is_empty() {
                break;
            }

            domains.extend(batch.into_iter().map(Self::aliyun_domain_to_domain));
            if domains.len() >= total_count {
                break;
            }
            page_number += 1;
        }

        Ok(domains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DnsRecordType;

    #[test]
    fn expired_instance_maps_to_expired() {
        let domain = AliyunProvider::aliyun_domain_to_domain(AliyunDomain {
            domain_name: "example.com".into(),
            instance_expired: Some(true),
            create_timestamp: Some(1_705_305_600_000),
        });
        assert_eq!(domain.status, DomainStatus::Expired);
        assert_eq!(domain.created.as_deref(), Some("2024-01-15 08:00:00"));
    }

    #[test]
    fn write_request_flattens_srv_and_mx() {
        let mut param = Parameter {
            name: "_sip._tcp".into(),
            record_type: Some(DnsRecordType::Srv),
            value: "10 5 5060 sip.example.com".into(),
            ..Parameter::new("example.com")
        };
        let req = AliyunProvider::write_request(&param, Some("example.com"), None).unwrap();
        assert_eq!(req.value, "10 5 5060 sip.example.com");
        assert_eq!(req.priority, None);
        assert_eq!(req.ttl, None);

        param.record_type = Some(DnsRecordType::Mx);
        param.name = String::new();
        param.value = "mail.example.com".into();
        param.priority = 5;
        param.ttl = 600;
        let req = AliyunProvider::write_request(&param, Some("example.com"), None).unwrap();
        assert_eq!(req.rr, "@");
        assert_eq!(req.priority, Some(5));
        assert_eq!(req.ttl, Some(600));
    }
}
