//! Cloudflare DnsProvider trait 实现

use async_trait::async_trait;
use reqwest::Method;

use crate::error::{ProviderError, Result};
use crate::providers::common::{
    format_rfc3339, full_name_to_relative, normalize_domain_name, relative_to_full_name,
};
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{
    DnsRecordType, Domain, DomainStatus, Parameter, ProviderMetadata, ProviderType, Record,
    RecordData,
};

use super::{
    CloudflareCaaData, CloudflareDnsRecord, CloudflareProvider, CloudflareRecordBody,
    CloudflareRecordData, CloudflareSrvData, CloudflareZone, MAX_PAGE_SIZE_RECORDS,
    MAX_PAGE_SIZE_ZONES,
};

/// Cloudflare 用 ttl=1 表示 automatic
const TTL_AUTOMATIC: u32 = 1;

impl CloudflareProvider {
    /// 将 Cloudflare zone 转换为 Domain
    /// Cloudflare 状态：active, pending, initializing, moved, deactivated
    pub(crate) fn zone_to_domain(zone: CloudflareZone) -> Domain {
        let status = match zone.status.as_str() {
            "active" => DomainStatus::Active,
            "pending" | "initializing" => DomainStatus::Pending,
            "moved" | "deactivated" => DomainStatus::Paused,
            _ => DomainStatus::Unknown,
        };

        Domain {
            name: zone.name,
            status,
            created: zone.created_on.as_deref().map(format_rfc3339),
        }
    }

    /// 将 Cloudflare 记录转换为 `Record`
    fn cf_record_to_record(cf_record: CloudflareDnsRecord, zone_name: &str) -> Record {
        Record {
            id: cf_record.id,
            domain: zone_name.to_string(),
            name: full_name_to_relative(&cf_record.name, zone_name),
            record_type: cf_record.record_type,
            value: cf_record.content,
            ttl: cf_record.ttl,
            line: None,
            priority: cf_record.priority,
            proxied: cf_record.proxied,
            updated: cf_record.modified_on.as_deref().map(format_rfc3339),
        }
    }

    /// 域名 -> zone，要求名称完全匹配，每次调用都重新查询
    async fn resolve_zone(&self, domain: &str, operation: &str) -> Result<CloudflareZone> {
        let ctx = ErrorContext {
            operation: Some(operation.to_string()),
            domain: Some(domain.to_string()),
            ..ErrorContext::default()
        };
        let wanted = normalize_domain_name(domain);

        let zones: Vec<CloudflareZone> = self
            .get(&format!("/zones?name={}", urlencoding::encode(&wanted)), &ctx)
            .await?;

        zones
            .into_iter()
            .find(|z| normalize_domain_name(&z.name).eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ProviderError::DomainNotFound {
                provider: self.provider_name().to_string(),
                domain: domain.to_string(),
                raw_message: None,
            })
    }

    /// 按记录类型构建请求体
    fn record_body(param: &Parameter, zone_name: &str) -> Result<CloudflareRecordBody> {
        let data = RecordData::from_parameter(param, super::PROVIDER_NAME)?;
        let record_type = data.record_type();

        let (content, priority, structured) = match data {
            RecordData::A { address } | RecordData::AAAA { address } => {
                (Some(address), None, None)
            }
            RecordData::CNAME { target } => (Some(target), None, None),
            RecordData::MX { priority, exchange } => (Some(exchange), Some(priority), None),
            RecordData::TXT { text } => (Some(text), None, None),
            RecordData::NS { nameserver } => (Some(nameserver), None, None),
            RecordData::SRV {
                priority,
                weight,
                port,
                target,
            } => (
                None,
                None,
                Some(CloudflareRecordData::Srv(CloudflareSrvData {
                    priority,
                    weight,
                    port,
                    target,
                })),
            ),
            RecordData::CAA { flags, tag, value } => (
                None,
                None,
                Some(CloudflareRecordData::Caa(CloudflareCaaData {
                    flags,
                    tag,
                    value,
                })),
            ),
        };

        // 只有 A/AAAA/CNAME 可以走代理
        let proxied = matches!(
            record_type,
            DnsRecordType::A | DnsRecordType::Aaaa | DnsRecordType::Cname
        )
        .then_some(param.proxied);

        Ok(CloudflareRecordBody {
            record_type: record_type.as_str(),
            name: relative_to_full_name(param.host(), zone_name),
            content,
            ttl: param.ttl_opt().unwrap_or(TTL_AUTOMATIC),
            priority,
            proxied,
            data: structured,
        })
    }
}

#[async_trait]
impl DnsProvider for CloudflareProvider {
    fn id(&self) -> &'static str {
        super::PROVIDER_NAME
    }

    fn metadata() -> ProviderMetadata {
        crate::factory::provider_metadata(ProviderType::Cloudflare)
    }

    async fn list_records(&self, param: &Parameter) -> Result<Vec<Record>> {
        let domain = param.require_domain(self.provider_name())?;
        let zone = self.resolve_zone(domain, "list_records").await?;

        let mut query: Vec<(&str, String)> = Vec::new();
        match param.name_filter() {
            // apex 只能精确匹配 zone 名
            Some("@") => query.push(("name", zone.name.clone())),
            Some(prefix) => query.push(("name.startswith", prefix.to_string())),
            None => {}
        }
        if let Some(record_type) = param.record_type {
            query.push(("type", record_type.as_str().to_string()));
        }
        if let Some(value) = param.value_filter() {
            query.push(("content.startswith", value.to_string()));
        }

        let cf_records: Vec<CloudflareDnsRecord> = self
            .get_all_pages(
                &format!("/zones/{}/dns_records", zone.id),
                &query,
                MAX_PAGE_SIZE_RECORDS,
                &ErrorContext::for_param("list_records", param),
            )
            .await?;

        Ok(cf_records
            .into_iter()
            .map(|r| Self::cf_record_to_record(r, &zone.name))
            .collect())
    }

    async fn get_record(&self, param: &Parameter) -> Result<Record> {
        let domain = param.require_domain(self.provider_name())?;
        let record_id = param.require_record_id(self.provider_name())?;
        let zone = self.resolve_zone(domain, "get_record").await?;

        let cf_record: CloudflareDnsRecord = self
            .get(
                &format!("/zones/{}/dns_records/{record_id}", zone.id),
                &ErrorContext::for_param("get_record", param),
            )
            .await?;

        Ok(Self::cf_record_to_record(cf_record, &zone.name))
    }

    async fn add_record(&self, param: &Parameter) -> Result<()> {
        let domain = param.require_domain(self.provider_name())?;
        // 先校验内容，避免无效请求触发 zone 查询
        RecordData::from_parameter(param, self.provider_name())?;
        let zone = self.resolve_zone(domain, "add_record").await?;
        let body = Self::record_body(param, &zone.name)?;

        let response = self
            .request::<CloudflareDnsRecord, _>(
                Method::POST,
                &format!("/zones/{}/dns_records", zone.id),
                Some(&body),
                &ErrorContext::for_param("add_record", param),
            )
            .await?;

        if let Some(created) = response.result {
            log::info!(
                "[{}] created {} record {} ({})",
                self.provider_name(),
                created.record_type,
                created.name,
                created.id
            );
        }
        Ok(())
    }

    async fn update_record(&self, param: &Parameter) -> Result<()> {
        let domain = param.require_domain(self.provider_name())?;
        let record_id = param.require_record_id(self.provider_name())?;
        RecordData::from_parameter(param, self.provider_name())?;
        let zone = self.resolve_zone(domain, "update_record").await?;
        let body = Self::record_body(param, &zone.name)?;

        self.request::<CloudflareDnsRecord, _>(
            Method::PUT,
            &format!("/zones/{}/dns_records/{record_id}", zone.id),
            Some(&body),
            &ErrorContext::for_param("update_record", param),
        )
        .await?;

        log::info!("[{}] updated record {record_id}", self.provider_name());
        Ok(())
    }

    async fn delete_record(&self, param: &Parameter) -> Result<()> {
        let domain = param.require_domain(self.provider_name())?;
        let record_id = param.require_record_id(self.provider_name())?;
        let zone = self.resolve_zone(domain, "delete_record").await?;

        self.request::<serde_json::Value, ()>(
            Method::DELETE,
            &format!("/zones/{}/dns_records/{record_id}", zone.id),
            None,
            &ErrorContext::for_param("delete_record", param),
        )
        .await?;

        log::info!("[{}] deleted record {record_id}", self.provider_name());
        Ok(())
    }

    async fn describe_domains(&self) -> Result<Vec<Domain>> {
        let zones: Vec<CloudflareZone> = self
            .get_all_pages(
                "/zones",
                &[],
                MAX_PAGE_SIZE_ZONES,
                &ErrorContext::operation("describe_domains"),
            )
            .await?;

        Ok(zones.into_iter().map(Self::zone_to_domain).collect())
    }
}
