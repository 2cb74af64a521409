use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};

/// Provider label used for errors raised before any adapter is involved.
pub(crate) const GENERIC_PROVIDER: &str = "dnscli";

// ============ 记录类型 ============

/// DNS record type accepted on the request path.
///
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"CNAME"`, etc.).
/// Parsing via [`FromStr`] is the single place where a type string is
/// validated; anything outside this set is rejected as an invalid argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Txt,
    Ns,
    /// 值格式 `[priority] weight port target`
    Srv,
    /// 值格式 `flags tag "value"`
    Caa,
}

impl DnsRecordType {
    /// Every supported record type, in display order.
    pub const ALL: [Self; 8] = [
        Self::A,
        Self::Aaaa,
        Self::Cname,
        Self::Mx,
        Self::Txt,
        Self::Ns,
        Self::Srv,
        Self::Caa,
    ];

    /// Upper-case wire name (`"AAAA"`, `"MX"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Ns => "NS",
            Self::Srv => "SRV",
            Self::Caa => "CAA",
        }
    }
}

impl fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DnsRecordType {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == upper)
            .ok_or_else(|| ProviderError::InvalidParameter {
                provider: GENERIC_PROVIDER.to_string(),
                param: "type".to_string(),
                detail: format!(
                    "unsupported record type '{s}', expected one of {}",
                    Self::ALL.map(Self::as_str).join(",")
                ),
            })
    }
}

// ============ Request Parameter ============

/// Request descriptor passed to every record operation.
///
/// Empty strings mean "not set". `ttl == 0` means "provider default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Provider-assigned record ID. Empty until the record exists.
    pub id: String,
    /// Owning zone, e.g. `example.com`.
    pub domain: String,
    /// Host label relative to the zone. Empty or `@` is the apex.
    pub name: String,
    /// Record type. Already validated against [`DnsRecordType`].
    pub record_type: Option<DnsRecordType>,
    /// Record content; meaning depends on the type.
    pub value: String,
    /// TTL in seconds, 0 for provider default.
    pub ttl: u32,
    /// Routing line (Aliyun/DNSPod only).
    pub line: String,
    /// Priority for MX (and SRV when not carried in the value).
    pub priority: u16,
    /// Cloudflare edge proxy flag.
    pub proxied: bool,
    /// Informational.
    pub status: String,
    /// Informational.
    pub remark: String,
}

impl Parameter {
    /// Starts a parameter bundle for `domain`.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }

    /// Returns the domain or an `InvalidParameter` error when it is empty.
    pub fn require_domain(&self, provider: &str) -> Result<&str> {
        non_empty(&self.domain, provider, "domain")
    }

    /// Returns the record ID or an `InvalidParameter` error when it is empty.
    pub fn require_record_id(&self, provider: &str) -> Result<&str> {
        non_empty(&self.id, provider, "record_id")
    }

    /// Returns the record type or an `InvalidParameter` error when it is unset.
    pub fn require_record_type(&self, provider: &str) -> Result<DnsRecordType> {
        self.record_type
            .ok_or_else(|| ProviderError::InvalidParameter {
                provider: provider.to_string(),
                param: "type".to_string(),
                detail: "record type is required".to_string(),
            })
    }

    /// Host label with the apex spelled as `@`.
    pub fn host(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() { "@" } else { name }
    }

    /// Non-empty optional filter/setting helpers.
    pub fn name_filter(&self) -> Option<&str> {
        opt(&self.name)
    }

    pub fn value_filter(&self) -> Option<&str> {
        opt(&self.value)
    }

    pub fn line_opt(&self) -> Option<&str> {
        opt(&self.line)
    }

    /// TTL when set, otherwise `None` so the provider applies its default.
    pub fn ttl_opt(&self) -> Option<u32> {
        (self.ttl > 0).then_some(self.ttl)
    }
}

fn opt(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

fn non_empty<'a>(value: &'a str, provider: &str, param: &str) -> Result<&'a str> {
    opt(value).ok_or_else(|| ProviderError::InvalidParameter {
        provider: provider.to_string(),
        param: param.to_string(),
        detail: format!("{param} must not be empty"),
    })
}

// ============ Record Data (write path) ============

/// Type-safe representation of DNS record content.
///
/// Built from a [`Parameter`] on the write path. Adapters match on it
/// exhaustively, so a new record type cannot be silently encoded as an
/// empty payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum RecordData {
    A { address: String },
    AAAA { address: String },
    CNAME { target: String },
    MX {
        priority: u16,
        exchange: String,
    },
    TXT { text: String },
    NS { nameserver: String },
    SRV {
        priority: u16,
        weight: u16,
        port: u16,
        target: String,
    },
    CAA {
        /// 0 或 128（critical）
        flags: u8,
        /// Property tag (`issue`, `issuewild`, `iodef`).
        tag: String,
        value: String,
    },
}

impl RecordData {
    /// Builds the typed payload for a write operation.
    ///
    /// SRV values are `"priority weight port target"`, or `"weight port target"`
    /// with the priority taken from [`Parameter::priority`]. CAA values are
    /// `"flags tag value"`; the value may be quoted.
    pub fn from_parameter(param: &Parameter, provider: &str) -> Result<Self> {
        let record_type = param.require_record_type(provider)?;
        let value = non_empty(&param.value, provider, "value")?.to_string();

        Ok(match record_type {
            DnsRecordType::A => Self::A { address: value },
            DnsRecordType::Aaaa => Self::AAAA { address: value },
            DnsRecordType::Cname => Self::CNAME { target: value },
            DnsRecordType::Mx => Self::MX {
                priority: param.priority,
                exchange: value,
            },
            DnsRecordType::Txt => Self::TXT { text: value },
            DnsRecordType::Ns => Self::NS { nameserver: value },
            DnsRecordType::Srv => parse_srv(&value, param.priority, provider)?,
            DnsRecordType::Caa => parse_caa(&value, provider)?,
        })
    }

    pub fn record_type(&self) -> DnsRecordType {
        match self {
            Self::A { .. } => DnsRecordType::A,
            Self::AAAA { .. } => DnsRecordType::Aaaa,
            Self::CNAME { .. } => DnsRecordType::Cname,
            Self::MX { .. } => DnsRecordType::Mx,
            Self::TXT { .. } => DnsRecordType::Txt,
            Self::NS { .. } => DnsRecordType::Ns,
            Self::SRV { .. } => DnsRecordType::Srv,
            Self::CAA { .. } => DnsRecordType::Caa,
        }
    }

    /// Flattens the payload into the single-string form used by
    /// Aliyun and DNSPod (`Value` field). MX priority is sent separately.
    pub fn to_flat_value(&self) -> String {
        match self {
            Self::A { address } | Self::AAAA { address } => address.clone(),
            Self::CNAME { target } => target.clone(),
            Self::MX { exchange, .. } => exchange.clone(),
            Self::TXT { text } => text.clone(),
            Self::NS { nameserver } => nameserver.clone(),
            Self::SRV {
                priority,
                weight,
                port,
                target,
            } => format!("{priority} {weight} {port} {target}"),
            Self::CAA { flags, tag, value } => format!("{flags} {tag} \"{value}\""),
        }
    }

    /// MX priority, if this is an MX record.
    pub fn mx_priority(&self) -> Option<u16> {
        match self {
            Self::MX { priority, .. } => Some(*priority),
            _ => None,
        }
    }
}

fn invalid_value(provider: &str, detail: String) -> ProviderError {
    ProviderError::InvalidParameter {
        provider: provider.to_string(),
        param: "value".to_string(),
        detail,
    }
}

fn parse_number<T: FromStr>(part: &str, what: &str, provider: &str) -> Result<T> {
    part.parse()
        .map_err(|_| invalid_value(provider, format!("invalid {what}: '{part}'")))
}

fn parse_srv(value: &str, default_priority: u16, provider: &str) -> Result<RecordData> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    let (priority, rest) = match parts.len() {
        4 => (parse_number(parts[0], "SRV priority", provider)?, &parts[1..]),
        3 => (default_priority, &parts[..]),
        _ => {
            return Err(invalid_value(
                provider,
                format!("expected 'priority weight port target' for SRV, got '{value}'"),
            ));
        }
    };

    Ok(RecordData::SRV {
        priority,
        weight: parse_number(rest[0], "SRV weight", provider)?,
        port: parse_number(rest[1], "SRV port", provider)?,
        target: rest[2].to_string(),
    })
}

fn parse_caa(value: &str, provider: &str) -> Result<RecordData> {
    let mut parts = value.trim().splitn(3, char::is_whitespace);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(flags), Some(tag), Some(rest)) if !rest.trim().is_empty() => Ok(RecordData::CAA {
            flags: parse_number(flags, "CAA flags", provider)?,
            tag: tag.to_string(),
            value: rest.trim().trim_matches('"').to_string(),
        }),
        _ => Err(invalid_value(
            provider,
            format!("expected 'flags tag value' for CAA, got '{value}'"),
        )),
    }
}

// ============ Read Path ============

/// A DNS record as returned by a provider.
///
/// `record_type` stays textual: vendors may return types outside
/// [`DnsRecordType`] (SOA, URL forwarding, ...) and those are still listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub domain: String,
    /// Host label relative to the zone, `@` for the apex.
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub value: String,
    pub ttl: u32,
    /// Routing line; `None` where the provider has no such concept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    /// Edge proxy flag; Cloudflare only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
    /// Last modification time, `%Y-%m-%d %H:%M:%S`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

/// 各厂商域名状态归一后的取值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainStatus {
    Active,
    Paused,
    /// 等待 NS 切换或验证
    Pending,
    /// 云解析实例已过期（阿里云）
    Expired,
    Error,
    Unknown,
}

impl fmt::Display for DomainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Pending => "pending",
            Self::Expired => "expired",
            Self::Error => "error",
            Self::Unknown => "unknown",
        })
    }
}

/// A zone visible to the authenticated account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub name: String,
    pub status: DomainStatus,
    /// Creation time, `%Y-%m-%d %H:%M:%S`, when the provider reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

// ============ Provider ============

/// Which adapter to build.
///
/// The string tags are `cloudflare`, `aliyun` and `tencent`; `dnspod` is
/// accepted as an alias of `tencent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    Cloudflare,
    Aliyun,
    #[serde(alias = "dnspod")]
    Tencent,
}

impl ProviderType {
    /// All provider types in display order.
    pub const ALL: [Self; 3] = [Self::Aliyun, Self::Tencent, Self::Cloudflare];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cloudflare => "cloudflare",
            Self::Aliyun => "aliyun",
            Self::Tencent => "tencent",
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderType {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cloudflare" => Ok(Self::Cloudflare),
            "aliyun" => Ok(Self::Aliyun),
            "tencent" | "dnspod" => Ok(Self::Tencent),
            _ => Err(ProviderError::UnsupportedProvider {
                provider_type: s.to_string(),
            }),
        }
    }
}

// ============ 元数据 ============

/// The input type of a credential field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    /// 不回显，日志与列表中打码
    Password,
    Email,
}

/// 凭证字段说明，CLI 据此提示缺失的参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderCredentialField {
    /// Machine-readable key, matching the [`ProviderCredentials`] field name.
    pub key: String,
    /// Human-readable label.
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

impl ProviderCredentialField {
    pub(crate) fn new(key: &str, label: &str, field_type: FieldType, help: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            field_type,
            help_text: Some(help.to_string()),
        }
    }
}

/// 厂商特有能力，决定列表输出中出现哪些列
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProviderFeatures {
    /// Supports an edge proxy (Cloudflare's orange cloud).
    pub proxy: bool,
    /// Supports routing lines.
    pub line: bool,
}

/// Provider-specific pagination limits used by the adapters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderLimits {
    pub max_page_size_domains: u32,
    pub max_page_size_records: u32,
}

/// Provider 的静态描述，见 [`get_all_provider_metadata`](crate::get_all_provider_metadata)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderMetadata {
    pub id: ProviderType,
    pub name: String,
    pub description: String,
    /// Every credential field the provider understands.
    pub required_fields: Vec<ProviderCredentialField>,
    pub features: ProviderFeatures,
    pub limits: ProviderLimits,
}

// ============ Credential Types ============

/// Credential bundle for any supported provider.
///
/// Aliyun and DNSPod use `secret_id`/`secret_key`. Cloudflare uses
/// `api_token`, or the legacy global `api_key` plus `api_email`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_email: Option<String>,
}

impl ProviderCredentials {
    /// Looks up a field by its metadata key. Blank values count as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "secret_id" => self.secret_id.as_deref(),
            "secret_key" => self.secret_key.as_deref(),
            "api_token" => self.api_token.as_deref(),
            "api_key" => self.api_key.as_deref(),
            "api_email" => self.api_email.as_deref(),
            _ => None,
        };
        value.filter(|v| !v.trim().is_empty())
    }

    /// Returns `self` with every non-blank field of `overrides` applied on top.
    #[must_use]
    pub fn overlay(mut self, overrides: &Self) -> Self {
        fn pick(base: &mut Option<String>, over: Option<&String>) {
            if let Some(v) = over.filter(|v| !v.trim().is_empty()) {
                *base = Some(v.clone());
            }
        }
        pick(&mut self.secret_id, overrides.secret_id.as_ref());
        pick(&mut self.secret_key, overrides.secret_key.as_ref());
        pick(&mut self.api_token, overrides.api_token.as_ref());
        pick(&mut self.api_key, overrides.api_key.as_ref());
        pick(&mut self.api_email, overrides.api_email.as_ref());
        self
    }

    /// Credential fields still needed before `provider_type` can be constructed.
    ///
    /// Cloudflare is satisfied by a token alone, or by key plus e-mail. With
    /// nothing given it asks for the token.
    pub fn missing_fields(&self, provider_type: ProviderType) -> Vec<ProviderCredentialField> {
        let fields = crate::factory::provider_metadata(provider_type).required_fields;
        let wanted: &[&str] = match provider_type {
            ProviderType::Cloudflare => {
                if self.get("api_token").is_some() {
                    &[]
                } else if self.get("api_key").is_some() || self.get("api_email").is_some() {
                    &["api_key", "api_email"]
                } else {
                    &["api_token"]
                }
            }
            ProviderType::Aliyun | ProviderType::Tencent => &["secret_id", "secret_key"],
        };

        fields
            .into_iter()
            .filter(|f| wanted.contains(&f.key.as_str()) && self.get(&f.key).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_type_parses_case_insensitively() {
        assert_eq!("aaaa".parse::<DnsRecordType>().unwrap(), DnsRecordType::Aaaa);
        assert_eq!(" MX ".parse::<DnsRecordType>().unwrap(), DnsRecordType::Mx);
    }

    #[test]
    fn record_type_outside_enumeration_is_invalid_argument() {
        for bad in ["PTR", "SOA", "", "URL"] {
            let err = bad.parse::<DnsRecordType>().unwrap_err();
            assert_eq!(err.kind(), crate::ErrorKind::InvalidArgument, "{bad}");
        }
    }

    #[test]
    fn provider_type_tags() {
        assert_eq!("aliyun".parse::<ProviderType>().unwrap(), ProviderType::Aliyun);
        assert_eq!("dnspod".parse::<ProviderType>().unwrap(), ProviderType::Tencent);
        assert_eq!(ProviderType::Tencent.to_string(), "tencent");
    }

    #[test]
    fn provider_type_unknown_names_tag() {
        let err = "unknown-vendor".parse::<ProviderType>().unwrap_err();
        assert!(matches!(
            err,
            ProviderError::UnsupportedProvider { ref provider_type } if provider_type == "unknown-vendor"
        ));
    }

    #[test]
    fn parameter_guards() {
        let p = Parameter::new("");
        assert!(matches!(
            p.require_domain("t"),
            Err(ProviderError::InvalidParameter { ref param, .. }) if param == "domain"
        ));
        assert!(matches!(
            p.require_record_id("t"),
            Err(ProviderError::InvalidParameter { ref param, .. }) if param == "record_id"
        ));
        assert_eq!(p.host(), "@");
        assert_eq!(p.ttl_opt(), None);
    }

    fn param(record_type: DnsRecordType, value: &str) -> Parameter {
        Parameter {
            record_type: Some(record_type),
            value: value.to_string(),
            ..Parameter::new("example.com")
        }
    }

    #[test]
    fn record_data_mx_takes_priority_from_parameter() {
        let mut p = param(DnsRecordType::Mx, "mail.example.com");
        p.priority = 10;
        let data = RecordData::from_parameter(&p, "t").unwrap();
        assert_eq!(
            data,
            RecordData::MX {
                priority: 10,
                exchange: "mail.example.com".to_string()
            }
        );
        assert_eq!(data.mx_priority(), Some(10));
    }

    #[test]
    fn record_data_srv_with_and_without_priority() {
        let full = RecordData::from_parameter(
            &param(DnsRecordType::Srv, "10 5 5060 sip.example.com"),
            "t",
        )
        .unwrap();
        assert_eq!(full.to_flat_value(), "10 5 5060 sip.example.com");

        let mut short = param(DnsRecordType::Srv, "5 5060 sip.example.com");
        short.priority = 20;
        let data = RecordData::from_parameter(&short, "t").unwrap();
        assert!(matches!(data, RecordData::SRV { priority: 20, port: 5060, .. }));
    }

    #[test]
    fn record_data_srv_malformed() {
        let err = RecordData::from_parameter(&param(DnsRecordType::Srv, "sip.example.com"), "t")
            .unwrap_err();
        assert!(matches!(err, ProviderError::InvalidParameter { ref param, .. } if param == "value"));
    }

    #[test]
    fn record_data_caa_unquotes_value() {
        let data = RecordData::from_parameter(
            &param(DnsRecordType::Caa, "0 issue \"letsencrypt.org\""),
            "t",
        )
        .unwrap();
        assert_eq!(
            data,
            RecordData::CAA {
                flags: 0,
                tag: "issue".to_string(),
                value: "letsencrypt.org".to_string()
            }
        );
        assert_eq!(data.to_flat_value(), "0 issue \"letsencrypt.org\"");
    }

    #[test]
    fn record_data_requires_type_and_value() {
        let mut p = Parameter::new("example.com");
        p.value = "1.1.1.1".to_string();
        assert!(RecordData::from_parameter(&p, "t").is_err());

        let p = param(DnsRecordType::A, "  ");
        assert!(RecordData::from_parameter(&p, "t").is_err());
    }

    #[test]
    fn credentials_overlay_prefers_non_blank_overrides() {
        let base = ProviderCredentials {
            secret_id: Some("id".into()),
            secret_key: Some("key".into()),
            ..Default::default()
        };
        let over = ProviderCredentials {
            secret_key: Some("new-key".into()),
            secret_id: Some(String::new()),
            ..Default::default()
        };
        let merged = base.overlay(&over);
        assert_eq!(merged.secret_id.as_deref(), Some("id"));
        assert_eq!(merged.secret_key.as_deref(), Some("new-key"));
    }

    #[test]
    fn missing_fields_for_secret_pair() {
        let creds = ProviderCredentials {
            secret_id: Some("id".into()),
            ..Default::default()
        };
        let missing = creds.missing_fields(ProviderType::Aliyun);
        let keys: Vec<_> = missing.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ["secret_key"]);
    }

    #[test]
    fn missing_fields_for_cloudflare() {
        let none = ProviderCredentials::default().missing_fields(ProviderType::Cloudflare);
        assert_eq!(none.len(), 1);
        assert_eq!(none[0].key, "api_token");

        let key_only = ProviderCredentials {
            api_key: Some("k".into()),
            ..Default::default()
        };
        let missing = key_only.missing_fields(ProviderType::Cloudflare);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].key, "api_email");

        let token = ProviderCredentials {
            api_token: Some("t".into()),
            ..Default::default()
        };
        assert!(token.missing_fields(ProviderType::Cloudflare).is_empty());
    }
}
