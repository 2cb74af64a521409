//! `dnscli record ...`

use dnscli_provider::{DnsRecordType, Parameter};

use super::Session;
use crate::cli::{RecordCommand, RecordOptions};
use crate::table;

/// 记录类型先经过校验再进入 `Parameter`
fn parse_type(record_type: &str) -> anyhow::Result<DnsRecordType> {
    Ok(record_type.parse::<DnsRecordType>()?)
}

/// 写操作成功后输出的一行
fn done(action: &str, subject: &str) -> String {
    format!("已{action}: {subject}")
}

fn write_param(
    domain: String,
    id: String,
    name: String,
    record_type: &str,
    value: String,
    options: RecordOptions,
) -> anyhow::Result<Parameter> {
    Ok(Parameter {
        id,
        name,
        record_type: Some(parse_type(record_type)?),
        value,
        ttl: options.ttl,
        line: options.line.unwrap_or_default(),
        priority: options.priority,
        proxied: options.proxied,
        ..Parameter::new(domain)
    })
}

fn list_param(
    domain: String,
    name: Option<String>,
    record_type: Option<&str>,
    value: Option<String>,
    line: Option<String>,
) -> anyhow::Result<Parameter> {
    Ok(Parameter {
        name: name.unwrap_or_default(),
        record_type: record_type.map(parse_type).transpose()?,
        value: value.unwrap_or_default(),
        line: line.unwrap_or_default(),
        ..Parameter::new(domain)
    })
}

pub async fn run(session: &Session, cmd: RecordCommand) -> anyhow::Result<()> {
    match cmd {
        RecordCommand::Create {
            domain,
            name,
            record_type,
            value,
            options,
        } => {
            let param = write_param(domain, String::new(), name, &record_type, value, options)?;
            let (_, provider) = session.connect()?;
            provider.add_record(&param).await?;
            let subject = format!(
                "{}.{} {} {}",
                param.host(),
                param.domain,
                record_type.to_ascii_uppercase(),
                param.value
            );
            println!("{}", done("创建", &subject));
        }
        RecordCommand::List {
            domain,
            name,
            record_type,
            value,
            line,
        } => {
            let param = list_param(domain, name, record_type.as_deref(), value, line)?;
            let (provider_type, provider) = session.connect()?;
            let records = provider.list_records(&param).await?;
            println!("记录数: {}", records.len());
            println!("{}", table::render_records(provider_type, &records));
        }
        RecordCommand::Get { domain, id } => {
            let param = Parameter {
                id,
                ..Parameter::new(domain)
            };
            let (provider_type, provider) = session.connect()?;
            let record = provider.get_record(&param).await?;
            println!("{}", table::render_records(provider_type, &[record]));
        }
        RecordCommand::Update {
            domain,
            id,
            name,
            record_type,
            value,
            options,
        } => {
            let param = write_param(domain, id, name, &record_type, value, options)?;
            let (_, provider) = session.connect()?;
            provider.update_record(&param).await?;
            println!("{}", done("更新", &param.id));
        }
        RecordCommand::Delete { domain, ids } => {
            let (_, provider) = session.connect()?;
            // 逐个删除，遇到第一个错误即停止
            for id in ids {
                let param = Parameter {
                    id,
                    ..Parameter::new(domain.clone())
                };
                provider.delete_record(&param).await?;
                println!("{}", done("删除", &param.id));
            }
        }
    }
    Ok(())
}
