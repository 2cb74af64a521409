//! Record table rendering
//!
//! 每个 provider 对应一份显式的列清单，不适用的列（如阿里云的 proxied）直接不出现。

use dnscli_provider::{ProviderType, Record};
use unicode_width::UnicodeWidthStr;

/// One column of the `record list` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordColumn {
    Id,
    Name,
    Type,
    Value,
    Ttl,
    Line,
    Priority,
    Proxied,
    Updated,
}

impl RecordColumn {
    const ALL: [Self; 9] = [
        Self::Id,
        Self::Name,
        Self::Type,
        Self::Value,
        Self::Ttl,
        Self::Line,
        Self::Priority,
        Self::Proxied,
        Self::Updated,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "NAME",
            Self::Type => "TYPE",
            Self::Value => "VALUE",
            Self::Ttl => "TTL",
            Self::Line => "LINE",
            Self::Priority => "PRIORITY",
            Self::Proxied => "PROXIED",
            Self::Updated => "UPDATED",
        }
    }

    pub fn cell(self, record: &Record) -> String {
        match self {
            Self::Id => record.id.clone(),
            Self::Name => record.name.clone(),
            Self::Type => record.record_type.clone(),
            Self::Value => record.value.clone(),
            Self::Ttl => record.ttl.to_string(),
            Self::Line => record.line.clone().unwrap_or_default(),
            Self::Priority => record.priority.map(|p| p.to_string()).unwrap_or_default(),
            Self::Proxied => record.proxied.map(|p| p.to_string()).unwrap_or_default(),
            Self::Updated => record.updated.clone().unwrap_or_default(),
        }
    }

    /// Columns shown for records of `provider_type`.
    pub fn for_provider(provider_type: ProviderType) -> Vec<Self> {
        let excluded: &[Self] = match provider_type {
            ProviderType::Aliyun => &[Self::Proxied, Self::Updated],
            ProviderType::Tencent => &[Self::Proxied],
            ProviderType::Cloudflare => &[Self::Line],
        };
        Self::ALL
            .into_iter()
            .filter(|c| !excluded.contains(c))
            .collect()
    }
}

fn format_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.zip(widths) {
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(width - cell.width() + 1));
        line.push('|');
    }
    line
}

/// Renders a bordered, left-aligned table.
pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let border = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let mut out = Vec::with_capacity(rows.len() + 4);
    out.push(border.clone());
    out.push(format_row(headers.iter().copied(), &widths));
    out.push(border.clone());
    for row in rows {
        out.push(format_row(row.iter().map(String::as_str), &widths));
    }
    out.push(border);
    out.join("\n")
}

/// `record list` output for `provider_type`.
pub fn render_records(provider_type: ProviderType, records: &[Record]) -> String {
    let columns = RecordColumn::for_provider(provider_type);
    let headers: Vec<&str> = columns.iter().map(|c| c.header()).collect();
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| columns.iter().map(|c| c.cell(r)).collect())
        .collect();
    render(&headers, &rows)
}
