//! Renderings of a finished discovery result.
//!
//! Every renderer is a pure function of the ordered records. Unknown fields
//! render as empty strings in the machine formats.

use clap::ValueEnum;
use colored::*;
use localnet_common::network::host::HostRecord;

use crate::terminal::{colors, print};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns
    Table,
    /// `ip,hostname,mac,vendor`
    Csv,
    /// Pretty printed array of objects
    Json,
    /// Ansible inventory group
    Ansible,
    /// Coloured tree, one branch per host
    Tree,
}

struct HostRow<'a> {
    ip: String,
    hostname: &'a str,
    mac: &'a str,
    vendor: &'a str,
}

impl<'a> From<&'a HostRecord> for HostRow<'a> {
    fn from(host: &'a HostRecord) -> Self {
        Self {
            ip: host.address.to_string(),
            hostname: host.hostname.as_deref().unwrap_or_default(),
            mac: host.hardware_address.as_deref().unwrap_or_default(),
            vendor: host.vendor.as_deref().unwrap_or_default(),
        }
    }
}

pub fn render(format: OutputFormat, hosts: &[HostRecord]) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Table => table(hosts),
        OutputFormat::Csv => csv(hosts),
        OutputFormat::Json => json(hosts)?,
        OutputFormat::Ansible => ansible(hosts),
        OutputFormat::Tree => tree(hosts),
    };
    Ok(rendered)
}

fn table(hosts: &[HostRecord]) -> String {
    let mut rows: Vec<[String; 4]> = vec![["IP", "Hostname", "MAC", "Vendor"].map(String::from)];
    rows.extend(hosts.iter().map(HostRow::from).map(|row| {
        [row.ip, row.hostname.to_string(), row.mac.to_string(), row.vendor.to_string()]
    }));

    let mut widths = [0usize; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    rows.iter()
        .map(|row| {
            row.iter()
                .zip(widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn csv(hosts: &[HostRecord]) -> String {
    let mut lines = vec!["ip,hostname,mac,vendor".to_string()];
    for row in hosts.iter().map(HostRow::from) {
        lines.push(format!(
            "{},{},{},{}",
            row.ip,
            csv_field(row.hostname),
            csv_field(row.mac),
            csv_field(row.vendor)
        ));
    }
    lines.join("\n")
}

/// Quotes fields that would otherwise break the row (vendor names often
/// contain commas).
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn json(hosts: &[HostRecord]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(hosts)?)
}

fn ansible(hosts: &[HostRecord]) -> String {
    let mut lines = vec!["[scanned]".to_string()];
    lines.extend(hosts.iter().map(|host| match host.hostname.as_deref() {
        Some(name) => name.to_string(),
        None => host.address.to_string(),
    }));
    lines.join("\n")
}

fn tree(hosts: &[HostRecord]) -> String {
    let mut lines: Vec<String> = Vec::new();
    for (idx, host) in hosts.iter().enumerate() {
        let hostname = host.hostname.as_deref().unwrap_or("No hostname");
        lines.push(print::tree_head(idx, hostname));

        let mut details: Vec<(String, ColoredString)> = vec![(
            "IPv4".to_string(),
            host.address.to_string().color(colors::IPV4_ADDR),
        )];
        details.push(("MAC".to_string(), detail(&host.hardware_address, colors::MAC_ADDR)));
        details.push(("Vendor".to_string(), detail(&host.vendor, colors::VENDOR)));

        lines.extend(print::tree_one_level(&details));
        if idx + 1 != hosts.len() {
            lines.push(String::new());
        }
    }
    lines.join("\n")
}

fn detail(value: &Option<String>, color: Color) -> ColoredString {
    match value.as_deref() {
        Some(value) => value.color(color),
        None => "unknown".color(colors::UNKNOWN).italic(),
    }
}
