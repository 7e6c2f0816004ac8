use std::time::Duration;

use colored::*;
use indicatif::ProgressStyle;
use localnet_common::network::subnet::Subnet;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg} {elapsed:.dim}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ])
}

/// Span that shows a spinner for as long as the discovery pass instrumented
/// with it is running.
pub fn discovery_span(subnet: &Subnet, timeout: Duration) -> Span {
    let span = info_span!("discovery", indicatif.pb_show = true);
    span.pb_set_style(&spinner_style());
    span.pb_set_message(&format!(
        "Sweeping {} (up to {}s per tool)",
        subnet.to_string().green().bold(),
        timeout.as_secs()
    ));
    span
}
