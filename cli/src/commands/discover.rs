use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use is_root::is_root;
use tracing::{Instrument, warn};

use crate::commands::DiscoverArgs;
use crate::output::{self, OutputFormat};
use crate::terminal::{colors, print, spinner};
use crate::mprint;
use localnet_common::config::Config;
use localnet_common::error::ConfigError;
use localnet_common::network::host::HostRecord;
use localnet_common::network::interface;
use localnet_common::network::subnet::Subnet;
use localnet_core::discovery::DiscoveryService;

pub async fn discover(args: DiscoverArgs) -> anyhow::Result<()> {
    let cfg: Config = args.to_config()?;
    let subnet: Subnet = resolve_subnet(args.subnet.as_deref(), args.auto, cfg.interface.as_deref())?;

    if !cfg.no_arpscan && !is_root() {
        warn!("Not running as root, arp-scan will most likely contribute nothing");
    }

    let service = DiscoveryService::from_config(&cfg);
    print_plan(&subnet, &service, &cfg);

    let span = spinner::discovery_span(&subnet, cfg.timeout);
    let start_time: Instant = Instant::now();
    let hosts: Vec<HostRecord> = service.discover(&subnet).instrument(span).await;

    discovery_ends(&hosts, &subnet, start_time.elapsed(), &cfg);
    write_result(&hosts, &args)
}

/// An explicit subnet wins, `--auto` asks the interfaces. Neither is a
/// configuration error raised before anything is probed.
fn resolve_subnet(
    provided: Option<&str>,
    auto: bool,
    interface: Option<&str>,
) -> Result<Subnet, ConfigError> {
    match provided {
        Some(subnet) => subnet.parse(),
        None if auto => interface::detect_subnet(interface),
        None => Err(ConfigError::MissingSubnet),
    }
}

fn print_plan(subnet: &Subnet, service: &DiscoveryService, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    print::banner(cfg.quiet);
    print::header("getting ready for discovery", cfg.quiet);
    print::GLOBAL_KEY_WIDTH.set(9);

    print::aligned_line("Subnet", subnet.to_string().color(colors::IPV4_ADDR));
    print::aligned_line("Interface", cfg.interface.as_deref().unwrap_or("any"));
    print::aligned_line("Probes", probe_list(service));
    print::aligned_line("Timeout", format!("{}s per tool", cfg.timeout.as_secs()));
}

fn probe_list(service: &DiscoveryService) -> String {
    service
        .host_probe_names()
        .into_iter()
        .chain(service.address_probe_names())
        .collect::<Vec<_>>()
        .join(", ")
}

fn discovery_ends(hosts: &[HostRecord], subnet: &Subnet, total_time: Duration, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    if hosts.is_empty() {
        print::header("zero hosts detected", cfg.quiet);
        print::no_results(&subnet.to_string());
        return;
    }

    let active_hosts: ColoredString = format!("{} active hosts", hosts.len()).bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!("Discovery complete: {active_hosts} identified in {total_time}");

    print::fat_separator();
    print::centerln(&output);
    print::end_of_program();
}

fn write_result(hosts: &[HostRecord], args: &DiscoverArgs) -> anyhow::Result<()> {
    if let Some(path) = &args.output {
        colored::control::set_override(false);
        let mut content = output::render(args.format, hosts)?;
        if !content.ends_with('\n') {
            content.push('\n');
        }
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        return Ok(());
    }

    let content = output::render(args.format, hosts)?;
    match args.format {
        OutputFormat::Tree => {
            print::header("network discovery", args.quiet);
            for line in content.lines() {
                mprint!(line);
            }
        }
        _ => println!("{content}"),
    }
    Ok(())
}
