use colored::*;
use netcarve_common::{config::Config, network::address::{self, IpValue}};
use tracing::warn;

use crate::terminal::{colors, print};

pub fn sort(addresses: &[String], cfg: &Config) -> anyhow::Result<()> {
    let sorted: Vec<IpValue> = address::sort_addresses(addresses);
    let dropped: usize = addresses.len() - sorted.len();
    if dropped > 0 {
        warn!("Ignored {dropped} entries without an IPv4 address");
    }

    print::header("sorted addresses", cfg.quiet);
    for ip_value in &sorted {
        print::aligned_line(
            &ip_value.address,
            ip_value.value.to_string().color(colors::ACCENT),
        );
    }
    Ok(())
}
