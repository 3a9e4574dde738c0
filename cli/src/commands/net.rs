use std::net::Ipv4Addr;

use colored::*;
use netcarve_common::config::Config;
use netcarve_core::allocator;

use crate::terminal::{colors, network_fmt, print};

pub fn net(cidr: &str, index: u32, block: u8, cfg: &Config) -> anyhow::Result<()> {
    let addr: Ipv4Addr = allocator::compute_net(cidr, index, block)?;
    let subnet: String = allocator::format_subnet(addr, cidr, block)?;

    print::header("child subnet", cfg.quiet);
    print::aligned_line("Parent", cidr.color(colors::TEXT_DEFAULT));
    print::aligned_line(
        "Index",
        format!("{index} ({})", network_fmt::index_to_binary(index)).normal(),
    );
    print::aligned_line("Subnet", subnet.color(colors::IPV4_ADDR).bold());
    Ok(())
}
