use std::net::Ipv4Addr;

use anyhow::Context;
use colored::*;
use netcarve_common::{config::Config, network::cidr};
use netcarve_core::bits;
use pnet::ipnetwork::Ipv4Network;

use crate::terminal::{colors, print};

pub fn mask(cidr_text: &str, extra_bits: u8, cfg: &Config) -> anyhow::Result<()> {
    let network: Ipv4Network =
        cidr::parse_cidr(cidr_text).with_context(|| format!("Invalid CIDR '{cidr_text}'"))?;

    let extended: Ipv4Addr = bits::extend_mask(network.mask(), u32::from(extra_bits));
    let prefix: u32 = 32 - bits::free_bits(extended);

    print::header("mask extension", cfg.quiet);
    print::aligned_line("Base mask", network.mask().to_string().color(colors::TEXT_DEFAULT));
    print::aligned_line("Extended", extended.to_string().color(colors::IPV4_ADDR));
    print::aligned_line("Prefix", format!("/{prefix}").color(colors::IPV4_PREFIX));
    Ok(())
}
