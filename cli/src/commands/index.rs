use std::net::Ipv4Addr;

use colored::*;
use netcarve_common::config::Config;
use netcarve_core::index;

use crate::terminal::{colors, print};

pub fn index(cidr: &str, address: Ipv4Addr, cfg: &Config) -> anyhow::Result<()> {
    print::header("address index", cfg.quiet);

    match index::index_in_range(cidr, address)? {
        Some(offset) => {
            print::aligned_line("Address", address.to_string().color(colors::IPV4_ADDR));
            print::aligned_line("Index", offset.to_string().color(colors::ACCENT).bold());
        }
        None => print::aligned_line("Address", format!("{address} is outside {cidr}").red()),
    }
    Ok(())
}
