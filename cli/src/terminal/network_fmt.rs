use crate::terminal::colors;
use colored::*;
use netcarve_common::network::cidr::Ipv4Range;
use netcarve_core::bits;
use pnet::ipnetwork::Ipv4Network;

pub fn network_to_colored(network: &Ipv4Network) -> ColoredString {
    let address: ColoredString = network.ip().to_string().color(colors::IPV4_ADDR);
    let prefix: ColoredString = network.prefix().to_string().color(colors::IPV4_PREFIX);
    format!("{address}/{prefix}").color(colors::SEPARATOR)
}

pub fn range_to_colored(range: &Ipv4Range) -> ColoredString {
    let start: ColoredString = range.start_addr.to_string().color(colors::IPV4_ADDR);
    let end: ColoredString = range.end_addr.to_string().color(colors::IPV4_ADDR);
    let count: ColoredString = range.len().to_string().color(colors::ACCENT);
    format!("{start} - {end} ({count} addresses)").normal()
}

/// Index rendered as dot-separated binary octets, e.g. `00000001.00000000`.
pub fn index_to_binary(index: u32) -> ColoredString {
    bits::to_bits(u64::from(index))
        .iter()
        .map(|byte| format!("{byte:08b}"))
        .collect::<Vec<String>>()
        .join(".")
        .color(colors::BINARY)
}
