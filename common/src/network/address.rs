use std::net::Ipv4Addr;

use tracing::debug;

/// An address or CIDR string paired with the numeric value of its address part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpValue {
    pub address: String,
    pub value: u32,
}

/// Numeric value of the address part of "a.b.c.d" or "a.b.c.d/n".
pub fn addr_to_value(address: &str) -> Option<u32> {
    let ip: &str = address.split('/').next().unwrap_or(address).trim();
    ip.parse::<Ipv4Addr>().ok().map(u32::from)
}

/// Sorts address or CIDR strings by their numeric address, keeping the input order
/// for equal addresses. Entries that do not start with an IPv4 address are dropped.
pub fn sort_addresses<S: AsRef<str>>(addresses: &[S]) -> Vec<IpValue> {
    let mut values: Vec<IpValue> = addresses
        .iter()
        .filter_map(|address| {
            let address: &str = address.as_ref();
            match addr_to_value(address) {
                Some(value) => Some(IpValue {
                    address: address.to_string(),
                    value,
                }),
                None => {
                    debug!("Dropping unparsable address '{address}' from sort");
                    None
                }
            }
        })
        .collect();

    values.sort_by_key(|ip_value| ip_value.value);
    values
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
