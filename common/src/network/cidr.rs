//! # CIDR text handling
//!
//! Parsing and formatting of `a.b.c.d/n` blocks. The textual form is what the
//! downstream plugins store and pass around, so [`format_cidr`] must reproduce it
//! exactly.

use std::net::Ipv4Addr;

use pnet::ipnetwork::{IpNetworkError, Ipv4Network};

/// Inclusive span of addresses covered by a CIDR block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    /// Number of addresses in the range.
    pub fn len(&self) -> u64 {
        let start: u32 = self.start_addr.into();
        let end: u32 = self.end_addr.into();
        u64::from(end.saturating_sub(start)) + 1
    }

    pub fn is_empty(&self) -> bool {
        self.start_addr > self.end_addr
    }
}

/// Parses CIDR notation like "192.168.1.0/24".
///
/// The literal address is kept as given: `10.0.0.17/24` parses to a network whose
/// `ip()` is `10.0.0.17` and whose `network()` is `10.0.0.0`. A bare address
/// without a prefix is rejected.
pub fn parse_cidr(s: &str) -> Result<Ipv4Network, IpNetworkError> {
    let s: &str = s.trim();
    if !s.contains('/') {
        return Err(IpNetworkError::InvalidCidrFormat(format!(
            "missing prefix length in CIDR '{s}'"
        )));
    }
    s.parse::<Ipv4Network>()
}

/// Formats an address and prefix length as "a.b.c.d/n".
pub fn format_cidr(addr: Ipv4Addr, prefix: u8) -> String {
    format!("{addr}/{prefix}")
}

/// Returns the first and last address of the block.
pub fn cidr_range(network: &Ipv4Network) -> Ipv4Range {
    Ipv4Range::new(network.network(), network.broadcast())
}

/// Number of host bits left below the prefix.
pub fn host_bits(network: &Ipv4Network) -> u32 {
    32 - u32::from(network.prefix())
}

/// Largest index a block of `block` bits can select, i.e. `2^block - 1`.
pub fn max_index(block: u8) -> u64 {
    1u64.checked_shl(u32::from(block))
        .map_or(u64::MAX, |count| count - 1)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
