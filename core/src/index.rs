//! Maps an address back to its offset inside a CIDR block.

use std::net::Ipv4Addr;

use netcarve_common::error::ComputeError;
use netcarve_common::network::cidr;
use pnet::ipnetwork::Ipv4Network;

/// Offset of `address` from the network address of `pod_cidr`, or `None` when the
/// address lies outside the block.
///
/// Callers use this to rebuild their allocation table from addresses already
/// handed out.
pub fn index_in_range(pod_cidr: &str, address: Ipv4Addr) -> Result<Option<u32>, ComputeError> {
    let network: Ipv4Network = cidr::parse_cidr(pod_cidr)?;
    if !network.contains(address) {
        return Ok(None);
    }
    Ok(Some(u32::from(address) - u32::from(network.network())))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
