//! # Subnet Allocator
//!
//! Carves the `index`-th child out of a parent block. Interface, node and pod
//! subnets are all produced by this one operation with a different block size: a
//! node subnet is simply a child of an interface subnet.
//!
//! ```text
//! 10.0.0.0/24  --(block 4, index 1)-->  10.0.0.16/28
//! ```

use std::net::Ipv4Addr;

use netcarve_common::error::ComputeError;
use netcarve_common::network::cidr;
use pnet::ipnetwork::Ipv4Network;

use crate::{bits, composer};

/// Computes the network address of the `index`-th `block`-bit child of `base_cidr`.
pub fn compute_net(base_cidr: &str, index: u32, block: u8) -> Result<Ipv4Addr, ComputeError> {
    let network: Ipv4Network = cidr::parse_cidr(base_cidr)?;
    compute_net_in(&network, index, block)
}

/// Same as [`compute_net`] for an already parsed parent.
///
/// The literal parent address is re-masked with the child mask so the child
/// address space starts at its window, then the index is composed under the
/// parent's own mask.
pub fn compute_net_in(
    network: &Ipv4Network,
    index: u32,
    block: u8,
) -> Result<Ipv4Addr, ComputeError> {
    let mask: Ipv4Addr = network.mask();
    let child_mask: Ipv4Addr = bits::extend_mask(mask, u32::from(block));
    let anchor: Ipv4Addr = bits::apply_mask(network.ip(), child_mask);

    composer::add_offset(anchor, mask, block, index)
}

/// Formats `addr` as a child of `parent_cidr` that is `extra_bits` longer.
pub fn format_subnet(
    addr: Ipv4Addr,
    parent_cidr: &str,
    extra_bits: u8,
) -> Result<String, ComputeError> {
    let parent: Ipv4Network = cidr::parse_cidr(parent_cidr)?;
    let prefix: u8 = child_prefix(&parent, extra_bits)?;
    Ok(cidr::format_cidr(addr, prefix))
}

/// Computes and formats the `index`-th child of `parent_cidr` in one step.
pub fn carve(parent_cidr: &str, index: u32, block: u8) -> Result<String, ComputeError> {
    let parent: Ipv4Network = cidr::parse_cidr(parent_cidr)?;
    let child: Ipv4Network = carve_network(&parent, index, block)?;
    Ok(cidr::format_cidr(child.ip(), child.prefix()))
}

/// Returns the `index`-th child of `parent` as a network that can be carved further.
pub fn carve_network(
    parent: &Ipv4Network,
    index: u32,
    block: u8,
) -> Result<Ipv4Network, ComputeError> {
    let addr: Ipv4Addr = compute_net_in(parent, index, block)?;
    let prefix: u8 = child_prefix(parent, block)?;
    Ok(Ipv4Network::new(addr, prefix)?)
}

fn child_prefix(parent: &Ipv4Network, extra_bits: u8) -> Result<u8, ComputeError> {
    let available: u32 = cidr::host_bits(parent);
    if u32::from(extra_bits) > available {
        return Err(ComputeError::BlockTooLarge {
            block: extra_bits.into(),
            available,
        });
    }
    Ok(parent.prefix() + extra_bits)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
