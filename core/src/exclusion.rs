//! Checks candidate subnets against excluded ranges.
//!
//! This is best-effort filtering, not validation: malformed exclusion entries are
//! skipped with a debug message.

use std::net::Ipv4Addr;

use netcarve_common::network::cidr;
use pnet::ipnetwork::Ipv4Network;
use tracing::debug;

use crate::allocator;

/// Returns true if the `index`-th `block`-bit child of `base_cidr` falls inside one of
/// `exclusions`.
pub fn is_excluded<S: AsRef<str>>(
    base_cidr: &str,
    index: u32,
    block: u8,
    exclusions: &[S],
) -> bool {
    find_exclusion(base_cidr, index, block, exclusions).is_some()
}

/// Returns the first exclusion covering the `index`-th `block`-bit child of
/// `base_cidr`, if any.
pub fn find_exclusion<S: AsRef<str>>(
    base_cidr: &str,
    index: u32,
    block: u8,
    exclusions: &[S],
) -> Option<Ipv4Network> {
    match cidr::parse_cidr(base_cidr) {
        Ok(network) => find_exclusion_in(&network, index, block, exclusions),
        Err(e) => {
            debug!("Cannot check exclusions for '{base_cidr}': {e}");
            None
        }
    }
}

/// Same as [`find_exclusion`] for an already parsed parent.
///
/// Only exclusions at least as coarse as the candidate are considered, since a
/// finer one cannot cover it. The candidate's network address is tested as a
/// single host.
pub fn find_exclusion_in<S: AsRef<str>>(
    network: &Ipv4Network,
    index: u32,
    block: u8,
    exclusions: &[S],
) -> Option<Ipv4Network> {
    if exclusions.is_empty() {
        return None;
    }

    let candidate: Ipv4Addr = match allocator::compute_net_in(network, index, block) {
        Ok(addr) => addr,
        Err(e) => {
            debug!("Cannot place index {index} in {network}: {e}");
            return None;
        }
    };
    let candidate_prefix: u32 = u32::from(network.prefix()) + u32::from(block);

    for exclusion in exclusions {
        let exclusion: &str = exclusion.as_ref();
        let range: Ipv4Network = match cidr::parse_cidr(exclusion) {
            Ok(range) => range,
            Err(e) => {
                debug!("Skipping malformed exclusion '{exclusion}': {e}");
                continue;
            }
        };

        if u32::from(range.prefix()) > candidate_prefix {
            continue;
        }
        if range.contains(candidate) {
            return Some(range);
        }
    }

    None
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
