//! Host addresses inside a leaf pod block.
//!
//! Pod addresses are indexed from the network address of the block. Index 0 (the
//! network address) and the last index (broadcast) are never handed out, so the
//! usable indexes are `1..=max_pod_index`.

use std::net::Ipv4Addr;

use netcarve_common::error::ComputeError;
use netcarve_common::network::cidr;
use pnet::ipnetwork::Ipv4Network;
use tracing::debug;

/// Inclusive run of pod indexes covered by one exclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExcludeRange {
    pub min_index: u64,
    pub max_index: u64,
}

impl ExcludeRange {
    pub fn contains(&self, index: u64) -> bool {
        index >= self.min_index && index <= self.max_index
    }
}

/// Highest index that may be handed out: `2^host_bits - 2`, or 0 when the block
/// has no room besides its network and broadcast addresses.
pub fn max_pod_index(pod: &Ipv4Network) -> u64 {
    (1u64 << cidr::host_bits(pod)).saturating_sub(2)
}

/// Translates exclusion CIDRs into index runs relative to `pod`.
///
/// A bare address counts as a `/32`. Exclusions that end before the pod block are
/// dropped; one that starts before it is clipped at index 0. Malformed entries are
/// skipped.
pub fn exclude_index_ranges<S: AsRef<str>>(
    pod: &Ipv4Network,
    excludes: &[S],
) -> Vec<ExcludeRange> {
    let base: u64 = u64::from(u32::from(pod.network()));

    excludes
        .iter()
        .filter_map(|exclude| {
            let exclude: &str = exclude.as_ref().trim();
            let network: Ipv4Network = match exclude.parse() {
                Ok(network) => network,
                Err(e) => {
                    debug!("Skipping exclusion '{exclude}': {e}");
                    return None;
                }
            };

            let start: u64 = u64::from(u32::from(network.network()));
            let end: u64 = u64::from(u32::from(network.broadcast()));
            if end < base {
                debug!("Exclusion {network} lies below pod block {pod}");
                return None;
            }
            Some(ExcludeRange {
                min_index: start.saturating_sub(base),
                max_index: end - base,
            })
        })
        .collect()
}

/// Builds the occupancy table for the free-index finder: live allocations plus
/// every excluded index up to `max_index`, ascending and duplicate-free.
///
/// Index 0 is left out; searches over the table start at offset 1.
pub fn allocation_indexes(
    allocated: &[u32],
    max_index: u64,
    excludes: &[ExcludeRange],
) -> Vec<u32> {
    let mut indexes: Vec<u32> = allocated.to_vec();
    for range in excludes {
        let last: u64 = range.max_index.min(max_index);
        indexes.extend((range.min_index..=last).filter_map(|index| u32::try_from(index).ok()));
    }

    indexes.retain(|&index| index != 0);
    indexes.sort_unstable();
    indexes.dedup();
    indexes
}

/// Address of the `index`-th host of `pod`.
pub fn address_by_index(pod: &Ipv4Network, index: u32) -> Result<Ipv4Addr, ComputeError> {
    let max: u64 = max_pod_index(pod);
    let last: u64 = max + 1;

    if index == 0 || u64::from(index) == last {
        return Err(ComputeError::ReservedIndex { index });
    }
    if u64::from(index) > last {
        return Err(ComputeError::OutOfRange { max, index });
    }
    Ok(Ipv4Addr::from(u32::from(pod.network()) + index))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
