//! Caller-side allocation policy.
//!
//! The engine only answers single questions; deciding which index to try next and
//! when to give up lives here.

use std::net::Ipv4Addr;

use anyhow::{Context, bail};
use colored::*;
use netcarve_common::{config::Config, network::cidr};
use netcarve_core::{allocator, exclusion, free_index, pod};
use pnet::ipnetwork::Ipv4Network;
use tracing::{debug, info};

use crate::commands::sorted_unique;
use crate::terminal::{colors, print};

pub fn allocate(
    cidr_text: &str,
    block: u8,
    used: Vec<u32>,
    excludes: &[String],
    cfg: &Config,
) -> anyhow::Result<()> {
    let (index, subnet) = next_subnet(cidr_text, block, used, excludes)?;
    info!("Assigned index {index} of {cidr_text}");

    print::header("allocation", cfg.quiet);
    print::aligned_line("Index", index.to_string().color(colors::ACCENT).bold());
    print::aligned_line("Subnet", subnet.color(colors::IPV4_ADDR).bold());
    Ok(())
}

pub fn pod_address(
    pod_cidr: &str,
    allocated: Vec<u32>,
    excludes: &[String],
    cfg: &Config,
) -> anyhow::Result<()> {
    let (index, address) = next_pod_address(pod_cidr, allocated, excludes)?;
    info!("Assigned {address} (index {index}) in {pod_cidr}");

    print::header("pod address", cfg.quiet);
    print::aligned_line("Index", index.to_string().color(colors::ACCENT).bold());
    print::aligned_line("Address", address.to_string().color(colors::IPV4_ADDR).bold());
    Ok(())
}

/// Picks the next host address of a pod block.
///
/// Continues one past the highest taken index (allocated or excluded) and falls
/// back to the lowest gap above the network address once that reaches broadcast.
pub fn next_pod_address(
    pod_cidr: &str,
    allocated: Vec<u32>,
    excludes: &[String],
) -> anyhow::Result<(u32, Ipv4Addr)> {
    let network: Ipv4Network =
        cidr::parse_cidr(pod_cidr).with_context(|| format!("Invalid CIDR '{pod_cidr}'"))?;

    let max_index: u64 = pod::max_pod_index(&network);
    let ranges: Vec<pod::ExcludeRange> = pod::exclude_index_ranges(&network, excludes);
    let indexes: Vec<u32> = pod::allocation_indexes(&allocated, max_index, &ranges);
    debug!("Excluded runs {ranges:?}, taken indexes {indexes:?}");

    let next: u64 = indexes.last().map_or(1, |&last| u64::from(last) + 1);
    let index: u32 = if next <= max_index {
        u32::try_from(next)?
    } else {
        match free_index::find_free_index(&indexes, 0, 1) {
            Some(index) if u64::from(index) <= max_index => index,
            _ => bail!("No available address left in {pod_cidr}"),
        }
    };

    let address: Ipv4Addr = pod::address_by_index(&network, index)?;
    Ok((index, address))
}

/// Picks the next usable child of `cidr_text`.
///
/// Starts one past the highest used index and falls back to the lowest gap once
/// that runs past the block. Candidates that are excluded or cannot be placed are
/// marked used locally and the search continues.
pub fn next_subnet(
    cidr_text: &str,
    block: u8,
    used: Vec<u32>,
    excludes: &[String],
) -> anyhow::Result<(u32, String)> {
    let network: Ipv4Network =
        cidr::parse_cidr(cidr_text).with_context(|| format!("Invalid CIDR '{cidr_text}'"))?;
    let available: u32 = cidr::host_bits(&network);
    if u32::from(block) > available {
        bail!("Block of {block} bits does not fit in {cidr_text} ({available} host bits)");
    }

    let max_index: u64 = cidr::max_index(block);
    let mut used: Vec<u32> = sorted_unique(used);

    loop {
        let candidate: u32 = match used.last() {
            None => 0,
            Some(&last) if u64::from(last) < max_index => last + 1,
            Some(_) => match free_index::find_free_index(&used, 0, 0) {
                Some(index) if u64::from(index) <= max_index => index,
                _ => bail!("No available index left in {cidr_text} for a {block}-bit block"),
            },
        };

        match allocator::carve_network(&network, candidate, block) {
            Ok(child) => {
                match exclusion::find_exclusion_in(&network, candidate, block, excludes) {
                    None => {
                        return Ok((candidate, cidr::format_cidr(child.ip(), child.prefix())));
                    }
                    Some(range) => debug!("Index {candidate} ({child}) lies in excluded {range}"),
                }
            }
            Err(e) => debug!("Cannot assign index {candidate}: {e}"),
        }

        let position: usize = used.partition_point(|&index| index < candidate);
        used.insert(position, candidate);
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn first_allocation_is_index_zero() {
        let (index, subnet) = next_subnet("10.0.0.0/24", 4, vec![], &[]).unwrap();
        assert_eq!(index, 0);
        assert_eq!(subnet, "10.0.0.0/28");
    }

    #[test]
    fn continues_after_highest_used() {
        let (index, subnet) = next_subnet("10.0.0.0/24", 4, vec![0, 1, 3], &[]).unwrap();
        assert_eq!(index, 4);
        assert_eq!(subnet, "10.0.0.64/28");
    }

    #[test]
    fn reuses_gap_once_block_is_exhausted() {
        let used: Vec<u32> = vec![0, 1, 2, 4, 5, 6, 7];
        let (index, subnet) = next_subnet("10.0.0.0/24", 3, used, &[]).unwrap();
        assert_eq!(index, 3);
        assert_eq!(subnet, "10.0.0.96/27");
    }

    #[test]
    fn skips_excluded_candidates() {
        let excludes: Vec<String> = strings(&["10.0.0.0/27"]);
        let (index, subnet) = next_subnet("10.0.0.0/24", 4, vec![], &excludes).unwrap();
        assert_eq!(index, 2);
        assert_eq!(subnet, "10.0.0.32/28");
    }

    #[test]
    fn fails_when_everything_is_taken_or_excluded() {
        let excludes: Vec<String> = strings(&["10.0.0.2/31"]);
        let err = next_subnet("10.0.0.0/30", 1, vec![0], &excludes).unwrap_err();
        assert!(err.to_string().contains("No available index"));

        assert!(next_subnet("10.0.0.0/24", 2, vec![0, 1, 2, 3], &[]).is_err());
    }

    #[test]
    fn rejects_block_past_host_bits() {
        assert!(next_subnet("10.0.0.0/30", 3, vec![], &[]).is_err());
        assert!(next_subnet("10.0.0.0", 3, vec![], &[]).is_err());
    }

    #[test]
    fn first_pod_address_skips_network() {
        let (index, address) = next_pod_address("10.0.1.0/24", vec![], &[]).unwrap();
        assert_eq!(index, 1);
        assert_eq!(address, Ipv4Addr::new(10, 0, 1, 1));
    }

    #[test]
    fn pod_address_follows_highest_taken() {
        let excludes: Vec<String> = strings(&["10.0.1.8/30"]);
        let (index, address) = next_pod_address("10.0.1.0/24", vec![1, 2], &excludes).unwrap();
        assert_eq!(index, 12);
        assert_eq!(address, Ipv4Addr::new(10, 0, 1, 12));
    }

    #[test]
    fn pod_gap_reused_before_broadcast() {
        let (index, address) = next_pod_address("10.0.1.0/29", vec![1, 2, 4, 5, 6], &[]).unwrap();
        assert_eq!(index, 3);
        assert_eq!(address, Ipv4Addr::new(10, 0, 1, 3));
    }

    #[test]
    fn pod_exclusion_reaching_broadcast_forces_gap_search() {
        let excludes: Vec<String> = strings(&["10.0.1.4/30", "10.0.1.1"]);
        let (index, _) = next_pod_address("10.0.1.0/29", vec![3], &excludes).unwrap();
        assert_eq!(index, 2);
    }

    #[test]
    fn pod_block_full_is_an_error() {
        assert!(next_pod_address("10.0.1.0/30", vec![1, 2], &[]).is_err());
        assert!(next_pod_address("10.0.1.0/31", vec![], &[]).is_err());

        let excludes: Vec<String> = strings(&["10.0.1.0/29"]);
        let err = next_pod_address("10.0.1.0/29", vec![], &excludes).unwrap_err();
        assert!(err.to_string().contains("No available address"));
    }

    #[test]
    fn unsorted_input_is_normalised() {
        let (index, _) = next_subnet("10.0.0.0/24", 2, vec![3, 0, 0, 1], &[]).unwrap();
        assert_eq!(index, 2);
    }
}
