use anyhow::Context;
use colored::*;
use netcarve_common::config::{Config, PoolConfig};
use netcarve_common::network::cidr;
use netcarve_core::{allocator, exclusion};
use pnet::ipnetwork::Ipv4Network;
use tracing::warn;

use crate::terminal::{network_fmt, print};

/// Carves the interface subnet of a pool, then the node subnet inside it.
pub fn layers(
    pool: &PoolConfig,
    interface_index: u32,
    host_index: u32,
    cfg: &Config,
) -> anyhow::Result<()> {
    let network: Ipv4Network = pool
        .validate()
        .with_context(|| format!("Invalid pool '{}'", pool.subnet))?;

    let interface: Ipv4Network =
        allocator::carve_network(&network, interface_index, pool.interface_block)
            .with_context(|| format!("Cannot place interface index {interface_index}"))?;
    if let Some(range) = exclusion::find_exclusion_in(
        &network,
        interface_index,
        pool.interface_block,
        &pool.exclude_cidrs,
    ) {
        warn!("Interface subnet {interface} lies in excluded range {range}");
    }

    let node: Ipv4Network = allocator::carve_network(&interface, host_index, pool.host_block)
        .with_context(|| format!("Cannot place host index {host_index}"))?;
    if let Some(range) =
        exclusion::find_exclusion_in(&interface, host_index, pool.host_block, &pool.exclude_cidrs)
    {
        warn!("Node subnet {node} lies in excluded range {range}");
    }

    print::header("subnet layers", cfg.quiet);
    print::as_tree_one_level(&[
        ("Pool", network_fmt::network_to_colored(&network)),
        ("Iface", network_fmt::network_to_colored(&interface)),
        ("Node", network_fmt::network_to_colored(&node)),
        (
            "Pods",
            network_fmt::range_to_colored(&cidr::cidr_range(&node)),
        ),
        (
            "Limits",
            format!(
                "{} interfaces, {} nodes per interface",
                pool.max_interface_index() + 1,
                pool.max_host_index() + 1
            )
            .normal(),
        ),
    ]);
    Ok(())
}
