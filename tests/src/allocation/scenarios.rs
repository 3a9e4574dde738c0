#![cfg(test)]
use std::net::Ipv4Addr;

use netcarve_common::config::PoolConfig;
use netcarve_common::network::address;
use netcarve_common::network::cidr;
use netcarve_core::{allocator, bits, exclusion, free_index, index, pod};
use pnet::ipnetwork::Ipv4Network;

#[test]
fn documented_examples() -> anyhow::Result<()> {
    let mask_24: Ipv4Addr = Ipv4Addr::new(255, 255, 255, 0);
    assert_eq!(bits::extend_mask(mask_24, 4), Ipv4Addr::new(255, 255, 255, 240));
    assert_eq!(bits::extend_mask(mask_24, 8), Ipv4Addr::new(255, 255, 255, 255));

    let addr: Ipv4Addr = allocator::compute_net("10.0.0.0/24", 1, 4)?;
    assert_eq!(addr, Ipv4Addr::new(10, 0, 0, 16));
    assert_eq!(allocator::format_subnet(addr, "10.0.0.0/24", 4)?, "10.0.0.16/28");

    let excludes: [&str; 1] = ["10.0.0.16/28"];
    assert!(exclusion::is_excluded("10.0.0.0/24", 1, 4, &excludes));
    assert!(!exclusion::is_excluded("10.0.0.0/24", 2, 4, &excludes));

    assert_eq!(free_index::find_free_index(&[0, 1, 2, 4, 5], 0, 0), Some(3));
    assert_eq!(free_index::find_free_index(&[0, 1, 2, 3], 0, 0), None);
    Ok(())
}

/// Walks a pool the way a controller does: interface subnets first, node subnets
/// inside each, skipping excluded ranges and reusing released indexes.
#[test]
fn pool_with_interfaces_nodes_and_exclusions() -> anyhow::Result<()> {
    let pool = PoolConfig {
        subnet: "192.168.0.0/16".to_string(),
        interface_block: 2,
        host_block: 6,
        exclude_cidrs: vec!["192.168.64.0/24".to_string(), "garbage".to_string()],
    };
    let network: Ipv4Network = pool.validate()?;

    let interfaces: Vec<String> = (0..=pool.max_interface_index() as u32)
        .map(|i| allocator::carve(&pool.subnet, i, pool.interface_block))
        .collect::<Result<_, _>>()?;
    assert_eq!(
        interfaces,
        vec![
            "192.168.0.0/18",
            "192.168.64.0/18",
            "192.168.128.0/18",
            "192.168.192.0/18"
        ]
    );

    // The /24 exclusion is finer than an interface subnet, so it never hides one.
    for i in 0..=pool.max_interface_index() as u32 {
        assert!(!exclusion::is_excluded(
            &pool.subnet,
            i,
            pool.interface_block,
            &pool.exclude_cidrs
        ));
    }

    let interface: Ipv4Network = allocator::carve_network(&network, 1, pool.interface_block)?;
    let interface_text: String = cidr::format_cidr(interface.ip(), interface.prefix());

    // Node 0 of the second interface is exactly the excluded /24.
    assert!(exclusion::is_excluded(&interface_text, 0, pool.host_block, &pool.exclude_cidrs));
    assert!(!exclusion::is_excluded(&interface_text, 1, pool.host_block, &pool.exclude_cidrs));

    // Nodes 1, 2 and 4 are live; node 3 was released.
    let used: Vec<u32> = vec![0, 1, 2, 4];
    let next: u32 = free_index::find_free_index(&used, 0, 0).expect("gap at 3");
    assert_eq!(next, 3);

    let node: Ipv4Network = allocator::carve_network(&interface, next, pool.host_block)?;
    assert_eq!(node.to_string(), "192.168.67.0/24");
    assert_eq!(pool.node_prefix(&network), u32::from(node.prefix()));

    // A pod address maps back to its index inside the node subnet.
    let pod_cidr: String = cidr::format_cidr(node.ip(), node.prefix());
    assert_eq!(
        index::index_in_range(&pod_cidr, Ipv4Addr::new(192, 168, 67, 42))?,
        Some(42)
    );
    assert_eq!(
        index::index_in_range(&pod_cidr, Ipv4Addr::new(192, 168, 68, 1))?,
        None
    );
    Ok(())
}

/// Pod addresses inside a node subnet: the gateway host is excluded, a few pods are
/// live, and the block is then filled up to the address before broadcast.
#[test]
fn pod_addresses_inside_node_subnet() -> anyhow::Result<()> {
    let node: Ipv4Network = allocator::carve_network(&cidr::parse_cidr("10.8.0.0/16")?, 3, 12)?;
    assert_eq!(node.to_string(), "10.8.0.48/28");

    let excludes: [&str; 1] = ["10.8.0.49"];
    let max_index: u64 = pod::max_pod_index(&node);
    assert_eq!(max_index, 14);

    let ranges: Vec<pod::ExcludeRange> = pod::exclude_index_ranges(&node, &excludes);
    let mut allocated: Vec<u32> = vec![2, 3];
    let mut handed_out: Vec<Ipv4Addr> = Vec::new();

    loop {
        let indexes: Vec<u32> = pod::allocation_indexes(&allocated, max_index, &ranges);
        let next: u64 = indexes.last().map_or(1, |&last| u64::from(last) + 1);
        let index: u32 = if next <= max_index {
            next as u32
        } else {
            match free_index::find_free_index(&indexes, 0, 1) {
                Some(index) if u64::from(index) <= max_index => index,
                _ => break,
            }
        };
        handed_out.push(pod::address_by_index(&node, index)?);
        allocated.push(index);
    }

    assert_eq!(handed_out.len(), 11);
    assert_eq!(handed_out.first(), Some(&Ipv4Addr::new(10, 8, 0, 52)));
    assert_eq!(handed_out.last(), Some(&Ipv4Addr::new(10, 8, 0, 62)));
    assert!(!handed_out.contains(&node.network()));
    assert!(!handed_out.contains(&node.broadcast()));
    assert!(!handed_out.contains(&Ipv4Addr::new(10, 8, 0, 49)));
    Ok(())
}

#[test]
fn exclusions_sort_numerically() {
    let excludes: Vec<String> = vec![
        "192.168.64.0/24".to_string(),
        "10.0.0.0/8".to_string(),
        "192.168.1.0/24".to_string(),
    ];
    let sorted: Vec<String> = address::sort_addresses(&excludes)
        .into_iter()
        .map(|ip_value| ip_value.address)
        .collect();
    assert_eq!(sorted, vec!["10.0.0.0/8", "192.168.1.0/24", "192.168.64.0/24"]);
}

#[test]
fn malformed_parent_errors_pass_through() {
    let err = allocator::compute_net("192.168.0.0", 0, 2).unwrap_err();
    assert!(!err.is_invalid_request());
    assert!(allocator::carve("300.0.0.0/8", 0, 2).is_err());
}
