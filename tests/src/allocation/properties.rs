#![cfg(test)]
use std::collections::HashSet;
use std::net::Ipv4Addr;

use netcarve_common::error::ComputeError;
use netcarve_common::network::cidr;
use netcarve_core::{allocator, bits, free_index};
use pnet::ipnetwork::Ipv4Network;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ROUNDS: usize = 2_000;

/// Random canonical block with a layer that fits below it.
fn random_layer(rng: &mut StdRng) -> (String, u8, u8) {
    let prefix: u8 = rng.random_range(0..=32);
    let network: Ipv4Network = Ipv4Network::new(Ipv4Addr::from(rng.random::<u32>()), prefix)
        .expect("prefix is at most 32");
    let block: u8 = rng.random_range(0..=(32 - prefix));
    let base: String = cidr::format_cidr(network.network(), prefix);
    (base, prefix, block)
}

#[test]
fn child_stays_inside_parent() {
    let mut rng: StdRng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..ROUNDS {
        let (base, prefix, block) = random_layer(&mut rng);
        let index: u32 = rng.random_range(0..=cidr::max_index(block)) as u32;

        let addr: Ipv4Addr = allocator::compute_net(&base, index, block)
            .unwrap_or_else(|e| panic!("{base} block {block} index {index}: {e}"));

        let parent: Ipv4Network = cidr::parse_cidr(&base).unwrap();
        assert_eq!(
            bits::apply_mask(addr, parent.mask()),
            parent.network(),
            "{base} block {block} index {index} -> {addr}"
        );

        // The same placement as plain integer arithmetic.
        let shift: u32 = 32 - u32::from(prefix) - u32::from(block);
        let expected: u64 = u64::from(u32::from(parent.network())) + (u64::from(index) << shift);
        assert_eq!(u64::from(u32::from(addr)), expected);
    }
}

#[test]
fn distinct_indexes_never_collide() {
    let mut rng: StdRng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let (base, prefix, _) = random_layer(&mut rng);
        let block: u8 = rng.random_range(0..=(32 - prefix).min(8));

        let mut seen: HashSet<Ipv4Addr> = HashSet::new();
        for index in 0..=cidr::max_index(block) as u32 {
            let addr: Ipv4Addr = allocator::compute_net(&base, index, block).unwrap();
            assert!(seen.insert(addr), "{base} block {block}: {addr} repeated");
        }
    }
}

#[test]
fn index_one_past_block_is_out_of_range() {
    for block in 1..=8u8 {
        let index: u32 = 1 << block;
        let err: ComputeError = allocator::compute_net("10.0.0.0/16", index, block).unwrap_err();
        assert!(matches!(err, ComputeError::OutOfRange { .. }), "block {block}: {err}");
        assert!(err.is_invalid_request());
    }
}

#[test]
fn identical_inputs_identical_outputs() {
    let mut rng: StdRng = StdRng::seed_from_u64(7);

    for _ in 0..ROUNDS {
        let (base, _, block) = random_layer(&mut rng);
        let index: u32 = rng.random_range(0..=cidr::max_index(block)) as u32;

        let first: String = allocator::carve(&base, index, block).unwrap();
        let second: String = allocator::carve(&base, index, block).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn free_index_matches_linear_scan() {
    let mut rng: StdRng = StdRng::seed_from_u64(99);

    for _ in 0..ROUNDS {
        let used: Vec<u32> = (0..64u32).filter(|_| rng.random_bool(0.8)).collect();

        let expected: Option<u32> = if used.is_empty() {
            Some(0)
        } else {
            used.iter()
                .enumerate()
                .find(|&(i, &index)| index != i as u32)
                .map(|(i, _)| i as u32)
        };

        assert_eq!(free_index::find_free_index(&used, 0, 0), expected, "{used:?}");
    }
}
