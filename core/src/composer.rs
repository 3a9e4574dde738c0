//! Places an index into the host portion of an address.

use std::net::Ipv4Addr;

use netcarve_common::error::ComputeError;
use netcarve_common::network::cidr;

use crate::bits::{self, BYTE_SIZE};

/// Adds the `index`-th offset of a `block`-bit layer to `base` under `mask`.
///
/// The index is written as `block` bits right below the positions `mask` owns. The
/// first partially free byte takes as many leading index bits as it has room for,
/// later bytes take the rest, and each group is added to the matching base byte.
///
/// # Errors
/// * [`ComputeError::OutOfRange`] if `index` does not fit in `block` bits.
/// * [`ComputeError::BlockTooLarge`] if `mask` leaves fewer than `block` free bits.
/// * [`ComputeError::OutOfMask`] if the result no longer lies in `base`'s network
///   under `mask`, which means the host portion overflowed into network bits.
pub fn add_offset(
    base: Ipv4Addr,
    mask: Ipv4Addr,
    block: u8,
    index: u32,
) -> Result<Ipv4Addr, ComputeError> {
    let max: u64 = cidr::max_index(block);
    if u64::from(index) > max {
        return Err(ComputeError::OutOfRange { max, index });
    }

    let available: u32 = bits::free_bits(mask);
    let mut remain: u32 = u32::from(block);
    if remain > available {
        return Err(ComputeError::BlockTooLarge {
            block: remain,
            available,
        });
    }

    let value: u64 = u64::from(index);
    let base_octets: [u8; 4] = base.octets();
    let mut output: [u8; 4] = base_octets;

    for (position, mask_byte) in mask.octets().into_iter().enumerate() {
        if mask_byte == u8::MAX || remain == 0 {
            continue;
        }
        let set: u32 = mask_byte.leading_ones();
        let take: u32 = remain.min(BYTE_SIZE - set);
        remain -= take;

        let group: u64 = (value >> remain) & ((1u64 << take) - 1);
        let chunk: u8 = u8::try_from(group << (BYTE_SIZE - set - take))?;

        output[position] = base_octets[position]
            .checked_add(chunk)
            .ok_or(ComputeError::OutOfMask)?;
    }

    let composed: Ipv4Addr = Ipv4Addr::from(output);
    if bits::apply_mask(composed, mask) != bits::apply_mask(base, mask) {
        return Err(ComputeError::OutOfMask);
    }

    Ok(composed)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
