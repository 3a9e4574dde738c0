//! Fixed-width helpers for masks and byte groups.

use std::net::Ipv4Addr;

pub const BYTE_SIZE: u32 = 8;

/// Byte with its `bits` most significant positions set, e.g. `4 -> 0b1111_0000`.
pub fn prefix_byte(bits: u32) -> u8 {
    !u8::MAX.checked_shr(bits).unwrap_or(0)
}

/// Renders `n` as the minimal big-endian sequence of bytes.
///
/// Zero renders as a single zero byte.
pub fn to_bits(n: u64) -> Vec<u8> {
    let bytes: [u8; 8] = n.to_be_bytes();
    let first: usize = bytes
        .iter()
        .position(|byte| *byte != 0)
        .unwrap_or(bytes.len() - 1);
    bytes[first..].to_vec()
}

/// Extends a mask by `extra_bits` positions.
///
/// All-ones bytes are network-owned and copied as-is. The first byte with free
/// positions takes as many of the extra bits as it can hold and the rest carry
/// into the following bytes. Bits beyond the 32-bit width are dropped, so the
/// result saturates at `255.255.255.255`.
pub fn extend_mask(mask: Ipv4Addr, extra_bits: u32) -> Ipv4Addr {
    let mut remain: u32 = extra_bits;
    let mut output: [u8; 4] = mask.octets();

    for byte in output.iter_mut() {
        if *byte == u8::MAX || remain == 0 {
            continue;
        }
        let set: u32 = byte.leading_ones();
        let take: u32 = remain.min(BYTE_SIZE - set);
        *byte = prefix_byte(set + take);
        remain -= take;
    }

    Ipv4Addr::from(output)
}

/// Clears every bit of `addr` outside `mask`.
pub fn apply_mask(addr: Ipv4Addr, mask: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & u32::from(mask))
}

/// Number of positions left free by `mask`.
pub fn free_bits(mask: Ipv4Addr) -> u32 {
    mask.octets()
        .iter()
        .map(|byte| BYTE_SIZE - byte.leading_ones())
        .sum()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
