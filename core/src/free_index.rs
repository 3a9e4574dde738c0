//! Lowest-free-index lookup in a caller-owned allocation table.

/// Finds the lowest unused index in the window starting at
/// `window_start + search_offset`.
///
/// `used` must be ascending and duplicate-free; it describes the occupancy of the
/// window `[base, base + used.len()]` where `base = window_start + search_offset`.
///
/// * `None` when the last used index is `base + used.len() - 1`, i.e. the window
///   is packed with no room left.
/// * `Some(base)` when the first used index is not `base`, or when nothing is used.
/// * Otherwise the first index missing from the run that starts at `base`.
///
/// Indexes are `u32`, so a window whose first index would lie past `u32::MAX`
/// has no free index and yields `None`, the same as a packed window.
pub fn find_free_index(used: &[u32], window_start: u32, search_offset: u32) -> Option<u32> {
    let base: u64 = u64::from(window_start) + u64::from(search_offset);

    let (Some(&first), Some(&last)) = (used.first(), used.last()) else {
        return u32::try_from(base).ok();
    };

    if u64::from(last) == base + used.len() as u64 - 1 {
        return None;
    }
    if u64::from(first) != base {
        return u32::try_from(base).ok();
    }

    // used[i] - i never decreases, so the run matching base + i is a prefix.
    let (mut low, mut high): (usize, usize) = (0, used.len());
    while low < high {
        let mid: usize = low + (high - low) / 2;
        if u64::from(used[mid]) == base + mid as u64 {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    u32::try_from(base + low as u64).ok()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
