use std::num::TryFromIntError;

use pnet::ipnetwork::IpNetworkError;
use thiserror::Error;

/// Errors returned by the subnet arithmetic.
///
/// Validation failures render with an `InvalidRequest:` prefix so callers that only
/// see the message can still tell them apart from malformed input, which is passed
/// through untouched.
#[derive(Debug, Error)]
pub enum ComputeError {
    /// The CIDR text could not be parsed.
    #[error(transparent)]
    Parse(#[from] IpNetworkError),
    /// The index does not fit in the block.
    #[error("InvalidRequest: index {index} exceeds the largest index {max} of the block")]
    OutOfRange { max: u64, index: u32 },
    /// The block needs more bits than the parent leaves for hosts.
    #[error("InvalidRequest: block of {block} bits exceeds the {available} host bits available")]
    BlockTooLarge { block: u32, available: u32 },
    /// Index 0 and the last index of a pod block are its network and broadcast
    /// addresses.
    #[error("InvalidRequest: index {index} is the network or broadcast address")]
    ReservedIndex { index: u32 },
    /// The composed address left the parent network.
    #[error("InvalidRequest: out of mask")]
    OutOfMask,
    #[error(transparent)]
    Conversion(#[from] TryFromIntError),
}

impl ComputeError {
    /// Returns true for errors raised by request validation rather than propagated
    /// from parsing or conversion.
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            ComputeError::OutOfRange { .. }
                | ComputeError::BlockTooLarge { .. }
                | ComputeError::ReservedIndex { .. }
                | ComputeError::OutOfMask
        )
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
