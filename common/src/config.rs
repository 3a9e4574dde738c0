use pnet::ipnetwork::Ipv4Network;

use crate::error::ComputeError;
use crate::network::cidr;

pub struct Config {
    /// Output reduction level.
    ///
    /// `1` hides section headers, `2` also hides everything but the results.
    pub quiet: u8,
}

/// Layout of an address pool split into per-interface and per-node subnets.
///
/// The interface layer takes `interface_block` bits below the pool prefix, the node
/// layer a further `host_block` bits, and whatever remains addresses pods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    pub subnet: String,
    pub interface_block: u8,
    pub host_block: u8,
    pub exclude_cidrs: Vec<String>,
}

impl PoolConfig {
    /// Parses the pool subnet and checks that both layers fit below its prefix.
    pub fn validate(&self) -> Result<Ipv4Network, ComputeError> {
        let network: Ipv4Network = cidr::parse_cidr(&self.subnet)?;
        let block: u32 = u32::from(self.interface_block) + u32::from(self.host_block);
        let available: u32 = cidr::host_bits(&network);

        if block > available {
            return Err(ComputeError::BlockTooLarge { block, available });
        }
        Ok(network)
    }

    /// Prefix length of the per-node subnets.
    pub fn node_prefix(&self, network: &Ipv4Network) -> u32 {
        u32::from(network.prefix()) + u32::from(self.interface_block) + u32::from(self.host_block)
    }

    pub fn max_interface_index(&self) -> u64 {
        cidr::max_index(self.interface_block)
    }

    pub fn max_host_index(&self) -> u64 {
        cidr::max_index(self.host_block)
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
