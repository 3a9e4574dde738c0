pub mod allocate;
pub mod excluded;
pub mod free;
pub mod index;
pub mod layers;
pub mod mask;
pub mod net;
pub mod sort;

use std::net::Ipv4Addr;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "netcarve")]
#[command(about = "Deterministic IPv4 subnet carving for IPAM plugins.")]
pub struct CommandLine {
    /// Reduce output (-q hides headers, -qq prints results only)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extend the mask of a CIDR block by extra bits
    #[command(alias = "m")]
    Mask {
        cidr: String,
        /// Bits to add to the prefix
        #[arg(short = 'x', long)]
        bits: u8,
    },
    /// Compute the index-th child subnet of a CIDR block
    #[command(alias = "n")]
    Net {
        cidr: String,
        #[arg(short, long)]
        index: u32,
        /// Bits consumed by this subdivision layer
        #[arg(short, long)]
        block: u8,
    },
    /// Carve an interface subnet and a node subnet out of a pool
    #[command(alias = "l")]
    Layers {
        subnet: String,
        #[arg(long)]
        interface_block: u8,
        #[arg(long)]
        host_block: u8,
        #[arg(long, default_value_t = 0)]
        interface_index: u32,
        #[arg(long, default_value_t = 0)]
        host_index: u32,
        /// Comma-separated CIDR blocks that must not be handed out
        #[arg(short, long, value_delimiter = ',')]
        exclude: Vec<String>,
    },
    /// Check whether a child subnet falls in an excluded range
    #[command(alias = "e")]
    Excluded {
        cidr: String,
        #[arg(short, long)]
        index: u32,
        #[arg(short, long)]
        block: u8,
        #[arg(short, long, value_delimiter = ',')]
        exclude: Vec<String>,
    },
    /// Find the lowest free index in an allocation table
    #[command(alias = "f")]
    Free {
        /// Comma-separated indexes already in use
        #[arg(value_delimiter = ',')]
        used: Vec<u32>,
        #[arg(long, default_value_t = 0)]
        start: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Pick the next usable child subnet, skipping used indexes and excluded ranges
    #[command(alias = "a")]
    Allocate {
        cidr: String,
        #[arg(short, long)]
        block: u8,
        #[arg(short, long, value_delimiter = ',')]
        used: Vec<u32>,
        #[arg(short, long, value_delimiter = ',')]
        exclude: Vec<String>,
    },
    /// Pick the next host address of a pod block, skipping network and broadcast
    #[command(alias = "p")]
    Pod {
        cidr: String,
        /// Comma-separated host indexes already allocated
        #[arg(short, long, value_delimiter = ',')]
        used: Vec<u32>,
        /// Comma-separated CIDR blocks or addresses that must not be handed out
        #[arg(short, long, value_delimiter = ',')]
        exclude: Vec<String>,
    },
    /// Locate an address inside a CIDR block
    #[command(alias = "i")]
    Index { cidr: String, address: Ipv4Addr },
    /// Sort addresses or CIDR blocks numerically
    #[command(alias = "s")]
    Sort { addresses: Vec<String> },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Allocation tables handed to the engine must be ascending and duplicate-free.
pub fn sorted_unique(mut indexes: Vec<u32>) -> Vec<u32> {
    indexes.sort_unstable();
    indexes.dedup();
    indexes
}
