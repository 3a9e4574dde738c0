mod commands;
mod terminal;

use commands::{
    CommandLine, Commands, allocate, excluded, free, index, layers, mask, net, sort,
};
use netcarve_common::config::{Config, PoolConfig};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    let cfg = Config {
        quiet: commands.quiet,
    };

    let result: anyhow::Result<()> = match commands.command {
        Commands::Mask { cidr, bits } => mask::mask(&cidr, bits, &cfg),
        Commands::Net { cidr, index, block } => net::net(&cidr, index, block, &cfg),
        Commands::Layers {
            subnet,
            interface_block,
            host_block,
            interface_index,
            host_index,
            exclude,
        } => {
            let pool = PoolConfig {
                subnet,
                interface_block,
                host_block,
                exclude_cidrs: exclude,
            };
            layers::layers(&pool, interface_index, host_index, &cfg)
        }
        Commands::Excluded {
            cidr,
            index,
            block,
            exclude,
        } => excluded::excluded(&cidr, index, block, &exclude, &cfg),
        Commands::Free {
            used,
            start,
            offset,
        } => free::free(used, start, offset, &cfg),
        Commands::Allocate {
            cidr,
            block,
            used,
            exclude,
        } => allocate::allocate(&cidr, block, used, &exclude, &cfg),
        Commands::Pod {
            cidr,
            used,
            exclude,
        } => allocate::pod_address(&cidr, used, &exclude, &cfg),
        Commands::Index { cidr, address } => index::index(&cidr, address, &cfg),
        Commands::Sort { addresses } => sort::sort(&addresses, &cfg),
    };

    print::fat_separator(cfg.quiet);
    result
}
