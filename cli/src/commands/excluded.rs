use colored::*;
use netcarve_common::{config::Config, network::cidr};
use netcarve_core::{allocator, exclusion};

use crate::terminal::{colors, network_fmt, print};

pub fn excluded(
    cidr_text: &str,
    index: u32,
    block: u8,
    excludes: &[String],
    cfg: &Config,
) -> anyhow::Result<()> {
    // Surface placement errors here; the exclusion check itself only answers yes or no.
    let subnet: String = allocator::carve(cidr_text, index, block)?;

    print::header("exclusion check", cfg.quiet);
    print::aligned_line("Subnet", subnet.color(colors::IPV4_ADDR));

    match exclusion::find_exclusion(cidr_text, index, block, excludes) {
        Some(range) => {
            print::aligned_line("Excluded", "yes".red().bold());
            print::aligned_line("Range", network_fmt::network_to_colored(&range));
            print::aligned_line(
                "Covers",
                network_fmt::range_to_colored(&cidr::cidr_range(&range)),
            );
        }
        None => print::aligned_line("Excluded", "no".green().bold()),
    }
    Ok(())
}
