use colored::*;
use netcarve_common::config::Config;
use netcarve_core::free_index;

use crate::commands::sorted_unique;
use crate::terminal::{colors, print};

pub fn free(
    used: Vec<u32>,
    window_start: u32,
    search_offset: u32,
    cfg: &Config,
) -> anyhow::Result<()> {
    let used: Vec<u32> = sorted_unique(used);

    print::header("free index", cfg.quiet);
    print::aligned_line("Used", format!("{} indexes", used.len()).color(colors::TEXT_DEFAULT));

    match free_index::find_free_index(&used, window_start, search_offset) {
        Some(index) => print::aligned_line("Free index", index.to_string().green().bold()),
        None => print::aligned_line("Free index", "none, the window is full".red()),
    }
    Ok(())
}
