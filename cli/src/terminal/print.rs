use crate::terminal::colors;
use crate::terminal::logging::PRINT_TARGET;
use colored::*;
use tracing::info;

pub const TOTAL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 12;
const TREE_KEY_WIDTH: usize = 7;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

/// A full-width rule of `fill` with `title` centred in it.
fn rule(fill: &str, title: Option<&str>) -> String {
    let Some(title) = title else {
        return fill.repeat(TOTAL_WIDTH).bright_black().to_string();
    };

    let label: String = format!("⟦ {} ⟧", title.to_uppercase());
    let side: usize = TOTAL_WIDTH.saturating_sub(label.chars().count());
    let left: String = fill.repeat(side / 2);
    let right: String = fill.repeat(side - side / 2);
    format!(
        "{}{}{}",
        left.bright_black(),
        label.bright_green(),
        right.bright_black()
    )
}

pub fn header(title: &str, q_level: u8) {
    if q_level == 0 {
        print(&rule("─", Some(title)));
    }
}

pub fn fat_separator(q_level: u8) {
    if q_level == 0 {
        print(&rule("═", None));
    }
}

/// `> Key.......: value`, with the key padded to a fixed column.
pub fn aligned_line(key: &str, value: ColoredString) {
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    print_status(&format!(
        "{}{}{} {}",
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    ));
}

fn print_status(msg: &str) {
    print(&format!("{} {}", ">".color(colors::SEPARATOR), msg));
}

/// One tree branch per entry; the last entry closes the tree.
pub fn as_tree_one_level(entries: &[(&str, ColoredString)]) {
    let Some((last, rest)) = entries.split_last() else {
        return;
    };
    let branches = rest
        .iter()
        .map(|entry| ("├─", entry))
        .chain(std::iter::once(("└─", last)));

    for (branch, (key, value)) in branches {
        let dots: String = ".".repeat(TREE_KEY_WIDTH.saturating_sub(key.len()));
        print(&format!(
            " {} {}{}{} {}",
            branch.bright_black(),
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}
