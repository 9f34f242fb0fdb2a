//! Terminal output primitives for the metacontent CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Color palette
pub mod colors {
    use console::Color;

    pub const CYAN: Color = Color::Color256(51);
    pub const AMBER: Color = Color::Color256(214);
    pub const NEON_GREEN: Color = Color::Color256(82);
    pub const DIM: Color = Color::Color256(240);
}

/// Status symbols
pub mod symbols {
    pub const DIAMOND: &str = "\u{25C6}";          // ◆
    pub const DIAMOND_OUTLINE: &str = "\u{25C7}";  // ◇
    pub const TARGET_FILLED: &str = "\u{25C9}";    // ◉
    pub const TRIANGLE: &str = "\u{25B8}";         // ▸
}

const BOX_WIDTH: usize = 55;

/// Print a success message
pub fn success(msg: &str) {
    println!(
        "  {} {}",
        style(symbols::TARGET_FILLED).fg(colors::NEON_GREEN),
        msg
    );
}

/// Print a warning that does not fail the run
pub fn warning(msg: &str) {
    println!(
        "  {} {}",
        style(symbols::DIAMOND).fg(colors::AMBER),
        style(msg).fg(colors::AMBER)
    );
}

/// Print a dim/secondary message
pub fn dim(msg: &str) {
    println!("  {}", style(msg).fg(colors::DIM));
}

/// Create a spinner for the generation step
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner()
        .tick_chars("\u{25CE}\u{25C9}\u{25CE}\u{25C9}") // ◎◉◎◉
        .template("  {spinner:.cyan} {msg}")
    {
        pb.set_style(spinner_style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(150));
    pb
}

/// Print a box header
pub fn box_header(title: &str) {
    let title_padded = format!(" {} ", title);
    let dashes = BOX_WIDTH.saturating_sub(title_padded.chars().count() + 3);

    println!(
        "  {}{}{}{}",
        style("\u{256D}\u{2500}").fg(colors::CYAN), // ╭─
        style(title_padded).fg(colors::CYAN).bold(),
        style("\u{2500}".repeat(dashes)).fg(colors::CYAN),
        style("\u{256E}").fg(colors::CYAN) // ╮
    );
}

/// Print a box line
pub fn box_line(content: &str) {
    println!(
        "  {} {}{}",
        style("\u{2502}").fg(colors::CYAN), // │
        pad_to(content, BOX_WIDTH - 3),
        style("\u{2502}").fg(colors::CYAN)
    );
}

/// Print a box footer
pub fn box_footer() {
    println!(
        "  {}{}{}",
        style("\u{2570}").fg(colors::CYAN), // ╰
        style("\u{2500}".repeat(BOX_WIDTH - 2)).fg(colors::CYAN),
        style("\u{256F}").fg(colors::CYAN) // ╯
    );
}

/// Print one discovered content module inside the summary box
pub fn unit_line(index: usize, name: &str) {
    box_line(&format!(" {} {:>2}  Mdl{} / Msg{}", symbols::TRIANGLE, index + 1, name, name));
}

/// Print timing information
pub fn timing(label: &str, duration_ms: u128) {
    println!(
        "  {} {} in {}ms",
        style(symbols::DIAMOND_OUTLINE).fg(colors::CYAN),
        label,
        duration_ms
    );
}

/// Right-pads `content` with spaces to `width` characters.
fn pad_to(content: &str, width: usize) -> String {
    let len = content.chars().count();
    format!("{}{}", content, " ".repeat(width.saturating_sub(len)))
}
