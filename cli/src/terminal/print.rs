use std::{cell::Cell, fmt::Display};

use crate::terminal::colors;
use colored::*;
use seedscan_common::log::PRINT_TARGET;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

thread_local! {
    pub static GLOBAL_KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

#[macro_export]
macro_rules! sprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// Centers `title` in a [`TOTAL_WIDTH`] line of `fill`. An empty title gives a plain rule.
fn framed(fill: &str, title: ColoredString) -> String {
    let title_width: usize = UnicodeWidthStr::width(&*title);
    let pad: usize = TOTAL_WIDTH.saturating_sub(title_width);
    let left: ColoredString = fill.repeat(pad / 2).color(colors::SEPARATOR);
    let right: ColoredString = fill.repeat(pad - pad / 2).color(colors::SEPARATOR);
    format!("{left}{title}{right}")
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }
    let title = format!("⟦ SEEDSCAN v{} ⟧", env!("CARGO_PKG_VERSION"));
    print(&framed("═", title.bright_green().bold()));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    let title = format!("⟦ {} ⟧", msg.to_uppercase());
    print(&framed("─", title.color(colors::PRIMARY)));
}

pub fn fat_separator() {
    print(&framed("═", "".normal()));
}

/// Sets the key column width used by [`aligned_line`].
pub fn set_key_width<'a>(keys: impl IntoIterator<Item = &'a str>) {
    let width: usize = keys.into_iter().map(str::len).max().unwrap_or(0);
    GLOBAL_KEY_WIDTH.set(width);
}

/// Prints `> key....: value`, padding keys to the width set by [`set_key_width`].
pub fn aligned_line<V>(key: &str, value: V)
where
    V: Display + WithDefaultColor,
{
    let dots: String = ".".repeat((GLOBAL_KEY_WIDTH.get() + 1).saturating_sub(key.len()));
    print(&format!(
        "{} {}{}{} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value.with_default(colors::TEXT_DEFAULT)
    ));
}

/// Prints `[idx] value` lines, numbering from 1.
pub fn numbered_list(items: Vec<ColoredString>) {
    let idx_width: usize = items.len().to_string().len();
    for (idx, item) in items.iter().enumerate() {
        let number: String = format!("{:>width$}", idx + 1, width = idx_width);
        print(&format!(
            "{}{}{} {}",
            "[".color(colors::SEPARATOR),
            number.color(colors::ACCENT),
            "]".color(colors::SEPARATOR),
            item
        ));
    }
}

/// Indents `msg` to the middle of the line. ANSI codes in `msg` are kept and not counted.
pub fn centered(msg: &str) -> String {
    let indent: usize = TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2;
    format!("{:indent$}{msg}", "")
}

pub fn centerln(msg: &str) {
    print(&centered(msg));
}

const NO_RESULTS_0: &str = r#"
        _   _  ___    ____  _____ _____ ____  ____
       | \ | |/ _ \  |  _ \| ____| ____|  _ \/ ___|
       |  \| | | | | | |_) |  _| |  _| | |_) \___ \
       | |\  | |_| | |  __/| |___| |___|  _ < ___) |
       |_| \_|\___/  |_|   |_____|_____|_| \_\____/
"#;

pub fn no_results(q_level: u8) {
    if q_level > 1 {
        return;
    }
    print(&format!("{}", NO_RESULTS_0.red().bold()));
}

pub fn end_of_program(q_level: u8) {
    if q_level == 0 {
        fat_separator();
    }
}
