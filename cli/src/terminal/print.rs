use std::fmt::Display;
use std::time::Duration;

use cepr_common::address::Address;
use colored::*;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 48;

/// Widest result key ("Serviço") plus one trailing dot.
const KEY_WIDTH: usize = 8;

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
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

pub fn header(msg: &str, quiet: bool) {
    if quiet {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    println!("{}", line);
}

/// The four result lines: code, city, state and the service that won.
pub fn address(address: &Address) {
    aligned_line("CEP", address.cep.as_str());
    aligned_line("Cidade", address.city.as_str());
    aligned_line("Estado", address.state.as_str());
    aligned_line("Serviço", address.service.to_string().color(colors::ACCENT));
}

pub fn aligned_line<V>(key: &str, value: V)
where
    V: Display + WithDefaultColor,
{
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.chars().count()));
    let colon: String = format!(
        "{}{}",
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    print_status(format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    println!("{} {}", prefix, msg.as_ref());
}

pub fn timeout() {
    println!("{}", "Timeout".red().bold());
}

pub fn summary(total_time: Duration, quiet: bool) {
    if quiet {
        return;
    }

    let elapsed: ColoredString = format!("{:.0}ms", total_time.as_secs_f64() * 1000.0)
        .bold()
        .yellow();
    let line: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();

    println!("{}", line);
    println!("{}", format!("Resolved in {elapsed}").color(colors::TEXT_DEFAULT));
}
