use colored::Colorize;

/// Presentation styles for console output. Business logic never formats
/// text itself; it hands a style and a message to `say`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Style {
    Plain,
    Info,
    Success,
    Warn,
    Error,
    Emphasis,
}

/// Print a message in the given style. Errors go to stderr.
pub fn say(style: Style, text: &str) {
    match style {
        Style::Plain => println!("{text}"),
        Style::Info => println!("{}", text.yellow()),
        Style::Success => println!("{}", text.green()),
        Style::Warn => eprintln!("{}", text.yellow().bold()),
        Style::Error => eprintln!("{}", text.red()),
        Style::Emphasis => println!("{}", text.bold()),
    }
}

pub const GREETING: &str = "\
WELCOME to the SmoothStreamsTV playlist generator!

This program will generate an .m3u8 playlist file with all available channels
for the SmoothStreamsTV IPTV provider, playable in media players and browsers.
Please note: channel names/numbers are sourced from SmoothStreamsTV,
and current as of March 15, 2017.";

pub fn banner() {
    say(Style::Emphasis, GREETING);
}
