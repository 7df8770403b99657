//! Host event scripts
//!
//! A line-oriented description of what a host environment does to a header,
//! used to replay scenarios outside a browser:
//!
//! ```text
//! # hero, then scroll past the fold
//! scroll 0
//! scroll 120
//! toggle
//! route /about
//! follow /contact
//! pump
//! unmount
//! ```

use crate::error::{CoreError, Result};
use navhead_types::RouteId;
use std::fmt;

/// One host action
#[derive(Debug, Clone, PartialEq)]
pub enum HostStep {
    /// Viewport reports a scroll offset (px)
    Scroll(f64),
    /// User presses the menu toggle
    Toggle,
    /// Presentation layer closes the menu
    Close,
    /// Router reports a completed navigation
    Route(RouteId),
    /// User activates a header link to the given path
    Follow(String),
    /// Deliver queued host events
    Pump,
    /// Header is torn down
    Unmount,
}

impl fmt::Display for HostStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostStep::Scroll(offset) => write!(f, "scroll {}", offset),
            HostStep::Toggle => f.write_str("toggle"),
            HostStep::Close => f.write_str("close"),
            HostStep::Route(route) => write!(f, "route {}", route),
            HostStep::Follow(path) => write!(f, "follow {}", path),
            HostStep::Pump => f.write_str("pump"),
            HostStep::Unmount => f.write_str("unmount"),
        }
    }
}

/// Parse a script. Blank lines and `#` comments are skipped.
pub fn parse_script(input: &str) -> Result<Vec<HostStep>> {
    input
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line = strip_comment(line).trim();
            if line.is_empty() {
                None
            } else {
                Some(parse_step(line).map_err(|message| CoreError::ScriptParse {
                    line_number: index + 1,
                    message,
                }))
            }
        })
        .collect()
}

/// `#` opens a comment only at line start or after whitespace, so paths
/// like `/docs#faq` keep their fragment.
fn strip_comment(line: &str) -> &str {
    let mut previous = None;
    for (index, ch) in line.char_indices() {
        if ch == '#' && previous.map_or(true, char::is_whitespace) {
            return &line[..index];
        }
        previous = Some(ch);
    }
    line
}

fn parse_step(line: &str) -> std::result::Result<HostStep, String> {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or("");
    let argument = parts.next();
    if let Some(extra) = parts.next() {
        return Err(format!("unexpected argument '{}'", extra));
    }

    match (command.to_lowercase().as_str(), argument) {
        ("scroll", Some(value)) => value
            .parse::<f64>()
            .map(HostStep::Scroll)
            .map_err(|_| format!("invalid scroll offset '{}'", value)),
        ("route", Some(path)) => Ok(HostStep::Route(RouteId::from(path))),
        ("follow", Some(path)) => Ok(HostStep::Follow(path.to_string())),
        ("toggle", None) => Ok(HostStep::Toggle),
        ("close", None) => Ok(HostStep::Close),
        ("pump", None) => Ok(HostStep::Pump),
        ("unmount", None) => Ok(HostStep::Unmount),
        ("scroll" | "route" | "follow", None) => Err(format!("'{}' needs an argument", command)),
        ("toggle" | "close" | "pump" | "unmount", Some(arg)) => {
            Err(format!("'{}' takes no argument (got '{}')", command, arg))
        }
        _ => Err(format!("unknown step '{}'", command)),
    }
}
