//! Typed adapters over [`read_line`] and [`run_select`].
//!
//! Each adapter loops until it gets a value it can hand back, re-printing a
//! short reason line after every rejected attempt. There is no retry cap;
//! cancellation (Ctrl-C / EOF) is the only way out of a stubborn prompt.

use std::fmt::Display;
use std::str::FromStr;

use colored::Colorize;

use crate::address::Address;
use crate::prompt::{read_line, run_select, LineOptions, PromptResult};
use crate::term::Console;

fn report_invalid<C: Console>(console: &mut C, reason: &str) -> PromptResult<()> {
    console.write(&format!("{}\r\n", reason.red()))?;
    Ok(())
}

/// Free-form text. Blank input (empty or whitespace-only after trim) is
/// re-prompted unless the empty submit takes a default.
pub fn prompt_string<C: Console>(
    console: &mut C,
    label: &str,
    default: Option<&str>,
) -> PromptResult<String> {
    let options = LineOptions {
        masked: false,
        default: default.map(str::to_string),
    };
    loop {
        let value = read_line(console, label, &options)?;
        if value.trim().is_empty() {
            report_invalid(console, "A value is required.")?;
            continue;
        }
        return Ok(value);
    }
}

/// Numeric input parsed as `T`. Unsigned `T` rejects negatives at the parse
/// step, so no separate sign check is needed.
pub fn prompt_number<C: Console, T: FromStr + Display + Copy>(
    console: &mut C,
    label: &str,
    default: Option<T>,
) -> PromptResult<T> {
    let options = LineOptions {
        masked: false,
        default: default.map(|v| v.to_string()),
    };
    loop {
        let value = read_line(console, label, &options)?;
        match value.trim().parse::<T>() {
            Ok(parsed) => return Ok(parsed),
            Err(_) => report_invalid(console, "Enter a whole number.")?,
        }
    }
}

/// Ethereum address input. Accepts any casing of a `0x` + 40 hex string and
/// returns the checksummed form.
pub fn prompt_address<C: Console>(
    console: &mut C,
    label: &str,
    default: Option<&Address>,
) -> PromptResult<Address> {
    let options = LineOptions {
        masked: false,
        default: default.map(|a| a.to_string()),
    };
    loop {
        let value = read_line(console, label, &options)?;
        match value.trim().parse::<Address>() {
            Ok(address) => return Ok(address),
            Err(err) => report_invalid(console, &err.to_string())?,
        }
    }
}

/// Yes/no confirmation. Accepts exactly `y` or `n` in either casing; an empty
/// submit takes `default`.
pub fn prompt_yes_no<C: Console>(
    console: &mut C,
    label: &str,
    default: bool,
) -> PromptResult<bool> {
    let hint = if default { "(Y/n)" } else { "(y/N)" };
    let options = LineOptions {
        masked: false,
        default: Some(if default { "y" } else { "n" }.to_string()),
    };
    loop {
        let value = read_line(console, &format!("{label} {hint}"), &options)?;
        match value.trim().to_ascii_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => report_invalid(console, "Answer y or n.")?,
        }
    }
}

/// Secret input: echoed as `*`, never written back in clear text.
pub fn prompt_secret<C: Console>(console: &mut C, label: &str) -> PromptResult<String> {
    let options = LineOptions {
        masked: true,
        default: None,
    };
    loop {
        let value = read_line(console, label, &options)?;
        if value.trim().is_empty() {
            report_invalid(console, "A value is required.")?;
            continue;
        }
        return Ok(value);
    }
}

/// Arrow-key selection over `options`, returning the chosen label.
pub fn prompt_select<C: Console>(
    console: &mut C,
    title: &str,
    options: &[&str],
) -> PromptResult<String> {
    let labels: Vec<String> = options.iter().map(|s| s.to_string()).collect();
    run_select(console, title, &labels)
}
