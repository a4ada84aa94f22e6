//! Console message helpers shared by every command.

use colored::Colorize;

const RULE: &str = "▬▬▬▬▬▬▬▬▬▬";

pub fn banner() {
    println!(
        "{}",
        r#"
░█▀▀░█▀█░█▀▄░█▀▀░█▀▀░█░█░█▀█░█▀█░█▀▄
░█▀▀░█░█░█▀▄░█░█░█▀▀░█▀█░█▀█░█░█░█░█
░▀░░░▀▀▀░▀░▀░▀▀▀░▀▀▀░▀░▀░▀░▀░▀░▀░▀▀░"#
            .green()
    );
    println!();
}

pub fn section_title(title: &str) {
    println!();
    println!("{} {title} {}", RULE.green(), RULE.green());
    println!();
}

pub fn section_subtitle(title: &str) {
    println!();
    println!("{} {title} {}", "▬▬".green(), RULE.green());
    println!();
}

pub fn confirmation(message: &str) {
    println!("{}  {message}", "✓".green());
}

pub fn warning(message: &str) {
    eprintln!("{} {message}", "⚠ Warning:".yellow());
}

pub fn error(message: &str) {
    eprintln!("{} {message}", "Error:".red());
}

/// Context line naming the target network.
pub fn info_with_chain(message: &str, chain: &str) {
    println!("{}", format!("{message} on {chain}").blue());
}

/// One `key: value` row of a summary block.
pub fn summary_row(key: &str, value: &str) {
    println!("  {} {value}", format!("{key}:").blue());
}

pub fn abort_notice() {
    println!();
    println!("{}", "Aborted.".yellow());
}
